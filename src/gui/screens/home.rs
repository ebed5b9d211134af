use std::convert::Infallible;

use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{button, column, container, row, text, text_input},
};

use crate::{
    core::shell::{BRAND, SEARCH_PLACEHOLDER},
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::{AlertKind, alert},
    },
};

/// Search landing page. Searching only echoes the query back.
#[derive(Debug, Clone, Default)]
pub struct HomeScreen {
    alert: Option<String>,
}

#[derive(Debug, Clone)]
pub enum HomeMessage {
    QueryChanged(String),
    ClearQuery,
    Search,
    FeelingLucky,
    DismissAlert,
}

impl Screen for HomeScreen {
    type Message = HomeMessage;
    type ParentMessage = Infallible;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let msg = ScreenMessage::<Self>::ScreenMessage;
        let search_box = row![
            text_input(SEARCH_PLACEHOLDER, state.shell.search_query())
                .on_input(move |query| msg(HomeMessage::QueryChanged(query)))
                .on_submit(msg(HomeMessage::Search))
                .padding(10),
            button("✕")
                .style(button::secondary)
                .on_press(msg(HomeMessage::ClearQuery)),
        ]
        .spacing(5)
        .align_y(Center);

        let mut content = column![
            text(BRAND).size(48),
            search_box,
            row![
                button("Search").on_press(msg(HomeMessage::Search)),
                button("I'm Feeling Lucky")
                    .style(button::secondary)
                    .on_press(msg(HomeMessage::FeelingLucky)),
            ]
            .spacing(20),
        ]
        .spacing(20)
        .max_width(600.0)
        .align_x(Center);

        if let Some(message) = &self.alert {
            content = content.push(
                column![
                    alert(message.clone(), AlertKind::Info),
                    button("OK").on_press(msg(HomeMessage::DismissAlert)),
                ]
                .spacing(10)
                .align_x(Center),
            );
        }

        container(content)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            HomeMessage::QueryChanged(query) => state.shell.set_search_query(query),
            HomeMessage::ClearQuery => state.shell.clear_search(),
            HomeMessage::Search => self.alert = Some(state.shell.submit_search()),
            HomeMessage::FeelingLucky => state.shell.feeling_lucky(),
            HomeMessage::DismissAlert => self.alert = None,
        }
        Task::none()
    }
}
