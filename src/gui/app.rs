use iced::{
    Alignment::Center,
    Element, Length, Task, Theme,
    widget::{button, container, row, text, text_input},
};

use super::{
    AppState, Message,
    screens::{
        Screen, ScreenData, ScreenMessage,
        create_dialog::{CreateDialogScreen, ParentMessage as DialogParent},
    },
    widgets::{layout, modal},
};
use crate::core::{
    HttpProjectsApi, Route,
    shell::{BRAND, CREATE_BUTTON},
};

pub struct Ngs360App {
    state: AppState,
    screen: ScreenData,
    dialog: CreateDialogScreen,
}

/// Opens the window on `route` and blocks until it is closed.
pub fn run(api: HttpProjectsApi, route: Route) -> iced::Result {
    iced::application(
        move || Ngs360App::new(api.clone(), route.clone()),
        Ngs360App::update,
        Ngs360App::view,
    )
    .title(Ngs360App::title)
    .theme(Ngs360App::theme)
    .window_size((1100.0, 760.0))
    .run()
}

impl Ngs360App {
    pub fn new(api: HttpProjectsApi, route: Route) -> (Self, Task<Message>) {
        let state = AppState::new(api);
        let (screen, task) = ScreenData::mount(&route, &state);
        let mut app = Self {
            state,
            screen,
            dialog: CreateDialogScreen::default(),
        };
        app.state.shell.navigate(route);
        (app, task)
    }

    pub fn title(&self) -> String {
        format!("{BRAND} - {}", self.state.shell.route())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(route) => self.navigate(route),
            Message::OpenDialog => {
                self.state.shell.open_dialog();
                self.sync_dialog();
                Task::none()
            }
            Message::UsernameChanged(username) => {
                self.state.shell.set_username(username);
                Task::none()
            }
            Message::Login => {
                self.state.shell.login();
                Task::none()
            }
            Message::Dialog(ScreenMessage::ScreenMessage(msg)) => self
                .dialog
                .update(msg, &mut self.state)
                .map(Message::Dialog),
            Message::Dialog(ScreenMessage::ParentMessage(parent)) => {
                match parent {
                    DialogParent::Created(project) => self.state.shell.project_created(project),
                    DialogParent::Closed => self.state.shell.close_dialog(),
                }
                self.sync_dialog();
                Task::none()
            }
            message => self
                .screen
                .update(message, &mut self.state)
                .map(|msg| match msg {
                    ScreenMessage::ScreenMessage(msg) => msg,
                    ScreenMessage::ParentMessage(never) => match never {},
                }),
        }
    }

    /// Keeps the dialog's own flag in step with the shell, so it resets on open.
    fn sync_dialog(&mut self) {
        self.dialog.set_shown(self.state.shell.is_dialog_shown());
    }

    fn navigate(&mut self, route: Route) -> Task<Message> {
        self.state.shell.navigate(route.clone());
        // The detail page stays mounted across identifier changes.
        if let (ScreenData::Project(page), Route::Project(id)) = (&mut self.screen, &route) {
            return page.select(id, &self.state).map(Message::Project);
        }
        let (screen, task) = ScreenData::mount(&route, &self.state);
        self.screen = screen;
        task
    }

    fn navbar(&self) -> Element<'_, Message> {
        let created = self.state.shell.created_projects().len();
        row![
            button(text(BRAND).size(20))
                .style(button::text)
                .on_press(Message::Navigate(Route::Home)),
            button("Home")
                .style(button::text)
                .on_press(Message::Navigate(Route::Home)),
            button("Projects")
                .style(button::text)
                .on_press(Message::Navigate(Route::Projects)),
            container(button(CREATE_BUTTON).on_press(Message::OpenDialog)).width(Length::Fill),
            text(if created > 0 {
                format!("{created} created this session")
            } else {
                String::new()
            }),
            text_input("Username", self.state.shell.username())
                .on_input(Message::UsernameChanged)
                .width(180.0),
            button("Login")
                .style(button::secondary)
                .on_press(Message::Login),
        ]
        .spacing(10)
        .align_y(Center)
        .into()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let content = self
            .screen
            .view(&self.state)
            .map(|msg| match msg {
                ScreenMessage::ScreenMessage(msg) => msg,
                ScreenMessage::ParentMessage(never) => match never {},
            });
        let page = layout(self.navbar(), content);

        if self.dialog.is_shown() {
            modal(page, self.dialog.view(&self.state).map(Message::Dialog))
        } else {
            page
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}
