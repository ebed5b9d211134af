use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{Column, button, column, container, row, text, text_input},
};
use iced_widget::container::rounded_box;

use crate::{
    core::{ApiError, CreateProjectForm, ProjectsApi},
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::{AlertKind, alert},
    },
    models::{DraftField, Project},
};

/// Modal create-project form. Visibility is owned by the shell.
#[derive(Debug, Clone, Default)]
pub struct CreateDialogScreen {
    form: CreateProjectForm,
}

#[derive(Debug, Clone)]
pub enum DialogMessage {
    NameChanged(String),
    RowChanged(usize, DraftField, String),
    AddRow,
    RemoveRow(usize),
    Submit,
    Submitted(Result<Project, ApiError>),
    Close,
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    Created(Project),
    Closed,
}

impl CreateDialogScreen {
    pub fn set_shown(&mut self, shown: bool) {
        self.form.set_shown(shown);
    }

    pub fn is_shown(&self) -> bool {
        self.form.is_shown()
    }
}

impl Screen for CreateDialogScreen {
    type Message = DialogMessage;
    type ParentMessage = ParentMessage;

    fn view<'a>(&'a self, _state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let msg = ScreenMessage::<Self>::ScreenMessage;
        let form = &self.form;

        let header = row![
            container(text("Create New Project").size(22)).width(Length::Fill),
            button("✕")
                .style(button::text)
                .on_press(msg(DialogMessage::Close)),
        ]
        .align_y(Center);

        let mut body = Column::new().spacing(15);
        if let Some(error) = form.error() {
            body = body.push(alert(error, AlertKind::Danger));
        }
        body = body.push(column![
            text("Project Name"),
            text_input("", form.name())
                .on_input(move |name| msg(DialogMessage::NameChanged(name)))
                .on_submit(msg(DialogMessage::Submit))
                .padding(8),
        ]
        .spacing(5));

        let can_remove = form.can_remove_rows();
        let rows = form.rows().iter().enumerate().map(move |(index, draft)| {
            row![
                text_input("Key", &draft.key)
                    .on_input(move |key| {
                        msg(DialogMessage::RowChanged(index, DraftField::Key, key))
                    })
                    .padding(8),
                text_input("Value", &draft.value)
                    .on_input(move |value| {
                        msg(DialogMessage::RowChanged(index, DraftField::Value, value))
                    })
                    .padding(8),
                button("Remove")
                    .style(button::danger)
                    .on_press_maybe(can_remove.then(|| msg(DialogMessage::RemoveRow(index)))),
            ]
            .spacing(5)
            .align_y(Center)
            .into()
        });
        body = body.push(
            column![
                text("Attributes"),
                Column::with_children(rows).spacing(5),
                button("+ Add Attribute")
                    .style(button::secondary)
                    .on_press(msg(DialogMessage::AddRow)),
            ]
            .spacing(5),
        );

        let footer = row![
            container(
                button("Cancel")
                    .style(button::secondary)
                    .on_press(msg(DialogMessage::Close))
            )
            .width(Length::Fill),
            button(form.submit_label())
                .on_press_maybe((!form.is_submitting()).then(|| msg(DialogMessage::Submit))),
        ]
        .align_y(Center);

        container(column![header, body, footer].spacing(20))
            .width(560.0)
            .padding(20)
            .style(rounded_box)
            .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            DialogMessage::NameChanged(name) => self.form.set_name(name),
            DialogMessage::RowChanged(index, field, value) => {
                self.form.edit_row(index, field, value)
            }
            DialogMessage::AddRow => self.form.add_row(),
            DialogMessage::RemoveRow(index) => {
                self.form.remove_row(index);
            }
            DialogMessage::Submit => {
                if let Some(payload) = self.form.submit() {
                    return Task::perform(state.api.create_project(payload), |result| {
                        ScreenMessage::ScreenMessage(DialogMessage::Submitted(result))
                    });
                }
            }
            DialogMessage::Submitted(result) => {
                if let Some(project) = self.form.complete(result) {
                    return Task::done(ScreenMessage::ParentMessage(ParentMessage::Created(
                        project,
                    )));
                }
            }
            DialogMessage::Close => {
                return Task::done(ScreenMessage::ParentMessage(ParentMessage::Closed));
            }
        }
        Task::none()
    }
}
