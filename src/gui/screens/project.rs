use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{Column, button, column, container, row, text},
};

use crate::{
    core::{
        ApiError, ProjectAction, ProjectDetail, ProjectsApi,
        format::{self, NO_ATTRIBUTES},
        project::DetailView,
    },
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::{AlertKind, alert, card, spinner},
    },
    models::Project,
};

#[derive(Debug, Clone, Default)]
pub struct ProjectScreen {
    detail: ProjectDetail,
}

#[derive(Debug, Clone)]
pub enum ProjectMessage {
    Loaded(Result<Project, ApiError>),
    Action(ProjectAction),
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    BackToProjects,
}

impl ProjectScreen {
    /// Shows project `id`, fetching it when the identifier changed.
    pub fn select(&mut self, id: &str, state: &AppState) -> Task<ScreenMessage<Self>> {
        if !self.detail.set_project_id(id) {
            return Task::none();
        }
        self.detail.begin();
        Task::perform(state.api.get_project(id), |result| {
            ScreenMessage::ScreenMessage(ProjectMessage::Loaded(result))
        })
    }
}

fn project_card<'a>(project: &'a Project) -> Element<'a, ScreenMessage<ProjectScreen>> {
    let summary = card(
        text(&project.name).size(22),
        row![
            text(format!("Project ID: {}", project.id)).width(Length::Fill),
            text(format!(
                "Created: {}",
                format::created_at(project.created_at.as_deref())
            )),
        ],
    );

    let attributes: Element<'a, ScreenMessage<ProjectScreen>> = if project.attributes.is_empty()
    {
        text(NO_ATTRIBUTES).into()
    } else {
        card(
            text("Attributes"),
            Column::with_children(project.attributes.iter().map(|(key, value)| {
                row![
                    text(key).width(Length::FillPortion(1)),
                    text(value).width(Length::FillPortion(3)),
                ]
                .into()
            }))
            .spacing(5),
        )
    };

    // Edit and Delete only log; there is no API behind them yet.
    let actions = card(
        text("Actions"),
        row![
            button(ProjectAction::Edit.label()).on_press(ScreenMessage::ScreenMessage(
                ProjectMessage::Action(ProjectAction::Edit)
            )),
            button(ProjectAction::Delete.label())
                .style(button::danger)
                .on_press(ScreenMessage::ScreenMessage(ProjectMessage::Action(
                    ProjectAction::Delete
                ))),
        ]
        .spacing(10),
    );

    column![summary, attributes, actions].spacing(20).into()
}

impl Screen for ProjectScreen {
    type Message = ProjectMessage;
    type ParentMessage = ParentMessage;

    fn view<'a>(&'a self, _state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let header = row![
            container(text("Project Details").size(28)).width(Length::Fill),
            button("Back to Projects")
                .style(button::secondary)
                .on_press(ScreenMessage::ParentMessage(ParentMessage::BackToProjects)),
        ]
        .align_y(Center);

        let body: Element<'a, ScreenMessage<Self>> = match self.detail.view() {
            DetailView::Spinner => spinner(),
            DetailView::Error(message) => alert(message, AlertKind::Danger),
            DetailView::Card(project) => project_card(project),
            DetailView::Blank => column![].into(),
        };
        column![header, body].spacing(20).into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            ProjectMessage::Loaded(result) => self.detail.finish(result),
            ProjectMessage::Action(action) => self.detail.trigger(action),
        }
        Task::none()
    }
}
