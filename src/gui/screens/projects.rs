use iced::{
    Element, Length, Task,
    widget::{Column, button, column, container, row, scrollable, text},
};

use crate::{
    core::{
        ApiError, ProjectsApi, ProjectsList,
        projects::{COLUMNS, EMPTY_NOTICE, ListView, ProjectRow},
    },
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::{AlertKind, alert, spinner},
    },
    models::Project,
};

#[derive(Debug, Clone, Default)]
pub struct ProjectsScreen {
    list: ProjectsList,
}

#[derive(Debug, Clone)]
pub enum ProjectsMessage {
    Loaded(Result<Vec<Project>, ApiError>),
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    OpenProject(String),
}

impl ProjectsScreen {
    /// New list page with its one list request already issued.
    pub fn mount(state: &AppState) -> (Self, Task<ScreenMessage<Self>>) {
        let mut screen = Self::default();
        screen.list.begin();
        let task = Task::perform(state.api.list_projects(), |result| {
            ScreenMessage::ScreenMessage(ProjectsMessage::Loaded(result))
        });
        (screen, task)
    }
}

fn cell<'a, M: 'a>(content: impl Into<Element<'a, M>>, portion: u16) -> Element<'a, M> {
    container(content).width(Length::FillPortion(portion)).padding(5).into()
}

fn table_row<'a>(row: ProjectRow) -> Element<'a, ScreenMessage<ProjectsScreen>> {
    let attributes = Column::with_children(row.attributes.into_iter().map(|line| text(line).into()));
    button(row![
        cell(text(row.id.clone()), 2),
        cell(text(row.name), 2),
        cell(attributes, 3),
        cell(text(row.created_at), 2),
    ])
    .style(button::text)
    .width(Length::Fill)
    .on_press(ScreenMessage::ParentMessage(ParentMessage::OpenProject(row.id)))
    .into()
}

impl Screen for ProjectsScreen {
    type Message = ProjectsMessage;
    type ParentMessage = ParentMessage;

    fn view<'a>(&'a self, _state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let body: Element<'a, ScreenMessage<Self>> = match self.list.view() {
            ListView::Spinner => spinner(),
            ListView::Error(message) => alert(message, AlertKind::Danger),
            ListView::Empty => alert(EMPTY_NOTICE, AlertKind::Info),
            ListView::Table(rows) => {
                let header = row![
                    cell(text(COLUMNS[0]), 2),
                    cell(text(COLUMNS[1]), 2),
                    cell(text(COLUMNS[2]), 3),
                    cell(text(COLUMNS[3]), 2),
                ];
                let rows = Column::with_children(rows.into_iter().map(table_row)).spacing(2);
                column![header, scrollable(rows)].spacing(5).into()
            }
        };
        column![text("Projects").size(28), body].spacing(20).into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            ProjectsMessage::Loaded(result) => self.list.finish(result),
        }
        Task::none()
    }
}
