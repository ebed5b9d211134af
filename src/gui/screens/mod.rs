pub mod create_dialog;
pub mod home;
pub mod not_found;
pub mod project;
pub mod projects;

use iced::{Element, Task};

use crate::{
    core::Route,
    gui::{AppState, Message},
};

#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug;
    type ParentMessage: std::fmt::Debug;
    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

/// The routed page below the navigation bar.
#[derive(Debug, Clone)]
pub enum ScreenData {
    Home(home::HomeScreen),
    Projects(projects::ProjectsScreen),
    Project(project::ProjectScreen),
    NotFound(not_found::NotFoundScreen),
}

impl ScreenData {
    /// Builds the page for `route` along with its on-mount fetch.
    pub fn mount(route: &Route, state: &AppState) -> (Self, Task<Message>) {
        match route {
            Route::Home => (ScreenData::Home(home::HomeScreen::default()), Task::none()),
            Route::Projects => {
                let (screen, task) = projects::ProjectsScreen::mount(state);
                (ScreenData::Projects(screen), task.map(Message::Projects))
            }
            Route::Project(id) => {
                let mut screen = project::ProjectScreen::default();
                let task = screen.select(id, state);
                (ScreenData::Project(screen), task.map(Message::Project))
            }
            Route::NotFound(path) => (
                ScreenData::NotFound(not_found::NotFoundScreen::new(path)),
                Task::none(),
            ),
        }
    }
}

impl Screen for ScreenData {
    type Message = Message;
    type ParentMessage = std::convert::Infallible;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        match self {
            ScreenData::Home(screen) => screen.view(state).map(Message::Home),
            ScreenData::Projects(screen) => screen.view(state).map(Message::Projects),
            ScreenData::Project(screen) => screen.view(state).map(Message::Project),
            ScreenData::NotFound(screen) => screen.view(state).map(Message::NotFound),
        }
        .map(ScreenMessage::ScreenMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        let task = match (self, message) {
            (ScreenData::Home(page), Message::Home(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page.update(msg, state).map(Message::Home),
                ScreenMessage::ParentMessage(never) => match never {},
            },
            (ScreenData::Projects(page), Message::Projects(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => {
                    page.update(msg, state).map(Message::Projects)
                }
                ScreenMessage::ParentMessage(projects::ParentMessage::OpenProject(id)) => {
                    Task::done(Message::Navigate(Route::Project(id)))
                }
            },
            (ScreenData::Project(page), Message::Project(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page.update(msg, state).map(Message::Project),
                ScreenMessage::ParentMessage(project::ParentMessage::BackToProjects) => {
                    Task::done(Message::Navigate(Route::Projects))
                }
            },
            (ScreenData::NotFound(_), Message::NotFound(msg)) => match msg {
                ScreenMessage::ScreenMessage(never) => match never {},
                ScreenMessage::ParentMessage(not_found::ParentMessage::GoHome) => {
                    Task::done(Message::Navigate(Route::Home))
                }
            },
            // Responses for a page that has since been replaced land here.
            _ => Task::none(),
        };
        task.map(ScreenMessage::ScreenMessage)
    }
}
