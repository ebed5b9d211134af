use crate::{
    core::Route,
    gui::screens::{
        ScreenMessage, create_dialog::CreateDialogScreen, home::HomeScreen,
        not_found::NotFoundScreen, project::ProjectScreen, projects::ProjectsScreen,
    },
};

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Route),
    OpenDialog,
    UsernameChanged(String),
    Login,
    Home(ScreenMessage<HomeScreen>),
    Projects(ScreenMessage<ProjectsScreen>),
    Project(ScreenMessage<ProjectScreen>),
    NotFound(ScreenMessage<NotFoundScreen>),
    Dialog(ScreenMessage<CreateDialogScreen>),
}
