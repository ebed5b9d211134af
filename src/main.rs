use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use ngs360::{
    ApiConfig, AttributeDraft, DraftField,
    config::DEFAULT_ORIGIN,
    core::{CreateProjectForm, HttpProjectsApi, ProjectDetail, ProjectsList, Route, render},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    Development,
    Production,
}

impl Default for Mode {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Mode::Development
        } else {
            Mode::Production
        }
    }
}

#[derive(Parser)]
#[command(name = "ngs360")]
#[command(about = "Browse and create NGS360 projects")]
struct Cli {
    /// Build mode; production talks to the configured API base
    #[arg(long, value_enum, default_value_t = Mode::default())]
    mode: Mode,

    /// API base URL used in production mode (defaults to /api)
    #[arg(long, env = "NGS360_API_BASE_URL", value_name = "URL")]
    api_base_url: Option<String>,

    /// Server that relative API paths are resolved against
    #[arg(long, env = "NGS360_ORIGIN", default_value = DEFAULT_ORIGIN, value_name = "URL")]
    origin: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the desktop window (default)
    Gui {
        /// Initial page, e.g. / or /projects or /projects/<id>
        #[arg(long, default_value = "/")]
        route: String,
    },
    /// Print all projects
    List,
    /// Print one project
    Show { id: String },
    /// Create a project from a name and key=value attributes
    Create {
        name: String,
        #[arg(value_name = "KEY=VALUE", value_parser = parse_attribute)]
        attributes: Vec<AttributeDraft>,
    },
}

fn parse_attribute(raw: &str) -> Result<AttributeDraft, String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got {raw:?}"))?;
    Ok(AttributeDraft::new(key, value))
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env("NGS360_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_logging(args.verbose);

    let config = ApiConfig::resolve(
        args.mode == Mode::Production,
        args.api_base_url.as_deref(),
    );
    tracing::debug!(?config, origin = %args.origin, "resolved api config");
    let api = HttpProjectsApi::new(config, &args.origin)?;

    let command = args.command.unwrap_or(Command::Gui {
        route: "/".to_string(),
    });
    let runtime = tokio::runtime::Runtime::new;
    match command {
        Command::Gui { route } => run_gui(api, Route::parse(&route)),
        Command::List => runtime()?.block_on(list(&api)),
        Command::Show { id } => runtime()?.block_on(show(&api, &id)),
        Command::Create { name, attributes } => {
            runtime()?.block_on(create(&api, name, attributes))
        }
    }
}

#[cfg(feature = "gui")]
fn run_gui(api: HttpProjectsApi, route: Route) -> anyhow::Result<()> {
    ngs360::gui::run(api, route)?;
    Ok(())
}

#[cfg(not(feature = "gui"))]
fn run_gui(_api: HttpProjectsApi, _route: Route) -> anyhow::Result<()> {
    anyhow::bail!("ngs360 was built without the gui feature; use list, show or create")
}

async fn list(api: &HttpProjectsApi) -> anyhow::Result<()> {
    let mut list = ProjectsList::new();
    list.load(api).await;
    print!("{}", render::projects_list(&list));
    match list.error() {
        Some(error) => anyhow::bail!("{error}"),
        None => Ok(()),
    }
}

async fn show(api: &HttpProjectsApi, id: &str) -> anyhow::Result<()> {
    let mut detail = ProjectDetail::new();
    detail.load(api, id).await;
    print!("{}", render::project_detail(&detail));
    match detail.error() {
        Some(error) => anyhow::bail!("{error}"),
        None => Ok(()),
    }
}

/// Drives the same form the dialog uses, one row per attribute.
async fn create(
    api: &HttpProjectsApi,
    name: String,
    attributes: Vec<AttributeDraft>,
) -> anyhow::Result<()> {
    let mut form = CreateProjectForm::new();
    form.set_shown(true);
    form.set_name(name);
    for (index, draft) in attributes.into_iter().enumerate() {
        if index > 0 {
            form.add_row();
        }
        form.edit_row(index, DraftField::Key, draft.key);
        form.edit_row(index, DraftField::Value, draft.value);
    }

    let Some(project) = form.submit_with(api).await else {
        anyhow::bail!("{}", form.error().unwrap_or("project was not created"));
    };
    let mut detail = ProjectDetail::new();
    detail.set_project_id(&project.id);
    detail.finish(Ok(project));
    print!("{}", render::project_detail(&detail));
    Ok(())
}
