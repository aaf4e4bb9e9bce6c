use clap::{Parser, Subcommand};

/// Top-level CLI entry point for the Yangine scaffolding tools.
#[derive(Parser, Debug)]
#[command(
    name = "yscaffold",
    about = "Component and project scaffolding for the Yangine engine",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOpts {
    /// Working root: the workspace for `copy`/`new`, a project for
    /// `component` (default: current directory)
    #[arg(long, global = true)]
    pub root: Option<std::path::PathBuf>,

    /// Configuration file (default: <root>/scaffold.toml)
    #[arg(long, global = true)]
    pub config: Option<std::path::PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a component header/source pair from the project templates
    Component(ComponentOpts),
    /// Copy an existing project under a new name
    Copy(CopyOpts),
    /// Bootstrap a new project from the engine templates
    New(NewOpts),
    /// Print version information
    Version,
}

impl Command {
    /// Subcommand name, used for the log file name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Component(_) => "component",
            Self::Copy(_) => "copy",
            Self::New(_) => "new",
            Self::Version => "version",
        }
    }
}

/// Options for the `component` subcommand.
#[derive(Parser, Debug, Clone, Default)]
pub struct ComponentOpts {
    /// Component class name (prompted if omitted)
    pub class_name: Option<String>,

    /// Directory under Source/Logic/Components (prompted if omitted; "" for
    /// the components root)
    pub dir: Option<String>,

    /// Create a missing directory without asking
    #[arg(short, long)]
    pub yes: bool,
}

/// Options for the `copy` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct CopyOpts {
    /// Project to copy (prompted if omitted)
    pub source: Option<String>,

    /// Name of the new project (prompted if omitted)
    pub name: Option<String>,

    /// Skip running the build-file generator
    #[arg(long = "no-generate", action = clap::ArgAction::SetFalse)]
    pub generate: bool,
}

/// Options for the `new` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct NewOpts {
    /// Name of the new project (prompted if omitted)
    pub name: Option<String>,

    /// Window title (default: the project name)
    #[arg(long)]
    pub title: Option<String>,

    /// Application layer class name (default: <name>_AppLayer)
    #[arg(long)]
    pub app_layer: Option<String>,

    /// Game layer class name (default: <name>_GameLayer)
    #[arg(long)]
    pub game_layer: Option<String>,

    /// Skip running the build-file generator
    #[arg(long = "no-generate", action = clap::ArgAction::SetFalse)]
    pub generate: bool,
}
