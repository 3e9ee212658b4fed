//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "patternsmith",
    bin_name = "patternsmith",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Repository and service scaffolding for Rust projects",
    long_about = "patternsmith generates repository and service types, their \
                  interface traits, companion models and matching tests from \
                  customizable stubs.",
    after_help = "EXAMPLES:\n\
        \x20 patternsmith generate-repository User --model User --interface\n\
        \x20 patternsmith generate-service Billing/Invoice -i -t\n\
        \x20 patternsmith list-templates\n\
        \x20 patternsmith completions bash > /usr/share/bash-completion/completions/patternsmith",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a repository.
    #[command(
        name = "generate-repository",
        visible_alias = "repository",
        about = "Create a new repository",
        after_help = "EXAMPLES:\n\
            \x20 patternsmith generate-repository User\n\
            \x20 patternsmith generate-repository Admin.User --model User\n\
            \x20 patternsmith generate-repository User -m User -i -t"
    )]
    GenerateRepository(RepositoryArgs),

    /// Generate a service.
    #[command(
        name = "generate-service",
        visible_alias = "service",
        about = "Create a new service",
        after_help = "EXAMPLES:\n\
            \x20 patternsmith generate-service Billing\n\
            \x20 patternsmith generate-service Billing/Invoice --interface"
    )]
    GenerateService(ServiceArgs),

    /// List the stubs and where each one is read from.
    #[command(
        name = "list-templates",
        visible_alias = "ls",
        about = "List available templates",
        after_help = "EXAMPLES:\n\
            \x20 patternsmith list-templates\n\
            \x20 patternsmith ls --format json"
    )]
    ListTemplates(ListArgs),

    /// Copy the built-in stubs into the project for customization.
    #[command(
        name = "publish-templates",
        about = "Publish the built-in stubs",
        after_help = "EXAMPLES:\n\
            \x20 patternsmith publish-templates\n\
            \x20 patternsmith publish-templates --dir stubs --force"
    )]
    PublishTemplates(PublishArgs),

    /// Initialise a patternsmith configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 patternsmith init           # ./.patternsmith.toml\n\
            \x20 patternsmith init --global  # user config directory"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 patternsmith completions bash > ~/.local/share/bash-completion/completions/patternsmith\n\
            \x20 patternsmith completions zsh  > ~/.zfunc/_patternsmith\n\
            \x20 patternsmith completions fish > ~/.config/fish/completions/patternsmith.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the patternsmith configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 patternsmith config get project.root_namespace\n\
            \x20 patternsmith config list\n\
            \x20 patternsmith config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `patternsmith generate-repository`.
#[derive(Debug, Args)]
pub struct RepositoryArgs {
    /// Class name; `.` or `/` nest it in sub-namespaces.
    #[arg(value_name = "NAME", help = "Repository name, e.g. User or Admin.User")]
    pub name: String,

    /// Bind the repository to a model, creating the model if missing.
    #[arg(
        short = 'm',
        long = "model",
        value_name = "MODEL",
        help = "Model the repository works with"
    )]
    pub model: Option<String>,

    #[command(flatten)]
    pub common: GenerateArgs,
}

/// Arguments for `patternsmith generate-service`.
#[derive(Debug, Args)]
pub struct ServiceArgs {
    /// Class name; `.` or `/` nest it in sub-namespaces.
    #[arg(value_name = "NAME", help = "Service name, e.g. Billing or Billing/Invoice")]
    pub name: String,

    #[command(flatten)]
    pub common: GenerateArgs,
}

/// Flags shared by both generate commands.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Also create `Interfaces/<Name>Interface.rs` and implement it.
    #[arg(short = 'i', long = "interface", help = "Create an interface as well")]
    pub interface: bool,

    /// Also create a matching test.
    #[arg(short = 't', long = "test", help = "Create a matching test")]
    pub test: bool,

    /// Overwrite existing files (destructive).
    #[arg(long = "force", help = "Overwrite existing files")]
    pub force: bool,
}

// ── list-templates ────────────────────────────────────────────────────────────

/// Arguments for `patternsmith list-templates`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list-templates` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One key per line.
    List,
    /// JSON array.
    Json,
}

// ── publish-templates ─────────────────────────────────────────────────────────

/// Arguments for `patternsmith publish-templates`.
#[derive(Debug, Args)]
pub struct PublishArgs {
    /// Destination, relative to the project directory.
    ///
    /// Defaults to `templates.path` from the configuration, then `stubs`.
    #[arg(long = "dir", value_name = "DIR", help = "Where to write the stubs")]
    pub dir: Option<PathBuf>,

    /// Overwrite stubs that already exist.
    #[arg(long = "force", help = "Overwrite existing stubs")]
    pub force: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `patternsmith init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to the user config directory instead of the project.
    #[arg(long = "global", help = "Create global configuration")]
    pub global: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `patternsmith completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `patternsmith config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `project.root_namespace`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
