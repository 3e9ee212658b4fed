//! Flags accepted before or after any subcommand.
//!
//! They are flattened into [`super::Cli`] with `global = true`, so
//! `patternsmith -C app repository User` and
//! `patternsmith repository User -C app` mean the same thing.

use clap::Args;
use std::path::PathBuf;

/// Flags shared by every subcommand.
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Diagnostic detail on stderr; repeat for more.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "More diagnostics on stderr (-v, -vv, -vvv)",
        long_help = "Raise the diagnostic level printed to stderr:
    (none)  - warnings and errors
    -v      - which files are resolved and written
    -vv     - template lookup and placeholder substitution
    -vvv    - everything
RUST_LOG, when set, replaces this entirely."
    )]
    pub verbose: u8,

    /// Print nothing on success; rejections and failures still reach stderr.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only report errors"
    )]
    pub quiet: bool,

    /// Plain stderr and stdout, also switched on by a non-empty `NO_COLOR`.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Never emit ANSI colors"
    )]
    pub no_color: bool,

    /// Read settings from this file alone, skipping the user-level and
    /// `.patternsmith.toml` files.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Use this settings file only"
    )]
    pub config: Option<PathBuf>,

    /// Directory the layout is resolved against; generated files land under
    /// its source root.
    #[arg(
        short = 'C',
        long = "project-dir",
        global = true,
        value_name = "DIR",
        default_value = ".",
        help = "Project to generate into"
    )]
    pub project_dir: PathBuf,

    /// Rendering of command results. `auto` defers to `output.format` in the
    /// settings, then to whether stdout is a terminal.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Result rendering"
    )]
    pub output_format: OutputFormat,
}

/// Result rendering selected by `--output-format` or `output.format`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Colored on a terminal, plain otherwise.
    #[default]
    Auto,
    /// Colored status lines.
    Human,
    /// Status lines without escape codes.
    Plain,
    /// One JSON document on stdout.
    Json,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::Cli;

    fn parse(argv: &[&str]) -> GlobalArgs {
        Cli::try_parse_from(argv).unwrap().global
    }

    #[test]
    fn flags_work_on_either_side_of_the_subcommand() {
        let before = parse(&["patternsmith", "-C", "app", "--output-format", "json", "repository", "User"]);
        let after = parse(&["patternsmith", "repository", "User", "-C", "app", "--output-format", "json"]);

        assert_eq!(before.project_dir, PathBuf::from("app"));
        assert_eq!(after.project_dir, before.project_dir);
        assert_eq!(after.output_format, OutputFormat::Json);
    }

    #[test]
    fn project_dir_defaults_to_cwd() {
        let args = parse(&["patternsmith", "service", "Billing"]);
        assert_eq!(args.project_dir, PathBuf::from("."));
        assert_eq!(args.output_format, OutputFormat::Auto);
        assert!(args.config.is_none());
    }

    #[test]
    fn unknown_output_format_is_rejected() {
        assert!(Cli::try_parse_from(["patternsmith", "--output-format", "yaml", "list-templates"]).is_err());
    }
}
