//! Diagnostics for the `patternsmith` binary.
//!
//! The library crates emit `tracing` events around name resolution,
//! template lookup and file writes; this module is the one place a
//! subscriber gets installed. Diagnostics go to stderr so generated-file
//! reports on stdout stay clean for `--output-format json`.
//!
//! Without `RUST_LOG`, `-q` keeps errors only, the default shows warnings,
//! and each `-v` lowers the threshold one step down to TRACE. Events from
//! third-party crates are filtered out unless `RUST_LOG` asks for them.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Targets that share the CLI-selected threshold.
const OWN_TARGETS: [&str; 3] = ["patternsmith", "patternsmith_core", "patternsmith_adapters"];

/// Install the stderr subscriber. Fails if one is already installed.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => EnvFilter::new(directives(threshold(args))),
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber already set: {e}"))
}

/// `target=level` for each of our crates, comma separated.
fn directives(threshold: LevelFilter) -> String {
    let level = threshold.to_string().to_ascii_lowercase();
    OWN_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn threshold(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::Cli;

    fn threshold_for(flags: &[&str]) -> LevelFilter {
        let argv = ["patternsmith"]
            .into_iter()
            .chain(flags.iter().copied())
            .chain(["list-templates"]);
        threshold(&Cli::try_parse_from(argv).unwrap().global)
    }

    #[test]
    fn warnings_show_without_flags() {
        assert_eq!(threshold_for(&[]), LevelFilter::WARN);
    }

    #[test]
    fn each_verbose_flag_lowers_the_threshold() {
        assert_eq!(threshold_for(&["-v"]), LevelFilter::INFO);
        assert_eq!(threshold_for(&["-vv"]), LevelFilter::DEBUG);
        assert_eq!(threshold_for(&["-vvv"]), LevelFilter::TRACE);
        assert_eq!(threshold_for(&["-vvvvvv"]), LevelFilter::TRACE);
    }

    #[test]
    fn quiet_keeps_errors_only() {
        assert_eq!(threshold_for(&["--quiet"]), LevelFilter::ERROR);
    }

    #[test]
    fn quiet_and_verbose_cannot_be_combined() {
        assert!(Cli::try_parse_from(["patternsmith", "-q", "-v", "list-templates"]).is_err());
    }

    #[test]
    fn library_crates_follow_the_binary() {
        let rendered = directives(LevelFilter::DEBUG);
        assert_eq!(
            rendered,
            "patternsmith=debug,patternsmith_core=debug,patternsmith_adapters=debug"
        );
        assert!(EnvFilter::try_new(&rendered).is_ok());
    }
}
