//! `patternsmith publish-templates`: copy the built-in stubs into the
//! project so they can be customized.

use std::path::{Path, PathBuf};

use tracing::instrument;

use patternsmith_adapters::{BuiltinTemplateStore, LocalFilesystem};
use patternsmith_core::application::TemplateService;

use crate::{
    cli::{GlobalArgs, PublishArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

const DEFAULT_DIR: &str = "stubs";

#[instrument(skip_all)]
pub fn execute(
    args: PublishArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let dir = destination(args.dir.as_deref(), &config, &global.project_dir);
    if dir.is_file() {
        return Err(CliError::InvalidInput {
            message: format!("{} is a file, not a directory", dir.display()),
            source: None,
        });
    }

    // Always the built-ins, so a stale override cannot publish itself.
    let service = TemplateService::new(
        Box::new(BuiltinTemplateStore::new()),
        Box::new(LocalFilesystem::new()),
    );
    let written = service
        .publish(&dir, args.force)
        .with_cli_context(|| format!("publishing stubs to {}", dir.display()))?;

    if output.is_json() {
        return Ok(output.json(&written)?);
    }

    if written.is_empty() {
        output.warning(&format!(
            "All stubs already exist in {} (use --force to overwrite)",
            dir.display()
        ))?;
        return Ok(());
    }

    for path in &written {
        output.print(&format!("  {}", path.display()))?;
    }
    output.success(&format!(
        "Published {} stub(s) to {}",
        written.len(),
        dir.display()
    ))?;

    if config.templates.path.is_none() {
        output.info(&format!(
            "Set templates.path = \"{}\" in .patternsmith.toml to use them",
            args.dir
                .as_deref()
                .unwrap_or(Path::new(DEFAULT_DIR))
                .display()
        ))?;
    }

    Ok(())
}

/// `--dir`, else `templates.path`, else `stubs`; relative to the project.
fn destination(flag: Option<&Path>, config: &AppConfig, project_dir: &Path) -> PathBuf {
    let relative = flag
        .or(config.templates.path.as_deref())
        .unwrap_or(Path::new(DEFAULT_DIR));
    project_dir.join(relative)
}
