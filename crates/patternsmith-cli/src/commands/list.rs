//! Implementation of the `patternsmith list-templates` command.

use patternsmith_adapters::LocalFilesystem;
use patternsmith_core::application::{TemplateInfo, TemplateService};

use crate::{
    cli::{ListArgs, ListFormat, global::GlobalArgs},
    commands::template_store,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    args: ListArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = TemplateService::new(
        template_store(&config, &global.project_dir),
        Box::new(LocalFilesystem::new()),
    );
    let templates = service.list();

    // --output-format json wins over the table default.
    let format = if output.is_json() {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header("Available Templates:")?;
            for line in table_rows(&templates) {
                output.print(&line)?;
            }
        }
        ListFormat::List => {
            for t in &templates {
                output.print(&t.key)?;
            }
        }
        ListFormat::Json => output.json(&templates)?,
    }

    Ok(())
}

fn table_rows(templates: &[TemplateInfo]) -> Vec<String> {
    let width = templates.iter().map(|t| t.key.len()).max().unwrap_or(0);
    templates
        .iter()
        .map(|t| {
            format!(
                "  {:<width$}  {} ({})",
                t.key,
                t.description,
                t.origin,
                width = width
            )
        })
        .collect()
}
