//! `patternsmith generate-repository` and `patternsmith generate-service`.
//!
//! Responsibility: translate CLI arguments into a `GenerationRequest`, wire
//! the generator to the local filesystem, and display the outcome. Naming,
//! validation and rendering live in the core crate.

use std::path::Path;

use tracing::{debug, instrument, warn};

use patternsmith_adapters::{
    DirectoryTemplateStore, LocalFilesystem, TemplateModelGenerator, TemplateTestGenerator,
};
use patternsmith_core::{
    application::{GeneratorService, Outcome},
    domain::{EntityKind, GenerationRequest, NameResolver},
};

use crate::{
    cli::{GenerateArgs, GlobalArgs, RepositoryArgs, ServiceArgs},
    commands::{template_dir, template_store},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute `patternsmith generate-repository`.
#[instrument(skip_all, fields(name = %args.name))]
pub fn repository(
    args: RepositoryArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let mut request = GenerationRequest::new(EntityKind::Repository, args.name);
    if let Some(model) = args.model {
        request = request.with_model(model);
    }
    execute(request, &args.common, &global, &config, output)
}

/// Execute `patternsmith generate-service`.
#[instrument(skip_all, fields(name = %args.name))]
pub fn service(
    args: ServiceArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let request = GenerationRequest::new(EntityKind::Service, args.name);
    execute(request, &args.common, &global, &config, output)
}

fn execute(
    request: GenerationRequest,
    common: &GenerateArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let request = request
        .with_interface(common.interface)
        .with_force(common.force);
    let with_tests = common.test || config.tests.enabled;

    debug!(
        kind = %request.kind(),
        interface = request.with_interface_requested(),
        model = request.bound_model().unwrap_or("none"),
        force = request.force(),
        tests = with_tests,
        "Generation requested"
    );

    warn_unrecognised_stubs(config, global, &output)?;

    let service = build_service(config, global, with_tests, output.clone());

    match service
        .generate(&request)
        .with_cli_context(|| format!("generating {}", request.kind()))?
    {
        Outcome::Created(result) => {
            if output.is_json() {
                output.json(&result)?;
            }
            Ok(())
        }
        Outcome::Rejected(err) => Err(CliError::Rejected(err)),
    }
}

/// Wire the generator and its collaborators to the local project.
fn build_service(
    config: &AppConfig,
    global: &GlobalArgs,
    with_tests: bool,
    output: OutputManager,
) -> GeneratorService {
    let project_dir = &global.project_dir;
    let layout = config.project.layout(project_dir);

    let models = TemplateModelGenerator::new(
        NameResolver::new(layout.clone()),
        template_store(config, project_dir),
        Box::new(LocalFilesystem::new()),
    );

    let mut service = GeneratorService::new(
        NameResolver::new(layout.clone()),
        template_store(config, project_dir),
        Box::new(LocalFilesystem::new()),
        Box::new(output),
    )
    .with_model_generator(Box::new(models));

    if with_tests {
        let mut tests = TemplateTestGenerator::new(
            &layout,
            &config.tests.root,
            template_store(config, project_dir),
            Box::new(LocalFilesystem::new()),
        );
        if let Some(name) = package_name(project_dir) {
            tests = tests.with_crate_name(name);
        }
        service = service.with_test_generator(Box::new(tests));
    }

    service
}

/// `[package] name` from the project's `Cargo.toml`, if it has one.
fn package_name(project_dir: &Path) -> Option<String> {
    let manifest = std::fs::read_to_string(project_dir.join("Cargo.toml")).ok()?;
    let table: toml::Table = match toml::from_str(&manifest) {
        Ok(table) => table,
        Err(e) => {
            debug!(error = %e, "Cargo.toml unreadable, using directory name");
            return None;
        }
    };
    table
        .get("package")?
        .get("name")?
        .as_str()
        .map(str::to_owned)
}

fn warn_unrecognised_stubs(
    config: &AppConfig,
    global: &GlobalArgs,
    output: &OutputManager,
) -> CliResult<()> {
    let Some(dir) = template_dir(config, &global.project_dir) else {
        return Ok(());
    };

    let stray = DirectoryTemplateStore::new(dir)
        .unrecognised()
        .with_cli_context(|| "scanning template overrides")?;

    for path in stray {
        warn!(path = %path.display(), "Stub ignored");
        output.warning(&format!(
            "Ignoring unrecognised stub {} (see `patternsmith list-templates`)",
            path.display()
        ))?;
    }

    Ok(())
}
