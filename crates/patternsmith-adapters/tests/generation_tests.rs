//! End-to-end generation through the real adapters.

use std::fs;
use std::path::{Path, PathBuf};

use mockall::mock;
use patternsmith_adapters::{
    BufferedReporter, BuiltinTemplateStore, DirectoryTemplateStore, LocalFilesystem,
    MemoryFilesystem, ReportLevel, TemplateModelGenerator, TemplateTestGenerator,
};
use patternsmith_core::{
    domain::unresolved_placeholders,
    prelude::*,
};

mock! {
    pub Models {}

    impl ModelGenerator for Models {
        fn generate(&self, name: &str) -> StubResult<Option<PathBuf>>;
    }
}

fn layout(project_dir: &Path) -> ProjectLayout {
    ProjectLayout {
        project_dir: project_dir.to_path_buf(),
        ..ProjectLayout::default()
    }
}

fn memory_service(fs: &MemoryFilesystem, reporter: &BufferedReporter) -> GeneratorService {
    let layout = layout(Path::new("/app"));
    GeneratorService::new(
        NameResolver::new(layout.clone()),
        Box::new(BuiltinTemplateStore),
        Box::new(fs.clone()),
        Box::new(reporter.clone()),
    )
    .with_model_generator(Box::new(TemplateModelGenerator::new(
        NameResolver::new(layout),
        Box::new(BuiltinTemplateStore),
        Box::new(fs.clone()),
    )))
}

#[test]
fn plain_repository_with_builtin_stubs() {
    let fs = MemoryFilesystem::new();
    let reporter = BufferedReporter::new();

    let outcome = memory_service(&fs, &reporter)
        .generate(&GenerationRequest::new(EntityKind::Repository, "User"))
        .unwrap();

    assert!(outcome.is_created());
    assert_eq!(
        fs.list_files(),
        vec![PathBuf::from("/app/src/Repositories/User.rs")]
    );
    let content = fs.read_file("/app/src/Repositories/User.rs").unwrap();
    assert!(content.contains("pub struct User;"));
    assert!(unresolved_placeholders(&content).is_empty());
    assert_eq!(
        reporter.at(ReportLevel::Info),
        vec!["Repository file [/app/src/Repositories/User.rs] created successfully.".to_string()]
    );
}

#[test]
fn model_interface_repository_writes_model_main_and_interface() {
    let fs = MemoryFilesystem::new();
    let reporter = BufferedReporter::new();

    let outcome = memory_service(&fs, &reporter)
        .generate(
            &GenerationRequest::new(EntityKind::Repository, "User")
                .with_model("User")
                .with_interface(true),
        )
        .unwrap();

    let result = outcome.result().unwrap();
    assert_eq!(result.written_paths().len(), 2);
    assert_eq!(
        result.model_path(),
        Some(Path::new("/app/src/Models/User.rs"))
    );

    let main = fs.read_file("/app/src/Repositories/User.rs").unwrap();
    assert!(main.starts_with(
        "use crate::Models::User::User;\nuse crate::Repositories::Interfaces::UserInterface::UserInterface;\n"
    ));
    assert!(main.contains("user: User"));
    assert!(main.contains("impl UserInterface for User {}"));

    let interface = fs
        .read_file("/app/src/Repositories/Interfaces/UserInterface.rs")
        .unwrap();
    assert!(interface.contains("pub trait UserInterface {}"));
}

#[test]
fn rooted_keyword_model_compiles_and_is_importable() {
    let fs = MemoryFilesystem::new();
    let reporter = BufferedReporter::new();

    let outcome = memory_service(&fs, &reporter)
        .generate(&GenerationRequest::new(EntityKind::Repository, "TypeRepo").with_model("crate/Domain/Type"))
        .unwrap();

    assert_eq!(
        outcome.result().unwrap().model_path(),
        Some(Path::new("/app/src/Domain/Type.rs"))
    );

    let main = fs.read_file("/app/src/Repositories/TypeRepo.rs").unwrap();
    assert!(main.starts_with("use crate::Domain::Type::Type;\n"));
    assert!(main.contains("pub fn create(&mut self, type_: Type) -> usize {"));
    assert!(!main.contains("type: Type"));
}

#[test]
fn model_generator_is_called_with_raw_name() {
    let fs = MemoryFilesystem::new();
    let mut models = MockModels::new();
    models
        .expect_generate()
        .withf(|name| name == "Billing/Invoice")
        .times(1)
        .returning(|_| Ok(None));

    let service = GeneratorService::new(
        NameResolver::new(layout(Path::new("/app"))),
        Box::new(BuiltinTemplateStore),
        Box::new(fs.clone()),
        Box::new(BufferedReporter::new()),
    )
    .with_model_generator(Box::new(models));

    let outcome = service
        .generate(
            &GenerationRequest::new(EntityKind::Repository, "Invoice")
                .with_model("Billing/Invoice"),
        )
        .unwrap();

    assert_eq!(outcome.result().unwrap().model_path(), None);
    let main = fs.read_file("/app/src/Repositories/Invoice.rs").unwrap();
    assert!(main.contains("use crate::Models::Billing::Invoice::Invoice;"));
    assert!(main.contains("invoice: Invoice"));
}

#[test]
fn invalid_model_name_touches_nothing() {
    let fs = MemoryFilesystem::new();
    let reporter = BufferedReporter::new();

    let outcome = memory_service(&fs, &reporter)
        .generate(&GenerationRequest::new(EntityKind::Repository, "User").with_model("My Model"))
        .unwrap();

    assert!(!outcome.is_created());
    assert!(fs.list_files().is_empty());
    assert_eq!(
        reporter.at(ReportLevel::Error),
        vec!["Model name \"My Model\" contains invalid characters.".to_string()]
    );
}

#[test]
fn local_project_with_overrides_and_tests() {
    let project = tempfile::tempdir().unwrap();
    let stubs = project.path().join("stubs");
    fs::create_dir_all(&stubs).unwrap();
    fs::write(
        stubs.join("service.stub"),
        "// custom\npub struct {{ class }};\n",
    )
    .unwrap();

    let layout = layout(project.path());
    let reporter = BufferedReporter::new();
    let service = GeneratorService::new(
        NameResolver::new(layout.clone()),
        Box::new(DirectoryTemplateStore::new(&stubs)),
        Box::new(LocalFilesystem),
        Box::new(reporter.clone()),
    )
    .with_test_generator(Box::new(TemplateTestGenerator::new(
        &layout,
        "tests",
        Box::new(DirectoryTemplateStore::new(&stubs)),
        Box::new(LocalFilesystem),
    )));

    let outcome = service
        .generate(&GenerationRequest::new(EntityKind::Service, "Billing"))
        .unwrap();

    let result = outcome.result().unwrap();
    assert!(result.produced_test());
    assert_eq!(
        fs::read_to_string(project.path().join("src/Services/Billing.rs")).unwrap(),
        "// custom\npub struct Billing;\n"
    );
    assert!(project.path().join("tests/services_billing.rs").is_file());

    let again = service
        .generate(&GenerationRequest::new(EntityKind::Service, "Billing"))
        .unwrap();
    assert!(!again.is_created());
    assert_eq!(
        reporter.at(ReportLevel::Error),
        vec!["Service file already exists.".to_string()]
    );
}
