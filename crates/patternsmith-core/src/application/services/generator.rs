//! Generator Service - the main use case.
//!
//! One invocation turns a [`GenerationRequest`] into files on disk:
//! 1. Resolve the name and validate the bound model
//! 2. Refuse existing targets unless forced
//! 3. Generate the companion model
//! 4. Select, substitute and write the main file
//! 5. Write the interface file
//! 6. Generate the matching test
//! 7. Report the summary
//!
//! Validation failures (steps 1 and 2) are reported and end in
//! [`Outcome::Rejected`] before anything is touched. Later failures
//! propagate as errors; files already written stay where they are.

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, ModelGenerator, Reporter, TemplateStore, TestGenerator},
        services::file_writer::FileWriter,
    },
    domain::{
        GenerationRequest, GenerationResult, ModelBinding, NameResolver, ResolvedTarget,
        TemplateSelector, TemplateVariant, sort_imports, substitute, unresolved_placeholders,
    },
    error::{StubError, StubResult},
};

/// How a generation request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every requested file was written.
    Created(GenerationResult),
    /// The request failed validation and was reported; nothing was written.
    Rejected(StubError),
}

impl Outcome {
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }

    pub fn result(&self) -> Option<&GenerationResult> {
        match self {
            Self::Created(result) => Some(result),
            Self::Rejected(_) => None,
        }
    }
}

/// Targets that passed validation.
struct Plan {
    target: ResolvedTarget,
    model: Option<ModelBinding>,
    interface: Option<ResolvedTarget>,
}

/// Repository and service generator.
///
/// One service handles every [`EntityKind`](crate::domain::EntityKind); the
/// kind travels with the request.
pub struct GeneratorService {
    resolver: NameResolver,
    store: Box<dyn TemplateStore>,
    filesystem: Box<dyn Filesystem>,
    reporter: Box<dyn Reporter>,
    model_generator: Option<Box<dyn ModelGenerator>>,
    test_generator: Option<Box<dyn TestGenerator>>,
}

impl GeneratorService {
    /// Create a generator with the mandatory ports.
    ///
    /// Model generation and matching tests are attached with
    /// [`with_model_generator`](Self::with_model_generator) and
    /// [`with_test_generator`](Self::with_test_generator).
    pub fn new(
        resolver: NameResolver,
        store: Box<dyn TemplateStore>,
        filesystem: Box<dyn Filesystem>,
        reporter: Box<dyn Reporter>,
    ) -> Self {
        Self {
            resolver,
            store,
            filesystem,
            reporter,
            model_generator: None,
            test_generator: None,
        }
    }

    pub fn with_model_generator(mut self, generator: Box<dyn ModelGenerator>) -> Self {
        self.model_generator = Some(generator);
        self
    }

    /// Enable the matching-test capability.
    pub fn with_test_generator(mut self, generator: Box<dyn TestGenerator>) -> Self {
        self.test_generator = Some(generator);
        self
    }

    pub fn resolver(&self) -> &NameResolver {
        &self.resolver
    }

    /// Run one generation request.
    ///
    /// # Errors
    ///
    /// Template lookup, filesystem and collaborator failures. Validation
    /// problems are not errors: they come back as [`Outcome::Rejected`].
    #[instrument(
        skip_all,
        fields(kind = %request.kind(), name = %request.raw_name(), force = request.force())
    )]
    pub fn generate(&self, request: &GenerationRequest) -> StubResult<Outcome> {
        info!("Generating {}", request.kind());

        let plan = match self.plan(request) {
            Ok(plan) => plan,
            Err(e) if e.is_validation() => return Ok(self.reject(e)),
            Err(e) => return Err(e),
        };

        let mut result =
            GenerationResult::new(request.kind(), plan.target.file_path().to_path_buf());

        if let Some(model) = &plan.model {
            if let Some(path) = self.generate_model(model)? {
                result.record_model(path);
            }
        }

        let variant = TemplateSelector::select(
            request.kind(),
            request.with_interface_requested(),
            plan.model.is_some(),
        );
        let writer = FileWriter::new(self.filesystem.as_ref()).labelled(request.kind().label());
        let content = self.render(variant, &plan.target, plan.model.as_ref())?;
        writer.write(plan.target.file_path(), &content, request.force())?;

        if let Some(interface) = &plan.interface {
            let content = self.render(
                TemplateSelector::interface(),
                &plan.target,
                plan.model.as_ref(),
            )?;
            FileWriter::new(self.filesystem.as_ref()).write(
                interface.file_path(),
                &content,
                request.force(),
            )?;
            result.record_interface(interface.file_path().to_path_buf());
        }

        if let Some(tests) = &self.test_generator {
            if let Some(path) = tests.generate(&plan.target, request.kind())? {
                result.record_test(path);
            }
        }

        let summary = result.summary();
        info!(files = result.written_paths().len(), "Generation completed");
        self.reporter.info(&summary);

        Ok(Outcome::Created(result))
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Steps 1 and 2: every check that must pass before the first write.
    fn plan(&self, request: &GenerationRequest) -> StubResult<Plan> {
        let target = self.resolver.resolve(request.kind(), request.raw_name())?;
        let model = request
            .bound_model()
            .map(|raw| self.resolver.bind_model(raw))
            .transpose()?;

        debug!(
            class = %target.qualified_class_name(),
            path = %target.file_path().display(),
            "Name resolved"
        );

        FileWriter::new(self.filesystem.as_ref())
            .labelled(request.kind().label())
            .ensure_writable(target.file_path(), request.force())?;

        let interface = request
            .with_interface_requested()
            .then(|| target.interface_target());
        if let Some(interface) = &interface {
            FileWriter::new(self.filesystem.as_ref())
                .labelled("Interface file")
                .ensure_writable(interface.file_path(), request.force())?;
        }

        Ok(Plan {
            target,
            model,
            interface,
        })
    }

    fn reject(&self, error: StubError) -> Outcome {
        warn!(error = %error, "Request rejected");
        self.reporter.error(&error.to_string());
        Outcome::Rejected(error)
    }

    fn generate_model(&self, model: &ModelBinding) -> StubResult<Option<std::path::PathBuf>> {
        let generator =
            self.model_generator
                .as_ref()
                .ok_or(ApplicationError::AdapterNotConfigured {
                    name: "model generator",
                })?;

        debug!(model = %model.qualified(), "Generating companion model");
        generator.generate(model.raw())
    }

    fn render(
        &self,
        variant: TemplateVariant,
        target: &ResolvedTarget,
        model: Option<&ModelBinding>,
    ) -> StubResult<String> {
        let template = self.store.text(variant)?;
        let content = sort_imports(&substitute(&template, target, model));

        let leftover = unresolved_placeholders(&content);
        if !leftover.is_empty() {
            warn!(
                template = %variant,
                tokens = ?leftover,
                "Template left placeholders unresolved"
            );
        }

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::path::{Path, PathBuf};
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::application::ports::{
        MockFilesystem, MockModelGenerator, MockReporter, MockTemplateStore, MockTestGenerator,
    };
    use crate::domain::{DomainError, EntityKind};

    type Disk = Arc<Mutex<BTreeMap<PathBuf, String>>>;

    /// A mock filesystem backed by a shared map, pre-seeded with `existing`.
    fn mock_fs(existing: &[&str]) -> (MockFilesystem, Disk) {
        let disk: Disk = Arc::new(Mutex::new(
            existing
                .iter()
                .map(|p| (PathBuf::from(p), "existing".to_string()))
                .collect(),
        ));

        let mut fs = MockFilesystem::new();
        let exists = Arc::clone(&disk);
        fs.expect_exists()
            .returning(move |p| exists.lock().unwrap().contains_key(p));
        let read = Arc::clone(&disk);
        fs.expect_read_to_string().returning(move |p| {
            read.lock().unwrap().get(p).cloned().ok_or_else(|| {
                ApplicationError::FilesystemError {
                    path: p.to_path_buf(),
                    reason: "not found".into(),
                }
                .into()
            })
        });
        fs.expect_create_dir_all().returning(|_| Ok(()));
        let write = Arc::clone(&disk);
        fs.expect_write_file().returning(move |p, c| {
            write.lock().unwrap().insert(p.to_path_buf(), c.to_string());
            Ok(())
        });

        (fs, disk)
    }

    fn stub_store() -> MockTemplateStore {
        let mut store = MockTemplateStore::new();
        store.expect_text().returning(|variant| {
            Ok(match variant {
                TemplateVariant::Repository | TemplateVariant::Service => {
                    "// {{ namespace }}\npub struct {{ class }};\n"
                }
                TemplateVariant::RepositoryModel => {
                    "use {{ namespacedModel }};\npub struct {{ class }} { {{ modelVariable }}: {{ model }} }\n"
                }
                TemplateVariant::RepositoryWithInterface
                | TemplateVariant::ServiceWithInterface => {
                    "use {{ interfaceNamespace }}::{{ interface }};\npub struct {{ class }};\nimpl {{ interface }} for {{ class }} {}\n"
                }
                TemplateVariant::RepositoryModelWithInterface => {
                    "use {{ namespacedModel }};\nuse {{ interfaceNamespace }}::{{ interface }};\npub struct {{ class }} { {{ modelVariable }}: {{ model }} }\n"
                }
                TemplateVariant::InterfaceDeclaration => "pub trait {{ interface }} {}\n",
                TemplateVariant::Model | TemplateVariant::MatchingTest => "{{ class }}\n",
            }
            .to_string())
        });
        store
    }

    fn quiet_reporter() -> MockReporter {
        let mut reporter = MockReporter::new();
        reporter.expect_info().return_const(());
        reporter.expect_warn().return_const(());
        reporter.expect_error().return_const(());
        reporter
    }

    fn service(fs: MockFilesystem, reporter: MockReporter) -> GeneratorService {
        GeneratorService::new(
            NameResolver::default(),
            Box::new(stub_store()),
            Box::new(fs),
            Box::new(reporter),
        )
    }

    #[test]
    fn plain_repository_writes_one_file() {
        let (fs, disk) = mock_fs(&[]);
        let svc = service(fs, quiet_reporter());

        let outcome = svc
            .generate(&GenerationRequest::new(EntityKind::Repository, "User"))
            .unwrap();

        let disk = disk.lock().unwrap();
        assert_eq!(disk.len(), 1);
        let content = &disk[Path::new("./src/Repositories/User.rs")];
        assert!(content.contains("pub struct User;"));
        assert!(content.contains("crate::Repositories"));
        assert!(unresolved_placeholders(content).is_empty());

        let result = outcome.result().unwrap();
        assert!(!result.produced_interface());
        assert!(!result.produced_test());
    }

    #[test]
    fn model_and_interface_write_two_files() {
        let (fs, disk) = mock_fs(&[]);
        let mut models = MockModelGenerator::new();
        models
            .expect_generate()
            .withf(|name| name == "User")
            .times(1)
            .returning(|_| Ok(Some(PathBuf::from("./src/Models/User.rs"))));

        let svc = service(fs, quiet_reporter()).with_model_generator(Box::new(models));
        let request = GenerationRequest::new(EntityKind::Repository, "User")
            .with_model("User")
            .with_interface(true);

        let outcome = svc.generate(&request).unwrap();

        let disk = disk.lock().unwrap();
        assert_eq!(disk.len(), 2);
        let main = &disk[Path::new("./src/Repositories/User.rs")];
        assert!(main.contains("use crate::Models::User;"));
        assert!(main.contains("user: User"));
        assert!(main.contains("use crate::Repositories::Interfaces::UserInterface;"));
        let interface = &disk[Path::new("./src/Repositories/Interfaces/UserInterface.rs")];
        assert_eq!(interface, "pub trait UserInterface {}\n");

        let result = outcome.result().unwrap();
        assert!(result.produced_interface());
        assert_eq!(result.model_path(), Some(Path::new("./src/Models/User.rs")));
    }

    #[test]
    fn invalid_model_is_rejected_before_any_write() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().never();
        fs.expect_write_file().never();
        let mut models = MockModelGenerator::new();
        models.expect_generate().never();
        let mut reporter = MockReporter::new();
        reporter
            .expect_error()
            .withf(|m| m.contains("My Model"))
            .times(1)
            .return_const(());

        let svc = service(fs, reporter).with_model_generator(Box::new(models));
        let outcome = svc
            .generate(&GenerationRequest::new(EntityKind::Repository, "User").with_model("My Model"))
            .unwrap();

        assert_eq!(
            outcome,
            Outcome::Rejected(
                DomainError::InvalidModelName {
                    name: "My Model".into()
                }
                .into()
            )
        );
    }

    #[test]
    fn reserved_name_is_rejected() {
        let mut fs = MockFilesystem::new();
        fs.expect_write_file().never();
        let svc = service(fs, quiet_reporter());

        let outcome = svc
            .generate(&GenerationRequest::new(EntityKind::Service, "Billing/impl"))
            .unwrap();

        assert!(matches!(
            outcome,
            Outcome::Rejected(StubError::Domain(DomainError::ReservedName { .. }))
        ));
    }

    #[test]
    fn existing_target_is_reported_and_left_alone() {
        let (fs, disk) = mock_fs(&["./src/Repositories/User.rs"]);
        let mut reporter = MockReporter::new();
        reporter
            .expect_error()
            .withf(|m| m == "Repository file already exists.")
            .times(1)
            .return_const(());
        let svc = service(fs, reporter);

        let outcome = svc
            .generate(&GenerationRequest::new(EntityKind::Repository, "User"))
            .unwrap();

        assert!(!outcome.is_created());
        assert_eq!(disk.lock().unwrap()[Path::new("./src/Repositories/User.rs")], "existing");
    }

    #[test]
    fn existing_interface_blocks_main_file_too() {
        let (fs, disk) = mock_fs(&["./src/Services/Interfaces/BillingInterface.rs"]);
        let svc = service(fs, quiet_reporter());

        let outcome = svc
            .generate(&GenerationRequest::new(EntityKind::Service, "Billing").with_interface(true))
            .unwrap();

        assert!(!outcome.is_created());
        assert_eq!(disk.lock().unwrap().len(), 1);
    }

    #[test]
    fn force_overwrites_existing_target() {
        let (fs, disk) = mock_fs(&["./src/Repositories/User.rs"]);
        let svc = service(fs, quiet_reporter());

        let outcome = svc
            .generate(&GenerationRequest::new(EntityKind::Repository, "User").with_force(true))
            .unwrap();

        assert!(outcome.is_created());
        assert!(disk.lock().unwrap()[Path::new("./src/Repositories/User.rs")].contains("User;"));
    }

    #[test]
    fn model_without_generator_is_a_configuration_error() {
        let (fs, disk) = mock_fs(&[]);
        let svc = service(fs, quiet_reporter());

        let err = svc
            .generate(&GenerationRequest::new(EntityKind::Repository, "User").with_model("User"))
            .unwrap_err();

        assert!(matches!(
            err,
            StubError::Application(ApplicationError::AdapterNotConfigured { .. })
        ));
        assert!(disk.lock().unwrap().is_empty());
    }

    #[test]
    fn model_generator_errors_propagate_unmodified() {
        let (fs, _disk) = mock_fs(&[]);
        let mut models = MockModelGenerator::new();
        models.expect_generate().returning(|_| {
            Err(ApplicationError::Collaborator {
                name: "model generator",
                reason: "boom".into(),
            }
            .into())
        });

        let svc = service(fs, quiet_reporter()).with_model_generator(Box::new(models));
        let err = svc
            .generate(&GenerationRequest::new(EntityKind::Repository, "User").with_model("User"))
            .unwrap_err();

        assert_eq!(
            err,
            StubError::Application(ApplicationError::Collaborator {
                name: "model generator",
                reason: "boom".into(),
            })
        );
    }

    #[test]
    fn test_capability_records_test_and_summary() {
        let (fs, _disk) = mock_fs(&[]);
        let mut tests = MockTestGenerator::new();
        tests
            .expect_generate()
            .withf(|target, kind| target.class_name() == "Billing" && *kind == EntityKind::Service)
            .times(1)
            .returning(|_, _| Ok(Some(PathBuf::from("./tests/services_billing.rs"))));
        let mut reporter = MockReporter::new();
        reporter
            .expect_info()
            .withf(|m| {
                m == "Service file and test [./src/Services/Billing.rs,./tests/services_billing.rs] created successfully."
            })
            .times(1)
            .return_const(());

        let svc = service(fs, reporter).with_test_generator(Box::new(tests));
        let outcome = svc
            .generate(&GenerationRequest::new(EntityKind::Service, "Billing"))
            .unwrap();

        assert!(outcome.result().unwrap().produced_test());
    }

    #[test]
    fn missing_template_propagates_not_found() {
        let (fs, _disk) = mock_fs(&[]);
        let mut store = MockTemplateStore::new();
        store.expect_text().returning(|v| {
            Err(ApplicationError::TemplateNotFound {
                key: v.key().to_string(),
            }
            .into())
        });
        let svc = GeneratorService::new(
            NameResolver::default(),
            Box::new(store),
            Box::new(fs),
            Box::new(quiet_reporter()),
        );

        let err = svc
            .generate(&GenerationRequest::new(EntityKind::Repository, "User"))
            .unwrap_err();
        assert_eq!(err.category(), crate::error::ErrorCategory::NotFound);
    }
}
