//! ktjar: scaffold buildable Maven Kotlin jar projects.
//!
//! Two flavors share one generation seam: a shaded CLI/library jar created
//! through the Kotlin maven archetype, and a spring-boot service jar created
//! from a Spring Initializr template archive.

pub mod domain;
pub mod ports;
pub mod services;

use ports::ProjectGenerator;
use services::{ShadedJarGenerator, SpringBootJarGenerator};

pub use domain::{
    AppError, DEFAULT_JAVA_VERSION, DEFAULT_KOTLIN_VERSION, ProjectKind, ProjectRequest,
};

/// External-collaborator overrides for one generation run.
#[derive(Debug, Default)]
pub struct GenerateOptions {
    /// Maven launcher for the shaded flavor. Defaults to `mvn` on PATH.
    pub mvn_program: Option<String>,
    /// Template service endpoint for the spring-boot flavor.
    pub template_service: Option<String>,
}

/// Generate one project skeleton in the current directory.
pub fn generate(
    kind: ProjectKind,
    request: &ProjectRequest,
    options: GenerateOptions,
) -> Result<(), AppError> {
    match kind {
        ProjectKind::Shaded => {
            let mut generator = ShadedJarGenerator::new();
            if let Some(program) = options.mvn_program {
                generator = generator.with_mvn_program(program);
            }
            generator.generate(request)
        }
        ProjectKind::SpringBoot => {
            let mut generator = SpringBootJarGenerator::new();
            if let Some(url) = options.template_service {
                generator = generator.with_service_url(url);
            }
            generator.generate(request)
        }
    }
}
