//! Shaded-jar project generation via the Kotlin maven archetype.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, ProjectKind, ProjectRequest, descriptor};
use crate::ports::ProjectGenerator;
use crate::services::process;

const DEFAULT_MVN_PROGRAM: &str = "mvn";

/// Generates a plain Kotlin jar project backed by the maven shade plugin.
///
/// The directory tree comes from the `kotlin-archetype-jvm` archetype run as
/// a subprocess; the generated `pom.xml` is then replaced with the shaded
/// descriptor.
#[derive(Debug, Clone)]
pub struct ShadedJarGenerator {
    mvn_program: String,
}

impl ShadedJarGenerator {
    pub fn new() -> Self {
        Self { mvn_program: DEFAULT_MVN_PROGRAM.to_string() }
    }

    /// Use a different maven launcher (tests substitute a stub here).
    pub fn with_mvn_program<S: Into<String>>(mut self, program: S) -> Self {
        self.mvn_program = program.into();
        self
    }

    fn archetype_args(request: &ProjectRequest) -> Vec<String> {
        vec![
            "archetype:generate".to_string(),
            "-DarchetypeGroupId=org.jetbrains.kotlin".to_string(),
            "-DarchetypeArtifactId=kotlin-archetype-jvm".to_string(),
            format!("-DarchetypeVersion={}", request.kotlin_version),
            format!("-DgroupId={}", request.group_id),
            format!("-DartifactId={}", request.artifact_id),
            "-Dversion=1.0-SNAPSHOT".to_string(),
            "-DinteractiveMode=false".to_string(),
        ]
    }
}

impl Default for ShadedJarGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectGenerator for ShadedJarGenerator {
    fn generate(&self, request: &ProjectRequest) -> Result<(), AppError> {
        println!(
            "Creating maven kotlin jar project with parameters: groupId: {}, artifactId: {}, kotlinVersion: {}, javaVersion: {}, mainClassName: {}",
            request.group_id,
            request.artifact_id,
            request.kotlin_version,
            request.java_version,
            request.main_class
        );

        process::run(&self.mvn_program, &Self::archetype_args(request))?;

        let pom = descriptor::render_pom(ProjectKind::Shaded, request)?;
        fs::write(Path::new(&request.artifact_id).join("pom.xml"), pom)?;

        println!("✅ Created shaded jar project at {}/", request.artifact_id);
        Ok(())
    }
}
