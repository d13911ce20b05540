use std::path::PathBuf;

use serde::Serialize;

/// Kotlin version the archetype and descriptor default to.
pub const DEFAULT_KOTLIN_VERSION: &str = "1.9.21";
/// JVM bytecode target the descriptor defaults to.
pub const DEFAULT_JAVA_VERSION: &str = "1.8";

/// Project flavor, selected explicitly at the call boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectKind {
    /// Plain library/CLI jar built with the maven shade plugin.
    Shaded,
    /// Standalone spring-boot service jar from an Initializr template.
    SpringBoot,
}

/// Identifying parameters for one generated project.
///
/// `artifact_id` is used verbatim as the generated directory name; callers
/// are responsible for passing a valid path segment.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectRequest {
    /// Maven group identifier, e.g. `com.example`.
    pub group_id: String,
    /// Maven artifact identifier; also the generated directory name.
    pub artifact_id: String,
    /// Kotlin compiler and stdlib version.
    pub kotlin_version: String,
    /// JVM bytecode target version.
    pub java_version: String,
    /// Fully-qualified main class referenced by the descriptor.
    pub main_class: String,
}

impl ProjectRequest {
    /// Build a request, defaulting the main class to `<group_id>.HelloKt`.
    pub fn new<S: Into<String>>(
        group_id: S,
        artifact_id: S,
        kotlin_version: S,
        java_version: S,
        main_class: Option<String>,
    ) -> Self {
        let group_id = group_id.into();
        let main_class = main_class.unwrap_or_else(|| format!("{}.HelloKt", group_id));
        Self {
            group_id,
            artifact_id: artifact_id.into(),
            kotlin_version: kotlin_version.into(),
            java_version: java_version.into(),
            main_class,
        }
    }

    /// Source directory fragment for the group id (`com.example` -> `com/example`).
    pub fn package_path(&self) -> PathBuf {
        self.group_id.split('.').collect()
    }
}
