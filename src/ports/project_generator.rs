use crate::domain::{AppError, ProjectRequest};

/// A strategy that materializes one project skeleton on disk.
///
/// Both project flavors share this seam; the dispatcher picks an
/// implementation from the explicit `ProjectKind` argument rather than from
/// ambient state.
pub trait ProjectGenerator {
    /// Generate the project described by `request` under the current directory.
    fn generate(&self, request: &ProjectRequest) -> Result<(), AppError>;
}
