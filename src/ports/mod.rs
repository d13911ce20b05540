mod project_generator;

pub use project_generator::ProjectGenerator;
