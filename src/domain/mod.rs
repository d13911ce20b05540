pub mod descriptor;
mod error;
mod request;

pub use error::AppError;
pub use request::{
    DEFAULT_JAVA_VERSION, DEFAULT_KOTLIN_VERSION, ProjectKind, ProjectRequest,
};
