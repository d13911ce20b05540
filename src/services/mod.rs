pub mod archive;
pub mod download;
pub mod process;
mod shaded_jar;
mod spring_boot;

pub use shaded_jar::ShadedJarGenerator;
pub use spring_boot::SpringBootJarGenerator;
