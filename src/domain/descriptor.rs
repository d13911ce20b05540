//! Build-descriptor and entry-point rendering.
//!
//! Pure string production: a `ProjectRequest` in, the full text of the file
//! out. Writing to disk is the generator's job.

use minijinja::{Environment, Value};

use crate::domain::{AppError, ProjectKind, ProjectRequest};

const POM_SHADED: &str = include_str!("../templates/pom_shaded.xml.j2");
const POM_SPRING_BOOT: &str = include_str!("../templates/pom_spring_boot.xml.j2");
const HELLO_KT: &str = include_str!("../templates/hello.kt.j2");

fn template_name(kind: ProjectKind) -> &'static str {
    match kind {
        ProjectKind::Shaded => "pom_shaded",
        ProjectKind::SpringBoot => "pom_spring_boot",
    }
}

fn build_environment() -> Result<Environment<'static>, AppError> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);

    for (name, source) in [
        ("pom_shaded", POM_SHADED),
        ("pom_spring_boot", POM_SPRING_BOOT),
        ("hello_kt", HELLO_KT),
    ] {
        env.add_template(name, source)
            .map_err(|e| AppError::template(format!("Failed to register template '{}': {}", name, e)))?;
    }

    Ok(env)
}

fn render(name: &str, request: &ProjectRequest) -> Result<String, AppError> {
    let env = build_environment()?;
    let template = env
        .get_template(name)
        .map_err(|e| AppError::template(format!("Failed to load template '{}': {}", name, e)))?;

    template
        .render(Value::from_serialize(request))
        .map_err(|e| AppError::template(format!("Failed to render template '{}': {}", name, e)))
}

/// Render the full `pom.xml` body for the given project flavor.
pub fn render_pom(kind: ProjectKind, request: &ProjectRequest) -> Result<String, AppError> {
    render(template_name(kind), request)
}

/// Render the Kotlin entry-point source installed by the spring-boot flavor.
pub fn render_entry_point(request: &ProjectRequest) -> Result<String, AppError> {
    render("hello_kt", request)
}
