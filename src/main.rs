use clap::{Parser, ValueEnum};
use ktjar::{
    DEFAULT_JAVA_VERSION, DEFAULT_KOTLIN_VERSION, GenerateOptions, ProjectKind, ProjectRequest,
};

#[derive(Parser)]
#[command(name = "ktjar")]
#[command(version)]
#[command(
    about = "Scaffold buildable Maven Kotlin jar projects in the current directory",
    long_about = None
)]
struct Cli {
    /// Maven group identifier, e.g. com.example
    group_id: String,
    /// Maven artifact identifier; also the generated directory name
    artifact_id: String,
    /// Kotlin compiler and stdlib version
    #[arg(default_value = DEFAULT_KOTLIN_VERSION)]
    kotlin_version: String,
    /// JVM bytecode target version
    #[arg(default_value = DEFAULT_JAVA_VERSION)]
    java_version: String,
    /// Fully-qualified main class (defaults to <GROUP_ID>.HelloKt)
    main_class: Option<String>,
    /// Project flavor to generate
    #[arg(short, long, value_enum, default_value_t = KindArg::Shaded)]
    kind: KindArg,
    /// Override the template service endpoint (spring-boot flavor)
    #[arg(long, value_name = "URL")]
    template_service: Option<String>,
    /// Override the maven launcher used for archetype generation (shaded flavor)
    #[arg(long, value_name = "PROGRAM")]
    mvn: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    /// Plain library/CLI jar built with the maven shade plugin
    Shaded,
    /// Standalone spring-boot service jar
    SpringBoot,
}

impl From<KindArg> for ProjectKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Shaded => ProjectKind::Shaded,
            KindArg::SpringBoot => ProjectKind::SpringBoot,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let request = ProjectRequest::new(
        cli.group_id,
        cli.artifact_id,
        cli.kotlin_version,
        cli.java_version,
        cli.main_class,
    );
    let options =
        GenerateOptions { mvn_program: cli.mvn, template_service: cli.template_service };

    if let Err(e) = ktjar::generate(cli.kind.into(), &request, options) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
