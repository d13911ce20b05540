//! Spring-boot jar project generation from a Spring Initializr template archive.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tempfile::NamedTempFile;
use url::Url;

use crate::domain::{AppError, ProjectKind, ProjectRequest, descriptor};
use crate::ports::ProjectGenerator;
use crate::services::archive;
use crate::services::download::{
    self, CONNECT_TIMEOUT_SECS, DownloadSpec, TOTAL_TIMEOUT_SECS,
};

const DEFAULT_SERVICE_URL: &str = "https://start.spring.io/starter.zip";
const BOOT_VERSION: &str = "3.2.3";
const INITIALIZR_JAVA_VERSION: &str = "17";
/// Template archives beyond this size are refused.
const MAX_ARCHIVE_BYTES: u64 = 10 * 1024 * 1024;
const ENTRY_POINT_FILE: &str = "Hello.kt";

/// Generates a standalone spring-boot service project.
///
/// The skeleton comes from the template service as a zip archive; the
/// descriptor is then replaced and the single generated application source is
/// renamed to the fixed entry-point file.
#[derive(Debug, Clone)]
pub struct SpringBootJarGenerator {
    service_url: String,
}

impl SpringBootJarGenerator {
    pub fn new() -> Self {
        Self { service_url: DEFAULT_SERVICE_URL.to_string() }
    }

    /// Use a different template service endpoint (tests and mirrors).
    pub fn with_service_url<S: Into<String>>(mut self, url: S) -> Self {
        self.service_url = url.into();
        self
    }

    fn starter_url(&self, request: &ProjectRequest) -> Result<Url, AppError> {
        let mut url = Url::parse(&self.service_url).map_err(|e| {
            AppError::Configuration(format!(
                "Invalid template service URL '{}': {}",
                self.service_url, e
            ))
        })?;

        url.query_pairs_mut()
            .append_pair("type", "maven-project")
            .append_pair("language", "kotlin")
            .append_pair("bootVersion", BOOT_VERSION)
            .append_pair("baseDir", &request.artifact_id)
            .append_pair("groupId", &request.group_id)
            .append_pair("artifactId", &request.artifact_id)
            .append_pair("name", &request.artifact_id)
            .append_pair("description", "Demo project for Spring Boot")
            .append_pair("packageName", &request.group_id)
            .append_pair("packaging", "jar")
            .append_pair("javaVersion", INITIALIZR_JAVA_VERSION);
        Ok(url)
    }

    fn fetch_skeleton(&self, request: &ProjectRequest) -> Result<(), AppError> {
        // Dropping the handle removes the archive on every exit path; a
        // failed delete is ignored.
        let archive_file = NamedTempFile::new()?;

        let spec = DownloadSpec {
            url: self.starter_url(request)?,
            headers: browser_headers(),
            destination: archive_file.path(),
            max_bytes: MAX_ARCHIVE_BYTES,
            connect_timeout: Duration::from_secs(CONNECT_TIMEOUT_SECS),
            total_timeout: Duration::from_secs(TOTAL_TIMEOUT_SECS),
        };
        download::download(&spec)?;
        println!("Downloaded project template from {}", self.service_url);

        archive::unpack(archive_file.path(), Path::new("."))
    }

    /// Rename the single generated application source to the entry-point file
    /// and replace its body.
    fn install_entry_point(&self, request: &ProjectRequest) -> Result<(), AppError> {
        let package_dir = PathBuf::from(&request.artifact_id)
            .join("src")
            .join("main")
            .join("kotlin")
            .join(request.package_path());

        let mut entries = Vec::new();
        for entry in fs::read_dir(&package_dir)? {
            entries.push(entry?.path());
        }

        let [generated] = entries.as_slice() else {
            let mut found: Vec<String> = entries
                .iter()
                .map(|path| path.file_name().unwrap_or_default().to_string_lossy().into_owned())
                .collect();
            found.sort();
            return Err(AppError::UnexpectedScaffold {
                dir: package_dir.display().to_string(),
                found,
            });
        };

        let target = package_dir.join(ENTRY_POINT_FILE);
        fs::rename(generated, &target)?;
        fs::write(&target, descriptor::render_entry_point(request)?)?;
        Ok(())
    }
}

impl Default for SpringBootJarGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectGenerator for SpringBootJarGenerator {
    fn generate(&self, request: &ProjectRequest) -> Result<(), AppError> {
        println!(
            "Creating maven kotlin spring-boot standalone jar project with parameters: groupId: {}, artifactId: {}, kotlinVersion: {}, javaVersion: {}, mainClassName: {}",
            request.group_id,
            request.artifact_id,
            request.kotlin_version,
            request.java_version,
            request.main_class
        );

        self.fetch_skeleton(request)?;

        let pom = descriptor::render_pom(ProjectKind::SpringBoot, request)?;
        fs::write(PathBuf::from(&request.artifact_id).join("pom.xml"), pom)?;

        self.install_entry_point(request)?;

        println!("✅ Created spring-boot jar project at {}/", request.artifact_id);
        Ok(())
    }
}

fn browser_headers() -> Vec<(&'static str, String)> {
    vec![
        (
            "sec-ch-ua",
            "\"Chromium\";v=\"122\", \"Not(A:Brand\";v=\"24\", \"Google Chrome\";v=\"122\""
                .to_string(),
        ),
        ("Referer", "https://start.spring.io/".to_string()),
        ("sec-ch-ua-mobile", "?0".to_string()),
        (
            "User-Agent",
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36"
                .to_string(),
        ),
        ("sec-ch-ua-platform", "\"macOS\"".to_string()),
    ]
}
