//! A stub `mvn` executable for exercising archetype generation offline.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use tempfile::TempDir;

/// Materializes a fake `mvn` on disk that records its arguments and creates
/// the archetype skeleton the real tool would leave behind.
pub(crate) struct FakeMvn {
    pub root: TempDir,
    pub bin_dir: PathBuf,
    pub log_file: PathBuf,
}

impl FakeMvn {
    pub(crate) fn new() -> Self {
        Self::with_script(SUCCESS_SCRIPT)
    }

    /// A variant that prints a diagnostic and exits nonzero.
    pub(crate) fn failing() -> Self {
        Self::with_script(FAILURE_SCRIPT)
    }

    fn with_script(body: &str) -> Self {
        let root = TempDir::new().expect("Failed to create temp dir for fake mvn");
        let bin_dir = root.path().join("bin");
        fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");
        let log_file = root.path().join("mvn.log");

        let script_path = bin_dir.join("mvn");
        let script = body.replace("__LOG_FILE__", &log_file.to_string_lossy());
        fs::write(&script_path, script).expect("Failed to write fake mvn script");

        let mut perms = fs::metadata(&script_path).expect("Failed to stat fake mvn").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&script_path, perms).expect("Failed to chmod fake mvn");

        Self { root, bin_dir, log_file }
    }

    /// The raw argument log, one invocation per line.
    pub(crate) fn logged_args(&self) -> String {
        fs::read_to_string(&self.log_file).unwrap_or_default()
    }
}

const SUCCESS_SCRIPT: &str = r#"#!/bin/sh
echo "$@" >> "__LOG_FILE__"

GROUP_ID=""
ARTIFACT_ID=""
for arg in "$@"; do
    case "$arg" in
        -DgroupId=*) GROUP_ID="${arg#-DgroupId=}" ;;
        -DartifactId=*) ARTIFACT_ID="${arg#-DartifactId=}" ;;
    esac
done

if [ -z "$GROUP_ID" ] || [ -z "$ARTIFACT_ID" ]; then
    echo "missing -DgroupId/-DartifactId" 1>&2
    exit 2
fi

# Recreate the tree the kotlin archetype generates.
PKG_DIR=$(echo "$GROUP_ID" | tr '.' '/')
mkdir -p "$ARTIFACT_ID/src/main/kotlin/$PKG_DIR"
mkdir -p "$ARTIFACT_ID/src/test/kotlin/$PKG_DIR"
echo "<project><!-- archetype placeholder --></project>" > "$ARTIFACT_ID/pom.xml"
echo "fun main() {}" > "$ARTIFACT_ID/src/main/kotlin/$PKG_DIR/Hello.kt"
echo "[INFO] BUILD SUCCESS"
exit 0
"#;

const FAILURE_SCRIPT: &str = r#"#!/bin/sh
echo "$@" >> "__LOG_FILE__"
echo "[INFO] Scanning for projects..."
echo "[ERROR] The desired archetype does not exist" 1>&2
exit 1
"#;
