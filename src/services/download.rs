//! Size-bounded template archive download.

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::{Client, Response};
use thiserror::Error;
use url::Url;

use crate::domain::AppError;

/// Connect timeout applied to every fetch, seconds.
pub const CONNECT_TIMEOUT_SECS: u64 = 30;
/// Whole-transfer timeout applied to every fetch, seconds.
pub const TOTAL_TIMEOUT_SECS: u64 = 300;

const COPY_BUFFER_BYTES: usize = 16 * 1024;

/// Parameters for one download.
///
/// Constructed immediately before a fetch and discarded after it. Headers are
/// sent in vector order.
#[derive(Debug)]
pub struct DownloadSpec<'a> {
    pub url: Url,
    pub headers: Vec<(&'static str, String)>,
    pub destination: &'a Path,
    /// Transfers that would exceed this many bytes are aborted.
    pub max_bytes: u64,
    pub connect_timeout: Duration,
    pub total_timeout: Duration,
}

/// Download failure classes, each with a distinct stable numeric code.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// Could not reach the host.
    #[error("Failed to connect to host: {0}")]
    Connect(String),

    /// Transfer stopped before the body completed.
    #[error("Partial file. Only a part of the file was transferred: {0}")]
    Partial(String),

    /// Server answered outside the 2xx range.
    #[error("Non-2xx status code returned: {0}")]
    HttpStatus(u16),

    /// Connect or overall deadline elapsed.
    #[error("Operation timeout: {0}")]
    Timeout(String),

    /// Response body would exceed the configured bound.
    #[error("Maximum file size exceeded: limit {limit} bytes")]
    SizeExceeded { limit: u64 },

    /// Anything else.
    #[error("{0}")]
    Other(String),
}

impl DownloadError {
    /// Stable code for each failure class (curl-compatible numbering).
    pub fn code(&self) -> i32 {
        match self {
            DownloadError::Connect(_) => 7,
            DownloadError::Partial(_) => 18,
            DownloadError::HttpStatus(_) => 22,
            DownloadError::Timeout(_) => 28,
            DownloadError::SizeExceeded { .. } => 63,
            DownloadError::Other(_) => -3,
        }
    }
}

impl From<DownloadError> for AppError {
    fn from(value: DownloadError) -> Self {
        AppError::Download { code: value.code(), message: value.to_string() }
    }
}

/// Stream `spec.url` into `spec.destination`, enforcing the byte bound.
///
/// The destination holds the complete body on success. On any failure the
/// partially-written destination is removed, so an oversized or truncated
/// file is never left behind.
pub fn download(spec: &DownloadSpec<'_>) -> Result<(), DownloadError> {
    let client = Client::builder()
        .connect_timeout(spec.connect_timeout)
        .timeout(spec.total_timeout)
        .build()
        .map_err(|e| DownloadError::Other(format!("Failed to create HTTP client: {}", e)))?;

    let mut request = client.get(spec.url.clone());
    for (name, value) in &spec.headers {
        request = request.header(*name, value.as_str());
    }

    let response = request.send().map_err(classify_send_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(DownloadError::HttpStatus(status.as_u16()));
    }

    copy_bounded(response, spec.destination, spec.max_bytes).inspect_err(|_| {
        let _ = fs::remove_file(spec.destination);
    })
}

fn copy_bounded(
    mut response: Response,
    destination: &Path,
    max_bytes: u64,
) -> Result<(), DownloadError> {
    let mut file = File::create(destination).map_err(|e| {
        DownloadError::Other(format!("Failed to create {}: {}", destination.display(), e))
    })?;

    let mut buffer = [0u8; COPY_BUFFER_BYTES];
    let mut received: u64 = 0;
    loop {
        let read = match response.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) => return Err(classify_read_error(e)),
        };
        received += read as u64;
        if received > max_bytes {
            return Err(DownloadError::SizeExceeded { limit: max_bytes });
        }
        file.write_all(&buffer[..read]).map_err(|e| {
            DownloadError::Other(format!("Failed to write {}: {}", destination.display(), e))
        })?;
    }

    file.flush().map_err(|e| {
        DownloadError::Other(format!("Failed to flush {}: {}", destination.display(), e))
    })
}

fn classify_send_error(err: reqwest::Error) -> DownloadError {
    if err.is_timeout() {
        DownloadError::Timeout(err.to_string())
    } else if err.is_connect() {
        DownloadError::Connect(err.to_string())
    } else {
        DownloadError::Other(err.to_string())
    }
}

fn classify_read_error(err: io::Error) -> DownloadError {
    match err.kind() {
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => DownloadError::Timeout(err.to_string()),
        io::ErrorKind::UnexpectedEof
        | io::ErrorKind::ConnectionReset
        | io::ErrorKind::ConnectionAborted => DownloadError::Partial(err.to_string()),
        _ => DownloadError::Other(err.to_string()),
    }
}
