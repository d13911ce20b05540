//! In-memory zip builder for mock template service responses.

use std::io::{Cursor, Write};

use zip::ZipWriter;
use zip::write::FileOptions;

/// Build a zip archive in memory. A `None` body marks a directory entry.
pub(crate) fn zip_bytes(entries: &[(&str, Option<&[u8]>)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default();

    for (name, contents) in entries {
        match contents {
            Some(bytes) => {
                writer.start_file(*name, options).expect("start zip entry");
                writer.write_all(bytes).expect("write zip entry");
            }
            None => {
                writer
                    .add_directory(name.trim_end_matches('/'), options)
                    .expect("add zip directory");
            }
        }
    }

    writer.finish().expect("finish zip archive").into_inner()
}
