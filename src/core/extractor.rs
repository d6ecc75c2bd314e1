use crate::models::ViewerError;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use zip::ZipArchive;

/// Entry name suffix a member must carry to be displayed.
/// Matched case-sensitively.
pub const TEXT_SUFFIX: &str = ".txt";

/// Archive extensions accepted from the open dialog and drag-and-drop.
/// `.gnd` is the product's own log-bundle extension (zip layout inside).
pub const ARCHIVE_EXTENSIONS: &[&str] = &["zip", "gnd"];

/// One qualifying member after decoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Entry name inside the archive, verbatim (not sanitized)
    pub name: String,
    pub body: String,
}

/// Ordered extraction result for a whole archive.
///
/// An empty `sections` list is the distinguished "no text members" outcome,
/// not an error; the caller decides how to inform the user.
#[derive(Debug, Clone, Default)]
pub struct ExtractedDocument {
    pub sections: Vec<Section>,
}

impl ExtractedDocument {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Concatenate all sections into the text a tab displays.
    /// Each section body is preceded by a header line embedding its entry name.
    pub fn full_text(&self) -> String {
        let mut out = String::new();
        for section in &self.sections {
            out.push_str(&format!("\n\u{1F4C4} {}\n", section.name));
            out.push_str(&section.body);
        }
        out
    }
}

/// Check whether a path carries a recognized archive extension
///
/// Returns true for `.zip` and `.gnd` (case-insensitive).
pub fn is_supported_archive(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let lower = e.to_ascii_lowercase();
            ARCHIVE_EXTENSIONS.contains(&lower.as_str())
        })
        .unwrap_or(false)
}

/// Extract every qualifying text member of the archive at `path`.
///
/// # Behavior
/// - Members qualify when their name ends in `.txt` and their uncompressed
///   size is greater than zero; directory entries never qualify
/// - Enumeration order is the archive's native directory order (no re-sorting)
/// - Decoding is strict UTF-8; a single undecodable member fails the whole
///   extraction, no partial document is returned
/// - The archive is opened read-only and released on every exit path
pub fn extract(path: &Path) -> Result<ExtractedDocument, ViewerError> {
    let file = File::open(path).map_err(|e| {
        ViewerError::ArchiveOpen(format!("Failed to open archive {}: {}", path.display(), e))
    })?;

    let mut archive = ZipArchive::new(file).map_err(|e| {
        ViewerError::ArchiveOpen(format!("Failed to read archive {}: {}", path.display(), e))
    })?;

    let mut sections = Vec::new();

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).map_err(|e| {
            ViewerError::ArchiveOpen(format!("Failed to read entry at index {}: {}", i, e))
        })?;

        if entry.is_dir() || entry.size() == 0 || !entry.name().ends_with(TEXT_SUFFIX) {
            continue;
        }

        let name = entry.name().to_string();
        let mut raw = Vec::with_capacity(entry.size() as usize);
        entry.read_to_end(&mut raw).map_err(|e| {
            ViewerError::ArchiveOpen(format!("Failed to read entry '{}': {}", name, e))
        })?;

        let body =
            String::from_utf8(raw).map_err(|_| ViewerError::Decode { entry: name.clone() })?;

        sections.push(Section { name, body });
    }

    Ok(ExtractedDocument { sections })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;
    use zip::write::FileOptions;
    use zip::ZipWriter;

    fn write_zip(path: &Path, entries: &[(&str, &[u8])]) {
        let file = File::create(path).unwrap();
        let mut zip = ZipWriter::new(file);
        let opts = FileOptions::<()>::default();
        for (name, data) in entries {
            zip.start_file(*name, opts).unwrap();
            zip.write_all(data).unwrap();
        }
        zip.finish().unwrap();
    }

    #[test]
    fn test_is_supported_archive() {
        assert!(is_supported_archive(Path::new("logs.zip")));
        assert!(is_supported_archive(Path::new("LOGS.ZIP")));
        assert!(is_supported_archive(Path::new("device.gnd")));
        assert!(is_supported_archive(Path::new("Device.GND")));
        assert!(!is_supported_archive(Path::new("notes.txt")));
        assert!(!is_supported_archive(Path::new("archive.tar.gz")));
        assert!(!is_supported_archive(Path::new("noextension")));
    }

    #[test]
    fn test_extract_filters_and_keeps_native_order() {
        let temp = TempDir::new().unwrap();
        let zip_path = temp.path().join("logs.zip");
        // Deliberately not alphabetical: order must follow the directory,
        // not a sort.
        write_zip(
            &zip_path,
            &[
                ("b.txt", b"second file"),
                ("a.txt", b"first file"),
                ("image.png", b"\x89PNG not text"),
                ("empty.txt", b""),
                ("sub/c.txt", b"nested"),
            ],
        );

        let doc = extract(&zip_path).unwrap();
        let names: Vec<&str> = doc.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["b.txt", "a.txt", "sub/c.txt"]);
        assert_eq!(doc.sections[0].body, "second file");
        assert_eq!(doc.sections[2].body, "nested");
    }

    #[test]
    fn test_extract_suffix_is_case_sensitive() {
        let temp = TempDir::new().unwrap();
        let zip_path = temp.path().join("logs.zip");
        write_zip(&zip_path, &[("REPORT.TXT", b"upper"), ("report.txt", b"lower")]);

        let doc = extract(&zip_path).unwrap();
        let names: Vec<&str> = doc.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["report.txt"]);
    }

    #[test]
    fn test_extract_no_qualifying_members_is_empty_not_error() {
        let temp = TempDir::new().unwrap();
        let zip_path = temp.path().join("logs.zip");
        write_zip(&zip_path, &[("image.png", b"png"), ("empty.txt", b"")]);

        let doc = extract(&zip_path).unwrap();
        assert!(doc.is_empty());
        assert_eq!(doc.full_text(), "");
    }

    #[test]
    fn test_full_text_headers_and_bodies_in_order() {
        let temp = TempDir::new().unwrap();
        let zip_path = temp.path().join("logs.zip");
        write_zip(&zip_path, &[("one.txt", b"alpha"), ("two.txt", b"beta")]);

        let doc = extract(&zip_path).unwrap();
        let text = doc.full_text();
        assert_eq!(text, "\n\u{1F4C4} one.txt\nalpha\n\u{1F4C4} two.txt\nbeta");

        let first_header = text.find("one.txt").unwrap();
        let second_header = text.find("two.txt").unwrap();
        assert!(first_header < second_header);
    }

    #[test]
    fn test_extract_invalid_utf8_fails_whole_archive() {
        let temp = TempDir::new().unwrap();
        let zip_path = temp.path().join("logs.zip");
        write_zip(
            &zip_path,
            &[("good.txt", b"fine"), ("bad.txt", &[0xC3, 0x28, 0xFF])],
        );

        let result = extract(&zip_path);
        match result {
            Err(ViewerError::Decode { entry }) => assert_eq!(entry, "bad.txt"),
            other => panic!("Expected Decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_extract_missing_file() {
        let result = extract(Path::new("/nonexistent/logs.zip"));
        assert!(matches!(result, Err(ViewerError::ArchiveOpen(_))));
    }

    #[test]
    fn test_extract_not_a_zip_container() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("fake.zip");
        std::fs::write(&path, b"this is not a zip file at all").unwrap();

        let result = extract(&path);
        assert!(matches!(result, Err(ViewerError::ArchiveOpen(_))));
    }

    #[test]
    fn test_extract_skips_directory_entries() {
        let temp = TempDir::new().unwrap();
        let zip_path = temp.path().join("logs.zip");

        let file = File::create(&zip_path).unwrap();
        let mut zip = ZipWriter::new(file);
        let opts = FileOptions::<()>::default();
        zip.add_directory("logs", opts).unwrap();
        zip.start_file("logs/run.txt", opts).unwrap();
        zip.write_all(b"contents").unwrap();
        zip.finish().unwrap();

        let doc = extract(&zip_path).unwrap();
        let names: Vec<&str> = doc.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["logs/run.txt"]);
    }
}
