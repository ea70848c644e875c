use crate::session::models::SelectedFile;
use std::fs;
use std::path::Path;

/// File types the backend knows how to ingest.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "csv", "json", "docx", "pptx", "txt"];

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

pub fn is_supported(path: &Path) -> bool {
    SUPPORTED_EXTENSIONS.contains(&extension_of(path).as_str())
}

/// Best-effort MIME type for the multipart upload.
pub fn mime_type(path: &Path) -> &'static str {
    match extension_of(path).as_str() {
        "pdf" => "application/pdf",
        "csv" => "text/csv",
        "json" => "application/json",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}

/// Turns a dropped/chosen path list into a selection, keeping order and
/// silently dropping unsupported entries. No size validation happens here.
pub fn filter_selection(paths: &[String]) -> Vec<SelectedFile> {
    paths
        .iter()
        .filter(|p| is_supported(Path::new(p.as_str())))
        .map(|p| {
            let path = Path::new(p.as_str());
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("unknown")
                .to_string();
            let size = fs::metadata(path).map(|m| m.len()).ok();
            SelectedFile {
                path: p.clone(),
                file_name,
                size,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported(Path::new("/docs/report.PDF")));
        assert!(is_supported(Path::new("slides.pptx")));
        assert!(!is_supported(Path::new("archive.tar.gz")));
        assert!(!is_supported(Path::new("no_extension")));
    }

    #[test]
    fn test_mime_type_mapping() {
        assert_eq!(mime_type(Path::new("a.pdf")), "application/pdf");
        assert_eq!(mime_type(Path::new("a.txt")), "text/plain");
        assert_eq!(mime_type(Path::new("a.bin")), "application/octet-stream");
    }

    #[test]
    fn test_filter_selection_keeps_order_and_drops_unsupported() {
        let paths = vec![
            "/nonexistent/a.pdf".to_string(),
            "/nonexistent/b.exe".to_string(),
            "/nonexistent/c.csv".to_string(),
        ];
        let selection = filter_selection(&paths);
        assert_eq!(selection.len(), 2);
        assert_eq!(selection[0].file_name, "a.pdf");
        assert_eq!(selection[1].file_name, "c.csv");
        // Paths need not exist yet; size is best-effort.
        assert!(selection[0].size.is_none());
    }
}
