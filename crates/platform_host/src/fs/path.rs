//! Document-path normalization shared by text-file adapters.

/// Normalizes a document path into the canonical `/segment/segment` form.
///
/// Whitespace is trimmed, backslashes become `/`, and `.`/`..` segments are resolved. A path that
/// collapses to the root names no document and is rejected.
///
/// # Errors
///
/// Returns an error when the path is empty or resolves to `/`.
pub fn normalize_document_path(path: &str) -> Result<String, String> {
    let mut segments: Vec<&str> = Vec::new();
    let unified = path.trim().replace('\\', "/");
    for segment in unified.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    if segments.is_empty() {
        return Err(format!("`{}` does not name a document", path.trim()));
    }
    Ok(format!("/{}", segments.join("/")))
}

#[cfg(test)]
mod tests {
    use super::normalize_document_path;

    #[test]
    fn document_paths_collapse_to_canonical_form() {
        let cases = [
            ("notes.txt", "/notes.txt"),
            ("  /docs//todo.txt ", "/docs/todo.txt"),
            ("./docs/../todo.txt", "/todo.txt"),
            ("docs\\drafts\\a.txt", "/docs/drafts/a.txt"),
        ];

        for (input, expected) in cases {
            assert_eq!(
                normalize_document_path(input).as_deref(),
                Ok(expected),
                "input={input:?}"
            );
        }
    }

    #[test]
    fn root_like_paths_are_rejected() {
        for input in ["", "   ", "/", "/../..", "./"] {
            assert!(normalize_document_path(input).is_err(), "input={input:?}");
        }
    }
}
