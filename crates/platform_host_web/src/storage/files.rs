//! Document storage for the editor, kept in `localStorage` under a path-keyed prefix.

use platform_host::{normalize_document_path, TextFileFuture, TextFileService};

/// Key prefix for stored documents.
pub const FILE_KEY_PREFIX: &str = "deskshell.files:";

/// Returns the storage key for a document path.
///
/// # Errors
///
/// Returns an error when the path does not name a document.
pub fn file_storage_key(path: &str) -> Result<String, String> {
    Ok(format!("{FILE_KEY_PREFIX}{}", normalize_document_path(path)?))
}

#[derive(Debug, Clone, Copy, Default)]
/// Browser document store. Paths are virtual; nothing touches a real filesystem.
pub struct WebTextFileService;

impl TextFileService for WebTextFileService {
    fn read_text_file<'a>(&'a self, path: &'a str) -> TextFileFuture<'a, Result<String, String>> {
        Box::pin(async move {
            let key = file_storage_key(path)?;

            #[cfg(target_arch = "wasm32")]
            {
                super::local_storage()?
                    .get_item(&key)
                    .map_err(|e| format!("localStorage get_item failed: {e:?}"))?
                    .ok_or_else(|| format!("no such file: {path}"))
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                Err(format!("no such file: {}", &key[FILE_KEY_PREFIX.len()..]))
            }
        })
    }

    fn write_text_file<'a>(
        &'a self,
        path: &'a str,
        text: &'a str,
    ) -> TextFileFuture<'a, Result<(), String>> {
        Box::pin(async move {
            let key = file_storage_key(path)?;

            #[cfg(target_arch = "wasm32")]
            {
                super::local_storage()?
                    .set_item(&key, text)
                    .map_err(|e| format!("could not save {path}: {e:?}"))
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = (key, text);
                Err("localStorage unavailable".to_string())
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_keys_use_normalized_paths() {
        assert_eq!(
            file_storage_key(" notes\\todo.txt "),
            Ok("deskshell.files:/notes/todo.txt".to_string())
        );
        assert_eq!(
            file_storage_key("a/./b/../c.txt"),
            Ok("deskshell.files:/a/c.txt".to_string())
        );
        assert!(file_storage_key("").is_err());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn native_fallback_reports_unavailable_storage() {
        let files = WebTextFileService;
        let write = futures::executor::block_on(files.write_text_file("a.txt", "hi"));
        assert_eq!(write, Err("localStorage unavailable".to_string()));
        let read = futures::executor::block_on(files.read_text_file("a.txt"));
        assert_eq!(read, Err("no such file: /a.txt".to_string()));
    }
}
