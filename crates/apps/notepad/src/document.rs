//! Editor document model and open/save flows over host services.

use platform_host::{FileDialogService, TextFileService};
use thiserror::Error;

/// Extension appended to saved paths that have none.
pub const DEFAULT_EXTENSION: &str = "txt";
const UNTITLED: &str = "untitled.txt";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Open/save failures reported to the user.
pub enum EditorError {
    /// The path dialog failed (not cancelled).
    #[error("file dialog failed: {0}")]
    Dialog(String),
    /// The document could not be read.
    #[error("could not open {path}: {message}")]
    Read {
        /// Requested path.
        path: String,
        /// Host error text.
        message: String,
    },
    /// The document could not be written.
    #[error("could not save {path}: {message}")]
    Write {
        /// Requested path.
        path: String,
        /// Host error text.
        message: String,
    },
}

/// Text buffer and the path it was last opened from or saved to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorDocument {
    /// Buffer contents.
    pub text: String,
    /// Backing path, `None` until the first open or save.
    pub path: Option<String>,
}

impl EditorDocument {
    /// Number of lines, counting an empty buffer as one line.
    pub fn line_count(&self) -> usize {
        self.text.lines().count().max(1)
    }

    /// Number of characters.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Path offered by the save dialog.
    pub fn suggested_path(&self) -> &str {
        self.path.as_deref().unwrap_or(UNTITLED)
    }
}

/// Appends `.txt` when the last path segment has no extension.
pub fn with_default_extension(path: &str) -> String {
    let path = path.trim();
    let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    if file_name.contains('.') {
        path.to_string()
    } else {
        format!("{path}.{DEFAULT_EXTENSION}")
    }
}

/// Asks for a path and reads it.
///
/// Returns `Ok(None)` when the dialog is cancelled.
///
/// # Errors
///
/// Returns [`EditorError`] when the dialog or the read fails.
pub async fn open_document(
    dialogs: &dyn FileDialogService,
    files: &dyn TextFileService,
) -> Result<Option<EditorDocument>, EditorError> {
    let Some(path) = dialogs.pick_open_path().await.map_err(EditorError::Dialog)? else {
        return Ok(None);
    };
    let text = files
        .read_text_file(&path)
        .await
        .map_err(|message| EditorError::Read {
            path: path.clone(),
            message,
        })?;
    Ok(Some(EditorDocument {
        text,
        path: Some(path),
    }))
}

/// Asks for a path and writes `document` there.
///
/// Returns the saved path, or `Ok(None)` when the dialog is cancelled.
///
/// # Errors
///
/// Returns [`EditorError`] when the dialog or the write fails.
pub async fn save_document(
    dialogs: &dyn FileDialogService,
    files: &dyn TextFileService,
    document: &EditorDocument,
) -> Result<Option<String>, EditorError> {
    let Some(path) = dialogs
        .pick_save_path(document.suggested_path())
        .await
        .map_err(EditorError::Dialog)?
    else {
        return Ok(None);
    };
    let path = with_default_extension(&path);
    files
        .write_text_file(&path, &document.text)
        .await
        .map_err(|message| EditorError::Write {
            path: path.clone(),
            message,
        })?;
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{MemoryTextFileService, QueuedFileDialogService};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn save_then_open_round_trips_text() {
        let files = MemoryTextFileService::default();
        let dialogs = QueuedFileDialogService::default();
        let document = EditorDocument {
            text: "first line\nsecond line".into(),
            path: None,
        };

        dialogs.push(Ok(Some("notes/todo".into())));
        let saved = block_on(save_document(&dialogs, &files, &document)).expect("save");
        assert_eq!(saved.as_deref(), Some("notes/todo.txt"));
        assert_eq!(dialogs.suggestions(), vec!["untitled.txt".to_string()]);

        dialogs.push(Ok(Some("notes/todo.txt".into())));
        let opened = block_on(open_document(&dialogs, &files))
            .expect("open")
            .expect("not cancelled");
        assert_eq!(opened.text, document.text);
        assert_eq!(opened.path.as_deref(), Some("notes/todo.txt"));
    }

    #[test]
    fn cancelled_dialogs_are_not_errors() {
        let files = MemoryTextFileService::default();
        let dialogs = QueuedFileDialogService::default();

        assert_eq!(block_on(open_document(&dialogs, &files)), Ok(None));
        assert_eq!(
            block_on(save_document(&dialogs, &files, &EditorDocument::default())),
            Ok(None)
        );
        assert!(files.is_empty());
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let files = MemoryTextFileService::default();
        let dialogs = QueuedFileDialogService::default();
        dialogs.push(Ok(Some("missing.txt".into())));

        let err = block_on(open_document(&dialogs, &files)).expect_err("missing");

        assert!(matches!(err, EditorError::Read { ref path, .. } if path == "missing.txt"));
    }

    #[test]
    fn dialog_failures_are_reported() {
        let files = MemoryTextFileService::default();
        let dialogs = QueuedFileDialogService::default();
        dialogs.push(Err("prompt blocked".into()));

        assert_eq!(
            block_on(open_document(&dialogs, &files)),
            Err(EditorError::Dialog("prompt blocked".into()))
        );
    }

    #[test]
    fn default_extension_only_when_missing() {
        assert_eq!(with_default_extension("todo"), "todo.txt");
        assert_eq!(with_default_extension("todo.md"), "todo.md");
        assert_eq!(with_default_extension("v1.2/readme"), "v1.2/readme.txt");
    }

    #[test]
    fn counts_describe_the_buffer() {
        let document = EditorDocument {
            text: "héllo\nworld".into(),
            path: Some("a.txt".into()),
        };
        assert_eq!(document.line_count(), 2);
        assert_eq!(document.char_count(), 11);
        assert_eq!(EditorDocument::default().line_count(), 1);
        assert_eq!(document.suggested_path(), "a.txt");
    }
}
