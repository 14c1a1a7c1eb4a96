//! Modal pickers built on `window.prompt`.

use platform_host::{ColorPickerService, DialogFuture, FileDialogService};

/// Returns `Some(trimmed)` for a non-blank prompt answer.
fn accepted_answer(answer: Option<String>) -> Option<String> {
    answer
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(target_arch = "wasm32")]
fn prompt(message: &str, default: &str) -> Result<Option<String>, String> {
    let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
    window
        .prompt_with_message_and_default(message, default)
        .map(accepted_answer)
        .map_err(|e| format!("prompt failed: {e:?}"))
}

#[cfg(not(target_arch = "wasm32"))]
fn prompt(message: &str, default: &str) -> Result<Option<String>, String> {
    let _ = (message, default);
    Ok(accepted_answer(None))
}

#[derive(Debug, Clone, Copy, Default)]
/// Path dialog that asks for a document path in a prompt box.
pub struct WebFileDialogService;

impl FileDialogService for WebFileDialogService {
    fn pick_open_path<'a>(&'a self) -> DialogFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move { prompt("Open document", "") })
    }

    fn pick_save_path<'a>(
        &'a self,
        suggested: &'a str,
    ) -> DialogFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move { prompt("Save document as", suggested) })
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Color chooser that asks for a `#rrggbb` value in a prompt box.
pub struct WebColorPickerService;

impl ColorPickerService for WebColorPickerService {
    fn pick_color<'a>(
        &'a self,
        current: &'a str,
    ) -> DialogFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move { prompt("Pen color (#rrggbb)", current) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_answers_count_as_cancel() {
        assert_eq!(accepted_answer(None), None);
        assert_eq!(accepted_answer(Some("   ".into())), None);
        assert_eq!(
            accepted_answer(Some(" notes.txt ".into())),
            Some("notes.txt".into())
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn native_pickers_cancel() {
        let picked = futures::executor::block_on(WebFileDialogService.pick_save_path("a.txt"));
        assert_eq!(picked, Ok(None));
        let color = futures::executor::block_on(WebColorPickerService.pick_color("#000000"));
        assert_eq!(color, Ok(None));
    }
}
