//! Notice adapter backed by `window.alert`.

use platform_host::{NoticeFuture, NoticeLevel, NoticeService};

/// Formats the single-line alert text for a notice.
pub fn alert_text(level: NoticeLevel, title: &str, body: &str) -> String {
    let title = match level {
        NoticeLevel::Info => title.to_string(),
        NoticeLevel::Error => format!("Error: {title}"),
    };
    if body.trim().is_empty() {
        title
    } else {
        format!("{title}\n\n{body}")
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Browser notice adapter; the alert box blocks until dismissed.
pub struct WebNoticeService;

impl NoticeService for WebNoticeService {
    fn show_notice<'a>(
        &'a self,
        level: NoticeLevel,
        title: &'a str,
        body: &'a str,
    ) -> NoticeFuture<'a, Result<(), String>> {
        Box::pin(async move {
            let text = alert_text(level, title, body);

            #[cfg(target_arch = "wasm32")]
            {
                let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
                window
                    .alert_with_message(&text)
                    .map_err(|e| format!("alert failed: {e:?}"))
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = text;
                Ok(())
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_text_marks_errors_and_skips_blank_bodies() {
        assert_eq!(alert_text(NoticeLevel::Info, "Saved", ""), "Saved");
        assert_eq!(
            alert_text(NoticeLevel::Error, "Open failed", "no such file: /a.txt"),
            "Error: Open failed\n\nno such file: /a.txt"
        );
    }
}
