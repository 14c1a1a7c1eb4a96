//! Iframe-backed page renderer for the browser panel.
//!
//! The renderer does not fetch content itself; the panel points an iframe at the accepted URL.
//! Loading fails up front when the browser reports it is offline.

use platform_host::{page_host, PageRenderer, PageRendererFuture, RenderedPage};

#[derive(Debug, Clone, Copy, Default)]
/// Page renderer that hands accepted URLs to an embedded frame.
pub struct FramePageRenderer;

fn rendered(url: &str) -> RenderedPage {
    RenderedPage {
        url: url.to_string(),
        title: page_host(url).unwrap_or_else(|| url.to_string()),
    }
}

impl PageRenderer for FramePageRenderer {
    fn load_page<'a>(
        &'a self,
        url: &'a str,
    ) -> PageRendererFuture<'a, Result<RenderedPage, String>> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
                if !window.navigator().on_line() {
                    return Err(format!("could not reach {url}: browser is offline"));
                }
            }

            Ok(rendered(url))
        })
    }
}
