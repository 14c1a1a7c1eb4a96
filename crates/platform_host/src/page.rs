//! Embeddable page-renderer contracts and URL normalization.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use url::Url;

/// Object-safe boxed future used by [`PageRenderer`].
pub type PageRendererFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// A page the renderer accepted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    /// Normalized absolute URL of the page.
    pub url: String,
    /// Human-readable title, falling back to the URL host.
    pub title: String,
}

/// Host service that fetches and renders a page into the browser panel.
pub trait PageRenderer {
    /// Loads `url`, which has already been normalized by [`normalize_page_url`].
    fn load_page<'a>(&'a self, url: &'a str)
        -> PageRendererFuture<'a, Result<RenderedPage, String>>;
}

/// Turns address-bar input into an absolute `http`/`https` URL.
///
/// Input that does not start with `http` gets an `http://` prefix.
///
/// # Errors
///
/// Returns an error for empty input, unparsable URLs, non-web schemes, and URLs without a host.
pub fn normalize_page_url(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("address is empty".to_string());
    }

    let candidate = if trimmed.starts_with("http") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    };
    let parsed = Url::parse(&candidate).map_err(|e| format!("invalid address `{trimmed}`: {e}"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(format!("unsupported scheme `{}`", parsed.scheme()));
    }
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(format!("address `{trimmed}` has no host"));
    }
    Ok(parsed.to_string())
}

/// Returns the host portion of a normalized URL, used as a fallback page title.
pub fn page_host(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string))
}

#[derive(Debug, Clone, Copy, Default)]
/// Page renderer for hosts without an embeddable renderer.
pub struct NoopPageRenderer;

impl PageRenderer for NoopPageRenderer {
    fn load_page<'a>(
        &'a self,
        _url: &'a str,
    ) -> PageRendererFuture<'a, Result<RenderedPage, String>> {
        Box::pin(async { Err("page renderer unavailable".to_string()) })
    }
}

#[derive(Debug, Clone, Default)]
/// Page renderer serving a fixed set of known pages; every other URL fails to load.
pub struct MemoryPageRenderer {
    pages: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryPageRenderer {
    /// Registers a page title for a normalized URL.
    pub fn insert_page(&self, url: &str, title: &str) {
        self.pages
            .borrow_mut()
            .insert(url.to_string(), title.to_string());
    }
}

impl PageRenderer for MemoryPageRenderer {
    fn load_page<'a>(
        &'a self,
        url: &'a str,
    ) -> PageRendererFuture<'a, Result<RenderedPage, String>> {
        Box::pin(async move {
            let title = self
                .pages
                .borrow()
                .get(url)
                .cloned()
                .ok_or_else(|| format!("could not reach {url}"))?;
            Ok(RenderedPage {
                url: url.to_string(),
                title,
            })
        })
    }
}
