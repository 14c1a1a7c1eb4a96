//! Text-file service contracts plus memory and no-op adapters.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use super::path::normalize_document_path;

/// Object-safe boxed future used by [`TextFileService`] async methods.
pub type TextFileFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service that reads and writes whole UTF-8 text documents.
pub trait TextFileService {
    /// Reads the full contents of the document at `path`.
    fn read_text_file<'a>(&'a self, path: &'a str) -> TextFileFuture<'a, Result<String, String>>;

    /// Replaces the contents of the document at `path`, creating it when missing.
    fn write_text_file<'a>(
        &'a self,
        path: &'a str,
        text: &'a str,
    ) -> TextFileFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Text-file service for hosts without any document storage.
pub struct NoopTextFileService;

impl NoopTextFileService {
    fn unsupported_error(op: &str) -> String {
        format!("text files unavailable: {op}")
    }
}

impl TextFileService for NoopTextFileService {
    fn read_text_file<'a>(&'a self, _path: &'a str) -> TextFileFuture<'a, Result<String, String>> {
        Box::pin(async { Err(Self::unsupported_error("read_text_file")) })
    }

    fn write_text_file<'a>(
        &'a self,
        _path: &'a str,
        _text: &'a str,
    ) -> TextFileFuture<'a, Result<(), String>> {
        Box::pin(async { Err(Self::unsupported_error("write_text_file")) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory document store keyed by normalized path.
pub struct MemoryTextFileService {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryTextFileService {
    /// Returns the number of stored documents.
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Returns whether no documents are stored.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}

impl TextFileService for MemoryTextFileService {
    fn read_text_file<'a>(&'a self, path: &'a str) -> TextFileFuture<'a, Result<String, String>> {
        Box::pin(async move {
            let path = normalize_document_path(path)?;
            self.inner
                .borrow()
                .get(&path)
                .cloned()
                .ok_or_else(|| format!("no such file: {path}"))
        })
    }

    fn write_text_file<'a>(
        &'a self,
        path: &'a str,
        text: &'a str,
    ) -> TextFileFuture<'a, Result<(), String>> {
        Box::pin(async move {
            let path = normalize_document_path(path)?;
            self.inner.borrow_mut().insert(path, text.to_string());
            Ok(())
        })
    }
}
