//! Modal picker contracts: file-path dialogs and the color chooser.
//!
//! Every picker resolves to `Ok(None)` when the user cancels. Callers treat cancellation as a
//! no-op; only `Err` values are failures.

use std::{cell::RefCell, collections::VecDeque, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by dialog services.
pub type DialogFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for choosing document paths.
pub trait FileDialogService {
    /// Asks the user for an existing document to open.
    fn pick_open_path<'a>(&'a self) -> DialogFuture<'a, Result<Option<String>, String>>;

    /// Asks the user where to save a document, pre-filled with `suggested`.
    fn pick_save_path<'a>(
        &'a self,
        suggested: &'a str,
    ) -> DialogFuture<'a, Result<Option<String>, String>>;
}

/// Host service for choosing a drawing color as a `#rrggbb` string.
pub trait ColorPickerService {
    /// Asks the user for a color, starting from `current`.
    fn pick_color<'a>(
        &'a self,
        current: &'a str,
    ) -> DialogFuture<'a, Result<Option<String>, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// File dialog that always reports cancellation.
pub struct NoopFileDialogService;

impl FileDialogService for NoopFileDialogService {
    fn pick_open_path<'a>(&'a self) -> DialogFuture<'a, Result<Option<String>, String>> {
        Box::pin(async { Ok(None) })
    }

    fn pick_save_path<'a>(
        &'a self,
        _suggested: &'a str,
    ) -> DialogFuture<'a, Result<Option<String>, String>> {
        Box::pin(async { Ok(None) })
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Color picker that always reports cancellation.
pub struct NoopColorPickerService;

impl ColorPickerService for NoopColorPickerService {
    fn pick_color<'a>(
        &'a self,
        _current: &'a str,
    ) -> DialogFuture<'a, Result<Option<String>, String>> {
        Box::pin(async { Ok(None) })
    }
}

/// One scripted answer for a queued dialog.
pub type DialogResponse = Result<Option<String>, String>;

#[derive(Debug, Clone, Default)]
/// Dialog adapter that replays scripted responses in order.
///
/// An exhausted queue behaves like a cancelled dialog. Save prompts record the suggested name so
/// tests can assert on it.
pub struct QueuedFileDialogService {
    responses: Rc<RefCell<VecDeque<DialogResponse>>>,
    suggestions: Rc<RefCell<Vec<String>>>,
}

impl QueuedFileDialogService {
    /// Appends a response to the replay queue.
    pub fn push(&self, response: DialogResponse) {
        self.responses.borrow_mut().push_back(response);
    }

    /// Returns the suggested names seen by [`FileDialogService::pick_save_path`].
    pub fn suggestions(&self) -> Vec<String> {
        self.suggestions.borrow().clone()
    }

    fn next(&self) -> DialogResponse {
        self.responses.borrow_mut().pop_front().unwrap_or(Ok(None))
    }
}

impl FileDialogService for QueuedFileDialogService {
    fn pick_open_path<'a>(&'a self) -> DialogFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move { self.next() })
    }

    fn pick_save_path<'a>(
        &'a self,
        suggested: &'a str,
    ) -> DialogFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move {
            self.suggestions.borrow_mut().push(suggested.to_string());
            self.next()
        })
    }
}

#[derive(Debug, Clone, Default)]
/// Color picker that replays scripted responses in order.
pub struct QueuedColorPickerService {
    responses: Rc<RefCell<VecDeque<DialogResponse>>>,
}

impl QueuedColorPickerService {
    /// Appends a response to the replay queue.
    pub fn push(&self, response: DialogResponse) {
        self.responses.borrow_mut().push_back(response);
    }
}

impl ColorPickerService for QueuedColorPickerService {
    fn pick_color<'a>(
        &'a self,
        _current: &'a str,
    ) -> DialogFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move { self.responses.borrow_mut().pop_front().unwrap_or(Ok(None)) })
    }
}
