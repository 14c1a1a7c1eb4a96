//! Notice service contracts and lightweight adapters.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`NoticeService`].
pub type NoticeFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Severity attached to a user notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Informational message.
    Info,
    /// Recoverable failure reported in place.
    Error,
}

impl NoticeLevel {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Error => "error",
        }
    }
}

/// A notice that was shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity of the notice.
    pub level: NoticeLevel,
    /// Short title line.
    pub title: String,
    /// Message body.
    pub body: String,
}

/// Host service for modal notices that the user must acknowledge.
///
/// The returned future resolves once the notice has been dismissed.
pub trait NoticeService {
    /// Shows a notice and waits for acknowledgement.
    fn show_notice<'a>(
        &'a self,
        level: NoticeLevel,
        title: &'a str,
        body: &'a str,
    ) -> NoticeFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Notice service that drops every notice.
pub struct NoopNoticeService;

impl NoticeService for NoopNoticeService {
    fn show_notice<'a>(
        &'a self,
        _level: NoticeLevel,
        _title: &'a str,
        _body: &'a str,
    ) -> NoticeFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// Notice service that records notices for later inspection.
pub struct MemoryNoticeService {
    shown: Rc<RefCell<Vec<Notice>>>,
}

impl MemoryNoticeService {
    /// Returns every notice shown so far, oldest first.
    pub fn shown(&self) -> Vec<Notice> {
        self.shown.borrow().clone()
    }
}

impl NoticeService for MemoryNoticeService {
    fn show_notice<'a>(
        &'a self,
        level: NoticeLevel,
        title: &'a str,
        body: &'a str,
    ) -> NoticeFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.shown.borrow_mut().push(Notice {
                level,
                title: title.to_string(),
                body: body.to_string(),
            });
            Ok(())
        })
    }
}
