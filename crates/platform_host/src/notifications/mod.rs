//! Blocking user-notice contracts.

mod service;

pub use service::{
    MemoryNoticeService, NoopNoticeService, Notice, NoticeFuture, NoticeLevel, NoticeService,
};
