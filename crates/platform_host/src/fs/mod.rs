//! Text-document filesystem contracts used by the editor panel.

pub mod path;
pub mod service;
