//! Core state for tabs, text, files, and configuration

pub mod config;
pub mod document;
pub mod file_io;
pub mod styled_text;
pub mod workspace;
