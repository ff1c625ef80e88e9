//! UI components for Tabpad

pub mod editor;
pub mod file_dialog;
pub mod modal;
pub mod toolbar;
