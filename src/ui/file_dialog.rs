//! Open/save dialogs for text files

use std::path::{Path, PathBuf};

use crate::core::file_io::{TEXT_EXTENSIONS, TEXT_FILTER_NAME};

/// Source of file paths chosen by the user. `None` means the dialog was cancelled.
pub trait FileDialogs {
    /// Ask for an existing text file to open
    fn pick_open(&self, directory: Option<&Path>) -> Option<PathBuf>;

    /// Ask for a destination to save to
    fn pick_save(&self, directory: Option<&Path>, file_name: Option<&str>) -> Option<PathBuf>;
}

/// Native OS dialogs
pub struct NativeDialogs;

impl FileDialogs for NativeDialogs {
    fn pick_open(&self, directory: Option<&Path>) -> Option<PathBuf> {
        let mut dialog = rfd::FileDialog::new()
            .set_title("Open File")
            .add_filter(TEXT_FILTER_NAME, TEXT_EXTENSIONS);
        if let Some(dir) = directory {
            dialog = dialog.set_directory(dir);
        }
        dialog.pick_file()
    }

    fn pick_save(&self, directory: Option<&Path>, file_name: Option<&str>) -> Option<PathBuf> {
        let mut dialog = rfd::FileDialog::new()
            .set_title("Save File")
            .add_filter(TEXT_FILTER_NAME, TEXT_EXTENSIONS);
        if let Some(dir) = directory {
            dialog = dialog.set_directory(dir);
        }
        if let Some(name) = file_name {
            dialog = dialog.set_file_name(name);
        }
        dialog.save_file()
    }
}
