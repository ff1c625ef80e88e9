//! The collection of open tabs

use super::document::Tab;

/// Ordered tabs plus the selected one. Never empty.
#[derive(Debug, Clone)]
pub struct Workspace {
    tabs: Vec<Tab>,
    active: usize,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace {
    /// Create a workspace holding a single empty tab
    pub fn new() -> Self {
        let mut workspace = Self {
            tabs: Vec::new(),
            active: 0,
        };
        workspace.add_tab();
        workspace
    }

    /// Append an empty tab labelled after the current count and return its index.
    /// The selection does not move.
    pub fn add_tab(&mut self) -> usize {
        let label = format!("Tab {}", self.tabs.len() + 1);
        self.tabs.push(Tab::new(label));
        self.tabs.len() - 1
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Select the tab at `index`; out-of-range indices are ignored
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.tabs.len() {
            self.active = index;
            true
        } else {
            false
        }
    }

    pub fn active(&self) -> &Tab {
        &self.tabs[self.active]
    }

    pub fn active_mut(&mut self) -> &mut Tab {
        &mut self.tabs[self.active]
    }

    #[allow(dead_code)]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Tab> {
        self.tabs.get_mut(index)
    }
}
