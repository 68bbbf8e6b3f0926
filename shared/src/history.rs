use serde::{Deserialize, Serialize};

use crate::limits::HISTORY_MAX_ITEMS;

/// Bounded most-recent-first record of past winners. Lives in memory only;
/// it is not part of the URL state and resets on reload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct History {
    items: Vec<String>,
    max_items: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(HISTORY_MAX_ITEMS)
    }
}

impl History {
    pub fn new(max_items: usize) -> Self {
        Self {
            items: Vec::new(),
            max_items,
        }
    }

    /// Most recent winner first.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Prepends a winner. When the cap is exceeded the oldest entries fall
    /// off the tail, never the newest.
    pub fn record(&mut self, label: &str) {
        self.items.insert(0, label.to_string());
        self.items.truncate(self.max_items);
    }

    pub fn clear(&mut self) {
        log::debug!("history: cleared {} entries", self.items.len());
        self.items.clear();
    }
}
