//  ____  ____     __        __     ____
// |  _ \|  _ \ __ \ \      / /__  / ___| ___ _ __
// | |_) | |_) / _` \ \ /\ / / _ \| |  _ / _ \ '_ \
// |  _ <|  __/ (_| |\ V  V / (_) | |_| |  __/ | | |
// |_| \_\_|   \__,_| \_/\_/ \___/ \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-03
// Version : 0.1.0
// License : Mulan PSL v2
//
// Password history

use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};

// 密码历史条目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(password: &str) -> Self {
        HistoryEntry {
            password: password.to_string(),
            created_at: Utc::now(),
        }
    }
}

/// Ordered list of generated passwords. Entries are appended in
/// generation order; display order is most recent first.
#[derive(Debug, Default)]
pub struct PasswordHistory {
    entries: Vec<HistoryEntry>,
}

impl PasswordHistory {
    pub fn new() -> Self {
        PasswordHistory { entries: Vec::new() }
    }

    pub fn from_entries(entries: Vec<HistoryEntry>) -> Self {
        PasswordHistory { entries }
    }

    /// Append a password, ignoring empty input. Returns the stored entry.
    pub fn append(&mut self, password: &str) -> Option<&HistoryEntry> {
        if password.is_empty() {
            return None;
        }
        self.entries.push(HistoryEntry::new(password));
        self.entries.last()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Display order lookup: index 0 is the most recently generated entry.
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        if index >= self.entries.len() {
            return None;
        }
        self.entries.get(self.entries.len() - index - 1)
    }

    /// The most recently generated password.
    pub fn current(&self) -> Option<&str> {
        self.entries.last().map(|e| e.password.as_str())
    }

    /// Iterate in display order, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }
}
