//! Names shown in the credits, grouped by category

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::{CreditsError, Result};

/// Section of the credits a name belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreditCategory {
    Chatters,
    Followers,
    Subscribers,
}

impl CreditCategory {
    /// Categories in page order
    pub const ALL: [CreditCategory; 3] = [
        CreditCategory::Followers,
        CreditCategory::Subscribers,
        CreditCategory::Chatters,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CreditCategory::Chatters => "chatters",
            CreditCategory::Followers => "followers",
            CreditCategory::Subscribers => "subscribers",
        }
    }

    /// Heading shown above the section
    pub fn title(self) -> &'static str {
        match self {
            CreditCategory::Chatters => "Chatters",
            CreditCategory::Followers => "New Followers",
            CreditCategory::Subscribers => "Subscribers",
        }
    }
}

impl fmt::Display for CreditCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CreditCategory {
    type Err = CreditsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chatters" | "chatter" => Ok(CreditCategory::Chatters),
            "followers" | "follower" => Ok(CreditCategory::Followers),
            "subscribers" | "subscriber" => Ok(CreditCategory::Subscribers),
            _ => Err(CreditsError::UnknownCategory(s.to_string())),
        }
    }
}

/// Point-in-time copy of the roster; empty categories are `None`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSnapshot {
    pub chatters: Option<Vec<String>>,
    pub followers: Option<Vec<String>>,
    pub subscribers: Option<Vec<String>>,
}

impl RosterSnapshot {
    pub fn get(&self, category: CreditCategory) -> Option<&[String]> {
        match category {
            CreditCategory::Chatters => self.chatters.as_deref(),
            CreditCategory::Followers => self.followers.as_deref(),
            CreditCategory::Subscribers => self.subscribers.as_deref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        CreditCategory::ALL.iter().all(|c| self.get(*c).is_none())
    }

    /// Total number of names across categories
    pub fn total(&self) -> usize {
        CreditCategory::ALL
            .iter()
            .map(|c| self.get(*c).map_or(0, |names| names.len()))
            .sum()
    }
}

#[derive(Debug, Default)]
struct RosterInner {
    chatters: BTreeSet<String>,
    followers: BTreeSet<String>,
    subscribers: BTreeSet<String>,
}

impl RosterInner {
    fn set(&self, category: CreditCategory) -> &BTreeSet<String> {
        match category {
            CreditCategory::Chatters => &self.chatters,
            CreditCategory::Followers => &self.followers,
            CreditCategory::Subscribers => &self.subscribers,
        }
    }

    fn set_mut(&mut self, category: CreditCategory) -> &mut BTreeSet<String> {
        match category {
            CreditCategory::Chatters => &mut self.chatters,
            CreditCategory::Followers => &mut self.followers,
            CreditCategory::Subscribers => &mut self.subscribers,
        }
    }
}

/// Thread-safe, de-duplicated roster of credited names
#[derive(Debug, Default)]
pub struct CreditsRoster {
    inner: RwLock<RosterInner>,
}

impl CreditsRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a name; returns `true` if it was not already present
    pub fn add(&self, category: CreditCategory, name: &str) -> Result<bool> {
        let name = normalize(name)?;
        Ok(self.inner.write().set_mut(category).insert(name))
    }

    /// Remove a name; returns `true` if it was present
    pub fn remove(&self, category: CreditCategory, name: &str) -> bool {
        self.inner.write().set_mut(category).remove(name.trim())
    }

    pub fn contains(&self, category: CreditCategory, name: &str) -> bool {
        self.inner.read().set(category).contains(name.trim())
    }

    /// Drop every name in every category
    pub fn clear(&self) {
        *self.inner.write() = RosterInner::default();
    }

    /// Number of names in one category
    pub fn count(&self, category: CreditCategory) -> usize {
        self.inner.read().set(category).len()
    }

    pub fn len(&self) -> usize {
        CreditCategory::ALL.iter().map(|c| self.count(*c)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn snapshot(&self) -> RosterSnapshot {
        let inner = self.inner.read();
        let list = |set: &BTreeSet<String>| {
            if set.is_empty() {
                None
            } else {
                Some(set.iter().cloned().collect())
            }
        };

        RosterSnapshot {
            chatters: list(&inner.chatters),
            followers: list(&inner.followers),
            subscribers: list(&inner.subscribers),
        }
    }
}

fn normalize(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CreditsError::EmptyName);
    }
    Ok(trimmed.to_string())
}
