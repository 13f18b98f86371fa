//! Item Models
//!
//! The records shown on the board.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{BindError, Result};

/// Identifier assigned by the renderer, unique within one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A rendered item. Only `count` ever changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub label: String,
    pub count: u32,
}

/// Seed data for an item that has not been rendered yet.
///
/// Accepts both `{ "label", "count" }` and the `{ "name", "likes" }` shape
/// used by the candy data files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSeed {
    #[serde(alias = "name")]
    pub label: String,
    #[serde(alias = "likes", default)]
    pub count: u32,
}

impl ItemSeed {
    pub fn new(label: impl Into<String>, count: u32) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Contents of the "add candy" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewItemForm {
    pub label: String,
}

impl NewItemForm {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// Turn the submitted form into a seed with no likes yet.
    pub fn into_seed(self) -> Result<ItemSeed> {
        let label = self.label.trim();
        if label.is_empty() {
            return Err(BindError::EmptyLabel);
        }
        Ok(ItemSeed::new(label, 0))
    }
}
