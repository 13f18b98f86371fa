//! Board Configuration
//!
//! Loaded from JSON, then optionally overridden from a URL query string.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::element::RenderStrategy;
use crate::error::{BindError, Result};
use crate::model::ItemSeed;

pub const DEFAULT_FOX_ENDPOINT: &str = "https://randomfox.ca/floof/";
pub const DEFAULT_LOG_CAPACITY: usize = 200;

/// How clicks on "Add Like" buttons are wired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BindingPolicy {
    /// One listener per card, attached when the card is created.
    Direct,
    /// One listener on the container for all cards, present and future.
    #[default]
    Delegated,
}

impl BindingPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            BindingPolicy::Direct => "direct",
            BindingPolicy::Delegated => "delegated",
        }
    }
}

impl fmt::Display for BindingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BindingPolicy {
    type Err = BindError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "direct" | "individual" => Ok(BindingPolicy::Direct),
            "delegated" | "delegation" => Ok(BindingPolicy::Delegated),
            other => Err(BindError::UnknownPolicy(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardConfig {
    pub binding: BindingPolicy,
    pub strategy: RenderStrategy,
    pub fox_endpoint: String,
    pub log_capacity: usize,
    pub seed: Vec<ItemSeed>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            binding: BindingPolicy::default(),
            strategy: RenderStrategy::default(),
            fox_endpoint: DEFAULT_FOX_ENDPOINT.to_string(),
            log_capacity: DEFAULT_LOG_CAPACITY,
            seed: default_seed(),
        }
    }
}

fn default_seed() -> Vec<ItemSeed> {
    vec![
        ItemSeed::new("M&Ms", 5),
        ItemSeed::new("Twix", 10),
        ItemSeed::new("Snickers", 7),
    ]
}

impl BoardConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Apply `binding=` and `strategy=` pairs from a query string such as
    /// `?binding=direct&strategy=inner-html`. Unknown keys are skipped;
    /// unparseable values are logged and leave the setting unchanged.
    pub fn apply_query(&mut self, query: &str) {
        let query = query.strip_prefix('?').unwrap_or(query);
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "binding" => match value.parse() {
                    Ok(policy) => self.binding = policy,
                    Err(e) => warn!(error = %e, "ignoring query override"),
                },
                "strategy" => match value.parse() {
                    Ok(strategy) => self.strategy = strategy,
                    Err(e) => warn!(error = %e, "ignoring query override"),
                },
                _ => {}
            }
        }
    }
}
