//! Binder Errors

use thiserror::Error;

use crate::element::Role;
use crate::model::ItemId;

#[derive(Debug, Error)]
pub enum BindError {
    #[error("item label must not be empty")]
    EmptyLabel,

    #[error("unknown binding policy `{0}` (expected `direct` or `delegated`)")]
    UnknownPolicy(String),

    #[error("unknown render strategy `{0}` (expected `create-element` or `inner-html`)")]
    UnknownStrategy(String),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The card shows something other than the item's count.
    #[error("item {id} shows {shown:?}, expected {expected:?}")]
    Drift {
        id: ItemId,
        expected: String,
        shown: Option<String>,
    },

    /// The container could not build a card.
    #[error("failed to append card: {0}")]
    Append(String),

    #[error("card for item {id} has no `{role}` element")]
    MissingNode { id: ItemId, role: Role },
}

pub type Result<T> = std::result::Result<T, BindError>;
