//! Likes Binder
//!
//! Renders a list of items into a container and wires up their
//! "Add Like" controls, either with one listener per card (direct)
//! or with a single listener on the container (delegated).
//!
//! Everything here talks to the DOM through the [`Container`] trait,
//! so the whole binder runs on the host against [`MemoryContainer`].

pub mod config;
pub mod container;
pub mod credentials;
pub mod element;
pub mod error;
pub mod fox;
pub mod memory;
pub mod model;
pub mod renderer;


pub use config::{BindingPolicy, BoardConfig};
pub use container::Container;
pub use credentials::{input_handler, CredentialField, Credentials};
pub use element::{card_spec, likes_text, ElementSpec, RenderStrategy, Role};
pub use error::{BindError, Result};
pub use fox::FoxImage;
pub use memory::{MemoryContainer, NodeId};
pub use model::{Item, ItemId, ItemSeed, NewItemForm};
pub use renderer::{ClickOutcome, ListRenderer};
