//! Container Capabilities
//!
//! The narrow slice of the DOM the renderer needs.

use crate::element::{ElementSpec, Role};
use crate::error::Result;

/// A stable parent that owns rendered cards.
///
/// Nodes are handles; comparing two handles tells whether they refer to the
/// same element.
pub trait Container {
    type Node: Clone + PartialEq;

    /// The container element itself.
    fn root(&self) -> Self::Node;

    /// Build `spec` and append it as the last child of the root.
    /// Returns the handle of the new top-level element.
    fn append_child(&mut self, spec: &ElementSpec) -> Result<Self::Node>;

    /// Detach a top-level element appended by `append_child`.
    fn remove_child(&mut self, node: &Self::Node);

    /// First descendant of `scope` carrying `role`.
    fn query_descendant(&self, scope: &Self::Node, role: Role) -> Option<Self::Node>;

    /// `node` itself or its nearest ancestor carrying `role`.
    fn closest(&self, node: &Self::Node, role: Role) -> Option<Self::Node>;

    fn role_of(&self, node: &Self::Node) -> Option<Role>;

    fn text_of(&self, node: &Self::Node) -> Option<String>;

    fn set_text(&mut self, node: &Self::Node, text: &str);

    /// Start delivering clicks that reach `target` to the renderer.
    fn add_listener(&mut self, target: &Self::Node);

    fn remove_listener(&mut self, target: &Self::Node);
}
