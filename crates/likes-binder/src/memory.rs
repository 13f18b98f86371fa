//! In-Memory Container
//!
//! An arena-backed element tree implementing [`Container`] without a DOM.
//! It records listeners and can compute which of them a click reaches,
//! so both binding policies can be exercised on the host.
//!
//! With [`RenderStrategy::InnerHtml`] a card's children are built by parsing
//! the markup a browser would receive, so roles and texts go through the
//! same escaping as in the DOM.

use scraper::{ElementRef, Html, Node};

use crate::container::Container;
use crate::element::{ElementSpec, RenderStrategy, Role, ROLE_ATTR};
use crate::error::Result;

/// Index of a node in a [`MemoryContainer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct MemoryNode {
    tag: String,
    role: Option<Role>,
    class: Option<String>,
    text: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub struct MemoryContainer {
    nodes: Vec<MemoryNode>,
    listeners: Vec<NodeId>,
    strategy: RenderStrategy,
}

impl Default for MemoryContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryContainer {
    /// An empty `ul` container building cards element by element.
    pub fn new() -> Self {
        Self::with_strategy(RenderStrategy::CreateElement)
    }

    pub fn with_strategy(strategy: RenderStrategy) -> Self {
        Self {
            nodes: vec![MemoryNode {
                tag: "ul".to_string(),
                role: None,
                class: None,
                text: None,
                parent: None,
                children: Vec::new(),
            }],
            listeners: Vec::new(),
            strategy,
        }
    }

    pub fn strategy(&self) -> RenderStrategy {
        self.strategy
    }

    /// Top-level children of the root, in document order.
    pub fn cards(&self) -> &[NodeId] {
        &self.nodes[0].children
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    pub fn tag(&self, node: NodeId) -> &str {
        &self.nodes[node.0].tag
    }

    pub fn class(&self, node: NodeId) -> Option<&str> {
        self.nodes[node.0].class.as_deref()
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn has_listener(&self, node: NodeId) -> bool {
        self.listeners.contains(&node)
    }

    /// Listener targets a click on `origin` reaches, innermost first.
    pub fn bubble_path(&self, origin: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = Some(origin);
        while let Some(node) = current {
            if self.has_listener(node) {
                path.push(node);
            }
            current = self.parent(node);
        }
        path
    }

    fn push_node(&mut self, node: MemoryNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        if let Some(parent) = node.parent {
            self.nodes[parent.0].children.push(id);
        }
        self.nodes.push(node);
        id
    }

    /// Only `spec` itself, without its children.
    fn push_shallow(&mut self, spec: &ElementSpec, parent: NodeId) -> NodeId {
        self.push_node(MemoryNode {
            tag: spec.tag.to_string(),
            role: spec.role,
            class: spec.class.map(str::to_string),
            text: spec.text.clone(),
            parent: Some(parent),
            children: Vec::new(),
        })
    }

    fn build(&mut self, spec: &ElementSpec, parent: NodeId) -> NodeId {
        let id = self.push_shallow(spec, parent);
        for child in &spec.children {
            self.build(child, id);
        }
        id
    }

    /// The card element itself, then its children parsed from markup.
    fn build_from_markup(&mut self, spec: &ElementSpec, parent: NodeId) -> NodeId {
        let card = self.push_shallow(spec, parent);
        let fragment = Html::parse_fragment(&spec.children_html());
        for element in fragment.root_element().children().filter_map(ElementRef::wrap) {
            self.build_parsed(element, card);
        }
        card
    }

    fn build_parsed(&mut self, element: ElementRef<'_>, parent: NodeId) -> NodeId {
        let value = element.value();
        // Own text only; nested elements keep theirs.
        let text: String = element
            .children()
            .filter_map(|child| match child.value() {
                Node::Text(text) => Some(&**text),
                _ => None,
            })
            .collect();
        let id = self.push_node(MemoryNode {
            tag: value.name().to_string(),
            role: value.attr(ROLE_ATTR).and_then(Role::from_attr),
            class: value.attr("class").map(str::to_string),
            text: (!text.is_empty()).then_some(text),
            parent: Some(parent),
            children: Vec::new(),
        });
        for child in element.children().filter_map(ElementRef::wrap) {
            self.build_parsed(child, id);
        }
        id
    }

    fn find_descendant(&self, scope: NodeId, role: Role) -> Option<NodeId> {
        // Depth-first, document order.
        for &child in &self.nodes[scope.0].children {
            if self.nodes[child.0].role == Some(role) {
                return Some(child);
            }
            if let Some(found) = self.find_descendant(child, role) {
                return Some(found);
            }
        }
        None
    }
}

impl Container for MemoryContainer {
    type Node = NodeId;

    fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn append_child(&mut self, spec: &ElementSpec) -> Result<NodeId> {
        let root = self.root();
        match self.strategy {
            RenderStrategy::CreateElement => Ok(self.build(spec, root)),
            RenderStrategy::InnerHtml => Ok(self.build_from_markup(spec, root)),
        }
    }

    fn remove_child(&mut self, node: &NodeId) {
        let root = self.root();
        self.nodes[root.0].children.retain(|child| child != node);
        self.nodes[node.0].parent = None;
    }

    fn query_descendant(&self, scope: &NodeId, role: Role) -> Option<NodeId> {
        self.find_descendant(*scope, role)
    }

    fn closest(&self, node: &NodeId, role: Role) -> Option<NodeId> {
        let mut current = Some(*node);
        while let Some(id) = current {
            if self.nodes[id.0].role == Some(role) {
                return Some(id);
            }
            current = self.nodes[id.0].parent;
        }
        None
    }

    fn role_of(&self, node: &NodeId) -> Option<Role> {
        self.nodes[node.0].role
    }

    fn text_of(&self, node: &NodeId) -> Option<String> {
        self.nodes[node.0].text.clone()
    }

    fn set_text(&mut self, node: &NodeId, text: &str) {
        self.nodes[node.0].text = Some(text.to_string());
    }

    fn add_listener(&mut self, target: &NodeId) {
        if !self.listeners.contains(target) {
            self.listeners.push(*target);
        }
    }

    fn remove_listener(&mut self, target: &NodeId) {
        self.listeners.retain(|id| id != target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::card_spec;
    use crate::model::{Item, ItemId};

    fn candy(label: &str, count: u32) -> Item {
        Item {
            id: ItemId(1),
            label: label.to_string(),
            count,
        }
    }

    #[test]
    fn test_append_builds_tree() {
        let mut container = MemoryContainer::new();
        let card = container.append_child(&card_spec(&candy("Twix", 10))).unwrap();

        assert_eq!(container.cards(), &[card]);
        assert_eq!(container.tag(card), "li");
        assert_eq!(container.class(card), Some("card"));
        assert_eq!(container.children(card).len(), 3);

        let likes = container.query_descendant(&card, Role::Likes).unwrap();
        assert_eq!(container.text_of(&likes).as_deref(), Some("10 Likes"));
    }

    #[test]
    fn test_closest_walks_up() {
        let mut container = MemoryContainer::new();
        let card = container.append_child(&card_spec(&candy("Twix", 10))).unwrap();
        let button = container.query_descendant(&card, Role::Increment).unwrap();

        assert_eq!(container.closest(&button, Role::Card), Some(card));
        assert_eq!(container.closest(&button, Role::Increment), Some(button));
        assert_eq!(container.closest(&card, Role::Likes), None);
    }

    #[test]
    fn test_bubble_path_innermost_first() {
        let mut container = MemoryContainer::new();
        let card = container.append_child(&card_spec(&candy("Twix", 10))).unwrap();
        let button = container.query_descendant(&card, Role::Increment).unwrap();
        let root = container.root();

        container.add_listener(&root);
        container.add_listener(&button);
        container.add_listener(&button);
        assert_eq!(container.listener_count(), 2);

        assert_eq!(container.bubble_path(button), vec![button, root]);
        assert_eq!(container.bubble_path(card), vec![root]);

        container.remove_listener(&button);
        assert_eq!(container.bubble_path(button), vec![root]);
    }

    /// (tag, role, class, text) of every element under `card`, depth-first.
    fn outline(container: &MemoryContainer, card: NodeId) -> Vec<(String, Option<Role>, Option<String>, Option<String>)> {
        let mut out = vec![(
            container.tag(card).to_string(),
            container.role_of(&card),
            container.class(card).map(str::to_string),
            container.text_of(&card),
        )];
        for &child in container.children(card) {
            out.extend(outline(container, child));
        }
        out
    }

    #[test]
    fn test_strategies_build_the_same_card() {
        let item = candy("<b>M&Ms</b> \"classic\"", 5);
        let mut created = MemoryContainer::new();
        let mut parsed = MemoryContainer::with_strategy(RenderStrategy::InnerHtml);
        let a = created.append_child(&card_spec(&item)).unwrap();
        let b = parsed.append_child(&card_spec(&item)).unwrap();

        assert_eq!(outline(&created, a), outline(&parsed, b));

        // Markup in the label stays text.
        let label = parsed.query_descendant(&b, Role::Label).unwrap();
        assert_eq!(parsed.text_of(&label).as_deref(), Some("<b>M&Ms</b> \"classic\""));
        assert!(parsed.children(label).is_empty());

        let button = parsed.query_descendant(&b, Role::Increment).unwrap();
        assert_eq!(parsed.closest(&button, Role::Card), Some(b));
        assert_eq!(parsed.class(button), Some("like-btn"));
    }

    #[test]
    fn test_remove_child_detaches_card() {
        let mut container = MemoryContainer::new();
        let first = container.append_child(&card_spec(&candy("Twix", 10))).unwrap();
        let second = container.append_child(&card_spec(&candy("Mars", 2))).unwrap();
        let button = container.query_descendant(&first, Role::Increment).unwrap();

        container.remove_child(&first);
        assert_eq!(container.cards(), &[second]);
        assert_eq!(container.closest(&button, Role::Card), Some(first));
        assert_eq!(container.parent(first), None);
    }
}
