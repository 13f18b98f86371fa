//! List Renderer
//!
//! Owns the items of one board and keeps their cards in sync.
//!
//! Clicks reach the renderer through [`ListRenderer::handle_click`], once per
//! listener the click bubbles through. With [`BindingPolicy::Direct`] every
//! card's "Add Like" button has its own listener and a table entry mapping
//! it to the item's index. With [`BindingPolicy::Delegated`] there is one
//! listener on the container root and the item is resolved from the origin.

use tracing::{debug, info, trace, warn};

use crate::config::BindingPolicy;
use crate::container::Container;
use crate::element::{card_spec, likes_text, Role};
use crate::error::{BindError, Result};
use crate::memory::{MemoryContainer, NodeId};
use crate::model::{Item, ItemId, ItemSeed, NewItemForm};

/// Result of delivering a click to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Incremented { id: ItemId, count: u32 },
    /// The click did not come from an increment control, the renderer is
    /// unbound, or the count is already at its maximum.
    Ignored,
}

/// Handles of one rendered card.
#[derive(Debug, Clone)]
struct CardNodes<N> {
    card: N,
    likes: N,
    control: N,
}

pub struct ListRenderer<C: Container> {
    container: C,
    policy: BindingPolicy,
    items: Vec<Item>,
    // Index-aligned with `items`.
    cards: Vec<CardNodes<C::Node>>,
    // Direct policy only: control node -> item index.
    direct: Vec<(C::Node, usize)>,
    // Cleared by `unbind`; no listener is registered afterwards.
    bound: bool,
    next_id: u32,
}

impl<C: Container> ListRenderer<C> {
    /// Take ownership of an empty container. The delegated listener, if any,
    /// is registered here and never again.
    pub fn new(mut container: C, policy: BindingPolicy) -> Self {
        if policy == BindingPolicy::Delegated {
            let root = container.root();
            container.add_listener(&root);
        }
        Self {
            container,
            policy,
            items: Vec::new(),
            cards: Vec::new(),
            direct: Vec::new(),
            bound: true,
            next_id: 1,
        }
    }

    pub fn policy(&self) -> BindingPolicy {
        self.policy
    }

    pub fn is_bound(&self) -> bool {
        self.bound
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    /// Total likes across the board.
    pub fn total_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.count)).sum()
    }

    pub fn card_of(&self, id: ItemId) -> Option<&C::Node> {
        self.index_of(id).map(|index| &self.cards[index].card)
    }

    /// The "Add Like" button of an item's card.
    pub fn control_of(&self, id: ItemId) -> Option<&C::Node> {
        self.index_of(id).map(|index| &self.cards[index].control)
    }

    /// Render every seed in order, appending after any existing cards.
    pub fn render_all<I>(&mut self, seeds: I) -> Result<Vec<ItemId>>
    where
        I: IntoIterator<Item = ItemSeed>,
    {
        let ids = seeds
            .into_iter()
            .map(|seed| self.render_one(seed))
            .collect::<Result<Vec<_>>>()?;
        info!(rendered = ids.len(), total = self.items.len(), "rendered items");
        Ok(ids)
    }

    /// Append the item described by a submitted form. Existing cards are
    /// left untouched.
    pub fn add_item(&mut self, form: NewItemForm) -> Result<ItemId> {
        let seed = form.into_seed()?;
        let id = self.render_one(seed)?;
        info!(%id, total = self.items.len(), "added item");
        Ok(id)
    }

    fn render_one(&mut self, seed: ItemSeed) -> Result<ItemId> {
        let id = ItemId(self.next_id);
        let item = Item {
            id,
            label: seed.label,
            count: seed.count,
        };

        let card = self.container.append_child(&card_spec(&item))?;
        let (likes, control) = match self.card_handles(&card, id) {
            Ok(handles) => handles,
            Err(e) => {
                // A card without an item must not stay in the list.
                self.container.remove_child(&card);
                return Err(e);
            }
        };

        let index = self.items.len();
        if self.bound && self.policy == BindingPolicy::Direct {
            self.container.add_listener(&control);
            self.direct.push((control.clone(), index));
        }

        self.next_id += 1;
        self.items.push(item);
        self.cards.push(CardNodes { card, likes, control });
        Ok(id)
    }

    fn card_handles(&self, card: &C::Node, id: ItemId) -> Result<(C::Node, C::Node)> {
        let likes = self
            .container
            .query_descendant(card, Role::Likes)
            .ok_or(BindError::MissingNode { id, role: Role::Likes })?;
        let control = self
            .container
            .query_descendant(card, Role::Increment)
            .ok_or(BindError::MissingNode { id, role: Role::Increment })?;
        Ok((likes, control))
    }

    /// Deliver a click on `origin` to the listener registered on
    /// `current_target`.
    pub fn handle_click(&mut self, current_target: &C::Node, origin: &C::Node) -> ClickOutcome {
        if !self.bound {
            trace!("click on unbound renderer");
            return ClickOutcome::Ignored;
        }
        let index = match self.policy {
            BindingPolicy::Direct => self
                .direct
                .iter()
                .find(|(control, _)| control == current_target)
                .map(|(_, index)| *index),
            BindingPolicy::Delegated => self.resolve_delegated(current_target, origin),
        };

        match index {
            Some(index) => self.increment(index),
            None => {
                trace!(policy = ?self.policy, "click ignored");
                ClickOutcome::Ignored
            }
        }
    }

    fn resolve_delegated(&self, current_target: &C::Node, origin: &C::Node) -> Option<usize> {
        if *current_target != self.container.root() {
            return None;
        }
        if self.container.role_of(origin) != Some(Role::Increment) {
            return None;
        }
        let card = self.container.closest(origin, Role::Card)?;
        self.cards.iter().position(|nodes| nodes.card == card)
    }

    fn increment(&mut self, index: usize) -> ClickOutcome {
        let item = &mut self.items[index];
        let Some(count) = item.count.checked_add(1) else {
            warn!(id = %item.id, count = item.count, "like count at maximum");
            return ClickOutcome::Ignored;
        };
        item.count = count;
        let id = item.id;

        let likes = &self.cards[index].likes;
        self.container.set_text(likes, &likes_text(count));
        debug!(%id, count, "incremented");
        ClickOutcome::Incremented { id, count }
    }

    /// Check that every card shows its item's count.
    pub fn verify(&self) -> Result<()> {
        for (item, nodes) in self.items.iter().zip(&self.cards) {
            let expected = likes_text(item.count);
            let shown = self.container.text_of(&nodes.likes);
            if shown.as_deref() != Some(expected.as_str()) {
                return Err(BindError::Drift {
                    id: item.id,
                    expected,
                    shown,
                });
            }
        }
        Ok(())
    }

    /// Detach every listener this renderer registered. Cards stay in place
    /// but stop reacting to clicks, including cards added later.
    pub fn unbind(&mut self) {
        if !self.bound {
            return;
        }
        self.bound = false;
        for (control, _) in self.direct.drain(..) {
            self.container.remove_listener(&control);
        }
        if self.policy == BindingPolicy::Delegated {
            let root = self.container.root();
            self.container.remove_listener(&root);
        }
    }

    fn index_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}

impl ListRenderer<MemoryContainer> {
    /// Click `origin` and let the event bubble to the root, invoking every
    /// listener on the way.
    pub fn simulate_click(&mut self, origin: NodeId) -> ClickOutcome {
        let mut outcome = ClickOutcome::Ignored;
        for target in self.container.bubble_path(origin) {
            if let hit @ ClickOutcome::Incremented { .. } = self.handle_click(&target, &origin) {
                outcome = hit;
            }
        }
        outcome
    }

    /// Click the "Add Like" button of `id`.
    pub fn click_increment(&mut self, id: ItemId) -> ClickOutcome {
        match self.control_of(id).copied() {
            Some(control) => self.simulate_click(control),
            None => ClickOutcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementSpec;

    fn candies() -> Vec<ItemSeed> {
        vec![
            ItemSeed::new("M&Ms", 5),
            ItemSeed::new("Twix", 10),
            ItemSeed::new("Snickers", 7),
        ]
    }

    fn board(policy: BindingPolicy) -> ListRenderer<MemoryContainer> {
        let mut renderer = ListRenderer::new(MemoryContainer::new(), policy);
        renderer.render_all(candies()).unwrap();
        renderer
    }

    fn counts(renderer: &ListRenderer<MemoryContainer>) -> Vec<u32> {
        renderer.items().iter().map(|item| item.count).collect()
    }

    #[test]
    fn test_ids_are_sequential() {
        let renderer = board(BindingPolicy::Delegated);
        let ids: Vec<_> = renderer.items().iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![ItemId(1), ItemId(2), ItemId(3)]);
    }

    #[test]
    fn test_listener_cost() {
        let delegated = board(BindingPolicy::Delegated);
        assert_eq!(delegated.container().listener_count(), 1);

        let direct = board(BindingPolicy::Direct);
        assert_eq!(direct.container().listener_count(), 3);
    }

    #[test]
    fn test_direct_increment() {
        let mut renderer = board(BindingPolicy::Direct);
        let outcome = renderer.click_increment(ItemId(2));

        assert_eq!(outcome, ClickOutcome::Incremented { id: ItemId(2), count: 11 });
        assert_eq!(counts(&renderer), vec![5, 11, 7]);
        renderer.verify().unwrap();
    }

    #[test]
    fn test_delegated_increment() {
        let mut renderer = board(BindingPolicy::Delegated);
        renderer.click_increment(ItemId(1));
        renderer.click_increment(ItemId(1));

        assert_eq!(counts(&renderer), vec![7, 10, 7]);
        renderer.verify().unwrap();
    }

    #[test]
    fn test_delegated_ignores_other_targets() {
        let mut renderer = board(BindingPolicy::Delegated);
        let card = *renderer.card_of(ItemId(1)).unwrap();
        let label = renderer.container().query_descendant(&card, Role::Label).unwrap();
        let root = renderer.container().root();

        assert_eq!(renderer.simulate_click(card), ClickOutcome::Ignored);
        assert_eq!(renderer.simulate_click(label), ClickOutcome::Ignored);
        assert_eq!(renderer.simulate_click(root), ClickOutcome::Ignored);
        assert_eq!(counts(&renderer), vec![5, 10, 7]);
    }

    #[test]
    fn test_handle_click_from_wrong_listener() {
        let mut renderer = board(BindingPolicy::Delegated);
        let control = *renderer.control_of(ItemId(3)).unwrap();

        // Only the root carries the delegated listener.
        assert_eq!(renderer.handle_click(&control, &control), ClickOutcome::Ignored);
        assert_eq!(counts(&renderer), vec![5, 10, 7]);
    }

    #[test]
    fn test_verify_detects_drift() {
        let mut renderer = board(BindingPolicy::Direct);
        let card = *renderer.card_of(ItemId(2)).unwrap();
        let likes = renderer.container.query_descendant(&card, Role::Likes).unwrap();
        renderer.container.set_text(&likes, "99 Likes");

        match renderer.verify() {
            Err(BindError::Drift { id, expected, shown }) => {
                assert_eq!(id, ItemId(2));
                assert_eq!(expected, "10 Likes");
                assert_eq!(shown.as_deref(), Some("99 Likes"));
            }
            other => panic!("expected drift, got {:?}", other),
        }
    }

    #[test]
    fn test_unbind_detaches_listeners() {
        for policy in [BindingPolicy::Direct, BindingPolicy::Delegated] {
            let mut renderer = board(policy);
            renderer.unbind();
            assert_eq!(renderer.container().listener_count(), 0);
            assert_eq!(renderer.click_increment(ItemId(1)), ClickOutcome::Ignored);
            assert_eq!(counts(&renderer), vec![5, 10, 7]);
        }
    }

    #[test]
    fn test_add_item_rejects_blank_label() {
        let mut renderer = board(BindingPolicy::Direct);
        assert!(matches!(
            renderer.add_item(NewItemForm::new("  ")),
            Err(BindError::EmptyLabel)
        ));
        assert_eq!(renderer.len(), 3);
        assert_eq!(renderer.container().cards().len(), 3);
        assert_eq!(renderer.container().listener_count(), 3);
    }

    #[test]
    fn test_increment_stops_at_max() {
        let mut renderer = ListRenderer::new(MemoryContainer::new(), BindingPolicy::Delegated);
        renderer.render_all([ItemSeed::new("Big", u32::MAX)]).unwrap();

        assert_eq!(renderer.click_increment(ItemId(1)), ClickOutcome::Ignored);
        assert_eq!(counts(&renderer), vec![u32::MAX]);
        renderer.verify().unwrap();
    }

    #[test]
    fn test_unbound_renderer_ignores_new_cards() {
        for policy in [BindingPolicy::Direct, BindingPolicy::Delegated] {
            let mut renderer = board(policy);
            renderer.unbind();
            assert!(!renderer.is_bound());

            let id = renderer.add_item(NewItemForm::new("Kit Kat")).unwrap();
            assert_eq!(renderer.container().listener_count(), 0, "{policy}");
            assert_eq!(renderer.click_increment(id), ClickOutcome::Ignored, "{policy}");

            let control = *renderer.control_of(id).unwrap();
            assert_eq!(renderer.handle_click(&control, &control), ClickOutcome::Ignored);
            assert_eq!(counts(&renderer), vec![5, 10, 7, 0], "{policy}");
        }
    }

    /// Renders cards whose button lost its role.
    struct NoControls(MemoryContainer);

    impl Container for NoControls {
        type Node = NodeId;

        fn root(&self) -> NodeId {
            self.0.root()
        }

        fn append_child(&mut self, spec: &ElementSpec) -> Result<NodeId> {
            let mut spec = spec.clone();
            for child in &mut spec.children {
                if child.role == Some(Role::Increment) {
                    child.role = None;
                }
            }
            self.0.append_child(&spec)
        }

        fn remove_child(&mut self, node: &NodeId) {
            self.0.remove_child(node)
        }

        fn query_descendant(&self, scope: &NodeId, role: Role) -> Option<NodeId> {
            self.0.query_descendant(scope, role)
        }

        fn closest(&self, node: &NodeId, role: Role) -> Option<NodeId> {
            self.0.closest(node, role)
        }

        fn role_of(&self, node: &NodeId) -> Option<Role> {
            self.0.role_of(node)
        }

        fn text_of(&self, node: &NodeId) -> Option<String> {
            self.0.text_of(node)
        }

        fn set_text(&mut self, node: &NodeId, text: &str) {
            self.0.set_text(node, text)
        }

        fn add_listener(&mut self, target: &NodeId) {
            self.0.add_listener(target)
        }

        fn remove_listener(&mut self, target: &NodeId) {
            self.0.remove_listener(target)
        }
    }

    #[test]
    fn test_incomplete_card_is_rolled_back() {
        let mut renderer = ListRenderer::new(NoControls(MemoryContainer::new()), BindingPolicy::Direct);

        let result = renderer.add_item(NewItemForm::new("Twix"));
        assert!(matches!(
            result,
            Err(BindError::MissingNode { id: ItemId(1), role: Role::Increment })
        ));
        assert!(renderer.is_empty());
        assert!(renderer.container().0.cards().is_empty());
        assert_eq!(renderer.container().0.listener_count(), 0);

        // The failed attempt does not consume an id.
        let result = renderer.render_all([ItemSeed::new("Twix", 1)]);
        assert!(matches!(result, Err(BindError::MissingNode { id: ItemId(1), .. })));
    }

    #[test]
    fn test_total_count() {
        let renderer = board(BindingPolicy::Delegated);
        assert_eq!(renderer.total_count(), 22);
    }
}
