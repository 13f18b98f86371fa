//! DOM Container
//!
//! `Container` backed by a real `<ul>` element through web-sys.
//! Roles are read from and written to the `data-role` attribute.

use std::rc::Rc;

use likes_binder::element::ROLE_ATTR;
use likes_binder::{BindError, Container, ElementSpec, RenderStrategy, Role};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, MouseEvent};

use crate::api::js_error;

/// Called with (element the listener sits on, element that was clicked).
pub type ClickDispatch = Rc<dyn Fn(&Element, &Element)>;

type ClickClosure = Closure<dyn FnMut(MouseEvent)>;

pub struct DomContainer {
    document: Document,
    root: Element,
    strategy: RenderStrategy,
    dispatch: ClickDispatch,
    // Closures stay alive exactly as long as their registration.
    listeners: Vec<(Element, ClickClosure)>,
}

impl DomContainer {
    /// Wrap `root`. Returns `None` if it is not attached to a document.
    pub fn new(
        root: Element,
        strategy: RenderStrategy,
        dispatch: impl Fn(&Element, &Element) + 'static,
    ) -> Option<Self> {
        let document = root.owner_document()?;
        Some(Self {
            document,
            root,
            strategy,
            dispatch: Rc::new(dispatch),
            listeners: Vec::new(),
        })
    }

    /// Number of click listeners currently attached.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Create `spec` alone, without its children.
    fn create_shallow(&self, spec: &ElementSpec) -> Result<Element, JsValue> {
        let element = self.document.create_element(spec.tag)?;
        if let Some(role) = spec.role {
            element.set_attribute(ROLE_ATTR, role.as_attr())?;
        }
        if let Some(class) = spec.class {
            element.class_list().add_1(class)?;
        }
        if let Some(text) = &spec.text {
            element.set_text_content(Some(text));
        }
        Ok(element)
    }

    fn create_tree(&self, spec: &ElementSpec) -> Result<Element, JsValue> {
        let element = self.create_shallow(spec)?;
        for child in &spec.children {
            element.append_child(&self.create_tree(child)?.into())?;
        }
        Ok(element)
    }

    fn build_card(&self, spec: &ElementSpec) -> Result<Element, JsValue> {
        match self.strategy {
            RenderStrategy::CreateElement => self.create_tree(spec),
            RenderStrategy::InnerHtml => {
                let card = self.create_shallow(spec)?;
                // Markup from ElementSpec escapes all text.
                card.set_inner_html(&spec.children_html());
                Ok(card)
            }
        }
    }
}

impl Container for DomContainer {
    type Node = Element;

    fn root(&self) -> Element {
        self.root.clone()
    }

    fn append_child(&mut self, spec: &ElementSpec) -> likes_binder::Result<Element> {
        let card = self
            .build_card(spec)
            .map_err(|e| BindError::Append(js_error(e)))?;
        self.root
            .append_child(&card)
            .map_err(|e| BindError::Append(js_error(e)))?;
        Ok(card)
    }

    fn remove_child(&mut self, node: &Element) {
        self.remove_listener(node);
        node.remove();
    }

    fn query_descendant(&self, scope: &Element, role: Role) -> Option<Element> {
        scope.query_selector(&role.selector()).ok().flatten()
    }

    fn closest(&self, node: &Element, role: Role) -> Option<Element> {
        node.closest(&role.selector()).ok().flatten()
    }

    fn role_of(&self, node: &Element) -> Option<Role> {
        node.get_attribute(ROLE_ATTR)
            .and_then(|attr| Role::from_attr(&attr))
    }

    fn text_of(&self, node: &Element) -> Option<String> {
        node.text_content()
    }

    fn set_text(&mut self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn add_listener(&mut self, target: &Element) {
        if self.listeners.iter().any(|(element, _)| element == target) {
            return;
        }

        let dispatch = self.dispatch.clone();
        let current = target.clone();
        let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
            let Some(origin) = ev.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            dispatch(&current, &origin);
        });

        if let Err(e) =
            target.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        {
            tracing::warn!(error = %js_error(e), "failed to add click listener");
            return;
        }
        self.listeners.push((target.clone(), on_click));
    }

    fn remove_listener(&mut self, target: &Element) {
        if let Some(pos) = self.listeners.iter().position(|(element, _)| element == target) {
            let (element, on_click) = self.listeners.remove(pos);
            let _ = element
                .remove_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        }
    }
}

impl Drop for DomContainer {
    fn drop(&mut self) {
        for (element, on_click) in self.listeners.drain(..) {
            let _ = element
                .remove_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        }
    }
}
