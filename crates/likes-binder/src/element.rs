//! Card Elements
//!
//! Describes the element tree of one card independently of any DOM.
//! Containers turn an [`ElementSpec`] into real nodes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BindError;
use crate::model::Item;

/// Attribute carrying an element's [`Role`].
pub const ROLE_ATTR: &str = "data-role";

/// What an element is for. Event handlers check roles, never CSS classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Root element of one rendered item.
    Card,
    Label,
    Likes,
    /// The "Add Like" button.
    Increment,
}

impl Role {
    pub fn as_attr(&self) -> &'static str {
        match self {
            Role::Card => "card",
            Role::Label => "label",
            Role::Likes => "likes",
            Role::Increment => "increment",
        }
    }

    pub fn from_attr(s: &str) -> Option<Self> {
        match s {
            "card" => Some(Role::Card),
            "label" => Some(Role::Label),
            "likes" => Some(Role::Likes),
            "increment" => Some(Role::Increment),
            _ => None,
        }
    }

    /// CSS attribute selector matching this role.
    pub fn selector(&self) -> String {
        format!("[{}=\"{}\"]", ROLE_ATTR, self.as_attr())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_attr())
    }
}

/// How a container builds the nodes of a card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderStrategy {
    /// Create and append every element one by one.
    #[default]
    CreateElement,
    /// Create the card element, then assign its children as one markup string.
    InnerHtml,
}

impl FromStr for RenderStrategy {
    type Err = BindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create-element" | "createElement" => Ok(RenderStrategy::CreateElement),
            "inner-html" | "innerHTML" | "hybrid" => Ok(RenderStrategy::InnerHtml),
            other => Err(BindError::UnknownStrategy(other.to_string())),
        }
    }
}

/// A DOM-independent element description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSpec {
    pub tag: &'static str,
    pub role: Option<Role>,
    pub class: Option<&'static str>,
    pub text: Option<String>,
    pub children: Vec<ElementSpec>,
}

impl ElementSpec {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            role: None,
            class: None,
            text: None,
            children: Vec::new(),
        }
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: ElementSpec) -> Self {
        self.children.push(child);
        self
    }

    /// Markup for the children only, as assigned to `innerHTML`.
    pub fn children_html(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.write_html(&mut out);
        }
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        if let Some(role) = self.role {
            out.push_str(&format!(" {}=\"{}\"", ROLE_ATTR, role.as_attr()));
        }
        if let Some(class) = self.class {
            out.push_str(&format!(" class=\"{}\"", escape_html(class)));
        }
        out.push('>');
        if let Some(text) = &self.text {
            out.push_str(&escape_html(text));
        }
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

/// Text shown in a card's likes element.
pub fn likes_text(count: u32) -> String {
    format!("{} Likes", count)
}

/// The card for one item: `li > h3 + p + button`.
pub fn card_spec(item: &Item) -> ElementSpec {
    ElementSpec::new("li")
        .role(Role::Card)
        .class("card")
        .child(ElementSpec::new("h3").role(Role::Label).text(item.label.clone()))
        .child(ElementSpec::new("p").role(Role::Likes).text(likes_text(item.count)))
        .child(
            ElementSpec::new("button")
                .role(Role::Increment)
                .class("like-btn")
                .text("Add Like"),
        )
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemId;

    fn item(label: &str, count: u32) -> Item {
        Item {
            id: ItemId(1),
            label: label.to_string(),
            count,
        }
    }

    #[test]
    fn test_card_spec_roles() {
        let card = card_spec(&item("Twix", 10));
        assert_eq!(card.tag, "li");
        assert_eq!(card.role, Some(Role::Card));

        let roles: Vec<_> = card.children.iter().map(|c| c.role).collect();
        assert_eq!(roles, vec![Some(Role::Label), Some(Role::Likes), Some(Role::Increment)]);
        assert_eq!(card.children[1].text.as_deref(), Some("10 Likes"));
    }

    #[test]
    fn test_children_html() {
        let html = card_spec(&item("M&Ms", 5)).children_html();
        assert_eq!(
            html,
            "<h3 data-role=\"label\">M&amp;Ms</h3>\
             <p data-role=\"likes\">5 Likes</p>\
             <button data-role=\"increment\" class=\"like-btn\">Add Like</button>"
        );
    }

    #[test]
    fn test_label_markup_is_escaped() {
        let html = card_spec(&item("<span>8</span>", 0)).children_html();
        assert!(html.contains("&lt;span&gt;8&lt;/span&gt;"));
        assert!(!html.contains("<span>"));
    }

    #[test]
    fn test_role_attr_round_trip() {
        for role in [Role::Card, Role::Label, Role::Likes, Role::Increment] {
            assert_eq!(Role::from_attr(role.as_attr()), Some(role));
        }
        assert_eq!(Role::from_attr("like-btn"), None);
        assert_eq!(Role::Increment.selector(), "[data-role=\"increment\"]");
    }

    #[test]
    fn test_strategy_from_str() {
        assert_eq!("hybrid".parse::<RenderStrategy>().unwrap(), RenderStrategy::InnerHtml);
        assert_eq!("create-element".parse::<RenderStrategy>().unwrap(), RenderStrategy::CreateElement);
        assert!("template".parse::<RenderStrategy>().is_err());
    }
}
