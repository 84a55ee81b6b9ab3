/// HTML element tree produced by the converters
use serde::{Deserialize, Serialize};

/// A node in the output HTML tree.
///
/// The tree is strictly parent-owns-children: every child lives in exactly
/// one `Parent`'s vector, built bottom-up and dropped top-down after
/// rendering. Attributes are an insertion-ordered list of unique keys and
/// render in that order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HtmlNode {
    /// A childless node: either a tagged element wrapping a literal value,
    /// or (with no tag) raw text emitted without any markup.
    Leaf {
        tag: Option<String>,
        value: Option<String>,
        attrs: Vec<(String, String)>,
    },
    /// A tagged element whose content is a sequence of child nodes.
    Parent {
        tag: String,
        children: Option<Vec<HtmlNode>>,
        attrs: Vec<(String, String)>,
    },
}

impl HtmlNode {
    /// Raw text leaf, rendered with no surrounding markup.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: Some(value.into()),
            attrs: Vec::new(),
        }
    }

    /// Tagged leaf with no attributes, e.g. `<b>value</b>`.
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attrs: Vec::new(),
        }
    }

    /// Tagged leaf with attributes, e.g. `<a href="...">value</a>`.
    pub fn leaf_with_attrs(
        tag: impl Into<String>,
        value: impl Into<String>,
        attrs: Vec<(String, String)>,
    ) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attrs,
        }
    }

    /// Container element owning an ordered sequence of children.
    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: tag.into(),
            children: Some(children),
            attrs: Vec::new(),
        }
    }

    /// Container element with attributes.
    pub fn parent_with_attrs(
        tag: impl Into<String>,
        children: Vec<HtmlNode>,
        attrs: Vec<(String, String)>,
    ) -> Self {
        HtmlNode::Parent {
            tag: tag.into(),
            children: Some(children),
            attrs,
        }
    }
}
