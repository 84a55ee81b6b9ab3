/// HTML renderer for the element node tree
use crate::error::ConvertError;
use crate::node::HtmlNode;

pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        HtmlRenderer
    }

    /// Serialize a node tree to its exact HTML string.
    ///
    /// Attribute values and text are emitted verbatim; callers must
    /// pre-escape untrusted content themselves.
    pub fn render(&self, node: &HtmlNode) -> Result<String, ConvertError> {
        render_node(node)
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn render_node(node: &HtmlNode) -> Result<String, ConvertError> {
    match node {
        HtmlNode::Leaf { tag, value, attrs } => {
            let value = value.as_ref().ok_or(ConvertError::MissingValue)?;
            match tag {
                // A tagged leaf always closes explicitly, even when empty:
                // <img src="..." alt="..."></img>, never a self-closing form.
                Some(tag) => Ok(format!(
                    "<{}{}>{}</{}>",
                    tag,
                    render_attrs(attrs),
                    value,
                    tag
                )),
                // No tag: raw text, no markup.
                None => Ok(value.clone()),
            }
        }
        HtmlNode::Parent {
            tag,
            children,
            attrs,
        } => {
            if tag.is_empty() {
                return Err(ConvertError::MissingTag);
            }
            let children = children.as_ref().ok_or(ConvertError::MissingChildren)?;
            let mut content = String::new();
            for child in children {
                content.push_str(&render_node(child)?);
            }
            Ok(format!(
                "<{}{}>{}</{}>",
                tag,
                render_attrs(attrs),
                content,
                tag
            ))
        }
    }
}

/// Render attributes in insertion order, each as ` name="value"`.
fn render_attrs(attrs: &[(String, String)]) -> String {
    attrs
        .iter()
        .map(|(name, value)| format!(" {}=\"{}\"", name, value))
        .collect()
}
