/// A markdown-powered static site generator
pub mod block;
pub mod error;
pub mod inline;
pub mod node;
pub mod renderer;
pub mod site;

pub use error::{ConvertError, SiteError};

use renderer::HtmlRenderer;

/// Parse a markdown document and render it as one HTML fragment.
///
/// The whole document is wrapped in a root `<div>`, suitable for direct
/// substitution into a page template. Conversion is all-or-nothing: any
/// malformed inline markup aborts with a typed error and no partial output.
pub fn markdown_to_html(markdown: &str) -> Result<String, ConvertError> {
    let root = block::document_to_node(markdown)?;
    let renderer = HtmlRenderer::new();
    renderer.render(&root)
}
