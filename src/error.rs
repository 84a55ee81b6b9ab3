/// Error types for markdown conversion and site generation
use thiserror::Error;

/// Failure modes of the markdown → HTML pipeline.
///
/// Every variant aborts the conversion of the document in progress; nothing
/// is recovered internally and no partial tree is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// A delimiter was opened but never closed, e.g. `some **bold text`.
    #[error("invalid markdown: {0:?} section not closed")]
    MalformedDelimiter(String),

    /// A link or image span has no URL. The tokenizer always supplies one,
    /// so this only fires for hand-constructed spans.
    #[error("{0} span must have a url")]
    MissingUrl(&'static str),

    /// A container node was asked to serialize without a tag.
    #[error("container node must have a tag")]
    MissingTag,

    /// A container node was asked to serialize with no children collection
    /// (distinct from an empty one, which is legal).
    #[error("container node must have children")]
    MissingChildren,

    /// A leaf node was asked to serialize without a value.
    #[error("leaf node must have a value")]
    MissingValue,

    /// A text span variant the converter does not recognize. Unreachable
    /// while every variant is matched exhaustively; kept so the error
    /// surface is stable if spans grow new variants.
    #[error("unsupported text span: {0}")]
    UnsupportedSpan(String),
}

/// Failure modes of the page-generation glue around the core pipeline.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Convert(#[from] ConvertError),

    /// The document has no h1 line to use as the page title.
    #[error("no h1 header found in markdown")]
    MissingTitle,
}
