/// Block segmentation, classification, and block-to-node conversion
use serde::{Deserialize, Serialize};

use crate::error::ConvertError;
use crate::inline::tokenize;
use crate::node::HtmlNode;

/// The structural kind of one top-level block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockKind {
    /// ATX heading; carries the level (1-6).
    Heading(u8),
    Code,
    Quote,
    UnorderedList,
    OrderedList,
    Paragraph,
}

/// Split a document into trimmed, non-empty block strings.
///
/// Blocks are separated by blank lines (`\n\n`); each piece is trimmed
/// independently and whitespace-only pieces are discarded. Single newlines
/// inside a block are preserved, later stages depend on them.
pub fn split_blocks(document: &str) -> Vec<String> {
    document
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(str::to_string)
        .collect()
}

/// Classify a trimmed block. Rules apply in a fixed precedence order and
/// the first match wins; anything unmatched is a paragraph.
pub fn classify(block: &str) -> BlockKind {
    if let Some(level) = heading_level(block) {
        return BlockKind::Heading(level);
    }
    if block.starts_with("```") && block.ends_with("```") {
        return BlockKind::Code;
    }
    let lines: Vec<&str> = block.split('\n').collect();
    if lines.iter().all(|line| line.starts_with('>')) {
        return BlockKind::Quote;
    }
    if lines.iter().all(|line| line.starts_with("- ")) {
        return BlockKind::UnorderedList;
    }
    if is_ordered_list(&lines) {
        return BlockKind::OrderedList;
    }
    BlockKind::Paragraph
}

/// 1 to 6 `#` characters followed by a space, checked at the start of the
/// whole block (not per line).
fn heading_level(block: &str) -> Option<u8> {
    let hashes = block.bytes().take_while(|&b| b == b'#').count();
    if (1..=6).contains(&hashes) && block.as_bytes().get(hashes) == Some(&b' ') {
        Some(hashes as u8)
    } else {
        None
    }
}

/// Every line must start with `"{n}. "` for n = 1, 2, 3, ... with no gaps.
/// Numbers compare as exact strings, so `"10. "` is required for item ten.
fn is_ordered_list(lines: &[&str]) -> bool {
    lines
        .iter()
        .zip(1..)
        .all(|(line, n)| line.starts_with(&format!("{}. ", n)))
}

/// Convert a whole document into its root `div` container.
pub fn document_to_node(document: &str) -> Result<HtmlNode, ConvertError> {
    let mut children = Vec::new();
    for block in split_blocks(document) {
        let node = match classify(&block) {
            BlockKind::Heading(level) => heading_to_node(&block, level)?,
            BlockKind::Code => code_to_node(&block),
            BlockKind::Quote => quote_to_node(&block)?,
            BlockKind::UnorderedList => unordered_list_to_node(&block)?,
            BlockKind::OrderedList => ordered_list_to_node(&block)?,
            BlockKind::Paragraph => paragraph_to_node(&block)?,
        };
        children.push(node);
    }
    Ok(HtmlNode::parent("div", children))
}

/// Tokenize inline markdown and convert each span to its leaf node.
fn inline_children(text: &str) -> Result<Vec<HtmlNode>, ConvertError> {
    tokenize(text)?
        .into_iter()
        .map(|span| span.into_node())
        .collect()
}

fn heading_to_node(block: &str, level: u8) -> Result<HtmlNode, ConvertError> {
    // Strip the hashes and exactly one following space.
    let text = &block[level as usize + 1..];
    Ok(HtmlNode::parent(
        format!("h{}", level),
        inline_children(text)?,
    ))
}

fn paragraph_to_node(block: &str) -> Result<HtmlNode, ConvertError> {
    let text = block.replace('\n', " ");
    Ok(HtmlNode::parent("p", inline_children(&text)?))
}

/// Code content is verbatim: no inline tokenization, and only the single
/// newline right after the opening fence is dropped.
fn code_to_node(block: &str) -> HtmlNode {
    let inner = if block.len() >= 6 {
        &block[3..block.len() - 3]
    } else {
        // The block is a bare fence (classification allows it); no content.
        ""
    };
    let text = inner.strip_prefix('\n').unwrap_or(inner);
    let code = HtmlNode::parent("code", vec![HtmlNode::text(text)]);
    HtmlNode::parent("pre", vec![code])
}

fn quote_to_node(block: &str) -> Result<HtmlNode, ConvertError> {
    let lines: Vec<&str> = block
        .split('\n')
        .map(|line| {
            line.strip_prefix("> ")
                .or_else(|| line.strip_prefix('>'))
                .unwrap_or(line)
        })
        .collect();
    let text = lines.join(" ");
    Ok(HtmlNode::parent("blockquote", inline_children(&text)?))
}

fn unordered_list_to_node(block: &str) -> Result<HtmlNode, ConvertError> {
    let items = block
        .split('\n')
        .map(|line| Ok(HtmlNode::parent("li", inline_children(&line[2..])?)))
        .collect::<Result<Vec<_>, ConvertError>>()?;
    Ok(HtmlNode::parent("ul", items))
}

fn ordered_list_to_node(block: &str) -> Result<HtmlNode, ConvertError> {
    let items = block
        .split('\n')
        .map(|line| {
            // Drop everything up to and including the first ". ".
            let text = match line.find(". ") {
                Some(i) => &line[i + 2..],
                None => line,
            };
            Ok(HtmlNode::parent("li", inline_children(text)?))
        })
        .collect::<Result<Vec<_>, ConvertError>>()?;
    Ok(HtmlNode::parent("ol", items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_on_blank_lines_and_trims() {
        let md = "# This is a heading\n\nThis is a paragraph of text.\n\n- First item\n- Second item";
        assert_eq!(
            split_blocks(md),
            vec![
                "# This is a heading",
                "This is a paragraph of text.",
                "- First item\n- Second item",
            ]
        );
    }

    #[test]
    fn drops_empty_and_whitespace_only_pieces() {
        let md = "\n\nFirst block\n\n\n\n   \n\nSecond block\n\n";
        assert_eq!(split_blocks(md), vec!["First block", "Second block"]);
    }

    #[test]
    fn preserves_single_newlines_inside_a_block() {
        let md = "Line one\nLine two\n\nNext";
        assert_eq!(split_blocks(md), vec!["Line one\nLine two", "Next"]);
    }

    #[test]
    fn segmentation_is_idempotent() {
        let blocks = split_blocks("  # Heading  \n\n  Para  ");
        let rejoined = blocks.join("\n\n");
        assert_eq!(split_blocks(&rejoined), blocks);
    }

    #[test]
    fn classifies_headings_by_level() {
        assert_eq!(classify("# h1"), BlockKind::Heading(1));
        assert_eq!(classify("### h3"), BlockKind::Heading(3));
        assert_eq!(classify("###### h6"), BlockKind::Heading(6));
    }

    #[test]
    fn seven_hashes_is_a_paragraph() {
        assert_eq!(classify("####### too many"), BlockKind::Paragraph);
    }

    #[test]
    fn hash_without_space_is_a_paragraph() {
        assert_eq!(classify("#nospace"), BlockKind::Paragraph);
    }

    #[test]
    fn classifies_code_fences() {
        assert_eq!(classify("```\ncode\n```"), BlockKind::Code);
        assert_eq!(classify("``````"), BlockKind::Code);
    }

    #[test]
    fn classifies_quotes_only_when_every_line_is_quoted() {
        assert_eq!(classify("> a\n> b"), BlockKind::Quote);
        assert_eq!(classify("> a\nb"), BlockKind::Paragraph);
    }

    #[test]
    fn classifies_unordered_lists() {
        assert_eq!(classify("- one\n- two"), BlockKind::UnorderedList);
        assert_eq!(classify("- one\ntwo"), BlockKind::Paragraph);
        // Dash without a trailing space is not a list marker.
        assert_eq!(classify("-one"), BlockKind::Paragraph);
    }

    #[test]
    fn classifies_ordered_lists() {
        assert_eq!(classify("1. one\n2. two\n3. three"), BlockKind::OrderedList);
    }

    #[test]
    fn ordered_list_must_count_from_one_without_gaps() {
        assert_eq!(classify("2. starts at two"), BlockKind::Paragraph);
        assert_eq!(classify("1. First item\n3. Skipped 2"), BlockKind::Paragraph);
        assert_eq!(classify("1. one\n2. two\n2. two again"), BlockKind::Paragraph);
    }

    #[test]
    fn ordered_list_with_double_digit_items() {
        let block = (1..=10)
            .map(|n| format!("{}. item", n))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(classify(&block), BlockKind::OrderedList);
    }

    #[test]
    fn plain_text_is_a_paragraph() {
        assert_eq!(classify("Just some text"), BlockKind::Paragraph);
    }

    #[test]
    fn heading_rule_wins_over_later_rules() {
        // Looks heading-ish and quote-ish on later lines; heading is checked
        // first against the block start and wins.
        assert_eq!(classify("# title\n> quote"), BlockKind::Heading(1));
    }

    #[test]
    fn heading_and_paragraph_document() {
        let root = document_to_node("# Heading\n\nPara").unwrap();
        assert_eq!(
            root,
            HtmlNode::parent(
                "div",
                vec![
                    HtmlNode::parent("h1", vec![HtmlNode::text("Heading")]),
                    HtmlNode::parent("p", vec![HtmlNode::text("Para")]),
                ]
            )
        );
    }

    #[test]
    fn empty_document_yields_childless_root() {
        assert_eq!(
            document_to_node("").unwrap(),
            HtmlNode::parent("div", vec![])
        );
        assert_eq!(
            document_to_node("   \n\n   \n   ").unwrap(),
            HtmlNode::parent("div", vec![])
        );
    }

    #[test]
    fn code_block_keeps_content_verbatim() {
        let root = document_to_node("```\nprint(1)\n```").unwrap();
        let code = HtmlNode::parent("code", vec![HtmlNode::text("print(1)\n")]);
        assert_eq!(
            root,
            HtmlNode::parent("div", vec![HtmlNode::parent("pre", vec![code])])
        );
    }

    #[test]
    fn code_block_does_not_tokenize_inline_markup() {
        let root =
            document_to_node("```\nkeep _this_ and **that** literal\n```").unwrap();
        let code = HtmlNode::parent(
            "code",
            vec![HtmlNode::text("keep _this_ and **that** literal\n")],
        );
        assert_eq!(
            root,
            HtmlNode::parent("div", vec![HtmlNode::parent("pre", vec![code])])
        );
    }

    #[test]
    fn bare_fence_block_is_empty_code() {
        let root = document_to_node("```").unwrap();
        let code = HtmlNode::parent("code", vec![HtmlNode::text("")]);
        assert_eq!(
            root,
            HtmlNode::parent("div", vec![HtmlNode::parent("pre", vec![code])])
        );
    }

    #[test]
    fn malformed_delimiter_aborts_the_document() {
        let err = document_to_node("fine\n\nbad **bold").unwrap_err();
        assert_eq!(err, ConvertError::MalformedDelimiter("**".to_string()));
    }
}
