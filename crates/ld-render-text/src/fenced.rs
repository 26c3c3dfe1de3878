//! Redraw line art inside tagged fenced code blocks of a Markdown document.
//!
//! Only fence lines are recognised; the rest of the document is opaque text
//! and is copied through byte for byte.

use ld_core::FenceConfig;
use tracing::{debug, trace};

use crate::report::{RewriteStats, process_with_stats};

/// Longest indentation still allowed in front of a fence.
const MAX_FENCE_INDENT: usize = 3;

/// A fenced block whose body was redrawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FencedBlock {
    /// First body line (0-based, the line after the opening fence).
    pub start_line: usize,
    /// One past the last body line.
    pub end_line: usize,
    /// Configured tag that matched the info string.
    pub tag: String,
    pub stats: RewriteStats,
}

/// Document with tagged blocks redrawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FencedOutcome {
    pub output: String,
    pub blocks: Vec<FencedBlock>,
}

impl FencedOutcome {
    /// Statistics summed over every redrawn block.
    #[must_use]
    pub fn total_stats(&self) -> RewriteStats {
        let mut total = RewriteStats::default();
        for block in &self.blocks {
            total.merge(&block.stats);
        }
        total
    }
}

#[derive(Debug, Clone, Copy)]
struct Fence<'a> {
    marker: char,
    len: usize,
    info: &'a str,
}

fn strip_indent(line: &str) -> Option<&str> {
    let indent = line.len() - line.trim_start_matches(' ').len();
    (indent <= MAX_FENCE_INDENT).then(|| &line[indent..])
}

fn opening_fence(line: &str) -> Option<Fence<'_>> {
    let rest = strip_indent(line)?;
    let marker = rest.chars().next().filter(|&ch| ch == '`' || ch == '~')?;
    let len = rest.len() - rest.trim_start_matches(marker).len();
    if len < 3 {
        return None;
    }
    let info = &rest[len..];
    if marker == '`' && info.contains('`') {
        return None;
    }
    Some(Fence { marker, len, info })
}

fn closes(line: &str, fence: &Fence<'_>) -> bool {
    let Some(rest) = strip_indent(line) else {
        return false;
    };
    let len = rest.len() - rest.trim_start_matches(fence.marker).len();
    len >= fence.len && rest[len..].trim().is_empty()
}

/// Redraw the body of every fenced block whose info string starts with one
/// of `config.tags`. Everything else is copied unchanged, and the document
/// keeps its line count and line lengths.
///
/// A block without a closing fence runs to the end of the document.
#[must_use]
pub fn render_fenced(markdown: &str, config: &FenceConfig) -> FencedOutcome {
    let lines: Vec<&str> = markdown.split('\n').collect();
    let mut output: Vec<String> = Vec::with_capacity(lines.len());
    let mut blocks = Vec::new();
    let mut i = 0_usize;

    while i < lines.len() {
        let line = lines[i];
        output.push(line.to_string());
        i += 1;

        let Some(fence) = opening_fence(line) else {
            continue;
        };

        let start = i;
        let close = (start..lines.len()).find(|&j| closes(lines[j], &fence));
        let end = close.unwrap_or(lines.len());

        match config.matches(fence.info) {
            Some(tag) if start < end => {
                let outcome = process_with_stats(&lines[start..end].join("\n"));
                trace!(start, end, tag, "redrawing fenced block");
                output.extend(outcome.output.split('\n').map(str::to_string));
                blocks.push(FencedBlock {
                    start_line: start,
                    end_line: end,
                    tag: tag.to_string(),
                    stats: outcome.stats,
                });
            }
            _ => output.extend(lines[start..end].iter().map(|body| (*body).to_string())),
        }

        if let Some(close) = close {
            output.push(lines[close].to_string());
            i = close + 1;
        } else {
            i = end;
        }
    }

    debug!(blocks = blocks.len(), lines = lines.len(), "fenced pass complete");

    FencedOutcome {
        output: output.join("\n"),
        blocks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn default_pass(markdown: &str) -> FencedOutcome {
        render_fenced(markdown, &FenceConfig::default())
    }

    #[test]
    fn redraws_tagged_block_only() {
        let doc = "# Title\n\nA - B | C\n\n```ascii-art\n+--+\n|  |\n+--+\n```\n\n```text\n+--+\n```\n";
        let outcome = default_pass(doc);
        assert_eq!(
            outcome.output,
            "# Title\n\nA - B | C\n\n```ascii-art\n┌──┐\n│  │\n└──┘\n```\n\n```text\n+--+\n```\n"
        );
        assert_eq!(outcome.blocks.len(), 1);
        assert_eq!(outcome.blocks[0].start_line, 5);
        assert_eq!(outcome.blocks[0].end_line, 8);
        assert_eq!(outcome.blocks[0].tag, "ascii-art");
        assert_eq!(outcome.blocks[0].stats.joints, 4);
    }

    #[test]
    fn fence_lines_are_not_part_of_the_art() {
        // The opening fence sits right above the `+`; it must not be seen as
        // a neighbour, so the corner only joins rightward.
        let outcome = default_pass("~~~ascii\n+-\n~~~");
        assert_eq!(outcome.output, "~~~ascii\n╶─\n~~~");
    }

    #[test]
    fn tag_match_is_case_insensitive_and_uses_first_word() {
        let outcome = default_pass("``` ASCIIART title\n-\n```");
        assert_eq!(outcome.output, "``` ASCIIART title\n─\n```");
        assert_eq!(outcome.blocks[0].tag, "asciiart");
    }

    #[test]
    fn unterminated_block_runs_to_end() {
        let outcome = default_pass("```ascii-art\n|\n+-");
        assert_eq!(outcome.output, "```ascii-art\n│\n└─");
        assert_eq!(outcome.blocks[0].end_line, 3);
    }

    #[test]
    fn closing_fence_must_be_long_enough() {
        let outcome = default_pass("````ascii\n-\n```\n-\n````\n-");
        assert_eq!(outcome.output, "````ascii\n─\n```\n─\n````\n-");
    }

    #[test]
    fn tilde_block_is_not_closed_by_backticks() {
        let outcome = default_pass("~~~ascii\n```\n|\n~~~\n|");
        assert_eq!(outcome.output, "~~~ascii\n```\n│\n~~~\n|");
    }

    #[test]
    fn indented_fences_up_to_three_spaces() {
        let outcome = default_pass("   ```ascii\n   -\n   ```\n    ```ascii\n-");
        assert_eq!(outcome.output, "   ```ascii\n   ─\n   ```\n    ```ascii\n-");
    }

    #[test]
    fn backtick_info_with_backtick_is_not_a_fence() {
        let outcome = default_pass("```ascii `x`\n-\n```");
        assert!(outcome.blocks.is_empty());
    }

    #[test]
    fn empty_block_is_skipped() {
        let outcome = default_pass("```ascii\n```\n-");
        assert_eq!(outcome.output, "```ascii\n```\n-");
        assert!(outcome.blocks.is_empty());
    }

    #[test]
    fn custom_tags_replace_defaults() {
        let config = FenceConfig::with_tags(["diagram"]);
        let doc = "```diagram\n-\n```\n```ascii-art\n-\n```";
        let outcome = render_fenced(doc, &config);
        assert_eq!(outcome.output, "```diagram\n─\n```\n```ascii-art\n-\n```");
    }

    #[test]
    fn crlf_documents_keep_their_line_endings() {
        let outcome = default_pass("```ascii\r\n+-+\r\n```\r\n");
        assert_eq!(outcome.output, "```ascii\r\n╶─╴\r\n```\r\n");
    }

    #[test]
    fn totals_sum_every_block() {
        let outcome = default_pass("```ascii\n-\n```\ntext\n```ascii\n|\n|\n```");
        let total = outcome.total_stats();
        assert_eq!(outcome.blocks.len(), 2);
        assert_eq!(total.strokes, 3);
        assert_eq!(total.rows, 3);
    }

    fn line_lengths(text: &str) -> Vec<usize> {
        text.split('\n').map(|line| line.chars().count()).collect()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_document_shape_is_preserved(
            body in "[+*/\\\\|\\- ax\n]{0,80}",
            prose in "[a-z |\\-\n]{0,40}",
        ) {
            let doc = format!("{prose}\n```ascii-art\n{body}\n```\n{prose}");
            let outcome = default_pass(&doc);
            prop_assert_eq!(line_lengths(&outcome.output), line_lengths(&doc));
        }

        #[test]
        fn prop_untagged_documents_are_unchanged(doc in "[a-z+|\\-`~ \n]{0,160}") {
            let config = FenceConfig::with_tags(["never-used-tag"]);
            prop_assert_eq!(render_fenced(&doc, &config).output, doc);
        }
    }
}
