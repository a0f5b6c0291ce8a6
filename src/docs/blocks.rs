//! Fenced code block extraction.

use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

/// A fenced code block inside a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// First word of the info string, lowercased
    pub language: Option<SmolStr>,
    /// Byte range of the block body (between the fences)
    pub range: TextRange,
}

impl CodeBlock {
    /// Body text within `page`
    pub fn code<'a>(&self, page: &'a str) -> &'a str {
        &page[self.range]
    }
}

struct Fence {
    marker: u8,
    len: usize,
    language: Option<SmolStr>,
    body_start: usize,
}

/// Find every fenced code block (```` ``` ```` or `~~~`).
///
/// A fence is at most three spaces indented; the closing fence uses the same
/// character and is at least as long. A block without a closing fence runs to
/// the end of the page.
pub fn extract_code_blocks(page: &str) -> Vec<CodeBlock> {
    let mut blocks = Vec::new();
    let mut open: Option<Fence> = None;
    let mut offset = 0;

    for line in page.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();
        let content = line.trim_end_matches(['\n', '\r']);

        match &open {
            None => {
                if let Some((marker, len, info)) = parse_fence(content) {
                    // Backtick fences cannot carry backticks in their info string
                    if marker == b'`' && info.contains('`') {
                        continue;
                    }
                    open = Some(Fence {
                        marker,
                        len,
                        language: info
                            .split_whitespace()
                            .next()
                            .map(|word| SmolStr::new(word.to_ascii_lowercase())),
                        body_start: offset,
                    });
                }
            }
            Some(fence) => {
                let closes = parse_fence(content).is_some_and(|(marker, len, info)| {
                    marker == fence.marker && len >= fence.len && info.is_empty()
                });
                if closes {
                    blocks.push(block(fence, line_start));
                    open = None;
                }
            }
        }
    }

    if let Some(fence) = &open {
        blocks.push(block(fence, page.len()));
    }
    blocks
}

fn block(fence: &Fence, body_end: usize) -> CodeBlock {
    let start = fence.body_start.min(body_end);
    CodeBlock {
        language: fence.language.clone(),
        range: TextRange::new(TextSize::new(start as u32), TextSize::new(body_end as u32)),
    }
}

/// `(marker, fence length, trimmed info string)` for a fence line
fn parse_fence(line: &str) -> Option<(u8, usize, &str)> {
    let indent = line.len() - line.trim_start_matches(' ').len();
    if indent > 3 {
        return None;
    }
    let rest = &line[indent..];
    let marker = *rest.as_bytes().first()?;
    if marker != b'`' && marker != b'~' {
        return None;
    }
    let len = rest.bytes().take_while(|&b| b == marker).count();
    if len < 3 {
        return None;
    }
    Some((marker, len, rest[len..].trim()))
}
