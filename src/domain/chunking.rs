//! Word-boundary text segmentation.
//!
//! A chunk cut is computed over a bounded window of the source text so a
//! single step never touches more than `target_size + lookahead` characters.
//! The same cut function drives both the incremental pipeline and the
//! synchronous [`split_text`] helper.

/// Default chunk size in characters.
pub const DEFAULT_CHUNK_SIZE: usize = 200;

/// How far past the target size to scan for a break character.
pub const DEFAULT_LOOKAHEAD: usize = 20;

/// Result of cutting one chunk from the front of a window.
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkCut {
    /// Trimmed chunk text. May be empty when the window starts with a run of
    /// delimiters; the caller must then advance past `consumed` without
    /// assigning a chunk index.
    pub text: String,
    /// Number of characters the caller's cursor moves forward. For an empty
    /// cut this includes the single delimiter sitting at the cut point, so
    /// that delimiter runs are skipped rather than re-scanned.
    pub consumed: usize,
}

fn is_break_char(c: char) -> bool {
    c.is_whitespace() || c == '.' || c == ','
}

/// Cut the next chunk from the front of `window`.
///
/// The tentative cut sits at `min(target_size, window length)`. When that
/// falls strictly inside the window, the next `lookahead` characters are
/// scanned for the first whitespace, period or comma and the cut extends to
/// it. No break character within the lookahead means a mid-word cut; that is
/// the accepted cost of keeping each step bounded.
pub fn next_chunk(window: &str, target_size: usize, lookahead: usize) -> ChunkCut {
    let chars: Vec<char> = window.chars().collect();
    let mut end = target_size.min(chars.len());

    if end < chars.len() {
        let scan_end = (end + lookahead).min(chars.len());
        if let Some(offset) = chars[end..scan_end].iter().position(|c| is_break_char(*c)) {
            end += offset;
        }
    }

    let text: String = chars[..end].iter().collect();
    let text = text.trim().to_string();

    // An empty cut consumes the delimiter at the cut point as well, so the
    // next window does not start on the same run. Only a genuine delimiter is
    // skipped; a word character right after an all-whitespace prefix stays.
    let mut consumed = end;
    if text.is_empty() && matches!(chars.get(end), Some(c) if is_break_char(*c)) {
        consumed += 1;
    }

    ChunkCut { text, consumed }
}

/// Split a whole text in one synchronous pass by repeated application of
/// [`next_chunk`]. Empty cuts advance the cursor without emitting a chunk,
/// mirroring what the pipeline does step by step.
pub fn split_text(text: &str, target_size: usize, lookahead: usize) -> Vec<String> {
    let total = text.chars().count();
    let mut position = 0;
    let mut chunks = Vec::new();

    while position < total {
        let window: String = text
            .chars()
            .skip(position)
            .take(target_size + lookahead)
            .collect();

        let cut = next_chunk(&window, target_size, lookahead);
        position += cut.consumed;

        if !cut.text.is_empty() {
            chunks.push(cut.text);
        }
    }

    chunks
}
