use serde::Serialize;

/// One search hit inside a tab's displayed text.
///
/// Offsets are half-open char (Unicode scalar) offsets into the text, not
/// byte offsets; the frontend maps them onto the rendered string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

/// Find every case-insensitive occurrence of `query` in `text`.
///
/// Scans left to right; after a hit the scan resumes at the hit's end, so
/// overlapping matches are never reported. An empty query matches nothing.
pub fn search(text: &str, query: &str) -> Vec<MatchSpan> {
    if query.is_empty() {
        return Vec::new();
    }

    let haystack: Vec<char> = text.chars().collect();
    let needle: Vec<char> = query.chars().collect();
    let mut spans = Vec::new();

    if needle.len() > haystack.len() {
        return spans;
    }

    let mut pos = 0;
    while pos + needle.len() <= haystack.len() {
        if window_matches(&haystack[pos..pos + needle.len()], &needle) {
            spans.push(MatchSpan {
                start: pos,
                end: pos + needle.len(),
            });
            pos += needle.len();
        } else {
            pos += 1;
        }
    }

    spans
}

fn window_matches(window: &[char], needle: &[char]) -> bool {
    window
        .iter()
        .zip(needle)
        .all(|(a, b)| a.to_lowercase().eq(b.to_lowercase()))
}
