//! Splitting a label into highlighted and plain runs for the query words.

/// A run of a label, either matching a query word or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub highlighted: bool,
}

/// Mark every occurrence of every non-empty word in `text`.
///
/// Matching ignores ASCII case. Overlapping and adjacent matches merge into
/// one highlighted run.
pub fn highlight_segments<'a, I, S>(text: &'a str, words: I) -> Vec<Segment<'a>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let bytes = text.as_bytes();
    let mut marked = vec![false; bytes.len()];

    for word in words {
        let needle = word.as_ref().as_bytes();
        if needle.is_empty() || needle.len() > bytes.len() {
            continue;
        }
        for start in 0..=bytes.len() - needle.len() {
            let end = start + needle.len();
            if bytes[start..end].eq_ignore_ascii_case(needle) {
                marked[start..end].fill(true);
            }
        }
    }

    // Matches start and end on char boundaries, so every run does too
    let mut segments = Vec::new();
    let mut start = 0;
    for i in 1..=bytes.len() {
        if i == bytes.len() || marked[i] != marked[start] {
            segments.push(Segment {
                text: &text[start..i],
                highlighted: marked[start],
            });
            start = i;
        }
    }
    segments
}
