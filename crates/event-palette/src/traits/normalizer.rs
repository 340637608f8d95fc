//! Trait for cleaning up free-text submissions.

/// Normalizes the raw query before it is submitted as a text event.
pub trait TextNormalizer {
    /// Return the content the text event should carry.
    fn normalize(&self, text: &str) -> String;
}

/// Default normalizer: strips trailing whitespace from each line and drops
/// blank lines at the start and end.
///
/// Optionally caps the number of lines and the number of characters per
/// line, for hosts whose text boxes have a fixed size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrimLines {
    /// Keep at most this many lines.
    pub max_lines: Option<usize>,
    /// Truncate each line to this many characters.
    pub max_line_length: Option<usize>,
}

impl TrimLines {
    pub fn new(max_lines: Option<usize>, max_line_length: Option<usize>) -> Self {
        Self {
            max_lines,
            max_line_length,
        }
    }
}

impl TextNormalizer for TrimLines {
    fn normalize(&self, text: &str) -> String {
        let lines: Vec<&str> = text.lines().map(str::trim_end).collect();

        let Some(first) = lines.iter().position(|line| !line.is_empty()) else {
            return String::new();
        };
        let last = lines
            .iter()
            .rposition(|line| !line.is_empty())
            .unwrap_or(first);

        let max_lines = self.max_lines.unwrap_or(usize::MAX);
        lines[first..=last]
            .iter()
            .take(max_lines)
            .map(|line| match self.max_line_length {
                Some(max) => line.chars().take(max).collect::<String>().trim_end().to_string(),
                None => line.to_string(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<F> TextNormalizer for F
where
    F: Fn(&str) -> String,
{
    fn normalize(&self, text: &str) -> String {
        self(text)
    }
}
