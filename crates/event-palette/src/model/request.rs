//! What a commit asks the host to add.

/// Event id used for free-text submissions.
pub const FREE_TEXT_EVENT: &str = "EVENT_TEXT";

/// The payload of a successful commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddRequest {
    /// Add the registry event with this id.
    Regular(String),
    /// Add a text event with this (already normalized) content.
    FreeText(String),
}

impl AddRequest {
    /// The event id the host should add.
    pub fn event_id(&self) -> &str {
        match self {
            AddRequest::Regular(id) => id,
            AddRequest::FreeText(_) => FREE_TEXT_EVENT,
        }
    }

    /// Text payload for free-text requests.
    pub fn text(&self) -> Option<&str> {
        match self {
            AddRequest::Regular(_) => None,
            AddRequest::FreeText(text) => Some(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_id() {
        assert_eq!(AddRequest::Regular("EVENT_WAIT".into()).event_id(), "EVENT_WAIT");
        assert_eq!(AddRequest::FreeText("hi".into()).event_id(), FREE_TEXT_EVENT);
    }

    #[test]
    fn test_text() {
        assert_eq!(AddRequest::Regular("EVENT_WAIT".into()).text(), None);
        assert_eq!(AddRequest::FreeText("hi".into()).text(), Some("hi"));
    }
}
