//! Data models for the event palette.

mod candidate;
mod definition;
mod request;
mod subject;

pub use candidate::SearchCandidate;
pub use definition::ActionDefinition;
pub use request::{AddRequest, FREE_TEXT_EVENT};
pub use subject::ScriptSubject;
