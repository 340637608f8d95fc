//! Extension traits for plugging the palette into a host editor.

mod add_handler;
mod localizer;
mod normalizer;

pub use add_handler::{dispatch_add, AddHandler};
pub use localizer::{LocaleError, Localizer, NoLocalization, StringTable};
pub use normalizer::{TextNormalizer, TrimLines};
