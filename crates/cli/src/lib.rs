//! Interactive front end for the inventory store.
//!
//! Thin glue only: prompts, parsing and table rendering. Every decision about
//! the inventory itself is made by `stockroom-inventory`.

pub mod prompt;
pub mod render;
pub mod session;
pub mod settings;

pub use session::{MenuChoice, Session};
pub use settings::Settings;
