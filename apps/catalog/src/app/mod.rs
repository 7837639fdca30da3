// App module for seafood_catalog
// Holds application state and turns clicks into view effects

pub mod actions;
pub mod interaction;
pub mod page;
pub mod share;
pub mod state;

pub use actions::Action;
pub use interaction::{resolve_click, ActionTag, ClickTarget};
pub use page::{Effect, Page};
pub use share::{ShareEnvironment, ShareMode, ShareOutcome, SharePayload, Sharer};
pub use state::App;
