//! Drug interaction checking.
//!
//! A small, auditable pairwise scan of a medication list against an
//! injected `InteractionTable`. The table is immutable once built and is
//! shared between checkers through `Arc`.

pub mod detection;
pub mod helpers;
pub mod messages;
pub mod reference;
pub mod types;

pub use detection::{find_conflicts, InteractionChecker};
pub use helpers::canonical_name;
pub use messages::InteractionMessages;
pub use reference::InteractionTable;
pub use types::{InteractionError, InteractionPair};
