/// Astral core logic.
///
/// Everything in this crate is pure: no I/O, no clock reads, no shared
/// mutable state. The server crates supply "today" as an argument so the
/// same code answers historical requests.
pub mod catalog;
pub mod history;
pub mod selector;
pub mod sign;

pub use history::{HistoryEntry, reconcile};
pub use selector::{FALLBACK_MESSAGE, select, select_by_name};
pub use sign::Sign;
