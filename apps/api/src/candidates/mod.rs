// Saved candidates: in-memory list, card summaries, search and export.

pub mod export;
pub mod handlers;
pub mod store;
pub mod summary;
