//! Shortlist session state for the schools directory.
//!
//! This crate owns the user's shortlisted-school identifiers and keeps
//! three independent representations eventually consistent:
//!
//! - **shortlist**: the state machine (hydrate once, mutate, query)
//! - **store**: the persisted slot abstraction and its implementations
//! - **share**: the URL-shareable comma-separated encoding

pub mod share;
pub mod shortlist;
pub mod store;

pub use share::{SHARE_PARAM, ids_from_param, ids_from_query, param_from_ids};
pub use shortlist::Shortlist;
pub use store::{FileStore, MemoryStore, ShortlistStore};
