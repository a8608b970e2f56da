//! Display-safe normalization of school record fields.
//!
//! This crate provides the pure data-normalization layer of the directory:
//!
//! - **sanitize**: missing-value classification for scalar display fields
//! - **fees**: fee-range token parsing and publishability rules
//! - **currency**: base-currency conversion and display formatting
//! - **facilities**: keyword classification into featured categories
//! - **profile**: assembly of the display-ready school view model
//!
//! Everything here is total: any input, however malformed, yields a
//! defined, renderable output rather than an error.

pub mod currency;
pub mod facilities;
pub mod fees;
pub mod profile;
pub mod sanitize;

// Re-export common functions for external use
pub use currency::{FALLBACK_USD_RATE, convert_base_to_usd, fee_range_display, format_amount};
pub use facilities::{CATEGORY_MATCHERS, classify};
pub use fees::{
    FEES_NOT_PUBLISHED, UNPUBLISHED_PHRASES, display_fee, highest_fee, is_publishable, lowest_fee,
};
pub use profile::{NOT_AVAILABLE, SchoolProfile};
pub use sanitize::{is_missing, sanitize};
