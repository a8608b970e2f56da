pub mod currency;
pub mod draft;
pub mod error;
pub mod facilities;
pub mod school;
pub mod value;

pub use currency::{BASE_CURRENCY, Currency};
pub use draft::{DraftRecord, DraftStatus};
pub use error::{Result, SchooldirError};
pub use facilities::{FacilityCategory, FacilityMatch, TieredFacilities};
pub use school::SchoolRecord;
pub use value::RawValue;
