//! Assembly of the display-ready school profile view model.

use serde::Serialize;
use tracing::debug;

use schooldir_model::{Currency, SchoolRecord, TieredFacilities};

use crate::currency::fee_range_display;
use crate::facilities::classify;
use crate::fees;
use crate::sanitize::sanitize;

/// Fallback shown for any missing scalar field.
pub const NOT_AVAILABLE: &str = "Not available";

/// Display-safe projection of a [`SchoolRecord`].
///
/// Computed fresh on every render pass from the latest source record;
/// never cached or mutated. Every field is renderable as-is — the "never
/// show broken data" contract lives here.
#[derive(Debug, Clone, Serialize)]
pub struct SchoolProfile {
    pub id: String,
    pub name: String,
    pub city: String,
    pub curriculum: String,
    pub rating: String,
    /// Verbatim fee text, or the "Fees not published" sentinel.
    pub fee_display: String,
    /// Parsed lower bound in thousands of USD; 0 = no data.
    pub lowest_fee: f64,
    /// Parsed upper bound in thousands of USD; 0 = no data.
    pub highest_fee: f64,
    pub fee_publishable: bool,
    /// Converted tuition range, when base-currency bounds exist.
    pub fee_range_converted: Option<String>,
    pub facilities: TieredFacilities,
}

impl SchoolProfile {
    /// Build the view model for one school.
    ///
    /// `unpublished_ids` is the editorial override list of schools whose
    /// fees must not be shown even when the source text carries figures.
    pub fn from_record(
        record: &SchoolRecord,
        display_currency: Currency,
        unpublished_ids: &[String],
    ) -> Self {
        let fee_text = record.fee_range.as_deref().unwrap_or("").trim();
        let overridden = unpublished_ids.iter().any(|id| id == &record.id);
        let fee_publishable = !overridden && fees::is_publishable(fee_text);
        if !fee_publishable {
            debug!(school = %record.id, "fee range not publishable, rendering sentinel");
        }

        let fee_display = if fee_text.is_empty() {
            fees::FEES_NOT_PUBLISHED.to_string()
        } else {
            fees::display_fee(fee_text, &record.id, unpublished_ids)
        };

        let fee_range_converted = match (record.tuition_low, record.tuition_high) {
            (Some(low), Some(high)) => Some(fee_range_display(
                low,
                high,
                display_currency,
                record.usd_rate,
            )),
            _ => None,
        };

        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            city: sanitize(&record.city, NOT_AVAILABLE),
            curriculum: sanitize(&record.curriculum, NOT_AVAILABLE),
            rating: sanitize(&record.rating, NOT_AVAILABLE),
            fee_display,
            lowest_fee: fees::lowest_fee(fee_text),
            highest_fee: fees::highest_fee(fee_text),
            fee_publishable,
            fee_range_converted,
            facilities: classify(&record.facilities),
        }
    }
}
