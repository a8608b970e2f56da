//! Facility categories and the tiered classification result.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Facility categories promoted to the icon/summary strip on a school
/// profile. The enumeration order is the display order and is fixed:
/// classification emits featured categories in this order no matter how
/// the source facility list is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FacilityCategory {
    Pool,
    Library,
    ScienceLab,
    SportsField,
    Gymnasium,
    Auditorium,
    ArtStudio,
    MusicRoom,
    Cafeteria,
    Playground,
}

impl FacilityCategory {
    /// All categories, in display order.
    pub const ALL: [FacilityCategory; 10] = [
        FacilityCategory::Pool,
        FacilityCategory::Library,
        FacilityCategory::ScienceLab,
        FacilityCategory::SportsField,
        FacilityCategory::Gymnasium,
        FacilityCategory::Auditorium,
        FacilityCategory::ArtStudio,
        FacilityCategory::MusicRoom,
        FacilityCategory::Cafeteria,
        FacilityCategory::Playground,
    ];

    /// Human-readable label for the summary strip.
    pub fn label(&self) -> &'static str {
        match self {
            FacilityCategory::Pool => "Swimming Pool",
            FacilityCategory::Library => "Library",
            FacilityCategory::ScienceLab => "Science Lab",
            FacilityCategory::SportsField => "Sports Field",
            FacilityCategory::Gymnasium => "Gymnasium",
            FacilityCategory::Auditorium => "Auditorium",
            FacilityCategory::ArtStudio => "Art Studio",
            FacilityCategory::MusicRoom => "Music Room",
            FacilityCategory::Cafeteria => "Cafeteria",
            FacilityCategory::Playground => "Playground",
        }
    }

    /// Position in the fixed display order.
    pub fn sort_order(&self) -> usize {
        FacilityCategory::ALL
            .iter()
            .position(|category| category == self)
            .unwrap_or(FacilityCategory::ALL.len())
    }
}

impl fmt::Display for FacilityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One source facility string matched to a featured category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilityMatch {
    /// The category the string was assigned to (first match wins).
    pub category: FacilityCategory,
    /// The trimmed original string.
    pub source: String,
}

/// Classification result: featured categories plus everything else.
///
/// Every non-empty input string lands in exactly one of `matches` or
/// `remaining`; nothing is dropped and nothing is counted twice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TieredFacilities {
    /// Categories with at least one match, in fixed display order.
    pub featured: Vec<FacilityCategory>,
    /// (category, original string) pairs in input order.
    pub matches: Vec<FacilityMatch>,
    /// Unmatched original strings, in input order.
    pub remaining: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::FacilityCategory;

    #[test]
    fn test_display_order_is_stable() {
        assert!(FacilityCategory::Pool.sort_order() < FacilityCategory::Library.sort_order());
        assert!(FacilityCategory::Library.sort_order() < FacilityCategory::Playground.sort_order());
    }

    #[test]
    fn test_labels() {
        assert_eq!(FacilityCategory::Pool.label(), "Swimming Pool");
        assert_eq!(FacilityCategory::ScienceLab.label(), "Science Lab");
    }
}
