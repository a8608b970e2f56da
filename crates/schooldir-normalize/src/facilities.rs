//! Facility classification.
//!
//! Buckets a free-text facility list into the fixed set of featured
//! categories plus a leftover list. Matching is an ordered table of
//! (category, keyword alternation) pairs evaluated first-match-wins, so a
//! string is never double-counted even when it matches several categories.
//! Keywords match case-insensitively and only on whole words ("lab"
//! matches "Computer Lab" but not "Collaboration Hub").

use regex::Regex;
use schooldir_model::{FacilityCategory, FacilityMatch, TieredFacilities};

/// Ordered matcher table. The order here is both the evaluation order
/// (first match wins) and the display order of `featured`. Each entry is a
/// `|`-separated keyword alternation compiled into a whole-word matcher.
pub const CATEGORY_MATCHERS: [(FacilityCategory, &str); 10] = [
    (FacilityCategory::Pool, "pool|swimming"),
    (FacilityCategory::Library, "library"),
    (FacilityCategory::ScienceLab, "science lab|laboratory|lab"),
    (FacilityCategory::SportsField, "field|pitch|track"),
    (FacilityCategory::Gymnasium, "gym|gymnasium|sports hall"),
    (FacilityCategory::Auditorium, "auditorium|theatre|theater"),
    (FacilityCategory::ArtStudio, "art"),
    (FacilityCategory::MusicRoom, "music"),
    (FacilityCategory::Cafeteria, "cafeteria|canteen|dining"),
    (FacilityCategory::Playground, "playground"),
];

/// Classify a facility list into featured categories and a remainder.
///
/// Empty strings are discarded after trimming. Every other input lands in
/// exactly one of `matches` or `remaining`. `featured` lists each matched
/// category once, in the fixed table order, regardless of input order.
pub fn classify<S: AsRef<str>>(facilities: &[S]) -> TieredFacilities {
    let mut seen = [false; CATEGORY_MATCHERS.len()];
    let mut matches = Vec::new();
    let mut remaining = Vec::new();

    for facility in facilities {
        let trimmed = facility.as_ref().trim();
        if trimmed.is_empty() {
            continue;
        }
        match first_matching_category(trimmed) {
            Some(index) => {
                seen[index] = true;
                matches.push(FacilityMatch {
                    category: CATEGORY_MATCHERS[index].0,
                    source: trimmed.to_string(),
                });
            }
            None => remaining.push(trimmed.to_string()),
        }
    }

    let featured = CATEGORY_MATCHERS
        .iter()
        .enumerate()
        .filter(|(index, _)| seen[*index])
        .map(|(_, (category, _))| *category)
        .collect();

    TieredFacilities {
        featured,
        matches,
        remaining,
    }
}

fn first_matching_category(facility: &str) -> Option<usize> {
    CATEGORY_MATCHERS.iter().position(|(_, keywords)| {
        Regex::new(&format!(r"(?i)\b(?:{keywords})\b"))
            .map(|matcher| matcher.is_match(facility))
            .unwrap_or(false)
    })
}
