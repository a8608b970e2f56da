//! Share-link encoding of a shortlist snapshot.
//!
//! A share link carries the shortlisted identifiers in one query
//! parameter as a comma-separated list. The link transfers state without
//! server-side storage: a compare page opened from a shared link renders
//! exactly the parameter's schools, independent of the viewer's own
//! persisted shortlist.

/// Query parameter holding the shared identifier list.
pub const SHARE_PARAM: &str = "schools";

/// Decode a comma-separated identifier list, trimming entries and
/// dropping empties and duplicates while preserving first-seen order.
pub fn ids_from_param(param: &str) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();
    for entry in param.split(',') {
        let trimmed = entry.trim();
        if trimmed.is_empty() || ids.iter().any(|id| id == trimmed) {
            continue;
        }
        ids.push(trimmed.to_string());
    }
    ids
}

/// Extract and decode the share parameter from a raw query string
/// ("schools=a,b&view=map"). `None` when the parameter is absent.
pub fn ids_from_query(query: &str) -> Option<Vec<String>> {
    query
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| match pair.split_once('=') {
            Some((key, value)) if key == SHARE_PARAM => Some(value),
            _ => None,
        })
        .map(ids_from_param)
}

/// Encode identifiers as the share parameter value.
pub fn param_from_ids<S: AsRef<str>>(ids: &[S]) -> String {
    ids.iter()
        .map(|id| id.as_ref())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::{ids_from_param, ids_from_query, param_from_ids};

    #[test]
    fn test_decode_trims_and_dedupes() {
        assert_eq!(
            ids_from_param("bsj, jis ,bsj,,ais"),
            vec!["bsj".to_string(), "jis".to_string(), "ais".to_string()]
        );
        assert!(ids_from_param("").is_empty());
        assert!(ids_from_param(" , ,").is_empty());
    }

    #[test]
    fn test_query_extraction() {
        assert_eq!(
            ids_from_query("?view=map&schools=bsj,jis"),
            Some(vec!["bsj".to_string(), "jis".to_string()])
        );
        assert_eq!(ids_from_query("view=map"), None);
        assert_eq!(ids_from_query("schools="), Some(Vec::new()));
    }

    #[test]
    fn test_encode_round_trip() {
        let ids = vec!["bsj".to_string(), "jis".to_string()];
        assert_eq!(param_from_ids(&ids), "bsj,jis");
        assert_eq!(ids_from_param(&param_from_ids(&ids)), ids);
    }
}
