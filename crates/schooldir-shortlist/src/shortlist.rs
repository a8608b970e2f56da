//! The session-scoped shortlist state machine.
//!
//! One `Shortlist` value is constructed per session and passed by handle
//! to consumers; it is the sole owner of the persisted representation.
//! Three sources of truth stay consistent through two one-directional
//! flows: the share-link parameter merges into memory exactly once at
//! session start, and memory mirrors into the store on every mutation.
//! The store is never read again after hydration, so stale storage can
//! never overwrite a newer in-memory state.

use tracing::debug;

use crate::share;
use crate::store::ShortlistStore;

/// Order-preserving, duplicate-free set of shortlisted school ids.
///
/// Persistence is best-effort: storage failures are swallowed and the
/// in-memory state stays authoritative for the session. Losing a
/// shortlist on a broken store is acceptable; breaking the page is not.
#[derive(Debug)]
pub struct Shortlist<S: ShortlistStore> {
    ids: Vec<String>,
    store: S,
    share_merged: bool,
}

impl<S: ShortlistStore> Shortlist<S> {
    /// Hydrate from the persisted slot. Runs once, at session start.
    ///
    /// Absent, corrupt, or non-list content yields an empty shortlist;
    /// non-string elements inside a list are dropped silently.
    pub fn hydrate(store: S) -> Self {
        let ids = match store.load() {
            Ok(Some(payload)) => parse_payload(&payload),
            Ok(None) => Vec::new(),
            Err(error) => {
                debug!(%error, "shortlist load failed, starting empty");
                Vec::new()
            }
        };
        Self {
            ids,
            store,
            share_merged: false,
        }
    }

    /// Current ids in insertion order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Pure membership query.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    /// Append `id` unless already present. Idempotent.
    pub fn add(&mut self, id: &str) {
        if self.contains(id) {
            return;
        }
        self.ids.push(id.to_string());
        self.persist();
    }

    /// Remove `id` if present; no-op otherwise.
    pub fn remove(&mut self, id: &str) {
        let before = self.ids.len();
        self.ids.retain(|existing| existing != id);
        if self.ids.len() != before {
            self.persist();
        }
    }

    /// Flip membership. Returns the new membership state.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.contains(id) {
            self.remove(id);
            false
        } else {
            self.add(id);
            true
        }
    }

    /// Fold share-link ids into the shortlist, at most once per session.
    ///
    /// Later address changes must not re-apply a stale parameter — a user
    /// who removes a school right after following a share link keeps it
    /// removed. The guard is session-scoped; it does not re-arm if the
    /// persisted store is cleared independently.
    pub fn merge_share_param(&mut self, param: &str) {
        if self.share_merged {
            debug!("share parameter already merged this session, ignoring");
            return;
        }
        self.share_merged = true;
        for id in share::ids_from_param(param) {
            self.add(&id);
        }
    }

    /// As [`merge_share_param`](Self::merge_share_param), reading the id
    /// list out of a full query string. A query without the parameter
    /// does not consume the one-shot guard.
    pub fn merge_share_query(&mut self, query: &str) {
        if let Some(ids) = share::ids_from_query(query) {
            self.merge_share_param(&share::param_from_ids(&ids));
        }
    }

    /// Share-link parameter value for the current set.
    pub fn share_param(&self) -> String {
        share::param_from_ids(&self.ids)
    }

    /// Mirror the in-memory set into the store. Failures are logged and
    /// swallowed; the caller never sees them.
    fn persist(&mut self) {
        let payload = match serde_json::to_string(&self.ids) {
            Ok(payload) => payload,
            Err(error) => {
                debug!(%error, "shortlist serialization failed, skipping persist");
                return;
            }
        };
        if let Err(error) = self.store.save(&payload) {
            debug!(%error, "shortlist persist failed, keeping in-memory state");
        }
    }
}

/// Parse a persisted payload into an id list.
///
/// Anything that is not a JSON array yields an empty list; array elements
/// that are not strings are dropped. Malformed structure is never
/// partially trusted.
fn parse_payload(payload: &str) -> Vec<String> {
    let value: serde_json::Value = match serde_json::from_str(payload) {
        Ok(value) => value,
        Err(error) => {
            debug!(%error, "malformed shortlist payload, starting empty");
            return Vec::new();
        }
    };
    let serde_json::Value::Array(entries) = value else {
        debug!("shortlist payload is not a list, starting empty");
        return Vec::new();
    };
    let mut ids: Vec<String> = Vec::new();
    for entry in entries {
        if let serde_json::Value::String(id) = entry
            && !ids.contains(&id)
        {
            ids.push(id);
        }
    }
    ids
}
