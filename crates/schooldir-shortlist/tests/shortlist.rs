//! Integration tests: persistence across sessions and failure semantics.

use std::io;

use schooldir_model::Result;
use schooldir_shortlist::{FileStore, Shortlist, ShortlistStore};

/// Store that fails every read and write, as when browser storage is
/// disabled or over quota.
struct BrokenStore;

impl ShortlistStore for BrokenStore {
    fn load(&self) -> Result<Option<String>> {
        Err(io::Error::other("storage disabled").into())
    }

    fn save(&mut self, _payload: &str) -> Result<()> {
        Err(io::Error::other("storage disabled").into())
    }
}

#[test]
fn shortlist_survives_across_sessions_via_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shortlist.json");

    let mut first_session = Shortlist::hydrate(FileStore::new(&path));
    first_session.add("bsj");
    first_session.add("jis");
    first_session.remove("bsj");

    let second_session = Shortlist::hydrate(FileStore::new(&path));
    assert_eq!(second_session.ids(), ["jis".to_string()]);
}

#[test]
fn broken_store_never_breaks_the_session() {
    let mut shortlist = Shortlist::hydrate(BrokenStore);
    assert!(shortlist.is_empty());

    shortlist.add("bsj");
    shortlist.toggle("jis");
    shortlist.remove("jis");
    assert!(shortlist.contains("bsj"));
    assert_eq!(shortlist.len(), 1);
}

#[test]
fn share_merge_happens_once_per_session_not_once_ever() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shortlist.json");

    let mut first_session = Shortlist::hydrate(FileStore::new(&path));
    first_session.merge_share_query("schools=bsj");
    first_session.remove("bsj");

    // A fresh session re-arms the guard, so following the same link again
    // merges again.
    let mut second_session = Shortlist::hydrate(FileStore::new(&path));
    second_session.merge_share_query("schools=bsj");
    assert!(second_session.contains("bsj"));
}

#[test]
fn share_param_round_trips() {
    let mut shortlist = Shortlist::hydrate(schooldir_shortlist::MemoryStore::new());
    shortlist.add("bsj");
    shortlist.add("jis");
    assert_eq!(shortlist.share_param(), "bsj,jis");
}
