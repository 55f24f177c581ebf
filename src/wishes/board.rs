//! Wishes Board
//!
//! Owns the wish list and keeps the storage record in sync with it. The list
//! in memory is the source of truth; the record is overwritten wholesale after
//! every mutation and failures to do so are logged and ignored.

use chrono::Utc;

use super::age::RelativeAge;
use super::error::WishResult;
use super::store::WishStore;
use super::types::{Wish, WishDraft};

/// Storage key of the persisted wish record
pub const STORAGE_KEY: &str = "azadi-wishes";

/// The wishes wall and its storage mirror
#[derive(Debug)]
pub struct WishBoard<S> {
    store: S,
    key: String,
    /// Newest first
    wishes: Vec<Wish>,
}

/// A wish paired with its age at render time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WishView<'a> {
    pub wish: &'a Wish,
    pub age: RelativeAge,
}

impl<S: WishStore> WishBoard<S> {
    /// Build a board from whatever the store holds under [`STORAGE_KEY`]
    pub fn load(store: S) -> Self {
        Self::load_with_key(store, STORAGE_KEY)
    }

    /// Build a board from the record under a custom key
    ///
    /// A missing, unreadable or malformed record yields an empty board.
    pub fn load_with_key(store: S, key: impl Into<String>) -> Self {
        let key = key.into();

        let wishes = match store.get_item(&key) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Wish>>(&raw) {
                Ok(wishes) => wishes,
                Err(e) => {
                    tracing::warn!(key = %key, error = %e, "Discarding malformed wish record");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Failed to read wish record");
                Vec::new()
            }
        };

        tracing::debug!(key = %key, count = wishes.len(), "Loaded wishes");

        Self { store, key, wishes }
    }

    /// Post a wish stamped with the current time
    ///
    /// Blank messages are ignored without complaint. Returns the new wish.
    pub fn submit(&mut self, author: &str, message: &str) -> Option<&Wish> {
        self.submit_at(author, message, Utc::now().timestamp_millis())
    }

    /// Post a wish with an explicit creation time (Unix ms)
    pub fn submit_at(&mut self, author: &str, message: &str, created_at: i64) -> Option<&Wish> {
        let wish = Wish::with_timestamp(author, message, created_at)?;

        tracing::debug!(id = %wish.id, author = %wish.author, "Posting wish");
        self.wishes.insert(0, wish);
        self.persist();

        self.wishes.first()
    }

    /// Post the contents of the form, clearing its message on success
    ///
    /// The name is left in place. Returns whether a wish was posted.
    pub fn submit_draft(&mut self, draft: &mut WishDraft) -> bool {
        let posted = self.submit(&draft.name, &draft.message).is_some();
        if posted {
            draft.message.clear();
        }
        posted
    }

    /// Overwrite the storage record with the current list, ignoring failures
    pub fn persist(&mut self) {
        if let Err(e) = self.try_persist() {
            tracing::warn!(key = %self.key, error = %e, "Failed to persist wishes");
        }
    }

    /// Overwrite the storage record with the current list
    pub fn try_persist(&mut self) -> WishResult<()> {
        let raw = serde_json::to_string(&self.wishes)?;
        self.store.set_item(&self.key, &raw)
    }

    /// All wishes, newest first, each with its age relative to `now` (Unix ms)
    ///
    /// The iterator borrows the board; clone it to walk the list again.
    pub fn render_list(&self, now: i64) -> impl Iterator<Item = WishView<'_>> + Clone + '_ {
        self.wishes.iter().map(move |wish| WishView {
            wish,
            age: wish.age_at(now),
        })
    }
}

impl<S> WishBoard<S> {
    /// All wishes, newest first
    pub fn wishes(&self) -> &[Wish] {
        &self.wishes
    }

    pub fn len(&self) -> usize {
        self.wishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wishes.is_empty()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Tear the board down, handing back its store
    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wishes::error::WishError;
    use crate::wishes::store::MemoryStore;
    use crate::wishes::types::GUEST_NAME;

    /// Store whose reads or writes always fail
    #[derive(Default)]
    struct BrokenStore {
        fail_reads: bool,
        writes: usize,
    }

    impl WishStore for BrokenStore {
        fn get_item(&self, _key: &str) -> WishResult<Option<String>> {
            if self.fail_reads {
                Err(WishError::Unavailable("denied".to_string()))
            } else {
                Ok(None)
            }
        }

        fn set_item(&mut self, _key: &str, _value: &str) -> WishResult<()> {
            self.writes += 1;
            Err(WishError::Unavailable("quota exceeded".to_string()))
        }
    }

    fn stored(board: &WishBoard<MemoryStore>) -> Vec<Wish> {
        let raw = board.store().get_item(STORAGE_KEY).unwrap().unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn test_load_missing_record_is_empty() {
        let board = WishBoard::load(MemoryStore::new());
        assert!(board.is_empty());
        assert_eq!(board.key(), STORAGE_KEY);
    }

    #[test]
    fn test_load_malformed_record_is_empty() {
        for raw in ["not json", "{}", r#"[{"id": 1}]"#, ""] {
            let board = WishBoard::load(MemoryStore::new().with_item(STORAGE_KEY, raw));
            assert!(board.is_empty(), "record {:?} should be discarded", raw);
        }
    }

    #[test]
    fn test_load_unreadable_store_is_empty() {
        let board = WishBoard::load(BrokenStore { fail_reads: true, writes: 0 });
        assert!(board.is_empty());
    }

    #[test]
    fn test_load_existing_record_keeps_order() {
        let raw = r#"[
            {"id": "b", "name": "Sana", "message": "second", "time": 2000},
            {"id": "a", "name": "Guest", "message": "first", "time": 1000}
        ]"#;
        let board = WishBoard::load(MemoryStore::new().with_item(STORAGE_KEY, raw));

        let ids: Vec<_> = board.wishes().iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_submit_guest_scenario() {
        let mut board = WishBoard::load(MemoryStore::new());
        board.submit("", "Azadi Mubarak");

        assert_eq!(board.len(), 1);
        assert_eq!(board.wishes()[0].author, GUEST_NAME);
        assert_eq!(board.wishes()[0].message, "Azadi Mubarak");
    }

    #[test]
    fn test_submit_prepends() {
        let mut board = WishBoard::load(MemoryStore::new());
        board.submit_at("Ali", "first", 1000);
        board.submit_at("  Sana  ", "second", 2000);

        assert_eq!(board.len(), 2);
        assert_eq!(board.wishes()[0].message, "second");
        assert_eq!(board.wishes()[0].author, "Sana");
        assert_eq!(board.wishes()[1].message, "first");
    }

    #[test]
    fn test_order_ignores_clock_adjustments() {
        let mut board = WishBoard::load(MemoryStore::new());
        board.submit_at("", "later clock", 5000);
        board.submit_at("", "clock went back", 1000);

        assert_eq!(board.wishes()[0].message, "clock went back");
    }

    #[test]
    fn test_blank_submit_is_noop() {
        let mut board = WishBoard::load(MemoryStore::new());
        board.submit_at("Ali", "kept", 1000);
        let before = board.wishes().to_vec();

        assert!(board.submit("Ali", "").is_none());
        assert!(board.submit("Ali", "   \n\t").is_none());

        assert_eq!(board.wishes(), before.as_slice());
        assert_eq!(stored(&board), before);
    }

    #[test]
    fn test_submit_persists_whole_list() {
        let mut board = WishBoard::load(MemoryStore::new());
        board.submit_at("Ali", "one", 1000);
        board.submit_at("Sana", "two", 2000);

        assert_eq!(stored(&board), board.wishes());
    }

    #[test]
    fn test_persisted_record_reloads_equal() {
        let mut board = WishBoard::load(MemoryStore::new());
        board.submit_at("Ali", "one", 1000);
        board.submit_at("", "two", 2000);
        let expected = board.wishes().to_vec();

        let reloaded = WishBoard::load(board.into_store());
        assert_eq!(reloaded.wishes(), expected.as_slice());
    }

    #[test]
    fn test_write_failures_are_swallowed() {
        let mut board = WishBoard::load(BrokenStore::default());
        board.submit("Ali", "still shown");
        board.submit("Sana", "me too");

        assert_eq!(board.len(), 2);
        assert_eq!(board.store().writes, 2);
        assert!(board.try_persist().is_err());
    }

    #[test]
    fn test_submit_draft_clears_message_only() {
        let mut board = WishBoard::load(MemoryStore::new());
        let mut draft = WishDraft::new("Ayesha", "Pakistan Zindabad");

        assert!(board.submit_draft(&mut draft));
        assert_eq!(draft.name, "Ayesha");
        assert!(draft.message.is_empty());

        // Second press with an empty message does nothing
        assert!(!board.submit_draft(&mut draft));
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_render_list_ages_and_restarts() {
        let mut board = WishBoard::load(MemoryStore::new());
        let now = 10 * 24 * 60 * 60 * 1000;
        board.submit_at("", "old", now - 2 * 60 * 60 * 1000);
        board.submit_at("", "new", now);

        let list = board.render_list(now);
        let first_pass: Vec<_> = list.clone().map(|v| (v.wish.message.as_str(), v.age)).collect();
        assert_eq!(
            first_pass,
            vec![("new", RelativeAge::JustNow), ("old", RelativeAge::Hours(2))]
        );

        assert_eq!(list.count(), 2);
    }

    #[test]
    fn test_custom_key() {
        let mut board = WishBoard::load_with_key(MemoryStore::new(), "other");
        board.submit("", "hi");

        let store = board.into_store();
        assert!(store.get_item("other").unwrap().is_some());
        assert!(store.get_item(STORAGE_KEY).unwrap().is_none());
    }
}
