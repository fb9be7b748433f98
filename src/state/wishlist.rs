//! Wishlist model, reducer, and persistent store.
//!
//! DESIGN
//! ======
//! `reduce` is a pure state machine over [`Intent`]s. [`Wishlist`] owns the
//! canonical state, applies intents through the reducer, and writes every
//! new snapshot back through the durable bridge. The toggle policy of
//! [`Wishlist::add_item`] lives here, not in the reducer.
//!
//! ERROR HANDLING
//! ==============
//! Storage failures and corrupt stored JSON degrade to an unpersisted,
//! session-only wishlist. Blank ids are ignored.

#[cfg(test)]
#[path = "wishlist_test.rs"]
mod wishlist_test;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::config::WishlistConfig;
use crate::util::local_storage::{KeyValueStorage, PersistedValue, StorageError, WriteOutcome};

/// Serialized form of the empty wishlist.
pub const EMPTY_WISHLIST_JSON: &str = r#"{"items":[]}"#;

/// Externally assigned catalog identity: a string or a JSON number.
///
/// Numbers compare by value, so `42` and `42.0` are the same id. Strings
/// never equal numbers.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(Number),
    Text(String),
}

impl ItemId {
    /// `true` for ids a caller should treat as missing: `""` or `0`.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Number(n) => n.as_f64() == Some(0.0),
            Self::Text(s) => s.is_empty(),
        }
    }
}

impl PartialEq for ItemId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b || a.as_f64() == b.as_f64(),
            (Self::Text(a), Self::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for ItemId {}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

/// A saved catalog record. Only `id` is interpreted; every other field is
/// carried through untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WishlistItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ItemId>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl WishlistItem {
    pub fn new(id: impl Into<ItemId>) -> Self {
        Self {
            id: Some(id.into()),
            fields: Map::new(),
        }
    }

    /// Attach an opaque payload field.
    #[must_use]
    pub fn with_field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(name.to_owned(), value.into());
        self
    }

    /// Convert any serializable catalog record into a wishlist item.
    ///
    /// # Errors
    ///
    /// Returns an error if `record` does not serialize to a JSON object
    /// whose `id` is a string or number.
    pub fn from_record<T: Serialize>(record: &T) -> Result<Self, serde_json::Error> {
        serde_json::from_value(serde_json::to_value(record)?)
    }

    /// The identity used for membership, if present and not blank.
    pub fn key(&self) -> Option<&ItemId> {
        self.id.as_ref().filter(|id| !id.is_blank())
    }

    /// Convenience accessor for a string payload field.
    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }
}

/// Ordered wishlist snapshot. Item ids are unique; order is display order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WishlistState {
    #[serde(default)]
    pub items: Vec<WishlistItem>,
}

impl WishlistState {
    /// Parse a stored wishlist.
    ///
    /// Unparseable input yields the empty state. Within a readable record,
    /// each item is decoded on its own: unreadable items and repeated ids
    /// are logged and skipped so the rest survive.
    pub fn decode(raw: &str) -> Self {
        let stored: StoredState = match serde_json::from_str(raw) {
            Ok(stored) => stored,
            Err(e) => {
                log::warn!("wishlist: discarding unreadable stored state: {e}");
                return Self::default();
            }
        };

        let mut state = Self::default();
        for entry in stored.items {
            match serde_json::from_value::<WishlistItem>(entry) {
                Ok(item) if item.id.as_ref().is_some_and(|id| state.contains(id)) => {
                    log::warn!("wishlist: skipping repeated stored item {:?}", item.id);
                }
                Ok(item) => state.items.push(item),
                Err(e) => log::warn!("wishlist: skipping unreadable stored item: {e}"),
            }
        }
        state
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.items.iter().any(|i| i.id.as_ref() == Some(id))
    }
}

/// Outer shape of the stored record; items are decoded one by one.
#[derive(Deserialize)]
struct StoredState {
    #[serde(default)]
    items: Vec<Value>,
}

/// A requested wishlist mutation.
#[derive(Clone, Debug, PartialEq)]
pub enum Intent {
    Add(WishlistItem),
    Remove(ItemId),
}

/// Apply `intent` to `state`, producing the next snapshot.
///
/// `Add` does not deduplicate; callers check membership first.
pub fn reduce(state: &WishlistState, intent: &Intent) -> WishlistState {
    match intent {
        Intent::Add(item) => {
            let mut items = state.items.clone();
            items.push(item.clone());
            WishlistState { items }
        }
        Intent::Remove(id) => WishlistState {
            items: state
                .items
                .iter()
                .filter(|i| i.id.as_ref() != Some(id))
                .cloned()
                .collect(),
        },
    }
}

/// Canonical wishlist owner, synchronized with durable storage.
#[derive(Debug)]
pub struct Wishlist {
    state: WishlistState,
    saved: PersistedValue,
}

impl Wishlist {
    /// Load the wishlist stored under the configured key.
    pub fn load(storage: Arc<dyn KeyValueStorage>, config: &WishlistConfig) -> Self {
        let mut wishlist = Self::deferred(storage, config);
        wishlist.reload();
        wishlist
    }

    /// An empty wishlist bound to the configured key that has not read
    /// storage yet. Call [`Wishlist::reload`] to pick up the stored items.
    pub fn deferred(storage: Arc<dyn KeyValueStorage>, config: &WishlistConfig) -> Self {
        Self {
            state: WishlistState::default(),
            saved: PersistedValue::pending(storage, &config.storage_key, EMPTY_WISHLIST_JSON),
        }
    }

    /// Replace the in-memory state with what storage currently holds.
    pub fn reload(&mut self) {
        self.saved.reload(EMPTY_WISHLIST_JSON);
        self.state = WishlistState::decode(self.saved.get());
        log::debug!(
            "wishlist: loaded {} item(s) from {:?}",
            self.state.items.len(),
            self.saved.key()
        );
    }

    pub fn state(&self) -> &WishlistState {
        &self.state
    }

    pub fn items(&self) -> &[WishlistItem] {
        &self.state.items
    }

    pub fn is_saved(&self, id: &ItemId) -> bool {
        self.state.contains(id)
    }

    pub fn has_items(&self) -> bool {
        !self.state.items.is_empty()
    }

    /// Apply `intent`, then persist the new snapshot.
    ///
    /// The in-memory state is updated even when the write is dropped.
    pub fn dispatch(&mut self, intent: Intent) -> WriteOutcome {
        self.state = reduce(&self.state, &intent);
        self.persist()
    }

    /// Toggle membership of `item`: removes it if an item with the same id
    /// is saved, otherwise appends it. Returns `None` when the id is missing
    /// or blank.
    pub fn add_item(&mut self, item: WishlistItem) -> Option<WriteOutcome> {
        let id = item.key()?.clone();
        let intent = if self.is_saved(&id) {
            Intent::Remove(id)
        } else {
            Intent::Add(item)
        };
        Some(self.dispatch(intent))
    }

    /// Remove the item with `id`. Returns `None` when `id` is blank.
    pub fn remove_item(&mut self, id: &ItemId) -> Option<WriteOutcome> {
        if id.is_blank() {
            return None;
        }
        Some(self.dispatch(Intent::Remove(id.clone())))
    }

    fn persist(&mut self) -> WriteOutcome {
        match serde_json::to_string(&self.state) {
            Ok(raw) => self.saved.set(raw),
            Err(e) => {
                log::warn!("wishlist: failed to serialize state: {e}");
                WriteOutcome::Dropped(StorageError::Serialize(e.to_string()))
            }
        }
    }
}
