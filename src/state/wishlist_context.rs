//! Reactive wishlist scope with separate read and dispatch capabilities.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`provide_wishlist`] mounts one [`Wishlist`] in the current reactive owner
//! and publishes two context values. Components that only toggle membership
//! take [`WishlistDispatch`]; components that only render take
//! [`WishlistRead`]. Neither can reach the other's half of the signal.
//!
//! HYDRATION
//! =========
//! The server has no durable storage and always renders an empty wishlist.
//! [`WishlistProvider`] therefore starts empty on both sides and loads
//! storage from an effect, which only runs in the browser after hydration,
//! so the first client render matches the server markup.
//!
//! ERROR HANDLING
//! ==============
//! Looking up a capability outside a provider is a wiring bug and panics.

#[cfg(test)]
#[path = "wishlist_context_test.rs"]
mod wishlist_context_test;

use std::sync::Arc;

use leptos::prelude::*;

use super::wishlist::{ItemId, Wishlist, WishlistItem};
use crate::config::WishlistConfig;
use crate::util::local_storage::{BrowserStorage, KeyValueStorage};

/// Write-only wishlist capability.
#[derive(Clone, Copy, Debug)]
pub struct WishlistDispatch {
    write: WriteSignal<Wishlist>,
}

impl WishlistDispatch {
    /// Toggle `item`: saves it, or removes it when already saved.
    pub fn add_item(&self, item: WishlistItem) {
        self.write.maybe_update(|w| w.add_item(item).is_some());
    }

    pub fn remove_item(&self, id: &ItemId) {
        self.write.maybe_update(|w| w.remove_item(id).is_some());
    }
}

/// Read-only wishlist capability. All reads are tracked.
#[derive(Clone, Copy, Debug)]
pub struct WishlistRead {
    read: ReadSignal<Wishlist>,
}

impl WishlistRead {
    pub fn items(&self) -> Vec<WishlistItem> {
        self.read.with(|w| w.items().to_vec())
    }

    pub fn is_saved(&self, id: &ItemId) -> bool {
        self.read.with(|w| w.is_saved(id))
    }

    pub fn has_items(&self) -> bool {
        self.read.with(Wishlist::has_items)
    }

    pub fn len(&self) -> usize {
        self.read.with(|w| w.items().len())
    }

    pub fn is_empty(&self) -> bool {
        !self.has_items()
    }
}

/// Owning handle returned to the composition root.
#[derive(Clone, Copy, Debug)]
pub struct WishlistHandle {
    read: ReadSignal<Wishlist>,
    write: WriteSignal<Wishlist>,
}

impl WishlistHandle {
    /// Load the wishlist from `storage` into a new reactive signal.
    pub fn new(storage: Arc<dyn KeyValueStorage>, config: &WishlistConfig) -> Self {
        let (read, write) = signal(Wishlist::load(storage, config));
        Self { read, write }
    }

    /// Start from an empty wishlist; storage is read by [`WishlistHandle::load`].
    pub fn deferred(storage: Arc<dyn KeyValueStorage>, config: &WishlistConfig) -> Self {
        let (read, write) = signal(Wishlist::deferred(storage, config));
        Self { read, write }
    }

    /// Replace the current items with what storage holds.
    pub fn load(&self) {
        self.write.update(Wishlist::reload);
    }

    /// Publish both capabilities in the current owner.
    pub fn provide(&self) {
        provide_context(self.dispatch());
        provide_context(self.read());
    }

    pub fn dispatch(&self) -> WishlistDispatch {
        WishlistDispatch { write: self.write }
    }

    pub fn read(&self) -> WishlistRead {
        WishlistRead { read: self.read }
    }
}

/// Mount a wishlist in the current owner and provide both capabilities.
pub fn provide_wishlist(storage: Arc<dyn KeyValueStorage>, config: &WishlistConfig) -> WishlistHandle {
    let handle = WishlistHandle::new(storage, config);
    handle.provide();
    handle
}

/// Dispatch capability of the nearest [`WishlistProvider`].
///
/// # Panics
///
/// Panics when called outside a wishlist scope.
pub fn use_wishlist_dispatch() -> WishlistDispatch {
    use_context::<WishlistDispatch>()
        .unwrap_or_else(|| panic!("use_wishlist_dispatch must be used within a WishlistProvider"))
}

/// Read capability of the nearest [`WishlistProvider`].
///
/// # Panics
///
/// Panics when called outside a wishlist scope.
pub fn use_wishlist_state() -> WishlistRead {
    use_context::<WishlistRead>()
        .unwrap_or_else(|| panic!("use_wishlist_state must be used within a WishlistProvider"))
}

/// Provides a browser-backed wishlist to its children.
///
/// Stored items appear once the post-hydration effect has run.
#[component]
pub fn WishlistProvider(
    #[prop(optional)] config: Option<WishlistConfig>,
    children: Children,
) -> impl IntoView {
    let handle = WishlistHandle::deferred(Arc::new(BrowserStorage), &config.unwrap_or_default());
    handle.provide();
    Effect::new(move || handle.load());
    children()
}
