use std::cell::RefCell;
use std::collections::HashMap;

use futures::future::{FutureExt, LocalBoxFuture, Shared};
use log::debug;

use super::NaturalSize;

/// Fetches an image and reports its intrinsic size, or `None` when it cannot
/// be loaded or decoded.
pub trait ImageSizeLoader {
    fn load(&self, url: &str) -> LocalBoxFuture<'static, Option<NaturalSize>>;
}

type PendingLoad = Shared<LocalBoxFuture<'static, Option<NaturalSize>>>;

enum Slot {
    Ready(NaturalSize),
    Pending(PendingLoad),
}

/// Page-lifetime memo of natural image sizes, one slot per URL.
///
/// While a load is in flight its shared future sits in the slot, so every
/// caller asking for the same URL awaits the same fetch. Failures are not
/// remembered.
pub struct NaturalSizeCache<L> {
    loader: L,
    slots: RefCell<HashMap<String, Slot>>,
}

impl<L: ImageSizeLoader> NaturalSizeCache<L> {
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            slots: RefCell::new(HashMap::new()),
        }
    }

    pub async fn natural_size(&self, url: &str) -> Option<NaturalSize> {
        let pending = {
            let mut slots = self.slots.borrow_mut();
            match slots.get(url) {
                Some(Slot::Ready(size)) => return Some(*size),
                Some(Slot::Pending(pending)) => pending.clone(),
                None => {
                    debug!("Loading natural size for {}", url);
                    let pending = self.loader.load(url).shared();
                    slots.insert(url.to_string(), Slot::Pending(pending.clone()));
                    pending
                }
            }
        };

        let outcome = pending.clone().await;

        // Another caller may already have settled or replaced the slot while
        // we were suspended; only touch it if it still holds our load.
        let mut slots = self.slots.borrow_mut();
        let still_ours = matches!(slots.get(url), Some(Slot::Pending(current)) if current.ptr_eq(&pending));
        if still_ours {
            match outcome {
                Some(size) => {
                    slots.insert(url.to_string(), Slot::Ready(size));
                }
                None => {
                    debug!("Image {} failed to load; not caching", url);
                    slots.remove(url);
                }
            }
        }
        outcome
    }

    /// Number of URLs with a settled or in-flight entry.
    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }
}
