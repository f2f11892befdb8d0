use garageql_store::Store;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Request context shared by every resolver.
///
/// Reads share the lock; each mutation holds it exclusively, so concurrent
/// creations cannot hand out the same id.
pub struct Ctx {
    store: RwLock<Store>,
}

impl Ctx {
    /// Shared read access to the store.
    pub fn store(&self) -> RwLockReadGuard<'_, Store> {
        self.store.read()
    }

    pub(crate) fn store_mut(&self) -> RwLockWriteGuard<'_, Store> {
        self.store.write()
    }
}

impl From<Store> for Ctx {
    fn from(store: Store) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }
}

impl Default for Ctx {
    fn default() -> Self {
        Self::from(Store::seeded())
    }
}

impl juniper::Context for Ctx {}
