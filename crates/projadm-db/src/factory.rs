//! Composition utilities for building the PostgreSQL store.
//!
//! Construction only - no domain logic. Building a store opens no
//! connections; the store connects per operation.

use std::sync::Arc;

use projadm_core::{ConnectionProfile, ProjectStorePort};

use crate::store::PgProjectStore;

/// Factory for creating store instances with the PostgreSQL backend.
pub struct StoreFactory;

impl StoreFactory {
    /// Build a trait-object-wrapped store from a connection profile.
    ///
    /// This is the recommended way for adapters to obtain the store.
    pub fn build_store(profile: ConnectionProfile) -> Arc<dyn ProjectStorePort> {
        Arc::new(PgProjectStore::new(profile))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_store_is_connectionless() {
        // Constructing the store must not touch the network; dry-run relies
        // on this to stay fully offline.
        let _store = StoreFactory::build_store(ConnectionProfile::default());
    }
}
