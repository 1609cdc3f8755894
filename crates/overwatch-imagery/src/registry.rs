//! Map communicator registry.
//!
//! The registry is the single owner of live renderer handles. Lookups never
//! block on a renderer and never fail: a missing communicator means the
//! viewport is not mounted yet or was already disposed.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tokio::sync::broadcast;

use crate::ports::Communicator;

/// Notification carried by the registry lifecycle streams
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceEvent {
    pub id: String,
}

/// Registry of mounted communicators keyed by viewport id
#[derive(Clone)]
pub struct CommunicatorRegistry {
    communicators: Arc<RwLock<HashMap<String, Arc<dyn Communicator>>>>,
    created: broadcast::Sender<InstanceEvent>,
    removed: broadcast::Sender<InstanceEvent>,
}

impl CommunicatorRegistry {
    /// Create a registry whose notification streams buffer `capacity` events
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (created, _) = broadcast::channel(capacity);
        let (removed, _) = broadcast::channel(capacity);
        Self { communicators: Arc::new(RwLock::new(HashMap::new())), created, removed }
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Arc<dyn Communicator>>> {
        self.communicators.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Arc<dyn Communicator>>> {
        self.communicators.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Look up the communicator mounted for `id`
    pub fn provide(&self, id: &str) -> Option<Arc<dyn Communicator>> {
        let communicator = self.read().get(id).cloned();
        if communicator.is_none() {
            tracing::debug!(map_id = %id, "No communicator mounted");
        }
        communicator
    }

    /// Register a freshly mounted communicator.
    ///
    /// A communicator already registered under the same id is replaced and
    /// returned. Every call emits one `instance_created` notification.
    pub fn register(&self, communicator: Arc<dyn Communicator>) -> Option<Arc<dyn Communicator>> {
        let id = communicator.id().to_string();
        let previous = self.write().insert(id.clone(), communicator);

        if previous.is_some() {
            tracing::info!(map_id = %id, "Communicator remounted");
        } else {
            tracing::info!(map_id = %id, "Communicator registered");
        }

        // No subscribers is fine
        let _ = self.created.send(InstanceEvent { id });
        previous
    }

    /// Dispose the communicator mounted for `id`
    pub fn remove(&self, id: &str) -> Option<Arc<dyn Communicator>> {
        let removed = self.write().remove(id);
        if removed.is_some() {
            tracing::info!(map_id = %id, "Communicator removed");
            let _ = self.removed.send(InstanceEvent { id: id.to_string() });
        }
        removed
    }

    /// Subscribe to mount notifications
    pub fn instance_created(&self) -> broadcast::Receiver<InstanceEvent> {
        self.created.subscribe()
    }

    /// Subscribe to disposal notifications
    pub fn instance_removed(&self) -> broadcast::Receiver<InstanceEvent> {
        self.removed.subscribe()
    }

    /// Ids of every mounted communicator, sorted
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.read().keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

impl Default for CommunicatorRegistry {
    fn default() -> Self {
        Self::new(64)
    }
}

impl std::fmt::Debug for CommunicatorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommunicatorRegistry").field("ids", &self.ids()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryCommunicator;

    #[test]
    fn test_provide_missing_is_none() {
        let registry = CommunicatorRegistry::default();
        assert!(registry.provide("nope").is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_register_replaces_existing_id() {
        let registry = CommunicatorRegistry::default();
        let first = Arc::new(MemoryCommunicator::new("m1"));
        let second = Arc::new(MemoryCommunicator::new("m1").with_map_type("CesiumMap"));

        assert!(registry.register(first).is_none());
        let previous = registry.register(second).unwrap();

        assert_eq!(previous.active_map_name(), "openLayersMap");
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.provide("m1").unwrap().active_map_name(), "CesiumMap");
    }

    #[tokio::test]
    async fn test_instance_created_emits_per_mount() {
        let registry = CommunicatorRegistry::new(8);
        let mut created = registry.instance_created();

        registry.register(Arc::new(MemoryCommunicator::new("m1")));
        registry.register(Arc::new(MemoryCommunicator::new("m1")));

        assert_eq!(created.recv().await.unwrap().id, "m1");
        assert_eq!(created.recv().await.unwrap().id, "m1");
        assert!(created.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_instance_removed_only_for_mounted_ids() {
        let registry = CommunicatorRegistry::new(8);
        let mut removed = registry.instance_removed();

        registry.register(Arc::new(MemoryCommunicator::new("m1")));
        assert!(registry.remove("ghost").is_none());
        assert!(registry.remove("m1").is_some());

        assert_eq!(removed.recv().await.unwrap(), InstanceEvent { id: "m1".to_string() });
        assert!(removed.try_recv().is_err());
        assert!(registry.provide("m1").is_none());
    }

    #[test]
    fn test_ids_sorted() {
        let registry = CommunicatorRegistry::default();
        for id in ["c", "a", "b"] {
            registry.register(Arc::new(MemoryCommunicator::new(id)));
        }
        assert_eq!(registry.ids(), vec!["a", "b", "c"]);
    }
}
