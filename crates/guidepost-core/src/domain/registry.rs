//! Session registry for the Guidepost core
//!
//! This module defines the registry trait the workflow engine depends on.
//! External crates can implement it to provide different storage mechanisms;
//! the in-memory implementation below is the one the surrounding system uses.

use async_trait::async_trait;

use super::session::{WorkflowId, WorkflowSession};
use crate::CoreError;

/// Mutation applied to a session inside the store's per-key critical section.
pub type SessionMutation = Box<dyn FnOnce(&mut WorkflowSession) + Send>;

/// Concurrent key-value store for workflow sessions.
///
/// Implementations must be safe under concurrent `insert`/`find`/`update`/
/// `remove`/`list` with no caller-side locking. Mutation under one key is
/// serialized; different keys do not contend. `list` returns a point-in-time
/// snapshot with no torn records, but need not be linearizable with
/// concurrent mutations.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Insert a new session under its identifier.
    async fn insert(&self, session: WorkflowSession) -> Result<(), CoreError>;

    /// Find a session by identifier.
    async fn find(&self, id: &WorkflowId) -> Result<Option<WorkflowSession>, CoreError>;

    /// Apply a mutation to a session atomically and return the updated
    /// snapshot, or `None` if the identifier is absent.
    async fn update(
        &self,
        id: &WorkflowId,
        mutate: SessionMutation,
    ) -> Result<Option<WorkflowSession>, CoreError>;

    /// Remove a session, returning it if it was present.
    async fn remove(&self, id: &WorkflowId) -> Result<Option<WorkflowSession>, CoreError>;

    /// Snapshot of all sessions currently in the registry.
    async fn list(&self) -> Result<Vec<WorkflowSession>, CoreError>;
}

/// In-memory store used by the surrounding system
pub mod memory {
    use super::*;
    use dashmap::DashMap;

    /// In-memory implementation of the session store backed by a concurrent
    /// map. Per-key mutation is serialized by the map's shard locking, so
    /// history append and step advance stay atomic per session while
    /// different sessions do not contend.
    pub struct MemorySessionStore {
        sessions: DashMap<String, WorkflowSession>,
    }

    impl MemorySessionStore {
        /// Create a new in-memory session store.
        pub fn new() -> Self {
            Self {
                sessions: DashMap::with_capacity(64),
            }
        }
    }

    impl Default for MemorySessionStore {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl SessionStore for MemorySessionStore {
        async fn insert(&self, session: WorkflowSession) -> Result<(), CoreError> {
            self.sessions.insert(session.id.0.clone(), session);
            Ok(())
        }

        async fn find(&self, id: &WorkflowId) -> Result<Option<WorkflowSession>, CoreError> {
            // Direct map lookup, clones the record out of the shard
            Ok(self.sessions.get(&id.0).map(|session| session.clone()))
        }

        async fn update(
            &self,
            id: &WorkflowId,
            mutate: SessionMutation,
        ) -> Result<Option<WorkflowSession>, CoreError> {
            // get_mut holds the shard write lock for the duration of the
            // mutation, which serializes concurrent updates to one session
            match self.sessions.get_mut(&id.0) {
                Some(mut entry) => {
                    mutate(entry.value_mut());
                    Ok(Some(entry.clone()))
                }
                None => Ok(None),
            }
        }

        async fn remove(&self, id: &WorkflowId) -> Result<Option<WorkflowSession>, CoreError> {
            Ok(self.sessions.remove(&id.0).map(|(_, session)| session))
        }

        async fn list(&self) -> Result<Vec<WorkflowSession>, CoreError> {
            Ok(self
                .sessions
                .iter()
                .map(|entry| entry.value().clone())
                .collect())
        }
    }
}
