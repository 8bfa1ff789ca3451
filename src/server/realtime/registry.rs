use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use tokio::sync::{mpsc::UnboundedSender, RwLock};

use crate::model::realtime::ServerEvent;

static NEXT_CONNECTION_ID: AtomicU64 = AtomicU64::new(1);

/// Tracks which users currently hold realtime connections.
///
/// A user may be connected from several devices at once, so each user maps to
/// the set of live connections keyed by connection id. Events sent to a user
/// fan out to every connection; delivery is best-effort and a closed channel
/// is simply skipped.
#[derive(Clone, Default)]
pub struct PresenceRegistry {
    connections: Arc<RwLock<HashMap<i64, HashMap<u64, UnboundedSender<ServerEvent>>>>>,
}

impl PresenceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a connection for the user and returns its connection id along
    /// with whether this is the user's first live connection.
    pub async fn register(&self, user_id: i64, sender: UnboundedSender<ServerEvent>) -> (u64, bool) {
        let connection_id = NEXT_CONNECTION_ID.fetch_add(1, Ordering::Relaxed);

        let mut connections = self.connections.write().await;
        let user_connections = connections.entry(user_id).or_default();
        let first = user_connections.is_empty();
        user_connections.insert(connection_id, sender);

        (connection_id, first)
    }

    /// Removes a connection and returns true when it was the user's last one.
    pub async fn deregister(&self, user_id: i64, connection_id: u64) -> bool {
        let mut connections = self.connections.write().await;

        let Some(user_connections) = connections.get_mut(&user_id) else {
            return false;
        };

        user_connections.remove(&connection_id);

        if user_connections.is_empty() {
            connections.remove(&user_id);
            return true;
        }

        false
    }

    pub async fn is_online(&self, user_id: i64) -> bool {
        self.connections.read().await.contains_key(&user_id)
    }

    /// Sends an event to every live connection of the user. Returns true when
    /// at least one connection accepted it.
    pub async fn emit_to_user(&self, user_id: i64, event: &ServerEvent) -> bool {
        let connections = self.connections.read().await;

        let Some(user_connections) = connections.get(&user_id) else {
            return false;
        };

        let mut delivered = false;
        for sender in user_connections.values() {
            if sender.send(event.clone()).is_ok() {
                delivered = true;
            }
        }

        delivered
    }

    /// Sends an event to each user in the list that is currently online.
    pub async fn emit_to_users(&self, user_ids: &[i64], event: &ServerEvent) {
        for user_id in user_ids {
            self.emit_to_user(*user_id, event).await;
        }
    }
}
