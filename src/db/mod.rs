use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

pub mod models;

/// Process-lifetime mapping from receipt identifier to awarded points.
///
/// Cloning is cheap and every clone shares the same entries. Nothing is ever
/// evicted.
#[derive(Default, Clone)]
pub struct ReceiptStore {
    points: Arc<RwLock<HashMap<String, i64>>>,
}

impl ReceiptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `points` under `id`, replacing any previous entry.
    pub async fn put(&self, id: impl Into<String>, points: i64) {
        let mut map = self.points.write().await;
        map.insert(id.into(), points);
    }

    pub async fn get(&self, id: &str) -> Option<i64> {
        let map = self.points.read().await;
        map.get(id).copied()
    }

    pub async fn len(&self) -> usize {
        self.points.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.points.read().await.is_empty()
    }
}
