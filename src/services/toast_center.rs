use crate::domain::models::toast::Toast;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Default number of toasts kept on screen at once
const DEFAULT_MAX_ACTIVE: usize = 5;

/// In-memory store of the toasts currently shown to the user
///
/// Newest first; pushing beyond the cap drops the oldest entries. The handle
/// is cheap to clone and shares one store.
#[derive(Clone)]
pub struct ToastCenter {
    toasts: Arc<RwLock<Vec<Toast>>>,
    max_active: usize,
}

impl ToastCenter {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_ACTIVE)
    }

    pub fn with_capacity(max_active: usize) -> Self {
        Self {
            toasts: Arc::new(RwLock::new(Vec::new())),
            max_active,
        }
    }

    /// Add a toast and return its id
    pub async fn push(&self, toast: Toast) -> String {
        let id = toast.id.clone();
        let mut toasts = self.toasts.write().await;
        toasts.insert(0, toast);
        toasts.truncate(self.max_active);
        id
    }

    /// Remove a toast by id; unknown ids are ignored
    pub async fn dismiss(&self, id: &str) {
        let mut toasts = self.toasts.write().await;
        toasts.retain(|toast| toast.id != id);
    }

    /// Snapshot of the toasts currently shown, newest first
    pub async fn active(&self) -> Vec<Toast> {
        let toasts = self.toasts.read().await;
        toasts.clone()
    }

    /// Render one plain text line per active toast, newest first
    pub async fn render_lines(&self) -> Vec<String> {
        let toasts = self.toasts.read().await;
        toasts.iter().map(|toast| toast.render_line()).collect()
    }
}

impl Default for ToastCenter {
    fn default() -> Self {
        Self::new()
    }
}
