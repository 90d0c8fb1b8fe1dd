use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::info;

use crate::gating::checklist::ChecklistState;
use crate::gating::proof::ProofSubmission;
use crate::storage::{load_json, save_json, KvStore, StoreError};

/// Checklist state under its own key. Missing or unparseable state reads as empty.
#[derive(Clone)]
pub struct ChecklistStore {
    store: Arc<dyn KvStore>,
    key: String,
    write_lock: Arc<Mutex<()>>,
}

impl ChecklistStore {
    pub fn new(store: Arc<dyn KvStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub async fn load(&self) -> Result<ChecklistState, StoreError> {
        Ok(load_json(self.store.as_ref(), &self.key)
            .await?
            .unwrap_or_default())
    }

    pub async fn set_item(&self, id: &str, checked: bool) -> Result<ChecklistState, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut state = self.load().await?;
        state.insert(id.to_string(), checked);
        save_json(self.store.as_ref(), &self.key, &state).await?;
        Ok(state)
    }

    pub async fn reset(&self) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        save_json(self.store.as_ref(), &self.key, &ChecklistState::new()).await?;
        info!("Checklist reset");
        Ok(())
    }
}

/// Proof submission under its own key. Writes replace the whole document.
#[derive(Clone)]
pub struct ProofStore {
    store: Arc<dyn KvStore>,
    key: String,
}

impl ProofStore {
    pub fn new(store: Arc<dyn KvStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub async fn load(&self) -> Result<ProofSubmission, StoreError> {
        Ok(load_json(self.store.as_ref(), &self.key)
            .await?
            .unwrap_or_default())
    }

    pub async fn save(&self, proof: &ProofSubmission) -> Result<(), StoreError> {
        save_json(self.store.as_ref(), &self.key, proof).await
    }
}
