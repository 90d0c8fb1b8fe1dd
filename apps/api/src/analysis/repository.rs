//! Analysis history repository.
//!
//! The whole history lives under one key as a newest-first JSON array. Every read runs
//! each element through `normalize_entry`; every write stores canonical records, so
//! legacy records are upgraded the first time anything is written back.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::Mutex;
use tracing::info;

use crate::analysis::confidence::toggle_skill;
use crate::migration::normalize_entry;
use crate::models::analysis::{AnalysisEntry, Confidence};
use crate::storage::{load_json, save_json, KvStore, StoreError};

#[derive(Clone)]
pub struct AnalysisRepository {
    store: Arc<dyn KvStore>,
    key: String,
    /// Serializes read-modify-write cycles on the history key.
    write_lock: Arc<Mutex<()>>,
}

impl AnalysisRepository {
    pub fn new(store: Arc<dyn KvStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// All entries, newest first. Unparseable history reads as empty.
    pub async fn list(&self) -> Result<Vec<AnalysisEntry>, StoreError> {
        let raw: Option<Vec<Value>> = load_json(self.store.as_ref(), &self.key).await?;
        Ok(raw
            .unwrap_or_default()
            .iter()
            .map(normalize_entry)
            .collect())
    }

    pub async fn get(&self, id: &str) -> Result<Option<AnalysisEntry>, StoreError> {
        Ok(self.list().await?.into_iter().find(|e| e.id == id))
    }

    pub async fn latest(&self) -> Result<Option<AnalysisEntry>, StoreError> {
        Ok(self.list().await?.into_iter().next())
    }

    /// Prepends a new entry.
    pub async fn save(&self, entry: &AnalysisEntry) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut history = self.list().await?;
        history.insert(0, entry.clone());
        save_json(self.store.as_ref(), &self.key, &history).await?;
        info!(entry_id = %entry.id, total = history.len(), "Saved analysis");
        Ok(())
    }

    /// Read-modify-write of one entry under the write lock. Returns the stored result,
    /// or `None` if no entry had that id.
    pub async fn update<F>(&self, id: &str, apply: F) -> Result<Option<AnalysisEntry>, StoreError>
    where
        F: FnOnce(AnalysisEntry) -> AnalysisEntry,
    {
        let _guard = self.write_lock.lock().await;
        let mut history = self.list().await?;
        let Some(slot) = history.iter_mut().find(|e| e.id == id) else {
            return Ok(None);
        };

        let updated = apply(slot.clone());
        *slot = updated.clone();
        save_json(self.store.as_ref(), &self.key, &history).await?;
        Ok(Some(updated))
    }

    /// Returns `false` if no entry had that id.
    pub async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut history = self.list().await?;
        let before = history.len();
        history.retain(|e| e.id != id);
        if history.len() == before {
            return Ok(false);
        }
        save_json(self.store.as_ref(), &self.key, &history).await?;
        info!(entry_id = id, "Deleted analysis");
        Ok(true)
    }

    /// Applies a confidence toggle and writes it back in one locked cycle.
    pub async fn toggle_skill(
        &self,
        id: &str,
        skill: &str,
        requested: Confidence,
    ) -> Result<Option<AnalysisEntry>, StoreError> {
        self.update(id, |entry| toggle_skill(entry, skill, requested)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::analysis::orchestrator::run_analysis;
    use crate::storage::InMemoryStore;

    const KEY: &str = "placement-analysis-history";

    fn repo_with_store() -> (AnalysisRepository, Arc<InMemoryStore>) {
        let store = Arc::new(InMemoryStore::new());
        (AnalysisRepository::new(store.clone(), KEY), store)
    }

    #[tokio::test]
    async fn test_empty_history() {
        let (repo, _) = repo_with_store();
        assert!(repo.list().await.unwrap().is_empty());
        assert!(repo.latest().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_is_newest_first() {
        let (repo, _) = repo_with_store();
        let first = run_analysis("A", "", "React");
        let second = run_analysis("B", "", "SQL");
        repo.save(&first).await.unwrap();
        repo.save(&second).await.unwrap();

        let history = repo.list().await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].id, second.id);
        assert_eq!(repo.latest().await.unwrap().unwrap().id, second.id);
        assert_eq!(repo.get(&first.id).await.unwrap().unwrap(), first);
    }

    #[tokio::test]
    async fn test_garbage_history_reads_as_empty() {
        let (repo, store) = repo_with_store();
        store.set(KEY, "not json at all".to_string()).await.unwrap();
        assert!(repo.list().await.unwrap().is_empty());

        store.set(KEY, r#"{"an": "object"}"#.to_string()).await.unwrap();
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_legacy_records_are_normalized_on_read_and_upgraded_on_write() {
        let (repo, store) = repo_with_store();
        let legacy = json!([{
            "id": "old-1",
            "createdAt": "2023-01-01",
            "company": "Test Corp",
            "extractedSkills": [{"name": "Web", "skills": ["React"]}],
            "readinessScore": 75
        }]);
        store.set(KEY, legacy.to_string()).await.unwrap();

        let entry = repo.get("old-1").await.unwrap().unwrap();
        assert_eq!(entry.extracted_skills.web, vec!["React"]);
        assert_eq!(entry.base_score, 75);

        let toggled = repo
            .toggle_skill("old-1", "React", Confidence::Know)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(toggled.final_score, 77);

        let stored: Value = serde_json::from_str(&store.get(KEY).await.unwrap().unwrap()).unwrap();
        assert!(stored[0]["extractedSkills"].is_object());
        assert_eq!(stored[0]["schemaVersion"], json!(2));
        assert_eq!(stored[0]["finalScore"], json!(77));
        assert_eq!(stored[0]["baseScore"], json!(75));
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_none() {
        let (repo, _) = repo_with_store();
        let result = repo.update("missing", |e| e).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_update_replaces_in_place() {
        let (repo, _) = repo_with_store();
        let a = run_analysis("A", "", "React");
        let b = run_analysis("B", "", "SQL");
        repo.save(&a).await.unwrap();
        repo.save(&b).await.unwrap();

        let updated = repo
            .update(&a.id, |mut e| {
                e.final_score = 10;
                e
            })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.final_score, 10);

        let history = repo.list().await.unwrap();
        assert_eq!(history[1].id, a.id);
        assert_eq!(history[1].final_score, 10);
        assert_eq!(history[0], b);
    }

    #[tokio::test]
    async fn test_id_less_record_is_addressable_across_reads() {
        let (repo, store) = repo_with_store();
        let legacy = json!([{
            "createdAt": "2023-03-01",
            "company": "No Id Inc",
            "extractedSkills": [{"name": "Web", "skills": ["React"]}],
            "readinessScore": 60
        }]);
        store.set(KEY, legacy.to_string()).await.unwrap();

        let first = repo.list().await.unwrap()[0].id.clone();
        let second = repo.list().await.unwrap()[0].id.clone();
        assert_eq!(first, second);
        assert_eq!(repo.get(&first).await.unwrap().unwrap().company, "No Id Inc");

        let toggled = repo
            .toggle_skill(&first, "React", Confidence::Know)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(toggled.id, first);
        assert_eq!(toggled.final_score, 62);
        assert!(repo.delete(&first).await.unwrap());
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_by_id() {
        let (repo, _) = repo_with_store();
        let a = run_analysis("A", "", "React");
        repo.save(&a).await.unwrap();

        assert!(repo.delete(&a.id).await.unwrap());
        assert!(!repo.delete(&a.id).await.unwrap());
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_toggle_missing_entry_is_none() {
        let (repo, _) = repo_with_store();
        let result = repo.toggle_skill("nope", "React", Confidence::Know).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_concurrent_toggles_are_not_lost() {
        let (repo, _) = repo_with_store();
        let entry = run_analysis("Acme", "SDE", "React, SQL, Docker, AWS");
        repo.save(&entry).await.unwrap();

        let mut handles = Vec::new();
        for skill in ["React", "SQL", "Docker", "AWS"] {
            let repo = repo.clone();
            let id = entry.id.clone();
            handles.push(tokio::spawn(async move {
                repo.toggle_skill(&id, skill, Confidence::Know).await.unwrap();
            }));
        }
        for h in handles {
            h.await.unwrap();
        }

        let stored = repo.get(&entry.id).await.unwrap().unwrap();
        assert_eq!(stored.skill_confidence_map.len(), 4);
        assert_eq!(stored.final_score, entry.base_score + 8);
    }
}
