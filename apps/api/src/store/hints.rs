//! Hint collection — `hints.json`.

use std::path::PathBuf;

use chrono::Utc;
use uuid::Uuid;

use crate::models::hint::{Hint, HintKind, ResumePart};
use crate::store::{read_json, write_json, StoreError};

/// Creation payload for one hint, as returned by the evaluate endpoint.
#[derive(Debug, Clone)]
pub struct NewHint {
    pub resume_id: Uuid,
    pub kind: HintKind,
    pub content: String,
    pub part: ResumePart,
}

#[derive(Clone)]
pub struct HintStore {
    path: PathBuf,
}

impl HintStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            path: data_dir.into().join("hints.json"),
        }
    }

    pub async fn list(&self) -> Vec<Hint> {
        read_json(&self.path).await
    }

    /// Hints for one resume, optionally narrowed to a single section.
    pub async fn list_by_resume(&self, resume_id: Uuid, part: Option<ResumePart>) -> Vec<Hint> {
        self.list()
            .await
            .into_iter()
            .filter(|h| h.resume_id == resume_id && part.map_or(true, |p| h.part == p))
            .collect()
    }

    pub async fn create_many(&self, new: Vec<NewHint>) -> Result<Vec<Hint>, StoreError> {
        let now = Utc::now();
        let created: Vec<Hint> = new
            .into_iter()
            .map(|h| Hint {
                id: Uuid::new_v4(),
                resume_id: h.resume_id,
                kind: h.kind,
                content: h.content,
                part: h.part,
                created_at: now,
                updated_at: now,
            })
            .collect();

        let mut hints = self.list().await;
        hints.extend(created.iter().cloned());
        write_json(&self.path, &hints).await?;
        Ok(created)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut hints = self.list().await;
        let before = hints.len();
        hints.retain(|h| h.id != id);
        if hints.len() == before {
            return Ok(false);
        }
        write_json(&self.path, &hints).await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, HintStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = HintStore::new(dir.path());
        (dir, store)
    }

    fn hint_for(resume_id: Uuid, part: ResumePart) -> NewHint {
        NewHint {
            resume_id,
            kind: HintKind::Notice,
            content: "Add metrics to your bullets".to_string(),
            part,
        }
    }

    #[tokio::test]
    async fn test_list_by_resume_filters_by_part() {
        let (_dir, store) = store();
        let resume = Uuid::new_v4();
        let other = Uuid::new_v4();
        store
            .create_many(vec![
                hint_for(resume, ResumePart::Skills),
                hint_for(resume, ResumePart::Summary),
                hint_for(other, ResumePart::Skills),
            ])
            .await
            .unwrap();

        assert_eq!(store.list_by_resume(resume, None).await.len(), 2);
        let skills = store
            .list_by_resume(resume, Some(ResumePart::Skills))
            .await;
        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].part, ResumePart::Skills);
    }

    #[tokio::test]
    async fn test_delete_honors_not_found() {
        let (_dir, store) = store();
        let created = store
            .create_many(vec![hint_for(Uuid::new_v4(), ResumePart::Education)])
            .await
            .unwrap();

        assert!(!store.delete(Uuid::new_v4()).await.unwrap());
        assert!(store.delete(created[0].id).await.unwrap());
        assert!(store.list().await.is_empty());
    }
}
