//! The single user profile — `profile.json` holds one record or `null`.

use std::path::PathBuf;

use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::models::profile::UserProfile;
use crate::store::resumes::{NewEducation, NewWorkExperience};
use crate::store::{read_json, write_json, StoreError};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProfile {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub job: String,
    #[serde(default)]
    pub education: Vec<NewEducation>,
    #[serde(default)]
    pub experience: Vec<NewWorkExperience>,
    #[serde(default)]
    pub additional_info: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    pub id: Uuid,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub job: Option<String>,
    #[serde(default)]
    pub education: Option<Vec<NewEducation>>,
    #[serde(default)]
    pub experience: Option<Vec<NewWorkExperience>>,
    #[serde(default)]
    pub additional_info: Option<String>,
}

#[derive(Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            path: data_dir.into().join("profile.json"),
        }
    }

    pub async fn get(&self) -> Option<UserProfile> {
        read_json(&self.path).await
    }

    /// Creates (or replaces) the profile with fresh id and timestamps.
    pub async fn create(&self, new: NewProfile) -> Result<UserProfile, StoreError> {
        let now = Utc::now();
        let profile = UserProfile {
            id: Uuid::new_v4(),
            first_name: new.first_name,
            last_name: new.last_name,
            phone: new.phone,
            email: new.email,
            city: new.city,
            country: new.country,
            job: new.job,
            education: new
                .education
                .into_iter()
                .map(|e| crate::models::resume::Education {
                    id: e.id.unwrap_or_else(Uuid::new_v4),
                    institution: e.institution,
                    degree: e.degree,
                    start_date: e.start_date,
                    end_date: e.end_date,
                })
                .collect(),
            experience: new
                .experience
                .into_iter()
                .map(|e| crate::models::resume::WorkExperience {
                    id: e.id.unwrap_or_else(Uuid::new_v4),
                    company: e.company,
                    position: e.position,
                    start_date: e.start_date,
                    end_date: e.end_date,
                    description: e.description,
                })
                .collect(),
            additional_info: new.additional_info,
            created_at: now,
            updated_at: now,
        };
        write_json(&self.path, &Some(profile.clone())).await?;
        Ok(profile)
    }

    /// Updates the stored profile if its id matches the patch.
    pub async fn update(&self, patch: ProfilePatch) -> Result<Option<UserProfile>, StoreError> {
        let Some(mut profile) = self.get().await else {
            return Ok(None);
        };
        if profile.id != patch.id {
            return Ok(None);
        }

        if let Some(v) = patch.first_name {
            profile.first_name = v;
        }
        if let Some(v) = patch.last_name {
            profile.last_name = v;
        }
        if let Some(v) = patch.phone {
            profile.phone = v;
        }
        if let Some(v) = patch.email {
            profile.email = v;
        }
        if let Some(v) = patch.city {
            profile.city = v;
        }
        if let Some(v) = patch.country {
            profile.country = v;
        }
        if let Some(v) = patch.job {
            profile.job = v;
        }
        if let Some(v) = patch.additional_info {
            profile.additional_info = v;
        }
        if let Some(education) = patch.education {
            profile.education = education
                .into_iter()
                .map(|e| crate::models::resume::Education {
                    id: e.id.unwrap_or_else(Uuid::new_v4),
                    institution: e.institution,
                    degree: e.degree,
                    start_date: e.start_date,
                    end_date: e.end_date,
                })
                .collect();
        }
        if let Some(experience) = patch.experience {
            profile.experience = experience
                .into_iter()
                .map(|e| crate::models::resume::WorkExperience {
                    id: e.id.unwrap_or_else(Uuid::new_v4),
                    company: e.company,
                    position: e.position,
                    start_date: e.start_date,
                    end_date: e.end_date,
                    description: e.description,
                })
                .collect();
        }
        profile.updated_at = Utc::now();

        write_json(&self.path, &Some(profile.clone())).await?;
        Ok(Some(profile))
    }

    pub async fn delete(&self) -> Result<bool, StoreError> {
        if self.get().await.is_none() {
            return Ok(false);
        }
        write_json(&self.path, &Option::<UserProfile>::None).await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, ProfileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path());
        (dir, store)
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let (_dir, store) = store();
        assert!(store.get().await.is_none());

        let created = store
            .create(NewProfile {
                first_name: "Linh".to_string(),
                job: "Engineer".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        let fetched = store.get().await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_update_requires_matching_id() {
        let (_dir, store) = store();
        let created = store.create(NewProfile::default()).await.unwrap();

        let miss = store
            .update(ProfilePatch {
                id: Uuid::new_v4(),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(miss.is_none());

        let hit = store
            .update(ProfilePatch {
                id: created.id,
                city: Some("Hanoi".to_string()),
                ..Default::default()
            })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(hit.city, "Hanoi");
        assert_eq!(hit.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_delete_clears_record() {
        let (_dir, store) = store();
        assert!(!store.delete().await.unwrap());
        store.create(NewProfile::default()).await.unwrap();
        assert!(store.delete().await.unwrap());
        assert!(store.get().await.is_none());
    }
}
