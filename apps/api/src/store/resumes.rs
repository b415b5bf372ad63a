//! Resume collection — `resumes.json`.

use std::path::PathBuf;

use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::models::resume::{
    Education, Resume, WorkExperience, DEFAULT_BG_COLOR, DEFAULT_FONT_FAMILY,
    DEFAULT_PRIMARY_COLOR, DEFAULT_SECONDARY_COLOR, DEFAULT_TEXT_COLOR,
};
use crate::store::{read_json, write_json, StoreError};

/// Creation payload — everything the store itself assigns is absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewResume {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub photo_data: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub educations: Vec<NewEducation>,
    #[serde(default)]
    pub work_experiences: Vec<NewWorkExperience>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEducation {
    /// Present when the editor round-trips an existing entry.
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkExperience {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub description: String,
}

/// Field-wise update. Absent fields keep their stored value; provided entry
/// lists replace wholesale, with ids assigned to entries that lack one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumePatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub photo_data: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub educations: Option<Vec<NewEducation>>,
    #[serde(default)]
    pub work_experiences: Option<Vec<NewWorkExperience>>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub bg_color: Option<String>,
    #[serde(default)]
    pub primary_color: Option<String>,
    #[serde(default)]
    pub secondary_color: Option<String>,
    #[serde(default)]
    pub text_color: Option<String>,
    #[serde(default)]
    pub font_family: Option<String>,
    #[serde(default)]
    pub selected_layout_index: Option<i64>,
    #[serde(default)]
    pub selected_style_index: Option<i64>,
}

#[derive(Clone)]
pub struct ResumeStore {
    path: PathBuf,
}

impl ResumeStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            path: data_dir.into().join("resumes.json"),
        }
    }

    pub async fn list(&self) -> Vec<Resume> {
        read_json(&self.path).await
    }

    pub async fn get(&self, id: Uuid) -> Option<Resume> {
        self.list().await.into_iter().find(|r| r.id == id)
    }

    /// Creates a resume with a fresh id, entry ids, timestamps and the
    /// default presentation attributes.
    pub async fn create(&self, new: NewResume) -> Result<Resume, StoreError> {
        let now = Utc::now();
        let resume = Resume {
            id: Uuid::new_v4(),
            title: new.title,
            description: new.description,
            first_name: new.first_name,
            last_name: new.last_name,
            job_title: new.job_title,
            city: new.city,
            country: new.country,
            phone: new.phone,
            email: new.email,
            photo_url: new.photo_url,
            photo_data: new.photo_data,
            summary: new.summary,
            educations: new.educations.into_iter().map(assign_education_id).collect(),
            work_experiences: new
                .work_experiences
                .into_iter()
                .map(assign_experience_id)
                .collect(),
            skills: new.skills,
            bg_color: Some(DEFAULT_BG_COLOR.to_string()),
            primary_color: Some(DEFAULT_PRIMARY_COLOR.to_string()),
            secondary_color: Some(DEFAULT_SECONDARY_COLOR.to_string()),
            text_color: Some(DEFAULT_TEXT_COLOR.to_string()),
            font_family: Some(DEFAULT_FONT_FAMILY.to_string()),
            selected_layout_index: Some(0),
            selected_style_index: Some(0),
            created_at: now,
            updated_at: now,
        };

        let mut resumes = self.list().await;
        resumes.push(resume.clone());
        write_json(&self.path, &resumes).await?;
        Ok(resume)
    }

    /// Merges a patch into the stored resume. Returns `None` when the id is
    /// unknown. `updated_at` is refreshed; `created_at` never changes.
    pub async fn update(&self, id: Uuid, patch: ResumePatch) -> Result<Option<Resume>, StoreError> {
        let mut resumes = self.list().await;
        let Some(resume) = resumes.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };

        apply_patch(resume, patch);
        resume.updated_at = Utc::now();
        let updated = resume.clone();

        write_json(&self.path, &resumes).await?;
        Ok(Some(updated))
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut resumes = self.list().await;
        let before = resumes.len();
        resumes.retain(|r| r.id != id);
        if resumes.len() == before {
            return Ok(false);
        }
        write_json(&self.path, &resumes).await?;
        Ok(true)
    }
}

fn assign_education_id(e: NewEducation) -> Education {
    Education {
        id: e.id.unwrap_or_else(Uuid::new_v4),
        institution: e.institution,
        degree: e.degree,
        start_date: e.start_date,
        end_date: e.end_date,
    }
}

fn assign_experience_id(e: NewWorkExperience) -> WorkExperience {
    WorkExperience {
        id: e.id.unwrap_or_else(Uuid::new_v4),
        company: e.company,
        position: e.position,
        start_date: e.start_date,
        end_date: e.end_date,
        description: e.description,
    }
}

fn apply_patch(resume: &mut Resume, patch: ResumePatch) {
    macro_rules! merge {
        ($($field:ident),+ $(,)?) => {
            $(if let Some(value) = patch.$field {
                resume.$field = Some(value);
            })+
        };
    }
    merge!(
        title,
        description,
        first_name,
        last_name,
        job_title,
        city,
        country,
        phone,
        email,
        photo_url,
        photo_data,
        summary,
        bg_color,
        primary_color,
        secondary_color,
        text_color,
        font_family,
        selected_layout_index,
        selected_style_index,
    );
    if let Some(educations) = patch.educations {
        resume.educations = educations.into_iter().map(assign_education_id).collect();
    }
    if let Some(experiences) = patch.work_experiences {
        resume.work_experiences = experiences.into_iter().map(assign_experience_id).collect();
    }
    if let Some(skills) = patch.skills {
        resume.skills = skills;
    }
}
