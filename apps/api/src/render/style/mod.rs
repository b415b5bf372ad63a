//! Style families — the five section renderers under one visual treatment.
//!
//! Every family implements identical emptiness and filter rules; only the
//! color/typography treatment differs. A renderer returns `None` when its
//! section has nothing to show, and layouts skip `None` fragments — absent
//! data degrades to an omitted block, never an error.

pub mod accent;
pub mod plain;

use crate::models::resume::{Education, Resume, WorkExperience};
use crate::render::dates::parse_date;
use crate::render::fragment::Fragment;

/// A fixed set of five fragment producers sharing one visual treatment.
/// No cross-style shared state; implementations are unit structs.
pub trait StyleFamily: Send + Sync {
    fn name(&self) -> &'static str;

    fn header(&self, resume: &Resume) -> Option<Fragment>;
    fn summary(&self, resume: &Resume) -> Option<Fragment>;
    fn education(&self, resume: &Resume) -> Option<Fragment>;
    fn experience(&self, resume: &Resume) -> Option<Fragment>;
    fn skills(&self, resume: &Resume) -> Option<Fragment>;
}

/// The five section fragments a layout compositor arranges. Opaque to the
/// layout: it positions them, never reinterprets them.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionFragments {
    pub header: Option<Fragment>,
    pub summary: Option<Fragment>,
    pub education: Option<Fragment>,
    pub experience: Option<Fragment>,
    pub skills: Option<Fragment>,
}

/// Runs all five renderers of one family over a document.
pub fn render_sections(style: &dyn StyleFamily, resume: &Resume) -> SectionFragments {
    SectionFragments {
        header: style.header(resume),
        summary: style.summary(resume),
        education: style.education(resume),
        experience: style.experience(resume),
        skills: style.skills(resume),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Shared emptiness / filter rules
// ────────────────────────────────────────────────────────────────────────────

/// An optional field counts as present only when non-empty.
pub(crate) fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Header renders iff at least one identity/contact field is present.
/// The photo is independent: it renders whenever a reference exists, even
/// with every text field absent.
pub(crate) fn has_header_content(resume: &Resume) -> bool {
    [
        &resume.first_name,
        &resume.last_name,
        &resume.job_title,
        &resume.city,
        &resume.country,
        &resume.phone,
        &resume.email,
    ]
    .into_iter()
    .any(|f| present(f).is_some())
}

/// `"First Last"` with absent halves dropped; `None` when both are absent.
pub(crate) fn full_name(resume: &Resume) -> Option<String> {
    let parts: Vec<&str> = [present(&resume.first_name), present(&resume.last_name)]
        .into_iter()
        .flatten()
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

/// `"City, Country • phone • email"` with absent pieces collapsed.
pub(crate) fn contact_line(resume: &Resume) -> Option<String> {
    let place: Vec<&str> = [present(&resume.city), present(&resume.country)]
        .into_iter()
        .flatten()
        .collect();
    let reach: Vec<&str> = [present(&resume.phone), present(&resume.email)]
        .into_iter()
        .flatten()
        .collect();

    let mut line = place.join(", ");
    if !line.is_empty() && !reach.is_empty() {
        line.push_str(" • ");
    }
    line.push_str(&reach.join(" • "));
    if line.is_empty() {
        None
    } else {
        Some(line)
    }
}

/// An education entry is kept iff it has a degree, an institution, or a valid
/// start date.
pub(crate) fn filter_educations(resume: &Resume) -> Vec<&Education> {
    resume
        .educations
        .iter()
        .filter(|e| {
            !e.degree.is_empty() || !e.institution.is_empty() || parse_date(&e.start_date).is_some()
        })
        .collect()
}

/// An experience entry is kept iff it has a position, a company, a
/// description, or a valid start date.
pub(crate) fn filter_experiences(resume: &Resume) -> Vec<&WorkExperience> {
    resume
        .work_experiences
        .iter()
        .filter(|e| {
            !e.position.is_empty()
                || !e.company.is_empty()
                || !e.description.is_empty()
                || parse_date(&e.start_date).is_some()
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    use crate::models::resume::{Education, Resume, WorkExperience};

    /// A resume with every content field absent/empty.
    pub fn blank_resume() -> Resume {
        let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        Resume {
            id: Uuid::nil(),
            title: None,
            description: None,
            first_name: None,
            last_name: None,
            job_title: None,
            city: None,
            country: None,
            phone: None,
            email: None,
            photo_url: None,
            photo_data: None,
            summary: None,
            educations: vec![],
            work_experiences: vec![],
            skills: vec![],
            bg_color: None,
            primary_color: None,
            secondary_color: None,
            text_color: None,
            font_family: None,
            selected_layout_index: None,
            selected_style_index: None,
            created_at: at,
            updated_at: at,
        }
    }

    /// A resume exercising every section.
    pub fn full_resume() -> Resume {
        Resume {
            first_name: Some("Linh".to_string()),
            last_name: Some("Tran".to_string()),
            job_title: Some("Backend Engineer".to_string()),
            city: Some("Hanoi".to_string()),
            country: Some("Vietnam".to_string()),
            phone: Some("+84 90 000 0000".to_string()),
            email: Some("linh@example.com".to_string()),
            summary: Some("Engineer with a focus on distributed systems.".to_string()),
            educations: vec![Education {
                id: Uuid::from_u128(1),
                institution: "HUST".to_string(),
                degree: "BSc Computer Science".to_string(),
                start_date: "2015-09-01".to_string(),
                end_date: Some("2019-06-15".to_string()),
            }],
            work_experiences: vec![WorkExperience {
                id: Uuid::from_u128(2),
                company: "Acme".to_string(),
                position: "Engineer".to_string(),
                start_date: "2023-01-15".to_string(),
                end_date: None,
                description: "Built services.".to_string(),
            }],
            skills: vec!["Rust".to_string(), "SQL".to_string()],
            ..blank_resume()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_fixtures::{blank_resume, full_resume};
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_header_content_requires_any_identity_field() {
        assert!(!has_header_content(&blank_resume()));

        let mut resume = blank_resume();
        resume.email = Some("a@b.c".to_string());
        assert!(has_header_content(&resume));

        // Empty strings count as absent.
        let mut resume = blank_resume();
        resume.first_name = Some(String::new());
        assert!(!has_header_content(&resume));
    }

    #[test]
    fn test_contact_line_separators() {
        let resume = full_resume();
        assert_eq!(
            contact_line(&resume).as_deref(),
            Some("Hanoi, Vietnam • +84 90 000 0000 • linh@example.com")
        );

        let mut resume = blank_resume();
        resume.country = Some("Vietnam".to_string());
        assert_eq!(contact_line(&resume).as_deref(), Some("Vietnam"));

        let mut resume = blank_resume();
        resume.phone = Some("123".to_string());
        resume.email = Some("a@b.c".to_string());
        assert_eq!(contact_line(&resume).as_deref(), Some("123 • a@b.c"));
    }

    #[test]
    fn test_education_filter_needs_degree_institution_or_valid_start() {
        let mut resume = blank_resume();
        resume.educations = vec![
            crate::models::resume::Education {
                id: Uuid::from_u128(1),
                institution: String::new(),
                degree: String::new(),
                start_date: "not-a-date".to_string(),
                end_date: None,
            },
            crate::models::resume::Education {
                id: Uuid::from_u128(2),
                institution: "MIT".to_string(),
                degree: String::new(),
                start_date: String::new(),
                end_date: None,
            },
        ];
        let kept = filter_educations(&resume);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].institution, "MIT");
    }

    #[test]
    fn test_experience_filter_accepts_description_only_entries() {
        let mut resume = blank_resume();
        resume.work_experiences = vec![crate::models::resume::WorkExperience {
            id: Uuid::from_u128(1),
            company: String::new(),
            position: String::new(),
            start_date: String::new(),
            end_date: None,
            description: "Did things.".to_string(),
        }];
        assert_eq!(filter_experiences(&resume).len(), 1);
    }
}
