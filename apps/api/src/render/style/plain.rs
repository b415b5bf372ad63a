//! Plain style — palette-driven text on the page background.
//!
//! Headings take the primary color, entry titles the secondary color, body
//! text the text color. No filled blocks; the page background shows through.

use crate::models::resume::Resume;
use crate::render::dates::{education_range, experience_range};
use crate::render::fragment::{Element, Fragment};
use crate::render::style::{
    contact_line, filter_educations, filter_experiences, full_name, has_header_content, present,
    StyleFamily,
};

pub struct PlainStyle;

fn section(resume: &Resume) -> Element {
    Element::new("div")
        .class("section")
        .style("background-color", resume.bg_color())
        .style("padding", "1rem")
        .style("font-family", resume.font_family())
}

fn heading(resume: &Resume, label: &str) -> Fragment {
    Element::new("p")
        .class("section-heading")
        .style("color", resume.primary_color())
        .text(label)
        .build()
}

impl StyleFamily for PlainStyle {
    fn name(&self) -> &'static str {
        "plain"
    }

    fn header(&self, resume: &Resume) -> Option<Fragment> {
        let photo = present(&resume.photo_url).or_else(|| present(&resume.photo_data));
        if !has_header_content(resume) && photo.is_none() {
            return None;
        }

        let mut header = section(resume).class("header");
        if let Some(src) = photo {
            header = header.child(
                Element::new("img")
                    .class("photo")
                    .attr("src", src)
                    .attr("alt", "Author photo")
                    .build(),
            );
        }
        if let Some(name) = full_name(resume) {
            header = header.child(
                Element::new("p")
                    .class("name")
                    .style("color", resume.primary_color())
                    .text(name)
                    .build(),
            );
        }
        if let Some(job_title) = present(&resume.job_title) {
            header = header.child(
                Element::new("p")
                    .class("job-title")
                    .style("color", resume.secondary_color())
                    .text(job_title)
                    .build(),
            );
        }
        if let Some(contact) = contact_line(resume) {
            header = header.child(
                Element::new("p")
                    .class("contact")
                    .style("color", resume.text_color())
                    .text(contact)
                    .build(),
            );
        }
        Some(header.build())
    }

    fn summary(&self, resume: &Resume) -> Option<Fragment> {
        let summary = present(&resume.summary)?;
        Some(
            section(resume)
                .class("summary")
                .child(heading(resume, "Summary"))
                .child(
                    Element::new("div")
                        .class("body-text")
                        .style("color", resume.text_color())
                        .style("white-space", "pre-line")
                        .text(summary)
                        .build(),
                )
                .build(),
        )
    }

    fn education(&self, resume: &Resume) -> Option<Fragment> {
        let entries = filter_educations(resume);
        if entries.is_empty() {
            return None;
        }

        let mut block = section(resume)
            .class("education")
            .child(heading(resume, "Education"));
        for entry in entries {
            let mut item = Element::new("div").class("entry");
            let range = education_range(&entry.start_date, entry.end_date.as_deref());
            if !entry.degree.is_empty() || range.is_some() {
                let mut row = Element::new("div").class("entry-row");
                if !entry.degree.is_empty() {
                    row = row.child(
                        Element::new("span")
                            .class("entry-title")
                            .style("color", resume.secondary_color())
                            .text(entry.degree.as_str())
                            .build(),
                    );
                }
                if let Some(range) = range {
                    row = row.child(
                        Element::new("span")
                            .class("entry-dates")
                            .style("color", resume.text_color())
                            .text(range)
                            .build(),
                    );
                }
                item = item.child(row.build());
            }
            if !entry.institution.is_empty() {
                item = item.child(
                    Element::new("p")
                        .class("entry-subtitle")
                        .style("color", resume.secondary_color())
                        .text(entry.institution.as_str())
                        .build(),
                );
            }
            block = block.child(item.build());
        }
        Some(block.build())
    }

    fn experience(&self, resume: &Resume) -> Option<Fragment> {
        let entries = filter_experiences(resume);
        if entries.is_empty() {
            return None;
        }

        let mut block = section(resume)
            .class("experience")
            .child(heading(resume, "Work experience"));
        for entry in entries {
            let mut item = Element::new("div").class("entry");
            let range = experience_range(&entry.start_date, entry.end_date.as_deref());
            if !entry.position.is_empty() || range.is_some() {
                let mut row = Element::new("div").class("entry-row");
                if !entry.position.is_empty() {
                    row = row.child(
                        Element::new("span")
                            .class("entry-title")
                            .style("color", resume.secondary_color())
                            .text(entry.position.as_str())
                            .build(),
                    );
                }
                if let Some(range) = range {
                    row = row.child(
                        Element::new("span")
                            .class("entry-dates")
                            .style("color", resume.text_color())
                            .text(range)
                            .build(),
                    );
                }
                item = item.child(row.build());
            }
            if !entry.company.is_empty() {
                item = item.child(
                    Element::new("p")
                        .class("entry-subtitle")
                        .style("color", resume.secondary_color())
                        .text(entry.company.as_str())
                        .build(),
                );
            }
            if !entry.description.is_empty() {
                item = item.child(
                    Element::new("div")
                        .class("body-text")
                        .style("color", resume.text_color())
                        .style("white-space", "pre-line")
                        .text(entry.description.as_str())
                        .build(),
                );
            }
            block = block.child(item.build());
        }
        Some(block.build())
    }

    fn skills(&self, resume: &Resume) -> Option<Fragment> {
        if resume.skills.is_empty() {
            return None;
        }
        let mut chips = Element::new("div").class("skill-list");
        for skill in &resume.skills {
            // Pass-through: blank skills render as stored.
            chips = chips.child(
                Element::new("div")
                    .class("skill")
                    .style("color", resume.text_color())
                    .text(skill.as_str())
                    .build(),
            );
        }
        Some(
            section(resume)
                .class("skills")
                .child(heading(resume, "Skills"))
                .child(chips.build())
                .build(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::style::test_fixtures::{blank_resume, full_resume};

    #[test]
    fn test_header_absent_when_no_identity_and_no_photo() {
        assert!(PlainStyle.header(&blank_resume()).is_none());
    }

    #[test]
    fn test_photo_renders_without_text_fields() {
        let mut resume = blank_resume();
        resume.photo_url = Some("https://example.com/p.png".to_string());
        let html = PlainStyle.header(&resume).unwrap().to_html();
        assert!(html.contains("img"));
        assert!(!html.contains("class=\"name\""));
    }

    #[test]
    fn test_summary_absent_when_empty() {
        assert!(PlainStyle.summary(&blank_resume()).is_none());
        let mut resume = blank_resume();
        resume.summary = Some(String::new());
        assert!(PlainStyle.summary(&resume).is_none());
    }

    #[test]
    fn test_experience_range_shows_present() {
        let html = PlainStyle.experience(&full_resume()).unwrap().to_html();
        assert!(html.contains("01/2023 - Present"));
        assert!(html.contains("Acme"));
    }

    #[test]
    fn test_education_range_has_no_present_marker() {
        let mut resume = full_resume();
        resume.educations[0].end_date = None;
        let html = PlainStyle.education(&resume).unwrap().to_html();
        assert!(html.contains("09/2015"));
        assert!(!html.contains("Present"));
    }

    #[test]
    fn test_education_absent_when_all_entries_filtered() {
        let mut resume = full_resume();
        resume.educations[0].degree.clear();
        resume.educations[0].institution.clear();
        resume.educations[0].start_date = "junk".to_string();
        assert!(PlainStyle.education(&resume).is_none());
    }

    #[test]
    fn test_skills_pass_through_blank_entries() {
        let mut resume = blank_resume();
        resume.skills = vec!["Rust".to_string(), String::new()];
        let html = PlainStyle.skills(&resume).unwrap().to_html();
        assert_eq!(html.matches("class=\"skill\"").count(), 2);
    }

    #[test]
    fn test_palette_defaults_applied_per_field() {
        let mut resume = full_resume();
        resume.primary_color = Some("#123456".to_string());
        resume.text_color = None;
        let html = PlainStyle.summary(&resume).unwrap().to_html();
        assert!(html.contains("#123456"));
        assert!(html.contains("#000000"));
    }
}
