//! Accent style — solid color blocks instead of plain text treatment.
//!
//! The header sits on a filled primary-color band with white text; section
//! headings are secondary-color chips; skills render as filled tiles. Same
//! emptiness and filter rules as every other family.

use crate::models::resume::Resume;
use crate::render::dates::{education_range, experience_range};
use crate::render::fragment::{Element, Fragment};
use crate::render::style::{
    contact_line, filter_educations, filter_experiences, full_name, has_header_content, present,
    StyleFamily,
};

pub struct AccentStyle;

fn section(resume: &Resume) -> Element {
    Element::new("div")
        .class("section")
        .class("centered")
        .style("font-family", resume.font_family())
}

fn heading_chip(resume: &Resume, label: &str) -> Fragment {
    Element::new("p")
        .class("section-heading")
        .class("chip")
        .style("background-color", resume.secondary_color())
        .style("color", "white")
        .text(label)
        .build()
}

impl StyleFamily for AccentStyle {
    fn name(&self) -> &'static str {
        "accent"
    }

    fn header(&self, resume: &Resume) -> Option<Fragment> {
        let photo = present(&resume.photo_url).or_else(|| present(&resume.photo_data));
        if !has_header_content(resume) && photo.is_none() {
            return None;
        }

        let mut header = Element::new("div")
            .class("header")
            .class("banner")
            .style("background-color", resume.primary_color())
            .style("font-family", resume.font_family());
        if let Some(src) = photo {
            header = header.child(
                Element::new("img")
                    .class("photo")
                    .class("round")
                    .attr("src", src)
                    .attr("alt", "Author photo")
                    .build(),
            );
        }
        if let Some(name) = full_name(resume) {
            header = header.child(
                Element::new("p")
                    .class("name")
                    .style("color", "white")
                    .text(name)
                    .build(),
            );
        }
        if let Some(job_title) = present(&resume.job_title) {
            header = header.child(
                Element::new("p")
                    .class("job-title")
                    .style("color", "white")
                    .text(job_title)
                    .build(),
            );
        }
        if let Some(contact) = contact_line(resume) {
            header = header.child(
                Element::new("p")
                    .class("contact")
                    .style("color", "white")
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
                .child(heading_chip(resume, "Summary"))
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
            .child(heading_chip(resume, "Education"));
        for entry in entries {
            let mut item = Element::new("div").class("entry");
            let range = education_range(&entry.start_date, entry.end_date.as_deref());
            if !entry.degree.is_empty() || range.is_some() {
                let mut row = Element::new("div").class("entry-row");
                if !entry.degree.is_empty() {
                    row = row.child(
                        Element::new("span")
                            .class("entry-title")
                            .style("color", resume.text_color())
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
                        .style("color", resume.text_color())
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
            .child(heading_chip(resume, "Work experience"));
        for entry in entries {
            let mut item = Element::new("div").class("entry");
            let range = experience_range(&entry.start_date, entry.end_date.as_deref());
            if !entry.position.is_empty() || range.is_some() {
                let mut row = Element::new("div").class("entry-row");
                if !entry.position.is_empty() {
                    row = row.child(
                        Element::new("span")
                            .class("entry-title")
                            .style("color", resume.text_color())
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
                        .style("color", resume.text_color())
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
            chips = chips.child(
                Element::new("div")
                    .class("skill")
                    .class("tile")
                    .style("background-color", resume.bg_color())
                    .style("color", resume.text_color())
                    .text(skill.as_str())
                    .build(),
            );
        }
        Some(
            section(resume)
                .class("skills")
                .child(heading_chip(resume, "Skills"))
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
    fn test_header_uses_primary_banner_with_white_text() {
        let mut resume = full_resume();
        resume.primary_color = Some("#AA0000".to_string());
        let html = AccentStyle.header(&resume).unwrap().to_html();
        assert!(html.contains("background-color: #AA0000"));
        assert!(html.contains("color: white"));
    }

    #[test]
    fn test_same_emptiness_rules_as_plain() {
        let blank = blank_resume();
        assert!(AccentStyle.header(&blank).is_none());
        assert!(AccentStyle.summary(&blank).is_none());
        assert!(AccentStyle.education(&blank).is_none());
        assert!(AccentStyle.experience(&blank).is_none());
        assert!(AccentStyle.skills(&blank).is_none());
    }

    #[test]
    fn test_heading_chips_take_secondary_color() {
        let mut resume = full_resume();
        resume.secondary_color = Some("#00BB00".to_string());
        let html = AccentStyle.skills(&resume).unwrap().to_html();
        assert!(html.contains("chip"));
        assert!(html.contains("background-color: #00BB00"));
    }

    #[test]
    fn test_date_rules_match_plain_family() {
        let html = AccentStyle.experience(&full_resume()).unwrap().to_html();
        assert!(html.contains("01/2023 - Present"));
        let html = AccentStyle.education(&full_resume()).unwrap().to_html();
        assert!(html.contains("09/2015 - 06/2019"));
    }
}
