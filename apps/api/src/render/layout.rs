//! Layout compositors — arrange five opaque section fragments into a page.
//!
//! A layout never reads the document and never looks inside a fragment; it
//! only positions what a style family produced. Style controls appearance,
//! layout controls arrangement, and every style × layout pair composes.

use crate::render::fragment::{Element, Fragment};
use crate::render::style::SectionFragments;

/// The closed set of page arrangements, in registry order. Index 0 is the
/// fallback for out-of-range selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLayout {
    /// All five sections stacked vertically with separators.
    SingleColumn,
    /// Header and summary full-width; narrow skills column on the left,
    /// education and experience on the right.
    SkillsSidebarLeft,
    /// Mirror of `SkillsSidebarLeft`.
    SkillsSidebarRight,
    /// Left half: header, summary, education. Right half: experience, skills.
    /// No shared top band.
    SplitColumns,
}

impl PageLayout {
    pub const ALL: [PageLayout; 4] = [
        PageLayout::SingleColumn,
        PageLayout::SkillsSidebarLeft,
        PageLayout::SkillsSidebarRight,
        PageLayout::SplitColumns,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PageLayout::SingleColumn => "single-column",
            PageLayout::SkillsSidebarLeft => "skills-sidebar-left",
            PageLayout::SkillsSidebarRight => "skills-sidebar-right",
            PageLayout::SplitColumns => "split-columns",
        }
    }

    pub fn compose(self, sections: SectionFragments) -> Fragment {
        match self {
            PageLayout::SingleColumn => single_column(sections),
            PageLayout::SkillsSidebarLeft => skills_sidebar(sections, Side::Left),
            PageLayout::SkillsSidebarRight => skills_sidebar(sections, Side::Right),
            PageLayout::SplitColumns => split_columns(sections),
        }
    }
}

#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

fn separator() -> Fragment {
    Element::new("hr").class("separator").build()
}

fn single_column(s: SectionFragments) -> Fragment {
    Element::new("div")
        .class("page")
        .class("single-column")
        .maybe_child(s.header)
        .child(separator())
        .maybe_child(s.summary)
        .child(separator())
        .maybe_child(s.education)
        .child(separator())
        .maybe_child(s.experience)
        .child(separator())
        .maybe_child(s.skills)
        .build()
}

fn skills_sidebar(s: SectionFragments, side: Side) -> Fragment {
    let sidebar = Element::new("div")
        .class("column")
        .class("narrow")
        .maybe_child(s.skills)
        .build();
    let main = Element::new("div")
        .class("column")
        .class("wide")
        .maybe_child(s.education)
        .child(separator())
        .maybe_child(s.experience)
        .build();

    let body = match side {
        Side::Left => Element::new("div")
            .class("columns")
            .child(sidebar)
            .child(main),
        Side::Right => Element::new("div")
            .class("columns")
            .child(main)
            .child(sidebar),
    };

    Element::new("div")
        .class("page")
        .class(match side {
            Side::Left => "sidebar-left",
            Side::Right => "sidebar-right",
        })
        .maybe_child(s.header)
        .child(separator())
        .maybe_child(s.summary)
        .child(separator())
        .child(body.build())
        .build()
}

fn split_columns(s: SectionFragments) -> Fragment {
    Element::new("div")
        .class("page")
        .class("split-columns")
        .child(
            Element::new("div")
                .class("column")
                .class("half")
                .maybe_child(s.header)
                .child(separator())
                .maybe_child(s.summary)
                .child(separator())
                .maybe_child(s.education)
                .build(),
        )
        .child(
            Element::new("div")
                .class("column")
                .class("half")
                .maybe_child(s.experience)
                .child(separator())
                .maybe_child(s.skills)
                .build(),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::fragment::Fragment;

    fn tagged(label: &str) -> Option<Fragment> {
        Some(Fragment::text(label))
    }

    fn sections() -> SectionFragments {
        SectionFragments {
            header: tagged("HEADER"),
            summary: tagged("SUMMARY"),
            education: tagged("EDUCATION"),
            experience: tagged("EXPERIENCE"),
            skills: tagged("SKILLS"),
        }
    }

    #[test]
    fn test_single_column_orders_all_five() {
        let html = PageLayout::SingleColumn.compose(sections()).to_html();
        let order = ["HEADER", "SUMMARY", "EDUCATION", "EXPERIENCE", "SKILLS"];
        let positions: Vec<usize> = order.iter().map(|s| html.find(s).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_sidebar_left_puts_skills_before_main_column() {
        let html = PageLayout::SkillsSidebarLeft.compose(sections()).to_html();
        assert!(html.find("SKILLS").unwrap() < html.find("EDUCATION").unwrap());
        // Header and summary stay above the column split.
        assert!(html.find("SUMMARY").unwrap() < html.find("SKILLS").unwrap());
    }

    #[test]
    fn test_sidebar_right_mirrors_left() {
        let html = PageLayout::SkillsSidebarRight.compose(sections()).to_html();
        assert!(html.find("EXPERIENCE").unwrap() < html.find("SKILLS").unwrap());
    }

    #[test]
    fn test_split_columns_groups_without_top_band() {
        let html = PageLayout::SplitColumns.compose(sections()).to_html();
        assert!(html.find("EDUCATION").unwrap() < html.find("EXPERIENCE").unwrap());
        assert!(html.find("EXPERIENCE").unwrap() < html.find("SKILLS").unwrap());
        assert!(!html.contains("class=\"page single-column\""));
    }

    #[test]
    fn test_absent_fragments_are_skipped_not_errors() {
        let empty = SectionFragments {
            header: None,
            summary: None,
            education: None,
            experience: None,
            skills: None,
        };
        for layout in PageLayout::ALL {
            let html = layout.compose(empty.clone()).to_html();
            assert!(!html.contains("HEADER"));
        }
    }
}
