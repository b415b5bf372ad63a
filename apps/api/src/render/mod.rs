//! Resume composition engine.
//!
//! A render pass is a pure function: document in, fragment tree out. The
//! selector resolves the document's style and layout indices against two
//! fixed registries — independently, each clamping any missing, negative or
//! out-of-range value to entry 0 — then hands the five fragments produced by
//! the chosen style family to the chosen layout compositor. Nothing in this
//! module performs I/O or mutates the document.

pub mod dates;
pub mod fragment;
pub mod layout;
pub mod preview;
pub mod style;

use crate::models::resume::Resume;
use crate::render::fragment::Fragment;
use crate::render::layout::PageLayout;
use crate::render::style::{accent::AccentStyle, plain::PlainStyle, StyleFamily};

/// Style families in registry order. Index 0 is the fallback.
pub const STYLES: [&dyn StyleFamily; 2] = [&PlainStyle, &AccentStyle];

/// Resolves a stored style index, clamping anything unusable to entry 0.
pub fn resolve_style(index: Option<i64>) -> &'static dyn StyleFamily {
    STYLES[clamp_index(index, STYLES.len())]
}

/// Resolves a stored layout index with the same fallback rule, independently
/// of style resolution.
pub fn resolve_layout(index: Option<i64>) -> PageLayout {
    PageLayout::ALL[clamp_index(index, PageLayout::ALL.len())]
}

fn clamp_index(index: Option<i64>, len: usize) -> usize {
    index
        .and_then(|i| usize::try_from(i).ok())
        .filter(|&i| i < len)
        .unwrap_or(0)
}

/// Composes the full page for a document: resolved style × resolved layout.
/// Never fails; malformed fields degrade inside the section renderers.
pub fn compose(resume: &Resume) -> Fragment {
    let style = resolve_style(resume.selected_style_index);
    let layout = resolve_layout(resume.selected_layout_index);
    layout.compose(style::render_sections(style, resume))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::style::test_fixtures::full_resume;

    #[test]
    fn test_out_of_range_indices_fall_back_to_first_entry() {
        for bad in [Some(-1), Some(i64::MAX), Some(STYLES.len() as i64), None] {
            let mut resume = full_resume();
            resume.selected_style_index = bad;
            resume.selected_layout_index = Some(0);
            let composed = compose(&resume);

            resume.selected_style_index = Some(0);
            assert_eq!(composed, compose(&resume));
        }
    }

    #[test]
    fn test_axes_fall_back_independently() {
        let mut resume = full_resume();
        resume.selected_style_index = Some(-5);
        resume.selected_layout_index = Some(3);
        let composed = compose(&resume);

        // Style clamps to 0, layout selection is untouched.
        resume.selected_style_index = Some(0);
        assert_eq!(composed, compose(&resume));

        resume.selected_layout_index = Some(0);
        assert_ne!(composed, compose(&resume));
    }

    #[test]
    fn test_every_style_layout_pair_composes() {
        for style in 0..STYLES.len() as i64 {
            for layout in 0..PageLayout::ALL.len() as i64 {
                let mut resume = full_resume();
                resume.selected_style_index = Some(style);
                resume.selected_layout_index = Some(layout);
                let html = compose(&resume).to_html();
                assert!(html.contains("Linh Tran"), "style {style} layout {layout}");
            }
        }
    }

    #[test]
    fn test_composition_is_idempotent() {
        let resume = full_resume();
        assert_eq!(compose(&resume), compose(&resume));
    }
}
