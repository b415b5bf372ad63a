//! Scaled preview host.
//!
//! Presents a composed page inside an A4-portrait viewport. The page is
//! authored at a fixed reference width; the host scales it uniformly to the
//! measured container width so text and spacing shrink together instead of
//! reflowing per section. Until a measurement exists the content is emitted
//! hidden — no flash of unscaled content. Scaling is stateless: every call
//! recomputes the factor from the width it is given.

use crate::models::resume::Resume;
use crate::render::compose;
use crate::render::fragment::{Element, Fragment};

/// ISO A4 portrait.
pub const PAGE_ASPECT: (u32, u32) = (210, 297);

/// The pixel width the style/layout fragments are authored against
/// (an A4 page at 96 dpi).
pub const REFERENCE_WIDTH_PX: f64 = 794.0;

/// Stable id of the page content node — the capture handle a print/export
/// caller attaches to. The host never generates output itself.
pub const CONTENT_NODE_ID: &str = "resume-preview-content";

/// Uniform scale factor for a measured container width.
pub fn scale_factor(container_width: f64) -> f64 {
    container_width / REFERENCE_WIDTH_PX
}

/// Wraps the composed page for a document in the fixed-aspect viewport.
///
/// `container_width` is the measured width of the host's container, or `None`
/// before the first measurement. `None` for the document renders the empty
/// placeholder frame — a distinct state from "document with no content".
pub fn preview(resume: Option<&Resume>, container_width: Option<f64>) -> Fragment {
    let viewport = Element::new("div").class("preview-viewport").style(
        "aspect-ratio",
        format!("{} / {}", PAGE_ASPECT.0, PAGE_ASPECT.1),
    );

    let Some(resume) = resume else {
        return viewport.class("empty").build();
    };

    let mut content = Element::new("div")
        .id(CONTENT_NODE_ID)
        .class("preview-content")
        .style("background-color", resume.bg_color())
        .child(compose(resume));

    match container_width {
        Some(width) => {
            content = content.style("zoom", format_scale(scale_factor(width)));
        }
        None => {
            content = content.style("visibility", "hidden");
        }
    }

    viewport.child(content.build()).build()
}

/// Fixed-precision so equal widths always format identically.
fn format_scale(scale: f64) -> String {
    format!("{scale:.6}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::style::test_fixtures::{blank_resume, full_resume};

    #[test]
    fn test_aspect_ratio_is_a4_for_any_width() {
        let resume = full_resume();
        for width in [120.0, 794.0, 1600.0] {
            let html = preview(Some(&resume), Some(width)).to_html();
            assert!(html.contains("aspect-ratio: 210 / 297"));
        }
    }

    #[test]
    fn test_hidden_until_width_measured() {
        let resume = full_resume();
        let html = preview(Some(&resume), None).to_html();
        assert!(html.contains("visibility: hidden"));
        assert!(!html.contains("zoom"));

        let html = preview(Some(&resume), Some(400.0)).to_html();
        assert!(!html.contains("visibility: hidden"));
        assert!(html.contains("zoom"));
    }

    #[test]
    fn test_scale_is_relative_to_reference_width() {
        assert_eq!(scale_factor(REFERENCE_WIDTH_PX), 1.0);
        assert_eq!(scale_factor(REFERENCE_WIDTH_PX / 2.0), 0.5);
    }

    #[test]
    fn test_rescaling_is_idempotent() {
        let resume = full_resume();
        let first = preview(Some(&resume), Some(512.0));
        let second = preview(Some(&resume), Some(512.0));
        assert_eq!(first, second);
    }

    #[test]
    fn test_absent_document_renders_placeholder_not_empty_page() {
        let placeholder = preview(None, Some(400.0)).to_html();
        assert!(placeholder.contains("empty"));
        assert!(!placeholder.contains(CONTENT_NODE_ID));

        // A present-but-blank document still mounts the content node.
        let blank = blank_resume();
        let html = preview(Some(&blank), Some(400.0)).to_html();
        assert!(html.contains(CONTENT_NODE_ID));
    }

    #[test]
    fn test_capture_handle_is_reachable() {
        let resume = full_resume();
        let frag = preview(Some(&resume), Some(794.0));
        assert!(frag.find_by_id(CONTENT_NODE_ID).is_some());
    }
}
