//! Renderable fragment tree.
//!
//! Section renderers produce `Fragment` values; layout compositors arrange
//! them without looking inside. The tree is plain owned data — re-derived on
//! every render pass, structurally comparable, serialized to HTML at the edge.

use std::fmt::Write;

/// One node of the renderable tree: an element with classes, inline styles
/// and children, or a run of text (escaped on output).
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub id: Option<&'static str>,
    pub classes: Vec<&'static str>,
    /// Inline CSS property/value pairs, emitted in insertion order.
    pub styles: Vec<(&'static str, String)>,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Fragment>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            id: None,
            classes: Vec::new(),
            styles: Vec::new(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn id(mut self, id: &'static str) -> Self {
        self.id = Some(id);
        self
    }

    pub fn class(mut self, class: &'static str) -> Self {
        self.classes.push(class);
        self
    }

    pub fn style(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.styles.push((property, value.into()));
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn child(mut self, child: Fragment) -> Self {
        self.children.push(child);
        self
    }

    /// Appends a child only if present. Layouts use this to skip sections a
    /// style renderer declared empty.
    pub fn maybe_child(mut self, child: Option<Fragment>) -> Self {
        if let Some(child) = child {
            self.children.push(child);
        }
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Fragment>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Fragment::Text(text.into()));
        self
    }

    pub fn build(self) -> Fragment {
        Fragment::Element(self)
    }
}

impl Fragment {
    pub fn text(text: impl Into<String>) -> Self {
        Fragment::Text(text.into())
    }

    /// Serializes the tree to HTML. Text content and attribute values are
    /// escaped; tag/class/property names are compile-time literals.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Fragment::Text(text) => escape_into(text, out),
            Fragment::Element(el) => {
                let _ = write!(out, "<{}", el.tag);
                if let Some(id) = el.id {
                    let _ = write!(out, " id=\"{id}\"");
                }
                if !el.classes.is_empty() {
                    let _ = write!(out, " class=\"{}\"", el.classes.join(" "));
                }
                for (name, value) in &el.attrs {
                    let _ = write!(out, " {name}=\"");
                    escape_into(value, out);
                    out.push('"');
                }
                if !el.styles.is_empty() {
                    out.push_str(" style=\"");
                    for (i, (property, value)) in el.styles.iter().enumerate() {
                        if i > 0 {
                            out.push(' ');
                        }
                        let _ = write!(out, "{property}: ");
                        escape_into(value, out);
                        out.push(';');
                    }
                    out.push('"');
                }
                if is_void(el.tag) {
                    out.push_str(" />");
                    return;
                }
                out.push('>');
                for child in &el.children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{}>", el.tag);
            }
        }
    }

    /// Depth-first search for an element by id. Used by callers that need the
    /// capture handle inside a composed tree.
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        match self {
            Fragment::Text(_) => None,
            Fragment::Element(el) => {
                if el.id == Some(id) {
                    return Some(el);
                }
                el.children.iter().find_map(|c| c.find_by_id(id))
            }
        }
    }
}

fn is_void(tag: &str) -> bool {
    matches!(tag, "hr" | "br" | "img")
}

fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_html_with_styles_and_text() {
        let frag = Element::new("p")
            .class("heading")
            .style("color", "#444444")
            .text("Education")
            .build();
        assert_eq!(
            frag.to_html(),
            "<p class=\"heading\" style=\"color: #444444;\">Education</p>"
        );
    }

    #[test]
    fn test_text_is_escaped() {
        let frag = Element::new("div").text("<b>R&D \"lead\"</b>").build();
        assert_eq!(
            frag.to_html(),
            "<div>&lt;b&gt;R&amp;D &quot;lead&quot;&lt;/b&gt;</div>"
        );
    }

    #[test]
    fn test_void_tags_self_close() {
        let frag = Element::new("hr").class("separator").build();
        assert_eq!(frag.to_html(), "<hr class=\"separator\" />");
    }

    #[test]
    fn test_find_by_id_descends() {
        let frag = Element::new("div")
            .child(Element::new("div").id("inner").text("x").build())
            .build();
        assert!(frag.find_by_id("inner").is_some());
        assert!(frag.find_by_id("missing").is_none());
    }

    #[test]
    fn test_maybe_child_skips_none() {
        let with = Element::new("div")
            .maybe_child(Some(Fragment::text("a")))
            .build();
        let without = Element::new("div").maybe_child(None).build();
        assert_eq!(with.to_html(), "<div>a</div>");
        assert_eq!(without.to_html(), "<div></div>");
    }
}
