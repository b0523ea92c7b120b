//! Parsed HTML document and the typed asset references inside it.
//!
//! Parsing goes through html5ever (via `kuchikiki`), which recovers from any
//! malformed input the way a browser would, so [`Document::parse`] cannot fail.
//! Queries walk the tree in document order and collect their matches up front,
//! so callers may mutate the tree while consuming the result.

use kuchikiki::traits::*;
use kuchikiki::{Attribute, ElementData, ExpandedName, NodeDataRef, NodeRef};

use crate::error::{PackError, Result};

/// A mutable HTML document owned by a single pack run.
pub struct Document {
    root: NodeRef,
}

impl Document {
    /// Parse HTML text into a document tree.
    pub fn parse(html: &str) -> Self {
        Self {
            root: kuchikiki::parse_html().one(html),
        }
    }

    /// All `<script src=...>` elements, in document order.
    pub fn script_references(&self) -> Vec<ScriptReference> {
        self.elements_where(|el| has_local_name(el, "script"))
            .into_iter()
            .filter_map(|element| {
                let source = element.attributes.borrow().get("src")?.to_string();
                Some(ScriptReference { element, source })
            })
            .collect()
    }

    /// All `<link rel="stylesheet" href=...>` elements, in document order.
    pub fn stylesheet_references(&self) -> Vec<StylesheetReference> {
        self.elements_where(|el| has_local_name(el, "link") && is_stylesheet_link(el))
            .into_iter()
            .filter_map(|element| {
                let href = element.attributes.borrow().get("href")?.to_string();
                Some(StylesheetReference { element, href })
            })
            .collect()
    }

    /// Serialize the document back to HTML text.
    pub fn serialize(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.root
            .serialize(&mut buf)
            .map_err(|e| PackError::Serialize(e.to_string()))?;
        String::from_utf8(buf).map_err(|e| PackError::Serialize(e.to_string()))
    }

    fn elements_where<P>(&self, predicate: P) -> Vec<NodeDataRef<ElementData>>
    where
        P: Fn(&ElementData) -> bool,
    {
        self.root
            .descendants()
            .elements()
            .filter(|el| predicate(el))
            .collect()
    }
}

/// A `<script>` element that loads its code from an external file.
pub struct ScriptReference {
    element: NodeDataRef<ElementData>,
    source: String,
}

impl ScriptReference {
    /// The `src` attribute as authored.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Replace the element's content with `code` and drop its `src` attribute.
    pub fn inline(&self, code: String) {
        let node = self.element.as_node();
        for child in node.children().collect::<Vec<_>>() {
            child.detach();
        }
        node.append(NodeRef::new_text(code));
        self.element.attributes.borrow_mut().remove("src");
    }
}

/// A `<link>` element whose `rel` includes `stylesheet`.
pub struct StylesheetReference {
    element: NodeDataRef<ElementData>,
    href: String,
}

impl StylesheetReference {
    /// The `href` attribute as authored.
    pub fn href(&self) -> &str {
        &self.href
    }

    /// Replace the whole `<link>` with a `<style>` element containing `css`.
    pub fn replace_with_style(&self, css: String) {
        // Same namespace as the link, only the local name changes.
        let mut name = self.element.name.clone();
        name.local = "style".into();

        let style = NodeRef::new_element(name, Vec::<(ExpandedName, Attribute)>::new());
        style.append(NodeRef::new_text(css));

        let link = self.element.as_node();
        link.insert_before(style);
        link.detach();
    }
}

fn has_local_name(element: &ElementData, name: &str) -> bool {
    &*element.name.local == name
}

fn is_stylesheet_link(element: &ElementData) -> bool {
    element
        .attributes
        .borrow()
        .get("rel")
        .is_some_and(|rel| {
            rel.split_ascii_whitespace()
                .any(|token| token.eq_ignore_ascii_case("stylesheet"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <link rel="stylesheet" href="/css/main.css">
  <link rel="icon" href="favicon.ico">
  <link rel="Alternate StyleSheet" href="alt.css">
  <script src="a.js"></script>
</head>
<body>
  <script>inline()</script>
  <script src="/b.js" defer></script>
</body>
</html>"#;

    #[test]
    fn test_script_references_in_document_order() {
        let doc = Document::parse(PAGE);
        let sources: Vec<_> = doc
            .script_references()
            .iter()
            .map(|s| s.source().to_string())
            .collect();
        assert_eq!(sources, vec!["a.js", "/b.js"]);
    }

    #[test]
    fn test_stylesheet_references_match_rel_tokens() {
        let doc = Document::parse(PAGE);
        let hrefs: Vec<_> = doc
            .stylesheet_references()
            .iter()
            .map(|s| s.href().to_string())
            .collect();
        assert_eq!(hrefs, vec!["/css/main.css", "alt.css"]);
    }

    #[test]
    fn test_stylesheet_without_href_is_ignored() {
        let doc = Document::parse(r#"<link rel="stylesheet"><p>x</p>"#);
        assert!(doc.stylesheet_references().is_empty());
    }

    #[test]
    fn test_inline_script_replaces_content_and_src() {
        let doc = Document::parse(r#"<script src="a.js">stale()</script>"#);
        let scripts = doc.script_references();
        scripts[0].inline("console.log(1)".to_string());

        let html = doc.serialize().unwrap();
        assert!(html.contains("<script>console.log(1)</script>"));
        assert!(!html.contains("src="));
        assert!(!html.contains("stale()"));
    }

    #[test]
    fn test_inline_script_keeps_other_attributes() {
        let doc = Document::parse(r#"<script src="a.js" defer></script>"#);
        doc.script_references()[0].inline("go()".to_string());

        let html = doc.serialize().unwrap();
        assert!(html.contains("defer"));
        assert!(html.contains("go()"));
    }

    #[test]
    fn test_script_text_is_not_escaped() {
        let doc = Document::parse(r#"<script src="a.js"></script>"#);
        doc.script_references()[0].inline("if (a < b && c > d) {}".to_string());

        let html = doc.serialize().unwrap();
        assert!(html.contains("if (a < b && c > d) {}"));
    }

    #[test]
    fn test_replace_with_style() {
        let doc = Document::parse(r#"<head><link rel="stylesheet" href="s.css"></head>"#);
        doc.stylesheet_references()[0].replace_with_style("body{color:red}".to_string());

        let html = doc.serialize().unwrap();
        assert!(html.contains("<style>body{color:red}</style>"));
        assert!(!html.contains("<link"));
    }

    #[test]
    fn test_parse_tolerates_malformed_html() {
        let doc = Document::parse("<div><p>unclosed <b>tags <script src=x.js>");
        assert_eq!(doc.script_references().len(), 1);
        assert!(doc.serialize().is_ok());
    }
}
