// src/loader/document.rs
//! Minimal display model: a page made of elements addressed by id,
//! each holding plain text.

use std::sync::Mutex;

/// Element the loader writes the fortune into.
pub const FORTUNE_ELEMENT_ID: &str = "fortune-text";
/// Text shown before (or instead of) a fortune.
pub const PLACEHOLDER_TEXT: &str = "...";

#[derive(Debug, Clone, PartialEq, Eq)]
struct Node {
    id: String,
    tag: &'static str,
    text: String,
}

#[derive(Debug)]
pub struct Document {
    title: String,
    nodes: Mutex<Vec<Node>>,
}

/// Handle to one element of a [`Document`].
#[derive(Debug, Clone, Copy)]
pub struct Element<'a> {
    doc: &'a Document,
    index: usize,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            nodes: Mutex::new(Vec::new()),
        }
    }

    /// The fortune page: a heading and the `fortune-text` paragraph holding the placeholder.
    pub fn fortune_page() -> Self {
        Self::new("Fortune of the day")
            .with_element("title", "h1", "Your fortune of the day")
            .with_element(FORTUNE_ELEMENT_ID, "p", PLACEHOLDER_TEXT)
    }

    pub fn with_element(self, id: impl Into<String>, tag: &'static str, text: impl Into<String>) -> Self {
        self.nodes.lock().expect("document mutex poisoned").push(Node {
            id: id.into(),
            tag,
            text: text.into(),
        });
        self
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<Element<'_>> {
        let nodes = self.nodes.lock().expect("document mutex poisoned");
        nodes
            .iter()
            .position(|n| n.id == id)
            .map(|index| Element { doc: self, index })
    }

    /// Text of the element with `id`, if present.
    pub fn text_of(&self, id: &str) -> Option<String> {
        self.get_element_by_id(id).map(|e| e.text_content())
    }

    /// Serialize to an HTML page; element text is escaped.
    pub fn to_html(&self) -> String {
        let nodes = self.nodes.lock().expect("document mutex poisoned");
        let mut body = String::new();
        for n in nodes.iter() {
            body.push_str(&format!(
                "    <{tag} id=\"{id}\">{text}</{tag}>\n",
                tag = n.tag,
                id = html_escape::encode_double_quoted_attribute(&n.id),
                text = html_escape::encode_text(&n.text),
            ));
        }
        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n  <head>\n    <meta charset=\"utf-8\">\n    <title>{title}</title>\n    <link rel=\"stylesheet\" href=\"/static/style.css\">\n  </head>\n  <body>\n{body}  </body>\n</html>\n",
            title = html_escape::encode_text(&self.title),
        )
    }
}

impl Element<'_> {
    pub fn text_content(&self) -> String {
        let nodes = self.doc.nodes.lock().expect("document mutex poisoned");
        nodes[self.index].text.clone()
    }

    /// Replaces the whole text; nothing accumulates.
    pub fn set_text_content(&self, text: &str) {
        let mut nodes = self.doc.nodes.lock().expect("document mutex poisoned");
        nodes[self.index].text = text.to_string();
    }
}
