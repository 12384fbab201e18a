use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Cursor;

use crate::core::PainError;

fn xml_io(e: std::io::Error) -> PainError {
    PainError::Xml(format!("XML write error: {e}"))
}

/// How [`Element::append`] treats the value of a new path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emit {
    /// Create the path without text; the value is ignored.
    Container,
    /// Create the path and set its text only when a value is given,
    /// otherwise create nothing.
    IfPresent,
    /// Create the path and always set its text. A missing value becomes the
    /// empty string; "0" and "false" are ordinary values.
    Always,
}

/// An XML element with attributes, optional text and child elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(key, value);
        self
    }

    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// First direct child with the given name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Direct children with the given name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Follow a `/`-separated path of first-match children,
    /// e.g. `"GrpHdr/InitgPty/Nm"`.
    pub fn find(&self, path: &str) -> Option<&Element> {
        path.split('/')
            .filter(|s| !s.is_empty())
            .try_fold(self, |node, name| node.child(name))
    }

    /// All descendants (not including `self`) with the given name,
    /// depth-first in document order.
    pub fn find_all<'a>(&'a self, name: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        for child in &self.children {
            if child.name == name {
                found.push(child);
            }
            found.extend(child.find_all(name));
        }
        found
    }

    /// Append a child and return it.
    pub fn push(&mut self, child: Element) -> &mut Element {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Append a fresh chain of nested elements, one per path segment, and
    /// set the text of the innermost one according to `mode`.
    ///
    /// Returns the innermost element, or `None` when `mode` is
    /// [`Emit::IfPresent`] and there is no value.
    pub fn append(&mut self, path: &[&str], value: Option<&str>, mode: Emit) -> Option<&mut Element> {
        if mode == Emit::IfPresent && value.is_none() {
            return None;
        }
        let node = self.container(path);
        match mode {
            Emit::Container => {}
            Emit::IfPresent | Emit::Always => {
                node.text = Some(value.unwrap_or_default().to_string());
            }
        }
        Some(node)
    }

    /// [`Emit::Container`]: always create the path.
    pub fn container(&mut self, path: &[&str]) -> &mut Element {
        let mut node = self;
        for name in path {
            node = node.push(Element::new(*name));
        }
        node
    }

    /// [`Emit::Always`]: always create the path and set its text.
    pub fn required(&mut self, path: &[&str], value: &str) -> &mut Element {
        let node = self.container(path);
        node.text = Some(value.to_string());
        node
    }

    /// [`Emit::IfPresent`]: create the path only if there is a value.
    pub fn optional(&mut self, path: &[&str], value: Option<&str>) -> Option<&mut Element> {
        self.append(path, value, Emit::IfPresent)
    }

    /// Render as an indented XML document with declaration.
    pub fn to_xml_string(&self) -> Result<String, PainError> {
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(xml_io)?;
        self.write(&mut writer)?;
        let buf = writer.into_inner().into_inner();
        String::from_utf8(buf).map_err(|e| PainError::Xml(format!("XML UTF-8 error: {e}")))
    }

    fn write(&self, writer: &mut Writer<Cursor<Vec<u8>>>) -> Result<(), PainError> {
        let mut start = BytesStart::new(self.name.as_str());
        for (k, v) in &self.attributes {
            start.push_attribute((k.as_str(), v.as_str()));
        }

        if self.text.is_none() && self.children.is_empty() {
            return writer.write_event(Event::Empty(start)).map_err(xml_io);
        }

        writer.write_event(Event::Start(start)).map_err(xml_io)?;
        if let Some(text) = &self.text {
            // An empty text event keeps `<a></a>` on one line.
            writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(xml_io)?;
        }
        for child in &self.children {
            child.write(writer)?;
        }
        writer
            .write_event(Event::End(BytesEnd::new(self.name.as_str())))
            .map_err(xml_io)
    }
}
