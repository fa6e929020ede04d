//! Markup node tree
//!
//! Nodes own their children outright, so a tree is plain data: built by
//! appending, serialized by reference.

use crate::balance::MarkupSink;
use crate::fragment::write_fragment_or_text;
use crate::serializer::HtmlWriter;
use crate::{AttrValue, AttributeMap, Attributes, BuildError};

/// Tag used when none is given
pub const DEFAULT_TAG: &str = "div";

/// Child of a [`Node`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child {
    /// Nested element
    Node(Node),
    /// Character data, escaped on output
    Text(String),
    /// Trusted markup, re-balanced on output
    Formatted(String),
}

impl From<Node> for Child {
    fn from(node: Node) -> Self {
        Child::Node(node)
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Child::Text(text.to_string())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Child::Text(text)
    }
}

impl From<&String> for Child {
    fn from(text: &String) -> Self {
        Child::Text(text.clone())
    }
}

/// Markup node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    tag: String,
    attrs: Attributes,
    children: Vec<Child>,
}

impl Node {
    /// Create an empty node
    pub fn new(tag: impl Into<String>) -> Self {
        Self::with_attrs(tag, Attributes::new())
    }

    /// Create an empty node with a raw attribute bag
    pub fn with_attrs(tag: impl Into<String>, attrs: Attributes) -> Self {
        Self {
            tag: tag.into(),
            attrs,
            children: Vec::new(),
        }
    }

    pub fn tag_name(&self) -> &str {
        &self.tag
    }

    /// Raw attribute bag
    pub fn raw_attrs(&self) -> &Attributes {
        &self.attrs
    }

    /// Attributes as they will be emitted
    pub fn attrs(&self) -> AttributeMap {
        self.attrs.normalize()
    }

    /// String attribute by normalized name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs.text(name)
    }

    pub fn set_attribute(&mut self, name: &str, value: impl Into<AttrValue>) {
        self.attrs.set(name, value);
    }

    pub fn children(&self) -> &[Child] {
        &self.children
    }

    /// Append a node or a text child
    pub fn append(&mut self, child: impl Into<Child>) {
        self.children.push(child.into());
    }

    /// Append a new child element and return it for population
    pub fn append_tag(&mut self, tag: impl Into<String>, attrs: Attributes) -> &mut Node {
        self.append_node(Node::with_attrs(tag, attrs))
    }

    /// Append `node` and return it for population
    pub fn append_node(&mut self, node: Node) -> &mut Node {
        self.children.push(Child::Node(node));
        match self.children.last_mut() {
            Some(Child::Node(node)) => node,
            _ => unreachable!("a node was just pushed"),
        }
    }

    /// Append pre-formatted HTML, repaired when the tree is built
    pub fn append_formatted(&mut self, html: impl Into<String>) {
        self.children.push(Child::Formatted(html.into()));
    }

    /// All descendants named `tag`, in pre-order. The node itself is not
    /// included.
    pub fn find(&self, tag: &str) -> Vec<&Node> {
        let mut matches = Vec::new();
        self.collect(tag, &mut matches);
        matches
    }

    fn collect<'a>(&'a self, tag: &str, matches: &mut Vec<&'a Node>) {
        for child in &self.children {
            if let Child::Node(node) = child {
                if node.tag == tag {
                    matches.push(node);
                }
                node.collect(tag, matches);
            }
        }
    }

    /// Visit every descendant named `tag` mutably, in pre-order
    pub fn for_each_mut<F: FnMut(&mut Node)>(&mut self, tag: &str, mut f: F) {
        self.visit_mut(tag, &mut f);
    }

    fn visit_mut<F: FnMut(&mut Node)>(&mut self, tag: &str, f: &mut F) {
        for child in &mut self.children {
            if let Child::Node(node) = child {
                if node.tag == tag {
                    f(node);
                }
                node.visit_mut(tag, f);
            }
        }
    }

    /// Serialize the tree rooted here
    pub fn build(&self) -> Result<String, BuildError> {
        let mut writer = HtmlWriter::new();
        self.write_to(&mut writer)?;
        writer.finish()
    }

    /// Serialize into an open writer
    pub fn write_to(&self, writer: &mut HtmlWriter) -> Result<(), BuildError> {
        writer.start(&self.tag, &self.attrs())?;
        self.write_children(writer)?;
        writer.end(&self.tag)
    }

    pub(crate) fn write_children(&self, writer: &mut HtmlWriter) -> Result<(), BuildError> {
        for child in &self.children {
            match child {
                Child::Node(node) => node.write_to(writer)?,
                Child::Text(text) => writer.text(text)?,
                Child::Formatted(html) => write_fragment_or_text(writer, html)?,
            }
        }
        Ok(())
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new(DEFAULT_TAG)
    }
}
