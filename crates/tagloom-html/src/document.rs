//! Document - full HTML page
//!
//! A body-rooted [`Node`] plus the head metadata the page links.

use crate::balance::MarkupSink;
use crate::config::AssetManifest;
use crate::serializer::HtmlWriter;
use crate::{attrs, AttributeMap, Attributes, BuildError, Child, Node};

/// Doctype line prepended to every built document
pub const DOCTYPE: &str = "<!DOCTYPE html>";

/// HTML Document
#[derive(Debug, Clone)]
pub struct Document {
    /// Page content
    body: Node,
    /// `<title>` text
    title: Option<String>,
    /// One `<meta>` per bag
    metas: Vec<Attributes>,
    stylesheets: Vec<String>,
    scripts: Vec<String>,
}

impl Document {
    /// Create a document linking the default assets from `level` directories deep
    pub fn new(title: Option<&str>, level: usize) -> Self {
        Self::with_manifest(title, level, &AssetManifest::default())
    }

    /// Create a document linking the assets of `manifest`
    pub fn with_manifest(title: Option<&str>, level: usize, manifest: &AssetManifest) -> Self {
        Self {
            body: Node::new("body"),
            title: title.map(str::to_string),
            metas: vec![
                attrs! {
                    "name" => "viewport",
                    "content" => "width=device-width, initial-scale=1",
                },
                attrs! { "charset" => "utf-8" },
            ],
            stylesheets: manifest.stylesheet_paths(level),
            scripts: manifest.script_paths(level),
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: Option<&str>) {
        self.title = title.map(str::to_string);
    }

    pub fn body(&self) -> &Node {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Node {
        &mut self.body
    }

    pub fn scripts(&self) -> &[String] {
        &self.scripts
    }

    pub fn stylesheets(&self) -> &[String] {
        &self.stylesheets
    }

    pub fn metas(&self) -> &[Attributes] {
        &self.metas
    }

    pub fn append_script(&mut self, path: impl Into<String>) {
        self.scripts.push(path.into());
    }

    pub fn append_style(&mut self, path: impl Into<String>) {
        self.stylesheets.push(path.into());
    }

    pub fn append_meta(&mut self, attrs: Attributes) {
        self.metas.push(attrs);
    }

    /// Append to the body
    pub fn append(&mut self, child: impl Into<Child>) {
        self.body.append(child);
    }

    /// Append a new element to the body and return it
    pub fn append_tag(&mut self, tag: impl Into<String>, attrs: Attributes) -> &mut Node {
        self.body.append_tag(tag, attrs)
    }

    /// Append pre-formatted HTML to the body
    pub fn append_formatted(&mut self, html: impl Into<String>) {
        self.body.append_formatted(html);
    }

    /// Descendants of the body named `tag`, in pre-order
    pub fn find(&self, tag: &str) -> Vec<&Node> {
        self.body.find(tag)
    }

    /// Build the complete page, doctype included
    pub fn build(&self) -> Result<String, BuildError> {
        tracing::debug!(
            "Building document: {} stylesheets, {} scripts",
            self.stylesheets.len(),
            self.scripts.len()
        );

        let mut writer = HtmlWriter::new();
        writer.start("html", &AttributeMap::new())?;
        self.write_head(&mut writer)?;
        self.body.write_to(&mut writer)?;
        writer.end("html")?;

        Ok(format!("{DOCTYPE}\n{}", writer.finish()?))
    }

    /// Write only the body, for documents nested in another tree
    pub fn write_to(&self, writer: &mut HtmlWriter) -> Result<(), BuildError> {
        self.body.write_to(writer)
    }

    fn write_head(&self, writer: &mut HtmlWriter) -> Result<(), BuildError> {
        let none = AttributeMap::new();
        writer.start("head", &none)?;

        if let Some(title) = self.title().filter(|t| !t.is_empty()) {
            writer.start("title", &none)?;
            writer.text(title)?;
            writer.end("title")?;
        }

        for meta in &self.metas {
            writer.start("meta", &meta.normalize())?;
            writer.end("meta")?;
        }

        for style in &self.stylesheets {
            let link = attrs! { "rel" => "stylesheet", "href" => style, "type" => "text/css" };
            writer.start("link", &link.normalize())?;
            writer.end("link")?;
        }

        // Single space keeps the element from collapsing to an empty tag
        for script in &self.scripts {
            let tag = attrs! { "type" => "text/javascript", "src" => script };
            writer.start("script", &tag.normalize())?;
            writer.text(" ")?;
            writer.end("script")?;
        }

        writer.end("head")
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(None, 0)
    }
}
