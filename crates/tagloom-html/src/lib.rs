//! tagloom HTML builder
//!
//! Build HTML as a tree of nodes, then serialize it. Pre-formatted fragments
//! (user-supplied rich text, say) are tokenized with html5ever and re-balanced
//! on the way out, so a stray end tag cannot break the surrounding document.
//!
//! # Example
//! ```
//! use tagloom_html::{attrs, Document};
//!
//! let mut doc = Document::new(Some("Results"), 0);
//! let section = doc.append_tag("div", attrs! { "class_" => "results" });
//! section.append_formatted("<p>Passed <b>12</b> of 12");
//!
//! let html = doc.build().unwrap();
//! assert!(html.contains(r#"<div class="results"><p>Passed <b>12</b> of 12</p></div>"#));
//! ```

mod attributes;
pub mod balance;
mod config;
mod document;
pub mod fragment;
mod node;
pub mod serializer;

pub use attributes::{normalize_name, Attr, AttrValue, AttributeMap, Attributes, NAME_DELIMITER};
pub use balance::{MarkupEvent, MarkupSink, TagBalancer};
pub use config::{nested_path, AssetManifest, ConfigError, PARENT_DIR};
pub use document::{Document, DOCTYPE};
pub use node::{Child, Node, DEFAULT_TAG};
pub use serializer::HtmlWriter;

/// Error raised while building markup
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("Can't close tag '{tag}'; no open tag found")]
    Unopened { tag: String },

    #[error("End tag '{found}' does not match open tag '{expected}'")]
    MismatchedEnd { expected: String, found: String },

    #[error("End tag '{tag}' with no element open")]
    UnexpectedEnd { tag: String },

    #[error("Unclosed tag: {tag}")]
    Unclosed { tag: String },

    #[error("Attribute '{name}' given more than once")]
    AttributeCollision { name: String },
}
