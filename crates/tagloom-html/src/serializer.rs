//! HTML Serialization
//!
//! Strict markup writer: the event sink every tree and every repaired
//! fragment is written through.
//!
//! Key features:
//! - Rejects end tags that do not close the innermost open element
//! - Proper HTML escaping
//! - Void element handling
//! - Checkpoint/rollback so a failed fragment leaves no partial markup

use crate::balance::MarkupSink;
use crate::{AttributeMap, BuildError};

/// Void elements (no end tag)
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "basefont", "br", "col", "embed", "frame", "hr", "img", "input",
    "isindex", "link", "meta", "param", "source", "track", "wbr",
];

/// Raw text elements (no escaping for content)
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Check whether `tag` never takes an end tag
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(tag))
}

/// Writer position to roll back to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    output_len: usize,
    depth: usize,
}

/// Strict HTML writer
#[derive(Debug, Default)]
pub struct HtmlWriter {
    output: String,
    open: Vec<String>,
}

impl HtmlWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of currently open elements
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Markup written so far
    pub fn as_str(&self) -> &str {
        &self.output
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            output_len: self.output.len(),
            depth: self.open.len(),
        }
    }

    /// Discard everything written since `checkpoint`.
    ///
    /// Elements opened before the checkpoint and closed after it are not
    /// restored; callers only roll back spans that they balanced themselves.
    pub fn rollback(&mut self, checkpoint: Checkpoint) {
        self.output.truncate(checkpoint.output_len);
        self.open.truncate(checkpoint.depth);
    }

    /// Finish writing, failing if any element is still open
    pub fn finish(self) -> Result<String, BuildError> {
        match self.open.last() {
            Some(tag) => Err(BuildError::Unclosed { tag: tag.clone() }),
            None => Ok(self.output),
        }
    }

    /// Write `data` escaped, even inside `script` or `style`
    pub fn escaped_text(&mut self, data: &str) {
        escape_text(data, &mut self.output);
    }

    fn in_raw_text(&self) -> bool {
        self.open
            .last()
            .is_some_and(|tag| RAW_TEXT_ELEMENTS.contains(&tag.as_str()))
    }
}

impl MarkupSink for HtmlWriter {
    fn start(&mut self, tag: &str, attrs: &AttributeMap) -> Result<(), BuildError> {
        self.output.push('<');
        self.output.push_str(tag);
        for attr in attrs {
            self.output.push(' ');
            self.output.push_str(&attr.name);
            self.output.push_str("=\"");
            escape_attribute(&attr.value, &mut self.output);
            self.output.push('"');
        }
        self.output.push('>');
        self.open.push(tag.to_string());
        Ok(())
    }

    fn end(&mut self, tag: &str) -> Result<(), BuildError> {
        match self.open.last() {
            None => {
                return Err(BuildError::UnexpectedEnd { tag: tag.to_string() });
            }
            Some(top) if top != tag => {
                return Err(BuildError::MismatchedEnd {
                    expected: top.clone(),
                    found: tag.to_string(),
                });
            }
            Some(_) => {}
        }
        self.open.pop();
        if !is_void_element(tag) {
            self.output.push_str("</");
            self.output.push_str(tag);
            self.output.push('>');
        }
        Ok(())
    }

    fn text(&mut self, data: &str) -> Result<(), BuildError> {
        if self.in_raw_text() {
            self.output.push_str(data);
        } else {
            escape_text(data, &mut self.output);
        }
        Ok(())
    }
}

/// Escape text content for HTML
pub fn escape_text(text: &str, output: &mut String) {
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            _ => output.push(c),
        }
    }
}

/// Escape attribute value
pub fn escape_attribute(text: &str, output: &mut String) {
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '"' => output.push_str("&quot;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            _ => output.push(c),
        }
    }
}
