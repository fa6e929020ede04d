//! Tag balancing
//!
//! Event sinks and the proxy that makes an unreliable stream of start/end
//! events safe to replay into a strict sink.

use crate::{AttributeMap, BuildError};

/// Receiver of markup events
pub trait MarkupSink {
    /// Open an element
    fn start(&mut self, tag: &str, attrs: &AttributeMap) -> Result<(), BuildError>;
    /// Close an element
    fn end(&mut self, tag: &str) -> Result<(), BuildError>;
    /// Character data
    fn text(&mut self, data: &str) -> Result<(), BuildError>;
}

impl<S: MarkupSink + ?Sized> MarkupSink for &mut S {
    fn start(&mut self, tag: &str, attrs: &AttributeMap) -> Result<(), BuildError> {
        (**self).start(tag, attrs)
    }

    fn end(&mut self, tag: &str) -> Result<(), BuildError> {
        (**self).end(tag)
    }

    fn text(&mut self, data: &str) -> Result<(), BuildError> {
        (**self).text(data)
    }
}

/// A single markup event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupEvent {
    /// Start tag with normalized attributes
    Start { name: String, attrs: AttributeMap },
    /// End tag
    End { name: String },
    /// Character data
    Text(String),
}

impl MarkupEvent {
    pub fn start(name: impl Into<String>) -> Self {
        MarkupEvent::Start {
            name: name.into(),
            attrs: AttributeMap::new(),
        }
    }

    pub fn end(name: impl Into<String>) -> Self {
        MarkupEvent::End { name: name.into() }
    }

    /// Deliver this event to `sink`
    pub fn replay<S: MarkupSink + ?Sized>(&self, sink: &mut S) -> Result<(), BuildError> {
        match self {
            MarkupEvent::Start { name, attrs } => sink.start(name, attrs),
            MarkupEvent::End { name } => sink.end(name),
            MarkupEvent::Text(data) => sink.text(data),
        }
    }
}

/// Recording sink
impl MarkupSink for Vec<MarkupEvent> {
    fn start(&mut self, tag: &str, attrs: &AttributeMap) -> Result<(), BuildError> {
        self.push(MarkupEvent::Start {
            name: tag.to_string(),
            attrs: attrs.clone(),
        });
        Ok(())
    }

    fn end(&mut self, tag: &str) -> Result<(), BuildError> {
        self.push(MarkupEvent::end(tag));
        Ok(())
    }

    fn text(&mut self, data: &str) -> Result<(), BuildError> {
        self.push(MarkupEvent::Text(data.to_string()));
        Ok(())
    }
}

/// Auto-closing proxy in front of a strict sink.
///
/// Closing a tag also closes everything opened after it; [`TagBalancer::cleanup`]
/// closes whatever is left. One balancer serves one fragment.
#[derive(Debug)]
pub struct TagBalancer<S> {
    sink: S,
    open: Vec<String>,
}

impl<S: MarkupSink> TagBalancer<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            open: Vec::new(),
        }
    }

    /// Tags opened through this proxy and not yet closed, outermost first
    pub fn open_tags(&self) -> &[String] {
        &self.open
    }

    /// Close every tag still open, innermost first
    pub fn cleanup(&mut self) -> Result<(), BuildError> {
        while let Some(tag) = self.open.pop() {
            self.sink.end(&tag)?;
        }
        Ok(())
    }

    /// Release the wrapped sink
    pub fn into_inner(self) -> S {
        self.sink
    }
}

impl<S: MarkupSink> MarkupSink for TagBalancer<S> {
    fn start(&mut self, tag: &str, attrs: &AttributeMap) -> Result<(), BuildError> {
        self.open.push(tag.to_string());
        self.sink.start(tag, attrs)
    }

    fn end(&mut self, tag: &str) -> Result<(), BuildError> {
        if !self.open.iter().any(|open| open == tag) {
            return Err(BuildError::Unopened { tag: tag.to_string() });
        }
        while let Some(top) = self.open.pop() {
            if top == tag {
                break;
            }
            self.sink.end(&top)?;
        }
        self.sink.end(tag)
    }

    fn text(&mut self, data: &str) -> Result<(), BuildError> {
        self.sink.text(data)
    }
}
