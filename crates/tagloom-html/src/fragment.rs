//! Fragment tokenization and repair
//!
//! Runs html5ever's tokenizer over caller-supplied markup and turns the token
//! stream into [`MarkupEvent`]s. The tokenizer recovers from anything; the
//! events it yields may still be unbalanced, which is what the
//! [`TagBalancer`] is for.

use std::cell::RefCell;

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};
use html5ever::TokenizerResult;

use crate::balance::{MarkupEvent, MarkupSink, TagBalancer};
use crate::serializer::{is_void_element, HtmlWriter};
use crate::{AttributeMap, BuildError};

/// Tokenize an HTML fragment into markup events, in document order.
///
/// Void elements and self-closing tags yield a start event followed directly
/// by an end event. End tags of void elements, comments, doctypes and NUL
/// characters are dropped. Adjacent character tokens are merged.
pub fn tokenize(html: &str) -> Vec<MarkupEvent> {
    let input = BufferQueue::default();
    input.push_back(StrTendril::from_slice(html));

    let tokenizer = Tokenizer::new(EventCollector::default(), TokenizerOpts::default());
    // Only a sink returning `Script` pauses the tokenizer; ours never does,
    // so the loop body never runs
    while let TokenizerResult::Script(()) = tokenizer.feed(&input) {}
    tokenizer.end();

    tokenizer.sink.events.take()
}

/// Write `html` into `writer` as balanced markup.
///
/// Fails without writing anything if the fragment cannot be balanced.
pub fn write_fragment(writer: &mut HtmlWriter, html: &str) -> Result<(), BuildError> {
    let checkpoint = writer.checkpoint();
    let result = replay_balanced(&tokenize(html), &mut *writer);
    if result.is_err() {
        writer.rollback(checkpoint);
    }
    result
}

/// Write `html` as balanced markup, or as escaped text if that fails.
///
/// The fallback is escaped even under `script` or `style`, where plain text
/// would otherwise be written raw.
pub fn write_fragment_or_text(writer: &mut HtmlWriter, html: &str) -> Result<(), BuildError> {
    if let Err(err) = write_fragment(writer, html) {
        tracing::warn!("Bad formatting in fragment, writing it as text: {}", err);
        writer.escaped_text(html);
    }
    Ok(())
}

fn replay_balanced<S: MarkupSink>(events: &[MarkupEvent], sink: S) -> Result<(), BuildError> {
    let mut balancer = TagBalancer::new(sink);
    for event in events {
        event.replay(&mut balancer)?;
    }
    balancer.cleanup()
}

/// Token sink collecting markup events
#[derive(Default)]
struct EventCollector {
    events: RefCell<Vec<MarkupEvent>>,
}

impl EventCollector {
    fn push_text(&self, data: &str) {
        let mut events = self.events.borrow_mut();
        if let Some(MarkupEvent::Text(last)) = events.last_mut() {
            last.push_str(data);
        } else {
            events.push(MarkupEvent::Text(data.to_string()));
        }
    }

    fn push_tag(&self, tag: Tag) -> TokenSinkResult<()> {
        let name = tag.name.to_string();
        let mut events = self.events.borrow_mut();
        match tag.kind {
            TagKind::StartTag => {
                let mut attrs = AttributeMap::new();
                for attr in &tag.attrs {
                    attrs.set_attribute(&attr.name.local, &attr.value);
                }
                let closes_itself = tag.self_closing || is_void_element(&name);
                events.push(MarkupEvent::Start {
                    name: name.clone(),
                    attrs,
                });
                if closes_itself {
                    events.push(MarkupEvent::End { name });
                    return TokenSinkResult::Continue;
                }
                raw_content_state(&name)
            }
            TagKind::EndTag => {
                if !is_void_element(&name) {
                    events.push(MarkupEvent::End { name });
                }
                TokenSinkResult::Continue
            }
        }
    }
}

/// Tokenizer state a tree builder would switch to after this start tag
fn raw_content_state(name: &str) -> TokenSinkResult<()> {
    match name {
        "script" => TokenSinkResult::RawData(RawKind::ScriptData),
        "style" | "xmp" | "iframe" | "noembed" | "noframes" => {
            TokenSinkResult::RawData(RawKind::Rawtext)
        }
        "textarea" | "title" => TokenSinkResult::RawData(RawKind::Rcdata),
        "plaintext" => TokenSinkResult::Plaintext,
        _ => TokenSinkResult::Continue,
    }
}

impl TokenSink for EventCollector {
    type Handle = ();

    fn process_token(&self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::TagToken(tag) => return self.push_tag(tag),
            Token::CharacterTokens(text) => self.push_text(&text),
            Token::ParseError(message) => {
                tracing::trace!("Fragment tokenizer: {}", message);
            }
            _ => {}
        }
        TokenSinkResult::Continue
    }
}
