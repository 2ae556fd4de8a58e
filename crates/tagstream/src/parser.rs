//! Stack machine turning the token stream into balanced parse events.
//!
//! One `next()` call may consume several tokens and may resolve into
//! several events (a sibling close, the open itself, a synthetic close),
//! so resolved events wait in a queue and drain one per call.

use std::borrow::Cow;
use std::collections::VecDeque;

use crate::entities;
use crate::tables;
use crate::tokenizer::{Tokens, tokenize};
use crate::types::{AttrList, ParseEvent, TagEnd, Token};

/// Parser configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct ParseOptions {
    /// Decode entities in text events. Attribute values are never decoded.
    pub decode_entities: bool,
}

/// Parses into a lazy stream of balanced open/close/text/comment events.
pub fn parse(html: &str) -> ParseEvents<'_> {
    parse_with_options(html, ParseOptions::default())
}

pub fn parse_with_options(html: &str, options: ParseOptions) -> ParseEvents<'_> {
    ParseEvents {
        tokens: tokenize(html),
        stack: Vec::new(),
        building: None,
        queue: VecDeque::new(),
        options,
        drained: false,
    }
}

/// An element whose open event has been emitted and whose close has not.
///
/// The open event carried the attributes away; matching and implicit
/// closes only ever need the name.
#[derive(Debug)]
struct PendingTag<'a> {
    name: Cow<'a, str>,
}

/// Tag under construction between `OpeningTag` and its `OpeningTagEnd`.
#[derive(Debug)]
struct BuildingTag<'a> {
    name: Cow<'a, str>,
    attributes: AttrList<'a>,
}

/// Single-shot parse-event iterator.
#[derive(Debug)]
pub struct ParseEvents<'a> {
    tokens: Tokens<'a>,
    stack: Vec<PendingTag<'a>>,
    building: Option<BuildingTag<'a>>,
    queue: VecDeque<ParseEvent<'a>>,
    options: ParseOptions,
    drained: bool,
}

impl<'a> Iterator for ParseEvents<'a> {
    type Item = ParseEvent<'a>;

    fn next(&mut self) -> Option<ParseEvent<'a>> {
        loop {
            if let Some(event) = self.queue.pop_front() {
                return Some(event);
            }
            if self.drained {
                return None;
            }
            match self.tokens.next() {
                Some(token) => self.handle(token),
                None => {
                    self.drain();
                    self.drained = true;
                }
            }
        }
    }
}

impl<'a> ParseEvents<'a> {
    fn handle(&mut self, token: Token<'a>) {
        match token {
            Token::Start | Token::Done => {}
            Token::OpeningTag { name } => {
                // A fresh opener supersedes any abandoned one.
                self.building = Some(BuildingTag {
                    name,
                    attributes: AttrList::new(),
                });
            }
            Token::Attribute { name, value } => {
                if let Some(building) = &mut self.building {
                    building.attributes.insert(name, value);
                }
            }
            Token::OpeningTagEnd { name, token } => self.open(name, token),
            Token::ClosingTag { name } => self.close(name),
            Token::Text { text } => {
                let text = self.decode(text);
                self.queue.push_back(ParseEvent::Text { text });
            }
            Token::Comment { text } => {
                self.queue.push_back(ParseEvent::Comment { text });
            }
        }
    }

    fn open(&mut self, name: Cow<'a, str>, token: TagEnd) {
        let Some(building) = self.building.take() else {
            // An end-of-tag with no opener behind it cannot be resolved as
            // markup; it degrades to literal text.
            self.queue.push_back(ParseEvent::Text {
                text: Cow::Borrowed(token.as_str()),
            });
            return;
        };
        debug_assert!(
            building.name == name,
            "tag end must carry its opener's name"
        );
        let self_closing = token.is_self_closing() || tables::is_void(name.as_ref());
        if self
            .stack
            .last()
            .is_some_and(|top| tables::closed_by_sibling(top.name.as_ref(), name.as_ref()))
        {
            if let Some(top) = self.stack.pop() {
                log::trace!(target: "tagstream.parser", "<{name}> implicitly closes <{}>", top.name);
                self.queue.push_back(ParseEvent::Close {
                    name: top.name,
                    self_closing: false,
                });
            }
        }
        self.queue.push_back(ParseEvent::Open {
            name: name.clone(),
            attributes: building.attributes,
            self_closing,
        });
        if self_closing {
            self.queue.push_back(ParseEvent::Close {
                name,
                self_closing: true,
            });
        } else {
            self.stack.push(PendingTag { name });
        }
    }

    fn close(&mut self, name: Cow<'a, str>) {
        let depth = self.stack.len();
        if self.stack.last().is_some_and(|top| top.name == name) {
            if let Some(top) = self.stack.pop() {
                self.queue.push_back(ParseEvent::Close {
                    name: top.name,
                    self_closing: false,
                });
            }
            return;
        }
        let closes_through_child = depth >= 2
            && self.stack[depth - 2].name == name
            && tables::closed_by_parent(self.stack[depth - 1].name.as_ref());
        if closes_through_child {
            // The open child yields to its parent's end tag; both close,
            // child first.
            if let Some(child) = self.stack.pop() {
                log::trace!(target: "tagstream.parser", "</{name}> implicitly closes <{}>", child.name);
                self.queue.push_back(ParseEvent::Close {
                    name: child.name,
                    self_closing: false,
                });
            }
            if let Some(parent) = self.stack.pop() {
                self.queue.push_back(ParseEvent::Close {
                    name: parent.name,
                    self_closing: false,
                });
            }
            return;
        }
        log::trace!(target: "tagstream.parser", "dropping unmatched closing tag </{name}>");
    }

    /// End of input: unclosed elements close deepest-first. An unfinished
    /// building frame never produced an open event and is dropped.
    fn drain(&mut self) {
        self.building = None;
        while let Some(frame) = self.stack.pop() {
            self.queue.push_back(ParseEvent::Close {
                name: frame.name,
                self_closing: false,
            });
        }
    }

    fn decode(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.options.decode_entities {
            return text;
        }
        match text {
            Cow::Borrowed(text) => entities::decode(text),
            Cow::Owned(text) => match entities::decode(&text) {
                Cow::Borrowed(_) => Cow::Owned(text),
                Cow::Owned(decoded) => Cow::Owned(decoded),
            },
        }
    }
}
