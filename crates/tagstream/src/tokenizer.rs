//! Four-state streaming tokenizer.
//!
//! `tokenize` drives the chunk matchers in a fixed priority order over a
//! cursor and yields low-level tokens lazily. The public iterator
//! coalesces adjacent text runs; `RawTokens` underneath emits them as
//! produced. The cursor advances monotonically: every loop iteration
//! either consumes input, changes into a state that must consume, or
//! terminates the stream.

use std::borrow::Cow;

use crate::scan;
use crate::types::{Token, fold_name};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    InText,
    InTag,
    InComment,
    InScript,
}

/// Tokenizes into a lazy stream framed by `Start` and `Done`.
pub fn tokenize(html: &str) -> Tokens<'_> {
    Tokens {
        raw: RawTokens::new(html),
        buffered: None,
        held: None,
    }
}

/// Single-shot token iterator with adjacent text runs coalesced.
#[derive(Debug)]
pub struct Tokens<'a> {
    raw: RawTokens<'a>,
    /// Text accumulated until the next non-text token arrives.
    buffered: Option<Cow<'a, str>>,
    /// Non-text token held back while the buffered text flushes first.
    held: Option<Token<'a>>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if let Some(token) = self.held.take() {
            return Some(token);
        }
        loop {
            match self.raw.next() {
                Some(Token::Text { text }) => match &mut self.buffered {
                    Some(buffer) => buffer.to_mut().push_str(&text),
                    None => self.buffered = Some(text),
                },
                Some(token) => {
                    match self.buffered.take() {
                        Some(text) if !text.is_empty() => {
                            self.held = Some(token);
                            return Some(Token::Text { text });
                        }
                        _ => return Some(token),
                    }
                }
                None => {
                    // The raw stream always ends with Done, which flushes
                    // any buffered text above; nothing is pending here.
                    return None;
                }
            }
        }
    }
}

#[derive(Debug)]
struct RawTokens<'a> {
    input: &'a str,
    pos: usize,
    state: State,
    /// Name of the opening tag currently being assembled.
    current_tag: Cow<'a, str>,
    /// Second token of a two-token step (script body + its close).
    queued: Option<Token<'a>>,
    started: bool,
    done: bool,
}

impl<'a> RawTokens<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            state: State::InText,
            current_tag: Cow::Borrowed(""),
            queued: None,
            started: false,
            done: false,
        }
    }

    fn in_text(&mut self) -> Option<Token<'a>> {
        if let Some(chunk) = scan::opening_tag_start(self.input, self.pos) {
            let name = fold_name(chunk.name);
            self.current_tag = name.clone();
            self.pos += chunk.len;
            self.state = State::InTag;
            return Some(Token::OpeningTag { name });
        }
        if let Some(chunk) = scan::closing_tag(self.input, self.pos) {
            self.pos += chunk.len;
            return Some(Token::ClosingTag {
                name: fold_name(chunk.name),
            });
        }
        if let Some(len) = scan::comment_open(self.input, self.pos) {
            self.pos += len;
            self.state = State::InComment;
            return None;
        }
        if let Some(chunk) = scan::text_run(self.input, self.pos) {
            self.pos += chunk.len;
            return Some(Token::Text {
                text: Cow::Borrowed(chunk.text),
            });
        }
        // Stray `<` with no tag, closer, or comment behind it: emit the one
        // character as text so the cursor always advances.
        let text = &self.input[self.pos..self.pos + 1];
        self.pos += 1;
        Some(Token::Text {
            text: Cow::Borrowed(text),
        })
    }

    fn in_tag(&mut self) -> Option<Token<'a>> {
        if let Some(chunk) = scan::attribute_name(self.input, self.pos) {
            let name = fold_name(chunk.name);
            if chunk.has_value {
                let value = scan::attribute_value(self.input, self.pos + chunk.len);
                self.pos += chunk.len + value.len;
                return Some(Token::Attribute {
                    name,
                    value: Cow::Borrowed(value.value),
                });
            }
            self.pos += chunk.len;
            return Some(Token::Attribute {
                name,
                value: Cow::Borrowed(""),
            });
        }
        if let Some(chunk) = scan::tag_end(self.input, self.pos) {
            self.pos += chunk.len;
            let name = std::mem::replace(&mut self.current_tag, Cow::Borrowed(""));
            self.state = if name == "script" {
                State::InScript
            } else {
                State::InText
            };
            return Some(Token::OpeningTagEnd {
                name,
                token: chunk.token,
            });
        }
        // Abandoned tag: neither an attribute nor a terminator starts here.
        // Hand the cursor back to text handling without emitting.
        self.state = State::InText;
        None
    }

    fn in_comment(&mut self) -> Token<'a> {
        self.state = State::InText;
        if let Some(chunk) = scan::comment_body(self.input, self.pos) {
            self.pos += chunk.len;
            return Token::Comment {
                text: Cow::Borrowed(chunk.text),
            };
        }
        // Unterminated comment: everything that remains is the body.
        let text = &self.input[self.pos..];
        self.pos = self.input.len();
        Token::Comment {
            text: Cow::Borrowed(text),
        }
    }

    fn in_script(&mut self) -> Option<Token<'a>> {
        self.state = State::InText;
        if let Some(chunk) = scan::script_body(self.input, self.pos) {
            self.pos += chunk.len;
            let close = Token::ClosingTag {
                name: Cow::Borrowed("script"),
            };
            if chunk.text.is_empty() {
                return Some(close);
            }
            self.queued = Some(close);
            return Some(Token::Text {
                text: Cow::Borrowed(chunk.text),
            });
        }
        // Unterminated raw text: the rest of the input is script body.
        let text = &self.input[self.pos..];
        self.pos = self.input.len();
        if text.is_empty() {
            return None;
        }
        Some(Token::Text {
            text: Cow::Borrowed(text),
        })
    }
}

impl<'a> Iterator for RawTokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if let Some(token) = self.queued.take() {
            return Some(token);
        }
        if !self.started {
            self.started = true;
            return Some(Token::Start);
        }
        if self.done {
            return None;
        }
        loop {
            let step = match self.state {
                State::InText => {
                    if self.pos >= self.input.len() {
                        self.done = true;
                        return Some(Token::Done);
                    }
                    self.in_text()
                }
                State::InTag => {
                    if self.pos >= self.input.len() {
                        self.state = State::InText;
                        None
                    } else {
                        self.in_tag()
                    }
                }
                State::InComment => Some(self.in_comment()),
                State::InScript => self.in_script(),
            };
            if let Some(token) = step {
                return Some(token);
            }
        }
    }
}
