//! Permissive streaming HTML tokenizer and parser.
//!
//! Feed any string, malformed or not, and pull a lazy stream of balanced
//! open/close/text/comment events. Recovery follows the practical parts
//! of the HTML5 algorithm: void elements, `<script>` raw text, and the
//! optional-tag implicit closes. There is no error channel; every input
//! produces a well-formed event stream, degrading to literal text where
//! markup cannot be resolved.
//!
//! Not a conforming HTML5 parser: no insertion modes, no foreign content
//! (SVG/MathML), no `<template>` semantics, and doctypes pass through as
//! text.
//!
//! ```
//! use tagstream::{ParseEvent, parse};
//!
//! let mut events = parse("<p>hi");
//! assert!(matches!(events.next(), Some(ParseEvent::Open { name, .. }) if name == "p"));
//! assert!(matches!(events.next(), Some(ParseEvent::Text { text }) if text == "hi"));
//! assert!(matches!(events.next(), Some(ParseEvent::Close { name, .. }) if name == "p"));
//! assert!(events.next().is_none());
//! ```

mod entities;
mod parser;
mod scan;
mod tables;
mod tokenizer;
mod types;

pub mod perf_fixtures;

pub use crate::parser::{ParseEvents, ParseOptions, parse, parse_with_options};
pub use crate::tokenizer::{Tokens, tokenize};
pub use crate::types::{AttrList, ParseEvent, TagEnd, Token};
