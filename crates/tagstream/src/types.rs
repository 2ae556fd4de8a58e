//! Token and parse-event model.

use std::borrow::Cow;

/// Terminator of an opening tag, as written in the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagEnd {
    /// `>`
    Gt,
    /// `/>`
    SlashGt,
}

impl TagEnd {
    pub fn as_str(self) -> &'static str {
        match self {
            TagEnd::Gt => ">",
            TagEnd::SlashGt => "/>",
        }
    }

    pub(crate) fn is_self_closing(self) -> bool {
        matches!(self, TagEnd::SlashGt)
    }
}

/// Low-level token emitted by the tokenizer.
///
/// Tag and attribute names are canonical ASCII lowercase. Text, comment
/// bodies, and attribute values are borrowed slices of the input except
/// where coalescing had to concatenate adjacent runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    /// Emitted once, before any other token.
    Start,
    OpeningTag {
        name: Cow<'a, str>,
    },
    Attribute {
        name: Cow<'a, str>,
        value: Cow<'a, str>,
    },
    OpeningTagEnd {
        name: Cow<'a, str>,
        token: TagEnd,
    },
    Text {
        text: Cow<'a, str>,
    },
    Comment {
        text: Cow<'a, str>,
    },
    ClosingTag {
        name: Cow<'a, str>,
    },
    /// Emitted once, after the last token.
    Done,
}

/// High-level parse event.
///
/// Open and close events are balanced: every `Open` is eventually paired
/// with exactly one `Close` of the same name, in last-in-first-out order.
/// Self-closing elements produce an `Open` immediately followed by its
/// `Close`, both flagged `self_closing`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseEvent<'a> {
    Open {
        name: Cow<'a, str>,
        attributes: AttrList<'a>,
        self_closing: bool,
    },
    Text {
        text: Cow<'a, str>,
    },
    Comment {
        text: Cow<'a, str>,
    },
    Close {
        name: Cow<'a, str>,
        self_closing: bool,
    },
}

/// Ordered attribute map.
///
/// Kept as a Vec to preserve source order; duplicate names resolve
/// last-wins in place. Attribute counts per tag are tiny, so lookups are
/// linear scans.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttrList<'a> {
    entries: Vec<(Cow<'a, str>, Cow<'a, str>)>,
}

impl<'a> AttrList<'a> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert or overwrite. Overwriting keeps the original position.
    pub fn insert(&mut self, name: Cow<'a, str>, value: Cow<'a, str>) {
        match self
            .entries
            .iter_mut()
            .find(|(existing, _)| *existing == name)
        {
            Some(slot) => slot.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing.as_ref() == name)
            .map(|(_, value)| value.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_ref(), value.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Canonicalize a captured tag/attribute name to ASCII lowercase.
///
/// Borrowed when the source is already lowercase (the common case in
/// real-world HTML); owned only when folding rewrites a byte.
pub(crate) fn fold_name(raw: &str) -> Cow<'_, str> {
    if raw.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(raw.to_ascii_lowercase())
    } else {
        Cow::Borrowed(raw)
    }
}
