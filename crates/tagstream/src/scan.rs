//! Position-anchored chunk matchers.
//!
//! Each matcher inspects the input at exactly `pos` and returns either a
//! chunk whose `len` counts the bytes consumed, or `None`. Matchers never
//! look behind `pos` and never report more than they matched.
//!
//! Invariant: every delimiter involved (`<`, `>`, `/`, `=`, quotes, name
//! characters, ASCII whitespace) is a single ASCII byte, so every offset a
//! matcher reports lands on a UTF-8 character boundary.

use memchr::memchr;

use crate::types::TagEnd;

const COMMENT_OPEN: &str = "<!--";
const COMMENT_CLOSE: &str = "-->";
const SCRIPT_CLOSE: &str = "</script>";

/// `<` plus a tag name. The tag terminator is a separate chunk.
#[derive(Debug)]
pub(crate) struct OpeningTagStart<'a> {
    pub(crate) len: usize,
    pub(crate) name: &'a str,
}

/// `</name>`.
#[derive(Debug)]
pub(crate) struct ClosingTag<'a> {
    pub(crate) len: usize,
    pub(crate) name: &'a str,
}

/// Comment body through the first `-->`; `text` excludes the terminator.
#[derive(Debug)]
pub(crate) struct CommentBody<'a> {
    pub(crate) len: usize,
    pub(crate) text: &'a str,
}

/// Raw text through the first `</script>`; `text` excludes the close tag.
#[derive(Debug)]
pub(crate) struct ScriptBody<'a> {
    pub(crate) len: usize,
    pub(crate) text: &'a str,
}

/// Maximal run of characters other than `<`.
#[derive(Debug)]
pub(crate) struct TextRun<'a> {
    pub(crate) len: usize,
    pub(crate) text: &'a str,
}

/// Optional whitespace plus `>` or `/>`.
#[derive(Debug)]
pub(crate) struct TagEndChunk {
    pub(crate) len: usize,
    pub(crate) token: TagEnd,
}

/// Whitespace-led attribute name, optionally followed by `=`.
///
/// When `has_value` is set, `len` extends through the `=` and any
/// whitespace around it, leaving the cursor on the first value character.
#[derive(Debug)]
pub(crate) struct AttributeName<'a> {
    pub(crate) len: usize,
    pub(crate) name: &'a str,
    pub(crate) has_value: bool,
}

/// Attribute value; quoted lengths include both quote characters.
#[derive(Debug)]
pub(crate) struct AttributeValue<'a> {
    pub(crate) len: usize,
    pub(crate) value: &'a str,
}

fn is_tag_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-'
}

fn is_attr_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_'
}

/// Length of a `prefix:local` name at `pos`: at most one colon, both runs
/// non-empty. Zero when no name starts here.
fn name_len(bytes: &[u8], pos: usize, is_name: impl Fn(u8) -> bool) -> usize {
    let mut i = pos;
    while i < bytes.len() && is_name(bytes[i]) {
        i += 1;
    }
    if i == pos {
        return 0;
    }
    if i < bytes.len() && bytes[i] == b':' && i + 1 < bytes.len() && is_name(bytes[i + 1]) {
        let mut j = i + 1;
        while j < bytes.len() && is_name(bytes[j]) {
            j += 1;
        }
        return j - pos;
    }
    i - pos
}

fn skip_whitespace(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    i
}

pub(crate) fn opening_tag_start(input: &str, pos: usize) -> Option<OpeningTagStart<'_>> {
    let bytes = input.as_bytes();
    if bytes.get(pos) != Some(&b'<') {
        return None;
    }
    let n = name_len(bytes, pos + 1, is_tag_name_byte);
    if n == 0 {
        return None;
    }
    Some(OpeningTagStart {
        len: 1 + n,
        name: &input[pos + 1..pos + 1 + n],
    })
}

pub(crate) fn closing_tag(input: &str, pos: usize) -> Option<ClosingTag<'_>> {
    let bytes = input.as_bytes();
    if bytes.get(pos) != Some(&b'<') || bytes.get(pos + 1) != Some(&b'/') {
        return None;
    }
    let n = name_len(bytes, pos + 2, is_tag_name_byte);
    if n == 0 || bytes.get(pos + 2 + n) != Some(&b'>') {
        return None;
    }
    Some(ClosingTag {
        len: n + 3,
        name: &input[pos + 2..pos + 2 + n],
    })
}

pub(crate) fn comment_open(input: &str, pos: usize) -> Option<usize> {
    input.as_bytes()[pos..]
        .starts_with(COMMENT_OPEN.as_bytes())
        .then_some(COMMENT_OPEN.len())
}

pub(crate) fn comment_body(input: &str, pos: usize) -> Option<CommentBody<'_>> {
    let rel = input[pos..].find(COMMENT_CLOSE)?;
    Some(CommentBody {
        len: rel + COMMENT_CLOSE.len(),
        text: &input[pos..pos + rel],
    })
}

/// The `</script>` match is exact; no case folding, no whitespace.
pub(crate) fn script_body(input: &str, pos: usize) -> Option<ScriptBody<'_>> {
    let rel = input[pos..].find(SCRIPT_CLOSE)?;
    Some(ScriptBody {
        len: rel + SCRIPT_CLOSE.len(),
        text: &input[pos..pos + rel],
    })
}

pub(crate) fn text_run(input: &str, pos: usize) -> Option<TextRun<'_>> {
    let bytes = input.as_bytes();
    if pos >= bytes.len() || bytes[pos] == b'<' {
        return None;
    }
    let end = memchr(b'<', &bytes[pos..]).map_or(bytes.len(), |rel| pos + rel);
    Some(TextRun {
        len: end - pos,
        text: &input[pos..end],
    })
}

pub(crate) fn tag_end(input: &str, pos: usize) -> Option<TagEndChunk> {
    let bytes = input.as_bytes();
    let i = skip_whitespace(bytes, pos);
    match bytes.get(i) {
        Some(&b'>') => Some(TagEndChunk {
            len: i + 1 - pos,
            token: TagEnd::Gt,
        }),
        Some(&b'/') if bytes.get(i + 1) == Some(&b'>') => Some(TagEndChunk {
            len: i + 2 - pos,
            token: TagEnd::SlashGt,
        }),
        _ => None,
    }
}

pub(crate) fn attribute_name(input: &str, pos: usize) -> Option<AttributeName<'_>> {
    let bytes = input.as_bytes();
    let start = skip_whitespace(bytes, pos);
    if start == pos {
        // Leading whitespace is mandatory; without it this is not an
        // attribute position.
        return None;
    }
    let n = name_len(bytes, start, is_attr_name_byte);
    if n == 0 {
        return None;
    }
    let name = &input[start..start + n];
    let after_ws = skip_whitespace(bytes, start + n);
    if bytes.get(after_ws) == Some(&b'=') {
        let value_at = skip_whitespace(bytes, after_ws + 1);
        return Some(AttributeName {
            len: value_at - pos,
            name,
            has_value: true,
        });
    }
    Some(AttributeName {
        len: start + n - pos,
        name,
        has_value: false,
    })
}

/// Reads the value just after `=`. Total: an immediate delimiter yields an
/// empty value, and a missing close quote consumes the rest of the input.
pub(crate) fn attribute_value(input: &str, pos: usize) -> AttributeValue<'_> {
    let bytes = input.as_bytes();
    match bytes.get(pos).copied() {
        Some(quote) if quote == b'"' || quote == b'\'' => {
            let start = pos + 1;
            match memchr(quote, &bytes[start..]) {
                Some(rel) => AttributeValue {
                    len: rel + 2,
                    value: &input[start..start + rel],
                },
                None => AttributeValue {
                    len: input.len() - pos,
                    value: &input[start..],
                },
            }
        }
        _ => {
            let mut i = pos;
            while i < bytes.len() && !bytes[i].is_ascii_whitespace() && bytes[i] != b'>' {
                i += 1;
            }
            AttributeValue {
                len: i - pos,
                value: &input[pos..i],
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_tag_start_captures_name_without_terminator() {
        let chunk = opening_tag_start("<div class=x>", 0).expect("match");
        assert_eq!((chunk.len, chunk.name), (4, "div"));

        let chunk = opening_tag_start("a<br>", 1).expect("match");
        assert_eq!((chunk.len, chunk.name), (3, "br"));
    }

    #[test]
    fn opening_tag_start_accepts_one_namespace_colon() {
        let chunk = opening_tag_start("<svg:rect>", 0).expect("match");
        assert_eq!(chunk.name, "svg:rect");

        // Second colon ends the name.
        let chunk = opening_tag_start("<a:b:c>", 0).expect("match");
        assert_eq!(chunk.name, "a:b");

        // A trailing colon with no local part is not part of the name.
        let chunk = opening_tag_start("<a:>", 0).expect("match");
        assert_eq!(chunk.name, "a");

        assert!(opening_tag_start("<:a>", 0).is_none());
    }

    #[test]
    fn opening_tag_start_rejects_non_tags() {
        assert!(opening_tag_start("< div>", 0).is_none());
        assert!(opening_tag_start("</div>", 0).is_none());
        assert!(opening_tag_start("<!--", 0).is_none());
        assert!(opening_tag_start("text", 0).is_none());
        assert!(opening_tag_start("<", 0).is_none());
    }

    #[test]
    fn closing_tag_requires_immediate_gt() {
        let chunk = closing_tag("</div>", 0).expect("match");
        assert_eq!((chunk.len, chunk.name), (6, "div"));

        assert!(closing_tag("</div >", 0).is_none());
        assert!(closing_tag("</ div>", 0).is_none());
        assert!(closing_tag("</div", 0).is_none());
    }

    #[test]
    fn comment_chunks_split_open_and_body() {
        assert_eq!(comment_open("<!--x-->", 0), Some(4));
        assert_eq!(comment_open("<!-x", 0), None);

        let body = comment_body("x-->rest", 0).expect("match");
        assert_eq!((body.len, body.text), (4, "x"));
        assert!(comment_body("never closed", 0).is_none());
    }

    #[test]
    fn comment_body_spans_newlines() {
        let body = comment_body("a\nb\n-->", 0).expect("match");
        assert_eq!(body.text, "a\nb\n");
    }

    #[test]
    fn script_body_match_is_case_sensitive() {
        let body = script_body("var a;</script>x", 0).expect("match");
        assert_eq!((body.len, body.text), (15, "var a;"));

        assert!(script_body("var a;</SCRIPT>", 0).is_none());
        assert!(script_body("var a;</script >", 0).is_none());
    }

    #[test]
    fn text_run_stops_at_angle_bracket() {
        let run = text_run("ab<c", 0).expect("match");
        assert_eq!((run.len, run.text), (2, "ab"));

        let run = text_run("café 😊", 0).expect("match");
        assert_eq!(run.text, "café 😊");

        assert!(text_run("<a", 0).is_none());
        assert!(text_run("", 0).is_none());
    }

    #[test]
    fn tag_end_allows_leading_whitespace() {
        let end = tag_end(">", 0).expect("match");
        assert_eq!((end.len, end.token), (1, TagEnd::Gt));

        let end = tag_end(" \t/>", 0).expect("match");
        assert_eq!((end.len, end.token), (4, TagEnd::SlashGt));

        assert!(tag_end("/ >", 0).is_none());
        assert!(tag_end("x>", 0).is_none());
        assert!(tag_end("  ", 0).is_none());
    }

    #[test]
    fn attribute_name_requires_leading_whitespace() {
        assert!(attribute_name("href=x", 0).is_none());

        let attr = attribute_name(" href=x", 0).expect("match");
        assert_eq!((attr.len, attr.name, attr.has_value), (6, "href", true));

        let attr = attribute_name(" disabled>", 0).expect("match");
        assert_eq!((attr.len, attr.name, attr.has_value), (9, "disabled", false));
    }

    #[test]
    fn attribute_name_consumes_spaced_equals() {
        let attr = attribute_name(" a = b", 0).expect("match");
        assert_eq!((attr.len, attr.name, attr.has_value), (5, "a", true));

        // Without `=`, trailing whitespace stays for the next chunk.
        let attr = attribute_name(" a  b", 0).expect("match");
        assert_eq!((attr.len, attr.has_value), (2, false));
    }

    #[test]
    fn attribute_name_allows_underscore_and_colon_forms() {
        let attr = attribute_name(" data_x=1", 0).expect("match");
        assert_eq!(attr.name, "data_x");

        let attr = attribute_name(" xml:lang=en", 0).expect("match");
        assert_eq!(attr.name, "xml:lang");
    }

    #[test]
    fn attribute_value_reads_both_quote_kinds() {
        let value = attribute_value("\"a b\" rest", 0);
        assert_eq!((value.len, value.value), (5, "a b"));

        let value = attribute_value("'it''s", 0);
        assert_eq!((value.len, value.value), (4, "it"));

        // The other quote is an ordinary value character.
        let value = attribute_value("'yes, \"no\", yes'>", 0);
        assert_eq!(value.value, "yes, \"no\", yes");
    }

    #[test]
    fn attribute_value_without_close_quote_runs_to_end() {
        let value = attribute_value("\"abc", 0);
        assert_eq!((value.len, value.value), (4, "abc"));
    }

    #[test]
    fn attribute_value_unquoted_stops_at_whitespace_or_gt() {
        let value = attribute_value("x/y z", 0);
        assert_eq!((value.len, value.value), (3, "x/y"));

        let value = attribute_value("x>", 0);
        assert_eq!((value.len, value.value), (1, "x"));

        let value = attribute_value(">", 0);
        assert_eq!((value.len, value.value), (0, ""));
    }
}
