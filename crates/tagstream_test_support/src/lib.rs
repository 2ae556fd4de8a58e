//! Snapshot formatting and stream checks for tagstream's integration
//! tests and benches.

use std::fmt::Write;

use tagstream::{ParseEvent, Token};

/// Render a token stream into compact one-line-per-token snapshots.
pub fn format_tokens<'a>(tokens: impl Iterator<Item = Token<'a>>) -> Vec<String> {
    tokens
        .map(|token| match token {
            Token::Start => "Start".to_string(),
            Token::OpeningTag { name } => format!("OpeningTag({name})"),
            Token::Attribute { name, value } => format!("Attribute({name}=\"{value}\")"),
            Token::OpeningTagEnd { name, token } => {
                format!("OpeningTagEnd({name} {})", token.as_str())
            }
            Token::Text { text } => format!("Text({text})"),
            Token::Comment { text } => format!("Comment({text})"),
            Token::ClosingTag { name } => format!("ClosingTag({name})"),
            Token::Done => "Done".to_string(),
        })
        .collect()
}

/// Render a parse-event stream into compact snapshots.
///
/// Self-closing opens and closes carry a trailing ` /` marker, matching
/// how they were written (or implied) in the source.
pub fn format_events<'a>(events: impl Iterator<Item = ParseEvent<'a>>) -> Vec<String> {
    events
        .map(|event| match event {
            ParseEvent::Open {
                name,
                attributes,
                self_closing,
            } => {
                let mut line = String::new();
                let _ = write!(&mut line, "Open({name}");
                for (attr, value) in attributes.iter() {
                    let _ = write!(&mut line, " {attr}=\"{value}\"");
                }
                if self_closing {
                    line.push_str(" /");
                }
                line.push(')');
                line
            }
            ParseEvent::Text { text } => format!("Text({text})"),
            ParseEvent::Comment { text } => format!("Comment({text})"),
            ParseEvent::Close { name, self_closing } => {
                if self_closing {
                    format!("Close({name} /)")
                } else {
                    format!("Close({name})")
                }
            }
        })
        .collect()
}

/// Replay open/close events against a stack, verifying that closes match
/// their opens in last-in-first-out order and that nothing stays open.
pub fn check_balanced<'a>(events: impl Iterator<Item = ParseEvent<'a>>) -> Result<(), String> {
    let mut stack: Vec<String> = Vec::new();
    for event in events {
        match event {
            ParseEvent::Open {
                name, self_closing, ..
            } => {
                if !self_closing {
                    stack.push(name.into_owned());
                }
            }
            ParseEvent::Close {
                name,
                self_closing: false,
            } => match stack.pop() {
                Some(open) if open == name => {}
                Some(open) => {
                    return Err(format!("close {name} does not match open {open}"));
                }
                None => return Err(format!("close {name} with nothing open")),
            },
            ParseEvent::Close { .. } | ParseEvent::Text { .. } | ParseEvent::Comment { .. } => {}
        }
    }
    if stack.is_empty() {
        Ok(())
    } else {
        Err(format!("unclosed elements remain: {stack:?}"))
    }
}

/// Verify the self-closing pairing: every self-closing open is followed
/// immediately by its own self-closing close.
pub fn check_self_closing_pairs<'a>(
    events: impl Iterator<Item = ParseEvent<'a>>,
) -> Result<(), String> {
    let events: Vec<ParseEvent<'a>> = events.collect();
    for (index, event) in events.iter().enumerate() {
        let ParseEvent::Open {
            name,
            self_closing: true,
            ..
        } = event
        else {
            continue;
        };
        match events.get(index + 1) {
            Some(ParseEvent::Close {
                name: close,
                self_closing: true,
            }) if close == name => {}
            other => {
                return Err(format!(
                    "self-closing open {name} followed by {other:?} instead of its close"
                ));
            }
        }
    }
    Ok(())
}
