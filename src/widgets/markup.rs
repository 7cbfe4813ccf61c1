//! Inline style markup: `[bold red]warning[/] plain`.
//!
//! A tag is a style string in square brackets and applies until the matching
//! `[/]` (or `[/anything]`, which closes the innermost open tag). Nested tags
//! merge onto the enclosing style. `[[` and `]]` are literal brackets.

use crate::error::{Error, Result};
use crate::style::Style;
use crate::text::Segment;

/// Parse markup into styled segments, with `base` under every run.
pub fn parse_markup(markup: &str, base: Style) -> Result<Vec<Segment>> {
    let mut segments: Vec<Segment> = Vec::new();
    let mut stack: Vec<Style> = Vec::new();
    let mut run = String::new();
    let mut chars = markup.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        match c {
            '[' if chars.peek().is_some_and(|(_, n)| *n == '[') => {
                chars.next();
                run.push('[');
            }
            ']' if chars.peek().is_some_and(|(_, n)| *n == ']') => {
                chars.next();
                run.push(']');
            }
            ']' => {
                return Err(Error::InvalidMarkup {
                    position: pos,
                    reason: "unescaped closing bracket",
                });
            }
            '[' => {
                let mut tag = String::new();
                let mut closed = false;
                for (_, t) in chars.by_ref() {
                    if t == ']' {
                        closed = true;
                        break;
                    }
                    tag.push(t);
                }
                if !closed {
                    return Err(Error::InvalidMarkup {
                        position: pos,
                        reason: "unterminated tag",
                    });
                }

                push_run(&mut segments, &mut run, top(&stack, base));
                if tag.starts_with('/') {
                    if stack.pop().is_none() {
                        return Err(Error::InvalidMarkup {
                            position: pos,
                            reason: "unbalanced closing tag",
                        });
                    }
                } else {
                    let style = Style::parse(&tag).map_err(|_| Error::InvalidMarkup {
                        position: pos,
                        reason: "invalid style in tag",
                    })?;
                    stack.push(top(&stack, base).merge(style));
                }
            }
            _ => run.push(c),
        }
    }

    if !stack.is_empty() {
        return Err(Error::InvalidMarkup {
            position: markup.len(),
            reason: "unclosed tag",
        });
    }
    push_run(&mut segments, &mut run, top(&stack, base));
    Ok(segments)
}

fn top(stack: &[Style], base: Style) -> Style {
    stack.last().copied().unwrap_or(base)
}

fn push_run(segments: &mut Vec<Segment>, run: &mut String, style: Style) {
    if run.is_empty() {
        return;
    }
    if let Some(Segment::Text { text, style: last }) = segments.last_mut() {
        if *last == style {
            text.push_str(run);
            run.clear();
            return;
        }
    }
    segments.push(Segment::styled(std::mem::take(run), style));
}

/// Escape brackets so `text` renders literally when parsed as markup.
#[must_use]
pub fn escape_markup(text: &str) -> String {
    text.replace('[', "[[").replace(']', "]]")
}

/// Strip markup, keeping only the text. Malformed markup is returned as is.
#[must_use]
pub fn remove_markup(markup: &str) -> String {
    parse_markup(markup, Style::NONE).map_or_else(
        |_| markup.to_string(),
        |segments| segments.iter().map(Segment::as_text).collect(),
    )
}
