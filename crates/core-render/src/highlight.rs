//! Per-line token coloring.
//!
//! A cosmetic pass over buffer content: each line is decomposed into spans
//! tagged with a token class, and the renderer maps classes to terminal
//! colors. The scanner is pure and line-local, so it is testable without a
//! terminal and can never affect buffer correctness.
//!
//! Scanner rules, in priority order at each position:
//! * `//` opens a line comment running to the end of the line;
//! * `/*` opens a block comment closed by `*/`; unterminated falls back to
//!   plain text;
//! * `"` opens a string closed by the next `"`; unterminated falls back to
//!   plain text;
//! * otherwise a word runs until whitespace or `"` and is classified against
//!   the keyword tables (case-insensitive).
//!
//! Invariant: concatenating the span texts reproduces the input line exactly.

use crossterm::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Text,
    Keyword,
    Builtin,
    Literal,
    Str,
    LineComment,
    BlockComment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    pub text: &'a str,
    pub kind: SpanKind,
}

const KEYWORDS: &[&str] = &[
    "function", "if", "else", "while", "for", "var", "let", "const", "return",
];

/// Terminal color for a token class; `None` keeps the default foreground.
pub fn color_for(kind: SpanKind) -> Option<Color> {
    match kind {
        SpanKind::Text => None,
        SpanKind::Keyword => Some(Color::Magenta),
        SpanKind::Builtin => Some(Color::Blue),
        SpanKind::Literal => Some(Color::Cyan),
        SpanKind::Str => Some(Color::Green),
        SpanKind::LineComment => Some(Color::DarkGreen),
        SpanKind::BlockComment => Some(Color::Grey),
    }
}

/// Decompose one line (no terminator) into classified spans.
pub fn highlight_line(line: &str) -> Vec<Span<'_>> {
    let mut spans = Vec::new();
    let mut i = 0;
    while i < line.len() {
        let rest = &line[i..];
        if rest.starts_with("//") {
            spans.push(Span {
                text: rest,
                kind: SpanKind::LineComment,
            });
            break;
        }
        if rest.starts_with("/*") {
            match rest.find("*/") {
                Some(end) => {
                    let stop = end + 2;
                    spans.push(Span {
                        text: &rest[..stop],
                        kind: SpanKind::BlockComment,
                    });
                    i += stop;
                }
                None => {
                    spans.push(Span {
                        text: rest,
                        kind: SpanKind::Text,
                    });
                    break;
                }
            }
            continue;
        }
        if rest.starts_with('"') {
            match rest[1..].find('"') {
                Some(end) => {
                    let stop = end + 2;
                    spans.push(Span {
                        text: &rest[..stop],
                        kind: SpanKind::Str,
                    });
                    i += stop;
                }
                None => {
                    spans.push(Span {
                        text: rest,
                        kind: SpanKind::Text,
                    });
                    break;
                }
            }
            continue;
        }

        let first = rest.chars().next().expect("rest is non-empty");
        if first.is_whitespace() {
            let stop = rest
                .find(|c: char| !c.is_whitespace())
                .unwrap_or(rest.len());
            spans.push(Span {
                text: &rest[..stop],
                kind: SpanKind::Text,
            });
            i += stop;
        } else {
            // Words break on whitespace and quotes only; comment openers do
            // not split a word mid-run.
            let stop = rest
                .find(|c: char| c.is_whitespace() || c == '"')
                .unwrap_or(rest.len());
            let word = &rest[..stop];
            spans.push(Span {
                text: word,
                kind: classify_word(word),
            });
            i += stop;
        }
    }
    spans
}

fn classify_word(word: &str) -> SpanKind {
    let lowered = word.to_ascii_lowercase();
    if KEYWORDS.contains(&lowered.as_str()) {
        SpanKind::Keyword
    } else if lowered == "console" {
        SpanKind::Builtin
    } else if matches!(lowered.as_str(), "true" | "false" | "null") {
        SpanKind::Literal
    } else {
        SpanKind::Text
    }
}
