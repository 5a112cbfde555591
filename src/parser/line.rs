//! Split raw calendar text into trimmed lines.
//!
//! Every Unicode line boundary counts as a terminator, `\r\n` being a single
//! one. No unfolding of continuation lines takes place: each physical line is
//! handed on as it is, minus surrounding whitespace. The information separators
//! `U+001C..=U+001F` count as whitespace too, on top of `char::is_whitespace`.

use derive_more::Display;

const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

fn is_space(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{1c}'..='\u{1f}')
}

/// A single trimmed line together with its 1-based position in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("{inner}")]
pub struct Line<'a> {
    pub inner: &'a str,
    number: usize,
}

impl<'a> Line<'a> {
    #[inline]
    pub fn as_str(&self) -> &'a str {
        self.inner
    }

    #[inline]
    pub fn number(&self) -> usize {
        self.number
    }
}

pub struct LineReader<'a> {
    remainder: Option<&'a str>,
    number: usize,
}

impl<'a> LineReader<'a> {
    pub fn new(text: &'a str) -> Self {
        LineReader {
            remainder: (!text.is_empty()).then_some(text),
            number: 0,
        }
    }
}

impl<'a> Iterator for LineReader<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.remainder?;

        let (raw, rest) = match text.find(LINE_BREAKS) {
            Some(pos) => {
                let terminator = text[pos..].chars().next()?;
                let mut end = pos + terminator.len_utf8();
                if terminator == '\r' && text[end..].starts_with('\n') {
                    end += 1;
                }
                (&text[..pos], &text[end..])
            }
            None => (text, ""),
        };

        // A terminator at the very end does not open another line
        self.remainder = (!rest.is_empty()).then_some(rest);
        self.number += 1;

        Some(Line {
            inner: raw.trim_matches(is_space),
            number: self.number,
        })
    }
}
