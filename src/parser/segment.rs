//! Cut a document into the `VEVENT` blocks it contains.
//!
//! The segmenter is a two-state machine folded over the line sequence:
//!
//! - `Outside`: every line is dropped, except `BEGIN:VEVENT` which opens a
//!   block holding just that line.
//! - `InsideEvent`: every line is appended to the open block, a repeated
//!   `BEGIN:VEVENT` included, until `END:VEVENT` closes it.
//!
//! The `END:VEVENT` line itself is not part of the emitted block. A block that
//! is still open when the input runs out is discarded.

use super::{Field, Line, LineReader};
use crate::component::EventBlock;

pub const BEGIN_EVENT: &str = "BEGIN:VEVENT";
pub const END_EVENT: &str = "END:VEVENT";

#[derive(Debug, Default)]
enum State<'a> {
    #[default]
    Outside,
    InsideEvent(Vec<Field<'a>>),
}

impl<'a> State<'a> {
    fn step(self, line: Line<'a>) -> (Self, Option<EventBlock<'a>>) {
        match (self, line.as_str()) {
            (Self::Outside, BEGIN_EVENT) => (Self::InsideEvent(vec![line.as_str().into()]), None),
            (Self::Outside, _) => (Self::Outside, None),
            (Self::InsideEvent(fields), END_EVENT) => (Self::Outside, Some(fields.into())),
            (Self::InsideEvent(mut fields), content) => {
                fields.push(content.into());
                (Self::InsideEvent(fields), None)
            }
        }
    }
}

/// Iterator adapter turning lines into completed [`EventBlock`]s.
pub struct Segmenter<'a, I: Iterator<Item = Line<'a>>> {
    lines: I,
    state: State<'a>,
}

impl<'a> Segmenter<'a, LineReader<'a>> {
    pub fn from_text(text: &'a str) -> Self {
        Segmenter::new(LineReader::new(text))
    }
}

impl<'a, I: Iterator<Item = Line<'a>>> Segmenter<'a, I> {
    pub fn new(lines: I) -> Self {
        Segmenter {
            lines,
            state: State::Outside,
        }
    }

    /// Whether the segmenter currently holds an unterminated block.
    pub fn is_inside_event(&self) -> bool {
        matches!(self.state, State::InsideEvent(_))
    }
}

impl<'a, I: Iterator<Item = Line<'a>>> Iterator for Segmenter<'a, I> {
    type Item = EventBlock<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        for line in self.lines.by_ref() {
            let (state, block) = std::mem::take(&mut self.state).step(line);
            self.state = state;
            if block.is_some() {
                return block;
            }
        }
        None
    }
}

/// Collect all completed event blocks of `text`.
pub fn segment(text: &str) -> Vec<EventBlock<'_>> {
    Segmenter::from_text(text).collect()
}
