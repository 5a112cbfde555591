//! Serialise rewritten calendars.
//!
//! Output lines are joined with `\r\n`; no terminator follows the last line
//! and no line folding is applied.

use std::borrow::Cow;

use itertools::Itertools;

mod calendar;
pub use calendar::{CALENDAR_EPILOGUE, ConvertedCalendar};

use crate::component::RenderedEvent;

pub const CRLF: &str = "\r\n";

pub trait Emitter {
    /// Content lines in output order, without terminators.
    fn content_lines(&self) -> Vec<Cow<'_, str>>;

    fn generate(&self) -> String {
        self.content_lines().iter().join(CRLF)
    }
}

impl Emitter for RenderedEvent<'_> {
    fn content_lines(&self) -> Vec<Cow<'_, str>> {
        self.lines().collect()
    }
}
