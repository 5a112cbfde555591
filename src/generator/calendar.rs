use std::borrow::Cow;

use crate::{
    component::RenderedEvent,
    generator::Emitter,
    parser::{END_EVENT, Segmenter},
};

const CALENDAR_PROLOGUE_BEGIN: &str = "BEGIN:VCALENDAR";
const CALENDAR_VERSION: &str = "VERSION:2.0";
const CALENDAR_SCALE: &str = "CALSCALE:GREGORIAN";
pub const CALENDAR_EPILOGUE: &str = "END:VCALENDAR";

/// A complete output document: fixed prologue, the rewritten events and the
/// fixed epilogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedCalendar<'a> {
    product_id: &'a str,
    events: Vec<RenderedEvent<'a>>,
}

impl<'a> ConvertedCalendar<'a> {
    pub fn new(product_id: &'a str, events: Vec<RenderedEvent<'a>>) -> Self {
        Self { product_id, events }
    }

    /// Segment `text` and project every completed event block.
    pub fn from_text(product_id: &'a str, text: &'a str) -> Self {
        let events = Segmenter::from_text(text)
            .map(|block| block.project())
            .collect();
        Self::new(product_id, events)
    }

    pub fn product_id(&self) -> &str {
        self.product_id
    }

    pub fn events(&self) -> &[RenderedEvent<'a>] {
        &self.events
    }
}

impl Emitter for ConvertedCalendar<'_> {
    fn content_lines(&self) -> Vec<Cow<'_, str>> {
        let mut lines = vec![
            Cow::Borrowed(CALENDAR_PROLOGUE_BEGIN),
            Cow::Borrowed(CALENDAR_VERSION),
            Cow::Owned(format!("PRODID:{}", self.product_id)),
            Cow::Borrowed(CALENDAR_SCALE),
        ];
        for event in &self.events {
            lines.extend(event.lines());
            lines.push(Cow::Borrowed(END_EVENT));
        }
        lines.push(Cow::Borrowed(CALENDAR_EPILOGUE));
        lines
    }
}
