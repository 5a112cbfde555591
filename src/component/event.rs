use std::borrow::Cow;

use derive_more::From;

use crate::{VALUE_DELIMITER, parser::Field, types::escape_text};

/// Prefixes of the fields carried over into the rewritten event, in no
/// particular priority. Parameterised variants such as `DTSTART;TZID=...` match
/// too.
pub const FIELD_WHITELIST: &[&str] = &["DTSTART", "DTEND", "SUMMARY", "UID", "DTSTAMP", "BEGIN:VEVENT"];

/// Vendor extension holding the rich-text description. Its parameters are
/// covered by the prefix match and never inspected.
pub const ALT_DESC_PREFIX: &str = "X-ALT-DESC";

pub const DESCRIPTION: &str = "DESCRIPTION";

/// The raw lines of one `VEVENT`, starting with `BEGIN:VEVENT` and without the
/// closing `END:VEVENT`.
#[derive(Debug, Clone, Default, PartialEq, Eq, From)]
pub struct EventBlock<'a>(Vec<Field<'a>>);

impl<'a> EventBlock<'a> {
    #[inline]
    pub fn fields(&self) -> &[Field<'a>] {
        &self.0
    }

    /// Raw value of the vendor description.
    ///
    /// When several `X-ALT-DESC` lines are present the last one wins. A
    /// matching line without a colon carries no value and leaves the previous
    /// match in place.
    pub fn alt_description(&self) -> Option<&'a str> {
        self.0
            .iter()
            .filter(|field| field.has_prefix(ALT_DESC_PREFIX))
            .filter_map(Field::split_value)
            .map(|(_, value)| value)
            .last()
    }

    /// Reduce the block to the whitelisted fields plus a synthesized `DESCRIPTION`.
    pub fn project(&self) -> RenderedEvent<'a> {
        let fields = self
            .0
            .iter()
            .copied()
            .filter(|field| field.has_any_prefix(FIELD_WHITELIST))
            .collect();
        let description = self
            .alt_description()
            .filter(|value| !value.is_empty())
            .map(escape_text);

        RenderedEvent {
            fields,
            description,
        }
    }
}

/// The output form of one event, minus its `END:VEVENT` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEvent<'a> {
    fields: Vec<Field<'a>>,
    description: Option<Cow<'a, str>>,
}

impl<'a> RenderedEvent<'a> {
    /// Whitelisted fields in their original relative order.
    #[inline]
    pub fn fields(&self) -> &[Field<'a>] {
        &self.fields
    }

    /// The escaped `DESCRIPTION` value, if one was synthesized.
    #[inline]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn lines(&self) -> impl Iterator<Item = Cow<'_, str>> {
        self.fields
            .iter()
            .map(|field| Cow::Borrowed(field.as_str()))
            .chain(
                self.description()
                    .map(|text| Cow::Owned(format!("{DESCRIPTION}{VALUE_DELIMITER}{text}"))),
            )
    }
}
