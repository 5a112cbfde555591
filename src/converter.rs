use crate::{
    ConvertError,
    generator::{ConvertedCalendar, Emitter},
};

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterOptions {
    /// Value of the `PRODID` line written into every output calendar.
    pub product_id: String,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            product_id: "-//ICS-Converter-for-Abacus//EN".to_owned(),
        }
    }
}

/// Rewrites vendor calendar exports.
///
/// Conversion never fails: unterminated events, unknown fields and missing
/// descriptions all degrade to a smaller but well-formed calendar.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConverterOptions,
}

impl Converter {
    pub fn new(options: ConverterOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ConverterOptions {
        &self.options
    }

    /// Build the output document without serialising it.
    pub fn render<'a>(&'a self, text: &'a str) -> ConvertedCalendar<'a> {
        ConvertedCalendar::from_text(&self.options.product_id, text)
    }

    pub fn convert(&self, text: &str) -> String {
        self.render(text).generate()
    }

    pub fn convert_bytes(&self, bytes: &[u8]) -> Result<String, ConvertError> {
        Ok(self.convert(decode(bytes)?))
    }
}

/// Convert `text` with the default options.
pub fn convert(text: &str) -> String {
    Converter::default().convert(text)
}

/// Decode uploaded bytes as UTF-8, dropping a leading byte order mark.
pub fn decode(bytes: &[u8]) -> Result<&str, ConvertError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    Ok(std::str::from_utf8(bytes)?)
}
