//! Rewrites calendar exports written in a vendor iCalendar dialect into plain
//! VEVENTs that mainstream calendar importers accept.
//!
//! ```rust
//! let output = icsfix::convert("BEGIN:VEVENT\nUID:1\nX-ALT-DESC:Hi, there\nEND:VEVENT\n");
//! assert!(output.contains("DESCRIPTION:Hi\\, there\r\nEND:VEVENT"));
//! ```

const VALUE_DELIMITER: char = ':';
const PARAM_DELIMITER: char = ';';

pub mod component;
pub use component::{EventBlock, RenderedEvent};

pub mod parser;
pub use parser::{Field, Line, LineReader, Segmenter, segment};

pub mod generator;
pub use generator::{ConvertedCalendar, Emitter};

pub mod types;
pub use types::{escape_text, unescape_text};

mod error;
pub use error::ConvertError;

mod converter;
pub use converter::{Converter, ConverterOptions, convert, decode};

#[cfg(feature = "server")]
pub mod server;
