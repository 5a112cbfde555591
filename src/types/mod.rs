mod text;
pub use text::{escape_text, unescape_text};
