mod event;
pub use event::{ALT_DESC_PREFIX, DESCRIPTION, EventBlock, FIELD_WHITELIST, RenderedEvent};
