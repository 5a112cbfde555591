use derive_more::{Display, From};

use crate::{PARAM_DELIMITER, VALUE_DELIMITER};

/// One physical line inside an event, `NAME[;PARAMS]:VALUE`.
///
/// Fields are never validated: a line without a colon is still a field, it
/// just has no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From)]
pub struct Field<'a>(&'a str);

impl<'a> Field<'a> {
    #[inline]
    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// Property name, everything up to the first `;` or `:`.
    pub fn name(&self) -> &'a str {
        match self.0.find([PARAM_DELIMITER, VALUE_DELIMITER]) {
            Some(pos) => &self.0[..pos],
            None => self.0,
        }
    }

    /// Split on the first colon into the name-with-parameters part and the raw value.
    #[inline]
    pub fn split_value(&self) -> Option<(&'a str, &'a str)> {
        self.0.split_once(VALUE_DELIMITER)
    }

    #[inline]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }

    pub fn has_any_prefix(&self, prefixes: &[&str]) -> bool {
        prefixes.iter().any(|prefix| self.has_prefix(prefix))
    }
}
