//! TEXT value escaping (RFC 5545, section 3.3.11).

use std::borrow::Cow;

const ESCAPED: [char; 4] = ['\\', ';', ',', '\n'];

/// Escape a TEXT value.
///
/// Backslash, semicolon, comma and newline are rewritten to `\\`, `\;`, `\,`
/// and `\n`. The substitution happens in a single pass, so backslashes
/// introduced here are never escaped a second time. Nothing else is touched;
/// in particular a literal `\n` pair in the input becomes `\\n`.
pub fn escape_text(value: &str) -> Cow<'_, str> {
    if !value.contains(ESCAPED) {
        return Cow::Borrowed(value);
    }

    let mut out = String::with_capacity(value.len() + value.len() / 8 + 1);
    for c in value.chars() {
        match c {
            '\\' => out.push_str(r"\\"),
            ';' => out.push_str(r"\;"),
            ',' => out.push_str(r"\,"),
            '\n' => out.push_str(r"\n"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Inverse of [`escape_text`].
///
/// `\N` is accepted as a newline as well. Unknown escape sequences and a
/// trailing lone backslash are kept verbatim.
pub fn unescape_text(value: &str) -> Cow<'_, str> {
    if !value.contains('\\') {
        return Cow::Borrowed(value);
    }

    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some(';') => out.push(';'),
            Some(',') => out.push(','),
            Some('n' | 'N') => out.push('\n'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    Cow::Owned(out)
}
