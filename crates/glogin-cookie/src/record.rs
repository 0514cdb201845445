//! Plaintext record inside a cookie.
//!
//! Format: `id|login|avatar_url|context`
//!
//! Inside a field `%` is written `%25` and `|` is written `%7C`, so a field
//! never contains a bare separator. Fields without either character are
//! written verbatim, which keeps older cookies and test-mode cookies readable.

use std::borrow::Cow;

/// Separator between record fields.
pub const FIELD_SEPARATOR: char = '|';

/// Fields an encrypted record always carries.
pub const RECORD_FIELDS: usize = 4;

/// Parts a record is split into. The fifth slot swallows anything trailing,
/// such as the bearer token some older cookies carried.
const MAX_PARTS: usize = 5;

/// Escape one field value.
pub fn escape_field(value: &str) -> Cow<'_, str> {
    if !value.contains(['%', FIELD_SEPARATOR]) {
        return Cow::Borrowed(value);
    }
    let mut out = String::with_capacity(value.len() + 4);
    for c in value.chars() {
        match c {
            '%' => out.push_str("%25"),
            FIELD_SEPARATOR => out.push_str("%7C"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Reverse [`escape_field`]. A `%` not followed by `25` or `7C` is kept as is.
pub fn unescape_field(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        if tail.starts_with("%25") {
            out.push('%');
            rest = &tail[3..];
        } else if tail.starts_with("%7C") || tail.starts_with("%7c") {
            out.push(FIELD_SEPARATOR);
            rest = &tail[3..];
        } else {
            out.push('%');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}

/// Join field values into one record.
pub fn join_fields(fields: &[&str]) -> String {
    fields
        .iter()
        .map(|f| escape_field(f))
        .collect::<Vec<_>>()
        .join(&FIELD_SEPARATOR.to_string())
}

/// Split a record into unescaped field values, at most five of them.
pub fn split_fields(record: &str) -> Vec<String> {
    record
        .splitn(MAX_PARTS, FIELD_SEPARATOR)
        .map(unescape_field)
        .collect()
}
