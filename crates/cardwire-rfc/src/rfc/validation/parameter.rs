//! ## Summary
//! Parameter value domain checks.
//!
//! Each predicate accepts any [`ParamValue`] shape and answers whether it
//! lies in the parameter's domain. None of them fail or mutate; deciding
//! what to do with a rejected value is up to the property being built.

use crate::rfc::vcard::core::ParamValue;

/// ## Summary
/// PREF (RFC 6350 §5.3): an integer from 1 to 100 inclusive.
///
/// Text such as `"100"` is rejected even when it looks numeric.
#[must_use]
pub fn is_valid_pref(value: &ParamValue) -> bool {
    value.as_integer().is_some_and(|i| (1..=100).contains(&i))
}

/// ## Summary
/// PID (RFC 6350 §5.5): one or more values of the form `digits` or
/// `digits.digits`.
///
/// A list is valid only if it is non-empty and every member is valid. A
/// dotted PID must be given as text: a float such as `1.10` would lose its
/// trailing zero when written, so only whole floats are accepted, as bare
/// digits.
#[must_use]
pub fn is_valid_pid(value: &ParamValue) -> bool {
    match value {
        ParamValue::List(items) => !items.is_empty() && items.iter().all(is_pid_scalar),
        scalar => is_pid_scalar(scalar),
    }
}

fn is_pid_scalar(value: &ParamValue) -> bool {
    match value {
        ParamValue::Integer(i) => *i >= 0,
        ParamValue::Float(_) => value.as_integer().is_some_and(|i| i >= 0),
        ParamValue::Text(s) => is_pid_text(s),
        ParamValue::List(_) => false,
    }
}

fn is_pid_text(s: &str) -> bool {
    let is_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    match s.split_once('.') {
        Some((pid, source)) => is_digits(pid) && is_digits(source),
        None => is_digits(s),
    }
}

/// ## Summary
/// INDEX (RFC 6715 §3.1): an integer of at least 1.
#[must_use]
pub fn is_valid_index(value: &ParamValue) -> bool {
    value.as_integer().is_some_and(|i| i >= 1)
}

/// ## Summary
/// CC (RFC 8605 §3.1): an ISO 3166-1 alpha-2 country code in uppercase.
#[must_use]
pub fn is_valid_cc(value: &ParamValue) -> bool {
    value
        .as_text()
        .is_some_and(|s| s.len() == 2 && s.bytes().all(|b| b.is_ascii_uppercase()))
}

/// ## Summary
/// SCRIPT (RFC 9554 §4.1): a four-letter ISO 15924 script subtag.
///
/// Letter case is not significant.
#[must_use]
pub fn is_valid_script(value: &ParamValue) -> bool {
    value
        .as_text()
        .is_some_and(|s| s.len() == 4 && s.bytes().all(|b| b.is_ascii_alphabetic()))
}

/// ## Summary
/// Property group: a non-negative integer or a string.
///
/// The character rules for named groups are applied by
/// [`GroupId::validate`](crate::rfc::vcard::core::GroupId::validate).
#[must_use]
pub fn is_valid_group(value: &ParamValue) -> bool {
    match value {
        ParamValue::Text(_) => true,
        ParamValue::List(_) => false,
        number => number.as_integer().is_some_and(|i| i >= 0),
    }
}
