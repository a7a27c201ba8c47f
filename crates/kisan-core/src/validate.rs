//! Input constraints
//!
//! The same rules the form inputs declare through `required`, `pattern` and
//! `maxlength`, so that a submission built outside a browser is held to them
//! too.

use crate::error::{Result, SiteError};

/// `[0-9]{10}`
pub fn is_phone_number(value: &str) -> bool {
    value.len() == 10 && value.bytes().all(|b| b.is_ascii_digit())
}

/// `^[2-9][0-9]{11}$`
pub fn is_aadhaar_number(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 12
        && (b'2'..=b'9').contains(&bytes[0])
        && bytes[1..].iter().all(u8::is_ascii_digit)
}

/// Indian mobile number: optional `+91` / `91` / `0` prefix (the country
/// code may be followed by a dash), then a leading 7, 8 or 9 and nine more
/// digits.
pub fn is_indian_mobile(value: &str) -> bool {
    let value = value.trim();
    let with_country_code = ["+91", "0091", "091", "91"]
        .into_iter()
        .filter_map(|prefix| value.strip_prefix(prefix))
        .map(|rest| {
            rest.trim_start()
                .strip_prefix('-')
                .map_or(rest, str::trim_start)
        });
    let with_trunk_zero = value.strip_prefix('0');

    std::iter::once(value)
        .chain(with_country_code)
        .chain(with_trunk_zero)
        .any(is_mobile_digits)
}

fn is_mobile_digits(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && matches!(bytes[0], b'7' | b'8' | b'9')
        && bytes.iter().all(u8::is_ascii_digit)
}

/// Same shape `<input type="email">` accepts: `local@domain`, where the
/// domain is one or more dot-separated labels (`ramesh@localhost` passes)
pub fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !value.chars().any(char::is_whitespace)
        && domain.split('.').all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
        })
}

/// Native `required`: any non-empty value, whitespace included
pub(crate) fn required(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(SiteError::validation(field, "this field is required"));
    }
    Ok(())
}

pub(crate) fn phone(field: &'static str, value: &str) -> Result<()> {
    required(field, value)?;
    if !is_phone_number(value) {
        return Err(SiteError::validation(field, "enter a 10-digit phone number"));
    }
    Ok(())
}

pub(crate) fn optional_email(field: &'static str, value: &str) -> Result<()> {
    if !value.is_empty() && !is_email(value) {
        return Err(SiteError::validation(field, "enter a valid email address"));
    }
    Ok(())
}

pub(crate) fn optional_aadhaar(field: &'static str, value: &str) -> Result<()> {
    if !value.is_empty() && !is_aadhaar_number(value) {
        return Err(SiteError::validation(
            field,
            "enter a 12-digit Aadhaar number starting with 2-9",
        ));
    }
    Ok(())
}
