//! Tolerant field primitives shared by every sentence codec.
//!
//! Many fields in this protocol family are legitimately blank and the
//! acoustic channel is noisy, so scalar parsing never fails: a missing,
//! empty or garbled field yields `0`. The `_opt` variants keep the
//! distinction between a blank field (`None`) and a present one.

use std::fmt;

/// Separator between hops of an address chain.
pub const ADDRESS_SEPARATOR: char = '>';

/// Parse a decimal field, yielding `0.0` when absent or garbled.
///
/// Accepts an optional sign, leading zeros and unpadded forms, so `+03.1`
/// parses to `3.1` and `-000.4` to `-0.4`.
pub fn parse_float_safe(field: Option<&str>) -> f64 {
    parse_float_opt(field).unwrap_or(0.0)
}

/// Like [`parse_float_safe`], but `None` when the field is missing or blank.
pub fn parse_float_opt(field: Option<&str>) -> Option<f64> {
    let text = present(field)?;
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => Some(0.0),
    }
}

/// Parse an integer field, truncating any fractional part.
///
/// Yields `0` when the field is absent, garbled or out of range.
pub fn parse_int_safe(field: Option<&str>) -> i64 {
    parse_int_opt(field).unwrap_or(0)
}

/// Like [`parse_int_safe`], but `None` when the field is missing or blank.
pub fn parse_int_opt(field: Option<&str>) -> Option<i64> {
    let text = present(field)?;
    if let Ok(value) = text.parse::<i64>() {
        return Some(value);
    }
    let value = match text.parse::<f64>() {
        Ok(value) if value.is_finite() && value.abs() < i64::MAX as f64 => value.trunc() as i64,
        _ => 0,
    };
    Some(value)
}

/// Parse an integer field into a narrower type, using the type's default
/// when the value does not fit.
pub fn parse_int_as<T>(field: Option<&str>) -> T
where
    T: TryFrom<i64> + Default,
{
    T::try_from(parse_int_safe(field)).unwrap_or_default()
}

/// Source and hop path decoded from an `a>b>c` field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressChain {
    /// Source (from) address.
    pub src: u32,
    /// Destinations in hop order.
    pub destinations: Vec<u32>,
}

impl AddressChain {
    pub fn new(src: u32, destinations: Vec<u32>) -> Self {
        Self { src, destinations }
    }
}

impl fmt::Display for AddressChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_address_chain(self.src, &self.destinations))
    }
}

/// Parse a `src>dst1>dst2...` address chain.
///
/// Hop order is preserved exactly. Non-numeric tokens become `0`.
pub fn parse_src_destinations(field: Option<&str>) -> AddressChain {
    let mut tokens = field.unwrap_or_default().split(ADDRESS_SEPARATOR);
    let src = parse_int_as(tokens.next());
    let destinations = tokens.map(|token| parse_int_as(Some(token))).collect();
    AddressChain { src, destinations }
}

/// Render a float with the shortest representation that parses back exactly.
///
/// Non-finite values render as an empty field.
pub fn format_float(value: f64) -> String {
    if value.is_finite() {
        value.to_string()
    } else {
        String::new()
    }
}

/// Render a float with at least `decimals` places (`272.3`, `272.35`).
///
/// Starts from [`format_float`] and only ever appends zeros, so the value
/// parses back exactly.
pub fn format_min_decimals(value: f64, decimals: usize) -> String {
    let mut out = format_float(value);
    if out.is_empty() || decimals == 0 {
        return out;
    }
    let places = match out.find('.') {
        Some(dot) => out.len() - dot - 1,
        None => {
            out.push('.');
            0
        }
    };
    out.extend(std::iter::repeat('0').take(decimals.saturating_sub(places)));
    out
}

/// Render a float signed and zero-padded to `width` (`+03.3`, `-000.5`).
///
/// Extra precision widens the field instead of being rounded away.
pub fn format_signed_padded(value: f64, width: usize, decimals: usize) -> String {
    if !value.is_finite() {
        return String::new();
    }
    let sign = if value < 0.0 { '-' } else { '+' };
    let digits = format_min_decimals(value.abs(), decimals);
    let pad = width.saturating_sub(digits.len() + 1);
    let mut out = String::with_capacity(width.max(digits.len() + 1));
    out.push(sign);
    out.extend(std::iter::repeat('0').take(pad));
    out.push_str(&digits);
    out
}

/// Render an optional attribute, leaving the field empty when unset.
pub fn format_opt<T>(value: Option<T>, format: impl FnOnce(T) -> String) -> String {
    value.map(format).unwrap_or_default()
}

/// Render an address chain as `src>dst1>dst2...`.
pub fn format_address_chain(src: u32, destinations: &[u32]) -> String {
    let mut out = src.to_string();
    for hop in destinations {
        out.push(ADDRESS_SEPARATOR);
        out.push_str(&hop.to_string());
    }
    out
}

fn present(field: Option<&str>) -> Option<&str> {
    field.map(str::trim).filter(|text| !text.is_empty())
}
