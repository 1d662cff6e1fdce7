//! Operand lexing and parsing.
//!
//! Turns the text after a mnemonic into typed operands: integer literals,
//! `offset(base)` memory operands, label expressions (`label`, `label+N`,
//! `label-N`), and quoted string literals.

use crate::asm::symbols::SymbolTable;
use crate::common::error::EncodingError;
use crate::isa::abi::parse_register;

/// Splits an instruction line into its lower-cased mnemonic and operand tokens.
///
/// Operands are separated by commas and/or whitespace.
pub fn split_instruction(text: &str) -> (String, Vec<&str>) {
    let text = text.trim();
    let (mnemonic, rest) = text
        .split_once(char::is_whitespace)
        .unwrap_or((text, ""));
    let operands = rest
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();
    (mnemonic.to_ascii_lowercase(), operands)
}

/// Parses an integer literal: decimal, `0x` hex, or `0b` binary, with an optional sign.
pub fn parse_int(token: &str) -> Option<i64> {
    let t = token.trim();
    let (negative, body) = match t.as_bytes().first() {
        Some(b'-') => (true, &t[1..]),
        Some(b'+') => (false, &t[1..]),
        _ => (false, t),
    };
    // `from_str_radix` would accept a second sign after the prefix.
    let radix = |digits: &str, radix: u32| {
        if digits.starts_with(['+', '-']) {
            None
        } else {
            i64::from_str_radix(digits, radix).ok()
        }
    };
    let magnitude = if let Some(hex) = body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        radix(hex, 16)?
    } else if let Some(bin) = body.strip_prefix("0b").or_else(|| body.strip_prefix("0B")) {
        radix(bin, 2)?
    } else if !body.is_empty() && body.bytes().all(|b| b.is_ascii_digit()) {
        body.parse::<i64>().ok()?
    } else {
        return None;
    };
    Some(if negative { -magnitude } else { magnitude })
}

/// Parses an integer literal and checks it against `min..=max`.
///
/// # Errors
///
/// [`EncodingError::InvalidImmediate`] when the token is not a literal and
/// [`EncodingError::ImmediateOutOfRange`] when it does not fit.
pub fn parse_int_in(token: &str, min: i64, max: i64) -> Result<i64, EncodingError> {
    let v = parse_int(token).ok_or_else(|| EncodingError::InvalidImmediate(token.to_string()))?;
    if (min..=max).contains(&v) {
        Ok(v)
    } else {
        Err(EncodingError::ImmediateOutOfRange {
            token: token.to_string(),
            min,
            max,
        })
    }
}

/// Returns `true` if `name` is a valid label identifier.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '.')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
}

/// Returns `true` if the token is a label expression rather than a literal or
/// an `offset(base)` operand.
pub fn is_label_expr(token: &str) -> bool {
    !token.contains('(') && parse_int(token).is_none() && is_identifier(label_part(token))
}

fn label_part(token: &str) -> &str {
    token
        .find(['+', '-'])
        .map_or(token, |idx| &token[..idx])
}

/// Resolves an address operand: a literal or a label expression.
///
/// # Errors
///
/// [`EncodingError::UndefinedLabel`] for unknown labels and
/// [`EncodingError::InvalidImmediate`] for a malformed `±N` suffix.
pub fn resolve_address(token: &str, symbols: &SymbolTable) -> Result<u32, EncodingError> {
    if let Some(v) = parse_int(token) {
        return Ok(v as u32);
    }
    let label = label_part(token);
    if !is_identifier(label) {
        return Err(EncodingError::MalformedOperand(token.to_string()));
    }
    let base = symbols
        .resolve(label)
        .ok_or_else(|| EncodingError::UndefinedLabel(label.to_string()))?;
    let suffix = &token[label.len()..];
    if suffix.is_empty() {
        return Ok(base);
    }
    let offset =
        parse_int(suffix).ok_or_else(|| EncodingError::InvalidImmediate(suffix.to_string()))?;
    Ok(base.wrapping_add(offset as u32))
}

/// Parses an `offset(base)` memory operand into `(offset, base register)`.
///
/// The offset may be omitted (`($sp)`); a bare literal means `literal($zero)`.
///
/// # Errors
///
/// [`EncodingError::MalformedOperand`] for anything else, or the register and
/// immediate errors of the parts.
pub fn parse_mem_operand(token: &str) -> Result<(i64, usize), EncodingError> {
    let Some(open) = token.find('(') else {
        let offset = parse_int_in(token, -32768, 32767)?;
        return Ok((offset, 0));
    };
    let close = token
        .rfind(')')
        .filter(|&c| c > open && c == token.len() - 1)
        .ok_or_else(|| EncodingError::MalformedOperand(token.to_string()))?;
    let offset_text = token[..open].trim();
    let offset = if offset_text.is_empty() {
        0
    } else {
        parse_int_in(offset_text, -32768, 32767)?
    };
    let base = parse_register(&token[open + 1..close])?;
    Ok((offset, base))
}

/// Parses a double-quoted string literal, decoding `\n \t \0 \\ \"`.
///
/// # Errors
///
/// [`EncodingError::MalformedString`] for missing quotes or unknown escapes.
pub fn parse_string_literal(text: &str) -> Result<Vec<u8>, EncodingError> {
    let malformed = || EncodingError::MalformedString(text.to_string());
    let inner = text
        .trim()
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .ok_or_else(malformed)?;

    let mut out = Vec::with_capacity(inner.len());
    let mut bytes = inner.bytes();
    while let Some(b) = bytes.next() {
        match b {
            b'\\' => out.push(match bytes.next() {
                Some(b'n') => b'\n',
                Some(b't') => b'\t',
                Some(b'0') => 0,
                Some(b'\\') => b'\\',
                Some(b'"') => b'"',
                _ => return Err(malformed()),
            }),
            b'"' => return Err(malformed()),
            other => out.push(other),
        }
    }
    Ok(out)
}
