//! Text parsing for [`Decimal`] values.

use num_traits::Float;

use crate::constants::{COMMAS_ARE_DECIMAL_POINTS, IGNORE_COMMAS};
use crate::{f_mag_log10, sign, Decimal};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
/// An error that can occur when parsing a [`Decimal`].
pub enum FromStrError {
    /// Tried to parse with a radix that isn't base 10. Holds the base that was attempted to be parsed in.
    IncorrectRadix(u32),
    /// Encountered malformed input. Holds the index of where the parsing failed.
    MalformedInput(usize),
}

// Recognized notations, tried in order on the trimmed, lowercased,
// de-comma'd text. Reported error offsets index into that cleaned text.
// <root>    ::= "nan" | <sign>? ("infinity" | "inf")
//             | <hyper> | <tower> | <e-tower> | <chain>
// <hyper>   ::= <float> ("^^^" | "^^" | "^") <float> (";" <float>)?
// <tower>   ::= <sign>? <float> ("pt" | "p") "("? <float> ")"?
//             | <sign>? "("? <float> ")"? "f" "("? <float> ")"?
// <e-tower> ::= <sign>? "(e^" <float> ")" <float>
// <chain>   ::= <float> | <sign>? <segment>? ("e" <segment>?)+
// A hyperoperator or tower whose operands don't come out as finite
// floats is skipped rather than rejected, giving the chain forms a
// chance at the text.

pub(crate) fn parse_decimal(string: &str, linear_hyper4: bool) -> Result<Decimal, FromStrError> {
    let mut text = string.trim().to_lowercase();
    if IGNORE_COMMAS {
        text = text.replace(',', "");
    } else if COMMAS_ARE_DECIMAL_POINTS {
        text = text.replace(',', ".");
    }
    parse_cleaned(&text, linear_hyper4)
}

fn parse_cleaned(text: &str, linear: bool) -> Result<Decimal, FromStrError> {
    match text {
        "nan" => return Ok(Decimal::NAN),
        "infinity" | "inf" => return Ok(Decimal::INFINITY),
        "-infinity" | "-inf" => return Ok(Decimal::NEG_INFINITY),
        _ => {}
    }

    if let Some(result) = parse_hyper(text, linear) {
        return Ok(result);
    }
    if let Some(result) = parse_tower(text, linear) {
        return Ok(result);
    }
    parse_chain(text)
}

// base^^^height, base^^height and base^exponent, with an optional
// ";payload" after the tower height.
fn parse_hyper(text: &str, linear: bool) -> Option<Decimal> {
    if let Some((base, rest)) = split_pair(text, "^^^") {
        let (height, payload) = split_height(rest);
        if let (Some(base), Some(height)) = (parse_operand(base), parse_operand(height)) {
            return Some(Decimal::from(base).pentate(height, Decimal::from(payload), linear));
        }
    }
    if let Some((base, rest)) = split_pair(text, "^^") {
        let (height, payload) = split_height(rest);
        if let (Some(base), Some(height)) = (parse_operand(base), parse_operand(height)) {
            return Some(Decimal::from(base).tetrate(height, Decimal::from(payload), linear));
        }
    }
    if let Some((base, exponent)) = split_pair(text, "^") {
        if let (Some(base), Some(exponent)) = (parse_operand(base), parse_operand(exponent)) {
            return Some(Decimal::from(base).pow(Decimal::from(exponent)));
        }
    }
    None
}

// NptX and NpX, base-10 towers of height N topped by X, and XfN with
// the payload written first. Parentheses around payload and height are
// decorative.
fn parse_tower(text: &str, linear: bool) -> Option<Decimal> {
    for separator in ["pt", "p"] {
        if let Some((head, tail)) = split_pair(text, separator) {
            let (negative, height) = split_sign(head);
            if let Some(height) = parse_operand(height) {
                let payload = parse_payload(strip_parens(tail));
                let mut result = Decimal::TEN.tetrate(height, Decimal::from(payload), linear);
                if negative {
                    result = -result;
                }
                return Some(result);
            }
        }
    }
    if let Some((head, tail)) = split_pair(text, "f") {
        let (negative, payload) = split_sign(head);
        if let Some(height) = parse_operand(strip_parens(tail)) {
            let payload = parse_payload(strip_parens(payload));
            let mut result = Decimal::TEN.tetrate(height, Decimal::from(payload), linear);
            if negative {
                result = -result;
            }
            return Some(result);
        }
    }
    None
}

// The general scientific chain: mantissa and exponent segments joined
// by "e"s, with "(e^N)X" standing in for N of them once towers get that
// tall. Only the first and the last two segments carry information; the
// count of "e"s is what sets the layer.
fn parse_chain(text: &str) -> Result<Decimal, FromStrError> {
    {
        let (negative, body) = split_sign(text);
        if let Some(tail) = body.strip_prefix("(e^") {
            let offset = text.len() - tail.len();
            let Some((layer_text, mag_text)) = tail.split_once(')') else {
                return Err(FromStrError::MalformedInput(text.len()));
            };
            let layer = parse_float(layer_text, offset)?;
            let mag = parse_float(mag_text, offset + layer_text.len() + 1)?;
            let sign = if negative { -1.0 } else { 1.0 };
            return Ok(Decimal::from_parts(sign, layer, mag).normalized());
        }
    }

    let e_count = text.matches('e').count();
    if e_count == 0 {
        let value = parse_float(text, 0)?;
        if !value.is_finite() {
            // Decimal expansions too long for a float have always
            // flushed to zero here.
            return Ok(Decimal::ZERO);
        }
        return Ok(Decimal::from(value));
    }
    if e_count == 1 {
        // One "e" is usually just a float, but floats round tiny
        // exponents to zero and big ones to infinity. Those fall to the
        // layered path below, which handles them losslessly.
        if let Ok(value) = text.parse::<f64>() {
            if value.is_finite() && value != 0.0 {
                return Ok(Decimal::from(value));
            }
        }
    }

    let Some(first_e) = text.find('e') else {
        return Err(FromStrError::MalformedInput(0));
    };
    let Some(last_e) = text.rfind('e') else {
        return Err(FromStrError::MalformedInput(0));
    };
    let mantissa_text = &text[..first_e];
    let mut exponent = parse_float(&text[last_e + 1..], last_e + 1)?;
    if e_count >= 2 {
        // The segment before the final exponent folds into it in log
        // space. Anything before that is too small to matter.
        let before = &text[..last_e];
        if let Some(previous_e) = before.rfind('e') {
            if let Ok(middle) = before[previous_e + 1..].parse::<f64>() {
                if middle.is_finite() {
                    exponent *= sign(middle);
                    exponent += f_mag_log10(middle);
                }
            }
        }
    }

    if mantissa_text.is_empty() || mantissa_text == "-" {
        // A bare run of "e"s climbs one layer per letter. The layer is
        // kept as written rather than renormalized so that "eee5" reads
        // back as "eee5" and not as its layer-2 alias.
        let sign = if mantissa_text == "-" { -1.0 } else { 1.0 };
        return Ok(Decimal::from_parts(sign, e_count as f64, exponent));
    }

    let mantissa = parse_float(mantissa_text, 0)?;
    if mantissa == 0.0 {
        return Ok(Decimal::ZERO);
    }
    if !mantissa.is_finite() {
        return Err(FromStrError::MalformedInput(0));
    }
    if e_count == 1 {
        return Ok(
            Decimal::from_parts(sign(mantissa), 1.0, exponent + mantissa.abs().log10())
                .normalized(),
        );
    }
    if e_count == 2 {
        // Small enough that the mantissa still shifts the result.
        return Ok(Decimal::from_parts(1.0, 2.0, exponent).normalized() * Decimal::from(mantissa));
    }
    // At three "e"s and up the mantissa is beyond the result's precision;
    // only its sign survives.
    Ok(Decimal::from_parts(sign(mantissa), e_count as f64, exponent))
}

/// Splits on `separator` when it occurs exactly once.
fn split_pair<'s>(text: &'s str, separator: &str) -> Option<(&'s str, &'s str)> {
    let (head, tail) = text.split_once(separator)?;
    if tail.contains(separator) {
        return None;
    }
    Some((head, tail))
}

fn split_sign(text: &str) -> (bool, &str) {
    match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    }
}

fn split_height(text: &str) -> (&str, f64) {
    let Some((height, payload)) = split_pair(text, ";") else {
        return (text, 1.0);
    };
    (height, parse_payload(payload))
}

fn strip_parens(segment: &str) -> &str {
    let segment = segment.strip_prefix('(').unwrap_or(segment);
    segment.strip_suffix(')').unwrap_or(segment)
}

fn parse_operand(segment: &str) -> Option<f64> {
    segment.parse().ok().filter(|value: &f64| value.is_finite())
}

// Tower payloads default to 1 when absent or unusable.
fn parse_payload(segment: &str) -> f64 {
    match segment.parse::<f64>() {
        Ok(payload) if payload.is_finite() => payload,
        _ => 1.0,
    }
}

fn parse_float(segment: &str, offset: usize) -> Result<f64, FromStrError> {
    segment
        .parse()
        .map_err(|_| FromStrError::MalformedInput(offset))
}
