//! 5-digit display parsing and formatting.
//!
//! All functions are pure and allocation is bounded by the 10-character
//! text form of one display.

use crate::digit;

/// Digits per display, both panels.
pub const DISPLAY_DIGITS: usize = 5;

/// Maximum text length of one display: every digit followed by a point.
pub const DISPLAY_TEXT_MAX: usize = DISPLAY_DIGITS * 2;

/// Parse display text into digit codes.
///
/// Consumes at most [`DISPLAY_TEXT_MAX`] bytes of `text`. A `'.'`
/// immediately following a consumed character sets that digit's point flag;
/// a `'.'` opening the field occupies slot 0 as a blank-with-point digit.
/// Once all [`DISPLAY_DIGITS`] base slots are filled, a directly trailing
/// `'.'` still sets the last digit's flag; any other trailing characters end
/// the parse. Short input leaves the remaining slots blank.
pub fn parse_display(text: &[u8], out: &mut [u8; DISPLAY_DIGITS]) {
    out.fill(digit::DIGIT_BLANK);
    let mut slot = 0usize;
    for &b in text.iter().take(DISPLAY_TEXT_MAX) {
        if b == b'.' {
            if slot == 0 {
                out[0] = digit::with_dot(digit::DIGIT_BLANK);
                slot = 1;
            } else {
                out[slot - 1] = digit::with_dot(out[slot - 1]);
            }
        } else if slot < DISPLAY_DIGITS {
            out[slot] = digit::encode_char(b as char);
            slot += 1;
        } else {
            break;
        }
    }
}

/// Format digit codes as display text.
///
/// One character per digit plus a `'.'` after each digit whose point flag
/// is set; the result is 5 to 10 characters.
pub fn format_display(digits: &[u8; DISPLAY_DIGITS]) -> String {
    let mut s = String::with_capacity(DISPLAY_TEXT_MAX);
    for &code in digits {
        s.push(digit::decode_char(code));
        if digit::has_dot(code) {
            s.push('.');
        }
    }
    s
}

/// [`format_display`] padded with spaces to exactly [`DISPLAY_TEXT_MAX`]
/// characters, for fixed-field layouts.
pub fn format_display_padded(digits: &[u8; DISPLAY_DIGITS]) -> String {
    let mut s = format_display(digits);
    while s.len() < DISPLAY_TEXT_MAX {
        s.push(' ');
    }
    s
}
