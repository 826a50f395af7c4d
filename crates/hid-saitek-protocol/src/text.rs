//! Fixed-field text serialization of panel state.
//!
//! The read direction renders the full decoded state as one line; the write
//! direction consumes a fixed layout that sets the outgoing displays, the
//! indicator lights (multi panel) and the session's reset-mode flag. Field
//! offsets are part of the contract and pinned by tests.
//!
//! Multi panel read line:
//!
//! ```text
//! {disp0:10} {disp1:10} {mode:4} {flag} HDG:pc NAV:pc IAS:pc ALT:pc VS:pc \
//! APR:pc REV:pc AP:pc AT:b KNOB:+nn FLAPS:+nn TRIM:+nn LEDS:llllllll
//! ```
//!
//! with `p` the current level, `c` the press count, `b` a 0/1 level, `+nn`
//! a sign and two digits, and `l` one character per light.
//!
//! Multi panel write layout (29 bytes): bytes 0..10 display 0 text, 10..20
//! display 1 text, 20..28 one `'1'`/`'0'` per light (any other character
//! leaves that light unchanged), byte 28 the `'N'`/`'R'` flag (any other
//! character leaves the mode unchanged).
//!
//! Radio panel read line:
//!
//! ```text
//! {disp0:10} {disp1:10} {disp2:10} {disp3:10} {mode0:4} {mode1:4} {flag} \
//! SWAP0:pc SWAP1:pc S0OUT:+nn S0INN:+nn S1OUT:+nn S1INN:+nn
//! ```
//!
//! Radio panel write layout (41 bytes): four 10-byte display fields in wire
//! order, then the flag byte.

use thiserror::Error;
use tracing::warn;

use crate::display::{DISPLAY_TEXT_MAX, format_display_padded, parse_display};
use crate::multi::{MULTI_BUTTON_COUNT, MULTI_DISPLAY_COUNT, MultiPanelButton, MultiPanelState};
use crate::radio::{RADIO_DISPLAY_COUNT, RadioPanelState};
use crate::types::ResetMode;

/// Required write-payload length for the multi panel.
pub const MULTI_WRITE_LEN: usize =
    MULTI_DISPLAY_COUNT * DISPLAY_TEXT_MAX + MULTI_BUTTON_COUNT + 1;

/// Required write-payload length for the radio panel.
pub const RADIO_WRITE_LEN: usize = RADIO_DISPLAY_COUNT * DISPLAY_TEXT_MAX + 1;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFormatError {
    #[error("write payload too short: expected {expected} bytes, got {actual}")]
    BufferTooShort { expected: usize, actual: usize },
}

/// Render the multi panel state as its fixed-field line.
///
/// Pure; when the session runs in [`ResetMode::ResetAfterRead`] the caller
/// zeroes the counters after taking this string.
pub fn format_multi(state: &MultiPanelState, mode: ResetMode) -> String {
    let mut out = String::with_capacity(144);
    out.push_str(&format_display_padded(&state.displays[0]));
    out.push(' ');
    out.push_str(&format_display_padded(&state.displays[1]));
    out.push(' ');
    out.push_str(state.mode.abbrev());
    out.push(' ');
    out.push(mode.flag_char());
    for button in MultiPanelButton::ALL {
        out.push(' ');
        out.push_str(button.label());
        out.push(':');
        out.push(flag_digit(state.button_pressed(button)));
        out.push(count_digit(state.button_presses(button)));
    }
    out.push_str(&format!(
        " AT:{} KNOB:{:+03} FLAPS:{:+03} TRIM:{:+03} LEDS:",
        u8::from(state.autothrottle),
        state.knob.value(),
        state.flaps.value(),
        state.trim.value(),
    ));
    for index in 0..MULTI_BUTTON_COUNT {
        out.push(flag_digit(state.light(index)));
    }
    out.push('\n');
    out
}

/// Render the radio panel state as its fixed-field line. Pure, as above.
pub fn format_radio(state: &RadioPanelState, mode: ResetMode) -> String {
    let mut out = String::with_capacity(128);
    for display in &state.displays {
        out.push_str(&format_display_padded(display));
        out.push(' ');
    }
    out.push_str(state.stacks[0].mode.abbrev());
    out.push(' ');
    out.push_str(state.stacks[1].mode.abbrev());
    out.push(' ');
    out.push(mode.flag_char());
    for (index, stack) in state.stacks.iter().enumerate() {
        out.push_str(&format!(
            " SWAP{index}:{}{}",
            flag_digit(stack.swap_pressed()),
            count_digit(stack.swap_presses()),
        ));
    }
    out.push_str(&format!(
        " S0OUT:{:+03} S0INN:{:+03} S1OUT:{:+03} S1INN:{:+03}",
        state.stacks[0].outer.value(),
        state.stacks[0].inner.value(),
        state.stacks[1].outer.value(),
        state.stacks[1].inner.value(),
    ));
    out.push('\n');
    out
}

/// Apply a multi panel write payload.
///
/// Display fields are applied as they parse; if the payload then falls short
/// of [`MULTI_WRITE_LEN`] the call fails with the displays already updated
/// and lights/flag untouched. Excess bytes are ignored with a diagnostic.
pub fn parse_multi(
    state: &mut MultiPanelState,
    mode: &mut ResetMode,
    buf: &[u8],
) -> Result<usize, TextFormatError> {
    let mut offset = 0;
    for display in 0..MULTI_DISPLAY_COUNT {
        offset += parse_display_field(&mut state.displays[display], buf, offset)?;
    }
    if buf.len() < MULTI_WRITE_LEN {
        return Err(TextFormatError::BufferTooShort {
            expected: MULTI_WRITE_LEN,
            actual: buf.len(),
        });
    }

    for index in 0..MULTI_BUTTON_COUNT {
        match buf[offset + index] {
            b'1' => state.set_light(index, true),
            b'0' => state.set_light(index, false),
            _ => {}
        }
    }
    offset += MULTI_BUTTON_COUNT;

    if let Some(new_mode) = ResetMode::from_flag_char(buf[offset] as char) {
        *mode = new_mode;
    }
    offset += 1;

    warn_on_excess(buf.len(), offset, "multi");
    Ok(offset)
}

/// Apply a radio panel write payload; same shortfall semantics as
/// [`parse_multi`].
pub fn parse_radio(
    state: &mut RadioPanelState,
    mode: &mut ResetMode,
    buf: &[u8],
) -> Result<usize, TextFormatError> {
    let mut offset = 0;
    for display in 0..RADIO_DISPLAY_COUNT {
        offset += parse_display_field(&mut state.displays[display], buf, offset)?;
    }
    if buf.len() < RADIO_WRITE_LEN {
        return Err(TextFormatError::BufferTooShort {
            expected: RADIO_WRITE_LEN,
            actual: buf.len(),
        });
    }

    if let Some(new_mode) = ResetMode::from_flag_char(buf[offset] as char) {
        *mode = new_mode;
    }
    offset += 1;

    warn_on_excess(buf.len(), offset, "radio");
    Ok(offset)
}

fn parse_display_field(
    digits: &mut [u8; crate::display::DISPLAY_DIGITS],
    buf: &[u8],
    offset: usize,
) -> Result<usize, TextFormatError> {
    let Some(field) = buf.get(offset..offset + DISPLAY_TEXT_MAX) else {
        return Err(TextFormatError::BufferTooShort {
            expected: offset + DISPLAY_TEXT_MAX,
            actual: buf.len(),
        });
    };
    parse_display(field, digits);
    Ok(DISPLAY_TEXT_MAX)
}

fn warn_on_excess(len: usize, consumed: usize, panel: &str) {
    if len > consumed {
        warn!(panel, excess = len - consumed, "ignoring trailing bytes in panel write");
    }
}

fn flag_digit(set: bool) -> char {
    if set { '1' } else { '0' }
}

fn count_digit(count: u8) -> char {
    char::from_digit(u32::from(count), 10).unwrap_or('?')
}
