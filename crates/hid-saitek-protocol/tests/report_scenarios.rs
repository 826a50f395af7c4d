//! End-to-end protocol scenarios over wire bytes: decode sequences, text
//! round trips, and feature-report assembly.

use flight_panel_hid_saitek_protocol::{
    DecodeResult, MULTI_FEATURE_REPORT_LEN, MULTI_WRITE_LEN, MultiPanelButton, MultiPanelMode,
    MultiPanelState, RADIO_FEATURE_REPORT_LEN, RadioPanelMode, RadioPanelState, ResetMode,
    build_multi_feature_report, build_radio_feature_report, format_display, format_multi,
    format_radio, parse_multi, report_ids,
};

fn multi(reports: &[[u8; 3]]) -> MultiPanelState {
    let mut state = MultiPanelState::new();
    for report in reports {
        assert_eq!(
            state.apply_report(report_ids::INPUT, report_ids::INPUT_TYPE, report),
            DecodeResult::Accepted
        );
    }
    state
}

fn radio(reports: &[[u8; 3]]) -> RadioPanelState {
    let mut state = RadioPanelState::new();
    for report in reports {
        assert_eq!(
            state.apply_report(report_ids::INPUT, report_ids::INPUT_TYPE, report),
            DecodeResult::Accepted
        );
    }
    state
}

#[test]
fn test_alt_bit_alone_selects_alt_and_nothing_else() {
    let state = multi(&[[0x01, 0x00, 0x00]]);

    assert_eq!(state.mode, MultiPanelMode::Alt);
    for button in MultiPanelButton::ALL {
        assert!(!state.button_pressed(button));
        assert_eq!(state.button_presses(button), 0);
    }
    assert_eq!(state.knob.value(), 0);
    assert_eq!(state.flaps.value(), 0);
    assert_eq!(state.trim.value(), 0);
}

#[test]
fn test_hdg_press_release_press_counts_two() {
    let state = multi(&[[0x00, 0x01, 0x00], [0x00, 0x00, 0x00], [0x00, 0x01, 0x00]]);
    assert_eq!(state.button_presses(MultiPanelButton::Hdg), 2);
}

#[test]
fn test_alt_and_vs_bits_resolve_alt() {
    let state = multi(&[[0x03, 0x00, 0x00]]);
    assert_eq!(state.mode, MultiPanelMode::Alt);
}

#[test]
fn test_radio_stack_bit_to_stack_mapping() {
    let state = radio(&[[0x01, 0x00, 0x00]]);
    assert_eq!(state.stacks[0].mode, RadioPanelMode::Com1);

    let state = radio(&[[0x80, 0x00, 0x00]]);
    assert_eq!(state.stacks[1].mode, RadioPanelMode::Com1);
    assert_eq!(state.stacks[0].mode, RadioPanelMode::None);
}

#[test]
fn test_display_write_formats_back_exactly() {
    let mut state = MultiPanelState::new();
    let mut mode = ResetMode::Accumulate;

    let mut buf = vec![b' '; MULTI_WRITE_LEN];
    buf[..5].copy_from_slice(b"12345");
    buf[28] = b'N';

    parse_multi(&mut state, &mut mode, &buf).expect("write should parse");
    assert_eq!(format_display(&state.displays[0]), "12345");
}

#[test]
fn test_multi_decode_write_read_feature_cycle() {
    // a pilot dials ALT mode, presses AP twice, rolls the trim wheel down
    let mut state = multi(&[
        [0x01 | 0x80, 0x00, 0x00],
        [0x01, 0x00, 0x04],
        [0x01 | 0x80, 0x00, 0x04],
        [0x01, 0x00, 0x00],
    ]);

    let line = format_multi(&state, ResetMode::Accumulate);
    assert!(line.contains(" ALT  N "));
    assert!(line.contains("AP:02"));
    assert!(line.contains("TRIM:-01"));

    // host writes a new altitude readout and lights the AP lamp (bit 7)
    let mut mode = ResetMode::Accumulate;
    let mut buf = Vec::new();
    buf.extend_from_slice(b"10500     ");
    buf.extend_from_slice(b"-700      ");
    buf.extend_from_slice(b"00000001");
    buf.push(b'N');
    parse_multi(&mut state, &mut mode, &buf).expect("write should parse");

    let mut report = [0u8; MULTI_FEATURE_REPORT_LEN];
    build_multi_feature_report(&state, &mut report);
    assert_eq!(report[0], 0x00);
    assert_eq!(report[1..6], [0x01, 0x00, 0x05, 0x00, 0x00]);
    assert_eq!(report[11], 0x80);
}

#[test]
fn test_radio_swap_and_encoders_render_and_encode() {
    let state = radio(&[
        [0x01, 0x80 | 0x01, 0x01],
        [0x01, 0x01, 0x00],
        [0x01, 0x01, 0x10],
    ]);

    // stack 1 swap pressed once, stack 0 outer +1, stack 1 outer +1
    let line = format_radio(&state, ResetMode::Accumulate);
    assert!(line.contains("COM1 COM2 N"));
    assert!(line.contains("SWAP1:01"));
    assert!(line.contains("S0OUT:+01"));
    assert!(line.contains("S1OUT:+01"));

    let mut report = [0u8; RADIO_FEATURE_REPORT_LEN];
    build_radio_feature_report(&state, &mut report);
    assert_eq!(report.len(), RADIO_FEATURE_REPORT_LEN);
    assert_eq!(report[0], 0x00);
}
