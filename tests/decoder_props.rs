//! Property-based tests for the decoder
//!
//! Random byte streams must never panic, must always be consumed whole, and
//! must decode the same way however they are split into writes.

use ansi_decoder::parser::{Color, Decoder, Event, NullHandler, Recorder, C0};
use proptest::prelude::*;

/// Byte streams dense in escape syntax, so that the interesting states are
/// actually reached
fn escape_heavy() -> impl Strategy<Value = Vec<u8>> {
    let fragment = prop_oneof![
        Just(b"\x1b".to_vec()),
        Just(b"\x1b[".to_vec()),
        Just(b"\x1b]".to_vec()),
        Just(b"\x1bP".to_vec()),
        Just(b"\x1b_".to_vec()),
        Just(b"\x1b\\".to_vec()),
        Just(b"\x07".to_vec()),
        Just(b";".to_vec()),
        Just(b"?".to_vec()),
        Just("世".as_bytes().to_vec()),
        prop::collection::vec(any::<u8>(), 1..4),
        "[0-9a-zA-Z ]{1,6}".prop_map(String::into_bytes),
    ];
    prop::collection::vec(fragment, 0..40).prop_map(|parts| parts.concat())
}

fn decode_split(input: &[u8], split: usize) -> Vec<Event> {
    let mut decoder = Decoder::new(Recorder::new());
    decoder.feed(&input[..split]);
    decoder.feed(&input[split..]);
    decoder.finish();
    decoder.handler().coalesced()
}

proptest! {
    #[test]
    fn test_decoder_doesnt_panic_on_random_bytes(bytes in prop::collection::vec(any::<u8>(), 0..1024)) {
        let mut decoder = Decoder::new(NullHandler);
        prop_assert_eq!(decoder.feed(&bytes), bytes.len());
        decoder.finish();
    }

    #[test]
    fn test_decoder_doesnt_panic_on_escape_soup(bytes in escape_heavy()) {
        let mut decoder = Decoder::new(Recorder::new());
        prop_assert_eq!(decoder.feed(&bytes), bytes.len());
        decoder.finish();
    }

    #[test]
    fn test_split_point_does_not_change_events(bytes in escape_heavy(), split in any::<prop::sample::Index>()) {
        let split = split.index(bytes.len() + 1);
        let whole = decode_split(&bytes, bytes.len());
        let pieces = decode_split(&bytes, split);
        prop_assert_eq!(whole, pieces);
    }

    #[test]
    fn test_byte_at_a_time_matches_whole(bytes in escape_heavy()) {
        let mut whole = Decoder::new(Recorder::new());
        whole.feed(&bytes);
        whole.finish();

        let mut single = Decoder::new(Recorder::new());
        for byte in &bytes {
            single.feed(std::slice::from_ref(byte));
        }
        single.finish();

        prop_assert_eq!(whole.handler().coalesced(), single.handler().coalesced());
    }

    #[test]
    fn test_plain_text_passes_through(s in "[a-zA-Z0-9 ]{1,200}") {
        let mut decoder = Decoder::new(Recorder::new());
        decoder.feed(s.as_bytes());
        prop_assert_eq!(decoder.handler().joined_text(), s);
    }

    #[test]
    fn test_c0_controls_are_reported(byte in 0u8..0x20) {
        prop_assume!(byte != 0x1B);
        let mut decoder = Decoder::new(Recorder::new());
        decoder.feed(&[byte]);
        prop_assert_eq!(&decoder.handler().events, &vec![Event::C0 { code: C0(byte) }]);
    }

    #[test]
    fn test_cursor_distance_is_at_least_one(n in 0i32..10_000) {
        let mut decoder = Decoder::new(Recorder::new());
        decoder.feed(format!("\x1b[{}B", n).as_bytes());
        prop_assert_eq!(
            &decoder.handler().events,
            &vec![Event::CursorDown { distance: n.max(1) }]
        );
    }

    #[test]
    fn test_sixteen_color_sgr(code in prop_oneof![30i32..38, 90i32..98]) {
        let mut decoder = Decoder::new(Recorder::new());
        decoder.feed(format!("\x1b[{}m", code).as_bytes());
        let index = if code < 90 { code - 30 } else { code - 90 + 8 };
        prop_assert_eq!(
            &decoder.handler().events,
            &vec![Event::ForegroundColor { color: Color(index as u8) }]
        );
    }

    #[test]
    fn test_palette_index_round_trips(index in any::<u8>()) {
        let mut decoder = Decoder::new(Recorder::new());
        decoder.feed(format!("\x1b[48;5;{}m", index).as_bytes());
        prop_assert_eq!(
            &decoder.handler().events,
            &vec![Event::BackgroundColor { color: Color(index) }]
        );
    }
}
