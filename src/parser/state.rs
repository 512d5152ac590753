//! Decoder State Machine
//!
//! Consumes bytes in arbitrarily sized chunks and reports what it finds to a
//! [`Handler`]. Partial sequences are kept between calls, so splitting the
//! stream at any byte boundary produces the same events as feeding it whole
//! (text runs may arrive in more pieces).
//!
//! # States
//!
//! - Text: plain text and C0 controls
//! - AwaitC1: after ESC, waiting for the byte that names the C1 code
//! - GatherCsi: collecting parameter bytes until a final byte
//! - GatherDcs/Sos/Osc/Pm/Apc: collecting a string payload until ST (ESC \)
//!
//! Malformed input never fails: a bad escape prefix degrades to a bare ESC,
//! unknown sequences are dropped, and unparseable parameters read as 0.

use std::io;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::codes::{CsiCode, C0, C1};
use super::color::{Color, Rgba};
use super::handler::Handler;
use super::osc;
use super::params::parameter_ints;
use super::sgr::Sgr;
use crate::app::DecoderConfig;

const ESC: u8 = 0x1B;
const BEL: u8 = 0x07;

/// Decoder state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DecodeState {
    #[default]
    Text,
    AwaitC1,
    GatherDcs,
    GatherSos,
    GatherCsi,
    GatherOsc,
    GatherPm,
    GatherApc,
}

impl DecodeState {
    /// Whether a multi-byte sequence is being collected
    pub fn is_gathering(self) -> bool {
        !matches!(self, DecodeState::Text | DecodeState::AwaitC1)
    }
}

/// Incremental escape sequence decoder
///
/// One decoder serves one stream. It owns its handler; use
/// [`handler_mut`](Decoder::handler_mut) or pass `&mut handler` to keep
/// ownership outside.
#[derive(Debug)]
pub struct Decoder<H> {
    state: DecodeState,
    /// Payload of the sequence being gathered
    gathered: Vec<u8>,
    /// An ESC was seen inside a string payload and is held back until the
    /// next byte shows whether it starts ST
    expecting_st: bool,
    /// The current sequence hit `max_gather_len`
    overflowed: bool,
    /// Incomplete UTF-8 character left at the end of the last write
    utf8_pending: Vec<u8>,
    config: DecoderConfig,
    handler: H,
}

impl<H: Handler + Default> Default for Decoder<H> {
    fn default() -> Self {
        Self::new(H::default())
    }
}

impl<H: Handler> Decoder<H> {
    /// Create a decoder with the default configuration
    pub fn new(handler: H) -> Self {
        Self::with_config(handler, DecoderConfig::default())
    }

    /// Create a decoder with an explicit configuration
    pub fn with_config(handler: H, config: DecoderConfig) -> Self {
        Self {
            state: DecodeState::Text,
            gathered: Vec::with_capacity(64),
            expecting_st: false,
            overflowed: false,
            utf8_pending: Vec::with_capacity(4),
            config,
            handler,
        }
    }

    pub fn state(&self) -> DecodeState {
        self.state
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    pub fn into_handler(self) -> H {
        self.handler
    }

    /// Discard any partial sequence without reporting it
    pub fn reset(&mut self) {
        if self.state != DecodeState::Text {
            debug!("Decoder reset in {:?}", self.state);
        }
        self.state = DecodeState::Text;
        self.gathered.clear();
        self.expecting_st = false;
        self.overflowed = false;
        self.utf8_pending.clear();
    }

    /// Feed a chunk of bytes. Always consumes the whole chunk.
    pub fn feed(&mut self, bytes: &[u8]) -> usize {
        let mut rest = bytes;
        while !rest.is_empty() {
            let used = match self.state {
                DecodeState::Text => self.advance_text(rest),
                DecodeState::AwaitC1 => self.advance_await_c1(rest[0]),
                DecodeState::GatherCsi => self.advance_csi(rest),
                _ => self.advance_string(rest),
            };
            rest = &rest[used..];
        }
        bytes.len()
    }

    /// End of stream: report whatever is still pending and return to Text.
    ///
    /// A dangling ESC is reported as a C0 escape, an unterminated sequence
    /// goes to [`Handler::abandoned`], and a truncated UTF-8 character is
    /// emitted as U+FFFD.
    pub fn finish(&mut self) {
        match self.state {
            DecodeState::Text => self.flush_utf8(),
            DecodeState::AwaitC1 => self.handler.c0(C0::ESCAPE),
            state => {
                if self.expecting_st {
                    self.gathered.push(ESC);
                }
                debug!(
                    "Abandoning {:?} with {} gathered bytes",
                    state,
                    self.gathered.len()
                );
                self.handler.abandoned(state, &self.gathered);
            },
        }
        self.reset();
    }

    fn advance_text(&mut self, bytes: &[u8]) -> usize {
        let byte = bytes[0];
        if byte == ESC {
            self.flush_utf8();
            self.state = DecodeState::AwaitC1;
            return 1;
        }
        if byte < 0x20 {
            self.flush_utf8();
            self.handler.c0(C0(byte));
            return 1;
        }

        let end = bytes.iter().position(|&b| b < 0x20).unwrap_or(bytes.len());
        let at_chunk_end = end == bytes.len();
        if self.utf8_pending.is_empty() {
            self.emit_text(&bytes[..end], at_chunk_end);
        } else {
            let mut run = std::mem::take(&mut self.utf8_pending);
            run.extend_from_slice(&bytes[..end]);
            self.emit_text(&run, at_chunk_end);
        }
        end
    }

    /// Report a run as text. A truncated character at the end is held back
    /// when more input may complete it.
    fn emit_text(&mut self, run: &[u8], may_continue: bool) {
        if let Ok(text) = std::str::from_utf8(run) {
            self.handler.text(text);
            return;
        }

        let mut text = String::with_capacity(run.len() + 2);
        let mut rest = run;
        loop {
            match std::str::from_utf8(rest) {
                Ok(valid) => {
                    text.push_str(valid);
                    break;
                },
                Err(err) => {
                    let (valid, after) = rest.split_at(err.valid_up_to());
                    if let Ok(valid) = std::str::from_utf8(valid) {
                        text.push_str(valid);
                    }
                    match err.error_len() {
                        Some(len) => {
                            text.push(char::REPLACEMENT_CHARACTER);
                            rest = &after[len..];
                        },
                        None if may_continue => {
                            self.utf8_pending.extend_from_slice(after);
                            break;
                        },
                        None => {
                            text.push(char::REPLACEMENT_CHARACTER);
                            break;
                        },
                    }
                },
            }
        }
        if !text.is_empty() {
            self.handler.text(&text);
        }
    }

    fn flush_utf8(&mut self) {
        if !self.utf8_pending.is_empty() {
            let pending = std::mem::take(&mut self.utf8_pending);
            self.handler.text(&String::from_utf8_lossy(&pending));
        }
    }

    /// Returns 0 when the byte does not introduce a C1 code, leaving it to be
    /// read again as text.
    fn advance_await_c1(&mut self, byte: u8) -> usize {
        let Some(code) = C1::from_escaped(byte) else {
            self.handler.c0(C0::ESCAPE);
            self.state = DecodeState::Text;
            return 0;
        };

        let next = match code {
            C1::DEVICE_CONTROL_STRING => DecodeState::GatherDcs,
            C1::START_OF_STRING => DecodeState::GatherSos,
            C1::CONTROL_SEQUENCE_INTRODUCER => DecodeState::GatherCsi,
            C1::OPERATING_SYSTEM_COMMAND => DecodeState::GatherOsc,
            C1::PRIVACY_MESSAGE => DecodeState::GatherPm,
            C1::APPLICATION_PROGRAM_COMMAND => DecodeState::GatherApc,
            other => {
                self.handler.c1(other);
                DecodeState::Text
            },
        };
        self.begin(next);
        1
    }

    fn begin(&mut self, state: DecodeState) {
        self.state = state;
        self.gathered.clear();
        self.expecting_st = false;
        self.overflowed = false;
    }

    fn gather(&mut self, byte: u8) {
        if self.gathered.len() < self.config.max_gather_len {
            self.gathered.push(byte);
        } else if !self.overflowed {
            self.overflowed = true;
            warn!(
                "{:?} exceeded {} bytes, truncating",
                self.state, self.config.max_gather_len
            );
        }
    }

    fn advance_csi(&mut self, bytes: &[u8]) -> usize {
        for (i, &byte) in bytes.iter().enumerate() {
            match byte {
                0x20..=0x3F => self.gather(byte),
                ESC => {
                    // A new escape interrupts the sequence; read ESC again as text
                    trace!("CSI interrupted by ESC: {:?}", self.gathered);
                    self.begin(DecodeState::Text);
                    return i;
                },
                _ => {
                    if self.overflowed {
                        trace!("Dropping oversized CSI");
                    } else {
                        self.gathered.push(byte);
                        self.dispatch_csi();
                    }
                    self.begin(DecodeState::Text);
                    return i + 1;
                },
            }
        }
        bytes.len()
    }

    fn advance_string(&mut self, bytes: &[u8]) -> usize {
        for (i, &byte) in bytes.iter().enumerate() {
            if self.expecting_st {
                if byte == b'\\' {
                    self.dispatch_string();
                    return i + 1;
                }
                self.expecting_st = false;
                self.gather(ESC);
            }

            match byte {
                ESC => self.expecting_st = true,
                BEL if self.state == DecodeState::GatherOsc && self.config.osc_bell_terminates => {
                    self.dispatch_string();
                    return i + 1;
                },
                _ => self.gather(byte),
            }
        }
        bytes.len()
    }

    fn dispatch_string(&mut self) {
        let payload = &self.gathered;
        match self.state {
            DecodeState::GatherDcs => self.handler.dcs(&String::from_utf8_lossy(payload)),
            DecodeState::GatherSos => self.handler.text(&String::from_utf8_lossy(payload)),
            DecodeState::GatherOsc => osc::perform(&mut self.handler, payload),
            DecodeState::GatherPm => self.handler.pm(&String::from_utf8_lossy(payload)),
            DecodeState::GatherApc => self.handler.apc(&String::from_utf8_lossy(payload)),
            state => trace!("No string dispatch for {:?}", state),
        }
        self.begin(DecodeState::Text);
    }

    fn dispatch_csi(&mut self) {
        let Some((&final_byte, body)) = self.gathered.split_last() else {
            return;
        };

        let (marker, body) = match body.split_first() {
            Some((&m @ (b'?' | b'<' | b'=' | b'>'), rest)) => (Some(m), rest),
            _ => (None, body),
        };
        let intermediates = body.iter().rev().take_while(|b| (0x20..=0x2F).contains(*b)).count();
        if intermediates > 0 {
            trace!(
                "Unhandled CSI with intermediates: {:?}",
                String::from_utf8_lossy(&self.gathered)
            );
            return;
        }

        let params = parameter_ints(body);
        let private = match marker {
            None => false,
            Some(b'?') => true,
            Some(other) => {
                trace!("Unhandled CSI with marker {:?}", other as char);
                return;
            },
        };

        if !private {
            if self.dispatch_cursor(final_byte, &params) {
                return;
            }
            if final_byte == b'm' {
                self.dispatch_sgr(&params);
                return;
            }
        }

        let param = |i: usize| params.get(i).copied().unwrap_or(0);
        match final_byte {
            b'h' | b'l' => {
                for &mode in &params {
                    match CsiCode::from_sequence(private, mode, final_byte) {
                        Some(code) => self.handler.csi(code),
                        None => trace!("Unhandled mode {} {}", mode, final_byte as char),
                    }
                }
            },
            _ => match CsiCode::from_sequence(private, param(0), final_byte) {
                Some(code) => self.handler.csi(code),
                None => trace!(
                    "Unhandled CSI: {:?}",
                    String::from_utf8_lossy(&self.gathered)
                ),
            },
        }
    }

    /// Cursor, erase and scroll controls. Returns false for other finals.
    fn dispatch_cursor(&mut self, final_byte: u8, params: &[i32]) -> bool {
        let param = |i: usize| params.get(i).copied().unwrap_or(0);
        // Zero and negative distances are illegal and mean 1
        let distance = |i: usize| param(i).max(1);

        match final_byte {
            b'A' => self.handler.cursor_up(distance(0)),
            b'B' => self.handler.cursor_down(distance(0)),
            b'C' => self.handler.cursor_forward(distance(0)),
            b'D' => self.handler.cursor_back(distance(0)),
            b'E' => self.handler.cursor_next_line(distance(0)),
            b'F' => self.handler.cursor_previous_line(distance(0)),
            b'G' => self.handler.cursor_horizontal_absolute(distance(0)),
            b'H' => self.handler.cursor_position(distance(0), distance(1)),
            b'f' => self
                .handler
                .horizontal_vertical_position(distance(0), distance(1)),
            b'J' => self.handler.erase_in_display(param(0)),
            b'K' => self.handler.erase_in_line(param(0)),
            b'S' => self.handler.scroll_up(distance(0)),
            b'T' => self.handler.scroll_down(distance(0)),
            _ => return false,
        }
        true
    }

    fn dispatch_sgr(&mut self, params: &[i32]) {
        let mut params = params.iter().copied();
        while let Some(value) = params.next() {
            let code = Sgr(value);
            if let Some(color) = code.foreground_16() {
                self.handler.foreground_color(color);
            } else if let Some(color) = code.background_16() {
                self.handler.background_color(color);
            } else if code == Sgr::FOREGROUND_COLOR {
                match extended_color(&mut params) {
                    Some(ExtendedColor::Indexed(color)) => self.handler.foreground_color(color),
                    Some(ExtendedColor::True(color)) => self.handler.foreground_color_true(color),
                    None => {},
                }
            } else if code == Sgr::BACKGROUND_COLOR {
                match extended_color(&mut params) {
                    Some(ExtendedColor::Indexed(color)) => self.handler.background_color(color),
                    Some(ExtendedColor::True(color)) => self.handler.background_color_true(color),
                    None => {},
                }
            } else if code == Sgr::UNDERLINE_COLOR {
                match extended_color(&mut params) {
                    Some(ExtendedColor::Indexed(color)) => self.handler.underline_color(color),
                    Some(ExtendedColor::True(color)) => self.handler.underline_color_true(color),
                    None => {},
                }
            } else {
                self.handler.sgr(code);
            }
        }
    }
}

enum ExtendedColor {
    Indexed(Color),
    True(Rgba),
}

/// Read the tail of an SGR 38/48/58 selector: `5;n` or `2;r;g;b`.
fn extended_color(params: &mut impl Iterator<Item = i32>) -> Option<ExtendedColor> {
    let mut next = || params.next().unwrap_or(0);
    match next() {
        5 => {
            let index = next();
            match u8::try_from(index) {
                Ok(index) => Some(ExtendedColor::Indexed(Color(index))),
                Err(_) => {
                    trace!("Palette index out of range: {}", index);
                    None
                },
            }
        },
        2 => {
            let channel = |value: i32| value.clamp(0, 255) as u8;
            let (r, g, b) = (next(), next(), next());
            Some(ExtendedColor::True(Rgba::opaque(channel(r), channel(g), channel(b))))
        },
        mode => {
            trace!("Unknown extended color mode: {}", mode);
            None
        },
    }
}

impl<H: Handler> io::Write for Decoder<H> {
    /// Never fails and always reports the whole buffer as written.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(self.feed(buf))
    }

    /// Nothing is buffered on the output side. Use [`Decoder::finish`] to
    /// force out a partial sequence.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
