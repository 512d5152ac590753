//! Control code tables
//!
//! Static classification of single-byte control codes. `C0` covers
//! 0x00-0x1F, `C1` covers the 32 codes of the 0x80-0x9F block, stored as an
//! offset 0-31. Both are open newtypes: every byte in range is a valid value,
//! the named constants just give the canonical ones a name.
//!
//! `CsiCode` lists the parameterless CSI forms (cursor save/restore, mode
//! toggles) that are reported through [`Handler::csi`](super::Handler::csi).

use std::fmt;

use serde::{Deserialize, Serialize};

/// A C0 control code (0x00-0x1F)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct C0(pub u8);

impl C0 {
    pub const NULL: C0 = C0(0x00);
    pub const START_OF_HEADING: C0 = C0(0x01);
    pub const START_OF_TEXT: C0 = C0(0x02);
    pub const END_OF_TEXT: C0 = C0(0x03);
    pub const END_OF_TRANSMISSION: C0 = C0(0x04);
    pub const ENQUIRY: C0 = C0(0x05);
    pub const ACKNOWLEDGE: C0 = C0(0x06);
    pub const BELL: C0 = C0(0x07);
    pub const BACKSPACE: C0 = C0(0x08);
    pub const TAB: C0 = C0(0x09);
    pub const LINE_FEED: C0 = C0(0x0A);
    pub const VERTICAL_TAB: C0 = C0(0x0B);
    pub const FORM_FEED: C0 = C0(0x0C);
    pub const CARRIAGE_RETURN: C0 = C0(0x0D);
    pub const SHIFT_OUT: C0 = C0(0x0E);
    pub const SHIFT_IN: C0 = C0(0x0F);
    pub const DATA_LINK_ESCAPE: C0 = C0(0x10);
    pub const DEVICE_CONTROL_1: C0 = C0(0x11);
    pub const DEVICE_CONTROL_2: C0 = C0(0x12);
    pub const DEVICE_CONTROL_3: C0 = C0(0x13);
    pub const DEVICE_CONTROL_4: C0 = C0(0x14);
    pub const NEGATIVE_ACKNOWLEDGE: C0 = C0(0x15);
    pub const SYNCHRONOUS_IDLE: C0 = C0(0x16);
    pub const END_OF_TRANSMISSION_BLOCK: C0 = C0(0x17);
    pub const CANCEL: C0 = C0(0x18);
    pub const END_OF_MEDIUM: C0 = C0(0x19);
    pub const SUBSTITUTE: C0 = C0(0x1A);
    pub const ESCAPE: C0 = C0(0x1B);
    pub const FILE_SEPARATOR: C0 = C0(0x1C);
    pub const GROUP_SEPARATOR: C0 = C0(0x1D);
    pub const RECORD_SEPARATOR: C0 = C0(0x1E);
    pub const UNIT_SEPARATOR: C0 = C0(0x1F);

    /// Canonical codes in byte order
    pub const ALL: [C0; 32] = {
        let mut all = [C0(0); 32];
        let mut i = 0;
        while i < 32 {
            all[i] = C0(i as u8);
            i += 1;
        }
        all
    };

    /// Check whether a raw byte is this control code
    pub fn is(self, byte: u8) -> bool {
        self.0 == byte
    }

    /// The ECMA-48 abbreviation, or `None` for bytes outside 0x00-0x1F
    pub fn name(self) -> Option<&'static str> {
        const NAMES: [&str; 32] = [
            "NUL", "SOH", "STX", "ETX", "EOT", "ENQ", "ACK", "BEL", "BS", "HT", "LF", "VT", "FF",
            "CR", "SO", "SI", "DLE", "DC1", "DC2", "DC3", "DC4", "NAK", "SYN", "ETB", "CAN", "EM",
            "SUB", "ESC", "FS", "GS", "RS", "US",
        ];
        NAMES.get(self.0 as usize).copied()
    }
}

impl From<u8> for C0 {
    fn from(byte: u8) -> Self {
        C0(byte)
    }
}

impl fmt::Display for C0 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "C0(0x{:02X})", self.0),
        }
    }
}

/// A C1 control code, stored as its offset from 0x80
///
/// In 7-bit streams a C1 code is written as ESC followed by a byte in
/// 0x40-0x5F; the offset is that byte minus 0x40.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct C1(pub u8);

impl C1 {
    pub const PADDING_CHARACTER: C1 = C1(0x00);
    pub const HIGH_OCTET_PRESET: C1 = C1(0x01);
    pub const BREAK_PERMITTED_HERE: C1 = C1(0x02);
    pub const NO_BREAK_HERE: C1 = C1(0x03);
    pub const INDEX: C1 = C1(0x04);
    pub const NEXT_LINE: C1 = C1(0x05);
    pub const START_OF_SELECTED_AREA: C1 = C1(0x06);
    pub const END_OF_SELECTED_AREA: C1 = C1(0x07);
    pub const HORIZONTAL_TAB_SET: C1 = C1(0x08);
    pub const HORIZONTAL_TAB_JUSTIFIED: C1 = C1(0x09);
    pub const VERTICAL_TAB_SET: C1 = C1(0x0A);
    pub const PARTIAL_LINE_FORWARD: C1 = C1(0x0B);
    pub const PARTIAL_LINE_BACKWARD: C1 = C1(0x0C);
    pub const REVERSE_LINE_FEED: C1 = C1(0x0D);
    pub const SINGLE_SHIFT_2: C1 = C1(0x0E);
    pub const SINGLE_SHIFT_3: C1 = C1(0x0F);
    pub const DEVICE_CONTROL_STRING: C1 = C1(0x10);
    pub const PRIVATE_USE_1: C1 = C1(0x11);
    pub const PRIVATE_USE_2: C1 = C1(0x12);
    pub const SET_TRANSMIT_STATE: C1 = C1(0x13);
    pub const CANCEL_CHARACTER: C1 = C1(0x14);
    pub const MESSAGE_WAITING: C1 = C1(0x15);
    pub const START_OF_PROTECTED_AREA: C1 = C1(0x16);
    pub const END_OF_PROTECTED_AREA: C1 = C1(0x17);
    pub const START_OF_STRING: C1 = C1(0x18);
    pub const SINGLE_GRAPHIC_CHARACTER_INTRODUCER: C1 = C1(0x19);
    pub const SINGLE_CHARACTER_INTRODUCER: C1 = C1(0x1A);
    pub const CONTROL_SEQUENCE_INTRODUCER: C1 = C1(0x1B);
    pub const STRING_TERMINATOR: C1 = C1(0x1C);
    pub const OPERATING_SYSTEM_COMMAND: C1 = C1(0x1D);
    pub const PRIVACY_MESSAGE: C1 = C1(0x1E);
    pub const APPLICATION_PROGRAM_COMMAND: C1 = C1(0x1F);

    /// Canonical codes in offset order
    pub const ALL: [C1; 32] = {
        let mut all = [C1(0); 32];
        let mut i = 0;
        while i < 32 {
            all[i] = C1(i as u8);
            i += 1;
        }
        all
    };

    /// Classify the byte that follows ESC in a 7-bit C1 encoding.
    ///
    /// Returns `None` unless the byte lies in 0x40-0x5F.
    pub fn from_escaped(byte: u8) -> Option<C1> {
        match byte {
            0x40..=0x5F => Some(C1(byte - 0x40)),
            _ => None,
        }
    }

    /// Check whether a raw 8-bit byte is this control code
    pub fn is(self, byte: u8) -> bool {
        self.to_byte() == Some(byte)
    }

    /// The 8-bit form (0x80-0x9F)
    pub fn to_byte(self) -> Option<u8> {
        (self.0 < 0x20).then_some(self.0 + 0x80)
    }

    /// The 7-bit form, i.e. the byte written after ESC
    pub fn to_escaped(self) -> Option<u8> {
        (self.0 < 0x20).then_some(self.0 + 0x40)
    }

    /// The ECMA-48 abbreviation, or `None` outside the 32 defined offsets
    pub fn name(self) -> Option<&'static str> {
        const NAMES: [&str; 32] = [
            "PAD", "HOP", "BPH", "NBH", "IND", "NEL", "SSA", "ESA", "HTS", "HTJ", "VTS", "PLD",
            "PLU", "RI", "SS2", "SS3", "DCS", "PU1", "PU2", "STS", "CCH", "MW", "SPA", "EPA",
            "SOS", "SGCI", "SCI", "CSI", "ST", "OSC", "PM", "APC",
        ];
        NAMES.get(self.0 as usize).copied()
    }
}

impl fmt::Display for C1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "C1(0x{:02X})", self.0),
        }
    }
}

/// Parameterless CSI controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CsiCode {
    /// CSI 5 i - route output to the auxiliary port
    AuxPortOn,
    /// CSI 4 i
    AuxPortOff,
    /// CSI 6 n - report cursor position
    DeviceStatusReport,
    /// CSI s
    SaveCursorPosition,
    /// CSI u
    RestoreCursorPosition,
    /// CSI ? 25 h
    ShowCursor,
    /// CSI ? 25 l
    HideCursor,
    /// CSI ? 1004 h
    ReportFocusOn,
    /// CSI ? 1004 l
    ReportFocusOff,
    /// CSI ? 1049 h
    AlternateBufferOn,
    /// CSI ? 1049 l
    AlternateBufferOff,
    /// CSI ? 2004 h
    BracketedPasteOn,
    /// CSI ? 2004 l
    BracketedPasteOff,
}

impl CsiCode {
    /// Look up the control named by a final byte and its (first) parameter.
    pub fn from_sequence(private: bool, param: i32, final_byte: u8) -> Option<CsiCode> {
        let code = match (private, param, final_byte) {
            (false, 5, b'i') => CsiCode::AuxPortOn,
            (false, 4, b'i') => CsiCode::AuxPortOff,
            (false, 6, b'n') => CsiCode::DeviceStatusReport,
            (false, _, b's') => CsiCode::SaveCursorPosition,
            (false, _, b'u') => CsiCode::RestoreCursorPosition,
            (true, 25, b'h') => CsiCode::ShowCursor,
            (true, 25, b'l') => CsiCode::HideCursor,
            (true, 1004, b'h') => CsiCode::ReportFocusOn,
            (true, 1004, b'l') => CsiCode::ReportFocusOff,
            (true, 1049, b'h') => CsiCode::AlternateBufferOn,
            (true, 1049, b'l') => CsiCode::AlternateBufferOff,
            (true, 2004, b'h') => CsiCode::BracketedPasteOn,
            (true, 2004, b'l') => CsiCode::BracketedPasteOff,
            _ => return None,
        };
        Some(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_c0_is() {
        assert!(C0::ESCAPE.is(0x1B));
        assert!(C0::LINE_FEED.is(b'\n'));
        assert!(!C0::TAB.is(b' '));
    }

    #[test]
    fn test_c0_table_is_sequential() {
        for (i, code) in C0::ALL.iter().enumerate() {
            assert_eq!(code.0 as usize, i);
            assert!(code.name().is_some());
        }
        assert_eq!(C0::ALL[0x1B], C0::ESCAPE);
        assert_eq!(C0(0x40).name(), None);
        assert_eq!(C0(0x40).to_string(), "C0(0x40)");
    }

    #[test]
    fn test_c1_escaped_form() {
        assert_eq!(C1::from_escaped(b'['), Some(C1::CONTROL_SEQUENCE_INTRODUCER));
        assert_eq!(C1::from_escaped(b']'), Some(C1::OPERATING_SYSTEM_COMMAND));
        assert_eq!(C1::from_escaped(b'P'), Some(C1::DEVICE_CONTROL_STRING));
        assert_eq!(C1::from_escaped(b'\\'), Some(C1::STRING_TERMINATOR));
        assert_eq!(C1::from_escaped(b'7'), None);
        assert_eq!(C1::from_escaped(b'c'), None);
        assert_eq!(C1::CONTROL_SEQUENCE_INTRODUCER.to_escaped(), Some(b'['));
    }

    #[test]
    fn test_c1_eight_bit_form() {
        assert!(C1::CONTROL_SEQUENCE_INTRODUCER.is(0x9B));
        assert!(C1::APPLICATION_PROGRAM_COMMAND.is(0x9F));
        assert_eq!(C1(0x40).to_byte(), None);
        assert_eq!(C1::ALL[0x1C].to_string(), "ST");
    }

    #[test]
    fn test_csi_code_lookup() {
        assert_eq!(CsiCode::from_sequence(true, 25, b'h'), Some(CsiCode::ShowCursor));
        assert_eq!(CsiCode::from_sequence(false, 0, b's'), Some(CsiCode::SaveCursorPosition));
        assert_eq!(CsiCode::from_sequence(false, 25, b'h'), None);
        assert_eq!(CsiCode::from_sequence(true, 7, b'h'), None);
    }
}
