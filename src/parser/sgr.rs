//! Select Graphic Rendition codes
//!
//! `Sgr` mirrors the SGR parameter table of ECMA-48 and its xterm
//! extensions. Any integer is a valid `Sgr`; values without a constant below
//! simply have no name and are passed through as-is.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::color::Color;

/// An SGR parameter value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sgr(pub i32);

impl Sgr {
    pub const NORMAL: Sgr = Sgr(0);
    pub const BOLD: Sgr = Sgr(1);
    pub const DIM: Sgr = Sgr(2);
    pub const ITALIC: Sgr = Sgr(3);
    pub const UNDERLINE: Sgr = Sgr(4);
    pub const SLOW_BLINK: Sgr = Sgr(5);
    pub const RAPID_BLINK: Sgr = Sgr(6);
    pub const REVERSE: Sgr = Sgr(7);
    pub const CONCEAL: Sgr = Sgr(8);
    pub const STRIKE: Sgr = Sgr(9);
    pub const PRIMARY_FONT: Sgr = Sgr(10);
    pub const FONT_1: Sgr = Sgr(11);
    pub const FONT_2: Sgr = Sgr(12);
    pub const FONT_3: Sgr = Sgr(13);
    pub const FONT_4: Sgr = Sgr(14);
    pub const FONT_5: Sgr = Sgr(15);
    pub const FONT_6: Sgr = Sgr(16);
    pub const FONT_7: Sgr = Sgr(17);
    pub const FONT_8: Sgr = Sgr(18);
    pub const FONT_9: Sgr = Sgr(19);
    pub const FRAKTUR: Sgr = Sgr(20);
    pub const DOUBLE_UNDERLINE: Sgr = Sgr(21);
    pub const NORMAL_INTENSITY: Sgr = Sgr(22);
    pub const NOT_ITALIC: Sgr = Sgr(23);
    pub const NOT_UNDERLINED: Sgr = Sgr(24);
    pub const NOT_BLINKING: Sgr = Sgr(25);
    pub const PROPORTIONAL_SPACING: Sgr = Sgr(26);
    pub const NOT_REVERSED: Sgr = Sgr(27);
    pub const REVEAL: Sgr = Sgr(28);
    pub const NOT_STRIKE: Sgr = Sgr(29);

    pub const FOREGROUND_BLACK: Sgr = Sgr(30);
    pub const FOREGROUND_RED: Sgr = Sgr(31);
    pub const FOREGROUND_GREEN: Sgr = Sgr(32);
    pub const FOREGROUND_YELLOW: Sgr = Sgr(33);
    pub const FOREGROUND_BLUE: Sgr = Sgr(34);
    pub const FOREGROUND_MAGENTA: Sgr = Sgr(35);
    pub const FOREGROUND_CYAN: Sgr = Sgr(36);
    pub const FOREGROUND_WHITE: Sgr = Sgr(37);
    pub const FOREGROUND_COLOR: Sgr = Sgr(38);
    pub const FOREGROUND_DEFAULT: Sgr = Sgr(39);

    pub const BACKGROUND_BLACK: Sgr = Sgr(40);
    pub const BACKGROUND_RED: Sgr = Sgr(41);
    pub const BACKGROUND_GREEN: Sgr = Sgr(42);
    pub const BACKGROUND_YELLOW: Sgr = Sgr(43);
    pub const BACKGROUND_BLUE: Sgr = Sgr(44);
    pub const BACKGROUND_MAGENTA: Sgr = Sgr(45);
    pub const BACKGROUND_CYAN: Sgr = Sgr(46);
    pub const BACKGROUND_WHITE: Sgr = Sgr(47);
    pub const BACKGROUND_COLOR: Sgr = Sgr(48);
    pub const BACKGROUND_DEFAULT: Sgr = Sgr(49);

    pub const NOT_PROPORTIONAL_SPACING: Sgr = Sgr(50);
    pub const FRAMED: Sgr = Sgr(51);
    pub const ENCIRCLED: Sgr = Sgr(52);
    pub const OVERLINED: Sgr = Sgr(53);
    pub const NOT_FRAMED: Sgr = Sgr(54);
    pub const NOT_OVERLINED: Sgr = Sgr(55);
    pub const UNDERLINE_COLOR: Sgr = Sgr(58);
    pub const UNDERLINE_DEFAULT: Sgr = Sgr(59);

    pub const IDEOGRAM_UNDERLINE: Sgr = Sgr(60);
    pub const IDEOGRAM_DOUBLE_UNDERLINE: Sgr = Sgr(61);
    pub const IDEOGRAM_OVERLINE: Sgr = Sgr(62);
    pub const IDEOGRAM_DOUBLE_OVERLINE: Sgr = Sgr(63);
    pub const IDEOGRAM_STRESS: Sgr = Sgr(64);
    pub const NO_IDEOGRAM: Sgr = Sgr(65);

    pub const SUPERSCRIPT: Sgr = Sgr(73);
    pub const SUBSCRIPT: Sgr = Sgr(74);
    pub const NOT_SCRIPT: Sgr = Sgr(75);

    pub const FOREGROUND_BRIGHT_BLACK: Sgr = Sgr(90);
    pub const FOREGROUND_BRIGHT_RED: Sgr = Sgr(91);
    pub const FOREGROUND_BRIGHT_GREEN: Sgr = Sgr(92);
    pub const FOREGROUND_BRIGHT_YELLOW: Sgr = Sgr(93);
    pub const FOREGROUND_BRIGHT_BLUE: Sgr = Sgr(94);
    pub const FOREGROUND_BRIGHT_MAGENTA: Sgr = Sgr(95);
    pub const FOREGROUND_BRIGHT_CYAN: Sgr = Sgr(96);
    pub const FOREGROUND_BRIGHT_WHITE: Sgr = Sgr(97);

    pub const BACKGROUND_BRIGHT_BLACK: Sgr = Sgr(100);
    pub const BACKGROUND_BRIGHT_RED: Sgr = Sgr(101);
    pub const BACKGROUND_BRIGHT_GREEN: Sgr = Sgr(102);
    pub const BACKGROUND_BRIGHT_YELLOW: Sgr = Sgr(103);
    pub const BACKGROUND_BRIGHT_BLUE: Sgr = Sgr(104);
    pub const BACKGROUND_BRIGHT_MAGENTA: Sgr = Sgr(105);
    pub const BACKGROUND_BRIGHT_CYAN: Sgr = Sgr(106);
    pub const BACKGROUND_BRIGHT_WHITE: Sgr = Sgr(107);

    /// The 16-color foreground this code selects, if any (30-37, 90-97)
    pub fn foreground_16(self) -> Option<Color> {
        Self::offset_color(self.0, Self::FOREGROUND_BLACK.0, Self::FOREGROUND_BRIGHT_BLACK.0)
    }

    /// The 16-color background this code selects, if any (40-47, 100-107)
    pub fn background_16(self) -> Option<Color> {
        Self::offset_color(self.0, Self::BACKGROUND_BLACK.0, Self::BACKGROUND_BRIGHT_BLACK.0)
    }

    fn offset_color(value: i32, base: i32, bright_base: i32) -> Option<Color> {
        if (base..base + 8).contains(&value) {
            Some(Color((value - base) as u8))
        } else if (bright_base..bright_base + 8).contains(&value) {
            Some(Color((value - bright_base) as u8 + 8))
        } else {
            None
        }
    }

    /// Human-readable name for the named codes
    pub fn name(self) -> Option<&'static str> {
        let name = match self.0 {
            0 => "normal",
            1 => "bold",
            2 => "dim",
            3 => "italic",
            4 => "underline",
            5 => "slow blink",
            6 => "rapid blink",
            7 => "reverse",
            8 => "conceal",
            9 => "strike",
            10 => "primary font",
            11..=19 => "alternate font",
            20 => "fraktur",
            21 => "double underline",
            22 => "normal intensity",
            23 => "not italic",
            24 => "not underlined",
            25 => "not blinking",
            26 => "proportional spacing",
            27 => "not reversed",
            28 => "reveal",
            29 => "not strike",
            30..=37 | 90..=97 => "foreground",
            38 => "foreground color",
            39 => "foreground default",
            40..=47 | 100..=107 => "background",
            48 => "background color",
            49 => "background default",
            50 => "not proportional spacing",
            51 => "framed",
            52 => "encircled",
            53 => "overlined",
            54 => "not framed",
            55 => "not overlined",
            58 => "underline color",
            59 => "underline default",
            60 => "ideogram underline",
            61 => "ideogram double underline",
            62 => "ideogram overline",
            63 => "ideogram double overline",
            64 => "ideogram stress",
            65 => "no ideogram",
            73 => "superscript",
            74 => "subscript",
            75 => "not script",
            _ => return None,
        };
        Some(name)
    }
}

impl From<i32> for Sgr {
    fn from(value: i32) -> Self {
        Sgr(value)
    }
}

impl fmt::Display for Sgr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} ({})", name, self.0),
            None => write!(f, "SGR {}", self.0),
        }
    }
}
