//! Decoder event sink
//!
//! The [`Decoder`](super::Decoder) translates bytes into semantic events and
//! relays them to a [`Handler`]. Every method has an empty default body, so
//! an implementation only overrides the events it cares about; anything left
//! out is silently dropped.
//!
//! Handlers run synchronously inside `Decoder::feed` and must not feed the
//! same decoder again from within a callback.

use super::codes::{CsiCode, C0, C1};
use super::color::{Color, Rgba};
use super::sgr::Sgr;
use super::state::DecodeState;

/// Trait implemented by consumers of the decoder.
pub trait Handler {
    /// A run of printable text. Also used for SOS payloads.
    fn text(&mut self, _text: &str) {}

    /// A C0 control byte (never ESC unless the ESC introduced nothing)
    fn c0(&mut self, _code: C0) {}

    /// A C1 control that does not open a string or control sequence
    fn c1(&mut self, _code: C1) {}

    /// Device control string payload
    fn dcs(&mut self, _payload: &str) {}

    /// A parameterless CSI control
    fn csi(&mut self, _code: CsiCode) {}

    /// An SGR attribute not covered by the color callbacks
    fn sgr(&mut self, _code: Sgr) {}

    /// Privacy message payload
    fn pm(&mut self, _payload: &str) {}

    /// Application program command payload
    fn apc(&mut self, _payload: &str) {}

    // Cursor and display controls. Distances are at least 1.

    fn cursor_up(&mut self, _distance: i32) {}

    fn cursor_down(&mut self, _distance: i32) {}

    fn cursor_forward(&mut self, _distance: i32) {}

    fn cursor_back(&mut self, _distance: i32) {}

    fn cursor_next_line(&mut self, _distance: i32) {}

    fn cursor_previous_line(&mut self, _distance: i32) {}

    fn cursor_horizontal_absolute(&mut self, _column: i32) {}

    /// CSI H
    fn cursor_position(&mut self, _column: i32, _row: i32) {}

    /// CSI J; `mode` is passed through unclamped
    fn erase_in_display(&mut self, _mode: i32) {}

    /// CSI K; `mode` is passed through unclamped
    fn erase_in_line(&mut self, _mode: i32) {}

    fn scroll_up(&mut self, _distance: i32) {}

    fn scroll_down(&mut self, _distance: i32) {}

    /// CSI f
    fn horizontal_vertical_position(&mut self, _column: i32, _row: i32) {}

    // SGR colors

    fn foreground_color(&mut self, _color: Color) {}

    fn foreground_color_true(&mut self, _color: Rgba) {}

    fn background_color(&mut self, _color: Color) {}

    fn background_color_true(&mut self, _color: Rgba) {}

    fn underline_color(&mut self, _color: Color) {}

    fn underline_color_true(&mut self, _color: Rgba) {}

    // OSC

    fn window_title(&mut self, _title: &str) {}

    fn icon_name(&mut self, _name: &str) {}

    fn icon_file(&mut self, _path: &str) {}

    /// OSC 3. `value` is `None` when the property should be deleted.
    fn x_property(&mut self, _name: &str, _value: Option<&str>) {}

    /// OSC 52 with data. `data` is passed through still base64 encoded.
    fn selection_put(&mut self, _selection: &str, _data: &str) {}

    /// OSC 52 with `?` as data
    fn selection_get(&mut self, _selection: &str) {}

    fn query_allowed(&mut self) {}

    fn query_disallowed(&mut self) {}

    fn cursor_shape(&mut self, _shape: i32) {}

    /// OSC 8. An empty `uri` closes the current link.
    fn hyperlink(&mut self, _params: &str, _uri: &str) {}

    /// iTerm2 `SetBackgroundImageFile`, still base64 encoded
    fn background_image(&mut self, _path: &str) {}

    /// A sequence still being gathered when the stream was finished.
    fn abandoned(&mut self, _state: DecodeState, _gathered: &[u8]) {}
}

impl<H: Handler + ?Sized> Handler for &mut H {
    fn text(&mut self, text: &str) {
        (**self).text(text)
    }
    fn c0(&mut self, code: C0) {
        (**self).c0(code)
    }
    fn c1(&mut self, code: C1) {
        (**self).c1(code)
    }
    fn dcs(&mut self, payload: &str) {
        (**self).dcs(payload)
    }
    fn csi(&mut self, code: CsiCode) {
        (**self).csi(code)
    }
    fn sgr(&mut self, code: Sgr) {
        (**self).sgr(code)
    }
    fn pm(&mut self, payload: &str) {
        (**self).pm(payload)
    }
    fn apc(&mut self, payload: &str) {
        (**self).apc(payload)
    }
    fn cursor_up(&mut self, distance: i32) {
        (**self).cursor_up(distance)
    }
    fn cursor_down(&mut self, distance: i32) {
        (**self).cursor_down(distance)
    }
    fn cursor_forward(&mut self, distance: i32) {
        (**self).cursor_forward(distance)
    }
    fn cursor_back(&mut self, distance: i32) {
        (**self).cursor_back(distance)
    }
    fn cursor_next_line(&mut self, distance: i32) {
        (**self).cursor_next_line(distance)
    }
    fn cursor_previous_line(&mut self, distance: i32) {
        (**self).cursor_previous_line(distance)
    }
    fn cursor_horizontal_absolute(&mut self, column: i32) {
        (**self).cursor_horizontal_absolute(column)
    }
    fn cursor_position(&mut self, column: i32, row: i32) {
        (**self).cursor_position(column, row)
    }
    fn erase_in_display(&mut self, mode: i32) {
        (**self).erase_in_display(mode)
    }
    fn erase_in_line(&mut self, mode: i32) {
        (**self).erase_in_line(mode)
    }
    fn scroll_up(&mut self, distance: i32) {
        (**self).scroll_up(distance)
    }
    fn scroll_down(&mut self, distance: i32) {
        (**self).scroll_down(distance)
    }
    fn horizontal_vertical_position(&mut self, column: i32, row: i32) {
        (**self).horizontal_vertical_position(column, row)
    }
    fn foreground_color(&mut self, color: Color) {
        (**self).foreground_color(color)
    }
    fn foreground_color_true(&mut self, color: Rgba) {
        (**self).foreground_color_true(color)
    }
    fn background_color(&mut self, color: Color) {
        (**self).background_color(color)
    }
    fn background_color_true(&mut self, color: Rgba) {
        (**self).background_color_true(color)
    }
    fn underline_color(&mut self, color: Color) {
        (**self).underline_color(color)
    }
    fn underline_color_true(&mut self, color: Rgba) {
        (**self).underline_color_true(color)
    }
    fn window_title(&mut self, title: &str) {
        (**self).window_title(title)
    }
    fn icon_name(&mut self, name: &str) {
        (**self).icon_name(name)
    }
    fn icon_file(&mut self, path: &str) {
        (**self).icon_file(path)
    }
    fn x_property(&mut self, name: &str, value: Option<&str>) {
        (**self).x_property(name, value)
    }
    fn selection_put(&mut self, selection: &str, data: &str) {
        (**self).selection_put(selection, data)
    }
    fn selection_get(&mut self, selection: &str) {
        (**self).selection_get(selection)
    }
    fn query_allowed(&mut self) {
        (**self).query_allowed()
    }
    fn query_disallowed(&mut self) {
        (**self).query_disallowed()
    }
    fn cursor_shape(&mut self, shape: i32) {
        (**self).cursor_shape(shape)
    }
    fn hyperlink(&mut self, params: &str, uri: &str) {
        (**self).hyperlink(params, uri)
    }
    fn background_image(&mut self, path: &str) {
        (**self).background_image(path)
    }
    fn abandoned(&mut self, state: DecodeState, gathered: &[u8]) {
        (**self).abandoned(state, gathered)
    }
}

/// A handler that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHandler;

impl Handler for NullHandler {}
