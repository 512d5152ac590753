//! Recorded decoder events
//!
//! `Event` is the owned, serializable form of a single [`Handler`] callback.
//! [`Recorder`] is a handler that simply collects them, which is what the
//! `ansi-dump` tool and most tests want.

use serde::{Deserialize, Serialize};

use super::codes::{CsiCode, C0, C1};
use super::color::{Color, Rgba};
use super::handler::Handler;
use super::sgr::Sgr;
use super::state::DecodeState;

/// One decoder callback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    Text { text: String },
    C0 { code: C0 },
    C1 { code: C1 },
    Dcs { payload: String },
    Csi { code: CsiCode },
    Sgr { code: Sgr },
    Pm { payload: String },
    Apc { payload: String },

    CursorUp { distance: i32 },
    CursorDown { distance: i32 },
    CursorForward { distance: i32 },
    CursorBack { distance: i32 },
    CursorNextLine { distance: i32 },
    CursorPreviousLine { distance: i32 },
    CursorHorizontalAbsolute { column: i32 },
    CursorPosition { column: i32, row: i32 },
    EraseInDisplay { mode: i32 },
    EraseInLine { mode: i32 },
    ScrollUp { distance: i32 },
    ScrollDown { distance: i32 },
    HorizontalVerticalPosition { column: i32, row: i32 },

    ForegroundColor { color: Color },
    ForegroundColorTrue { color: Rgba },
    BackgroundColor { color: Color },
    BackgroundColorTrue { color: Rgba },
    UnderlineColor { color: Color },
    UnderlineColorTrue { color: Rgba },

    WindowTitle { title: String },
    IconName { name: String },
    IconFile { path: String },
    XProperty { name: String, value: Option<String> },
    SelectionPut { selection: String, data: String },
    SelectionGet { selection: String },
    QueryAllowed,
    QueryDisallowed,
    CursorShape { shape: i32 },
    Hyperlink { params: String, uri: String },
    BackgroundImage { path: String },

    Abandoned { state: DecodeState, gathered: Vec<u8> },
}

impl Event {
    /// Check if this is a text event
    pub fn is_text(&self) -> bool {
        matches!(self, Event::Text { .. })
    }
}

/// A handler that records every event it receives
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recorder {
    pub events: Vec<Event>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the recorded events, leaving the recorder empty
    pub fn take(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    /// All text events concatenated
    pub fn joined_text(&self) -> String {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Text { text } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Events with adjacent text runs merged, for comparing streams that were
    /// delivered in different chunkings
    pub fn coalesced(&self) -> Vec<Event> {
        let mut out: Vec<Event> = Vec::with_capacity(self.events.len());
        for event in &self.events {
            match (out.last_mut(), event) {
                (Some(Event::Text { text: last }), Event::Text { text }) => last.push_str(text),
                _ => out.push(event.clone()),
            }
        }
        out
    }

    fn push(&mut self, event: Event) {
        self.events.push(event);
    }
}

impl Handler for Recorder {
    fn text(&mut self, text: &str) {
        self.push(Event::Text { text: text.to_owned() });
    }
    fn c0(&mut self, code: C0) {
        self.push(Event::C0 { code });
    }
    fn c1(&mut self, code: C1) {
        self.push(Event::C1 { code });
    }
    fn dcs(&mut self, payload: &str) {
        self.push(Event::Dcs { payload: payload.to_owned() });
    }
    fn csi(&mut self, code: CsiCode) {
        self.push(Event::Csi { code });
    }
    fn sgr(&mut self, code: Sgr) {
        self.push(Event::Sgr { code });
    }
    fn pm(&mut self, payload: &str) {
        self.push(Event::Pm { payload: payload.to_owned() });
    }
    fn apc(&mut self, payload: &str) {
        self.push(Event::Apc { payload: payload.to_owned() });
    }
    fn cursor_up(&mut self, distance: i32) {
        self.push(Event::CursorUp { distance });
    }
    fn cursor_down(&mut self, distance: i32) {
        self.push(Event::CursorDown { distance });
    }
    fn cursor_forward(&mut self, distance: i32) {
        self.push(Event::CursorForward { distance });
    }
    fn cursor_back(&mut self, distance: i32) {
        self.push(Event::CursorBack { distance });
    }
    fn cursor_next_line(&mut self, distance: i32) {
        self.push(Event::CursorNextLine { distance });
    }
    fn cursor_previous_line(&mut self, distance: i32) {
        self.push(Event::CursorPreviousLine { distance });
    }
    fn cursor_horizontal_absolute(&mut self, column: i32) {
        self.push(Event::CursorHorizontalAbsolute { column });
    }
    fn cursor_position(&mut self, column: i32, row: i32) {
        self.push(Event::CursorPosition { column, row });
    }
    fn erase_in_display(&mut self, mode: i32) {
        self.push(Event::EraseInDisplay { mode });
    }
    fn erase_in_line(&mut self, mode: i32) {
        self.push(Event::EraseInLine { mode });
    }
    fn scroll_up(&mut self, distance: i32) {
        self.push(Event::ScrollUp { distance });
    }
    fn scroll_down(&mut self, distance: i32) {
        self.push(Event::ScrollDown { distance });
    }
    fn horizontal_vertical_position(&mut self, column: i32, row: i32) {
        self.push(Event::HorizontalVerticalPosition { column, row });
    }
    fn foreground_color(&mut self, color: Color) {
        self.push(Event::ForegroundColor { color });
    }
    fn foreground_color_true(&mut self, color: Rgba) {
        self.push(Event::ForegroundColorTrue { color });
    }
    fn background_color(&mut self, color: Color) {
        self.push(Event::BackgroundColor { color });
    }
    fn background_color_true(&mut self, color: Rgba) {
        self.push(Event::BackgroundColorTrue { color });
    }
    fn underline_color(&mut self, color: Color) {
        self.push(Event::UnderlineColor { color });
    }
    fn underline_color_true(&mut self, color: Rgba) {
        self.push(Event::UnderlineColorTrue { color });
    }
    fn window_title(&mut self, title: &str) {
        self.push(Event::WindowTitle { title: title.to_owned() });
    }
    fn icon_name(&mut self, name: &str) {
        self.push(Event::IconName { name: name.to_owned() });
    }
    fn icon_file(&mut self, path: &str) {
        self.push(Event::IconFile { path: path.to_owned() });
    }
    fn x_property(&mut self, name: &str, value: Option<&str>) {
        self.push(Event::XProperty {
            name: name.to_owned(),
            value: value.map(str::to_owned),
        });
    }
    fn selection_put(&mut self, selection: &str, data: &str) {
        self.push(Event::SelectionPut {
            selection: selection.to_owned(),
            data: data.to_owned(),
        });
    }
    fn selection_get(&mut self, selection: &str) {
        self.push(Event::SelectionGet { selection: selection.to_owned() });
    }
    fn query_allowed(&mut self) {
        self.push(Event::QueryAllowed);
    }
    fn query_disallowed(&mut self) {
        self.push(Event::QueryDisallowed);
    }
    fn cursor_shape(&mut self, shape: i32) {
        self.push(Event::CursorShape { shape });
    }
    fn hyperlink(&mut self, params: &str, uri: &str) {
        self.push(Event::Hyperlink {
            params: params.to_owned(),
            uri: uri.to_owned(),
        });
    }
    fn background_image(&mut self, path: &str) {
        self.push(Event::BackgroundImage { path: path.to_owned() });
    }
    fn abandoned(&mut self, state: DecodeState, gathered: &[u8]) {
        self.push(Event::Abandoned {
            state,
            gathered: gathered.to_vec(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coalesced_merges_text() {
        let mut recorder = Recorder::new();
        recorder.text("ab");
        recorder.text("c");
        recorder.c0(C0::LINE_FEED);
        recorder.text("d");

        assert_eq!(
            recorder.coalesced(),
            vec![
                Event::Text { text: "abc".into() },
                Event::C0 { code: C0::LINE_FEED },
                Event::Text { text: "d".into() },
            ]
        );
        assert_eq!(recorder.joined_text(), "abcd");
        assert!(recorder.events[0].is_text());
        assert!(!recorder.events[2].is_text());
    }

    #[test]
    fn test_event_serialization() {
        let event = Event::ForegroundColorTrue {
            color: Rgba::opaque(1, 2, 3),
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"event\":\"foreground_color_true\""));
        let restored: Event = serde_json::from_str(&json).unwrap();

        assert_eq!(event, restored);
    }
}
