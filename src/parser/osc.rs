//! OSC payload dispatch
//!
//! An OSC payload has the form `Ps ; Pt`. Only the commands that have a
//! [`Handler`] hook are interpreted; everything else is dropped.

use tracing::trace;

use super::handler::Handler;

pub(crate) fn perform<H: Handler>(handler: &mut H, payload: &[u8]) {
    let payload = String::from_utf8_lossy(payload);
    let (command, rest) = match payload.split_once(';') {
        Some((command, rest)) => (command, rest),
        None => (&*payload, ""),
    };

    match command {
        "0" => {
            handler.icon_name(rest);
            handler.window_title(rest);
        },
        "1" => handler.icon_name(rest),
        "2" => handler.window_title(rest),
        "I" => handler.icon_file(rest),
        "3" => match rest.split_once('=') {
            Some((name, value)) => handler.x_property(name, Some(value)),
            None => handler.x_property(rest, None),
        },
        "8" => {
            let (params, uri) = rest.split_once(';').unwrap_or(("", rest));
            handler.hyperlink(params, uri);
        },
        "50" => match key_value(rest, "CursorShape") {
            Some(shape) => handler.cursor_shape(parse_shape(shape)),
            None => trace!("OSC 50 without cursor shape: {:?}", rest),
        },
        "52" => {
            let (selection, data) = rest.split_once(';').unwrap_or(("", rest));
            if data == "?" {
                handler.selection_get(selection);
            } else {
                handler.selection_put(selection, data);
            }
        },
        "60" => handler.query_allowed(),
        "61" => handler.query_disallowed(),
        "1337" => {
            if let Some(shape) = key_value(rest, "CursorShape") {
                handler.cursor_shape(parse_shape(shape));
            } else if let Some(path) = key_value(rest, "SetBackgroundImageFile") {
                handler.background_image(path);
            } else {
                trace!("Unhandled iTerm2 OSC: {:?}", rest);
            }
        },
        _ => trace!("Unhandled OSC {:?}", command),
    }
}

fn key_value<'a>(input: &'a str, key: &str) -> Option<&'a str> {
    let (k, v) = input.split_once('=')?;
    (k == key).then_some(v)
}

fn parse_shape(value: &str) -> i32 {
    value.trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::event::{Event, Recorder};

    fn run(payload: &[u8]) -> Vec<Event> {
        let mut recorder = Recorder::new();
        perform(&mut recorder, payload);
        recorder.events
    }

    #[test]
    fn test_titles() {
        assert_eq!(
            run(b"2;hello"),
            vec![Event::WindowTitle { title: "hello".into() }]
        );
        assert_eq!(
            run(b"0;both"),
            vec![
                Event::IconName { name: "both".into() },
                Event::WindowTitle { title: "both".into() },
            ]
        );
        assert_eq!(
            run(b"2;a;b"),
            vec![Event::WindowTitle { title: "a;b".into() }]
        );
    }

    #[test]
    fn test_x_property() {
        assert_eq!(
            run(b"3;WM_NAME=term"),
            vec![Event::XProperty {
                name: "WM_NAME".into(),
                value: Some("term".into())
            }]
        );
        assert_eq!(
            run(b"3;WM_NAME"),
            vec![Event::XProperty {
                name: "WM_NAME".into(),
                value: None
            }]
        );
    }

    #[test]
    fn test_hyperlink() {
        assert_eq!(
            run(b"8;id=1;https://example.com"),
            vec![Event::Hyperlink {
                params: "id=1".into(),
                uri: "https://example.com".into()
            }]
        );
        assert_eq!(
            run(b"8;;"),
            vec![Event::Hyperlink {
                params: "".into(),
                uri: "".into()
            }]
        );
    }

    #[test]
    fn test_selection() {
        assert_eq!(
            run(b"52;c;aGVsbG8="),
            vec![Event::SelectionPut {
                selection: "c".into(),
                data: "aGVsbG8=".into()
            }]
        );
        assert_eq!(
            run(b"52;p;?"),
            vec![Event::SelectionGet { selection: "p".into() }]
        );
    }

    #[test]
    fn test_queries_and_extensions() {
        assert_eq!(run(b"60"), vec![Event::QueryAllowed]);
        assert_eq!(run(b"61"), vec![Event::QueryDisallowed]);
        assert_eq!(run(b"50;CursorShape=1"), vec![Event::CursorShape { shape: 1 }]);
        assert_eq!(run(b"1337;CursorShape=2"), vec![Event::CursorShape { shape: 2 }]);
        assert_eq!(
            run(b"1337;SetBackgroundImageFile=L3RtcC9iZy5wbmc="),
            vec![Event::BackgroundImage {
                path: "L3RtcC9iZy5wbmc=".into()
            }]
        );
        assert_eq!(run(b"I;/usr/share/icon.xpm"), vec![Event::IconFile {
            path: "/usr/share/icon.xpm".into()
        }]);
    }

    #[test]
    fn test_unknown_commands_are_dropped() {
        assert!(run(b"4;1;rgb:ff/00/00").is_empty());
        assert!(run(b"").is_empty());
        assert!(run(b"1337;RemoteHost=x").is_empty());
    }
}
