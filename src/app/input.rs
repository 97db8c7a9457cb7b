//! Translation of terminal input lines into events.
//!
//! The runtime is line-oriented: every line is one command. Key names and
//! clicks are user gestures, so the runtime records an [`Interaction`] before
//! their events; the remaining commands are programmatic requests and carry no
//! interaction of their own.
//!
//! | Line                         | Events                                  |
//! |------------------------------|-----------------------------------------|
//! | `j`, `down`, `esc`, `tab`... | one [`Event::Key`]                      |
//! | `type <text>`                | one `Key::Char` per character           |
//! | `click <target> [id]`        | one [`Event::Click`]                    |
//! | `photographer <id>`          | [`Event::OpenPhotographer`]             |
//! | `open <media id>`            | [`Event::OpenLightbox`] (programmatic)  |
//! | `like <media id>`            | [`Event::Like`]                         |
//! | `sort <order>`               | [`Event::Sort`]                         |
//! | `back`, `contact`, `reset`, `quit` | the matching event                |
//!
//! Blank lines and lines starting with `#` are skipped.
//!
//! [`Interaction`]: crate::app::Interaction

use crate::app::handler::{Event, Key, Target};
use crate::domain::{FisheyeError, MediaId, Result, SortOrder};

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputLine {
    pub events: Vec<Event>,
    /// Whether the line is a direct gesture (key press or click).
    pub gesture: bool,
}

impl InputLine {
    fn gesture(events: Vec<Event>) -> Self {
        Self { events, gesture: true }
    }

    fn request(event: Event) -> Self {
        Self {
            events: vec![event],
            gesture: false,
        }
    }
}

/// Parses one input line. `now_ms` stamps programmatic lightbox requests.
///
/// # Returns
///
/// `Ok(None)` for blank and comment lines.
///
/// # Errors
///
/// Returns [`FisheyeError::Input`] for unknown commands or malformed arguments.
///
/// # Example
///
/// ```rust
/// use fisheye::app::input::parse_line;
/// use fisheye::app::{Event, Key};
///
/// let line = parse_line("down", 0)?.expect("not blank");
/// assert!(line.gesture);
/// assert_eq!(line.events, vec![Event::Key(Key::Down)]);
/// # Ok::<(), fisheye::FisheyeError>(())
/// ```
pub fn parse_line(line: &str, now_ms: i64) -> Result<Option<InputLine>> {
    let line = line.trim_end_matches(|c| c == '\r' || c == '\n');
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    if let Some(text) = line.trim_start().strip_prefix("type ") {
        let keys = text.chars().map(|c| Event::Key(Key::Char(c))).collect();
        return Ok(Some(InputLine::gesture(keys)));
    }

    if let Some(key) = parse_key(trimmed) {
        return Ok(Some(InputLine::gesture(vec![Event::Key(key)])));
    }

    let mut words = trimmed.split_whitespace();
    let command = words.next().unwrap_or_default();
    let args: Vec<&str> = words.collect();

    let parsed = match (command, args.as_slice()) {
        ("click", target) => InputLine::gesture(vec![Event::Click(parse_target(target)?)]),
        ("photographer", [id]) => InputLine::request(Event::OpenPhotographer(parse_id(id)?)),
        ("open", [id]) => InputLine::request(Event::OpenLightbox {
            media_id: MediaId(parse_id(id)?),
            requested_at_ms: now_ms,
        }),
        ("like", [id]) => InputLine::request(Event::Like(MediaId(parse_id(id)?))),
        ("sort", []) => InputLine::request(Event::CycleSort),
        ("sort", [order]) => InputLine::request(Event::Sort(
            order.parse::<SortOrder>().map_err(|_| FisheyeError::Input(format!("unknown sort order `{order}`")))?,
        )),
        ("back", []) => InputLine::request(Event::Back),
        ("contact", []) => InputLine::request(Event::OpenContact),
        ("reset", []) => InputLine::request(Event::ResetLikes),
        ("quit" | "exit", []) => InputLine::request(Event::Quit),
        _ => return Err(FisheyeError::Input(trimmed.to_string())),
    };

    Ok(Some(parsed))
}

fn parse_key(word: &str) -> Option<Key> {
    let key = match word.to_ascii_lowercase().as_str() {
        "up" => Key::Up,
        "down" => Key::Down,
        "left" => Key::Left,
        "right" => Key::Right,
        "enter" => Key::Enter,
        "esc" | "escape" => Key::Escape,
        "tab" => Key::Tab,
        "shift-tab" | "backtab" => Key::ShiftTab,
        "backspace" => Key::Backspace,
        "space" => Key::Char(' '),
        _ => {
            let mut chars = word.chars();
            return match (chars.next(), chars.next()) {
                (Some(c), None) => Some(Key::Char(c)),
                _ => None,
            };
        }
    };
    Some(key)
}

fn parse_target(words: &[&str]) -> Result<Target> {
    let target = match words {
        ["photographer", id] => Target::Photographer(parse_id(id)?),
        ["media", id] => Target::MediaCard(MediaId(parse_id(id)?)),
        ["like", id] => Target::LikeButton(MediaId(parse_id(id)?)),
        ["contact"] => Target::ContactButton,
        ["backdrop"] => Target::Backdrop,
        ["previous" | "prev"] => Target::LightboxPrevious,
        ["next"] => Target::LightboxNext,
        ["close"] => Target::LightboxClose,
        ["submit"] => Target::ContactSubmit,
        ["contact-close"] => Target::ContactClose,
        _ => return Err(FisheyeError::Input(format!("unknown click target `{}`", words.join(" ")))),
    };
    Ok(target)
}

fn parse_id(word: &str) -> Result<u64> {
    word.parse()
        .map_err(|_| FisheyeError::Input(format!("expected a numeric id, got `{word}`")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> InputLine {
        parse_line(line, 42).expect("parses").expect("not blank")
    }

    #[test]
    fn keys_and_clicks_are_gestures() {
        assert_eq!(parse("Esc"), InputLine::gesture(vec![Event::Key(Key::Escape)]));
        assert_eq!(parse("l"), InputLine::gesture(vec![Event::Key(Key::Char('l'))]));
        assert_eq!(
            parse("click media 7"),
            InputLine::gesture(vec![Event::Click(Target::MediaCard(MediaId(7)))])
        );
    }

    #[test]
    fn type_keeps_spaces() {
        let line = parse("type Hi there");
        assert!(line.gesture);
        assert_eq!(line.events.len(), "Hi there".len());
        assert_eq!(line.events[2], Event::Key(Key::Char(' ')));
    }

    #[test]
    fn open_is_a_programmatic_request() {
        let line = parse("open 9");
        assert!(!line.gesture);
        assert_eq!(
            line.events,
            vec![Event::OpenLightbox {
                media_id: MediaId(9),
                requested_at_ms: 42
            }]
        );
    }

    #[test]
    fn blank_and_comment_lines_are_skipped() {
        assert_eq!(parse_line("   ", 0).expect("blank"), None);
        assert_eq!(parse_line("# replay of a session", 0).expect("comment"), None);
    }

    #[test]
    fn malformed_lines_are_input_errors() {
        for line in ["dance", "like seven", "sort loudness", "click sideways", "photographer"] {
            assert!(matches!(parse_line(line, 0), Err(FisheyeError::Input(_))), "{line}");
        }
    }

    #[test]
    fn sort_without_order_cycles() {
        assert_eq!(parse("sort").events, vec![Event::CycleSort]);
        assert_eq!(parse("sort date").events, vec![Event::Sort(SortOrder::Date)]);
    }
}
