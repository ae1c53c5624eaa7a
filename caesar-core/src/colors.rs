//! Deterministic display colors for sessions and rooms.

use std::collections::HashMap;

use crate::session::Session;

/// Hues cycled through by the session palette, in palette order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hue {
    Blue,
    Emerald,
    Purple,
    Orange,
    Pink,
    Indigo,
    Red,
    Cyan,
    Teal,
    Lime,
    Yellow,
    Amber,
    Violet,
    Fuchsia,
    Rose,
    Sky,
    Green,
}

impl Hue {
    pub const SESSION_HUES: [Hue; 17] = [
        Hue::Blue,
        Hue::Emerald,
        Hue::Purple,
        Hue::Orange,
        Hue::Pink,
        Hue::Indigo,
        Hue::Red,
        Hue::Cyan,
        Hue::Teal,
        Hue::Lime,
        Hue::Yellow,
        Hue::Amber,
        Hue::Violet,
        Hue::Fuchsia,
        Hue::Rose,
        Hue::Sky,
        Hue::Green,
    ];

    pub const ROOM_HUES: [Hue; 6] = [
        Hue::Blue,
        Hue::Emerald,
        Hue::Purple,
        Hue::Orange,
        Hue::Pink,
        Hue::Indigo,
    ];

    /// Mid-tone RGB for this hue.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Hue::Blue => (59, 130, 246),
            Hue::Emerald => (16, 185, 129),
            Hue::Purple => (168, 85, 247),
            Hue::Orange => (249, 115, 22),
            Hue::Pink => (236, 72, 153),
            Hue::Indigo => (99, 102, 241),
            Hue::Red => (239, 68, 68),
            Hue::Cyan => (6, 182, 212),
            Hue::Teal => (20, 184, 166),
            Hue::Lime => (132, 204, 22),
            Hue::Yellow => (234, 179, 8),
            Hue::Amber => (245, 158, 11),
            Hue::Violet => (139, 92, 246),
            Hue::Fuchsia => (217, 70, 239),
            Hue::Rose => (244, 63, 94),
            Hue::Sky => (14, 165, 233),
            Hue::Green => (34, 197, 94),
        }
    }
}

/// Lightness step applied on top of a hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shade {
    Base,
    Light,
    Dark,
}

impl Shade {
    const ORDER: [Shade; 3] = [Shade::Base, Shade::Light, Shade::Dark];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub hue: Hue,
    pub shade: Shade,
}

impl Color {
    pub fn rgb(self) -> (u8, u8, u8) {
        let (r, g, b) = self.hue.rgb();
        let scale = |c: u8| -> u8 {
            let c = u16::from(c);
            let scaled = match self.shade {
                Shade::Base => c,
                Shade::Light => c + (255 - c) * 35 / 100,
                Shade::Dark => c * 70 / 100,
            };
            // Bounded by 255 for every shade
            scaled as u8
        };
        (scale(r), scale(g), scale(b))
    }
}

/// Number of distinct session colors before they repeat.
pub const SESSION_PALETTE_SIZE: usize = Hue::SESSION_HUES.len() * Shade::ORDER.len();

/// Session color for a color index; wraps modulo the palette size.
pub fn session_color(index: usize) -> Color {
    let index = index % SESSION_PALETTE_SIZE;
    let hues = Hue::SESSION_HUES.len();
    Color {
        hue: Hue::SESSION_HUES[index % hues],
        shade: Shade::ORDER[index / hues],
    }
}

/// Room color for a room's row position; wraps modulo 6.
pub fn room_hue(row: usize) -> Hue {
    Hue::ROOM_HUES[row % Hue::ROOM_HUES.len()]
}

/// Session id -> color index, in first-occurrence order.
///
/// The first distinct id in the list gets 0, the next new id 1, and so on.
/// Recomputing over a reordered list may assign different indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorMap {
    indices: HashMap<String, usize>,
}

impl ColorMap {
    pub fn build(sessions: &[Session]) -> Self {
        let mut indices = HashMap::new();
        for session in sessions {
            let next = indices.len();
            indices.entry(session.id.clone()).or_insert(next);
        }
        ColorMap { indices }
    }

    /// Color index for a session id; unknown ids get 0.
    pub fn index_of(&self, session_id: &str) -> usize {
        self.indices.get(session_id).copied().unwrap_or(0)
    }

    pub fn color_of(&self, session_id: &str) -> Color {
        session_color(self.index_of(session_id))
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionType;

    fn session(id: &str) -> Session {
        Session {
            id: id.to_string(),
            event_id: "e1".to_string(),
            room: "R1".to_string(),
            start_time: "18:00".parse().unwrap(),
            end_time: "18:30".parse().unwrap(),
            name: id.to_string(),
            abstract_text: String::new(),
            session_type: SessionType::Presentation,
            presenter: String::new(),
        }
    }

    #[test]
    fn first_occurrence_order_skips_repeats() {
        let map = ColorMap::build(&[session("A"), session("B"), session("A"), session("C")]);
        assert_eq!(map.index_of("A"), 0);
        assert_eq!(map.index_of("B"), 1);
        assert_eq!(map.index_of("C"), 2);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn unknown_session_gets_first_color() {
        let map = ColorMap::build(&[session("A")]);
        assert_eq!(map.index_of("zzz"), 0);
    }

    #[test]
    fn palette_wraps() {
        assert_eq!(SESSION_PALETTE_SIZE, 51);
        assert_eq!(session_color(0), session_color(51));
        assert_eq!(session_color(17).hue, Hue::Blue);
        assert_eq!(session_color(17).shade, Shade::Light);
        assert_ne!(session_color(0), session_color(17));
    }

    #[test]
    fn shades_lighten_and_darken_the_hue() {
        let (r, g, b) = Hue::Blue.rgb();
        let base = Color { hue: Hue::Blue, shade: Shade::Base }.rgb();
        let light = Color { hue: Hue::Blue, shade: Shade::Light }.rgb();
        let dark = Color { hue: Hue::Blue, shade: Shade::Dark }.rgb();
        assert_eq!(base, (r, g, b));
        assert!(light.0 >= base.0 && light.1 >= base.1 && light.2 >= base.2);
        assert!(light != base);
        assert!(dark.0 <= base.0 && dark.1 <= base.1 && dark.2 <= base.2);
        assert!(dark != base);
    }

    #[test]
    fn room_hues_wrap_after_six() {
        assert_eq!(room_hue(0), Hue::Blue);
        assert_eq!(room_hue(6), Hue::Blue);
        assert_eq!(room_hue(3), Hue::Orange);
    }
}
