/// Discrete mode switches delivered by the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Stop everything and return to the rest pose.
    Reset,
    /// Swing the star, dark color only.
    Swing,
    /// Swing and blend the color.
    Shade,
}

impl Command {
    /// Letters are matched case-insensitively so Shift/Caps Lock don't matter.
    pub fn from_char(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            '1' | 'a' => Some(Self::Reset),
            '2' | 'b' => Some(Self::Swing),
            '3' | 'c' => Some(Self::Shade),
            _ => None,
        }
    }

    /// Maps a DOM `KeyboardEvent.key` value. Named keys ("Enter", "Shift", ...)
    /// are ignored.
    pub fn from_key(key: &str) -> Option<Self> {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_event(event: &web_sys::KeyboardEvent) -> Option<Self> {
        Self::from_key(&event.key())
    }
}
