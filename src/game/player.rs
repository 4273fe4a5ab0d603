use std::fmt;

use rand::Rng;

use crate::error::ColorParseError;

/// Index of a player in the session's ordered player list. Board cells store
/// these as occupancy markers; comparing ids replaces comparing player
/// references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerId(pub usize);

/// 24-bit RGB display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Parse a `#rrggbb` hex string (case-insensitive).
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError(s.to_string()))?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError(s.to_string()));
        }
        let value = u32::from_str_radix(hex, 16).map_err(|_| ColorParseError(s.to_string()))?;
        Ok(Color {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        })
    }

    /// Format as lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// A uniformly random 24-bit color, used for the bot's piece.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let value = rng.random_range(0..0x100_0000u32);
        Color {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// A game participant, immutable once created. Humans carry a configured
/// color and optional label; the bot's color is auto-generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Player {
    Human { color: Color, label: Option<String> },
    Bot { color: Color },
}

impl Player {
    pub fn human(color: Color, label: Option<String>) -> Self {
        Player::Human { color, label }
    }

    /// A bot player with a random color.
    pub fn bot<R: Rng>(rng: &mut R) -> Self {
        Player::Bot {
            color: Color::random(rng),
        }
    }

    pub fn is_bot(&self) -> bool {
        matches!(self, Player::Bot { .. })
    }

    pub fn color(&self) -> Color {
        match self {
            Player::Human { color, .. } | Player::Bot { color } => *color,
        }
    }

    /// Display name: a human's label if present, else its hex color; the bot
    /// has a fixed name.
    pub fn name(&self) -> String {
        match self {
            Player::Human {
                label: Some(label), ..
            } => label.clone(),
            Player::Human { color, .. } => color.to_hex(),
            Player::Bot { .. } => "bot".to_string(),
        }
    }

    /// The announcement shown when this player wins.
    pub fn win_message(&self) -> String {
        match self {
            Player::Human { .. } => format!("The {} player won!", self.name()),
            Player::Bot { .. } => "The bot won this one!".to_string(),
        }
    }
}
