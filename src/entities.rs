//! Shared game data types: plain values, no simulation logic.

// ── Lanes ─────────────────────────────────────────────────────────────────────

/// One of the three horizontal tracks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lane {
    Left,
    Center,
    Right,
}

impl Lane {
    pub const ALL: [Lane; 3] = [Lane::Left, Lane::Center, Lane::Right];

    pub fn index(self) -> usize {
        match self {
            Lane::Left => 0,
            Lane::Center => 1,
            Lane::Right => 2,
        }
    }

    /// `None` for anything outside 0..=2.
    pub fn from_index(index: usize) -> Option<Lane> {
        Lane::ALL.get(index).copied()
    }

    /// Neighbour to the left, clamped at the edge.
    pub fn left(self) -> Lane {
        match self {
            Lane::Left | Lane::Center => Lane::Left,
            Lane::Right => Lane::Center,
        }
    }

    /// Neighbour to the right, clamped at the edge.
    pub fn right(self) -> Lane {
        match self {
            Lane::Left => Lane::Center,
            Lane::Center | Lane::Right => Lane::Right,
        }
    }
}

// ── Session-level enums ───────────────────────────────────────────────────────

/// Playable characters.  Purely cosmetic: every character shares the same
/// physics and hitbox.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CharacterKind {
    #[default]
    Skeleton,
    Kitty,
    Miles,
}

impl CharacterKind {
    pub const ALL: [CharacterKind; 3] =
        [CharacterKind::Skeleton, CharacterKind::Kitty, CharacterKind::Miles];

    pub fn name(self) -> &'static str {
        match self {
            CharacterKind::Skeleton => "Skeleton",
            CharacterKind::Kitty => "Kitty",
            CharacterKind::Miles => "Miles",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Menu,
    Playing,
    GameOver,
}

/// A discrete, already-debounced player command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    MoveLeft,
    MoveRight,
    Jump,
    Slide,
}

/// Something that happened during a tick, for UI feedback.
#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    CandyCollected { count: u32 },
    PowerUpStarted,
    PowerUpEnded,
    GameOver { score: u32, distance: f32 },
}

// ── Colours ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Candy wrappers and pickup sparks pick from this set.
pub const CANDY_COLORS: [Rgb; 6] = [
    Rgb(0xff, 0x69, 0xb4),
    Rgb(0x00, 0xd4, 0xff),
    Rgb(0xff, 0xd7, 0x00),
    Rgb(0xff, 0x6b, 0x35),
    Rgb(0x4a, 0xde, 0x80),
    Rgb(0x9b, 0x4d, 0xca),
];

pub const ACCENT_ORANGE: Rgb = Rgb(0xff, 0x6b, 0x35);

// ── Particles ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub size: f32,
    pub color: Rgb,
    /// Remaining life in (0, 1]; the particle is dropped at or below zero.
    pub life: f32,
    pub decay: f32,
    pub gravity: f32,
}
