//! Scrolling entities: obstacles, candies and the dragon power-up.
//!
//! Every obstacle kind is a variant of [`ObstacleBody`], which carries that
//! kind's cosmetic state.  Hitbox shape and avoidance rules are decided by an
//! exhaustive `match` on the kind, so adding a variant forces every rule to
//! be revisited.
//!
//! Entities are anchored at their bottom edge: `scroll_y` grows by the
//! current game speed each tick, moving the entity down toward the player.

use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{Lane, Rgb, CANDY_COLORS};
use crate::geometry::{lane_x, lerp, Rect};

// ── Obstacle kinds ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObstacleKind {
    Tunnel,
    Truck,
    Tombstone,
    PumpkinBomb,
    GhostSwarm,
    SpiderWeb,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 6] = [
        ObstacleKind::Tunnel,
        ObstacleKind::Truck,
        ObstacleKind::Tombstone,
        ObstacleKind::PumpkinBomb,
        ObstacleKind::GhostSwarm,
        ObstacleKind::SpiderWeb,
    ];

    /// Nominal sprite size `(width, height)`.
    pub fn size(self) -> (f32, f32) {
        match self {
            ObstacleKind::Tunnel => (100.0, 80.0),
            ObstacleKind::Truck => (90.0, 70.0),
            ObstacleKind::Tombstone => (50.0, 70.0),
            ObstacleKind::PumpkinBomb => (45.0, 45.0),
            ObstacleKind::GhostSwarm => (80.0, 60.0),
            ObstacleKind::SpiderWeb => (70.0, 70.0),
        }
    }

    pub fn can_slide_under(self) -> bool {
        matches!(self, ObstacleKind::Tunnel | ObstacleKind::GhostSwarm)
    }

    pub fn can_jump_over(self) -> bool {
        matches!(self, ObstacleKind::Tunnel)
    }

    pub fn name(self) -> &'static str {
        match self {
            ObstacleKind::Tunnel => "tunnel",
            ObstacleKind::Truck => "truck",
            ObstacleKind::Tombstone => "tombstone",
            ObstacleKind::PumpkinBomb => "pumpkin",
            ObstacleKind::GhostSwarm => "ghosts",
            ObstacleKind::SpiderWeb => "web",
        }
    }
}

/// One ghost of a [`ObstacleBody::GhostSwarm`], offset from the swarm centre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ghost {
    pub offset_x: f32,
    pub offset_y: f32,
    pub size: f32,
    pub phase: f32,
    pub speed: f32,
}

const GHOSTS_PER_SWARM: usize = 4;
const EPITAPHS: [&str; 3] = ["RIP", "BOO", "R.I.P"];
const PUMPKIN_SPIN: f32 = 8.0;

/// Kind-specific payload.  Everything here is cosmetic; gameplay only
/// depends on the kind.
#[derive(Clone, Debug, PartialEq)]
pub enum ObstacleBody {
    Tunnel { vine_phase: f32 },
    Truck { glow_phase: f32 },
    Tombstone { epitaph: &'static str },
    PumpkinBomb { rotation: f32 },
    GhostSwarm { ghosts: [Ghost; GHOSTS_PER_SWARM] },
    SpiderWeb { web_phase: f32 },
}

impl ObstacleBody {
    pub fn new(kind: ObstacleKind, rng: &mut impl Rng) -> Self {
        match kind {
            ObstacleKind::Tunnel => ObstacleBody::Tunnel { vine_phase: 0.0 },
            ObstacleKind::Truck => ObstacleBody::Truck { glow_phase: 0.0 },
            ObstacleKind::Tombstone => ObstacleBody::Tombstone {
                epitaph: EPITAPHS[rng.gen_range(0..EPITAPHS.len())],
            },
            ObstacleKind::PumpkinBomb => ObstacleBody::PumpkinBomb { rotation: 0.0 },
            ObstacleKind::GhostSwarm => ObstacleBody::GhostSwarm {
                ghosts: std::array::from_fn(|_| Ghost {
                    offset_x: rng.gen_range(-30..=30) as f32,
                    offset_y: rng.gen_range(-20..=10) as f32,
                    size: rng.gen_range(15..=25) as f32,
                    phase: rng.gen_range(0..=100) as f32,
                    speed: rng.gen_range(0.03..0.06),
                }),
            },
            ObstacleKind::SpiderWeb => ObstacleBody::SpiderWeb { web_phase: 0.0 },
        }
    }

    pub fn kind(&self) -> ObstacleKind {
        match self {
            ObstacleBody::Tunnel { .. } => ObstacleKind::Tunnel,
            ObstacleBody::Truck { .. } => ObstacleKind::Truck,
            ObstacleBody::Tombstone { .. } => ObstacleKind::Tombstone,
            ObstacleBody::PumpkinBomb { .. } => ObstacleKind::PumpkinBomb,
            ObstacleBody::GhostSwarm { .. } => ObstacleKind::GhostSwarm,
            ObstacleBody::SpiderWeb { .. } => ObstacleKind::SpiderWeb,
        }
    }

    fn animate(&mut self) {
        match self {
            ObstacleBody::Tunnel { vine_phase } => *vine_phase += 0.05,
            ObstacleBody::Truck { glow_phase } => *glow_phase += 0.08,
            ObstacleBody::Tombstone { .. } => {}
            ObstacleBody::PumpkinBomb { rotation } => *rotation = (*rotation + PUMPKIN_SPIN) % 360.0,
            ObstacleBody::GhostSwarm { ghosts } => {
                for ghost in ghosts.iter_mut() {
                    ghost.phase += ghost.speed;
                }
            }
            ObstacleBody::SpiderWeb { web_phase } => *web_phase += 0.02,
        }
    }
}

// ── Obstacle ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    pub lane: Lane,
    /// Bottom edge in world pixels.
    pub scroll_y: f32,
    pub active: bool,
    pub width: f32,
    pub height: f32,
    pub body: ObstacleBody,
}

impl Obstacle {
    pub fn new(kind: ObstacleKind, lane: Lane, scroll_y: f32, rng: &mut impl Rng) -> Self {
        let (width, height) = kind.size();
        Self {
            lane,
            scroll_y,
            active: true,
            width,
            height,
            body: ObstacleBody::new(kind, rng),
        }
    }

    pub fn kind(&self) -> ObstacleKind {
        self.body.kind()
    }

    pub fn update(&mut self, speed: f32, config: &GameConfig) {
        self.scroll_y += speed;
        if self.scroll_y > config.height + config.despawn_margin {
            self.active = false;
        }
        self.body.animate();
    }

    pub fn hitbox(&self, config: &GameConfig) -> Rect {
        let left = lane_x(self.lane, config.width, config.lane_width) - self.width / 2.0;
        let top = self.scroll_y - self.height;
        match self.kind() {
            // Only the arch is solid; the opening underneath is clear.
            ObstacleKind::Tunnel => Rect::new(left, top, self.width, self.height * 0.6),
            ObstacleKind::Truck => {
                Rect::new(left + 10.0, top + 15.0, self.width - 20.0, self.height - 25.0)
            }
            ObstacleKind::GhostSwarm => {
                Rect::new(left, top - 20.0, self.width, self.height * 0.7)
            }
            ObstacleKind::Tombstone | ObstacleKind::PumpkinBomb | ObstacleKind::SpiderWeb => {
                Rect::new(left, top, self.width, self.height)
            }
        }
    }

    /// Whether an overlap with this obstacle is harmless given how the
    /// character is moving.
    pub fn is_avoided(&self, sliding: bool, jumping: bool) -> bool {
        let kind = self.kind();
        (kind.can_slide_under() && sliding) || (kind.can_jump_over() && jumping)
    }
}

// ── Candy ─────────────────────────────────────────────────────────────────────

const CANDY_SIZE: f32 = 25.0;
const COLLECT_STEP: f32 = 0.1;

#[derive(Clone, Debug, PartialEq)]
pub struct Candy {
    pub lane: Lane,
    /// Vertical centre in world pixels.
    pub scroll_y: f32,
    pub active: bool,
    pub collected: bool,
    /// Fade-out progress after collection, 0..=1.
    pub collect_progress: f32,
    pub color: Rgb,
    pub rotation: f32,
    rotation_speed: f32,
}

impl Candy {
    pub fn new(lane: Lane, scroll_y: f32, rng: &mut impl Rng) -> Self {
        Self {
            lane,
            scroll_y,
            active: true,
            collected: false,
            collect_progress: 0.0,
            color: CANDY_COLORS[rng.gen_range(0..CANDY_COLORS.len())],
            rotation: rng.gen_range(0..=360) as f32,
            rotation_speed: rng.gen_range(2.0..5.0),
        }
    }

    pub fn update(&mut self, speed: f32, config: &GameConfig) {
        self.scroll_y += speed;
        if self.scroll_y > config.height + config.despawn_margin {
            self.active = false;
        }
        self.rotation = (self.rotation + self.rotation_speed) % 360.0;

        if self.collected {
            self.collect_progress = (self.collect_progress + COLLECT_STEP).min(1.0);
            if self.collect_progress >= 1.0 {
                self.active = false;
            }
        }
    }

    /// Mark as collected.  Returns `false` if it already was.
    pub fn collect(&mut self) -> bool {
        if self.collected {
            return false;
        }
        self.collected = true;
        true
    }

    pub fn hitbox(&self, config: &GameConfig) -> Rect {
        let x = lane_x(self.lane, config.width, config.lane_width);
        Rect::new(
            x - CANDY_SIZE / 2.0,
            self.scroll_y - CANDY_SIZE / 2.0,
            CANDY_SIZE,
            CANDY_SIZE,
        )
    }
}

// ── Dragon ────────────────────────────────────────────────────────────────────

const DRAGON_Y: f32 = 150.0;
const DRAGON_OFFSCREEN: f32 = 100.0;
const DRAGON_APPROACH: f32 = 0.05;
/// Horizontal distance from the pickup point at which the dragon grabs on.
const DRAGON_PICKUP_RANGE: f32 = 50.0;
const DRAGON_WING_STEP: f32 = 8.0;

/// The flight power-up.  One per session; it is re-armed rather than
/// respawned.
#[derive(Clone, Debug, PartialEq)]
pub struct Dragon {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub active: bool,
    pub carrying: bool,
    pub wing_phase: f32,
    target_x: f32,
    start_x: f32,
}

impl Dragon {
    pub fn new(config: &GameConfig) -> Self {
        let start_x = config.width + DRAGON_OFFSCREEN;
        Self {
            x: start_x,
            y: DRAGON_Y,
            width: 150.0,
            height: 80.0,
            active: false,
            carrying: false,
            wing_phase: 0.0,
            target_x: config.width / 2.0,
            start_x,
        }
    }

    /// Start a fresh approach from off-screen.
    pub fn activate(&mut self) {
        self.active = true;
        self.carrying = false;
        self.x = self.start_x;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
        self.carrying = false;
    }

    /// Carrying the character and ready to start the power-up window.
    pub fn is_ready(&self) -> bool {
        self.active && self.carrying
    }

    pub fn update(&mut self) {
        if !self.active {
            return;
        }
        self.wing_phase += DRAGON_WING_STEP;

        if !self.carrying {
            self.x = lerp(self.x, self.target_x, DRAGON_APPROACH);
            if (self.x - self.target_x).abs() < DRAGON_PICKUP_RANGE {
                self.carrying = true;
            }
        }
    }
}
