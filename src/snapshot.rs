//! Read-only per-frame view of a session, for renderers.
//!
//! A snapshot owns copies of everything a renderer needs, including the
//! horizontal screen position of every lane-bound entity, so drawing code
//! never has to know about lanes or config.

use crate::character::Mode;
use crate::entities::{CharacterKind, Lane, Particle, Rgb, SessionState};
use crate::geometry::{lane_x, Rect};
use crate::obstacles::{ObstacleBody, ObstacleKind};
use crate::session::Session;

#[derive(Clone, Debug, PartialEq)]
pub struct CharacterPose {
    pub kind: CharacterKind,
    pub lane: Lane,
    pub x: f32,
    pub y: f32,
    pub mode: Mode,
    pub animation_frame: u32,
    pub hitbox: Rect,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObstacleView {
    pub kind: ObstacleKind,
    pub lane: Lane,
    /// Lane centre in world pixels.
    pub x: f32,
    pub scroll_y: f32,
    pub width: f32,
    pub height: f32,
    pub body: ObstacleBody,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CandyView {
    pub lane: Lane,
    pub x: f32,
    pub scroll_y: f32,
    pub collected: bool,
    pub collect_progress: f32,
    pub color: Rgb,
    pub rotation: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DragonView {
    pub x: f32,
    pub y: f32,
    pub active: bool,
    pub carrying: bool,
    pub wing_phase: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Hud {
    pub score: u32,
    /// Floored for display.
    pub distance: u64,
    pub speed: f32,
    pub power_up_visible: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderSnapshot {
    pub state: SessionState,
    pub world_width: f32,
    pub world_height: f32,
    pub lane_width: f32,
    pub ground_y: f32,
    pub scroll_offset: f32,
    pub character: CharacterPose,
    pub obstacles: Vec<ObstacleView>,
    pub candies: Vec<CandyView>,
    pub dragon: DragonView,
    pub particles: Vec<Particle>,
    pub hud: Hud,
}

impl Session {
    pub fn snapshot(&self) -> RenderSnapshot {
        let config = &self.config;
        let x_of = |lane: Lane| lane_x(lane, config.width, config.lane_width);

        let character = CharacterPose {
            kind: self.character.kind,
            lane: self.character.lane,
            x: self.character.x,
            y: self.character.y,
            mode: self.character.mode,
            animation_frame: self.character.animation_frame,
            hitbox: self.character.hitbox(config),
        };

        let obstacles = self
            .spawner
            .obstacles
            .iter()
            .filter(|o| o.active)
            .map(|o| ObstacleView {
                kind: o.kind(),
                lane: o.lane,
                x: x_of(o.lane),
                scroll_y: o.scroll_y,
                width: o.width,
                height: o.height,
                body: o.body.clone(),
            })
            .collect();

        let candies = self
            .spawner
            .candies
            .iter()
            .filter(|c| c.active)
            .map(|c| CandyView {
                lane: c.lane,
                x: x_of(c.lane),
                scroll_y: c.scroll_y,
                collected: c.collected,
                collect_progress: c.collect_progress,
                color: c.color,
                rotation: c.rotation,
            })
            .collect();

        let dragon = &self.spawner.dragon;

        RenderSnapshot {
            state: self.state,
            world_width: config.width,
            world_height: config.height,
            lane_width: config.lane_width,
            ground_y: config.ground_y,
            scroll_offset: self.scroll_offset,
            character,
            obstacles,
            candies,
            dragon: DragonView {
                x: dragon.x,
                y: dragon.y,
                active: dragon.active,
                carrying: dragon.carrying,
                wing_phase: dragon.wing_phase,
            },
            particles: self.particles.clone(),
            hud: Hud {
                score: self.score,
                distance: self.distance.max(0.0).floor() as u64,
                speed: self.speed,
                power_up_visible: self.power_up_active,
            },
        }
    }
}
