//! Character state machine.
//!
//! Locomotion is a single [`Mode`], so jumping, sliding and flying can never
//! be active together.  Lane changes are independent of the mode: input moves
//! `target_lane` one step at a time and `x` glides toward it every tick.

use crate::config::GameConfig;
use crate::entities::{CharacterKind, Intent, Lane};
use crate::geometry::{lane_x, lerp, Rect};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Running,
    Jumping,
    Sliding,
    Flying,
}

#[derive(Clone, Debug)]
pub struct Character {
    pub kind: CharacterKind,
    /// Settled lane, copied from `target_lane` on every update.
    pub lane: Lane,
    pub target_lane: Lane,
    pub x: f32,
    /// Feet position; equals `base_y` while on the ground.
    pub y: f32,
    pub base_y: f32,
    pub velocity_y: f32,
    pub mode: Mode,
    /// Ticks left in the current slide.
    pub slide_timer: u32,
    /// Cyclic running-animation frame, for the renderer only.
    pub animation_frame: u32,
    frame_count: u32,
}

impl Character {
    /// A fresh character standing in the centre lane.
    pub fn new(kind: CharacterKind, config: &GameConfig) -> Self {
        Self {
            kind,
            lane: Lane::Center,
            target_lane: Lane::Center,
            x: lane_x(Lane::Center, config.width, config.lane_width),
            y: config.ground_y,
            base_y: config.ground_y,
            velocity_y: 0.0,
            mode: Mode::Running,
            slide_timer: 0,
            animation_frame: 0,
            frame_count: 0,
        }
    }

    pub fn is_jumping(&self) -> bool {
        self.mode == Mode::Jumping
    }

    pub fn is_sliding(&self) -> bool {
        self.mode == Mode::Sliding
    }

    pub fn is_flying(&self) -> bool {
        self.mode == Mode::Flying
    }

    // ── Input ─────────────────────────────────────────────────────────────────

    /// Apply one intent.  Ineligible intents (jumping mid-slide, etc.) are
    /// ignored, so calling this between ticks is always safe.
    pub fn apply(&mut self, intent: Intent, config: &GameConfig) {
        match intent {
            Intent::MoveLeft => self.move_left(),
            Intent::MoveRight => self.move_right(),
            Intent::Jump => self.jump(config),
            Intent::Slide => self.slide(config),
        }
    }

    pub fn move_left(&mut self) {
        self.target_lane = self.target_lane.left();
    }

    pub fn move_right(&mut self) {
        self.target_lane = self.target_lane.right();
    }

    pub fn jump(&mut self, config: &GameConfig) {
        if self.mode == Mode::Running {
            self.mode = Mode::Jumping;
            self.velocity_y = config.jump_force;
        }
    }

    pub fn slide(&mut self, config: &GameConfig) {
        if self.mode == Mode::Running {
            self.mode = Mode::Sliding;
            self.slide_timer = config.slide_ticks;
        }
    }

    // ── Power-up transitions ──────────────────────────────────────────────────

    /// Enter flight, cancelling any jump or slide in progress.
    pub fn start_flying(&mut self) {
        self.mode = Mode::Flying;
        self.velocity_y = 0.0;
        self.slide_timer = 0;
    }

    /// Leave flight by dropping from above the baseline as a falling jump.
    pub fn stop_flying(&mut self, config: &GameConfig) {
        if self.mode != Mode::Flying {
            return;
        }
        self.mode = Mode::Jumping;
        self.y = self.base_y - config.fall_height_after_flight;
        self.velocity_y = 0.0;
    }

    // ── Per-tick update ───────────────────────────────────────────────────────

    pub fn update(&mut self, config: &GameConfig) {
        let target_x = lane_x(self.target_lane, config.width, config.lane_width);
        self.x = lerp(self.x, target_x, config.lane_smoothing);
        self.lane = self.target_lane;

        match self.mode {
            Mode::Running => {}
            Mode::Jumping => {
                self.velocity_y += config.gravity;
                self.y += self.velocity_y;
                if self.y >= self.base_y {
                    self.y = self.base_y;
                    self.velocity_y = 0.0;
                    self.mode = Mode::Running;
                }
            }
            Mode::Sliding => {
                self.slide_timer = self.slide_timer.saturating_sub(1);
                if self.slide_timer == 0 {
                    self.mode = Mode::Running;
                }
            }
            Mode::Flying => {
                self.y = lerp(self.y, config.fly_y, config.fly_smoothing);
            }
        }

        self.frame_count += 1;
        if self.frame_count >= config.animation_ticks_per_frame {
            self.frame_count = 0;
            self.animation_frame = (self.animation_frame + 1) % config.animation_frames.max(1);
        }
    }

    /// Collision rectangle: the sprite box shrunk by the margin on each side.
    /// Sliding halves the height and keeps the feet on the ground.
    pub fn hitbox(&self, config: &GameConfig) -> Rect {
        let w = config.char_width;
        let h = config.char_height;
        let m = config.hitbox_margin;
        let slide_offset = if self.is_sliding() { h * 0.5 } else { 0.0 };
        Rect::new(
            self.x - w / 2.0 + m,
            self.y - h + slide_offset + m,
            w - 2.0 * m,
            h - slide_offset - 2.0 * m,
        )
    }
}
