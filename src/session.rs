//! Session controller: one play-through from start to game over.
//!
//! [`Session::tick`] is the whole simulation.  It runs the steps below in a
//! fixed order, because each step reads state written by the ones before it:
//!
//! 1. speed ramp
//! 2. scenery scroll
//! 3. character update
//! 4. power-up window open/close
//! 5. spawning and entity movement
//! 6. collisions, scoring, game over
//! 7. distance
//! 8. particles
//!
//! Time is simulation time only: the sum of the `dt` values passed to
//! `tick`.  Nothing here reads the wall clock, so a seeded RNG makes a
//! session fully reproducible.

use rand::Rng;

use crate::character::Character;
use crate::config::GameConfig;
use crate::entities::{CharacterKind, GameEvent, Intent, Particle, SessionState};
use crate::particles::{spawn_candy_burst, spawn_death_burst, update_particles};
use crate::spawner::SpawnManager;

/// Particles burst from roughly the character's chest.
const BURST_HEIGHT: f32 = 50.0;

/// What one tick did, for the caller to react to.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    pub candies_collected: u32,
    pub hit_obstacle: bool,
    pub events: Vec<GameEvent>,
}

#[derive(Clone, Debug)]
pub struct Session {
    pub config: GameConfig,
    pub state: SessionState,
    pub character: Character,
    pub spawner: SpawnManager,
    pub particles: Vec<Particle>,
    pub score: u32,
    /// Accumulated distance; grows independently of score.
    pub distance: f32,
    pub speed: f32,
    /// Simulation clock in milliseconds since `start_game`.
    pub elapsed_ms: f64,
    /// Scenery scroll position, advanced by the current speed.
    pub scroll_offset: f32,
    pub power_up_active: bool,
    pub power_up_end_ms: f64,
}

impl Session {
    /// A session sitting at the menu.
    pub fn new(config: GameConfig) -> Self {
        let character = Character::new(CharacterKind::default(), &config);
        let spawner = SpawnManager::new(&config, 0.0);
        Self {
            state: SessionState::Menu,
            character,
            spawner,
            particles: Vec::new(),
            score: 0,
            distance: 0.0,
            speed: config.initial_speed,
            elapsed_ms: 0.0,
            scroll_offset: 0.0,
            power_up_active: false,
            power_up_end_ms: 0.0,
            config,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────────

    /// Reset everything and begin playing as `kind`.
    pub fn start_game(&mut self, kind: CharacterKind) {
        log::info!("starting game as {}", kind.name());
        self.character = Character::new(kind, &self.config);
        self.spawner = SpawnManager::new(&self.config, 0.0);
        self.particles.clear();
        self.score = 0;
        self.distance = 0.0;
        self.speed = self.config.initial_speed;
        self.elapsed_ms = 0.0;
        self.scroll_offset = 0.0;
        self.power_up_active = false;
        self.power_up_end_ms = 0.0;
        self.state = SessionState::Playing;
    }

    /// Play again with the same character.
    pub fn restart(&mut self) {
        self.start_game(self.character.kind);
    }

    /// Back to the menu.  The final score stays readable until the next start.
    pub fn change_character(&mut self) {
        log::info!("returning to character select");
        self.state = SessionState::Menu;
    }

    pub fn is_playing(&self) -> bool {
        self.state == SessionState::Playing
    }

    // ── Input ─────────────────────────────────────────────────────────────────

    /// Apply a player intent immediately.  Ignored unless playing.
    pub fn apply_intent(&mut self, intent: Intent) {
        if !self.is_playing() {
            return;
        }
        self.character.apply(intent, &self.config);
    }

    // ── Simulation ────────────────────────────────────────────────────────────

    /// Advance the simulation by `dt_ms` milliseconds.  Does nothing outside
    /// the playing state.
    pub fn tick(&mut self, dt_ms: f64, rng: &mut impl Rng) -> TickReport {
        let mut report = TickReport::default();
        if !self.is_playing() {
            return report;
        }

        let dt_ms = if dt_ms.is_finite() && dt_ms > 0.0 { dt_ms } else { 0.0 };
        self.elapsed_ms += dt_ms;
        let now = self.elapsed_ms;
        log::trace!("tick: dt={dt_ms:.2}ms now={now:.0}ms");

        // ── 1. Speed ramp ────────────────────────────────────────────────────
        self.speed = current_speed(&self.config, now).max(self.speed);

        // ── 2. Scenery ───────────────────────────────────────────────────────
        self.scroll_offset += self.speed;

        // ── 3. Character ─────────────────────────────────────────────────────
        self.character.update(&self.config);

        // ── 4. Power-up window ───────────────────────────────────────────────
        if self.power_up_active {
            if now > self.power_up_end_ms {
                self.end_power_up(now);
                report.events.push(GameEvent::PowerUpEnded);
            }
        } else if self.spawner.is_dragon_ready() {
            self.begin_power_up(now);
            report.events.push(GameEvent::PowerUpStarted);
        }

        // ── 5. Spawning & movement ───────────────────────────────────────────
        if self.power_up_active {
            self.spawner.advance_candies_and_dragon(self.speed, &self.config);
        } else {
            self.spawner.update(now, self.speed, &self.config, rng);
        }

        // ── 6. Collisions ────────────────────────────────────────────────────
        let collision = self.spawner.check_collisions(&self.character, &self.config);
        report.candies_collected = collision.candies_collected;
        report.hit_obstacle = collision.hit_obstacle;

        if collision.candies_collected > 0 {
            self.score += collision.candies_collected * self.config.candy_points;
            spawn_candy_burst(
                &mut self.particles,
                self.character.x,
                self.character.y - BURST_HEIGHT,
                rng,
            );
            report.events.push(GameEvent::CandyCollected {
                count: collision.candies_collected,
            });
        }

        if collision.hit_obstacle && !self.power_up_active {
            self.game_over(rng);
            report.events.push(GameEvent::GameOver {
                score: self.score,
                distance: self.distance,
            });
            return report;
        }

        // ── 7. Distance ──────────────────────────────────────────────────────
        self.distance += self.speed * self.config.distance_multiplier;

        // ── 8. Particles ─────────────────────────────────────────────────────
        update_particles(&mut self.particles);

        report
    }

    fn begin_power_up(&mut self, now: f64) {
        log::debug!("power-up started at {now:.0}ms");
        self.power_up_active = true;
        self.power_up_end_ms = now + self.config.dragon_duration_ms;
        self.character.start_flying();
        self.spawner.clear_obstacles();
    }

    fn end_power_up(&mut self, now: f64) {
        log::debug!("power-up ended at {now:.0}ms");
        self.power_up_active = false;
        self.character.stop_flying(&self.config);
        self.spawner.rearm_dragon(now);
    }

    fn game_over(&mut self, rng: &mut impl Rng) {
        log::info!(
            "game over: score={} distance={}",
            self.score,
            self.distance.floor()
        );
        self.state = SessionState::GameOver;
        spawn_death_burst(
            &mut self.particles,
            self.character.x,
            self.character.y - BURST_HEIGHT,
            rng,
        );
    }
}

/// `min(max_speed, initial_speed + elapsed * speed_increment)`.
pub fn current_speed(config: &GameConfig, elapsed_ms: f64) -> f32 {
    let ramped = config.initial_speed as f64 + elapsed_ms.max(0.0) * config.speed_increment;
    ramped.min(config.max_speed as f64) as f32
}
