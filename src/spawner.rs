//! Spawn scheduling and collision resolution.
//!
//! Three cadences run side by side against the simulation clock: candy
//! clusters, single obstacles, and the dragon.  A cadence fires at most once
//! per tick and re-anchors to the tick time, so a long frame hitch never
//! produces a burst of spawns.

use rand::Rng;

use crate::character::Character;
use crate::config::GameConfig;
use crate::entities::Lane;
use crate::obstacles::{Candy, Dragon, Obstacle, ObstacleKind};

/// Outcome of one collision pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// Candies newly collected this pass.
    pub candies_collected: u32,
    pub hit_obstacle: bool,
}

#[derive(Clone, Debug)]
pub struct SpawnManager {
    pub obstacles: Vec<Obstacle>,
    pub candies: Vec<Candy>,
    pub dragon: Dragon,
    last_candy_ms: f64,
    last_obstacle_ms: f64,
    last_dragon_ms: f64,
}

impl SpawnManager {
    /// Empty pool with every cadence anchored at `now_ms`.
    pub fn new(config: &GameConfig, now_ms: f64) -> Self {
        Self {
            obstacles: Vec::new(),
            candies: Vec::new(),
            dragon: Dragon::new(config),
            last_candy_ms: now_ms,
            last_obstacle_ms: now_ms,
            last_dragon_ms: now_ms,
        }
    }

    // ── Per-tick update ───────────────────────────────────────────────────────

    /// Run all three cadences, then advance every entity by `speed`.
    pub fn update(&mut self, now_ms: f64, speed: f32, config: &GameConfig, rng: &mut impl Rng) {
        if now_ms - self.last_candy_ms > config.candy_interval_ms {
            self.spawn_candy_group(config, rng);
            self.last_candy_ms = now_ms;
        }

        if now_ms - self.last_obstacle_ms > config.obstacle_interval_ms {
            self.spawn_obstacle(config, rng);
            self.last_obstacle_ms = now_ms;
        }

        if now_ms - self.last_dragon_ms > config.dragon_interval_ms && !self.dragon.active {
            log::debug!("dragon activated at {now_ms:.0}ms");
            self.dragon.activate();
            self.last_dragon_ms = now_ms;
        }

        for obstacle in &mut self.obstacles {
            obstacle.update(speed, config);
        }
        self.obstacles.retain(|o| o.active);

        self.advance_candies_and_dragon(speed, config);
    }

    /// Movement without spawning, used while the power-up window is open.
    /// Obstacles are left alone; the window clears them on entry.
    pub fn advance_candies_and_dragon(&mut self, speed: f32, config: &GameConfig) {
        for candy in &mut self.candies {
            candy.update(speed, config);
        }
        self.candies.retain(|c| c.active);

        self.dragon.update();
    }

    // ── Spawning ──────────────────────────────────────────────────────────────

    /// A vertical run of candies in one random lane.
    pub fn spawn_candy_group(&mut self, config: &GameConfig, rng: &mut impl Rng) {
        let lane = Lane::ALL[rng.gen_range(0..Lane::ALL.len())];
        let max = config.candy_cluster_max.max(config.candy_cluster_min);
        let count = rng.gen_range(config.candy_cluster_min..=max);
        self.spawn_candy_cluster(lane, count, config, rng);
    }

    /// `count` candies in `lane`, stacked upward from the candy start line.
    pub fn spawn_candy_cluster(
        &mut self,
        lane: Lane,
        count: u32,
        config: &GameConfig,
        rng: &mut impl Rng,
    ) {
        log::debug!("spawning {count} candies in {lane:?}");
        for i in 0..count {
            let y = config.candy_start_y - i as f32 * config.candy_spacing;
            self.candies.push(Candy::new(lane, y, rng));
        }
    }

    /// One obstacle of a random kind in a random lane.
    pub fn spawn_obstacle(&mut self, config: &GameConfig, rng: &mut impl Rng) {
        let lane = Lane::ALL[rng.gen_range(0..Lane::ALL.len())];
        let kind = ObstacleKind::ALL[rng.gen_range(0..ObstacleKind::ALL.len())];
        self.spawn_obstacle_at(kind, lane, config.obstacle_start_y, rng);
    }

    pub fn spawn_obstacle_at(
        &mut self,
        kind: ObstacleKind,
        lane: Lane,
        scroll_y: f32,
        rng: &mut impl Rng,
    ) {
        log::debug!("spawning {} in {lane:?}", kind.name());
        self.obstacles.push(Obstacle::new(kind, lane, scroll_y, rng));
    }

    // ── Power-up hooks ────────────────────────────────────────────────────────

    pub fn is_dragon_ready(&self) -> bool {
        self.dragon.is_ready()
    }

    pub fn clear_obstacles(&mut self) {
        self.obstacles.clear();
    }

    /// Send the dragon away and restart its cadence from `now_ms`.
    pub fn rearm_dragon(&mut self, now_ms: f64) {
        self.dragon.deactivate();
        self.last_dragon_ms = now_ms;
    }

    // ── Collision ─────────────────────────────────────────────────────────────

    /// Collect every overlapping candy, then look for the first obstacle the
    /// character cannot avoid.  Obstacles are ignored entirely while flying.
    pub fn check_collisions(&mut self, character: &Character, config: &GameConfig) -> CollisionReport {
        let hitbox = character.hitbox(config);
        let mut report = CollisionReport::default();

        for candy in &mut self.candies {
            if !candy.collected && hitbox.overlaps(&candy.hitbox(config)) && candy.collect() {
                report.candies_collected += 1;
            }
        }

        if !character.is_flying() {
            let sliding = character.is_sliding();
            let jumping = character.is_jumping();
            report.hit_obstacle = self.obstacles.iter().any(|obstacle| {
                hitbox.overlaps(&obstacle.hitbox(config)) && !obstacle.is_avoided(sliding, jumping)
            });
        }

        report
    }
}
