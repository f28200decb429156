//! Short-lived feedback particles.

use rand::Rng;

use crate::entities::{Particle, Rgb, ACCENT_ORANGE, CANDY_COLORS};

const PARTICLE_GRAVITY: f32 = 0.1;

enum Palette {
    Candy,
    Solid(Rgb),
}

/// How a batch of particles is scattered.
struct Burst {
    count: usize,
    palette: Palette,
    vx: (f32, f32),
    vy: (f32, f32),
    size: (u32, u32),
    decay: f32,
}

const CANDY_BURST: Burst = Burst {
    count: 8,
    palette: Palette::Candy,
    vx: (-4.0, 4.0),
    vy: (-6.0, -2.0),
    size: (3, 6),
    decay: 0.03,
};
const DEATH_BURST: Burst = Burst {
    count: 20,
    palette: Palette::Solid(ACCENT_ORANGE),
    vx: (-6.0, 6.0),
    vy: (-8.0, -2.0),
    size: (4, 8),
    decay: 0.02,
};

fn emit(particles: &mut Vec<Particle>, burst: &Burst, x: f32, y: f32, rng: &mut impl Rng) {
    for _ in 0..burst.count {
        let color = match burst.palette {
            Palette::Candy => CANDY_COLORS[rng.gen_range(0..CANDY_COLORS.len())],
            Palette::Solid(color) => color,
        };
        particles.push(Particle {
            x,
            y,
            vx: rng.gen_range(burst.vx.0..burst.vx.1),
            vy: rng.gen_range(burst.vy.0..burst.vy.1),
            size: rng.gen_range(burst.size.0..=burst.size.1) as f32,
            color,
            life: 1.0,
            decay: burst.decay,
            gravity: PARTICLE_GRAVITY,
        });
    }
}

/// Sparks in random candy colours.
pub fn spawn_candy_burst(particles: &mut Vec<Particle>, x: f32, y: f32, rng: &mut impl Rng) {
    emit(particles, &CANDY_BURST, x, y, rng);
}

pub fn spawn_death_burst(particles: &mut Vec<Particle>, x: f32, y: f32, rng: &mut impl Rng) {
    emit(particles, &DEATH_BURST, x, y, rng);
}

/// Integrate one tick and drop particles whose life has run out.
pub fn update_particles(particles: &mut Vec<Particle>) {
    particles.retain_mut(|p| {
        p.x += p.vx;
        p.y += p.vy;
        p.vy += p.gravity;
        p.life -= p.decay;
        p.life > 0.0
    });
}
