use halloween_runner::character::{Character, Mode};
use halloween_runner::entities::{CharacterKind, Intent, Lane};
use halloween_runner::GameConfig;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn make_character() -> (Character, GameConfig) {
    let config = GameConfig::default();
    (Character::new(CharacterKind::Skeleton, &config), config)
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

// ── Construction ──────────────────────────────────────────────────────────────

#[test]
fn new_character_runs_in_centre_lane() {
    let (c, config) = make_character();
    assert_eq!(c.lane, Lane::Center);
    assert_eq!(c.target_lane, Lane::Center);
    assert_eq!(c.x, 400.0);
    assert_eq!(c.y, config.ground_y);
    assert_eq!(c.mode, Mode::Running);
    assert_eq!(c.animation_frame, 0);
}

// ── Lanes ─────────────────────────────────────────────────────────────────────

#[test]
fn move_left_at_left_edge_is_noop() {
    let (mut c, _) = make_character();
    c.move_left();
    c.move_left();
    assert_eq!(c.target_lane, Lane::Left);
    c.move_left();
    assert_eq!(c.target_lane, Lane::Left);
}

#[test]
fn move_right_at_right_edge_is_noop() {
    let (mut c, _) = make_character();
    c.move_right();
    c.move_right();
    c.move_right();
    assert_eq!(c.target_lane, Lane::Right);
}

#[test]
fn lane_change_glides_with_exponential_smoothing() {
    let (mut c, config) = make_character();
    c.move_left();
    c.update(&config);
    // lerp(400, 280, 0.2)
    assert!(approx(c.x, 376.0), "x = {}", c.x);
    assert_eq!(c.lane, Lane::Left);

    c.update(&config);
    assert!(approx(c.x, 376.0 + (280.0 - 376.0) * 0.2));

    for _ in 0..60 {
        c.update(&config);
    }
    assert!(approx(c.x, 280.0));
}

#[test]
fn lane_change_works_mid_jump() {
    let (mut c, config) = make_character();
    c.jump(&config);
    c.move_right();
    c.update(&config);
    assert!(c.is_jumping());
    assert_eq!(c.lane, Lane::Right);
    assert!(c.x > 400.0);
}

// ── Jumping ───────────────────────────────────────────────────────────────────

#[test]
fn jump_sets_upward_impulse() {
    let (mut c, config) = make_character();
    c.jump(&config);
    assert!(c.is_jumping());
    assert_eq!(c.velocity_y, -18.0);
}

#[test]
fn jump_rises_then_lands_on_baseline() {
    let (mut c, config) = make_character();
    c.jump(&config);

    let mut peak = c.y;
    for _ in 0..40 {
        c.update(&config);
        peak = peak.min(c.y);
    }
    assert!(c.is_jumping());
    assert!(peak < 300.0, "peak = {peak}");

    for _ in 0..10 {
        c.update(&config);
    }
    assert_eq!(c.mode, Mode::Running);
    assert_eq!(c.y, config.ground_y);
    assert_eq!(c.velocity_y, 0.0);
}

#[test]
fn double_jump_is_ignored() {
    let (mut c, config) = make_character();
    c.jump(&config);
    c.update(&config);
    let vy = c.velocity_y;
    c.jump(&config);
    assert_eq!(c.velocity_y, vy);
}

// ── Sliding ───────────────────────────────────────────────────────────────────

#[test]
fn slide_lasts_fixed_number_of_ticks() {
    let (mut c, config) = make_character();
    c.slide(&config);
    assert!(c.is_sliding());
    for _ in 0..29 {
        c.update(&config);
    }
    assert!(c.is_sliding());
    c.update(&config);
    assert_eq!(c.mode, Mode::Running);
}

#[test]
fn cannot_jump_while_sliding_or_slide_while_jumping() {
    let (mut c, config) = make_character();
    c.slide(&config);
    c.jump(&config);
    assert!(c.is_sliding());
    assert_eq!(c.velocity_y, 0.0);

    let (mut c, config) = make_character();
    c.jump(&config);
    c.slide(&config);
    assert!(c.is_jumping());
    assert_eq!(c.slide_timer, 0);
}

// ── Flying ────────────────────────────────────────────────────────────────────

#[test]
fn start_flying_overrides_jump_and_slide() {
    let (mut c, config) = make_character();
    c.jump(&config);
    c.start_flying();
    assert_eq!(c.mode, Mode::Flying);

    let (mut c, config) = make_character();
    c.slide(&config);
    c.start_flying();
    assert_eq!(c.mode, Mode::Flying);
    assert_eq!(c.slide_timer, 0);
}

#[test]
fn flying_rises_toward_flight_altitude_and_ignores_input() {
    let (mut c, config) = make_character();
    c.start_flying();
    c.jump(&config);
    c.slide(&config);
    assert!(c.is_flying());

    c.update(&config);
    assert!(approx(c.y, 480.0 + (150.0 - 480.0) * 0.1));
    for _ in 0..200 {
        c.update(&config);
    }
    assert!(approx(c.y, config.fly_y));
}

#[test]
fn stop_flying_drops_into_a_fall() {
    let (mut c, config) = make_character();
    c.start_flying();
    for _ in 0..20 {
        c.update(&config);
    }
    c.stop_flying(&config);
    assert!(c.is_jumping());
    assert_eq!(c.y, 380.0);
    assert_eq!(c.velocity_y, 0.0);

    for _ in 0..30 {
        c.update(&config);
    }
    assert_eq!(c.mode, Mode::Running);
    assert_eq!(c.y, config.ground_y);
}

#[test]
fn stop_flying_when_not_flying_is_noop() {
    let (mut c, config) = make_character();
    c.stop_flying(&config);
    assert_eq!(c.mode, Mode::Running);
    assert_eq!(c.y, config.ground_y);
}

// ── Hitbox ────────────────────────────────────────────────────────────────────

#[test]
fn hitbox_is_inset_by_margin() {
    let (c, config) = make_character();
    let hb = c.hitbox(&config);
    assert_eq!((hb.x, hb.y, hb.width, hb.height), (380.0, 390.0, 40.0, 80.0));
}

#[test]
fn sliding_hitbox_is_lowered_and_halved() {
    let (mut c, config) = make_character();
    c.slide(&config);
    let hb = c.hitbox(&config);
    assert_eq!((hb.x, hb.y, hb.width, hb.height), (380.0, 440.0, 40.0, 30.0));
    // feet stay on the same line
    assert_eq!(hb.bottom(), 470.0);
}

// ── Animation ─────────────────────────────────────────────────────────────────

#[test]
fn animation_frame_cycles_every_four_ticks() {
    let (mut c, config) = make_character();
    for _ in 0..3 {
        c.update(&config);
    }
    assert_eq!(c.animation_frame, 0);
    c.update(&config);
    assert_eq!(c.animation_frame, 1);
    for _ in 0..(4 * 7) {
        c.update(&config);
    }
    assert_eq!(c.animation_frame, 0);
}

// ── Invariants under arbitrary input ──────────────────────────────────────────

#[test]
fn modes_stay_exclusive_and_lanes_in_range() {
    let (mut c, config) = make_character();
    let mut rng = StdRng::seed_from_u64(7);
    let intents = [Intent::MoveLeft, Intent::MoveRight, Intent::Jump, Intent::Slide];

    for step in 0..5_000 {
        match rng.gen_range(0..10) {
            0..=5 => c.apply(intents[rng.gen_range(0..intents.len())], &config),
            6 => c.start_flying(),
            7 => c.stop_flying(&config),
            _ => {}
        }
        c.update(&config);

        let active = [c.is_jumping(), c.is_sliding(), c.is_flying()]
            .iter()
            .filter(|&&on| on)
            .count();
        assert!(active <= 1, "step {step}: {:?}", c.mode);
        assert!(c.target_lane.index() <= 2);
        assert!(c.y <= config.ground_y);
    }
}
