use halloween_runner::entities::{Lane, CANDY_COLORS};
use halloween_runner::obstacles::{Candy, Dragon, Obstacle, ObstacleBody, ObstacleKind};
use halloween_runner::GameConfig;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn obstacle(kind: ObstacleKind, lane: Lane, y: f32) -> Obstacle {
    Obstacle::new(kind, lane, y, &mut seeded_rng())
}

// ── Kinds ─────────────────────────────────────────────────────────────────────

#[test]
fn avoidance_flags_per_kind() {
    use ObstacleKind::*;
    assert!(Tunnel.can_slide_under() && Tunnel.can_jump_over());
    assert!(GhostSwarm.can_slide_under() && !GhostSwarm.can_jump_over());
    for kind in [Truck, Tombstone, PumpkinBomb, SpiderWeb] {
        assert!(!kind.can_slide_under(), "{kind:?}");
        assert!(!kind.can_jump_over(), "{kind:?}");
    }
}

#[test]
fn body_matches_requested_kind() {
    let mut rng = seeded_rng();
    for kind in ObstacleKind::ALL {
        let o = Obstacle::new(kind, Lane::Left, 0.0, &mut rng);
        assert_eq!(o.kind(), kind);
        assert_eq!((o.width, o.height), kind.size());
        assert!(o.active);
    }
}

// ── Hitboxes ──────────────────────────────────────────────────────────────────

#[test]
fn tunnel_hitbox_covers_upper_sixty_percent() {
    let config = GameConfig::default();
    let hb = obstacle(ObstacleKind::Tunnel, Lane::Center, 500.0).hitbox(&config);
    assert_eq!((hb.x, hb.y, hb.width), (350.0, 420.0, 100.0));
    assert!((hb.height - 48.0).abs() < 1e-4);
}

#[test]
fn truck_hitbox_is_inset() {
    let config = GameConfig::default();
    let hb = obstacle(ObstacleKind::Truck, Lane::Center, 500.0).hitbox(&config);
    assert_eq!((hb.x, hb.y, hb.width, hb.height), (365.0, 445.0, 70.0, 45.0));
}

#[test]
fn ghost_hitbox_floats_above_ground() {
    let config = GameConfig::default();
    let hb = obstacle(ObstacleKind::GhostSwarm, Lane::Center, 500.0).hitbox(&config);
    assert_eq!((hb.x, hb.y, hb.width), (360.0, 420.0, 80.0));
    assert!((hb.height - 42.0).abs() < 1e-4);
}

#[test]
fn solid_kinds_use_full_box() {
    let config = GameConfig::default();
    let hb = obstacle(ObstacleKind::Tombstone, Lane::Right, 300.0).hitbox(&config);
    assert_eq!((hb.x, hb.y, hb.width, hb.height), (495.0, 230.0, 50.0, 70.0));

    let hb = obstacle(ObstacleKind::SpiderWeb, Lane::Left, 300.0).hitbox(&config);
    assert_eq!((hb.x, hb.y, hb.width, hb.height), (245.0, 230.0, 70.0, 70.0));
}

#[test]
fn avoidance_depends_on_kind_and_pose() {
    let tunnel = obstacle(ObstacleKind::Tunnel, Lane::Center, 0.0);
    assert!(tunnel.is_avoided(true, false));
    assert!(tunnel.is_avoided(false, true));
    assert!(!tunnel.is_avoided(false, false));

    let ghosts = obstacle(ObstacleKind::GhostSwarm, Lane::Center, 0.0);
    assert!(ghosts.is_avoided(true, false));
    assert!(!ghosts.is_avoided(false, true));

    let truck = obstacle(ObstacleKind::Truck, Lane::Center, 0.0);
    assert!(!truck.is_avoided(true, false));
    assert!(!truck.is_avoided(false, true));
}

// ── Movement ──────────────────────────────────────────────────────────────────

#[test]
fn obstacle_scrolls_by_speed_and_expires_past_bottom() {
    let config = GameConfig::default();
    let mut o = obstacle(ObstacleKind::PumpkinBomb, Lane::Center, 690.0);
    o.update(5.0, &config);
    assert_eq!(o.scroll_y, 695.0);
    assert!(o.active);
    o.update(5.0, &config);
    assert!(o.active); // exactly at the bound is still alive
    o.update(5.0, &config);
    assert!(!o.active);
}

#[test]
fn pumpkin_spins_while_scrolling() {
    let config = GameConfig::default();
    let mut o = obstacle(ObstacleKind::PumpkinBomb, Lane::Center, 0.0);
    o.update(3.5, &config);
    o.update(3.5, &config);
    assert_eq!(o.body, ObstacleBody::PumpkinBomb { rotation: 16.0 });
}

// ── Candy ─────────────────────────────────────────────────────────────────────

#[test]
fn candy_collect_is_idempotent() {
    let mut candy = Candy::new(Lane::Left, 0.0, &mut seeded_rng());
    assert!(candy.collect());
    assert!(!candy.collect());
    assert!(candy.collected);
}

#[test]
fn candy_colour_comes_from_palette() {
    let mut rng = seeded_rng();
    for _ in 0..50 {
        let candy = Candy::new(Lane::Right, 0.0, &mut rng);
        assert!(CANDY_COLORS.contains(&candy.color));
    }
}

#[test]
fn collected_candy_animates_out() {
    let config = GameConfig::default();
    let mut candy = Candy::new(Lane::Center, 100.0, &mut seeded_rng());
    candy.update(3.0, &config);
    assert_eq!(candy.collect_progress, 0.0);

    candy.collect();
    for _ in 0..5 {
        candy.update(3.0, &config);
    }
    assert!(candy.active);
    assert!((candy.collect_progress - 0.5).abs() < 1e-4);

    for _ in 0..6 {
        candy.update(3.0, &config);
    }
    assert!(!candy.active);
    assert_eq!(candy.collect_progress, 1.0);
}

#[test]
fn candy_hitbox_is_centred_square() {
    let config = GameConfig::default();
    let candy = Candy::new(Lane::Left, 200.0, &mut seeded_rng());
    let hb = candy.hitbox(&config);
    assert_eq!((hb.x, hb.y, hb.width, hb.height), (267.5, 187.5, 25.0, 25.0));
}

// ── Dragon ────────────────────────────────────────────────────────────────────

#[test]
fn dormant_dragon_does_not_move() {
    let config = GameConfig::default();
    let mut dragon = Dragon::new(&config);
    dragon.update();
    assert!(!dragon.active);
    assert_eq!(dragon.x, 900.0);
    assert!(!dragon.is_ready());
}

#[test]
fn dragon_closes_in_then_carries() {
    let config = GameConfig::default();
    let mut dragon = Dragon::new(&config);
    dragon.activate();

    for _ in 0..44 {
        dragon.update();
    }
    assert!(!dragon.carrying, "x = {}", dragon.x);

    dragon.update();
    assert!(dragon.carrying);
    assert!(dragon.is_ready());

    // Once carrying it holds position.
    let x = dragon.x;
    dragon.update();
    assert_eq!(dragon.x, x);
}

#[test]
fn reactivating_resets_the_approach() {
    let config = GameConfig::default();
    let mut dragon = Dragon::new(&config);
    dragon.activate();
    for _ in 0..60 {
        dragon.update();
    }
    dragon.deactivate();
    assert!(!dragon.is_ready());

    dragon.activate();
    assert_eq!(dragon.x, 900.0);
    assert!(!dragon.carrying);
}
