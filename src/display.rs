//! Terminal renderer. All terminal drawing lives here.
//!
//! Works only from a [`RenderSnapshot`]: the world (800×600 by default) is
//! scaled onto whatever grid the terminal offers.  No game logic here.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use halloween_runner::character::Mode;
use halloween_runner::entities::{CharacterKind, Rgb, SessionState};
use halloween_runner::obstacles::ObstacleKind;
use halloween_runner::snapshot::{CandyView, CharacterPose, DragonView, ObstacleView, RenderSnapshot};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkMagenta;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_DISTANCE: Color = Color::Cyan;
const C_POWERUP: Color = Color::Rgb { r: 0xff, g: 0x64, b: 0x32 };
const C_LANE: Color = Color::DarkGrey;
const C_GROUND: Color = Color::Rgb { r: 0x5c, g: 0x3d, b: 0x2e };
const C_HINT: Color = Color::DarkGrey;

fn rgb(c: Rgb) -> Color {
    Color::Rgb { r: c.0, g: c.1, b: c.2 }
}

pub fn character_color(kind: CharacterKind) -> Color {
    match kind {
        CharacterKind::Skeleton => Color::Rgb { r: 0xe8, g: 0xdc, b: 0xc8 },
        CharacterKind::Kitty => Color::Rgb { r: 0xff, g: 0x69, b: 0xb4 },
        CharacterKind::Miles => Color::Rgb { r: 0xdc, g: 0x26, b: 0x26 },
    }
}

fn obstacle_style(kind: ObstacleKind) -> (&'static str, Color) {
    match kind {
        ObstacleKind::Tunnel => ("▀", Color::Rgb { r: 0x16, g: 0x65, b: 0x34 }),
        ObstacleKind::Truck => ("█", Color::Rgb { r: 0xe5, g: 0x5a, b: 0x2b }),
        ObstacleKind::Tombstone => ("▓", Color::Rgb { r: 0x4a, g: 0x4a, b: 0x4a }),
        ObstacleKind::PumpkinBomb => ("●", Color::Rgb { r: 0xf9, g: 0x73, b: 0x16 }),
        ObstacleKind::GhostSwarm => ("░", Color::Rgb { r: 0xe8, g: 0xe8, b: 0xff }),
        ObstacleKind::SpiderWeb => ("╳", Color::Rgb { r: 0x88, g: 0x88, b: 0x88 }),
    }
}

// ── World → grid mapping ──────────────────────────────────────────────────────

/// Maps world pixels onto the play area between the borders.
struct Viewport {
    cols: u16,
    rows: u16,
    world_w: f32,
    world_h: f32,
}

impl Viewport {
    const TOP: u16 = 2;

    fn play_cols(&self) -> f32 {
        self.cols.saturating_sub(2).max(1) as f32
    }

    fn play_rows(&self) -> f32 {
        self.rows.saturating_sub(4).max(1) as f32
    }

    fn col(&self, x: f32) -> i32 {
        1 + (x / self.world_w * self.play_cols()).floor() as i32
    }

    fn row(&self, y: f32) -> i32 {
        Self::TOP as i32 + (y / self.world_h * self.play_rows()).floor() as i32
    }

    /// Grid cell if it lies inside the play area.
    fn cell(&self, col: i32, row: i32) -> Option<(u16, u16)> {
        let inside_cols = col >= 1 && col < self.cols as i32 - 1;
        let inside_rows = row >= Self::TOP as i32 && row < self.rows as i32 - 2;
        (inside_cols && inside_rows).then_some((col as u16, row as u16))
    }

    /// Fill the world rectangle with `glyph`, at least one cell big.
    fn fill<W: Write>(
        &self,
        out: &mut W,
        (x, y, w, h): (f32, f32, f32, f32),
        glyph: &str,
    ) -> std::io::Result<()> {
        let c0 = self.col(x);
        let c1 = self.col(x + w).max(c0 + 1);
        let r0 = self.row(y);
        let r1 = self.row(y + h).max(r0 + 1);
        for row in r0..r1 {
            for col in c0..c1 {
                if let Some((c, r)) = self.cell(col, row) {
                    out.queue(cursor::MoveTo(c, r))?;
                    out.queue(Print(glyph))?;
                }
            }
        }
        Ok(())
    }

    fn print_at<W: Write>(&self, out: &mut W, x: f32, y: f32, text: &str) -> std::io::Result<()> {
        let half = text.chars().count() as i32 / 2;
        if let Some((c, r)) = self.cell(self.col(x) - half, self.row(y)) {
            out.queue(cursor::MoveTo(c, r))?;
            out.queue(Print(text))?;
        }
        Ok(())
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, snap: &RenderSnapshot) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let view = Viewport {
        cols,
        rows,
        world_w: snap.world_width,
        world_h: snap.world_height,
    };

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, cols, rows)?;
    draw_track(out, &view, snap)?;
    draw_hud(out, cols, snap)?;

    for candy in &snap.candies {
        draw_candy(out, &view, candy)?;
    }
    for obstacle in &snap.obstacles {
        draw_obstacle(out, &view, obstacle)?;
    }
    draw_character(out, &view, &snap.character)?;
    draw_dragon(out, &view, &snap.dragon)?;
    for p in &snap.particles {
        out.queue(style::SetForegroundColor(rgb(p.color)))?;
        view.print_at(out, p.x, p.y, if p.life > 0.4 { "•" } else { "·" })?;
    }

    draw_controls_hint(out, rows)?;

    if snap.state == SessionState::GameOver {
        draw_game_over(out, cols, rows, snap)?;
    }

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border & track ────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, cols: u16, rows: u16) -> std::io::Result<()> {
    let w = cols as usize;
    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, rows.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..rows.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }
    Ok(())
}

/// Lane dividers and the ground line, both dashed and scrolling with speed.
fn draw_track<W: Write>(out: &mut W, view: &Viewport, snap: &RenderSnapshot) -> std::io::Result<()> {
    let lane_w = snap.lane_width;
    let centre = snap.world_width / 2.0;
    let dash = (snap.scroll_offset / 20.0) as i32;

    out.queue(style::SetForegroundColor(C_LANE))?;
    for k in [-1.5_f32, -0.5, 0.5, 1.5] {
        let col = view.col(centre + k * lane_w);
        for row in Viewport::TOP as i32..view.rows as i32 - 2 {
            if (row - dash).rem_euclid(3) != 0 {
                continue;
            }
            if let Some((c, r)) = view.cell(col, row) {
                out.queue(cursor::MoveTo(c, r))?;
                out.queue(Print("┊"))?;
            }
        }
    }

    out.queue(style::SetForegroundColor(C_GROUND))?;
    let ground_row = view.row(snap.ground_y) + 1;
    for col in 1..view.cols as i32 - 1 {
        if (col + dash).rem_euclid(4) == 0 {
            if let Some((c, r)) = view.cell(col, ground_row) {
                out.queue(cursor::MoveTo(c, r))?;
                out.queue(Print("_"))?;
            }
        }
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, cols: u16, snap: &RenderSnapshot) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Candy:{:>6}", snap.hud.score)))?;

    out.queue(style::SetForegroundColor(C_HUD_DISTANCE))?;
    out.queue(Print(format!("   Distance:{:>7}m", snap.hud.distance)))?;

    if snap.hud.power_up_visible {
        let tag = "[ DRAGON FLIGHT ]";
        let x = cols.saturating_sub(tag.chars().count() as u16 + 1);
        out.queue(cursor::MoveTo(x, 0))?;
        out.queue(style::SetForegroundColor(C_POWERUP))?;
        out.queue(Print(tag))?;
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_candy<W: Write>(out: &mut W, view: &Viewport, candy: &CandyView) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(rgb(candy.color)))?;
    let glyph = if candy.collected {
        if candy.collect_progress < 0.5 { "✦" } else { "·" }
    } else {
        "◆"
    };
    view.print_at(out, candy.x, candy.scroll_y, glyph)
}

fn draw_obstacle<W: Write>(out: &mut W, view: &Viewport, obs: &ObstacleView) -> std::io::Result<()> {
    let (glyph, color) = obstacle_style(obs.kind);
    out.queue(style::SetForegroundColor(color))?;
    let left = obs.x - obs.width / 2.0;
    let top = obs.scroll_y - obs.height;
    match obs.kind {
        // Arch only; the gap underneath stays empty.
        ObstacleKind::Tunnel => view.fill(out, (left, top, obs.width, obs.height * 0.6), glyph),
        ObstacleKind::GhostSwarm => {
            view.fill(out, (left, top - 20.0, obs.width, obs.height * 0.7), glyph)
        }
        _ => view.fill(out, (left, top, obs.width, obs.height), glyph),
    }
}

fn draw_character<W: Write>(out: &mut W, view: &Viewport, pose: &CharacterPose) -> std::io::Result<()> {
    let glyph = match pose.mode {
        Mode::Running if pose.animation_frame % 2 == 0 => "█",
        Mode::Running => "▓",
        Mode::Jumping => "▲",
        Mode::Sliding => "▄",
        Mode::Flying => "^",
    };
    out.queue(style::SetForegroundColor(character_color(pose.kind)))?;
    let hb = pose.hitbox;
    view.fill(out, (hb.x, hb.y, hb.width, hb.height), glyph)
}

fn draw_dragon<W: Write>(out: &mut W, view: &Viewport, dragon: &DragonView) -> std::io::Result<()> {
    if !dragon.active {
        return Ok(());
    }
    let wings = if (dragon.wing_phase as i32 / 32) % 2 == 0 { "^" } else { "v" };
    out.queue(style::SetForegroundColor(C_POWERUP))?;
    view.print_at(out, dragon.x, dragon.y, &format!("{wings}<DRAGON>{wings}"))
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, rows: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Lane   ↑ W SPACE : Jump   ↓ S : Slide   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    cols: u16,
    rows: u16,
    snap: &RenderSnapshot,
) -> std::io::Result<()> {
    let score_line = format!("Candy Score: {:>6}", snap.hud.score);
    let distance_line = format!("Distance:   {:>6}m", snap.hud.distance);
    let lines: [(&str, Color); 6] = [
        ("╔════════════════════╗", Color::Red),
        ("║     GAME  OVER     ║", Color::Red),
        ("╚════════════════════╝", Color::Red),
        (score_line.as_str(), C_HUD_SCORE),
        (distance_line.as_str(), C_HUD_DISTANCE),
        ("R - Again  C - Character  Q - Quit", Color::White),
    ];

    let cx = cols / 2;
    let start_row = (rows / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, (msg, color)) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }
    Ok(())
}
