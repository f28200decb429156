mod display;

use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    style::{self, Color, Print},
    terminal,
    ExecutableCommand, QueueableCommand,
};
use rand::thread_rng;

use halloween_runner::entities::{CharacterKind, GameEvent, Intent, SessionState};
use halloween_runner::{GameConfig, Session};

const FRAME: Duration = Duration::from_millis(16); // ≈60 FPS

/// Environment variable naming an optional TOML config file.
const CONFIG_ENV: &str = "RUNNER_CONFIG";

fn load_config() -> GameConfig {
    let Ok(path) = std::env::var(CONFIG_ENV) else {
        return GameConfig::default();
    };
    match GameConfig::load(&path) {
        Ok(config) => {
            log::info!("loaded config from {path}");
            config
        }
        Err(err) => {
            log::error!("{err}; using defaults");
            eprintln!("{err}; using defaults");
            GameConfig::default()
        }
    }
}

// ── Key mapping ───────────────────────────────────────────────────────────────

fn intent_for(code: KeyCode) -> Option<Intent> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Intent::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Intent::MoveRight),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char(' ') => {
            Some(Intent::Jump)
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Intent::Slide),
        _ => None,
    }
}

fn is_quit(code: KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

// ── Menu ──────────────────────────────────────────────────────────────────────

enum MenuResult {
    Start(CharacterKind),
    Quit,
}

fn show_menu<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    last_score: Option<(u32, u64)>,
) -> std::io::Result<MenuResult> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (width, height) = terminal::size()?;
    let cx = width / 2;
    let cy = height / 2;

    let title = "🎃  HALLOWEEN  RUNNER  🎃";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(title.chars().count() as u16 / 2),
        cy.saturating_sub(6),
    ))?;
    out.queue(style::SetForegroundColor(Color::Rgb { r: 0xff, g: 0x6b, b: 0x35 }))?;
    out.queue(Print(title))?;

    if let Some((score, distance)) = last_score {
        let last = format!("Last run: {score} candy, {distance}m");
        out.queue(cursor::MoveTo(
            cx.saturating_sub(last.chars().count() as u16 / 2),
            cy.saturating_sub(5),
        ))?;
        out.queue(style::SetForegroundColor(Color::Yellow))?;
        out.queue(Print(&last))?;
    }

    out.queue(cursor::MoveTo(cx.saturating_sub(12), cy.saturating_sub(3)))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print("Choose your runner:"))?;

    for (i, kind) in CharacterKind::ALL.iter().enumerate() {
        let row = cy.saturating_sub(1) + i as u16;
        out.queue(cursor::MoveTo(cx.saturating_sub(12), row))?;
        out.queue(style::SetForegroundColor(Color::DarkGrey))?;
        out.queue(Print(format!("[{}] ", i + 1)))?;
        out.queue(style::SetForegroundColor(display::character_color(*kind)))?;
        out.queue(Print(kind.name()))?;
    }

    out.queue(cursor::MoveTo(cx.saturating_sub(12), cy + 3))?;
    out.queue(style::SetForegroundColor(Color::DarkGrey))?;
    out.queue(Print("Collect candy. Tunnels: jump or slide. Ghosts: slide."))?;
    out.queue(cursor::MoveTo(cx.saturating_sub(12), cy + 4))?;
    out.queue(Print("Wait for the dragon to carry you over everything."))?;

    out.queue(style::ResetColor)?;
    out.flush()?;

    loop {
        let Ok(event) = rx.recv() else {
            // Input thread is gone; nothing can answer the menu.
            return Ok(MenuResult::Quit);
        };
        if let Event::Key(KeyEvent { code, modifiers, kind: KeyEventKind::Press, .. }) = event {
            if is_quit(code, modifiers) {
                return Ok(MenuResult::Quit);
            }
            if let KeyCode::Char(c @ '1'..='3') = code {
                let index = c as usize - '1' as usize;
                if let Some(kind) = CharacterKind::ALL.get(index) {
                    return Ok(MenuResult::Start(*kind));
                }
            }
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

enum LoopExit {
    Quit,
    Menu,
}

/// Drive the session one tick per frame until the player quits or asks for
/// the character menu.  Restarts happen inside the loop.
///
/// Input is applied as soon as it is drained, before the tick; the session
/// rejects anything that is not eligible at that moment.
fn game_loop<W: Write>(
    out: &mut W,
    session: &mut Session,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<LoopExit> {
    let mut rng = thread_rng();
    let mut last = Instant::now();

    loop {
        let frame_start = Instant::now();

        while let Ok(event) = rx.try_recv() {
            let Event::Key(KeyEvent { code, modifiers, kind: KeyEventKind::Press, .. }) = event else {
                continue;
            };
            if is_quit(code, modifiers) {
                return Ok(LoopExit::Quit);
            }
            match session.state {
                SessionState::Playing => {
                    if let Some(intent) = intent_for(code) {
                        session.apply_intent(intent);
                    }
                }
                SessionState::GameOver => match code {
                    KeyCode::Char('r') | KeyCode::Char('R') => {
                        session.restart();
                        last = Instant::now();
                    }
                    KeyCode::Char('c') | KeyCode::Char('C') => {
                        session.change_character();
                        return Ok(LoopExit::Menu);
                    }
                    _ => {}
                },
                SessionState::Menu => return Ok(LoopExit::Menu),
            }
        }

        let now = Instant::now();
        let dt_ms = now.duration_since(last).as_secs_f64() * 1000.0;
        last = now;

        let report = session.tick(dt_ms, &mut rng);
        for event in &report.events {
            if let GameEvent::GameOver { score, distance } = event {
                log::info!("run finished: {score} candy, {}m", distance.floor());
            }
        }

        display::render(out, &session.snapshot())?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    env_logger::Builder::from_default_env().init();
    let config = load_config();

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Blocking reads live on their own thread so the game loop never stalls.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break;
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &rx, config);

    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>, config: GameConfig) -> std::io::Result<()> {
    let mut session = Session::new(config);
    let mut last_score = None;

    loop {
        match show_menu(out, rx, last_score)? {
            MenuResult::Quit => break,
            MenuResult::Start(kind) => {
                session.start_game(kind);
                let exit = game_loop(out, &mut session, rx)?;
                last_score = Some((session.score, session.distance.floor() as u64));
                if let LoopExit::Quit = exit {
                    break;
                }
            }
        }
    }
    Ok(())
}
