use crate::config::Config;
use crate::export;
use crate::render::{letterbox, Frame, HalfBlockRenderer, Renderer};
use crate::terminal::TerminalGuard;
use crate::visual::{find_pattern, Engine, PATTERNS, PATTERN_COUNT};
use anyhow::Context;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use log::{info, warn};
use std::time::{Duration, Instant};

const STATUS_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    None,
    Quit,
    Save,
}

pub fn run(cfg: Config) -> anyhow::Result<()> {
    cfg.validate()?;

    let mut engine = build_engine(&cfg)?;
    if cfg.paused {
        engine.pause_scheduling();
    }

    let mut term = TerminalGuard::enter()?;
    let mut renderer = HalfBlockRenderer::new();
    let mut size = TerminalGuard::size()?;
    let mut pixels: Vec<u8> = Vec::new();

    let mut show_help = false;
    let mut status: Option<(String, Instant)> = None;
    let mut fps = FpsCounter::new();
    let target = Duration::from_secs_f64(1.0 / cfg.fps.max(1) as f64);

    loop {
        let now = Instant::now();

        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(k) if k.kind != KeyEventKind::Release => {
                    match handle_key(k.code, k.modifiers, &mut engine, &mut show_help) {
                        KeyAction::Quit => return Ok(()),
                        KeyAction::Save => {
                            let msg = match export::save_png(engine.surface(), &cfg.export_dir) {
                                Ok(path) => {
                                    info!("saved {}", path.display());
                                    format!("saved {}", path.display())
                                }
                                Err(e) => {
                                    warn!("save failed: {e}");
                                    format!("save failed: {e}")
                                }
                            };
                            status = Some((msg, now));
                        }
                        KeyAction::None => {}
                    }
                }
                Event::Resize(c, r) => size = (c.max(1), r.max(2)),
                _ => {}
            }
        }

        engine.tick();
        fps.tick();

        if status.as_ref().is_some_and(|(_, at)| at.elapsed() > STATUS_TTL) {
            status = None;
        }

        let (cols, rows) = size;
        let hud_rows: u16 = if rows >= 3 { 1 } else { 0 };
        let visual_rows = rows - hud_rows;
        let (pw, ph) = (cols as usize, visual_rows as usize * 2);
        letterbox(engine.surface(), pw, ph, &mut pixels);

        let hud = hud_line(&engine, fps.fps(), status.as_ref().map(|(s, _)| s.as_str()));
        let help = help_popup_text();
        let frame = Frame {
            term_cols: cols,
            term_rows: rows,
            visual_rows,
            pixel_width: pw,
            pixel_height: ph,
            pixels_rgba: &pixels,
            hud: &hud,
            hud_rows,
            overlay: show_help.then_some(help.as_str()),
            sync_updates: cfg.sync_updates,
        };
        renderer.render(&frame, term.out())?;

        let elapsed = now.elapsed();
        if elapsed < target {
            std::thread::sleep(target - elapsed);
        }
    }
}

/// Builds the engine described by `cfg` and draws its first pattern.
pub fn build_engine(cfg: &Config) -> anyhow::Result<Engine> {
    let mut engine = match cfg.seed {
        Some(seed) => Engine::with_seed(cfg.width, cfg.height, seed),
        None => Engine::new(cfg.width, cfg.height),
    }
    .context("create drawing surface")?;
    engine.set_boids_mode(cfg.boids);

    match cfg.pattern.as_deref() {
        Some(query) => {
            let id = find_pattern(query)
                .with_context(|| format!("no pattern matches {query:?} (try --list-patterns)"))?;
            engine.select_pattern(id);
        }
        None => engine.regenerate_current_pattern(None),
    }
    Ok(engine)
}

pub fn handle_key(
    code: KeyCode,
    mods: KeyModifiers,
    engine: &mut Engine,
    show_help: &mut bool,
) -> KeyAction {
    if mods.contains(KeyModifiers::CONTROL) && matches!(code, KeyCode::Char('c')) {
        return KeyAction::Quit;
    }

    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => return KeyAction::Quit,
        KeyCode::Char(' ') => engine.regenerate_current_pattern(None),
        KeyCode::Char('r') | KeyCode::Char('R') => {
            let current = engine.pattern();
            engine.regenerate_current_pattern(Some(current));
        }
        KeyCode::Left => engine.prev_pattern(),
        KeyCode::Right => engine.next_pattern(),
        KeyCode::Char(c @ '0'..='9') => {
            if let Some(d) = c.to_digit(10) {
                engine.select_pattern(d as usize);
            }
        }
        KeyCode::Char('p') | KeyCode::Char('P') => {
            engine.toggle_scheduling();
        }
        KeyCode::Char('s') | KeyCode::Char('S') => return KeyAction::Save,
        KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('?') | KeyCode::F(1) => {
            *show_help = !*show_help;
        }
        _ => {}
    }
    KeyAction::None
}

pub fn hud_line(engine: &Engine, fps: f32, status: Option<&str>) -> String {
    let id = engine.pattern();
    let drawn = if id < PATTERN_COUNT { id } else { 0 };
    let mut line = format!(
        "[{:02}] {}  t={}  {:.1} fps",
        drawn,
        engine.pattern_name(),
        engine.time(),
        fps
    );
    if !engine.is_running() {
        line.push_str("  PAUSED");
    }
    match status {
        Some(s) => {
            line.push_str("  | ");
            line.push_str(s);
        }
        None => line.push_str("  | h: help"),
    }
    line
}

pub fn help_popup_text() -> String {
    let mut text = String::from(
        "tui_genart\n\
space  new random pattern\n\
r  redraw current pattern from scratch\n\
left/right  previous / next pattern\n\
0-9  jump to pattern\n\
p  pause / resume\n\
s  save PNG\n\
h or ?  toggle this help\n\
q or esc  quit\n\n",
    );
    for (i, p) in PATTERNS.iter().enumerate() {
        text.push_str(&format!("{i:>2}  {}\n", p.name));
    }
    text
}

pub fn list_patterns(out: &mut dyn std::io::Write) -> std::io::Result<()> {
    for (i, p) in PATTERNS.iter().enumerate() {
        writeln!(out, "{i:>2}  {:<18} {}", p.name, p.family.label())?;
    }
    Ok(())
}

struct FpsCounter {
    last: Instant,
    frames: u32,
    fps: f32,
}

impl FpsCounter {
    fn new() -> Self {
        Self {
            last: Instant::now(),
            frames: 0,
            fps: 0.0,
        }
    }

    fn tick(&mut self) {
        self.frames += 1;
        let dt = self.last.elapsed().as_secs_f32();
        if dt >= 0.5 {
            self.fps = self.frames as f32 / dt;
            self.frames = 0;
            self.last = Instant::now();
        }
    }

    fn fps(&self) -> f32 {
        self.fps
    }
}
