mod halfblock;
mod resample;

pub use halfblock::HalfBlockRenderer;
pub use resample::{fit, letterbox, Viewport};

use std::io::Write;

pub struct Frame<'a> {
    pub term_cols: u16,
    pub term_rows: u16,
    pub visual_rows: u16,
    pub pixel_width: usize,
    pub pixel_height: usize,
    pub pixels_rgba: &'a [u8],
    pub hud: &'a str,
    pub hud_rows: u16,
    pub overlay: Option<&'a str>,
    pub sync_updates: bool,
}

pub trait Renderer {
    fn name(&self) -> &'static str;
    fn render(&mut self, frame: &Frame<'_>, out: &mut dyn Write) -> anyhow::Result<()>;
}

// Word-agnostic hard wrap; the popup never needs anything smarter.
fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for raw in text.lines() {
        let chars: Vec<char> = raw.chars().collect();
        if chars.is_empty() {
            lines.push(String::new());
            continue;
        }
        for chunk in chars.chunks(width.max(1)) {
            lines.push(chunk.iter().collect());
        }
    }
    lines
}

/// Centred box over a dimmed screen. The first line is drawn as a title.
pub fn draw_overlay_popup(
    out: &mut dyn Write,
    term_cols: u16,
    term_rows: u16,
    text: &str,
) -> anyhow::Result<()> {
    let cols = term_cols as usize;
    let rows = term_rows as usize;
    if text.trim().is_empty() || cols < 8 || rows < 4 {
        return Ok(());
    }

    let max_inner = cols.saturating_sub(6).max(1);
    let lines = wrap_lines(text, max_inner);
    let inner_w = lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .clamp(1, max_inner);
    let body_h = lines.len().min(rows.saturating_sub(3).max(1));

    let box_w = inner_w + 4;
    let box_h = body_h + 2;
    let left = (cols.saturating_sub(box_w)) / 2 + 1;
    let top = (rows.saturating_sub(box_h)) / 2 + 1;
    let rule = "-".repeat(box_w - 2);

    out.write_all(b"\x1b[0m\x1b[38;2;200;200;210m\x1b[48;2;6;6;12m")?;
    for row in 1..=rows {
        write!(out, "\x1b[{row};1H\x1b[2K")?;
    }

    out.write_all(b"\x1b[38;2;240;240;250m\x1b[48;2;18;18;30m")?;
    write!(out, "\x1b[{top};{left}H+{rule}+")?;
    for (i, line) in lines.iter().take(body_h).enumerate() {
        let row = top + 1 + i;
        let pad = inner_w.saturating_sub(line.chars().count());
        if i == 0 {
            write!(
                out,
                "\x1b[{row};{left}H| \x1b[1m\x1b[38;2;255;214;120m{line}\x1b[22m\x1b[38;2;240;240;250m{} |",
                " ".repeat(pad)
            )?;
        } else {
            write!(out, "\x1b[{row};{left}H| {line}{} |", " ".repeat(pad))?;
        }
    }
    write!(out, "\x1b[{};{left}H+{rule}+", top + box_h - 1)?;
    out.write_all(b"\x1b[0m")?;
    Ok(())
}
