use crate::render::{draw_overlay_popup, Frame, Renderer};
use std::io::Write;

const UPPER_HALF: char = '\u{2580}';

/// Two pixels per cell: foreground paints the top half, background the bottom.
pub struct HalfBlockRenderer {
    fg: Option<[u8; 3]>,
    bg: Option<[u8; 3]>,
}

impl HalfBlockRenderer {
    pub fn new() -> Self {
        Self { fg: None, bg: None }
    }

    fn set_colors(&mut self, out: &mut dyn Write, top: [u8; 3], bottom: [u8; 3]) -> std::io::Result<()> {
        if self.fg != Some(top) {
            write!(out, "\x1b[38;2;{};{};{}m", top[0], top[1], top[2])?;
            self.fg = Some(top);
        }
        if self.bg != Some(bottom) {
            write!(out, "\x1b[48;2;{};{};{}m", bottom[0], bottom[1], bottom[2])?;
            self.bg = Some(bottom);
        }
        Ok(())
    }
}

impl Default for HalfBlockRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn rgb_at(px: &[u8], i: usize) -> [u8; 3] {
    [px[i], px[i + 1], px[i + 2]]
}

impl Renderer for HalfBlockRenderer {
    fn name(&self) -> &'static str {
        "halfblock"
    }

    fn render(&mut self, frame: &Frame<'_>, out: &mut dyn Write) -> anyhow::Result<()> {
        let cols = frame.term_cols as usize;
        let rows = frame.visual_rows as usize;
        let (w, h) = (frame.pixel_width, frame.pixel_height);

        if cols == 0 || rows == 0 || w != cols || h != rows * 2 {
            return Ok(());
        }
        if frame.pixels_rgba.len() < w * h * 4 {
            anyhow::bail!(
                "pixel buffer too small for {w}x{h} (got {} bytes)",
                frame.pixels_rgba.len()
            );
        }

        if frame.sync_updates {
            out.write_all(b"\x1b[?2026h")?;
        }
        // Autowrap off while painting full-width rows.
        out.write_all(b"\x1b[H\x1b[0m\x1b[?7l")?;
        self.fg = None;
        self.bg = None;

        for row in 0..rows {
            let top = row * 2 * w;
            let bottom = top + w;
            for x in 0..cols {
                let t = rgb_at(frame.pixels_rgba, (top + x) * 4);
                let b = rgb_at(frame.pixels_rgba, (bottom + x) * 4);
                self.set_colors(out, t, b)?;
                write!(out, "{UPPER_HALF}")?;
            }
            out.write_all(b"\r\n")?;
        }

        let mut hud = frame.hud.lines();
        for i in 0..frame.hud_rows as usize {
            write!(out, "\x1b[{};1H\x1b[0m\x1b[2K", rows + i + 1)?;
            if let Some(line) = hud.next() {
                let clipped: String = line.chars().take(cols).collect();
                out.write_all(clipped.as_bytes())?;
            }
        }

        if let Some(text) = frame.overlay {
            draw_overlay_popup(out, frame.term_cols, frame.term_rows, text)?;
        }

        out.write_all(b"\x1b[?7h")?;
        if frame.sync_updates {
            out.write_all(b"\x1b[?2026l")?;
        }
        out.flush()?;
        Ok(())
    }
}
