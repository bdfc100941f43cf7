use anyhow::Context;
use crossterm::{
    cursor,
    terminal::{self, ClearType},
    ExecutableCommand,
};
use std::io::{stdout, BufWriter, Stdout, Write};

/// Raw mode plus alternate screen for as long as the guard lives.
pub struct TerminalGuard {
    out: BufWriter<Stdout>,
}

impl TerminalGuard {
    pub fn enter() -> anyhow::Result<Self> {
        terminal::enable_raw_mode().context("enable raw mode")?;
        // From here on Drop undoes raw mode even if the rest of setup fails.
        let mut guard = Self {
            out: BufWriter::with_capacity(1 << 20, stdout()),
        };

        let out = guard.out.get_mut();
        out.execute(terminal::EnterAlternateScreen)
            .context("enter alternate screen")?;
        out.execute(terminal::Clear(ClearType::All))
            .context("clear screen")?;
        out.execute(cursor::Hide).context("hide cursor")?;
        Ok(guard)
    }

    pub fn out(&mut self) -> &mut BufWriter<Stdout> {
        &mut self.out
    }

    /// Terminal size in cells, never smaller than 1x2.
    pub fn size() -> anyhow::Result<(u16, u16)> {
        let (cols, rows) = terminal::size().context("query terminal size")?;
        Ok((cols.max(1), rows.max(2)))
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.out.flush();
        let _ = terminal::disable_raw_mode();
        let out = self.out.get_mut();
        let _ = out.write_all(b"\x1b[?2026l\x1b[?7h\x1b[0m");
        let _ = out.flush();
        let _ = out.execute(cursor::Show);
        let _ = out.execute(terminal::LeaveAlternateScreen);
    }
}
