//! Terminal rendering of markdown output with termimad, with a plain text
//! fallback for `--no-color` and scripts.

use std::io::{self, Write};

use anyhow::Result;
use swaptrack_core::{OperationStatus, Severity};
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to stdout
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            // Headers keep their hash marks so sections stay recognisable
            for line in markdown.lines() {
                if line.starts_with('#') {
                    println!("\x1b[34m{line}\x1b[0m");
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{markdown}");
        }
        io::stdout().flush()?;
        Ok(())
    }

    /// Render a status banner for a failed or degraded action.
    ///
    /// Failures go to stderr; warnings are part of the normal output.
    pub fn render_status(&self, status: &OperationStatus) -> Result<()> {
        if status.is_failure() {
            let line = status.to_string();
            if self.rich_enabled {
                eprint!("\x1b[31m{line}\x1b[0m");
            } else {
                eprint!("{line}");
            }
            return Ok(());
        }

        match (self.rich_enabled, status.severity) {
            (true, Severity::Warning) => print!("\x1b[33m{status}\x1b[0m"),
            _ => print!("{status}"),
        }
        io::stdout().flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
