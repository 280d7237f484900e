//! Console reporting for probe runs
//!
//! All user-facing output goes through [`Reporter`] so that color handling
//! stays in one place. Glyph lines follow the suite's established register:
//! `ℹ` info, `✓` success, `✗` error, `⚠` warning.

use ansi_term::Colour::{Blue, Green, Red, Yellow};
use ansi_term::Style;

const HEADER_WIDTH: usize = 60;

/// Prints styled console lines, degrading to plain text when color is off.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn glyph(&self, colour: ansi_term::Colour, glyph: &str) -> String {
        if self.color {
            colour.paint(glyph).to_string()
        } else {
            glyph.to_string()
        }
    }

    pub fn info(&self, msg: &str) {
        println!("{} {}", self.glyph(Blue, "ℹ"), msg);
    }

    pub fn success(&self, msg: &str) {
        println!("{} {}", self.glyph(Green, "✓"), msg);
    }

    pub fn error(&self, msg: &str) {
        println!("{} {}", self.glyph(Red, "✗"), msg);
    }

    pub fn warning(&self, msg: &str) {
        println!("{} {}", self.glyph(Yellow, "⚠"), msg);
    }

    /// Indented detail line under a glyph line.
    pub fn detail(&self, msg: &str) {
        println!("  {msg}");
    }

    /// `=`-framed section header, title centered in a 60-column rule.
    pub fn section(&self, title: &str) {
        let rule = "=".repeat(HEADER_WIDTH);
        let centered = format!("{title:^HEADER_WIDTH$}");
        if self.color {
            let style = Style::new().bold().fg(Blue);
            println!("\n{}", style.paint(&rule));
            println!("{}", style.paint(&centered));
            println!("{}\n", style.paint(&rule));
        } else {
            println!("\n{rule}\n{centered}\n{rule}\n");
        }
    }

    /// Suite banner with the local start timestamp.
    pub fn banner(&self, title: &str) {
        let started = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        if self.color {
            println!("\n{}", Style::new().bold().fg(Blue).paint(title));
            println!("{}\n", Blue.paint(format!("Started: {started}")));
        } else {
            println!("\n{title}\nStarted: {started}\n");
        }
    }

    /// One `PASS`/`FAIL` row of the summary table.
    pub fn summary_row(&self, name: &str, passed: bool) {
        let status = if passed {
            self.styled_status(Green, "PASS")
        } else {
            self.styled_status(Red, "FAIL")
        };
        println!("{status} - {name}");
    }

    /// Closing `X/Y tests passed` line plus verdict.
    pub fn summary_total(&self, passed: usize, total: usize) {
        let line = format!("Total: {passed}/{total} tests passed");
        if self.color {
            println!("\n{}\n", Style::new().bold().paint(line));
        } else {
            println!("\n{line}\n");
        }
        if passed == total {
            self.success("All tests passed!");
        } else {
            self.error("Some tests failed. Check configuration.");
        }
        println!();
    }

    fn styled_status(&self, colour: ansi_term::Colour, text: &str) -> String {
        if self.color {
            colour.bold().paint(text).to_string()
        } else {
            text.to_string()
        }
    }
}
