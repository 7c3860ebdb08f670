//! Terminal rendering of markdown output
//!
//! Uses termimad for inline styling with a plain-text fallback. Fenced code
//! blocks, such as seat maps, are printed verbatim so their column
//! alignment survives.

use termimad::{crossterm::style::Color, MadSkin};

/// How a single line of markdown is printed.
#[derive(Debug, PartialEq, Eq)]
enum LineKind {
    Header,
    Fence,
    Code,
    Text,
}

/// Classifies each line, tracking whether it sits inside a code fence.
fn classify(markdown: &str) -> Vec<(LineKind, &str)> {
    let mut in_code = false;
    markdown
        .lines()
        .map(|line| {
            if line.starts_with("```") {
                in_code = !in_code;
                (LineKind::Fence, line)
            } else if in_code {
                (LineKind::Code, line)
            } else if line.starts_with('#') {
                (LineKind::Header, line)
            } else {
                (LineKind::Text, line)
            }
        })
        .collect()
}

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Prints markdown to stdout.
    pub fn render(&self, markdown: &str) {
        if !self.rich_enabled {
            print!("{markdown}");
            return;
        }
        for (kind, line) in classify(markdown) {
            match kind {
                LineKind::Header => println!("\x1b[34m{line}\x1b[0m"),
                LineKind::Fence => {}
                LineKind::Code => println!("{line}"),
                LineKind::Text => {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
