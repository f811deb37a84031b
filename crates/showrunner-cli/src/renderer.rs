//! Terminal rendering for the generated plan's markdown.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Prints markdown either through a styled termimad skin or verbatim as
/// plain text (for piping and tests).
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);

        Self { rich_enabled, skin }
    }

    /// Render markdown to stdout.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            self.skin.print_text(markdown);
        } else {
            print!("{markdown}");
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }
}
