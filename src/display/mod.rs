//! Startup splash. Purely cosmetic; the monitor never draws again after boot.

pub const SPLASH_TEXT: &str = "Plant Watch 2.0";
pub const FRAME_WIDTH: usize = 21;
pub const FRAME_HEIGHT: usize = 5;

pub trait StatusDisplay: Send {
    fn splash(&self);
}

/// Builds the bordered splash frame with the label centered on the middle row.
/// Text longer than the inner width is truncated.
pub fn render_splash(width: usize, height: usize, text: &str) -> Vec<String> {
    let mut lines = Vec::with_capacity(height);
    let inner = width.saturating_sub(2);
    let label: String = text.chars().take(inner).collect();
    let pad_left = (inner - label.chars().count()) / 2;
    let pad_right = inner - label.chars().count() - pad_left;

    for row in 0..height {
        let line = if row == 0 || row == height - 1 {
            "*".repeat(width)
        } else if row == height / 2 {
            format!("*{}{}{}*", " ".repeat(pad_left), label, " ".repeat(pad_right))
        } else {
            format!("*{}*", " ".repeat(inner))
        };
        lines.push(line);
    }
    lines
}

#[derive(Debug, Default)]
pub struct ConsoleDisplay;

impl StatusDisplay for ConsoleDisplay {
    fn splash(&self) {
        for line in render_splash(FRAME_WIDTH, FRAME_HEIGHT, SPLASH_TEXT) {
            println!("{}", line);
        }
    }
}
