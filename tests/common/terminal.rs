//! TUI testing utilities using Ratatui's TestBackend
//!
//! Renders the app into a test buffer and converts the output to strings
//! for assertions.

#![allow(dead_code)]

use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use roster::App;

/// Create a test terminal wide enough for the form and the list side by side
pub fn create_test_terminal() -> Terminal<TestBackend> {
    create_test_terminal_sized(120, 24)
}

pub fn create_test_terminal_sized(width: u16, height: u16) -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(width, height)).expect("Failed to create test terminal")
}

/// Convert a buffer to a string, trimming trailing whitespace per line
pub fn buffer_to_trimmed_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut lines = Vec::with_capacity(area.height as usize);

    for y in area.y..area.y + area.height {
        let mut line = String::new();
        for x in area.x..area.x + area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                line.push_str(cell.symbol());
            }
        }
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

/// Draw the app once and return the screen contents
pub fn render_app(app: &mut App) -> String {
    let mut terminal = create_test_terminal();
    terminal.draw(|f| app.draw(f)).expect("Failed to draw app");
    buffer_to_trimmed_string(terminal.backend().buffer())
}

/// Check if the rendered screen contains a string anywhere
pub fn screen_contains(app: &mut App, text: &str) -> bool {
    render_app(app).contains(text)
}
