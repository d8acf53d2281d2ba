use quadrox_engine::Rgb;
use ratatui::{layout::Rect, style::Color, widgets::Block as BlockWidget};

pub use self::{board_display::*, player_panel::*};

mod board_display;
mod player_panel;

pub mod style {
    use ratatui::style::{Color, Style};

    pub const DEFAULT: Style = Style::new().fg(Color::White).bg(Color::Black);
    pub const HELP: Style = Style::new().fg(Color::DarkGray);
    pub const GOAL: Style = Style::new().fg(Color::Gray);
    pub const NOTICE: Style = Style::new().fg(Color::Yellow);
    pub const MARKER: Style = Style::new().fg(Color::Cyan);
}

/// Terminal colour for a palette/renderer RGB value.
pub(crate) fn tile_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}

fn block_horizontal_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.width - inner_rect.width
}
