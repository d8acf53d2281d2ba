use quadrox_engine::{Board, DrawCommand, DrawKind};
use ratatui::{
    buffer::{Buffer, Cell},
    layout::Rect,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::ui::widgets::tile_color;

/// Renders a board from its draw commands, one unit cell as 2 terminal
/// columns by 1 row.
///
/// Filled rectangles paint the cell background; the hairline frame around
/// each tile is below cell resolution and is skipped. Highlight commands
/// arrive after the content they cover and tint the region with a shade
/// glyph, so the selection reads as an overlay.
#[derive(Debug)]
pub struct BoardDisplay<'a> {
    board: &'a Board,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self { board, block: None }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        let units = u16::try_from(self.board.unit_side()).unwrap_or(u16::MAX);
        units.saturating_mul(2) + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        let units = u16::try_from(self.board.unit_side()).unwrap_or(u16::MAX);
        units + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        for command in self.board.draw_commands() {
            match command.kind {
                DrawKind::Fill => {
                    let color = tile_color(command.colour);
                    paint_region(area, buf, &command, |cell| {
                        cell.set_symbol(" ");
                        cell.set_bg(color);
                    });
                }
                DrawKind::Frame => {}
                DrawKind::Highlight => {
                    let color = tile_color(command.colour);
                    paint_region(area, buf, &command, |cell| {
                        cell.set_symbol("░");
                        cell.set_fg(color);
                    });
                }
            }
        }
    }
}

fn paint_region<F>(area: Rect, buf: &mut Buffer, command: &DrawCommand, mut paint: F)
where
    F: FnMut(&mut Cell),
{
    for dy in 0..command.size {
        for dx in 0..command.size * 2 {
            let x = u32::from(area.x) + command.top_left.x * 2 + dx;
            let y = u32::from(area.y) + command.top_left.y + dy;
            if x >= u32::from(area.right()) || y >= u32::from(area.bottom()) {
                continue;
            }
            let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
                continue;
            };
            if let Some(cell) = buf.cell_mut((x, y)) {
                paint(cell);
            }
        }
    }
}
