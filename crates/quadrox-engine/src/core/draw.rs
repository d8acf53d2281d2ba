use super::{
    block::{Block, Position},
    colour::Rgb,
};

/// Outline width of the black frame around each tile, in display pixels.
pub const FRAME_OUTLINE: u32 = 3;

/// Outline width of the selection highlight, in display pixels.
pub const HIGHLIGHT_OUTLINE: u32 = 5;

/// Colour of the frame drawn around each tile.
pub const FRAME_COLOUR: Rgb = Rgb::new(0, 0, 0);

/// Colour of the selection highlight.
pub const HIGHLIGHT_COLOUR: Rgb = Rgb::new(75, 196, 213);

/// What a [`DrawCommand`] paints within its rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawKind {
    /// The whole rectangle, in a tile colour.
    Fill,
    /// The rectangle's border, in [`FRAME_COLOUR`].
    Frame,
    /// The rectangle's border, in [`HIGHLIGHT_COLOUR`].
    Highlight,
}

/// One rectangle of the rendered board, in board units.
///
/// Renderers scale the unit coordinates to their own resolution and honour
/// [`DrawCommand::outline`]: zero paints a filled rectangle, anything else a
/// border of that many display pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCommand {
    pub kind: DrawKind,
    pub colour: Rgb,
    pub top_left: Position,
    pub size: u32,
}

impl DrawCommand {
    /// Outline width in display pixels; zero for fills.
    #[must_use]
    pub const fn outline(&self) -> u32 {
        match self.kind {
            DrawKind::Fill => 0,
            DrawKind::Frame => FRAME_OUTLINE,
            DrawKind::Highlight => HIGHLIGHT_OUTLINE,
        }
    }
}

impl Block {
    /// Lists the rectangles a renderer must paint, in paint order.
    ///
    /// Each leaf contributes a fill in its colour followed by a frame;
    /// subdivided blocks contribute their children's rectangles in child
    /// storage order. A highlighted block appends its highlight border after
    /// its own content, so the selection stays visible on top.
    #[must_use]
    pub fn draw_commands(&self) -> Vec<DrawCommand> {
        let mut commands = Vec::new();
        collect(self, &mut commands);
        commands
    }
}

fn collect(block: &Block, commands: &mut Vec<DrawCommand>) {
    if let Some(children) = block.children() {
        for child in children {
            collect(child, commands);
        }
    } else if let Some(colour) = block.colour() {
        commands.push(DrawCommand {
            kind: DrawKind::Fill,
            colour: colour.rgb(),
            top_left: block.position(),
            size: block.size(),
        });
        commands.push(DrawCommand {
            kind: DrawKind::Frame,
            colour: FRAME_COLOUR,
            top_left: block.position(),
            size: block.size(),
        });
    }
    if block.highlighted() {
        commands.push(DrawCommand {
            kind: DrawKind::Highlight,
            colour: HIGHLIGHT_COLOUR,
            top_left: block.position(),
            size: block.size(),
        });
    }
}
