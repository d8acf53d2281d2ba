pub use self::{block::*, colour::*, draw::*, grid::*};

pub(crate) mod block;
pub(crate) mod colour;
pub(crate) mod draw;
pub(crate) mod grid;
