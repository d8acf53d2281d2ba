pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SmashError {
    #[display("the top-level block cannot be smashed")]
    Root,
    #[display("a block at the maximum depth cannot be smashed")]
    MaxDepth,
}
