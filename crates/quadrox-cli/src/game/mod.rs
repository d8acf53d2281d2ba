//! Game orchestration: configuration, the player roster, and the turn loop.

pub use self::{config::*, player::*, session::*};

mod config;
mod player;
mod session;
