pub use self::app::GameApp;

mod app;
pub mod widgets;
