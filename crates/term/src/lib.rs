//! Terminal front end for the match-3 core.
//!
//! Rendering and input only; all game rules live in `tilematch-core`.
//! The [`Hud`] sink is the terminal stand-in for the score, move, and
//! goal counters the core notifies.

pub mod hud;
pub mod input;
pub mod renderer;
pub mod view;

pub use hud::Hud;
pub use input::{map_key, PlayerIntent};
pub use renderer::TerminalRenderer;
pub use view::GameView;
