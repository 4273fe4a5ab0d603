//! Terminal UI: the interactive app loop and the board view. Thin wrappers
//! over the session engine; no game logic lives here.

mod app;
mod game_view;

pub use app::App;
