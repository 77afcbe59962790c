//! Terminal UI: pick a pocket with the arrow keys and sow with Enter.

mod app;
mod game_view;

pub use app::App;
