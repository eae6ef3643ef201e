//! Terminal UI: a full-screen board with a column selector, driven by the
//! same observable game engine as the text console.

mod app;
mod events;
mod game_view;

pub use app::App;
pub use events::MoveEvent;
