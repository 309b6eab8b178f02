//! Terminal UI: a game view for playing rounds against a friend or the
//! computer, with the running score.

mod app;
mod game_view;

pub use app::App;
