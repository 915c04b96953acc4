//! Application module
//!
//! Drives one install attempt, split into:
//! - `state`: App struct and the Invoking → Matched | Unmatched transition
//! - `render`: Printing the terminal state

mod render;
mod state;

pub use state::App;
