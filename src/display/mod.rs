//! Terminal presentation: art, commentary, pacing, and rendering.
//!
//! None of this affects who wins a round.

pub mod art;
pub mod pacing;
pub mod quotes;
pub mod render;

pub use pacing::{NoDelay, Pacer, RecordingPacer, SleepPacer};
pub use quotes::QuoteBook;
pub use render::Renderer;
