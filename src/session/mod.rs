pub mod event;
pub use event::*;

pub mod phase;
pub use phase::*;

pub mod scoreboard;
pub use scoreboard::*;

pub mod screen;
pub use screen::*;

pub mod session;
pub use session::*;
