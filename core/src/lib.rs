//! State machines for four small arcade games: a mine field, a snake arena, a
//! sliding-tile merge board and a side-scrolling obstacle dodger.
//!
//! Every game owns its state and its random source. Nothing here knows about
//! the browser: grid games expose their cells for the shell to draw, real-time
//! games draw themselves onto a [`Surface`].
#![no_std]

extern crate alloc;

pub use error::*;
pub use merge::*;
pub use minefield::*;
pub use random::*;
pub use scroller::*;
pub use snake::*;
pub use surface::*;
pub use types::*;

mod error;
mod merge;
mod minefield;
mod random;
mod scroller;
mod snake;
mod surface;
mod types;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::HitMine | Self::Won)
    }
}
