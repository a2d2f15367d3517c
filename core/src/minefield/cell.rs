/// Player-visible state of a single mine field cell.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum MineCell {
    #[default]
    Hidden,
    Revealed(u8),
    Flagged,
}

/// What the shell should draw for a cell, including the end-of-game reveal.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CellView {
    Hidden,
    Revealed(u8),
    Flagged,
    Mine,
    TriggeredMine,
    Misflagged,
}

impl CellView {
    /// Label shown on the cell; zero counts stay blank.
    pub const fn label(self) -> Option<u8> {
        match self {
            Self::Revealed(count) if count > 0 => Some(count),
            _ => None,
        }
    }
}
