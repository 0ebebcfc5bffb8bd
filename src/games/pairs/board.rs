//! Board of hidden boxes.

use serde::{Deserialize, Serialize};

/// Glyph shown for a concealed box.
pub const HIDDEN_GLYPH: char = '#';

/// A single box on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    symbol: char,
    revealed: bool,
}

impl Tile {
    /// Create a concealed tile holding `symbol`.
    #[must_use]
    pub const fn new(symbol: char) -> Self {
        Self {
            symbol,
            revealed: false,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        self.symbol
    }

    #[must_use]
    pub const fn is_revealed(self) -> bool {
        self.revealed
    }

    /// The symbol if revealed, otherwise [`HIDDEN_GLYPH`].
    #[must_use]
    pub const fn display_char(self) -> char {
        if self.revealed {
            self.symbol
        } else {
            HIDDEN_GLYPH
        }
    }
}

/// Ordered sequence of tiles, indexed from 0.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    tiles: Vec<Tile>,
}

impl Board {
    /// Create a board of concealed tiles from symbols, in order.
    pub fn from_symbols(symbols: impl IntoIterator<Item = char>) -> Self {
        Self {
            tiles: symbols.into_iter().map(Tile::new).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Get the tile at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn tile(&self, index: usize) -> Tile {
        self.tiles[index]
    }

    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.tiles.iter().copied()
    }

    /// All symbols in board order, ignoring whether they are revealed.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.tiles.iter().map(|t| t.symbol)
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.revealed).count()
    }

    #[must_use]
    pub fn all_revealed(&self) -> bool {
        self.tiles.iter().all(|t| t.revealed)
    }

    pub(crate) fn set_revealed(&mut self, index: usize, revealed: bool) {
        self.tiles[index].revealed = revealed;
    }
}
