//! Text rendering of the board for debugging.
//!
//! Each board row prints as two lines: the horizontal fences along its top
//! edge (`_`), then the vertical fences (`|`) interleaved with the cells
//! (`+` when empty, `1`/`2` for pawns). The bottom boundary closes the grid.

use std::fmt;

use crate::core::{BoardState, Cell, FenceEdge, PlayerId, BOARD_SIZE};

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..=BOARD_SIZE {
            for column in 0..BOARD_SIZE {
                let glyph = if self.has_fence(FenceEdge::horizontal(column, row)) {
                    " _"
                } else {
                    "  "
                };
                f.write_str(glyph)?;
            }
            writeln!(f)?;

            if row == BOARD_SIZE {
                break;
            }

            for column in 0..=BOARD_SIZE {
                let wall = if self.has_fence(FenceEdge::vertical(column, row)) {
                    '|'
                } else {
                    ' '
                };
                write!(f, "{wall}")?;

                if column < BOARD_SIZE {
                    let cell = Cell::new(column, row);
                    let glyph = match self.occupant(cell) {
                        Some(PlayerId::One) => '1',
                        Some(PlayerId::Two) => '2',
                        None => '+',
                    };
                    write!(f, "{glyph}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
