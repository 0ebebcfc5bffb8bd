//! Plain-text rendering of game state.

use crate::games::digits::GuessResult;
use crate::games::pairs::Board;

/// Column label for a 1-based position within a row: `1`..`9`, then `X`.
fn column_label(column: usize) -> char {
    match column % 10 {
        0 => 'X',
        n => char::from(b'0' + n as u8),
    }
}

/// Render the board in rows of `row_width`, each under a line of column labels.
///
/// Concealed boxes show as `#`.
///
/// ```
/// use guessing_games::games::pairs::Board;
/// use guessing_games::session::render_board;
///
/// let board = Board::from_symbols("AABB".chars());
/// assert_eq!(render_board(&board, 2), "12\n##\n12\n##\n");
/// ```
pub fn render_board(board: &Board, row_width: usize) -> String {
    let tiles: Vec<_> = board.tiles().collect();
    let mut out = String::new();

    for row in tiles.chunks(row_width.max(1)) {
        out.extend((1..=row.len()).map(column_label));
        out.push('\n');
        out.extend(row.iter().map(|t| t.display_char()));
        out.push('\n');
    }

    out
}

/// Every symbol in board order, revealed or not.
pub fn render_symbols(board: &Board) -> String {
    board.symbols().collect()
}

/// Feedback for a non-winning guess.
pub fn render_result(result: &GuessResult) -> String {
    format!(
        "The number of correct digits: {}\nThe number of misplaced digits: {}\n",
        result.correct, result.misplaced
    )
}
