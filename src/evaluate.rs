//! Heuristic scoring: the static window evaluation used at the search
//! horizon, and the cheap ordering score used to rank root candidates

use crate::board::{Board, Player};
use crate::error::GameError;
use crate::{COLS, CONNECT, ROWS};

/// The heuristic weight set
///
/// Tuning and difficulty tiers are data, not code: every scoring term
/// reads its weight from here and nothing else.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Weights {
    /// preference for columns near the board center
    pub center: i32,
    /// density of same-color pieces around a landing cell
    pub adjacent: i32,
    /// value of denying the opponent an open line
    pub blocking: i32,
    /// a completed run of four
    pub winning: i32,
    /// partial runs that can still be completed
    pub potential: i32,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            center: 3,
            adjacent: 2,
            blocking: 4,
            winning: 1000,
            potential: 5,
        }
    }
}

// the 8 neighborhood directions for the adjacency walks
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, 1),
    (-1, 1),
    (1, -1),
];

/// Every 4-cell window origin as (row, column, dr, dc), covering the
/// horizontal, vertical and both diagonal families exactly once
fn windows() -> impl Iterator<Item = (usize, usize, i32, i32)> {
    let horizontal = (0..ROWS).flat_map(|row| (0..=COLS - CONNECT).map(move |col| (row, col, 0, 1)));
    let vertical = (0..=ROWS - CONNECT).flat_map(|row| (0..COLS).map(move |col| (row, col, 1, 0)));
    let diagonal_down =
        (0..=ROWS - CONNECT).flat_map(|row| (0..=COLS - CONNECT).map(move |col| (row, col, 1, 1)));
    let diagonal_up =
        (CONNECT - 1..ROWS).flat_map(|row| (0..=COLS - CONNECT).map(move |col| (row, col, -1, 1)));

    horizontal
        .chain(vertical)
        .chain(diagonal_down)
        .chain(diagonal_up)
}

// (own, opponent, empty) counts of one window, from `mover`'s side
fn window_counts(
    board: &Board,
    row: usize,
    col: usize,
    dr: i32,
    dc: i32,
    mover: Player,
) -> (usize, usize, usize) {
    let own_cell = mover.cell();
    let opp_cell = mover.other().cell();
    let mut own = 0;
    let mut opp = 0;
    let mut empty = 0;

    for i in 0..CONNECT as i32 {
        let cell = board.get((row as i32 + dr * i) as usize, (col as i32 + dc * i) as usize);
        if cell == own_cell {
            own += 1;
        } else if cell == opp_cell {
            opp += 1;
        } else {
            empty += 1;
        }
    }
    (own, opp, empty)
}

/// Static evaluation of a whole board from `mover`'s perspective
///
/// Sums a per-window score over every 4-cell window; each window is
/// counted exactly once, so the total is independent of iteration
/// order. An empty board evaluates to 0.
pub fn evaluate_board(board: &Board, mover: Player, weights: &Weights) -> i32 {
    windows()
        .map(|(row, col, dr, dc)| {
            match window_counts(board, row, col, dr, dc, mover) {
                (4, _, _) => weights.winning,
                (3, 0, 1) => weights.potential * 5,
                (2, 0, 2) => weights.potential * 2,
                (_, 4, _) => -weights.winning,
                (0, 3, 1) => -weights.blocking * 5,
                (0, 2, 2) => -weights.blocking * 2,
                _ => 0,
            }
        })
        .sum()
}

/// Cheap ordering score for dropping `mover`'s piece in `column`
///
/// This ranks root candidates before the real search; it is never used
/// as a search value. Fails if the column is full or out of range, which
/// doubles as the legality filter for the caller.
pub fn order_score(
    board: &Board,
    column: usize,
    mover: Player,
    weights: &Weights,
) -> Result<f64, GameError> {
    let row = board.drop_row(column)?;

    // linear falloff from the center column
    let center = (COLS / 2) as f64;
    let mut score = weights.center as f64 * (1.0 - (column as f64 - center).abs() / center);

    score += adjacency_score(board, row, column, mover, weights);

    // open-line potential is judged with the candidate piece in place
    let mut trial = *board;
    trial.place(column, mover)?;
    score += open_line_score(&trial, mover, weights) as f64;

    Ok(score)
}

// Same-color density around the landing cell: walk up to three cells
// both ways along all 8 directions, counting friendly pieces and
// discounting nearby blockers (opponent pieces or the board edge).
fn adjacency_score(
    board: &Board,
    row: usize,
    column: usize,
    mover: Player,
    weights: &Weights,
) -> f64 {
    let own_cell = mover.cell();
    let opp_cell = mover.other().cell();
    let mut score = 0.0;

    for &(dr, dc) in DIRECTIONS.iter() {
        let mut count = 1u32;
        let mut blocked = 0u32;

        for &sign in [1i32, -1].iter() {
            for i in 1..CONNECT as i32 {
                match board.at(row as i32 + dr * sign * i, column as i32 + dc * sign * i) {
                    Some(cell) if cell == own_cell => count += 1,
                    Some(cell) if cell == opp_cell => blocked += 1,
                    // an empty cell ends the run without blocking it
                    Some(_) => break,
                    None => {
                        blocked += 1;
                        break;
                    }
                }
            }
        }
        score += weights.adjacent as f64 * (count * count) as f64 * (1.0 - blocked as f64 / 2.0);
    }
    score
}

// Windows still completable by one side score with the square of the
// pieces already in them: the mover's open lines count as potential,
// the opponent's as a blocking bonus for contesting them.
fn open_line_score(board: &Board, mover: Player, weights: &Weights) -> i32 {
    windows()
        .map(|(row, col, dr, dc)| {
            let (own, opp, _) = window_counts(board, row, col, dr, dc, mover);
            let mut score = 0;
            if opp == 0 {
                score += weights.potential * (own * own) as i32;
            }
            if own == 0 {
                score += weights.blocking * (opp * opp) as i32;
            }
            score
        })
        .sum()
}
