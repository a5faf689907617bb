#[cfg(test)]
pub mod test {
    use anyhow::Result;

    use crate::board::{Board, Player};
    use crate::error::GameError;
    use crate::evaluate::{evaluate_board, order_score, Weights};
    use crate::game::{Game, Outcome};
    use crate::search::{select_move, SearchConfig};
    use crate::{COLS, ROWS};

    // board with red on the bottom row of the given columns
    fn bottom_row(columns: &[usize]) -> Board {
        let mut board = Board::new();
        for &column in columns {
            board.place(column, Player::Red).unwrap();
        }
        board
    }

    // full board with no four-in-a-row anywhere: columns alternate by
    // parity and rows 2-3 invert the pattern, so every run stops at two
    fn drawn_fill(game: &mut Game) -> Result<(), GameError> {
        for column in 0..COLS {
            for height in 0..ROWS {
                let red = (column % 2 == 0) != (height == 2 || height == 3);
                let player = if red { Player::Red } else { Player::Yellow };
                game.apply_move(column, player)?;
            }
        }
        Ok(())
    }

    #[test]
    pub fn drop_rows_fill_bottom_up() -> Result<()> {
        let mut board = Board::new();
        for i in 0..ROWS {
            assert_eq!(board.drop_row(0)?, ROWS - 1 - i);
            let row = board.place(0, Player::Red)?;
            assert_eq!(row, ROWS - 1 - i);
        }
        assert!(!board.playable(0));
        assert_eq!(board.drop_row(0), Err(GameError::ColumnFull(0)));
        assert_eq!(
            board.place(0, Player::Yellow),
            Err(GameError::ColumnFull(0))
        );
        assert_eq!(board.drop_row(COLS), Err(GameError::InvalidColumn(COLS)));
        Ok(())
    }

    #[test]
    pub fn detects_horizontal_win() {
        let board = bottom_row(&[0, 1, 2, 3]);
        assert!(board.check_win(ROWS - 1, 2));
    }

    #[test]
    pub fn detects_vertical_win() -> Result<()> {
        let mut board = Board::new();
        for i in 0..4 {
            let row = board.place(2, Player::Yellow)?;
            if i == 3 {
                assert!(board.check_win(row, 2));
            }
        }
        Ok(())
    }

    #[test]
    pub fn detects_diagonal_wins() -> Result<()> {
        // rising diagonal: red climbs a staircase of yellow
        let mut board = Board::new();
        for column in 0..4 {
            for _ in 0..column {
                board.place(column, Player::Yellow)?;
            }
            let row = board.place(column, Player::Red)?;
            if column == 3 {
                assert!(board.check_win(row, column));
            }
        }

        // falling diagonal: same staircase from the right edge
        let mut board = Board::new();
        for step in 0..4 {
            let column = COLS - 1 - step;
            for _ in 0..step {
                board.place(column, Player::Yellow)?;
            }
            let row = board.place(column, Player::Red)?;
            if step == 3 {
                assert!(board.check_win(row, column));
            }
        }
        Ok(())
    }

    #[test]
    pub fn three_in_a_row_is_not_a_win() {
        let board = bottom_row(&[0, 1, 2]);
        assert!(!board.check_win(ROWS - 1, 1));
    }

    #[test]
    pub fn undo_restores_the_prior_board() -> Result<()> {
        let mut game = Game::from_moves("4455")?;
        let snapshot = *game.board();
        let moves = game.history().len();

        let applied = game.apply_move(2, Player::Red)?;
        assert_eq!(applied.row, ROWS - 1);

        let undone = game.undo()?;
        assert_eq!(undone, applied);
        assert_eq!(*game.board(), snapshot);
        assert_eq!(game.history().len(), moves);
        Ok(())
    }

    #[test]
    pub fn undo_after_a_win_resumes_play() -> Result<()> {
        let mut game = Game::from_moves("1122334")?;
        assert_eq!(game.outcome(), Outcome::Win(Player::Red));
        assert_eq!(
            game.apply_move(4, Player::Yellow),
            Err(GameError::GameOver)
        );

        let undone = game.undo()?;
        assert_eq!(undone.column, 3);
        assert_eq!(game.outcome(), Outcome::InProgress);

        // the winning move can simply be replayed
        game.apply_move(3, Player::Red)?;
        assert_eq!(game.outcome(), Outcome::Win(Player::Red));
        Ok(())
    }

    #[test]
    pub fn undo_with_no_history_fails() {
        let mut game = Game::new();
        assert_eq!(game.undo(), Err(GameError::EmptyHistory));
    }

    #[test]
    pub fn reset_returns_to_a_fresh_game() -> Result<()> {
        let mut game = Game::from_moves("1122334")?;
        game.reset();
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert!(game.history().is_empty());
        assert_eq!(*game.board(), Board::new());
        Ok(())
    }

    #[test]
    pub fn rejects_unparseable_move_strings() {
        assert!(Game::from_moves("12x").is_err());
        assert!(Game::from_moves("08").is_err());
    }

    #[test]
    pub fn gravity_holds_after_arbitrary_play() -> Result<()> {
        let game = Game::from_moves("44455212376671")?;
        let board = game.board();
        for column in 0..COLS {
            for row in 0..ROWS - 1 {
                // nothing may float: an occupied cell has no empty cell below
                if !board.get(row, column).is_empty() {
                    assert!(!board.get(row + 1, column).is_empty());
                }
            }
        }
        Ok(())
    }

    #[test]
    pub fn full_board_is_a_draw_with_no_moves() -> Result<()> {
        let mut game = Game::new();
        drawn_fill(&mut game)?;

        assert_eq!(game.outcome(), Outcome::Draw);
        assert!(game.board().is_full());
        assert!(game.board().legal_columns().is_empty());
        assert_eq!(
            select_move(game.board(), Player::Red, &SearchConfig::default()),
            None
        );
        Ok(())
    }

    #[test]
    pub fn empty_board_evaluates_to_zero() {
        let board = Board::new();
        let weights = Weights::default();
        assert_eq!(evaluate_board(&board, Player::Red, &weights), 0);
        assert_eq!(evaluate_board(&board, Player::Yellow, &weights), 0);
    }

    #[test]
    pub fn selection_is_deterministic() -> Result<()> {
        let game = Game::from_moves("435261")?;
        let config = SearchConfig::default();
        let first = select_move(game.board(), Player::Red, &config);
        let second = select_move(game.board(), Player::Red, &config);
        assert_eq!(first, second);
        assert!(first.is_some());
        Ok(())
    }

    #[test]
    pub fn selection_leaves_the_board_untouched() -> Result<()> {
        let game = Game::from_moves("122334")?;
        let snapshot = *game.board();
        select_move(game.board(), Player::Yellow, &SearchConfig::default());
        assert_eq!(*game.board(), snapshot);
        Ok(())
    }

    #[test]
    pub fn takes_an_immediate_win() {
        // bottom row [_, R, R, R, _, _, _]: either end completes four
        let board = bottom_row(&[1, 2, 3]);
        let config = SearchConfig {
            max_depth: 1,
            weights: Weights::default(),
        };
        let chosen = select_move(&board, Player::Red, &config);
        assert!(
            chosen == Some(0) || chosen == Some(4),
            "expected a winning column, got {:?}",
            chosen
        );
    }

    #[test]
    pub fn blocks_an_immediate_loss() -> Result<()> {
        // yellow threatens [Y, Y, Y, _]; red cannot win and must block
        let mut board = Board::new();
        for column in 0..3 {
            board.place(column, Player::Yellow)?;
        }
        let config = SearchConfig {
            max_depth: 2,
            weights: Weights::default(),
        };
        assert_eq!(select_move(&board, Player::Red, &config), Some(3));
        Ok(())
    }

    // ---- pruning equivalence ----
    //
    // Alpha-beta is an optimization, not a behavior change: on the same
    // position and depth it must pick the same column as an unpruned
    // full minimax using the same root ordering and tie-breaks.

    fn brute_minimax(
        board: &mut Board,
        mover: Player,
        depth: usize,
        maximizing: bool,
        weights: &Weights,
    ) -> i32 {
        if depth == 0 {
            return evaluate_board(board, mover, weights);
        }
        let legal = board.legal_columns();
        if legal.is_empty() {
            return evaluate_board(board, mover, weights);
        }

        let to_play = if maximizing { mover } else { mover.other() };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for column in legal {
            board.place(column, to_play).unwrap();
            let score = brute_minimax(board, mover, depth - 1, !maximizing, weights);
            board.unplace(column);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }

    fn brute_select(board: &Board, mover: Player, config: &SearchConfig) -> Option<usize> {
        let mut ordered: Vec<(usize, f64)> = (0..COLS)
            .filter_map(|column| {
                order_score(board, column, mover, &config.weights)
                    .ok()
                    .map(|score| (column, score))
            })
            .collect();
        // stable sort: equal scores keep their ascending column order
        ordered.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap());

        let mut scratch = *board;
        let mut best_score = i32::MIN;
        let mut best_move = None;
        for (column, _) in ordered {
            scratch.place(column, mover).unwrap();
            let score =
                brute_minimax(&mut scratch, mover, config.max_depth, false, &config.weights);
            scratch.unplace(column);
            if best_move.is_none() || score > best_score {
                best_score = score;
                best_move = Some(column);
            }
        }
        best_move
    }

    #[test]
    pub fn pruning_does_not_change_the_chosen_move() -> Result<()> {
        let positions = [
            "444555", "4455", "1234567", "33333", "122334", "776655", "44522", "435261",
        ];
        let config = SearchConfig {
            max_depth: 3,
            weights: Weights::default(),
        };

        for moves in positions.iter() {
            let game = Game::from_moves(moves)?;
            for &mover in [Player::Red, Player::Yellow].iter() {
                let pruned = select_move(game.board(), mover, &config);
                let brute = brute_select(game.board(), mover, &config);
                assert_eq!(
                    pruned, brute,
                    "position {:?}, mover {:?}",
                    moves, mover
                );
            }
        }
        Ok(())
    }
}
