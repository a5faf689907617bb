use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use fourline_ai::board::{Board, Cell};
use fourline_ai::{COLS, ROWS};

/// Draws the grid in place with column labels across the top
pub fn draw_board(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    let labels: String = (1..=COLS).map(|x| x.to_string()).collect();
    stdout.queue(PrintStyledContent(style(labels + "\n")))?;
    for _ in 0..ROWS {
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;

    let (origin_x, origin_y) = crossterm::cursor::position()?;

    for row in 0..ROWS {
        for column in 0..COLS {
            let (pos_x, pos_y) = (
                origin_x + column as u16,
                origin_y - (ROWS - 1 - row) as u16,
            );

            stdout
                .queue(MoveTo(pos_x, pos_y))?
                .queue(PrintStyledContent(
                    style("O")
                        .attribute(Attribute::Bold)
                        .on(Color::DarkBlue)
                        .with(match board.get(row, column) {
                            Cell::Red => Color::Red,
                            Cell::Yellow => Color::Yellow,
                            Cell::Empty => Color::DarkBlue,
                        }),
                ))?;
        }
    }
    stdout
        .queue(MoveTo(origin_x + COLS as u16, origin_y))?
        .queue(PrintStyledContent(style("\n")))?;
    stdout.flush()?;
    Ok(())
}
