use anyhow::Result;

use std::io::{stdin, stdout, Write};

use fourline_ai::board::Player;
use fourline_ai::game::{Game, Outcome};
use fourline_ai::search::{select_move, SearchConfig};
use fourline_ai::COLS;

mod display;
use display::draw_board;

fn main() -> Result<()> {
    env_logger::init();

    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    let mut ai_players = (false, false);

    // choose AI control of player 1
    loop {
        let mut buffer = String::new();
        print!("Is Red AI controlled? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => {
                ai_players.0 = true;
                break;
            }
            Some(_letter @ 'n') => break,
            _ => println!("Unknown answer given"),
        }
    }

    // choose AI control of player 2
    loop {
        let mut buffer = String::new();
        print!("Is Yellow AI controlled? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => {
                ai_players.1 = true;
                break;
            }
            Some(_letter @ 'n') => break,
            _ => println!("Unknown answer given"),
        }
    }

    // pick a search depth for the AI side(s)
    let config = if ai_players.0 || ai_players.1 {
        loop {
            let mut buffer = String::new();
            print!("Difficulty? (e)asy/(h)ard: ");
            stdout().flush().expect("failed to flush to stdout!");
            stdin.read_line(&mut buffer)?;
            match buffer.to_lowercase().chars().next() {
                Some(_letter @ 'e') => break SearchConfig::easy(),
                Some(_letter @ 'h') => break SearchConfig::hard(),
                _ => println!("Unknown answer given"),
            }
        }
    } else {
        SearchConfig::default()
    };

    let mut scores = (0usize, 0usize);

    // rounds loop
    loop {
        let mut game = Game::new();
        let mut player = Player::Red;

        // game loop
        loop {
            draw_board(game.board()).expect("Failed to draw board!");

            match game.outcome() {
                Outcome::InProgress => {
                    let ai_turn = match player {
                        Player::Red => ai_players.0,
                        Player::Yellow => ai_players.1,
                    };

                    let next_move = if ai_turn {
                        println!("AI is thinking...");
                        stdout().flush().expect("failed to flush to stdout!");

                        // slow down play if both players are AI
                        if ai_players == (true, true) {
                            std::thread::sleep(std::time::Duration::from_millis(500));
                        }

                        match select_move(game.board(), player, &config) {
                            Some(column) => {
                                println!("AI plays column {}", column + 1);
                                column + 1
                            }
                            // a live game always has a legal column
                            None => unreachable!("no legal move in a live game"),
                        }
                    } else {
                        print!("{} move (1-{}, u to undo) > ", player.name(), COLS);
                        stdout().flush().expect("failed to flush to stdout!");
                        let mut input_str = String::new();
                        stdin.read_line(&mut input_str)?;
                        let input_str = input_str.trim();

                        if input_str == "u" {
                            match game.undo() {
                                Ok(undone) => player = undone.player,
                                Err(err) => println!("{}", err),
                            }
                            continue;
                        }

                        match input_str.parse::<usize>() {
                            Err(_) => {
                                println!("Invalid number: {}", input_str);
                                continue;
                            }
                            Ok(column) => column,
                        }
                    };

                    if next_move < 1 || next_move > COLS {
                        println!(
                            "Invalid move, columns must be between 1 and {}",
                            COLS
                        );
                        continue;
                    }
                    if let Err(err) = game.apply_move(next_move - 1, player) {
                        println!("{}", err);
                        // try the move again
                        continue;
                    }
                    player = player.other();
                }

                // end states
                Outcome::Win(winner) => {
                    println!("{} wins!", winner.name());
                    match winner {
                        Player::Red => scores.0 += 1,
                        Player::Yellow => scores.1 += 1,
                    }
                    break;
                }
                Outcome::Draw => {
                    println!("Draw!");
                    break;
                }
            }
        }

        println!("Score: Red {} - Yellow {}\n", scores.0, scores.1);

        let mut rematch = false;
        loop {
            let mut buffer = String::new();
            print!("Play again? y/n: ");
            stdout().flush().expect("failed to flush to stdout!");
            stdin.read_line(&mut buffer)?;
            match buffer.to_lowercase().chars().next() {
                Some(_letter @ 'y') => {
                    rematch = true;
                    break;
                }
                Some(_letter @ 'n') => break,
                _ => println!("Unknown answer given"),
            }
        }
        if !rematch {
            break;
        }
    }
    Ok(())
}
