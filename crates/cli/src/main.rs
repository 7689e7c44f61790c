use advisor::parse_move_token;
use anyhow::Result;
use chess_rules::Board;
use std::io::{self, BufRead, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_board(board: &Board, out: &mut impl Write) -> io::Result<()> {
    let view = board.view();
    for rank in (0..8).rev() {
        write!(out, "{} ", rank + 1)?;
        for file in 0..8 {
            match view[rank][file] {
                Some(symbol) => write!(out, " {symbol}")?,
                None => write!(out, " .")?,
            }
        }
        writeln!(out)?;
    }
    writeln!(out, "   a b c d e f g h")
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let mut board = Board::new();
    writeln!(stdout, "{}", board.fen())?;

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input {
            "quit" => break,
            "new" => {
                board = Board::new();
                info!("new game");
                writeln!(stdout, "{}", board.fen())?;
            }
            "board" => {
                print_board(&board, &mut stdout)?;
            }
            "fen" => {
                writeln!(stdout, "{}", board.fen())?;
            }
            "moves" => {
                for (from, dests) in board.safe_squares() {
                    write!(stdout, "{from}:")?;
                    for to in dests {
                        write!(stdout, " {to}")?;
                    }
                    writeln!(stdout)?;
                }
            }
            token => match parse_move_token(token) {
                Ok(mv) => match board.play(mv.from, mv.to, mv.promotion) {
                    Ok(()) => {
                        info!(from = %mv.from, to = %mv.to, "played");
                        writeln!(stdout, "{}", board.fen())?;
                        if board.check_state().is_in_check() {
                            writeln!(stdout, "check")?;
                        }
                        if let Some(message) = board.game_over_message() {
                            info!(%message, "game over");
                            writeln!(stdout, "{message}")?;
                        }
                    }
                    Err(err) => {
                        writeln!(stdout, "error: {err}")?;
                    }
                },
                Err(err) => {
                    writeln!(stdout, "error: {err}")?;
                }
            },
        }
        stdout.flush()?;
    }
    Ok(())
}
