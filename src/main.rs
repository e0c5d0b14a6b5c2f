use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use connect_four::config::AppConfig;
use connect_four::{GameState, MoveError, MoveOutcome, Player};

/// Play a game of Connect Four from a list of column moves.
#[derive(Parser)]
#[command(name = "connect-four", about = "Replay Connect Four moves and report the outcome")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override board height
    #[arg(long)]
    height: Option<usize>,

    /// Override board width
    #[arg(long)]
    width: Option<usize>,

    /// Comma-separated 0-based columns; read one per line from stdin if omitted
    #[arg(long, value_delimiter = ',')]
    moves: Option<Vec<usize>>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Only print outcomes, not the board after each move
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(height) = cli.height {
        config.board.height = height;
    }
    if let Some(width) = cli.width {
        config.board.width = width;
    }
    config.validate().context("validating config")?;

    let mut game = config.new_game().context("creating game")?;

    match &cli.moves {
        Some(moves) => {
            for &column in moves {
                play_move(&mut game, column, &config, cli.quiet);
            }
        }
        None => {
            let stdin = io::stdin();
            for (index, line) in stdin.lock().lines().enumerate() {
                let line = line.context("reading moves from stdin")?;
                if let Some(column) = parse_column(index + 1, &line)? {
                    play_move(&mut game, column, &config, cli.quiet);
                }
            }
        }
    }

    if !game.is_terminal() {
        println!(
            "Game in progress after {} moves, {} to play",
            game.moves().len(),
            player_name(&config, game.current_player())
        );
    }

    Ok(())
}

/// Parse one stdin line as a column. Blank lines yield `None`.
fn parse_column(line_number: usize, line: &str) -> Result<Option<usize>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let column = line
        .parse()
        .with_context(|| format!("line {}: '{}' is not a column", line_number, line))?;
    Ok(Some(column))
}

/// Apply one move and report it. Rejected moves go to stderr and play goes on.
fn play_move(game: &mut GameState, column: usize, config: &AppConfig, quiet: bool) {
    match apply_move(game, column, config) {
        Ok(report) => {
            if !quiet {
                print!("{}", game.board());
            }
            println!("{}", report);
        }
        Err(e) => eprintln!("Rejected move in column {}: {}", column, e),
    }
}

/// Drop a piece and describe the outcome in the players' configured names.
fn apply_move(
    game: &mut GameState,
    column: usize,
    config: &AppConfig,
) -> Result<String, MoveError> {
    let mover = game.current_player();
    let report = match game.drop_piece(column)? {
        MoveOutcome::Continue { row, next_player } => format!(
            "{} dropped in column {} (row {}), {} to play",
            player_name(config, mover),
            column,
            row,
            player_name(config, next_player)
        ),
        MoveOutcome::Win { player, .. } => format!("{} won!", player_name(config, player)),
        MoveOutcome::Tie { .. } => "Tie!".to_string(),
    };
    Ok(report)
}

fn player_name(config: &AppConfig, player: Player) -> &str {
    match player {
        Player::One => &config.players.one.name,
        Player::Two => &config.players.two.name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_column() {
        assert_eq!(parse_column(1, " 3 \n").unwrap(), Some(3));
        assert_eq!(parse_column(2, "   ").unwrap(), None);
    }

    #[test]
    fn test_parse_column_rejects_garbage() {
        let err = parse_column(4, "left").unwrap_err();
        assert_eq!(err.to_string(), "line 4: 'left' is not a column");
        assert!(parse_column(5, "-1").is_err());
    }

    #[test]
    fn test_apply_move_reports_outcomes() {
        let mut config = AppConfig::default();
        config.players.one.name = "Ada".into();
        let mut game = config.new_game().unwrap();

        assert_eq!(
            apply_move(&mut game, 0, &config).unwrap(),
            "Ada dropped in column 0 (row 5), Player 2 to play"
        );
        for &col in &[1, 0, 1, 0, 1] {
            apply_move(&mut game, col, &config).unwrap();
        }
        assert_eq!(apply_move(&mut game, 0, &config).unwrap(), "Ada won!");
    }

    #[test]
    fn test_rejected_move_leaves_game_playable() {
        let config = AppConfig::default();
        let mut game = config.new_game().unwrap();

        assert_eq!(
            apply_move(&mut game, 9, &config),
            Err(MoveError::InvalidColumn { column: 9, width: 7 })
        );
        assert_eq!(game.current_player(), Player::One);
        assert!(apply_move(&mut game, 2, &config).is_ok());
        assert_eq!(game.moves(), &[2]);
    }

    #[test]
    fn test_tie_report() {
        let config = AppConfig::default();
        let mut game = config.new_game().unwrap();
        let pattern = [
            0, 1, 0, 1, 0, 1, 1, 0, 1, 0, 1, 0, //
            2, 3, 2, 3, 2, 3, 3, 2, 3, 2, 3, 2, //
            4, 5, 4, 5, 4, 5, 5, 4, 5, 4, 5, 4, //
            6, 6, 6, 6, 6,
        ];
        for &col in &pattern {
            apply_move(&mut game, col, &config).unwrap();
        }
        assert_eq!(apply_move(&mut game, 6, &config).unwrap(), "Tie!");
        assert_eq!(
            apply_move(&mut game, 6, &config),
            Err(MoveError::GameAlreadyOver)
        );
    }
}
