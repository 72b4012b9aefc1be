use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dominoes::{
    DominoError, DrawReason, HeuristicSelector, InteractiveSelector, Match, MatchConfig,
    MatchStatus, Side, StatusSnapshot,
};

const RULE: &str = "======================================================================";

#[derive(Parser, Debug)]
#[command(name = "dominoes", version, about = "Play dominoes against the computer")]
struct Cli {
    /// Seed for the stock shuffle (random when omitted)
    #[arg(long, value_name = "N")]
    seed: Option<u64>,
    /// Tiles dealt to each side
    #[arg(long, default_value_t = 7)]
    hand_size: usize,
    /// Tiles shown at each side of a long chain
    #[arg(long, default_value_t = 3)]
    preview: usize,
    /// Print status snapshots as JSON lines instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = MatchConfig {
        seed: cli.seed,
        hand_size: cli.hand_size,
        chain_preview: cli.preview,
        ..MatchConfig::default()
    };

    let mut game = Match::new(config).context("could not set up the match")?;
    if game.redeals() > 0 && !cli.json {
        println!("Reshuffled {} time(s): no double was dealt.", game.redeals());
    }

    play(&mut game, io::stdin().lock(), &mut io::stdout(), cli.json)
}

/// Where rejected input is reported. JSON output stays machine-readable,
/// so rejections go to stderr there.
fn rejection_sink(json: bool) -> Box<dyn Write> {
    if json {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    }
}

/// Run the match, reading the player's moves from `input` and writing
/// every status to `out`.
fn play<R: BufRead>(game: &mut Match, input: R, out: &mut dyn Write, json: bool) -> Result<()> {
    let mut human = InteractiveSelector::new(input, rejection_sink(json));
    let mut computer = HeuristicSelector::new();

    loop {
        let snapshot = game.snapshot(Side::Player);
        if json {
            writeln!(out, "{}", serde_json::to_string(&snapshot)?)?;
        } else {
            print_status(out, &snapshot)?;
        }
        out.flush()?;
        if game.status().is_over() {
            return Ok(());
        }

        let result = match game.current() {
            Side::Player => game.play_turn(&mut human),
            Side::Computer => game.play_turn(&mut computer),
        };
        match result {
            Ok(_) => {}
            Err(DominoError::InputClosed) => {
                eprintln!("Input closed, leaving the game.");
                return Ok(());
            }
            Err(err) => return Err(err).context("turn failed"),
        }
    }
}

fn print_status(out: &mut dyn Write, snap: &StatusSnapshot) -> io::Result<()> {
    writeln!(out, "{}", RULE)?;
    writeln!(out, "Stock size: {}", snap.stock_size)?;
    writeln!(out, "Computer pieces: {}", snap.opponent_hand_size)?;
    writeln!(out)?;
    writeln!(out, "{}", snap.chain_text)?;
    writeln!(out)?;
    writeln!(out, "Your pieces:")?;
    for (i, tile) in snap.hand.iter().enumerate() {
        writeln!(out, "{}:{}", i + 1, tile)?;
    }
    writeln!(out)?;

    let line = match snap.status {
        MatchStatus::InProgress if snap.current == snap.viewer => {
            "It's your turn to make a move. Enter your command."
        }
        MatchStatus::InProgress => "Computer is about to make a move.",
        MatchStatus::Won(side) if side == snap.viewer => "The game is over. You won!",
        MatchStatus::Won(_) => "The game is over. The computer won!",
        MatchStatus::Draw(DrawReason::EndsExhausted) => "The game is over. It's a draw!",
        MatchStatus::Draw(DrawReason::Blocked) => {
            "The game is over. Nobody can move, it's a draw!"
        }
    };
    writeln!(out, "Status: {}", line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn game() -> Match {
        Match::new(MatchConfig::default().with_seed(3)).unwrap()
    }

    #[test]
    fn test_json_output_is_only_json_lines() {
        let mut out = Vec::new();
        // Garbage and out-of-range codes are rejected before input runs out.
        let input = Cursor::new("abc\n99\n\n".repeat(3));

        play(&mut game(), input, &mut out, true).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(!text.is_empty());
        for line in text.lines() {
            let snap: StatusSnapshot = serde_json::from_str(line).unwrap();
            assert_eq!(snap.viewer, Side::Player);
        }
    }

    #[test]
    fn test_text_output_shows_status() {
        let mut out = Vec::new();
        play(&mut game(), Cursor::new(String::new()), &mut out, false).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with(RULE));
        assert!(text.contains("Your pieces:"));
        assert!(text.contains("Status: "));
    }
}
