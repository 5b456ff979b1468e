use std::io::Read;

use anyhow::{ensure, Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wordgrid::config::EngineConfig;
use wordgrid::game::board::{Board, PremiumLayout, BOARD_SIZE};
use wordgrid::models::{MoveRequest, MoveResponse, Premium, Tile};
use wordgrid::{Dictionary, MoveGenerator, Rack};

/// Translation boundary for the engine: reads a move request as JSON from
/// the path given on the command line (or stdin), runs generation, and
/// writes the ranked response to stdout. Structural errors in the request
/// surface here as context-wrapped failures; the engine itself never logs.
fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wordgrid=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = EngineConfig::from_env().context("failed to load configuration")?;
    tracing::info!("Configuration loaded");

    let dictionary = Dictionary::load(&config.dictionary_path);
    if dictionary.is_empty() {
        tracing::warn!("Dictionary is empty; every request will produce zero moves");
    }

    let request = read_request().context("failed to read move request")?;
    let layout = request
        .layout
        .as_deref()
        .map(parse_layout)
        .transpose()
        .context("invalid premium layout")?;
    let board =
        Board::from_snapshot(&request.board, layout).context("invalid board snapshot")?;
    let rack = Rack::new(
        request
            .rack
            .iter()
            .map(|tile| Tile::new(tile.letter, tile.is_blank))
            .collect(),
    );
    let limit = request.limit.unwrap_or(config.move_limit);

    let generator = MoveGenerator::new(&board, &dictionary);
    let moves = generator.generate_moves(&rack, limit);
    tracing::info!("Generated {} ranked moves", moves.len());

    serde_json::to_writer_pretty(std::io::stdout().lock(), &MoveResponse { moves })?;
    println!();
    Ok(())
}

fn read_request() -> Result<MoveRequest> {
    let json = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("could not read request file {}", path))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    serde_json::from_str(&json).context("request is not valid JSON")
}

/// Turn a 15×15 grid of wire codes ("", "DL", "TL", "DW", "TW") into a
/// premium layout.
fn parse_layout(rows: &[Vec<String>]) -> Result<PremiumLayout> {
    let n = BOARD_SIZE as usize;
    ensure!(rows.len() == n, "layout must have {} rows, got {}", n, rows.len());
    let mut layout: PremiumLayout = [[None; 15]; 15];
    for (r, row) in rows.iter().enumerate() {
        ensure!(
            row.len() == n,
            "layout row {} must have {} cells, got {}",
            r + 1,
            n,
            row.len()
        );
        for (c, code) in row.iter().enumerate() {
            layout[r][c] = Premium::from_code(code);
        }
    }
    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_layout_accepts_standard_codes() {
        let mut rows = vec![vec!["".to_string(); 15]; 15];
        rows[7][7] = "DW".to_string();
        rows[0][0] = "TW".to_string();
        let layout = parse_layout(&rows).unwrap();
        assert_eq!(layout[7][7], Some(Premium::DoubleWord));
        assert_eq!(layout[0][0], Some(Premium::TripleWord));
        assert_eq!(layout[1][1], None);
    }

    #[test]
    fn test_parse_layout_rejects_wrong_dimensions() {
        let rows = vec![vec!["".to_string(); 15]; 14];
        assert!(parse_layout(&rows).is_err());
        let mut rows = vec![vec!["".to_string(); 15]; 15];
        rows[3].pop();
        assert!(parse_layout(&rows).is_err());
    }

    #[test]
    fn test_request_round_trips_through_json() {
        let json = r#"{
            "board": [{"coordinate": "H8", "letter": "A"}],
            "rack": [{"letter": "T"}, {"letter": "?", "isBlank": true}],
            "limit": 5
        }"#;
        let request: MoveRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.board.len(), 1);
        assert!(!request.board[0].is_blank);
        assert!(request.rack[1].is_blank);
        assert_eq!(request.limit, Some(5));
    }
}
