//! LayerLens - layer-by-layer keymap viewer for QMK-style keyboards.
//!
//! Thin I/O collaborator around the library core: loads the keymap, board
//! description, and keycode dictionaries from disk, composes the requested
//! layer(s), and prints the renderable keys as text or JSON.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use layerlens::constants::{APP_BINARY_NAME, APP_NAME};
use layerlens::keycode_db::KeycodeDb;
use layerlens::models::{BoardGeometry, KeymapDocument, LayerCursor, RenderableKey};
use layerlens::{parser, services};

/// LayerLens - layer-by-layer keymap viewer for QMK-style keyboards
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the keymap document (keyboard, layout, layers)
    #[arg(value_name = "KEYMAP")]
    keymap_path: PathBuf,

    /// Path to the board description (layout variants with key geometry)
    #[arg(long, value_name = "FILE")]
    board: PathBuf,

    /// Path to the primary keycode dictionary
    #[arg(long, value_name = "FILE")]
    keycodes: PathBuf,

    /// Path to the extra/aliases keycode dictionary
    #[arg(long, value_name = "FILE")]
    keycodes_extra: PathBuf,

    /// Layer index to compose (default 0)
    #[arg(short, long, value_name = "N", conflicts_with = "all_layers")]
    layer: Option<usize>,

    /// Cycle through and print every layer in order
    #[arg(long)]
    all_layers: bool,

    /// Emit renderable keys as JSON instead of a text table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "layerlens=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if !cli.keymap_path.exists() {
        eprintln!("Error: keymap file not found: {}", cli.keymap_path.display());
        eprintln!();
        eprintln!("Example:");
        eprintln!(
            "  {} my_keymap.json --board info.json \\",
            APP_BINARY_NAME
        );
        eprintln!("      --keycodes keycodes_basic.hjson --keycodes-extra keycodes_us.hjson");
        std::process::exit(1);
    }

    let doc = load_keymap(&cli.keymap_path)?;
    let board = load_board(&cli.board)?;
    let db = load_keycodes(&cli.keycodes, &cli.keycodes_extra)?;

    tracing::info!(
        keyboard = %doc.keyboard,
        layout = %doc.layout,
        layers = doc.layer_count(),
        entries = db.entry_count(),
        "{} loaded",
        APP_NAME
    );

    if cli.all_layers {
        // Cycle through every layer exactly once, the way a layer-switch
        // activation would drive the cursor.
        let mut cursor = LayerCursor::new();
        loop {
            print_layer(&doc, &board, &db, cursor.current(), cli.json)?;
            if cursor.advance(doc.layer_count())? == 0 {
                break;
            }
        }
    } else {
        print_layer(&doc, &board, &db, cli.layer.unwrap_or(0), cli.json)?;
    }

    Ok(())
}

fn load_keymap(path: &Path) -> Result<KeymapDocument> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read keymap file: {}", path.display()))?;
    parser::parse_keymap_str(&content)
        .with_context(|| format!("Failed to parse keymap file: {}", path.display()))
}

fn load_board(path: &Path) -> Result<BoardGeometry> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read board description: {}", path.display()))?;
    parser::parse_board_str(&content)
        .with_context(|| format!("Failed to parse board description: {}", path.display()))
}

fn load_keycodes(primary: &Path, extra: &Path) -> Result<KeycodeDb> {
    let primary_content = fs::read_to_string(primary)
        .with_context(|| format!("Failed to read keycode dictionary: {}", primary.display()))?;
    let extra_content = fs::read_to_string(extra)
        .with_context(|| format!("Failed to read keycode dictionary: {}", extra.display()))?;
    KeycodeDb::from_sources(&primary_content, &extra_content)
        .context("Failed to load keycode dictionaries")
}

fn print_layer(
    doc: &KeymapDocument,
    board: &BoardGeometry,
    db: &KeycodeDb,
    layer_index: usize,
    json: bool,
) -> Result<()> {
    let rendered = services::compose_layer(doc, board, db, layer_index)
        .with_context(|| format!("Failed to compose layer {layer_index}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rendered)?);
    } else {
        print_text_table(doc, layer_index, &rendered);
    }
    Ok(())
}

fn print_text_table(doc: &KeymapDocument, layer_index: usize, rendered: &[RenderableKey]) {
    println!(
        "Layer {} of {} ({}, {} keys)",
        layer_index,
        doc.layer_count(),
        doc.layout,
        rendered.len()
    );
    for (idx, key) in rendered.iter().enumerate() {
        println!(
            "  [{idx:3}] x={:.3} y={:.3} w={:.3} h={:.3}  {:?}",
            key.norm_x, key.norm_y, key.norm_w, key.norm_h, key.label
        );
    }
    println!();
}
