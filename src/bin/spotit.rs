//! spotit: generate, verify, and render Spot It! decks.
//!
//! ```text
//! spotit generate --order 4
//! spotit verify --order 9
//! spotit render --images ./symbols --out ./cards --mode circle --circle-border
//! spotit render --images ./symbols --out ./cards --mode scatter --max-attempts 200 --zip
//! ```
//!
//! Logging goes through `env_logger`; set `RUST_LOG=debug` for per-card detail.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use spot_it::core::{BorderStyle, DeckConfig, LayoutMode};
use spot_it::layout::Overrides;
use spot_it::render::{CardSink, DirectorySink, SvgRenderer, ZipSink, ARCHIVE_FILE};
use spot_it::session::DeckSession;
use spot_it::{generate, verify_deck, SpotError};

const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

#[derive(Parser)]
#[command(author, version, about = "Spot It! card generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Print the symbol ids of every card")]
    Generate {
        #[arg(short, long, default_value_t = 4)]
        order: usize,
    },
    #[command(about = "Check the one-shared-symbol property of a deck")]
    Verify {
        #[arg(short, long, default_value_t = 4)]
        order: usize,
    },
    #[command(about = "Lay out and render every card as SVG")]
    Render {
        /// Directory of symbol images; the first n² - n + 1 (by name) are used
        #[arg(long)]
        images: PathBuf,
        /// Output directory for card_<n>.svg and manifest.json
        #[arg(long)]
        out: PathBuf,
        /// Write a single spot_it_cards.zip into the output directory instead of loose files
        #[arg(long)]
        zip: bool,
        #[arg(short, long, default_value_t = 4)]
        order: usize,
        #[arg(long, default_value = "simple")]
        mode: LayoutMode,
        #[arg(long, default_value_t = 500)]
        card_size: u32,
        #[arg(long, default_value_t = 80)]
        symbol_size: u32,
        #[arg(long, default_value_t = 3)]
        border: u32,
        /// Draw a circular border instead of a rounded rectangle
        #[arg(long)]
        circle_border: bool,
        /// Circle mode: symbols face away from the centre
        #[arg(long)]
        face_outward: bool,
        /// Circle mode ring radius in pixels; defaults to the card's usable ring
        #[arg(long)]
        circle_radius: Option<f64>,
        /// Scatter mode placement attempts per size step
        #[arg(long, default_value_t = 100)]
        max_attempts: u32,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// JSON file of per-symbol overrides
        #[arg(long)]
        overrides: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, SpotError> {
    match cli.command {
        Command::Generate { order } => {
            let deck = generate(order)?;
            for (index, card) in deck.iter().enumerate() {
                println!("card {:>3}: {}", index + 1, card);
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Verify { order } => {
            let deck = generate(order)?;
            let violations = verify_deck(&deck);
            if violations.is_empty() {
                println!("order {order}: {} cards, every pair shares one symbol", deck.len());
                return Ok(ExitCode::SUCCESS);
            }
            for violation in &violations {
                println!("{violation}");
            }
            log::warn!("order {order}: {} violations", violations.len());
            Ok(ExitCode::FAILURE)
        }
        Command::Render {
            images,
            out,
            zip,
            order,
            mode,
            card_size,
            symbol_size,
            border,
            circle_border,
            face_outward,
            circle_radius,
            max_attempts,
            seed,
            overrides,
        } => {
            let style = if circle_border {
                BorderStyle::Circle
            } else {
                BorderStyle::RoundedRect
            };
            let config = DeckConfig::default()
                .with_order(order)
                .with_mode(mode)
                .with_card_size(card_size)
                .with_symbol_size(symbol_size)
                .with_border(border, style)
                .with_face_outward(face_outward)
                .with_max_attempts(max_attempts)
                .with_seed(seed);
            let config = match circle_radius {
                Some(radius) => config.with_circle_radius(radius),
                None => config,
            };
            let overrides = match overrides {
                Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
                None => Overrides::new(),
            };

            let session = DeckSession::new(config, list_images(&images)?)?;
            let (mut sink, target): (Box<dyn CardSink>, PathBuf) = if zip {
                let path = out.join(ARCHIVE_FILE);
                (Box::new(ZipSink::create(&path)?), path)
            } else {
                (Box::new(DirectorySink::create(&out)?), out)
            };
            let (manifest, report) = session.export(&overrides, &SvgRenderer::new(), sink.as_mut())?;

            println!("{} cards written to {}", manifest.files.len(), target.display());
            if report.exhausted_count() > 0 {
                println!("{} symbols did not fit and were left out", report.exhausted_count());
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Image files in `dir`, sorted by name.
fn list_images(dir: &Path) -> Result<Vec<String>, SpotError> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        })
        .collect();
    files.sort();
    log::debug!("found {} images in {}", files.len(), dir.display());
    Ok(files
        .into_iter()
        .map(|path| path.to_string_lossy().into_owned())
        .collect())
}
