//! # tile_ed Main Entry Point
//!
//! Starts the desktop map editor, or runs one of the headless commands:
//! `generate` writes a procedurally generated map as JSON and `show` prints a
//! map file as text.
//!
//! ## License
//! Licensed under the MIT License.

use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use log::info;

use tile_ed::config::EditorConfig;
use tile_ed::document::import_map;
use tile_ed::editor::Editor;
use tile_ed::map::{ObjectTag, TerrainTag};
use tile_ed::utils::util::render_ascii;

#[derive(Parser)]
#[command(name = "tile_ed", version, about = "Tile-based game map editor")]
struct Cli {
    /// JSON config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the editor window (default).
    Gui,
    /// Generate a map and write it as JSON.
    Generate {
        #[arg(long)]
        seed: Option<u64>,
        /// Side length of the map.
        #[arg(long)]
        size: Option<usize>,
        #[arg(long)]
        name: Option<String>,
        /// Output file. Prints to stdout when omitted.
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Print a map file as text.
    Show { path: PathBuf },
}

fn load_config(path: Option<&Path>) -> Result<EditorConfig, Box<dyn Error>> {
    Ok(match path {
        Some(path) => EditorConfig::load(path)?,
        None => EditorConfig::default(),
    })
}

fn generate(
    mut config: EditorConfig,
    seed: Option<u64>,
    size: Option<usize>,
    name: Option<String>,
    out: Option<PathBuf>,
) -> Result<(), Box<dyn Error>> {
    if let Some(size) = size {
        config.grid_size = size;
    }
    if let Some(name) = name {
        config.default_map_name = name;
    }
    config.seed = seed.or(config.seed);

    let mut editor = Editor::new(config)?;
    editor.generate();
    let bytes = editor.export_bytes()?;
    match out {
        Some(path) => {
            fs::write(&path, &bytes)?;
            info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&bytes)?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

fn show(path: &Path) -> Result<(), Box<dyn Error>> {
    let map = import_map(&fs::read(path)?)?;
    println!("{} ({}x{}, {})", map.name, map.size(), map.size(), map.timestamp.to_rfc3339());
    print!("{}", render_ascii(&map.grid));
    for terrain in TerrainTag::all() {
        println!("{:>10} {} {}", terrain.display_name(), terrain.symbol(), map.grid.count_terrain(*terrain));
    }
    for object in ObjectTag::all() {
        let count = map.grid.count_object(*object);
        if count > 0 {
            println!("{:>10} {} {}", object.display_name(), object.glyph(), count);
        }
    }
    Ok(())
}

#[cfg(feature = "gui")]
fn run_gui(config: EditorConfig) -> Result<(), Box<dyn Error>> {
    let editor = Editor::new(config)?;
    tile_ed::ui::run_main_window(editor);
    Ok(())
}

#[cfg(not(feature = "gui"))]
fn run_gui(_config: EditorConfig) -> Result<(), Box<dyn Error>> {
    Err("tile_ed was built without the `gui` feature; use `generate` or `show`".into())
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging.
    env_logger::init();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Gui) {
        Command::Gui => {
            info!("tile_ed starting...");
            run_gui(config)?;
            info!("tile_ed exiting.");
        }
        Command::Generate { seed, size, name, out } => generate(config, seed, size, name, out)?,
        Command::Show { path } => show(&path)?,
    }
    Ok(())
}
