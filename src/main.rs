use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use nonogram_maker::{ClueLine, Command, MakerConfig, NonogramModel, Persist, Session};

#[derive(Parser)]
#[command(name = "nonogram-maker", version, about = "Draw nonogram puzzles and save them with their clues")]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Create an empty puzzle
    New {
        rows: usize,
        cols: usize,
        cell_size: u32,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Draw the grid with `#` for filled and `.` for empty cells
    Show {
        file: PathBuf,
        /// Characters per cell
        #[arg(long, default_value_t = 1)]
        cell_size: u32,
    },
    /// Print row and column clues
    Clues {
        file: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Set one cell and save the file in place
    Set {
        file: PathBuf,
        row: usize,
        col: usize,
        value: CellValue,
    },
    /// Flip one cell and save the file in place
    Toggle { file: PathBuf, row: usize, col: usize },
    /// Print dimensions, filled cell count and fingerprint
    Info { file: PathBuf },
    /// Read JSON commands from stdin, one per line, and answer each with a JSON line
    Edit {
        /// Puzzle to start from; an empty default grid otherwise
        file: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum CellValue {
    On,
    Off,
}

fn load(path: &Path) -> anyhow::Result<NonogramModel> {
    NonogramModel::from_file(path).with_context(|| format!("cannot open {}", path.display()))
}

fn edit_loop(mut session: Session) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let reply = match serde_json::from_str::<Command>(&line) {
            Ok(command) => serde_json::to_string(&session.handle(command))?,
            Err(e) => serde_json::json!({ "ok": false, "error": format!("bad command: {}", e) })
                .to_string(),
        };
        writeln!(out, "{}", reply)?;
        out.flush()?;
    }
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Cmd::New {
            rows,
            cols,
            cell_size,
            output,
        } => {
            let session = nonogram_maker::new_session(MakerConfig::new(rows, cols, cell_size))?;
            match output {
                Some(path) => session.model().save_to_file(&path)?,
                None => println!("{}", session.model()),
            }
        }
        Cmd::Show { file, cell_size } => {
            let config = MakerConfig {
                cell_size,
                ..MakerConfig::default()
            };
            let session = Session::with_model(config, load(&file)?)?;
            let model = session.model();
            let width = session.config().cell_size as usize;
            for row in 0..model.num_rows() {
                let mut line = String::new();
                for col in 0..model.num_cols() {
                    let ch = if model.get_cell(row, col)? { "#" } else { "." };
                    line.push_str(&ch.repeat(width));
                }
                println!("{}", line);
            }
        }
        Cmd::Clues { file, json } => {
            let clues = load(&file)?.clues();
            if json {
                println!("{}", serde_json::to_string_pretty(&clues)?);
            } else {
                print!("{}", clues);
            }
        }
        Cmd::Set {
            file,
            row,
            col,
            value,
        } => {
            let mut model = load(&file)?;
            model.set_cell(row, col, matches!(value, CellValue::On))?;
            model.save_to_file(&file)?;
            println!("row {}: {}", row, ClueLine(&model.project_row(row)?));
            println!("col {}: {}", col, ClueLine(&model.project_col(col)?));
        }
        Cmd::Toggle { file, row, col } => {
            let mut session = Session::with_model(MakerConfig::default(), load(&file)?)?;
            let value = session.toggle(row, col)?;
            session.save(&file)?;
            println!("({}, {}) = {}", row, col, if value { 1 } else { 0 });
        }
        Cmd::Info { file } => {
            let model = load(&file)?;
            println!("size:        {}x{}", model.num_rows(), model.num_cols());
            println!("filled:      {}", model.filled_count());
            println!("fingerprint: {}", model.fingerprint());
        }
        Cmd::Edit { file } => {
            let session = match file {
                Some(path) => Session::with_model(MakerConfig::default(), load(&path)?)?,
                None => nonogram_maker::new_session(MakerConfig::default())?,
            };
            edit_loop(session)?;
        }
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("nonogram-maker: {:#}", e);
        std::process::exit(1);
    }
}
