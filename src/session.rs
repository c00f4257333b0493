//! Editing session: the surface a front end drives.
//!
//! A `Session` owns the current `NonogramModel`. Front ends bind each grid
//! cell to a `CellBinding` once, route menu entries through `MenuAction`, and
//! replace the whole model when a document is opened. Headless front ends can
//! feed `Command`s and get a `Reply` back for each one.

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::clues::PuzzleClues;
use crate::model::NonogramModel;
use crate::{MakerConfig, Result};

/// Something that can be opened from and saved to a puzzle file
pub trait Persist {
    /// Load the document at `path`, replacing the current state on success.
    fn open(&mut self, path: &Path) -> Result<()>;

    /// Write the current state to `path`.
    fn save(&self, path: &Path) -> Result<()>;
}

/// Menu entries offered by the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuAction {
    Open,
    Save,
}

impl MenuAction {
    pub const ALL: [MenuAction; 2] = [MenuAction::Open, MenuAction::Save];

    /// Label shown in the menu
    pub fn label(self) -> &'static str {
        match self {
            MenuAction::Open => "Open",
            MenuAction::Save => "Save",
        }
    }
}

/// A grid cell's toggle control, bound to its coordinates when created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellBinding {
    pub row: usize,
    pub col: usize,
}

impl CellBinding {
    /// Push the control's selected state into the model.
    pub fn apply(&self, model: &mut NonogramModel, selected: bool) -> Result<()> {
        model.set_cell(self.row, self.col, selected)
    }
}

/// A request from a headless front end, one per input line
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Command {
    Set { row: usize, col: usize, value: bool },
    Toggle { row: usize, col: usize },
    Get { row: usize, col: usize },
    Clues,
    Menu { menu: MenuAction, path: PathBuf },
}

/// Outcome of a `Command`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clues: Option<PuzzleClues>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Reply {
    fn ok() -> Self {
        Reply {
            ok: true,
            cell: None,
            clues: None,
            error: None,
        }
    }

    fn err(e: crate::Error) -> Self {
        Reply {
            ok: false,
            cell: None,
            clues: None,
            error: Some(e.to_string()),
        }
    }
}

/// The editor state: startup configuration plus the current puzzle
#[derive(Debug, Clone)]
pub struct Session {
    config: MakerConfig,
    model: NonogramModel,
}

impl Session {
    /// Start a session on an empty grid sized by `config`.
    pub fn new(config: MakerConfig) -> Result<Self> {
        config.validate()?;
        let model = NonogramModel::new(config.rows, config.cols)?;
        Ok(Self { config, model })
    }

    /// Start a session on an existing puzzle. The grid size comes from the
    /// model; only `cell_size` is taken from `config`.
    pub fn with_model(config: MakerConfig, model: NonogramModel) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, model })
    }

    pub fn model(&self) -> &NonogramModel {
        &self.model
    }

    pub fn config(&self) -> &MakerConfig {
        &self.config
    }

    /// One binding per cell, row-major
    pub fn bindings(&self) -> Vec<CellBinding> {
        let cols = self.model.num_cols();
        (0..self.model.num_rows())
            .flat_map(|row| (0..cols).map(move |col| CellBinding { row, col }))
            .collect()
    }

    /// A bound cell control changed state.
    pub fn press(&mut self, binding: CellBinding, selected: bool) -> Result<()> {
        binding.apply(&mut self.model, selected)
    }

    /// Flip a cell and return its new value.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool> {
        let value = !self.model.get_cell(row, col)?;
        self.model.set_cell(row, col, value)?;
        Ok(value)
    }

    /// Run a menu entry against `path`.
    pub fn dispatch(&mut self, action: MenuAction, path: &Path) -> Result<()> {
        let res = match action {
            MenuAction::Open => self.open(path),
            MenuAction::Save => self.save(path),
        };
        if let Err(e) = &res {
            warn!("{} {} failed: {}", action.label(), path.display(), e);
        }
        res
    }

    /// Apply a headless command. Failures are reported in the reply and
    /// leave the session unchanged.
    pub fn handle(&mut self, command: Command) -> Reply {
        let res = match command {
            Command::Set { row, col, value } => self
                .press(CellBinding { row, col }, value)
                .map(|_| Reply::ok()),
            Command::Toggle { row, col } => self.toggle(row, col).map(|v| Reply {
                cell: Some(v),
                ..Reply::ok()
            }),
            Command::Get { row, col } => self.model.get_cell(row, col).map(|v| Reply {
                cell: Some(v),
                ..Reply::ok()
            }),
            Command::Clues => Ok(Reply {
                clues: Some(self.model.clues()),
                ..Reply::ok()
            }),
            Command::Menu { menu, path } => self.dispatch(menu, &path).map(|_| Reply::ok()),
        };
        res.unwrap_or_else(Reply::err)
    }
}

impl Persist for Session {
    fn open(&mut self, path: &Path) -> Result<()> {
        let model = NonogramModel::from_file(path)?;
        info!(
            "opened {} ({}x{})",
            path.display(),
            model.num_rows(),
            model.num_cols()
        );
        self.model = model;
        Ok(())
    }

    fn save(&self, path: &Path) -> Result<()> {
        self.model.save_to_file(path)
    }
}
