//! Curriculum catalog: levels, training cycles, modules and the flat lists
//! offered by the selection form.
//!
//! The JSON layout keeps the Spanish keys of the published dataset
//! (`grado_medio`, `modulos`, `resultados_aprendizaje`, ...).

use crate::error::SelectionError;
use crate::session::Selection;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

const EMBEDDED_CATALOG: &str = include_str!("../data/default_catalog.json");

/// Training level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    #[serde(rename = "Grado Medio")]
    Intermediate,
    #[serde(rename = "Grado Superior")]
    Advanced,
}

impl Level {
    pub fn label(self) -> &'static str {
        match self {
            Level::Intermediate => "Grado Medio",
            Level::Advanced => "Grado Superior",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Grado Medio" => Some(Level::Intermediate),
            "Grado Superior" => Some(Level::Advanced),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The whole catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogData {
    #[serde(rename = "grado_medio", default)]
    pub intermediate: BTreeMap<String, Program>,
    #[serde(rename = "grado_superior", default)]
    pub advanced: BTreeMap<String, Program>,
    #[serde(rename = "metodologias_activas", default)]
    pub methodologies: Vec<String>,
    #[serde(rename = "competencias", default)]
    pub competencies: Competencies,
}

/// A training cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Program {
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "duracion")]
    pub duration: String,
    #[serde(rename = "modulos", default)]
    pub modules: BTreeMap<String, Module>,
}

/// A professional module within a cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Module {
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "horas")]
    pub hours: u32,
    /// Learning outcomes (RA).
    #[serde(rename = "resultados_aprendizaje", default)]
    pub outcomes: Vec<String>,
    /// Evaluation criteria (CE).
    #[serde(rename = "criterios_evaluacion", default)]
    pub criteria: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Competencies {
    #[serde(rename = "profesionales", default)]
    pub professional: Vec<String>,
    #[serde(rename = "personales", default)]
    pub personal: Vec<String>,
    #[serde(rename = "sociales", default)]
    pub social: Vec<String>,
}

/// A resolved module together with its cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModuleInfo<'a> {
    pub level: Level,
    pub program: &'a Program,
    pub module: &'a Module,
}

impl CatalogData {
    /// Parse a catalog from JSON.
    pub fn from_json(input: &str) -> serde_json::Result<Self> {
        serde_json::from_str(input)
    }

    /// The minimal dataset compiled into the crate.
    pub fn embedded() -> Self {
        Self::from_json(EMBEDDED_CATALOG).unwrap_or_else(|e| {
            log::error!("embedded catalog is invalid: {e}");
            Self::default()
        })
    }

    /// Cycles offered at `level`.
    pub fn programs(&self, level: Level) -> &BTreeMap<String, Program> {
        match level {
            Level::Intermediate => &self.intermediate,
            Level::Advanced => &self.advanced,
        }
    }

    /// Check that a selection names an existing cycle and module.
    pub fn validate(&self, selection: &Selection) -> Result<(), SelectionError> {
        let level = selection.level.ok_or(SelectionError::MissingField("level"))?;
        if selection.cycle.trim().is_empty() {
            return Err(SelectionError::MissingField("cycle"));
        }
        if selection.module.trim().is_empty() {
            return Err(SelectionError::MissingField("module"));
        }

        let program = self
            .programs(level)
            .get(&selection.cycle)
            .ok_or_else(|| SelectionError::UnknownCycle(selection.cycle.clone()))?;

        if !program.modules.contains_key(&selection.module) {
            return Err(SelectionError::UnknownModule(selection.module.clone()));
        }

        Ok(())
    }

    /// Look up the cycle and module named by a selection.
    pub fn module_info(&self, selection: &Selection) -> Option<ModuleInfo<'_>> {
        let level = selection.level?;
        let program = self.programs(level).get(&selection.cycle)?;
        let module = program.modules.get(&selection.module)?;
        Some(ModuleInfo {
            level,
            program,
            module,
        })
    }
}

/// Loads the catalog once at start-up.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    path: Option<PathBuf>,
}

impl CatalogStore {
    /// A store reading `path`, or the embedded dataset when `None`.
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Load the catalog.
    ///
    /// Read or parse failures are logged and answered with the embedded
    /// dataset; this never fails.
    pub fn load(&self) -> CatalogData {
        let Some(path) = &self.path else {
            return CatalogData::embedded();
        };

        let loaded = std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|content| CatalogData::from_json(&content).map_err(|e| e.to_string()));

        match loaded {
            Ok(data) => {
                log::debug!("loaded catalog from {}", path.display());
                data
            }
            Err(e) => {
                log::warn!(
                    "could not load catalog from {}: {}; using embedded dataset",
                    path.display(),
                    e
                );
                CatalogData::embedded()
            }
        }
    }
}
