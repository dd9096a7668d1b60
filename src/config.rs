use crate::error::{FichesError, Result};
use fiches_common::FilterProfile;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Onglet de l'export de suivi de plans
pub const DEFAULT_SHEET_NAME: &str = "Liste Plan & NdC";

/// Dossier racine de l'arborescence générée
pub const DEFAULT_ROOT_FOLDER: &str = "4-Matériels pour études";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sheet_name: String,
    pub profile: FilterProfile,
    pub root_folder: String,
    pub collapse_whitespace: bool,
    pub template_path: Option<PathBuf>,
    pub referentiel_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet_name: DEFAULT_SHEET_NAME.into(),
            profile: FilterProfile::St,
            root_folder: DEFAULT_ROOT_FOLDER.into(),
            collapse_whitespace: true,
            template_path: None,
            referentiel_path: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content).map_err(|e| {
                FichesError::Config(format!("{} : {}", config_path.display(), e))
            })?;
            log::debug!("configuration chargée depuis {}", config_path.display());
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// `FICHES_CONFIG` prioritaire, sinon ~/.config/fiches/config.json
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var("FICHES_CONFIG") {
            return Ok(PathBuf::from(path));
        }

        let home = dirs::home_dir()
            .ok_or_else(|| FichesError::Config("répertoire personnel introuvable".into()))?;
        Ok(home.join(".config").join("fiches").join("config.json"))
    }

    pub fn set_sheet_name(&mut self, sheet_name: String) -> Result<()> {
        if sheet_name.trim().is_empty() {
            return Err(FichesError::Config("nom d'onglet vide".into()));
        }
        self.sheet_name = sheet_name;
        self.save()
    }

    pub fn set_profile(&mut self, profile: FilterProfile) -> Result<()> {
        self.profile = profile;
        self.save()
    }
}
