use thiserror::Error;

#[derive(Error, Debug)]
pub enum FichesError {
    #[error("Erreur de configuration : {0}")]
    Config(String),

    #[error("Fichier introuvable : {0}")]
    FileNotFound(String),

    #[error("L'onglet \"{sheet}\" est introuvable (onglets disponibles : {available})")]
    MissingSheet { sheet: String, available: String },

    #[error("Lecture du classeur impossible : {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("Aucun fichier source chargé")]
    NoSourceFile,

    #[error("Aucun chantier analysé")]
    NoProject,

    #[error("Erreur de génération de l'arborescence : {0}")]
    Archive(String),

    #[error("Erreur JSON : {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Erreur IO : {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] fiches_common::Error),
}

impl FichesError {
    /// Conditions à présenter à l'utilisateur sans être des pannes
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            FichesError::MissingSheet { .. }
                | FichesError::Common(fiches_common::Error::EmptyResultSet)
        )
    }
}

pub type Result<T> = std::result::Result<T, FichesError>;
