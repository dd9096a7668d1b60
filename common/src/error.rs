//! Définition des erreurs

use thiserror::Error;

/// Erreur commune
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Aucune ligne n'a passé le filtre des fiches techniques
    #[error("Aucune fiche technique valide n'a été détectée")]
    EmptyResultSet,

    #[error("Template error: {0}")]
    Template(String),

    #[cfg(feature = "excel")]
    #[error("Excel error: {0}")]
    Excel(#[from] rust_xlsxwriter::XlsxError),
}

/// Alias de Result
pub type Result<T> = std::result::Result<T, Error>;
