//! Fiches Common Library
//!
//! Types et logique d'extraction partagés, sans dépendance d'interface :
//! métadonnées du chantier, filtrage des fiches, référentiel matériel,
//! noms de dossiers et modèle de fiche.

pub mod types;
pub mod error;
pub mod referentiel;
pub mod metadata;
pub mod filter;
pub mod matcher;
pub mod sanitizer;
pub mod plan;
pub mod template;
pub mod export;

pub use types::{CellValue, LineItem, MatchResult, ProjectContext, Row, SheetPlan};
pub use error::{Error, Result};
pub use referentiel::{ReferenceRecord, ReferenceTable};
pub use metadata::{extract_metadata, ProjectMetadata};
pub use filter::{filter_line_items, FilterProfile};
pub use matcher::match_material;
pub use sanitizer::{folder_name, SanitizeOptions};
pub use plan::{analyze_rows, build_plan};
pub use template::{FicheTemplate, FicheValues, RenderedFiche};
