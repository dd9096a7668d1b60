//! Rapprochement désignation → référentiel
//!
//! Recherche par inclusion de sous-chaîne, insensible à la casse, dans
//! l'ordre du référentiel. Pas de score : la première entrée gagne.

use crate::referentiel::{ReferenceRecord, ReferenceTable};
use crate::types::MatchResult;

/// Première entrée du référentiel dont le mot-clé apparaît dans la désignation
pub fn find_record<'a>(designation: &str, table: &'a ReferenceTable) -> Option<&'a ReferenceRecord> {
    if designation.is_empty() {
        return None;
    }

    let folded = designation.to_lowercase();
    table
        .iter()
        .find(|record| folded.contains(&record.keyword.to_lowercase()))
}

/// Référence conforme et descriptif pour une désignation
///
/// Une désignation vide ou sans correspondance donne le descriptif par défaut.
pub fn match_material(designation: &str, table: &ReferenceTable) -> MatchResult {
    match find_record(designation, table) {
        Some(record) => MatchResult {
            reference: record.canonical_reference.clone(),
            description: record.canonical_description.clone(),
        },
        None => MatchResult::fallback(),
    }
}
