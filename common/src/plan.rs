//! Analyse d'un export et plan de génération
//!
//! lignes brutes → ProjectContext → Vec<SheetPlan>

use crate::error::{Error, Result};
use crate::filter::{filter_line_items, FilterProfile};
use crate::matcher::match_material;
use crate::metadata::extract_metadata;
use crate::referentiel::ReferenceTable;
use crate::sanitizer::{folder_name, SanitizeOptions};
use crate::types::{CellValue, ProjectContext, SheetPlan};

/// Construit le chantier à partir de toutes les lignes de l'onglet
///
/// La première ligne sert d'en-tête. Aucune fiche retenue donne
/// `Error::EmptyResultSet`.
pub fn analyze_rows<R: AsRef<[CellValue]>>(rows: &[R], profile: FilterProfile) -> Result<ProjectContext> {
    let header: &[CellValue] = rows.first().map(|r| r.as_ref()).unwrap_or(&[]);
    let metadata = extract_metadata(header);
    let items = filter_line_items(rows, profile);

    if items.is_empty() {
        return Err(Error::EmptyResultSet);
    }

    Ok(ProjectContext {
        project_name: metadata.name,
        project_number: metadata.number,
        items,
    })
}

/// Nom de dossier et correspondance référentiel pour chaque fiche
pub fn build_plan(
    project: &ProjectContext,
    table: &ReferenceTable,
    options: &SanitizeOptions,
) -> Vec<SheetPlan> {
    project
        .items
        .iter()
        .map(|item| {
            let matched = match_material(&item.designation, table);
            SheetPlan {
                folder_name: folder_name(&item.reference, &item.designation, options),
                matched_reference: matched.reference,
                matched_description: matched.description,
                item: item.clone(),
            }
        })
        .collect()
}
