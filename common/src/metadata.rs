//! Métadonnées du chantier
//!
//! La première ligne de l'export porte le nom du chantier (plage B1:H1)
//! et son numéro (plage J1:L1). Les cellules sont clairsemées : on prend
//! la première valeur exploitable de chaque plage.

use crate::types::{cell, CellValue, UNKNOWN_PROJECT_NAME, UNKNOWN_PROJECT_NUMBER};
use std::ops::RangeInclusive;

/// Colonnes scannées pour le nom (B..H)
pub const NAME_COLUMNS: RangeInclusive<usize> = 1..=7;

/// Colonnes scannées pour le numéro (J..L)
pub const NUMBER_COLUMNS: RangeInclusive<usize> = 9..=11;

/// Nom et numéro du chantier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectMetadata {
    pub name: String,
    pub number: String,
}

/// Extrait le nom et le numéro du chantier de la ligne d'en-tête
pub fn extract_metadata(header: &[CellValue]) -> ProjectMetadata {
    ProjectMetadata {
        name: extract_project_name(header),
        number: extract_project_number(header),
    }
}

/// Première cellule non vide de B..H, sinon la sentinelle
pub fn extract_project_name(header: &[CellValue]) -> String {
    NAME_COLUMNS
        .filter_map(|i| cell(header, i).trimmed())
        .next()
        .unwrap_or_else(|| UNKNOWN_PROJECT_NAME.to_string())
}

/// Première cellule numérique de J..L, sinon la sentinelle
///
/// Le texte est conservé tel quel : "004512" reste "004512".
pub fn extract_project_number(header: &[CellValue]) -> String {
    NUMBER_COLUMNS
        .map(|i| cell(header, i))
        .filter(|c| c.is_numeric_like())
        .filter_map(|c| c.trimmed())
        .next()
        .unwrap_or_else(|| UNKNOWN_PROJECT_NUMBER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(cells: &[(usize, CellValue)]) -> Vec<CellValue> {
        let len = cells.iter().map(|(i, _)| i + 1).max().unwrap_or(0);
        let mut row = vec![CellValue::Empty; len];
        for (i, value) in cells {
            row[*i] = value.clone();
        }
        row
    }

    #[test]
    fn test_empty_header() {
        let meta = extract_metadata(&[]);
        assert_eq!(meta.name, "Chantier_Inconnu");
        assert_eq!(meta.number, "000000");
    }

    #[test]
    fn test_name_first_non_empty() {
        let row = vec![
            CellValue::from("Nom"),
            CellValue::from(""),
            CellValue::from(""),
            CellValue::from("Site Alpha"),
        ];
        assert_eq!(extract_project_name(&row), "Site Alpha");
    }

    #[test]
    fn test_name_trimmed_and_whitespace_skipped() {
        let row = header(&[(1, "   ".into()), (4, "  Lycée Pasteur  ".into()), (6, "Autre".into())]);
        assert_eq!(extract_project_name(&row), "Lycée Pasteur");
    }

    #[test]
    fn test_name_ignores_columns_outside_range() {
        // A (0) et I (8) ne sont jamais lus
        let row = header(&[(0, "Colonne A".into()), (8, "Colonne I".into())]);
        assert_eq!(extract_project_name(&row), "Chantier_Inconnu");
    }

    #[test]
    fn test_name_from_number_cell() {
        let row = header(&[(2, CellValue::Number(2024.0))]);
        assert_eq!(extract_project_name(&row), "2024");
    }

    #[test]
    fn test_number_keeps_leading_zeros() {
        let row = header(&[(9, "004512".into())]);
        assert_eq!(extract_project_number(&row), "004512");
    }

    #[test]
    fn test_number_skips_non_numeric() {
        let row = header(&[(9, "N° chantier".into()), (10, " 781203 ".into())]);
        assert_eq!(extract_project_number(&row), "781203");
    }

    #[test]
    fn test_number_from_numeric_cell() {
        let row = header(&[(11, CellValue::Number(123456.0))]);
        assert_eq!(extract_project_number(&row), "123456");
    }

    #[test]
    fn test_number_ignores_columns_outside_range() {
        let row = header(&[(8, "111111".into()), (12, "222222".into())]);
        assert_eq!(extract_project_number(&row), "000000");
    }

    #[test]
    fn test_number_zero_is_absent() {
        let row = header(&[(9, CellValue::Number(0.0)), (10, "42".into())]);
        assert_eq!(extract_project_number(&row), "42");
    }

    #[test]
    fn test_extract_is_idempotent() {
        let row = header(&[(3, "Site Alpha".into()), (10, "004512".into())]);
        assert_eq!(extract_metadata(&row), extract_metadata(&row));
    }
}
