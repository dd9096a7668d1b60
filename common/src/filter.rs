//! Filtrage des fiches techniques
//!
//! Une ligne est retenue si sa désignation (colonne A) et sa référence
//! (colonne C) passent toutes les deux le prédicat du profil actif.
//! Les lignes sont parcourues dans l'ordre, en-tête compris.

use crate::types::{cell, CellValue, LineItem};
use serde::{Deserialize, Serialize};

/// Colonne de la désignation
pub const DESIGNATION_COLUMN: usize = 0;

/// Colonne de la référence
pub const REFERENCE_COLUMN: usize = 2;

/// Profil de détection des fiches techniques
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterProfile {
    /// Références "ST-", désignation contenant "spéc" ou "fich"
    #[default]
    St,
    /// Références commençant par "RET-", désignation "spécification technique"
    Ret,
}

impl FilterProfile {
    /// Marqueur qui ouvre la référence courte
    pub fn marker(&self) -> &'static str {
        match self {
            FilterProfile::St => "ST-",
            FilterProfile::Ret => "RET-",
        }
    }

    /// Applique le prédicat à une ligne
    pub fn select(&self, row: &[CellValue]) -> Option<LineItem> {
        let designation = cell_text(row, DESIGNATION_COLUMN);
        let reference = cell_text(row, REFERENCE_COLUMN);

        match self {
            FilterProfile::St => {
                let folded = designation.to_lowercase();
                let reference = reference.to_uppercase();
                let is_sheet = folded.contains("spéc") || folded.contains("fich");
                if is_sheet && reference.contains("ST-") {
                    Some(LineItem::new(designation, reference))
                } else {
                    None
                }
            }
            FilterProfile::Ret => {
                let is_sheet = designation
                    .to_lowercase()
                    .contains("spécification technique");
                if is_sheet && reference.starts_with("RET-") {
                    Some(LineItem::new(designation, reference))
                } else {
                    None
                }
            }
        }
    }
}

impl std::str::FromStr for FilterProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "st" => Ok(FilterProfile::St),
            "ret" => Ok(FilterProfile::Ret),
            _ => Err(format!("Profil inconnu : {}. Utiliser st ou ret", s)),
        }
    }
}

impl std::fmt::Display for FilterProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterProfile::St => write!(f, "st"),
            FilterProfile::Ret => write!(f, "ret"),
        }
    }
}

/// Texte trimé d'une cellule, vide si absente
fn cell_text(row: &[CellValue], index: usize) -> String {
    cell(row, index).trimmed().unwrap_or_default()
}

/// Sélectionne les fiches techniques de toutes les lignes, dans l'ordre
pub fn filter_line_items<R: AsRef<[CellValue]>>(rows: &[R], profile: FilterProfile) -> Vec<LineItem> {
    rows.iter()
        .filter_map(|row| profile.select(row.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(designation: &str, reference: &str) -> Vec<CellValue> {
        vec![designation.into(), CellValue::Empty, reference.into()]
    }

    #[test]
    fn test_st_profile_single_match() {
        let rows = vec![
            row("Spécification technique CLIM", "ST-603"),
            row("irrelevant", "XX-1"),
        ];

        let items = filter_line_items(&rows, FilterProfile::St);
        assert_eq!(items, vec![LineItem::new("Spécification technique CLIM", "ST-603")]);
    }

    #[test]
    fn test_st_profile_fiche_keyword_and_uppercase_reference() {
        let rows = vec![row("  Fiche pompes ECS  ", " lot2-st-101 ")];

        let items = filter_line_items(&rows, FilterProfile::St);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].designation, "Fiche pompes ECS");
        assert_eq!(items[0].reference, "LOT2-ST-101");
    }

    #[test]
    fn test_st_profile_requires_both_predicates() {
        let rows = vec![
            row("Spécification technique", "PL-001"),
            row("Plan de masse", "ST-001"),
        ];
        assert!(filter_line_items(&rows, FilterProfile::St).is_empty());
    }

    #[test]
    fn test_header_row_fails_naturally() {
        let rows = vec![
            row("Désignation", "Référence"),
            row("Spécification technique VENT", "ST-301"),
        ];
        let items = filter_line_items(&rows, FilterProfile::St);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].reference, "ST-301");
    }

    #[test]
    fn test_missing_columns_are_empty() {
        let rows: Vec<Vec<CellValue>> = vec![vec!["Spécification technique".into()], vec![]];
        assert!(filter_line_items(&rows, FilterProfile::St).is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let rows = vec![
            row("Fiche B", "ST-2"),
            row("autre", "ST-9"),
            row("Fiche A", "ST-1"),
        ];
        let refs: Vec<_> = filter_line_items(&rows, FilterProfile::St)
            .into_iter()
            .map(|i| i.reference)
            .collect();
        assert_eq!(refs, vec!["ST-2", "ST-1"]);
    }

    #[test]
    fn test_ret_profile() {
        let rows = vec![
            row("SPÉCIFICATION TECHNIQUE Pompes EG", " RET-410 "),
            row("Spécification technique CTA", "ret-301"),
            row("Fiche CTA", "RET-302"),
            row("Spécification technique grille", "LOT-RET-303"),
        ];

        let items = filter_line_items(&rows, FilterProfile::Ret);
        assert_eq!(items, vec![LineItem::new("SPÉCIFICATION TECHNIQUE Pompes EG", "RET-410")]);
    }

    #[test]
    fn test_numeric_reference_cell() {
        let rows = vec![vec![CellValue::from("Fiche"), CellValue::Empty, CellValue::Number(603.0)]];
        assert!(filter_line_items(&rows, FilterProfile::St).is_empty());
    }

    #[test]
    fn test_profile_from_str() {
        assert_eq!("ST".parse::<FilterProfile>().unwrap(), FilterProfile::St);
        assert_eq!("ret".parse::<FilterProfile>().unwrap(), FilterProfile::Ret);
        assert!("xyz".parse::<FilterProfile>().is_err());
    }

    #[test]
    fn test_profile_marker() {
        assert_eq!(FilterProfile::St.marker(), "ST-");
        assert_eq!(FilterProfile::Ret.marker(), "RET-");
    }
}
