//! Types de données de l'extraction
//!
//! Types partagés entre la CLI et les tests :
//! - CellValue : valeur de cellule (déjà convertie par le lecteur)
//! - LineItem / ProjectContext : résultat de l'extraction
//! - MatchResult / SheetPlan : résultat du référentiel et sortie vers l'arborescence

use serde::{Deserialize, Serialize};

/// Sentinelle du nom de chantier quand l'en-tête ne contient rien d'exploitable
pub const UNKNOWN_PROJECT_NAME: &str = "Chantier_Inconnu";

/// Sentinelle du numéro de chantier
pub const UNKNOWN_PROJECT_NUMBER: &str = "000000";

/// Valeur primitive d'une cellule
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Empty,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Forme texte de la cellule (non trimée)
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    (*n as i64).to_string()
                } else {
                    n.to_string()
                }
            }
            CellValue::Bool(b) => b.to_string(),
        }
    }

    /// Une cellule vide, un zéro numérique, `false` ou un texte vide
    /// comptent comme absents.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            CellValue::Number(n) => *n == 0.0 || n.is_nan(),
            CellValue::Bool(b) => !b,
        }
    }

    /// Texte trimé, ou `None` si la cellule est absente ou vide après trim
    pub fn trimmed(&self) -> Option<String> {
        if self.is_blank() {
            return None;
        }
        let text = self.to_text();
        let text = text.trim();
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }

    /// Vrai si la cellule a l'allure d'un nombre
    pub fn is_numeric_like(&self) -> bool {
        match self {
            CellValue::Number(n) => n.is_finite(),
            CellValue::Text(s) => s
                .trim()
                .parse::<f64>()
                .map(|n| n.is_finite())
                .unwrap_or(false),
            CellValue::Empty | CellValue::Bool(_) => false,
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

/// Ligne de tableur
pub type Row = Vec<CellValue>;

/// Cellule d'une ligne, vide si la colonne n'existe pas
pub fn cell(row: &[CellValue], index: usize) -> &CellValue {
    static EMPTY: CellValue = CellValue::Empty;
    row.get(index).unwrap_or(&EMPTY)
}

/// Fiche technique détectée dans le tableur
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub designation: String,
    pub reference: String,
}

impl LineItem {
    pub fn new(designation: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            designation: designation.into(),
            reference: reference.into(),
        }
    }
}

/// Chantier extrait d'un export
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectContext {
    pub project_name: String,
    pub project_number: String,
    #[serde(default)]
    pub items: Vec<LineItem>,
}

/// Résultat du référentiel matériel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub reference: String,
    pub description: String,
}

/// Descriptif renvoyé quand aucun mot-clé ne correspond
pub const FALLBACK_DESCRIPTION: &str = "Descriptif produit :";

impl MatchResult {
    pub fn fallback() -> Self {
        Self {
            reference: String::new(),
            description: FALLBACK_DESCRIPTION.to_string(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.reference.is_empty() && self.description == FALLBACK_DESCRIPTION
    }
}

/// Sortie par fiche pour le générateur d'arborescence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetPlan {
    pub folder_name: String,
    pub matched_reference: String,
    pub matched_description: String,
    pub item: LineItem,
}

impl SheetPlan {
    /// Résultat du rapprochement porté par le plan
    pub fn match_result(&self) -> MatchResult {
        MatchResult {
            reference: self.matched_reference.clone(),
            description: self.matched_description.clone(),
        }
    }

    /// Aucune entrée du référentiel n'a correspondu à la désignation
    pub fn is_unmatched(&self) -> bool {
        self.match_result().is_fallback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_to_text() {
        assert_eq!(CellValue::Empty.to_text(), "");
        assert_eq!(CellValue::from("abc").to_text(), "abc");
        assert_eq!(CellValue::Number(123456.0).to_text(), "123456");
        assert_eq!(CellValue::Number(12.5).to_text(), "12.5");
        assert_eq!(CellValue::Bool(true).to_text(), "true");
    }

    #[test]
    fn test_cell_trimmed() {
        assert_eq!(CellValue::from("  Site  ").trimmed(), Some("Site".to_string()));
        assert_eq!(CellValue::from("   ").trimmed(), None);
        assert_eq!(CellValue::Empty.trimmed(), None);
        // 0 et false sont traités comme absents
        assert_eq!(CellValue::Number(0.0).trimmed(), None);
        assert_eq!(CellValue::Bool(false).trimmed(), None);
    }

    #[test]
    fn test_cell_numeric_like() {
        assert!(CellValue::from("004512").is_numeric_like());
        assert!(CellValue::from(" 12.5 ").is_numeric_like());
        assert!(CellValue::Number(2024.0).is_numeric_like());
        assert!(!CellValue::from("N° 12").is_numeric_like());
        assert!(!CellValue::from("inf").is_numeric_like());
        assert!(!CellValue::Bool(true).is_numeric_like());
        assert!(!CellValue::Empty.is_numeric_like());
    }

    #[test]
    fn test_cell_out_of_range() {
        let row = vec![CellValue::from("a")];
        assert_eq!(cell(&row, 0), &CellValue::from("a"));
        assert_eq!(cell(&row, 5), &CellValue::Empty);
    }

    #[test]
    fn test_project_context_serialize() {
        let project = ProjectContext {
            project_name: "Site Alpha".to_string(),
            project_number: "004512".to_string(),
            items: vec![LineItem::new("Spécification technique CLIM", "ST-603")],
        };

        let json = serde_json::to_string(&project).expect("sérialisation");
        assert!(json.contains("\"projectName\":\"Site Alpha\""));
        assert!(json.contains("\"projectNumber\":\"004512\""));
        assert!(json.contains("\"reference\":\"ST-603\""));
    }

    #[test]
    fn test_cell_value_deserialize_untagged() {
        let row: Row = serde_json::from_str(r#"["a", 12, null, true]"#).expect("désérialisation");
        assert_eq!(row[0], CellValue::from("a"));
        assert_eq!(row[1], CellValue::Number(12.0));
        assert_eq!(row[2], CellValue::Empty);
        assert_eq!(row[3], CellValue::Bool(true));
    }

    #[test]
    fn test_match_result_fallback() {
        let fallback = MatchResult::fallback();
        assert_eq!(fallback.reference, "");
        assert_eq!(fallback.description, "Descriptif produit :");
        assert!(fallback.is_fallback());
    }

    #[test]
    fn test_sheet_plan_is_unmatched() {
        let mut plan = SheetPlan {
            folder_name: "ST-1 grille".to_string(),
            matched_reference: String::new(),
            matched_description: FALLBACK_DESCRIPTION.to_string(),
            item: LineItem::new("Fiche grille", "ST-1"),
        };
        assert!(plan.is_unmatched());

        // entrée du référentiel aux champs vides : rapprochée quand même
        plan.matched_description = String::new();
        assert!(!plan.is_unmatched());

        plan.matched_reference = "REF-G".to_string();
        plan.matched_description = FALLBACK_DESCRIPTION.to_string();
        assert!(!plan.is_unmatched());
    }
}
