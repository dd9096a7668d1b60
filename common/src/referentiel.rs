//! Référentiel matériel
//!
//! Table ordonnée mot-clé → référence conforme / descriptif.
//! L'ordre des entrées définit la priorité : la première entrée dont le
//! mot-clé apparaît dans la désignation l'emporte.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Entrée du référentiel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceRecord {
    pub id: String,
    /// Fragment recherché (insensible à la casse) dans la désignation
    #[serde(alias = "motCle")]
    pub keyword: String,
    #[serde(alias = "refConforme", default)]
    pub canonical_reference: String,
    #[serde(alias = "descriptif", default)]
    pub canonical_description: String,
}

impl ReferenceRecord {
    pub fn new(id: &str, keyword: &str, reference: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            keyword: keyword.to_string(),
            canonical_reference: reference.to_string(),
            canonical_description: description.to_string(),
        }
    }
}

/// Référentiel chargé une fois au démarrage
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceTable {
    records: Vec<ReferenceRecord>,
}

impl ReferenceTable {
    pub fn new(records: Vec<ReferenceRecord>) -> Self {
        Self { records }
    }

    /// Référentiel intégré (génie thermique, séries 000 à 600)
    pub fn builtin() -> Self {
        let r = ReferenceRecord::new;
        Self::new(vec![
            // Généralités (série 000)
            r("TUYAUTERIE", "tuyauterie", "test ref tuyauterie", "test descriptis tuyauterie"),
            r("GAINES_AERAU", "aéraulique", "", ""),
            r("GAINE_DF", "gaines désenf", "", ""),
            // Généralités (série 100)
            r("APP_SANIT", "appareils sanit", "", ""),
            r("PROD_ECS", "production ECS", "", ""),
            r("POMPES_ECS", "pompes ECS", "", ""),
            r("VASE_ECS", "vase expansion ECS", "", ""),
            r("ROB_ECS", "robinetterie ECS", "", ""),
            r("DIVERS_ECS", "divers ECS", "", ""),
            // Chauffage (série 200)
            r("TERMINAUX_CH", "Terminaux chau", "", ""),
            r("PROD_CH", "Production de chaleur", "", ""),
            r("POMPE_CH", "pompes chau", "", ""),
            r("V3V_CH", "voies chau", "", ""),
            r("VASE_CH", "expansion chau", "", ""),
            r("ROB_CH", "robinetterie chau", "", ""),
            r("DIVERS_CH", "divers chau", "", ""),
            // Ventilation (série 300)
            r("BOUCHE_VE", "Bouche", "", ""),
            r("CTA_VE", "CTA", "", ""),
            r("EXTRACTEUR_VE", "Extracteur", "", ""),
            r("REGISTRE_VE", "registre", "", ""),
            r("PAS_VE", "piège", "", ""),
            r("CCF_VE", "clapet", "", ""),
            r("GRILLE_VE", "grille", "", ""),
            r("ACCESSOIRE_VE", "Accessoires ve", "", ""),
            r("Divers_VE", "divers ve", "", ""),
            // Eau glacée (série 400)
            r("TERMINAUX_EG", "Terminaux EG", "", ""),
            r("PROD_EG", "production de froid", "", ""),
            r("POMPE_EG", "Pompes EG", "", ""),
            r("V3V_EG", "voies EG", "", ""),
            r("VASE_EG", "expansion eg", "", ""),
            r("ROB_EG", "Robinetterie e", "", ""),
            r("DIVERS_EG", "divers e", "", ""),
            // Désenfumage (série 500)
            r("VOLET_DF", "volet", "", ""),
            r("EXTRACTEUR_DF", "Extracteur de dés", "", ""),
            r("TOURELLE_DF", "Tourelle", "", ""),
            // Climatisation (série 600)
            r("TERMINAUX_CLIM", "Terminaux cli", "", ""),
            r("GROUPE_CLIM", "Groupes de cli", "", ""),
            r("BOITIER_CLIM", "répartition cli", "", ""),
            r("DIVERS_CLIM", "divers cli", "", ""),
        ])
    }

    /// Lecture depuis une chaîne JSON (tableau d'entrées)
    pub fn from_json(json: &str) -> Result<Self> {
        let table: Self = serde_json::from_str(json)?;
        Ok(table)
    }

    /// Lecture depuis un fichier JSON
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn records(&self) -> &[ReferenceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReferenceRecord> {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table() {
        let table = ReferenceTable::builtin();
        assert_eq!(table.len(), 39);
        assert_eq!(table.records()[0].id, "TUYAUTERIE");
        assert_eq!(table.records()[0].canonical_reference, "test ref tuyauterie");
    }

    #[test]
    fn test_builtin_ids_unique() {
        let table = ReferenceTable::builtin();
        let ids: std::collections::HashSet<_> = table.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), table.len());
    }

    #[test]
    fn test_from_json_original_field_names() {
        let json = r#"[
            {"id": "POMPES_ECS", "motCle": "pompes ECS", "refConforme": "REF-1", "descriptif": "Pompe"},
            {"id": "CTA_VE", "keyword": "CTA"}
        ]"#;

        let table = ReferenceTable::from_json(json).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[0].keyword, "pompes ECS");
        assert_eq!(table.records()[0].canonical_reference, "REF-1");
        assert_eq!(table.records()[0].canonical_description, "Pompe");
        assert_eq!(table.records()[1].canonical_description, "");
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(ReferenceTable::from_json("{ invalide }").is_err());
    }
}
