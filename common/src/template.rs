//! Modèle de fiche technique
//!
//! Un modèle est un titre et une liste de champs (libellé, valeur) dont
//! les valeurs contiennent des balises `{nomProjet}`, `{titreFiche}`...
//! remplacées à la génération de chaque fiche.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Champ du modèle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateField {
    pub label: String,
    pub value: String,
}

/// Modèle de fiche
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FicheTemplate {
    pub title: String,
    #[serde(default)]
    pub fields: Vec<TemplateField>,
}

impl Default for FicheTemplate {
    fn default() -> Self {
        let field = |label: &str, value: &str| TemplateField {
            label: label.to_string(),
            value: value.to_string(),
        };

        Self {
            title: "FICHE TECHNIQUE".to_string(),
            fields: vec![
                field("Projet", "{nomProjet}"),
                field("N° chantier", "{numeroProjet}"),
                field("Fiche", "{titreFiche}"),
                field("Référence", "{complementReference}"),
                field("Descriptif", "{descriptifFiche}"),
                field("Date", "{dateGeneration}"),
            ],
        }
    }
}

impl FicheTemplate {
    /// Lecture depuis une chaîne JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let template: Self = serde_json::from_str(json)
            .map_err(|e| Error::Template(format!("modèle invalide : {}", e)))?;
        if template.title.trim().is_empty() && template.fields.is_empty() {
            return Err(Error::Template("modèle vide".to_string()));
        }
        Ok(template)
    }

    /// Lecture depuis un fichier JSON
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Template(format!("{} : {}", path.display(), e)))?;
        Self::from_json(&content)
    }

    /// Remplit le modèle avec les valeurs d'une fiche
    pub fn render(&self, values: &FicheValues) -> RenderedFiche {
        let tags = values.to_tags();
        RenderedFiche {
            title: render(&self.title, &tags),
            fields: self
                .fields
                .iter()
                .map(|f| (render(&f.label, &tags), render(&f.value, &tags)))
                .collect(),
        }
    }
}

/// Données injectées dans le modèle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FicheValues {
    pub project_name: String,
    pub project_number: String,
    pub sheet_title: String,
    pub reference: String,
    pub description: String,
    pub generated_on: String,
}

impl FicheValues {
    fn to_tags(&self) -> HashMap<&'static str, &str> {
        HashMap::from([
            ("nomProjet", self.project_name.as_str()),
            ("numeroProjet", self.project_number.as_str()),
            ("titreFiche", self.sheet_title.as_str()),
            ("complementReference", self.reference.as_str()),
            ("complémentReference", self.reference.as_str()),
            ("descriptifFiche", self.description.as_str()),
            ("dateGeneration", self.generated_on.as_str()),
        ])
    }
}

/// Fiche prête à écrire
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFiche {
    pub title: String,
    pub fields: Vec<(String, String)>,
}

/// Remplace chaque `{balise}` connue ; les balises inconnues restent telles quelles
pub fn render(text: &str, tags: &HashMap<&str, &str>) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        match after.find('}') {
            Some(close) => {
                let key = &after[..close];
                match tags.get(key) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(key);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}
