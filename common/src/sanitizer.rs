//! Nom de dossier d'une fiche
//!
//! Format : "{référence courte} {désignation nettoyée}"
//! - référence courte : à partir du marqueur du profil ("ST-603")
//! - désignation : sans "Spécification technique" ni les codes de lot

use regex::Regex;

lazy_static::lazy_static! {
    static ref SPEC_PHRASE_RE: Regex = Regex::new(r"(?i)Spécification technique").unwrap();
    // Suppression de sous-chaîne, pas de mot entier
    static ref CATEGORY_RE: Regex = Regex::new(r"(?i)CLIM|CVC|VENT|EG|CH").unwrap();
    static ref MULTI_SPACE_RE: Regex = Regex::new(r"\s{2,}").unwrap();
}

/// Options de nettoyage
#[derive(Debug, Clone, Copy)]
pub struct SanitizeOptions {
    /// Marqueur de la référence courte
    pub marker: &'static str,
    /// Réduit les espaces multiples restants à un seul
    pub collapse_whitespace: bool,
}

impl Default for SanitizeOptions {
    fn default() -> Self {
        Self {
            marker: "ST-",
            collapse_whitespace: true,
        }
    }
}

/// Référence à partir de la première occurrence du marqueur
pub fn short_reference<'a>(reference: &'a str, marker: &str) -> &'a str {
    match reference.find(marker) {
        Some(index) => &reference[index..],
        None => reference,
    }
}

/// Retire la mention "Spécification technique" et les codes de lot
pub fn clean_designation(designation: &str) -> String {
    let without_phrase = SPEC_PHRASE_RE.replace_all(designation, "");
    let without_category = CATEGORY_RE.replace_all(&without_phrase, "");
    without_category.trim().to_string()
}

/// Nom de dossier complet
pub fn folder_name(reference: &str, designation: &str, options: &SanitizeOptions) -> String {
    let name = format!(
        "{} {}",
        short_reference(reference, options.marker),
        clean_designation(designation)
    );

    if options.collapse_whitespace {
        MULTI_SPACE_RE.replace_all(name.trim(), " ").into_owned()
    } else {
        name
    }
}
