//! Session de travail
//!
//! Fichier source, chantier analysé et modèle de fiche courants. Chaque
//! chargement remplace l'état précédent en entier.

use crate::error::{FichesError, Result};
use crate::reader;
use fiches_common::{
    analyze_rows, build_plan, FicheTemplate, FilterProfile, ProjectContext, ReferenceTable,
    SanitizeOptions, SheetPlan,
};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct Session {
    source: Option<PathBuf>,
    project: Option<ProjectContext>,
    template: FicheTemplate,
}

impl Session {
    /// Enregistre le fichier source ; le chantier précédent est abandonné
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        if !path.is_file() {
            return Err(FichesError::FileNotFound(path.display().to_string()));
        }
        self.source = Some(path.to_path_buf());
        self.project = None;
        Ok(())
    }

    /// Lit l'onglet du fichier source et remplace le chantier courant
    ///
    /// En cas d'erreur (onglet absent, aucune fiche) la session ne garde
    /// aucun chantier.
    pub fn analyze(&mut self, sheet_name: &str, profile: FilterProfile) -> Result<&ProjectContext> {
        let source = self.source.as_deref().ok_or(FichesError::NoSourceFile)?;
        self.project = None;

        let rows = reader::read_rows(source, sheet_name)?;
        log::debug!("{} lignes lues dans l'onglet \"{}\"", rows.len(), sheet_name);

        let project = analyze_rows(&rows, profile)?;
        log::info!(
            "chantier \"{}\" ({}) : {} fiches",
            project.project_name,
            project.project_number,
            project.items.len()
        );
        Ok(&*self.project.insert(project))
    }

    /// Remplace le modèle de fiche
    pub fn load_template(&mut self, path: &Path) -> Result<()> {
        self.template = FicheTemplate::from_file(path)?;
        log::debug!("modèle chargé depuis {}", path.display());
        Ok(())
    }

    /// Plan de génération du chantier courant
    pub fn plan(&self, table: &ReferenceTable, options: &SanitizeOptions) -> Result<Vec<SheetPlan>> {
        let project = self.project.as_ref().ok_or(FichesError::NoProject)?;
        Ok(build_plan(project, table, options))
    }

    /// Oublie le fichier source et le chantier ; le modèle est conservé
    pub fn reset(&mut self) {
        self.source = None;
        self.project = None;
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn project(&self) -> Option<&ProjectContext> {
        self.project.as_ref()
    }

    pub fn template(&self) -> &FicheTemplate {
        &self.template
    }
}
