//! Génération de l'arborescence des fiches
//!
//! <sortie>/<racine>/
//!   Index des fiches.xlsx
//!   <dossier fiche>/
//!     old/
//!     master/<dossier fiche>.xlsx

use crate::error::{FichesError, Result};
use fiches_common::export::excel_core::{generate_fiche_buffer, generate_index_buffer};
use fiches_common::{FicheTemplate, FicheValues, ProjectContext, SheetPlan};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const INDEX_FILE_NAME: &str = "Index des fiches.xlsx";
pub const OLD_FOLDER: &str = "old";
pub const MASTER_FOLDER: &str = "master";

const INVALID_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Résumé de l'arborescence produite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveReport {
    pub root: PathBuf,
    /// Dossiers de fiche, dans l'ordre du plan
    pub folders: Vec<String>,
    /// Dossiers créés ou réutilisés par cette génération
    pub dirs_written: usize,
    /// Fiches et index écrits par cette génération
    pub files_written: usize,
    /// Contenu total de la racine, restes des générations précédentes compris
    pub total_dirs: usize,
    pub total_files: usize,
}

pub struct ArchiveBuilder {
    root_folder: String,
    generated_on: String,
    show_progress: bool,
}

impl ArchiveBuilder {
    pub fn new(root_folder: &str) -> Self {
        Self {
            root_folder: root_folder.to_string(),
            generated_on: chrono::Local::now().format("%d/%m/%Y").to_string(),
            show_progress: false,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn with_date(mut self, generated_on: &str) -> Self {
        self.generated_on = generated_on.to_string();
        self
    }

    /// Crée un dossier par fiche avec old/, master/ et la fiche générée
    pub fn build(
        &self,
        output_dir: &Path,
        project: &ProjectContext,
        plans: &[SheetPlan],
        template: &FicheTemplate,
    ) -> Result<ArchiveReport> {
        let root = output_dir.join(safe_file_name(&self.root_folder, "fiches"));
        std::fs::create_dir_all(&root)?;

        let progress = if self.show_progress {
            let pb = ProgressBar::new(plans.len() as u64);
            if let Ok(style) = ProgressStyle::with_template("{bar:30} {pos}/{len} {msg}") {
                pb.set_style(style);
            }
            pb
        } else {
            ProgressBar::hidden()
        };

        let names = unique_folder_names(plans);
        let mut dirs_written = 0;
        let mut files_written = 0;
        for (plan, name) in plans.iter().zip(&names) {
            progress.set_message(name.clone());

            let folder = root.join(name);
            std::fs::create_dir_all(folder.join(OLD_FOLDER))?;
            let master = folder.join(MASTER_FOLDER);
            std::fs::create_dir_all(&master)?;
            dirs_written += 3;

            let fiche = template.render(&FicheValues {
                project_name: project.project_name.clone(),
                project_number: project.project_number.clone(),
                sheet_title: name.clone(),
                reference: plan.matched_reference.clone(),
                description: plan.matched_description.clone(),
                generated_on: self.generated_on.clone(),
            });
            let buffer = generate_fiche_buffer(&fiche)?;
            std::fs::write(master.join(format!("{}.xlsx", name)), buffer)?;
            files_written += 1;

            log::debug!("fiche générée : {}", folder.display());
            progress.inc(1);
        }
        progress.finish_and_clear();

        let entries: Vec<(&SheetPlan, &str)> = plans
            .iter()
            .zip(names.iter().map(String::as_str))
            .collect();
        let index = generate_index_buffer(project, &entries)?;
        std::fs::write(root.join(INDEX_FILE_NAME), index)?;
        files_written += 1;

        let (total_dirs, total_files) = count_tree(&root)?;
        Ok(ArchiveReport {
            root,
            folders: names,
            dirs_written,
            files_written,
            total_dirs,
            total_files,
        })
    }
}

/// Nom utilisable comme nom de fichier ; `fallback` s'il ne reste rien
pub fn safe_file_name(name: &str, fallback: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| if INVALID_CHARS.contains(&c) || c.is_control() { '_' } else { c })
        .collect();
    let trimmed = replaced.trim().trim_end_matches('.').trim_end();

    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Noms de dossiers sans doublon : "ST-1 X", "ST-1 X (2)", ...
///
/// Comparaison insensible à la casse ; un suffixe déjà pris par un autre
/// dossier est sauté.
fn unique_folder_names(plans: &[SheetPlan]) -> Vec<String> {
    let mut used: HashSet<String> = HashSet::new();
    plans
        .iter()
        .map(|plan| {
            let base = safe_file_name(&plan.folder_name, &safe_file_name(&plan.item.reference, "fiche"));
            let mut name = base.clone();
            let mut n = 1;
            while !used.insert(name.to_lowercase()) {
                n += 1;
                name = format!("{} ({})", base, n);
            }
            name
        })
        .collect()
}

/// Dossiers et fichiers sous `root` (racine exclue)
fn count_tree(root: &Path) -> Result<(usize, usize)> {
    let mut dirs = 0;
    let mut files = 0;
    for entry in WalkDir::new(root).min_depth(1) {
        let entry = entry.map_err(|e| FichesError::Archive(e.to_string()))?;
        if entry.file_type().is_dir() {
            dirs += 1;
        } else {
            files += 1;
        }
    }
    Ok((dirs, files))
}
