//! Sorties JSON des commandes extract / plan

use crate::error::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Chemin du fichier JSON : un dossier reçoit `<nom>.json`
fn output_path_for_json(output: &Path, stem: &str) -> PathBuf {
    if output.is_dir() {
        output.join(format!("{}.json", stem))
    } else {
        output.to_path_buf()
    }
}

/// Écrit `value` en JSON indenté, sur la sortie standard ou dans un fichier
///
/// Retourne le chemin écrit, `None` pour la sortie standard.
pub fn write_json<T: Serialize>(value: &T, output: Option<&Path>, stem: &str) -> Result<Option<PathBuf>> {
    let json = serde_json::to_string_pretty(value)?;

    match output {
        Some(output) => {
            let path = output_path_for_json(output, stem);
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, json)?;
            Ok(Some(path))
        }
        None => {
            println!("{}", json);
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_json_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out").join("plan.json");

        let written = write_json(&vec!["ST-1"], Some(&path), "plan").unwrap();
        assert_eq!(written, Some(path.clone()));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[\n  \"ST-1\"\n]");
    }

    #[test]
    fn test_write_json_to_directory() {
        let dir = tempdir().unwrap();

        let written = write_json(&vec![1, 2], Some(dir.path()), "chantier").unwrap();
        assert_eq!(written, Some(dir.path().join("chantier.json")));
    }
}
