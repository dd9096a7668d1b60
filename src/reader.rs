//! Lecture du classeur source
//!
//! calamine (xlsx/xls/ods) → matrice de `CellValue`, coordonnées absolues
//! depuis A1 : la ligne 0 est toujours la première ligne de la feuille.

use crate::error::{FichesError, Result};
use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use fiches_common::{CellValue, Row};
use std::io::Cursor;
use std::path::Path;

/// Lit le fichier en mémoire puis extrait l'onglet demandé
pub fn read_rows(path: &Path, sheet_name: &str) -> Result<Vec<Row>> {
    if !path.exists() {
        return Err(FichesError::FileNotFound(path.display().to_string()));
    }

    let bytes = std::fs::read(path)?;
    log::debug!("{} : {} octets lus", path.display(), bytes.len());
    read_rows_from_bytes(bytes, sheet_name)
}

/// Extrait l'onglet `sheet_name` d'un classeur en mémoire
pub fn read_rows_from_bytes(bytes: Vec<u8>, sheet_name: &str) -> Result<Vec<Row>> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;

    let sheet_names = workbook.sheet_names();
    if !sheet_names.iter().any(|name| name == sheet_name) {
        return Err(FichesError::MissingSheet {
            sheet: sheet_name.to_string(),
            available: sheet_names.join(", "),
        });
    }

    let range = workbook.worksheet_range(sheet_name)?;
    Ok(range_to_rows(&range))
}

/// Convertit une plage en lignes, complétées jusqu'à A1
pub fn range_to_rows(range: &Range<Data>) -> Vec<Row> {
    let (start_row, start_col) = match range.start() {
        Some((row, col)) => (row as usize, col as usize),
        None => return Vec::new(),
    };

    let mut rows: Vec<Row> = vec![Vec::new(); start_row];
    for data_row in range.rows() {
        let mut row = vec![CellValue::Empty; start_col];
        row.extend(data_row.iter().map(to_cell_value));
        rows.push(row);
    }
    rows
}

/// Conversion permissive : les cellules en erreur deviennent vides
pub fn to_cell_value(data: &Data) -> CellValue {
    match data {
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => {
            log::debug!("cellule en erreur ignorée : {:?}", e);
            CellValue::Empty
        }
        Data::Empty => CellValue::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_cell_value() {
        assert_eq!(to_cell_value(&Data::String("ST-1".into())), CellValue::from("ST-1"));
        assert_eq!(to_cell_value(&Data::Int(42)), CellValue::Number(42.0));
        assert_eq!(to_cell_value(&Data::Float(1.5)), CellValue::Number(1.5));
        assert_eq!(to_cell_value(&Data::Bool(true)), CellValue::Bool(true));
        assert_eq!(to_cell_value(&Data::Empty), CellValue::Empty);
        assert_eq!(
            to_cell_value(&Data::Error(calamine::CellErrorType::Div0)),
            CellValue::Empty
        );
    }

    #[test]
    fn test_range_to_rows_pads_to_a1() {
        // plage B2:C3
        let mut range: Range<Data> = Range::new((1, 1), (2, 2));
        range.set_value((1, 1), Data::String("x".into()));
        range.set_value((2, 2), Data::Int(7));

        let rows = range_to_rows(&range);
        assert_eq!(rows.len(), 3);
        assert!(rows[0].is_empty());
        assert_eq!(rows[1], vec![CellValue::Empty, CellValue::from("x"), CellValue::Empty]);
        assert_eq!(rows[2][2], CellValue::Number(7.0));
    }

    #[test]
    fn test_range_to_rows_empty() {
        let range: Range<Data> = Range::empty();
        assert!(range_to_rows(&range).is_empty());
    }

    #[test]
    fn test_read_rows_missing_file() {
        let err = read_rows(Path::new("/nonexistent/export.xlsx"), "Feuil1").unwrap_err();
        assert!(matches!(err, FichesError::FileNotFound(_)));
    }

    #[test]
    fn test_read_rows_from_invalid_bytes() {
        let err = read_rows_from_bytes(b"pas un classeur".to_vec(), "Feuil1").unwrap_err();
        assert!(matches!(err, FichesError::Spreadsheet(_)));
    }
}
