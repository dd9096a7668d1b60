//! Génération Excel (bibliothèque commune)
//!
//! - fiche technique : un classeur par fiche, rendu depuis le modèle
//! - index : liste de toutes les fiches générées pour un chantier

use crate::error::Result;
use crate::template::RenderedFiche;
use crate::types::{ProjectContext, SheetPlan};
use rust_xlsxwriter::*;

const LABEL_COL_WIDTH: f64 = 22.0;
const VALUE_COL_WIDTH: f64 = 70.0;

fn title_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_size(16.0)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
}

fn label_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_size(10.0)
        .set_font_color(Color::RGB(0x555555))
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xAAAAAA))
}

fn value_format() -> Format {
    Format::new()
        .set_font_size(11.0)
        .set_align(FormatAlign::Left)
        .set_align(FormatAlign::VerticalCenter)
        .set_text_wrap()
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC))
}

/// Classeur d'une fiche technique en mémoire
pub fn generate_fiche_buffer(fiche: &RenderedFiche) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let label_format = label_format();
    let value_format = value_format();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Fiche")?;
    worksheet.set_column_width(0, LABEL_COL_WIDTH)?;
    worksheet.set_column_width(1, VALUE_COL_WIDTH)?;

    worksheet.set_row_height(0, 30.0)?;
    worksheet.merge_range(0, 0, 0, 1, &fiche.title, &title_format())?;

    // A : libellé, B : valeur, à partir de la ligne 3
    for (i, (label, value)) in fiche.fields.iter().enumerate() {
        let row = 2 + i as u32;
        worksheet.write_string_with_format(row, 0, label, &label_format)?;
        worksheet.write_string_with_format(row, 1, value, &value_format)?;
    }

    Ok(workbook.save_to_buffer()?)
}

/// Classeur d'index des fiches d'un chantier
///
/// Chaque entrée associe une fiche au dossier réellement créé.
pub fn generate_index_buffer(project: &ProjectContext, entries: &[(&SheetPlan, &str)]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let label_format = label_format();
    let value_format = value_format();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Index")?;

    worksheet.write_string_with_format(0, 0, "Chantier", &label_format)?;
    worksheet.write_string_with_format(0, 1, &project.project_name, &value_format)?;
    worksheet.write_string_with_format(1, 0, "N° chantier", &label_format)?;
    worksheet.write_string_with_format(1, 1, &project.project_number, &value_format)?;

    let headers = ["Référence", "Désignation", "Dossier", "Référence conforme", "Descriptif"];
    let widths = [16.0, 50.0, 45.0, 24.0, 50.0];
    for (col, (header, width)) in headers.iter().zip(widths).enumerate() {
        worksheet.set_column_width(col as u16, width)?;
        worksheet.write_string_with_format(3, col as u16, *header, &label_format)?;
    }

    for (i, (plan, folder)) in entries.iter().enumerate() {
        let row = 4 + i as u32;
        let cells = [
            plan.item.reference.as_str(),
            plan.item.designation.as_str(),
            *folder,
            plan.matched_reference.as_str(),
            plan.matched_description.as_str(),
        ];
        for (col, text) in cells.iter().enumerate() {
            worksheet.write_string_with_format(row, col as u16, *text, &value_format)?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}
