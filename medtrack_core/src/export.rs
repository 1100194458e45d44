//! Export formatters: the paginated PDF report and the CSV dump.
//!
//! Both exports are pull-based snapshots with fixed file names; every
//! invocation overwrites the previous file. Writes go through a temp
//! file in the target directory followed by a rename, so an interrupted
//! export never leaves a truncated snapshot behind.

use crate::{Error, Medication, Result};
use printpdf::{BuiltinFont, Mm, PdfDocument, Pt};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Fixed CSV snapshot file name
pub const CSV_FILE_NAME: &str = "medications.csv";

/// Fixed PDF snapshot file name
pub const PDF_FILE_NAME: &str = "medications.pdf";

// US-letter page, coordinates in points from the bottom-left corner.
const PAGE_WIDTH_PT: f32 = 612.0;
const PAGE_HEIGHT_PT: f32 = 792.0;
const MARGIN_X_PT: f32 = 100.0;
const TITLE_Y_PT: f32 = 750.0;
const HEADER_Y_PT: f32 = 730.0;
const FIRST_ROW_Y_PT: f32 = 710.0;
const ROW_STEP_PT: f32 = 20.0;
const FONT_SIZE: f32 = 12.0;

/// One row of the tabular report view
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportRow {
    pub name: String,
    pub dosage: String,
    pub notes: String,
}

/// Project the registry onto the three report columns, in registry order
pub fn report_rows(medications: &[Medication]) -> Vec<ReportRow> {
    medications
        .iter()
        .map(|med| ReportRow {
            name: med.name.clone(),
            dosage: med.dosage.clone(),
            notes: med.notes.clone(),
        })
        .collect()
}

/// Write the PDF report to `path`
///
/// Single-page layout: a title line, a column-header line, then one line
/// per medication at descending fixed offsets. There is no pagination;
/// rows past the bottom of the page are clipped, and we log a warning
/// when that happens instead of reproducing it silently.
pub fn write_pdf(path: &Path, medications: &[Medication]) -> Result<()> {
    let (doc, page, layer) = PdfDocument::new(
        "Medication List",
        Mm::from(Pt(PAGE_WIDTH_PT)),
        Mm::from(Pt(PAGE_HEIGHT_PT)),
        "medications",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| Error::Pdf(e.to_string()))?;
    let layer = doc.get_page(page).get_layer(layer);

    let at = |y: f32| (Mm::from(Pt(MARGIN_X_PT)), Mm::from(Pt(y)));

    let (x, y) = at(TITLE_Y_PT);
    layer.use_text("Medication List", FONT_SIZE, x, y, &font);
    let (x, y) = at(HEADER_Y_PT);
    layer.use_text(
        "Name              Dosage              Notes",
        FONT_SIZE,
        x,
        y,
        &font,
    );

    let rows = report_rows(medications);
    let fits = (FIRST_ROW_Y_PT / ROW_STEP_PT) as usize + 1;
    if rows.len() > fits {
        tracing::warn!(
            "PDF report holds {} rows but {} medications are registered; overflow is clipped",
            fits,
            rows.len()
        );
    }

    let mut row_y = FIRST_ROW_Y_PT;
    for row in &rows {
        let line = format!("{}          {}          {}", row.name, row.dosage, row.notes);
        let (x, y) = at(row_y);
        layer.use_text(line, FONT_SIZE, x, y, &font);
        row_y -= ROW_STEP_PT;
    }

    let bytes = doc
        .save_to_bytes()
        .map_err(|e| Error::Pdf(e.to_string()))?;
    write_atomically(path, &bytes)?;

    tracing::info!("Exported {} medications to {:?}", medications.len(), path);
    Ok(())
}

/// A row in the CSV output; the full record set, not just the report view
#[derive(Debug, serde::Serialize)]
struct CsvRow {
    name: String,
    dosage: String,
    stock: u32,
    intake_times: String,
    last_taken: Option<String>,
    notes: String,
    category: String,
    image: Option<String>,
}

impl From<&Medication> for CsvRow {
    fn from(med: &Medication) -> Self {
        CsvRow {
            name: med.name.clone(),
            dosage: med.dosage.clone(),
            stock: med.stock,
            intake_times: med
                .intake_times
                .iter()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join("/"),
            last_taken: med.last_taken.map(|t| t.to_rfc3339()),
            notes: med.notes.clone(),
            category: med.category.to_string(),
            image: med.image.as_ref().map(|p| p.display().to_string()),
        }
    }
}

/// Write the CSV snapshot to `path`
///
/// Header row of field names, then one row per medication in registry
/// order. List-valued intake times are joined with "/".
pub fn write_csv(path: &Path, medications: &[Medication]) -> Result<()> {
    let temp = NamedTempFile::new_in(target_dir(path))?;

    {
        let mut writer = csv::Writer::from_writer(temp.as_file());
        for med in medications {
            writer.serialize(CsvRow::from(med))?;
        }
        writer.flush()?;
    }

    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| Error::Io(e.error))?;

    tracing::info!("Exported {} medications to {:?}", medications.len(), path);
    Ok(())
}

/// Write `bytes` to `path` via a temp file and rename
fn write_atomically(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut temp = NamedTempFile::new_in(target_dir(path))?;
    temp.write_all(bytes)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| Error::Io(e.error))?;
    Ok(())
}

/// Directory the snapshot lands in; a bare file name means the cwd
fn target_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
