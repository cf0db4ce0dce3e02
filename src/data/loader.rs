use std::path::Path;

use crate::data::input::SalesInput;
use crate::error::{DataError, Result};

/// Load a CSV or Excel sheet of sales figures.
///
/// The first column holds labels and the second the amounts. A sheet with a
/// single column is read as plain values. A leading row whose value cell is
/// not a number is taken as the header and skipped.
pub fn load_file(path: &Path) -> Result<SalesInput> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    let rows = match ext.as_str() {
        "csv" => read_csv_rows(path)?,
        "xls" | "xlsx" => read_excel_rows(path)?,
        _ => return Err(DataError::UnsupportedFormat(ext)),
    };

    let input = rows_to_input(rows).ok_or_else(|| DataError::NoData(path.to_path_buf()))?;
    tracing::info!("Loaded {} sales rows from {:?}", input.len(), path);
    Ok(input)
}

fn read_csv_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    let content = std::fs::read(path).map_err(|source| DataError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    // Fall back to latin1 for spreadsheets exported with a legacy encoding.
    let text = String::from_utf8(content.clone())
        .unwrap_or_else(|_| content.iter().map(|&b| b as char).collect());

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        rows.push(record?.iter().map(|s| s.trim().to_string()).collect());
    }
    Ok(rows)
}

fn read_excel_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    use calamine::{open_workbook_auto, Data, Reader};

    let mut workbook = open_workbook_auto(path)?;
    let Some(sheet_name) = workbook.sheet_names().first().cloned() else {
        return Err(DataError::NoData(path.to_path_buf()));
    };
    let range = workbook.worksheet_range(&sheet_name)?;

    Ok(range
        .rows()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    Data::Empty => String::new(),
                    Data::String(s) => s.trim().to_string(),
                    Data::Float(f) => f.to_string(),
                    Data::Int(i) => i.to_string(),
                    Data::Bool(b) => b.to_string(),
                    Data::DateTime(dt) => dt.to_string(),
                    Data::DateTimeIso(s) => s.clone(),
                    Data::DurationIso(s) => s.clone(),
                    Data::Error(e) => format!("{e:?}"),
                })
                .collect()
        })
        .collect())
}

/// Turn raw rows into labeled pairs, or plain values for a single column.
/// Returns `None` when no data rows remain.
fn rows_to_input(rows: Vec<Vec<String>>) -> Option<SalesInput> {
    let rows: Vec<Vec<String>> = rows
        .into_iter()
        .filter(|row| row.iter().any(|cell| !cell.is_empty()))
        .collect();
    let first = rows.first()?;
    let value_col = if first.len() >= 2 { 1 } else { 0 };

    let has_header = first
        .get(value_col)
        .is_some_and(|cell| parse_amount(cell).is_nan());
    let data_rows = &rows[usize::from(has_header)..];
    if data_rows.is_empty() {
        return None;
    }

    if value_col == 0 {
        return Some(SalesInput::Values(
            data_rows.iter().map(|row| parse_amount(&row[0])).collect(),
        ));
    }

    let mut pairs: Vec<(String, f64)> = Vec::with_capacity(data_rows.len());
    for (i, row) in data_rows.iter().enumerate() {
        match row.get(value_col) {
            Some(cell) => pairs.push((row[0].clone(), parse_amount(cell))),
            None => tracing::warn!("Skipping row {} without a value column", i + 1),
        }
    }
    Some(SalesInput::Labeled(pairs))
}

/// Parse an amount, tolerating a leading sign, a currency sign and `,`
/// thousands separators (`-$1,200.50`). Unparseable cells become NaN and are
/// rejected later by the validator.
fn parse_amount(cell: &str) -> f64 {
    let trimmed = cell.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, trimmed),
    };
    let (has_currency, unsigned) = match unsigned.strip_prefix('$') {
        Some(rest) => (true, rest),
        None => (false, unsigned),
    };
    // Only one sign, and only in front of the currency symbol.
    if (negative || has_currency) && unsigned.starts_with(['-', '+']) {
        return f64::NAN;
    }
    let cleaned: String = unsigned.chars().filter(|c| *c != ',').collect();

    match cleaned.parse::<f64>() {
        Ok(v) if negative => -v,
        Ok(v) => v,
        Err(_) => f64::NAN,
    }
}
