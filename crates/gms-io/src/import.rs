//! Forecast input loading.
//!
//! Two input shapes are accepted:
//! - a directory holding one CSV file per series (`production.csv`,
//!   `price.csv`, `coeff.csv`), each with a `period,<value>` header;
//! - an Excel workbook holding the plant's three forecast sheets.
//!
//! Both shapes funnel into the same per-series assembly step, which checks
//! that the period numbers form the gap-free range `1..=N` before handing
//! the values to [`DailySeries`].

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use calamine::{open_workbook, Data, Reader, Xlsx};
use gms_core::{DailySeries, ForecastSet};
use serde::Deserialize;

// Workbook sheet names as they appear in the plant's file,
// misspelling included.
pub const PRODUCTION_SHEET: &str = "forcast production";
pub const PRICE_SHEET: &str = "price of electricity";
pub const COEFF_SHEET: &str = "maintenance coefficient";

/// File names expected inside a CSV series directory.
pub const PRODUCTION_CSV: &str = "production.csv";
pub const PRICE_CSV: &str = "price.csv";
pub const COEFF_CSV: &str = "coeff.csv";

/// Supported input shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Directory holding `production.csv`, `price.csv` and `coeff.csv`.
    CsvDir,
    /// Excel workbook holding the three forecast sheets.
    Workbook,
}

impl InputFormat {
    /// Detect the input shape from a path.
    pub fn detect(path: &Path) -> Option<InputFormat> {
        if path.is_dir() {
            return Some(InputFormat::CsvDir);
        }
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "xlsx" | "xlsm" => Some(InputFormat::Workbook),
            _ => None,
        }
    }

    /// Human-readable shape name.
    pub fn friendly_name(&self) -> &'static str {
        match self {
            InputFormat::CsvDir => "CSV series directory",
            InputFormat::Workbook => "Excel workbook",
        }
    }
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.friendly_name())
    }
}

/// Loads the three forecast series from `path`, dispatching on its shape.
pub fn load_forecasts(path: &Path) -> Result<ForecastSet> {
    match InputFormat::detect(path) {
        Some(InputFormat::CsvDir) => load_csv_dir(path),
        Some(InputFormat::Workbook) => load_workbook(path),
        None => Err(anyhow!(
            "unsupported input '{}'; pass a directory of per-series CSV files or an .xlsx workbook",
            path.display()
        )),
    }
}

#[derive(Debug, Deserialize)]
struct ProductionRow {
    period: usize,
    forecastp: f64,
}

#[derive(Debug, Deserialize)]
struct PriceRow {
    period: usize,
    price: f64,
}

#[derive(Debug, Deserialize)]
struct CoeffRow {
    period: usize,
    coeff: f64,
}

/// Loads the CSV trio from a series directory.
pub fn load_csv_dir(dir: &Path) -> Result<ForecastSet> {
    let production = load_production_csv(&dir.join(PRODUCTION_CSV))?;
    let price = load_price_csv(&dir.join(PRICE_CSV))?;
    let coeff = load_coeff_csv(&dir.join(COEFF_CSV))?;
    Ok(ForecastSet::new(production, price, coeff)?)
}

fn load_production_csv(path: &Path) -> Result<DailySeries> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening production CSV '{}'", path.display()))?;
    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let record: ProductionRow = result.context("parsing production record")?;
        rows.push((record.period, record.forecastp));
    }
    series_from_periods("production", rows)
}

fn load_price_csv(path: &Path) -> Result<DailySeries> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening price CSV '{}'", path.display()))?;
    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let record: PriceRow = result.context("parsing price record")?;
        rows.push((record.period, record.price));
    }
    series_from_periods("price", rows)
}

fn load_coeff_csv(path: &Path) -> Result<DailySeries> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening coefficient CSV '{}'", path.display()))?;
    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let record: CoeffRow = result.context("parsing coefficient record")?;
        rows.push((record.period, record.coeff));
    }
    series_from_periods("coeff", rows)
}

/// Loads the three forecast sheets from a plant workbook.
pub fn load_workbook(path: &Path) -> Result<ForecastSet> {
    let mut workbook: Xlsx<_> = open_workbook(path)
        .with_context(|| format!("opening workbook '{}'", path.display()))?;
    let production = load_sheet(&mut workbook, PRODUCTION_SHEET, "forecastp", "production")?;
    let price = load_sheet(&mut workbook, PRICE_SHEET, "price", "price")?;
    let coeff = load_sheet(&mut workbook, COEFF_SHEET, "coeff", "coeff")?;
    Ok(ForecastSet::new(production, price, coeff)?)
}

fn load_sheet(
    workbook: &mut Xlsx<BufReader<File>>,
    sheet: &str,
    value_column: &str,
    series_name: &str,
) -> Result<DailySeries> {
    let range = workbook
        .worksheet_range(sheet)
        .with_context(|| format!("reading sheet '{sheet}'"))?;

    let mut period_col = None;
    let mut value_col = None;
    let mut pairs = Vec::new();

    for (row_idx, row) in range.rows().enumerate() {
        let (Some(p_col), Some(v_col)) = (period_col, value_col) else {
            // Still looking for the header row.
            for (col_idx, cell) in row.iter().enumerate() {
                if let Data::String(s) = cell {
                    let s = s.trim();
                    if s.eq_ignore_ascii_case("period") {
                        period_col = Some(col_idx);
                    } else if s.eq_ignore_ascii_case(value_column) {
                        value_col = Some(col_idx);
                    }
                }
            }
            continue;
        };

        if row.iter().all(|cell| matches!(cell, Data::Empty)) {
            continue;
        }
        let data_row = row_idx + 1;
        let period = numeric_cell(row.get(p_col))
            .with_context(|| format!("sheet '{sheet}' row {data_row}: 'period' must be a number"))?;
        if period.fract() != 0.0 || period < 0.0 {
            bail!("sheet '{sheet}' row {data_row}: period {period} is not a whole day number");
        }
        let value = numeric_cell(row.get(v_col)).with_context(|| {
            format!("sheet '{sheet}' row {data_row}: '{value_column}' must be a number")
        })?;
        pairs.push((period as usize, value));
    }

    if period_col.is_none() || value_col.is_none() {
        bail!("sheet '{sheet}' has no header row naming 'period' and '{value_column}' columns");
    }
    series_from_periods(series_name, pairs)
}

fn numeric_cell(cell: Option<&Data>) -> Result<f64> {
    match cell {
        Some(Data::Int(v)) => Ok(*v as f64),
        Some(Data::Float(v)) => Ok(*v),
        other => bail!("expected a numeric cell, found {other:?}"),
    }
}

/// Orders `(period, value)` rows into a day-indexed series.
///
/// The periods must form the gap-free range `1..=N`, in any order.
fn series_from_periods(name: &str, rows: Vec<(usize, f64)>) -> Result<DailySeries> {
    let n = rows.len();
    if n == 0 {
        bail!("series '{name}' has no data rows");
    }
    let mut values: Vec<Option<f64>> = vec![None; n];
    for (period, value) in rows {
        if !(1..=n).contains(&period) {
            bail!(
                "series '{name}' has period {period} outside 1..={n}; day numbering must be gap-free"
            );
        }
        if values[period - 1].is_some() {
            bail!("series '{name}' lists period {period} twice");
        }
        values[period - 1] = Some(value);
    }
    let values = values
        .into_iter()
        .map(|slot| slot.expect("n distinct in-range periods fill every slot"))
        .collect();
    Ok(DailySeries::new(name, values)?)
}
