//! # gms-io: Forecast Loading & Schedule Export
//!
//! Input/output for the maintenance scheduler: forecast series come in from
//! a directory of per-series CSV files or from the plant's Excel workbook,
//! and solved schedules go out as pretty-printed JSON reports.
//!
//! ## Supported Inputs
//!
//! | Shape | Contents |
//! |-------|----------|
//! | CSV directory | `production.csv`, `price.csv`, `coeff.csv`, each with a `period,<value>` header |
//! | Excel workbook (`.xlsx`, `.xlsm`) | the plant workbook's three forecast sheets |
//!
//! Every input path funnels into [`gms_core::ForecastSet`], so a loaded
//! forecast is already validated: gap-free day numbering, aligned series
//! lengths, finite values.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! let forecast = gms_io::load_forecasts(Path::new("Data.xlsx"))?;
//! println!("horizon: {} days", forecast.horizon().n_days());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod import;
pub mod report;

pub use import::{load_csv_dir, load_forecasts, load_workbook, InputFormat};
pub use report::{write_report, PolicyRun, ScheduleReport, WindowReport};
