// src/core/mod.rs
//! Core services shared by the catalog and the web layer

pub mod fs_ops;
pub mod recency;

pub use fs_ops::{FileFetchError, FsOps};
pub use recency::{compare_year_ranges, sort_by_date, sort_by_recency, Dated, YearRange};
