//! Test utilities for LOS record parser testing
//!
//! This module provides fixture CSV content and row builders shared across
//! the parser test modules.

use super::RawRow;

// Test modules
mod csv_reader_tests;

/// Build a row from `(header, cell)` pairs
pub fn row(pairs: &[(&str, &str)]) -> RawRow {
    RawRow::from_pairs(pairs.iter().copied())
}

/// A small export in the shape published by the Hawaii Tourism Authority
pub fn create_test_los_csv() -> String {
    r#"Group,Indicator,Units,1999,2000,2001,Notes
All visitors by air,LOS on Oahu,days,7.1,7.3,7.0,
All visitors by air,LOS on Maui,days,8.9,,9.4,revised
All visitors by air,LOS on Kauai,,8.1,8.0,n/a,
Domestic visitors,LOS on Oahu,days,6.8,6.9,7.2,
,LOS on Lanai,days,4.0,4.1,4.2,
Data is updated monthly,,,,,,
"Source of Data: DBEDT, Hawaii Tourism Authority",,,,,,"#
        .to_string()
}
