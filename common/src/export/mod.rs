//! Modules d'export partagés par la CLI et les tests.

#[cfg(feature = "excel")]
pub mod excel_core;
