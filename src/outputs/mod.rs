//! Output generation.
//!
//! One output format: a flat CSV table of every record collected across the
//! date windows, written in a single shot after all fetches succeed.

pub mod csv;
