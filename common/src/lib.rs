//! # netstr common
//!
//! Shared building blocks for the string walkthrough:
//!
//! * **[`samples`]**: The hard-coded networking sample values.
//! * **[`text`]**: The text primitives each walkthrough step demonstrates.
//! * **[`step`]**: The catalogue of steps and their fixed run order.
//! * **[`config`]**: Run options built from the command line.
//! * **[`error`]**: The failures a step can report.

pub mod config;
pub mod error;
pub mod samples;
pub mod step;
pub mod text;
