//! # netstr core
//!
//! Runs the string walkthrough over a [`Samples`](netstr_common::samples::Samples)
//! set and collects what each step produced into a [`report::Report`].
//!
//! Nothing here prints. Rendering is left to the caller.

pub mod report;
pub mod runner;
