//! Gauss Export - Bell-curve distribution calculator with spreadsheet export
//!
//! This crate computes a discretized Gaussian distribution over the points
//! `1..=count`, allocates a total quantity across them, renders the curve as a
//! chart, and exports the table, chart and an optional note to `.xlsx`.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
