// src/ui/components/mod.rs
//! UI components library

pub mod line_chart;

pub use line_chart::LineChart;
