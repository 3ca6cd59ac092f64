//! Launch records dashboard: load a launch CSV once, serve a page with a site
//! dropdown, a payload slider and two charts that follow the selection.

pub mod app;
pub mod chart;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod state;
pub mod ui;
