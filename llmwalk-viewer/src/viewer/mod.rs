//! Interactive terminal walkthrough
//!
//! Module structure mirrors the split between state and presentation:
//! - `app`: application state on top of the walkthrough controller
//! - `panel`: the Panel trait and the events panels emit
//! - `input`: the input-line panel
//! - `stagepanel`: the stage strip and stage body panel
//! - `preview`: pure builders for the per-stage illustrations
//! - `ui`: overall layout and rendering
//! - `run`: terminal setup and the event loop

pub mod app;
pub mod input;
pub mod panel;
pub mod preview;
pub mod run;
pub mod stagepanel;
pub mod ui;

#[cfg(test)]
mod tests;
