//! Text rendering and console actions for the administrative console.

pub mod commands;
pub mod toast;
pub mod views;
