//! UI layer for the calculator window: app shell, widgets, and theme.

pub mod app;
pub mod theme;
pub mod widgets;

pub use app::{CalculatorApp, StartupConfig};
