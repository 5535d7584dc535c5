//! egui presentation layer

pub mod theme;
pub mod widgets;
