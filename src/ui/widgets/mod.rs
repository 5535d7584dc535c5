//! Reusable widgets

pub mod search_bar;

pub use search_bar::{OnChange, SearchBar, SearchBarBuilder, SearchBarResponse, SearchIcon};
