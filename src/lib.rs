//! Debounced search input for egui
//!
//! A single widget: a search field with a loading indicator and an optional
//! clear button. Text updates are shown immediately; the owner's callback is
//! invoked only once the input is long enough and, when a debounce period is
//! configured, once typing has paused for that long.
//!
//! # Example
//!
//! ```no_run
//! use search_bar::{SearchBar, SearchBarOptions};
//!
//! fn build() -> search_bar::Result<SearchBar> {
//!     SearchBar::builder(SearchBarOptions::default().debounce_time_ms(300))
//!         .on_change(|query| println!("search for {}", query))
//!         .mount()
//! }
//! ```

pub mod error;
pub mod search;
pub mod settings;
pub mod ui;

pub use error::{Result, SearchBarError};
pub use search::{InputState, SearchBarOptions, SearchValue, ZeroDelayPolicy};
pub use ui::widgets::{SearchBar, SearchBarResponse, SearchIcon};
