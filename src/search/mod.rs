//! Search input model: options, state and notification strategy

pub mod notifier;
pub mod options;
pub mod state;
pub mod value;

pub use notifier::{Notifier, NotifyStrategy};
pub use options::{NormalizedOptions, SearchBarOptions, ZeroDelayPolicy};
pub use state::InputState;
pub use value::SearchValue;
