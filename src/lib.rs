pub mod config;
pub mod cursor;
pub mod matcher;
pub mod ui;
pub mod widget;

pub use cursor::{CursorBuffer, InputKind};
pub use matcher::best_completion;
pub use widget::HintedInput;
