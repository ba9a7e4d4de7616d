//! UI Components

mod ai_panel;
mod color_swatches;
mod confirm_dialog;
mod history_modal;
mod location_selector;
mod login_screen;
mod shopping_list_view;

pub use ai_panel::*;
pub use color_swatches::*;
pub use confirm_dialog::*;
pub use history_modal::*;
pub use location_selector::*;
pub use login_screen::*;
pub use shopping_list_view::*;
