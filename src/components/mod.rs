//! UI Components
//!
//! Leptos components of the board page.

mod candy_board;
mod fox_viewer;
mod log_panel;
mod login_form;
mod new_candy_form;

pub use candy_board::CandyBoard;
pub use fox_viewer::FoxViewer;
pub use log_panel::LogPanel;
pub use login_form::LoginForm;
pub use new_candy_form::NewCandyForm;
