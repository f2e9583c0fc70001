//! UI Components
//!
//! Leptos components making up the meal dashboard.

mod header;
mod tab_bar;
mod meal_editor;
mod report_browser;
mod report_card;
mod toast;

pub use header::Header;
pub use tab_bar::TabBar;
pub use meal_editor::MealEditorPanel;
pub use report_browser::ReportBrowser;
pub use report_card::ReportCard;
pub use toast::{Notifier, ToastContainer};
#[cfg(test)]
pub use toast::ToastKind;
