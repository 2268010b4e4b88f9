mod indicator;
mod page;
mod status_bar;

pub use indicator::{indicator_row, PullIndicatorWidget};
pub use page::PageWidget;
pub use status_bar::StatusBarWidget;
