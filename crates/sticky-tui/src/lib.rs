pub mod app;
pub mod event;
pub mod gesture;
pub mod haptics;
pub mod input;
pub mod scroll;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use app::App;
pub use theme::Theme;
