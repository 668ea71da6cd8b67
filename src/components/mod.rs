pub mod app;
pub mod board_svg;
pub mod legend;
pub mod legend_panel;
pub mod route_summary;

pub use app::{App, AppProps};
