pub mod about;
pub mod chart;
pub mod paint_view;
pub mod settings;
pub mod stats_view;
