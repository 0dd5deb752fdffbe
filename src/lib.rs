pub mod api;
pub mod chart;
pub mod config;
pub mod router;
pub mod style;
pub mod taxonomy;
pub mod theory;
