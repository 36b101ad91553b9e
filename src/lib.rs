pub mod app;
pub mod chart;
pub mod constants;
pub mod control;
pub mod error;
pub mod form;
pub mod model;
pub mod plot;
pub mod plotter;
pub mod utils;
