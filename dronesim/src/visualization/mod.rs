pub mod viewer;
pub mod charts;
