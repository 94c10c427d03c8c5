// Library root: the draft allocation engine and its supporting pieces
// (configuration, player pool loading, roster fitting, grading).

pub mod config;
pub mod data;
pub mod draft;
