pub mod data;
pub mod engine;
pub mod persistence;
pub mod state;
pub mod summary;
pub mod ui;
