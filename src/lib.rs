pub mod app;
pub mod config;
pub mod export;
pub mod render;
pub mod terminal;
pub mod visual;
