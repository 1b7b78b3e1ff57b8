// Screener - terminal stock screener
// Library exports

pub mod cli;
pub mod config;
pub mod engine;
pub mod logging;
pub mod render;
pub mod services;
