pub mod cache;
pub mod config;
pub mod consts;
pub mod coordinator;
pub mod error;
pub mod geometry;
pub mod io;
pub mod navigation;
pub mod render;
pub mod viewport;
pub mod world;
