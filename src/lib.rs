pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod math;
pub mod nav;
pub mod overlay;
pub mod presentation;
pub mod sections;
pub mod theme;
pub mod wave;
