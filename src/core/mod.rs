pub mod canvas_layer;
pub mod clock;
pub mod controller;
pub mod display_context;
pub mod gpu_context;
pub mod input_adapter;
pub mod surface_renderer;
pub mod timer;
