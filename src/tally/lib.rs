pub mod counter;
pub mod render;
pub mod shared;
pub mod surface;
pub mod ui;
pub mod wiring;
