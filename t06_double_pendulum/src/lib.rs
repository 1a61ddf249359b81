pub mod error;
pub mod point;
pub mod render;
pub mod resources;
pub mod session;
pub mod state;
pub mod trajectory;
