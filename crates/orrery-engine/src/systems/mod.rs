pub mod guides;
pub mod picking;
pub mod render;
