pub mod operations;
pub mod shapes;
pub mod show;
