pub mod clock;
pub mod controller;
pub mod gesture;
pub mod types;
