pub mod controller;
pub mod presenter;

pub use controller::*;
pub use presenter::*;
