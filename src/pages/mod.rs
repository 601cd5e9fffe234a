//! Page components

mod caller;

pub use caller::*;
