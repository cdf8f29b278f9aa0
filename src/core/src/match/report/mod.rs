pub mod builder;
pub mod wizard;

pub use builder::*;
pub use wizard::*;
