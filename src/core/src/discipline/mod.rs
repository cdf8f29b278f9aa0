mod suspension;

pub use suspension::*;
