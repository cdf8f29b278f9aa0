pub mod event;
mod r#match;
pub mod report;
mod result;

pub use event::*;
pub use r#match::*;
pub use result::*;
