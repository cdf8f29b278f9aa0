pub mod division;
pub mod season;
pub mod standings;

pub use division::*;
pub use season::*;
pub use standings::*;
