pub mod order;
pub mod report;

pub use order::*;
pub use report::*;
