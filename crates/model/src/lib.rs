pub mod completion;
pub mod ids;
pub mod session;
pub mod statistics;

pub use time::DateError;
