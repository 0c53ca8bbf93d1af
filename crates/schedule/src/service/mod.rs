pub mod calendar;
pub mod completion;
pub mod navigation;
pub mod statistics;
