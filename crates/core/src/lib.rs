#![forbid(unsafe_code)]

pub mod export;
pub mod model;
pub mod time;

pub use export::ExportDocument;
pub use time::Clock;
