pub mod kind;

pub use isolate_error::Error;
