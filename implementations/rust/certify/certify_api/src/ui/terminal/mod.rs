mod fmt;

pub use fmt::*;
