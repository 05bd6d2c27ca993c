#[macro_use]
mod macros;

/// Fixed string vocabularies: bar sizes, sort fields and directions, frequency
pub mod enums;
/// Market data field code table
pub mod fields;
/// Order side, type and time in force
pub mod order;
/// Raw-or-symbolic parameter values
pub mod selector;

pub use enums::*;
pub use fields::*;
pub use order::*;
pub use selector::*;
