//! Runtime object wrappers and enumerators.

pub mod abs;
pub mod enums;
