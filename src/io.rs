//! Input/output

pub mod ron;
