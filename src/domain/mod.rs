//! Pure token logic: addresses, instructions, transaction assembly.

pub mod token;
