//! Library components of the trade extraction CLI.

pub mod extract;
pub mod logging;
