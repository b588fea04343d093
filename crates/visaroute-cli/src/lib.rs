//! Visa route finder CLI library.
//!
//! Logging setup and stdout rendering shared by the `visaroute` binary.

pub mod logging;
pub mod output;
