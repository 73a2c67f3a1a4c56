//! Campaign Module
//!
//! Global discount window resolution from catalog plans.

mod resolver;

pub use resolver::*;
