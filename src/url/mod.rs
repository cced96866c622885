//! Domain input handling
//!
//! Turns a raw line from the domain list into the homepage URLs the crawler
//! tries, in scheme preference order.

mod domain;

pub use domain::{DomainTarget, SCHEMES};
