//! Extracts supergroup records from a markdown pipe table, optionally joined
//! with a `name,vision` CSV, and caches the result for the life of its owner.

pub mod model;
pub mod table;
pub mod util;
