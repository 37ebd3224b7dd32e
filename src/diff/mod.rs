//! Directory differ - freshness policy and destination probing

mod compare;
mod probe;

pub use compare::classify;
pub use probe::stat_destination;
