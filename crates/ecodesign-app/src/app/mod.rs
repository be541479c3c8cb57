//! Interactive comparison state

mod session;

pub use session::ComparisonSession;
