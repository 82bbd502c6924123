pub mod collection;
pub mod session;
