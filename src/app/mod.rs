//! 应用层

pub mod collection;
pub mod products;
pub mod shell;
