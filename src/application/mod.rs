//! Application services: the collection controller and the ports it drives.

pub mod collection;
pub mod error;
pub mod pagination;
pub mod ports;
