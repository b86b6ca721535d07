pub mod account;
pub mod advertisement;
pub mod common;
pub mod course;
pub mod dashboard;
pub mod entitlement;

pub use account::*;
pub use advertisement::*;
pub use common::*;
pub use course::*;
pub use dashboard::*;
pub use entitlement::*;
