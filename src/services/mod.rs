pub mod availability_service;
pub mod demo_data;
pub mod entitlement_service;
pub mod stats_service;

pub use availability_service::*;
pub use entitlement_service::*;
pub use stats_service::*;
