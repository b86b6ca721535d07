pub mod dashboard;
pub mod entitlement;

pub use dashboard::dashboard_config;
pub use entitlement::entitlement_config;
