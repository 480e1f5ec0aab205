//! One service per backend resource.
//!
//! Every operation maps to a single transport call and rewraps failures with
//! a fixed, operation-specific fallback message.

pub mod actuator;
pub mod agent;
pub mod log;
pub mod region;
pub mod role;
pub mod server_db;
pub mod service;

pub use actuator::ActuatorService;
pub use agent::AgentService;
pub use log::LogService;
pub use region::RegionService;
pub use role::RoleService;
pub use server_db::ServerDbService;
pub use service::ServiceService;
