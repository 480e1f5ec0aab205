//! # opsconsole-client
//!
//! The request/response contract layer of the operations console.
//!
//! ## Modules
//!
//! - **transport**: base-address HTTP client with an explicit request/response
//!   middleware chain (bearer token, auth-failure handling) and error
//!   normalization
//! - **session**: login flows, token lifecycle, inactivity auto-logout, user
//!   management
//! - **services**: one service per backend resource (agents, regions,
//!   database servers, services, roles, logs, actuator)

pub mod services;
pub mod session;
pub mod transport;

#[cfg(any(test, feature = "testutil"))]
pub mod testutil;

pub use services::{
    ActuatorService, AgentService, LogService, RegionService, RoleService, ServerDbService,
    ServiceService,
};
pub use session::{InactivityTimer, SessionManager};
pub use transport::{
    ApiPath, ApiRequest, ApiResponse, FailureExt, HttpBackend, HttpFailure, RequestOptions,
    ReqwestBackend, ResponseType, Transport,
};
