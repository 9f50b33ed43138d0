//! HTTP REST API interfaces
//!
//! - `middleware`: JWT bearer authentication middleware
//! - `policy`: role and ownership authorization rules
//! - `modules`: request handlers and DTOs for all resources
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod middleware;
pub mod modules;
pub mod policy;
pub mod router;

pub use router::create_api_router;
