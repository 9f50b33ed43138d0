//! # Hostel Booking Service
//!
//! REST backend for a hostel-booking platform: students browse hostels
//! and rooms, book stays, bookmark favorites and message owners; owners
//! manage listings; admins moderate.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, types and repository traits
//! - **application**: Business logic and use cases (the booking engine)
//! - **infrastructure**: External concerns (database, crypto)
//! - **interfaces**: REST API with Swagger documentation
//! - **shared**: Cross-cutting types (error taxonomy)

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

// Re-export API router
pub use interfaces::create_api_router;
