//! Core business entities, types and repository traits

pub mod booking;
pub mod favorite;
pub mod hostel;
pub mod inquiry;
pub mod photo;
pub mod repositories;
pub mod room;
pub mod user;

// Re-export commonly used types
pub use booking::{Booking, BookingStatus};
pub use favorite::Favorite;
pub use hostel::{Hostel, HostelStatus};
pub use inquiry::Inquiry;
pub use photo::{Photo, PhotoOwner};
pub use repositories::RepositoryProvider;
pub use room::Room;
pub use user::{User, UserRole};

// Re-export the error taxonomy from shared for convenience
pub use crate::shared::{DomainError, DomainResult};
