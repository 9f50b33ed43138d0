//! Repository traits for the domain layer
//!
//! `RepositoryProvider` gives consumers unified access to all per-aggregate
//! repositories; handlers and services request only the repository they need:
//!
//! ```ignore
//! async fn handle(repos: &dyn RepositoryProvider) {
//!     let room = repos.rooms().find_by_id("room-1").await?;
//!     let bookings = repos.bookings().find_by_room("room-1").await?;
//! }
//! ```

use super::booking::BookingRepository;
use super::favorite::FavoriteRepository;
use super::hostel::HostelRepository;
use super::inquiry::InquiryRepository;
use super::photo::PhotoRepository;
use super::room::RoomRepository;
use super::user::UserRepository;

/// Provides access to all domain repositories.
pub trait RepositoryProvider: Send + Sync {
    fn users(&self) -> &dyn UserRepository;
    fn hostels(&self) -> &dyn HostelRepository;
    fn rooms(&self) -> &dyn RoomRepository;
    fn bookings(&self) -> &dyn BookingRepository;
    fn favorites(&self) -> &dyn FavoriteRepository;
    fn photos(&self) -> &dyn PhotoRepository;
    fn inquiries(&self) -> &dyn InquiryRepository;
}
