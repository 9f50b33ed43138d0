//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::booking::BookingRepository;
use crate::domain::favorite::FavoriteRepository;
use crate::domain::hostel::HostelRepository;
use crate::domain::inquiry::InquiryRepository;
use crate::domain::photo::PhotoRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::room::RoomRepository;
use crate::domain::user::UserRepository;

use super::booking_repository::SeaOrmBookingRepository;
use super::favorite_repository::SeaOrmFavoriteRepository;
use super::hostel_repository::SeaOrmHostelRepository;
use super::inquiry_repository::SeaOrmInquiryRepository;
use super::photo_repository::SeaOrmPhotoRepository;
use super::room_repository::SeaOrmRoomRepository;
use super::user_repository::SeaOrmUserRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let room = repos.rooms().find_by_id("room-1").await?;
/// let bookings = repos.bookings().find_by_room("room-1").await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    users: SeaOrmUserRepository,
    hostels: SeaOrmHostelRepository,
    rooms: SeaOrmRoomRepository,
    bookings: SeaOrmBookingRepository,
    favorites: SeaOrmFavoriteRepository,
    photos: SeaOrmPhotoRepository,
    inquiries: SeaOrmInquiryRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: SeaOrmUserRepository::new(db.clone()),
            hostels: SeaOrmHostelRepository::new(db.clone()),
            rooms: SeaOrmRoomRepository::new(db.clone()),
            bookings: SeaOrmBookingRepository::new(db.clone()),
            favorites: SeaOrmFavoriteRepository::new(db.clone()),
            photos: SeaOrmPhotoRepository::new(db.clone()),
            inquiries: SeaOrmInquiryRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn users(&self) -> &dyn UserRepository {
        &self.users
    }

    fn hostels(&self) -> &dyn HostelRepository {
        &self.hostels
    }

    fn rooms(&self) -> &dyn RoomRepository {
        &self.rooms
    }

    fn bookings(&self) -> &dyn BookingRepository {
        &self.bookings
    }

    fn favorites(&self) -> &dyn FavoriteRepository {
        &self.favorites
    }

    fn photos(&self) -> &dyn PhotoRepository {
        &self.photos
    }

    fn inquiries(&self) -> &dyn InquiryRepository {
        &self.inquiries
    }
}
