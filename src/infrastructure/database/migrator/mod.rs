//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_users;
mod m20250101_000002_create_hostels;
mod m20250101_000003_create_rooms;
mod m20250101_000004_create_bookings;
mod m20250101_000005_create_favorites;
mod m20250101_000006_create_photos;
mod m20250101_000007_create_inquiries;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_users::Migration),
            Box::new(m20250101_000002_create_hostels::Migration),
            Box::new(m20250101_000003_create_rooms::Migration),
            Box::new(m20250101_000004_create_bookings::Migration),
            Box::new(m20250101_000005_create_favorites::Migration),
            Box::new(m20250101_000006_create_photos::Migration),
            Box::new(m20250101_000007_create_inquiries::Migration),
        ]
    }
}
