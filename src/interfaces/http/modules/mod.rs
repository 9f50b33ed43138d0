pub mod auth;
pub mod bookings;
pub mod favorites;
pub mod health;
pub mod hostels;
pub mod inquiries;
pub mod photos;
pub mod rooms;
pub mod users;
