//! Database entities module

pub mod booking;
pub mod favorite;
pub mod hostel;
pub mod inquiry;
pub mod photo;
pub mod room;
pub mod user;

pub use booking::Entity as Booking;
pub use favorite::Entity as Favorite;
pub use hostel::Entity as Hostel;
pub use inquiry::Entity as Inquiry;
pub use photo::Entity as Photo;
pub use room::Entity as Room;
pub use user::Entity as User;
