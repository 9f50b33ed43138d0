pub mod model;
pub mod repository;

pub use model::{validate_date_range, Booking, BookingStatus};
pub use repository::BookingRepository;
