pub mod model;
pub mod repository;

pub use model::{Hostel, HostelStatus};
pub use repository::HostelRepository;
