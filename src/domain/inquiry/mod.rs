pub mod model;
pub mod repository;

pub use model::Inquiry;
pub use repository::InquiryRepository;
