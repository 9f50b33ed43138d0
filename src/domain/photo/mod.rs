pub mod model;
pub mod repository;

pub use model::{Photo, PhotoOwner};
pub use repository::PhotoRepository;
