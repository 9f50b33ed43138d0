pub mod model;
pub mod repository;

pub use model::Favorite;
pub use repository::FavoriteRepository;
