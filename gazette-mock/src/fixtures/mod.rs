pub mod articles;
pub mod listings;
