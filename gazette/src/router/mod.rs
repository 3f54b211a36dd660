pub mod category;
pub mod date_range;
pub mod headlines;
pub mod listing;
pub(crate) mod macros;
pub mod search;
pub mod source;
