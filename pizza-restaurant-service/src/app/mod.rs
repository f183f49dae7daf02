pub mod api;
pub mod migrate;
pub mod seed;
