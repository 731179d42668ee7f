pub mod catalog;
pub mod handlers;
pub mod model;
pub mod sources;
