pub mod clause;
pub mod page;
pub mod record;
pub mod region;
pub mod task;
pub mod user;
