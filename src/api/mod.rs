pub mod handlers;
pub mod protocol;
