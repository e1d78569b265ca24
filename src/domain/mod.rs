pub mod case;
pub mod validate;
