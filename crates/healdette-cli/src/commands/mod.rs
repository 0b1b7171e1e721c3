pub mod blend;
pub mod check;
pub mod validate;
