pub mod habit;
pub mod user;

pub use habit::*;
pub use user::*;
