pub mod health;
pub mod pdf;
