pub mod content;
pub mod health;
pub mod journal;
pub mod mood;
pub mod user;
