pub mod delete;
pub mod owner;
