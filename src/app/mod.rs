pub mod controller;
pub mod env;
pub mod models;
