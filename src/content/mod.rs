// src/content/mod.rs
pub mod loader;
pub mod manager;

pub use loader::ContentLoader;
pub use manager::ContentManager;
