// src/models/mod.rs

pub mod projectile;

pub use projectile::Projectile;
