//! SeaORM entities and persistence helpers for the three record stores.
pub mod errors;
pub mod db;
pub mod product;
pub mod restaurant;
pub mod review;

#[cfg(test)]
mod tests;
