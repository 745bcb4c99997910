//! API Routes
//!
//! Route handlers organized by functionality.

pub mod collections;
pub mod dashboard;
pub mod health;
pub mod pages;
