//! Routes
//!
//! Route handlers organized by functionality.

pub mod contact;
pub mod health;
pub mod pages;
pub mod trackers;
