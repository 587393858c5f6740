//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store, query, statistics and persistence calls.
//! - Keep presentation layers decoupled from storage details through the
//!   tagged action dispatcher.

pub mod action;
pub mod library_service;
