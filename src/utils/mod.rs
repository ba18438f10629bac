//! Utility modules for common functionality
//!
//! This module provides utility types used throughout the application.

pub mod logger;
