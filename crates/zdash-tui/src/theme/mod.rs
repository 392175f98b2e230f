//! Centralized theme for the dashboard.
//!
//! This module provides:
//! - `palette` - Raw color constants
//! - `styles` - Semantic style builder functions
//! - `icons` - Unicode icons with Nerd Font alternatives

pub mod icons;
pub mod palette;
pub mod styles;
