//! Color constants for the portfolio palette.
//!
//! The stylesheet uses CSS custom properties; these mirror them for any
//! Rust-side styling (particle tint, inline styles).

#![allow(dead_code)]

// === LIGHT THEME ===
pub const LIGHT_BG: &str = "#fafafa";
pub const LIGHT_SURFACE: &str = "#ffffff";
pub const LIGHT_TEXT: &str = "#1c1c1e";
pub const LIGHT_TEXT_MUTED: &str = "rgba(28, 28, 30, 0.6)";

// === DARK THEME ===
pub const DARK_BG: &str = "#101014";
pub const DARK_SURFACE: &str = "#1a1a20";
pub const DARK_TEXT: &str = "#f2f2f5";
pub const DARK_TEXT_MUTED: &str = "rgba(242, 242, 245, 0.6)";

// === ACCENT ===
pub const PRIMARY: &str = "#3b82f6";
pub const PRIMARY_SOFT: &str = "rgba(59, 130, 246, 0.15)";
pub const ACCENT: &str = "#f59e0b";

// === SEMANTIC ===
pub const SUCCESS: &str = "#22c55e";
pub const DANGER: &str = "#ef4444";
