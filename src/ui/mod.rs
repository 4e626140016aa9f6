//! Terminal output for verification reports.
//!
//! This module provides:
//! - [`Console`] for writing report lines to any sink
//! - [`StatusKind`] emoji markers and section icons
//! - [`VerifyTheme`] colors, disabled for non-TTY output and `NO_COLOR`
//! - [`hints`] for the closing next-steps and common-fixes blocks
//!
//! # Example
//!
//! ```
//! use garage_verify::ui::{Console, StatusKind};
//!
//! let mut console = Console::plain(Vec::new());
//! console.item(StatusKind::Success, "django");
//! let text = String::from_utf8(console.into_inner()).unwrap();
//! assert_eq!(text, "  ✅ django\n");
//! ```

pub mod console;
pub mod hints;
pub mod icons;
pub mod theme;

pub use console::{Console, RULE_WIDTH};
pub use icons::StatusKind;
pub use theme::{should_use_colors, VerifyTheme};
