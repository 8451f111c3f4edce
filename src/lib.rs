// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference
    clippy::module_name_repetitions
)]

//! # Diamond
//!
//! Generates the classic letter diamond: given an uppercase letter, produces
//! a square block of text where each row shows one letter from `A` down to
//! the input, centered and mirrored so the figure forms a rhombus bounded by
//! `A` at the top and bottom vertices and the input letter at the sides.
//!
//! ```text
//!   A
//!  B B
//! C   C
//!  B B
//!   A
//! ```
//!
//! The whole computation is pure: [`build`] validates its input, returns the
//! finished text as one owned string (trailing newline included), and holds
//! no state between calls.
//!
//! ## Modules
//!
//! - [`builder`]: Diamond construction and input validation

pub mod builder;

pub use builder::{build, InvalidCharacter, FILL, NEWLINE};
