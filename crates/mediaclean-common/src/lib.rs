//! Mediaclean-Common: language resolution and path utilities.
//!
//! - **Language Resolver**: maps 2-letter, 3-letter, culture-style and named
//!   language identifiers onto one canonical ISO 639-2 code
//! - **Path Utilities**: media file detection, sidecar naming, extension lists
//!
//! # Examples
//!
//! ```
//! use mediaclean_common::{is_prefix_match, LanguageResolver};
//!
//! let resolver = LanguageResolver::new();
//! assert_eq!(resolver.resolve_or_und("en-US"), "eng");
//! assert_eq!(resolver.resolve_or_und("zho"), "chi");
//! assert!(is_prefix_match("en", "en-GB"));
//! ```

mod iso639;
pub mod language;
pub mod paths;

pub use language::{
    is_prefix_match, is_undetermined, matches_any, Language, LanguageResolver, UNDETERMINED,
};
