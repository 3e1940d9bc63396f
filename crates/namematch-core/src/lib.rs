//! Namematch Core Engine
//!
//! Decides whether two person names refer to the same individual. Names may
//! be written in Cyrillic or Latin script, abbreviated with initials, given
//! in any part order, use nicknames, or carry typos.
//!
//! # Features
//!
//! - `parallel` - Search Cyrillic variations concurrently via rayon
//!
//! # Example
//!
//! ```rust
//! use namematch_core::{MatchConfig, MatchType, NameMatcher};
//!
//! let matcher = NameMatcher::new(MatchConfig::default());
//!
//! let result = matcher.match_names("Иванов Иван", "иванов иван", None);
//! assert_eq!(result.match_type, MatchType::ExactMatch);
//!
//! let result = matcher.match_names("Иванов Иван", "Ivanov Ivan", None);
//! assert_eq!(result.score, 95);
//! ```

pub mod audit;
pub mod cache;
pub mod config;
pub mod error;
pub mod matcher;
pub mod names;
pub mod similarity;
pub mod translit;

// Re-export main types at crate root
pub use audit::{AuditRecord, AuditSink, JsonlAuditLog};
pub use cache::{cache_key, ResultCache};
pub use config::{AttributeRule, MatchConfig, MetricWeights, Thresholds};
pub use error::{MatchError, Result};
pub use matcher::{match_names, Attributes, MatchResult, MatchType, NameMatcher};
pub use translit::Standard;
