//! Entry rule trait.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::Entry;

use super::config::ValidationContext;

/// Category of validation rule
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleCategory {
    /// The entry is self-consistent (fields present, ranges sane)
    Structure,
    /// The entry's target exists
    Reference,
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structure => write!(f, "structure"),
            Self::Reference => write!(f, "reference"),
        }
    }
}

/// A single check run against every entry of a resolved pool.
///
/// Rules are stateless. Everything a rule needs beyond the entry itself comes
/// through the `ValidationContext`.
pub trait EntryRule: Send + Sync {
    /// Unique identifier (e.g., "entry-weight-positive")
    fn id(&self) -> &str;

    fn name(&self) -> &str;

    fn description(&self) -> &str;

    fn category(&self) -> RuleCategory;

    /// `Err(reason)` rejects the entry.
    fn check(&self, entry: &Entry, ctx: &ValidationContext<'_>) -> Result<(), String>;
}

pub type BoxedRule = Box<dyn EntryRule>;

/// Declare a unit-struct rule with a closure-like check body.
#[macro_export]
macro_rules! impl_rule {
    (
        $struct_name:ident,
        id: $id:expr,
        name: $name:expr,
        description: $desc:expr,
        category: $cat:expr,
        check: |$entry:ident, $ctx:ident| $check_body:expr
    ) => {
        pub struct $struct_name;

        impl $crate::lint::rule::EntryRule for $struct_name {
            fn id(&self) -> &str {
                $id
            }

            fn name(&self) -> &str {
                $name
            }

            fn description(&self) -> &str {
                $desc
            }

            fn category(&self) -> $crate::lint::rule::RuleCategory {
                $cat
            }

            fn check(
                &self,
                $entry: &$crate::core::Entry,
                $ctx: &$crate::lint::config::ValidationContext<'_>,
            ) -> ::std::result::Result<(), String> {
                $check_body
            }
        }
    };
}

pub use impl_rule;
