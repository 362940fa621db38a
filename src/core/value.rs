//! The merge contract and the resolved value sum type.

use serde::{Deserialize, Serialize};

use super::category::ValueKind;
use super::decree::Decree;
use super::pool::Pool;
use crate::error::KindMismatch;

/// A value that can be layered across namespaces.
///
/// `merge` is applied left to right in namespace priority order and need not be
/// commutative: `a.merge(b)` lets `b` override or extend `a`.
pub trait Merge: Sized {
    /// Fold a later layer into this accumulated value.
    #[must_use]
    fn merge(self, other: Self) -> Self;

    /// Whether this layer may be folded into an already seeded value, given the
    /// namespaces active in the current pass.
    fn is_load_eligible(&self, active: &[String]) -> bool;
}

/// Any value a category can resolve to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ResolvedValue {
    Pool(Pool),
    Decree(Decree),
}

impl ResolvedValue {
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Pool(_) => ValueKind::Pool,
            Self::Decree(_) => ValueKind::Decree,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Pool(pool) => &pool.id,
            Self::Decree(decree) => &decree.id,
        }
    }

    #[must_use]
    pub const fn as_pool(&self) -> Option<&Pool> {
        match self {
            Self::Pool(pool) => Some(pool),
            Self::Decree(_) => None,
        }
    }

    #[must_use]
    pub const fn as_decree(&self) -> Option<&Decree> {
        match self {
            Self::Decree(decree) => Some(decree),
            Self::Pool(_) => None,
        }
    }

    /// Merge a later layer of the same shape into this one.
    pub fn merge(self, other: Self) -> Result<Self, KindMismatch> {
        match (self, other) {
            (Self::Pool(a), Self::Pool(b)) => Ok(Self::Pool(a.merge(b))),
            (Self::Decree(a), Self::Decree(b)) => Ok(Self::Decree(a.merge(b))),
            (a, b) => Err(KindMismatch {
                accumulated: a.kind(),
                incoming: b.kind(),
            }),
        }
    }

    #[must_use]
    pub fn is_load_eligible(&self, active: &[String]) -> bool {
        match self {
            Self::Pool(pool) => pool.is_load_eligible(active),
            Self::Decree(decree) => decree.is_load_eligible(active),
        }
    }
}

impl From<Pool> for ResolvedValue {
    fn from(pool: Pool) -> Self {
        Self::Pool(pool)
    }
}

impl From<Decree> for ResolvedValue {
    fn from(decree: Decree) -> Self {
        Self::Decree(decree)
    }
}
