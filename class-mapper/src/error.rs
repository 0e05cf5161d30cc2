use std::fmt;
use thiserror::Error;

use crate::Lineage;

/// The error returned by [`ClassMapper::try_map`](crate::ClassMapper::try_map) when no entry of
/// the table matches the object's class or any of its ancestors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct Unmapped {
    lineage: Lineage,
    tried: Vec<&'static str>,
}

impl Unmapped {
    pub(crate) fn new(lineage: Lineage, tried: Vec<&'static str>) -> Self {
        Unmapped { lineage, tried }
    }

    /// The name of the object's dynamic class.
    pub fn class_name(&self) -> &'static str {
        self.lineage.class_name()
    }

    /// The full lineage of the object which could not be mapped.
    pub fn lineage(&self) -> &Lineage {
        &self.lineage
    }

    /// The classes in the mapper's table, in the order they were tried.
    pub fn tried(&self) -> &[&'static str] {
        &self.tried
    }
}

impl fmt::Display for Unmapped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no mapping for class `{}`", self.class_name())?;
        if self.tried.is_empty() {
            write!(f, " (the table is empty)")
        } else {
            write!(f, " (tried {})", self.tried.join(", "))
        }
    }
}
