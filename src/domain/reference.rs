//! Base reference handling
//!
//! This module provides the `BaseRef` type for naming registered base
//! runtimes.

use std::fmt;

use crate::error::{Result, StrataError};

/// A parsed base runtime reference
///
/// References always carry both halves of `name:tag`, e.g. `python:3.12`.
/// There is no implicit `latest` tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BaseRef {
    /// Base name, e.g. `python`
    pub name: String,
    /// Base tag, e.g. `3.12` or `3.12-slim`
    pub tag: String,
}

impl BaseRef {
    /// Parse a base reference from a string
    ///
    /// Supported format: `name:tag`. Both halves are required and may not
    /// contain further colons.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();

        if input.is_empty() {
            return Err(StrataError::InvalidBaseReference {
                input: input.to_string(),
            });
        }

        let Some((name, tag)) = input.split_once(':') else {
            return Err(StrataError::InvalidBaseReference {
                input: input.to_string(),
            });
        };

        if name.is_empty() || tag.is_empty() || tag.contains(':') {
            return Err(StrataError::InvalidBaseReference {
                input: input.to_string(),
            });
        }

        Ok(Self {
            name: name.to_string(),
            tag: tag.to_string(),
        })
    }
}

impl fmt::Display for BaseRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.tag)
    }
}
