/*!
 * Process Identifier
 * User-supplied process names with inline storage
 */

use super::errors::SimError;
use serde::{Deserialize, Serialize};
use smartstring::alias::String as SmartString;
use std::fmt;

/// Identifier of a simulated process
///
/// Short ids (≤23 bytes) are stored inline without heap allocation, which
/// covers the usual `P1`, `A`, `worker-3` style names. Ordering is
/// byte-lexicographic and is what the result tables sort by.
///
/// An id is never empty and carries no surrounding whitespace.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[repr(transparent)]
pub struct ProcessId {
    inner: SmartString,
}

impl ProcessId {
    /// Parse an id, trimming surrounding whitespace
    pub fn new(raw: &str) -> Result<Self, SimError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SimError::InvalidProcess(
                "process id cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            inner: SmartString::from(trimmed),
        })
    }

    #[inline(always)]
    pub fn as_str(&self) -> &str {
        self.inner.as_str()
    }

    /// Check if the id is stored inline (no heap allocation)
    #[inline]
    pub fn is_inline(&self) -> bool {
        self.inner.is_inline()
    }
}

impl TryFrom<String> for ProcessId {
    type Error = SimError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl TryFrom<&str> for ProcessId {
    type Error = SimError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProcessId> for String {
    #[inline]
    fn from(id: ProcessId) -> Self {
        id.inner.into()
    }
}

impl AsRef<str> for ProcessId {
    #[inline(always)]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::borrow::Borrow<str> for ProcessId {
    #[inline(always)]
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` keeps width/alignment flags working for table output
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_whitespace() {
        let pid = ProcessId::new("  P1 ").unwrap();
        assert_eq!(pid.as_str(), "P1");
        assert!(pid.is_inline());
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            ProcessId::new(""),
            Err(SimError::InvalidProcess(_))
        ));
        assert!(matches!(
            ProcessId::new("   "),
            Err(SimError::InvalidProcess(_))
        ));
    }

    #[test]
    fn test_lexicographic_ordering() {
        let p10 = ProcessId::new("P10").unwrap();
        let p2 = ProcessId::new("P2").unwrap();
        // Byte order, not numeric order
        assert!(p10 < p2);
    }

    #[test]
    fn test_display_honours_width() {
        let pid = ProcessId::new("A").unwrap();
        assert_eq!(format!("{:<4}|", pid), "A   |");
    }

    #[test]
    fn test_serde_validates() {
        let pid: ProcessId = serde_json::from_str(r#""B""#).unwrap();
        assert_eq!(pid.as_str(), "B");
        assert_eq!(serde_json::to_string(&pid).unwrap(), r#""B""#);
        assert!(serde_json::from_str::<ProcessId>(r#""""#).is_err());
    }
}
