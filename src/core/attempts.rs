//! Attempts counter color bands

/// Severity band for the remaining-attempts counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptsBand {
    /// More than 5 attempts left
    Comfortable,
    /// 3 to 5 attempts left
    Warning,
    /// 2 or fewer attempts left
    Critical,
}

impl AttemptsBand {
    /// Classify a remaining-attempts count
    #[must_use]
    pub const fn from_remaining(remaining: u32) -> Self {
        if remaining > 5 {
            Self::Comfortable
        } else if remaining > 2 {
            Self::Warning
        } else {
            Self::Critical
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_thresholds() {
        assert_eq!(AttemptsBand::from_remaining(10), AttemptsBand::Comfortable);
        assert_eq!(AttemptsBand::from_remaining(6), AttemptsBand::Comfortable);
        assert_eq!(AttemptsBand::from_remaining(5), AttemptsBand::Warning);
        assert_eq!(AttemptsBand::from_remaining(3), AttemptsBand::Warning);
        assert_eq!(AttemptsBand::from_remaining(2), AttemptsBand::Critical);
        assert_eq!(AttemptsBand::from_remaining(0), AttemptsBand::Critical);
    }
}
