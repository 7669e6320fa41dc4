//! TrustMark model variants.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Which pretrained TrustMark model pair to decode with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelType {
    /// Production model, tuned for perceptual quality.
    #[default]
    P,
    /// Alternative model, tuned for robustness.
    Q,
}

impl ModelType {
    /// The single-letter code used on the command line.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::P => "P",
            Self::Q => "Q",
        }
    }
}

impl FromStr for ModelType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "P" => Ok(Self::P),
            "Q" => Ok(Self::Q),
            other => Err(Error::InvalidModelType(other.to_string())),
        }
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_codes() {
        assert_eq!("P".parse::<ModelType>().unwrap(), ModelType::P);
        assert_eq!("Q".parse::<ModelType>().unwrap(), ModelType::Q);
        assert_eq!(ModelType::default(), ModelType::P);
    }

    #[test]
    fn rejects_other_codes() {
        // Case-sensitive, like the model file names.
        assert!(matches!(
            "p".parse::<ModelType>(),
            Err(Error::InvalidModelType(s)) if s == "p"
        ));
        assert!("".parse::<ModelType>().is_err());
        assert!("B".parse::<ModelType>().is_err());
    }
}
