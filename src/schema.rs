//! Error-correcting-code schemas a TrustMark payload can be encoded with.
//!
//! The decoder reports the schema as a small integer; hosts expect the
//! symbolic name.

use std::fmt;

/// Name reported for schema codes outside the known range.
pub const UNKNOWN_SCHEMA: &str = "UNKNOWN";

/// Code used when the schema of a payload cannot be determined.
pub const UNKNOWN_SCHEMA_CODE: u8 = u8::MAX;

/// BCH configuration used for the embedded payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WatermarkSchema {
    /// 40 data bits, strongest correction.
    BchSuper,
    /// 61 data bits, corrects up to 5 bit errors.
    #[default]
    Bch5,
    /// 68 data bits, corrects up to 4 bit errors.
    Bch4,
    /// 75 data bits, corrects up to 3 bit errors.
    Bch3,
}

impl WatermarkSchema {
    /// Look up a schema by the integer code the decoder reports.
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::BchSuper),
            1 => Some(Self::Bch5),
            2 => Some(Self::Bch4),
            3 => Some(Self::Bch3),
            _ => None,
        }
    }

    /// Integer code of this schema.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::BchSuper => 0,
            Self::Bch5 => 1,
            Self::Bch4 => 2,
            Self::Bch3 => 3,
        }
    }

    /// Number of data bits a payload of this schema carries.
    #[must_use]
    pub fn data_bits(self) -> usize {
        match self {
            Self::BchSuper => 40,
            Self::Bch5 => 61,
            Self::Bch4 => 68,
            Self::Bch3 => 75,
        }
    }

    /// Identify the schema of a decoded payload from its length in bits.
    ///
    /// The decoder trims the payload to the data length of the schema
    /// recorded in its version bits, so the length alone identifies it.
    #[must_use]
    pub fn from_data_bits(len: usize) -> Option<Self> {
        [Self::BchSuper, Self::Bch5, Self::Bch4, Self::Bch3]
            .into_iter()
            .find(|s| s.data_bits() == len)
    }

    /// Symbolic name, e.g. `BCH_5`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::BchSuper => "BCH_SUPER",
            Self::Bch5 => "BCH_5",
            Self::Bch4 => "BCH_4",
            Self::Bch3 => "BCH_3",
        }
    }
}

/// Schema code for a decoded payload of `len` bits, [`UNKNOWN_SCHEMA_CODE`]
/// if no schema carries that many data bits.
#[must_use]
pub fn schema_code_for_data_bits(len: usize) -> u8 {
    WatermarkSchema::from_data_bits(len).map_or(UNKNOWN_SCHEMA_CODE, WatermarkSchema::code)
}

/// Name for a raw schema code, [`UNKNOWN_SCHEMA`] if unrecognized.
#[must_use]
pub fn schema_name(code: u8) -> &'static str {
    WatermarkSchema::from_code(code).map_or(UNKNOWN_SCHEMA, WatermarkSchema::name)
}

impl fmt::Display for WatermarkSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_table() {
        assert_eq!(schema_name(0), "BCH_SUPER");
        assert_eq!(schema_name(1), "BCH_5");
        assert_eq!(schema_name(2), "BCH_4");
        assert_eq!(schema_name(3), "BCH_3");
        assert_eq!(schema_name(4), UNKNOWN_SCHEMA);
        assert_eq!(schema_name(255), UNKNOWN_SCHEMA);
    }

    #[test]
    fn code_and_from_code_agree() {
        for s in [
            WatermarkSchema::BchSuper,
            WatermarkSchema::Bch5,
            WatermarkSchema::Bch4,
            WatermarkSchema::Bch3,
        ] {
            assert_eq!(WatermarkSchema::from_code(s.code()), Some(s));
        }
    }

    #[test]
    fn payload_length_identifies_schema() {
        assert_eq!(schema_code_for_data_bits(40), 0);
        assert_eq!(schema_code_for_data_bits(61), 1);
        assert_eq!(schema_code_for_data_bits(68), 2);
        assert_eq!(schema_code_for_data_bits(75), 3);
        assert_eq!(schema_name(schema_code_for_data_bits(40)), "BCH_SUPER");
    }

    #[test]
    fn other_payload_lengths_are_unknown() {
        for len in [0, 7, 39, 56, 100] {
            assert_eq!(schema_code_for_data_bits(len), UNKNOWN_SCHEMA_CODE);
            assert_eq!(schema_name(schema_code_for_data_bits(len)), UNKNOWN_SCHEMA);
        }
    }
}
