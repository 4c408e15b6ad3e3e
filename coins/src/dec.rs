use {
    crate::error::CoinError,
    borsh::{BorshDeserialize, BorshSerialize},
    num_bigint::BigUint,
    num_traits::{One, Zero},
    serde::{de, Deserialize, Deserializer, Serialize, Serializer},
    std::{
        fmt,
        io::{Read, Write},
        str::FromStr,
    },
};

/// Number of fractional digits carried by every [`Dec`].
pub const PRECISION: u32 = 18;

/// `10^PRECISION`, the scale between a [`Dec`]'s raw value and its numeric value.
const PRECISION_MULTIPLIER: u64 = 1_000_000_000_000_000_000;

/// A non-negative fixed-point decimal with [`PRECISION`] fractional digits.
///
/// The value is stored as an arbitrary-precision integer scaled by
/// `10^18`, so multiplication by an integer is always exact and the two
/// integer conversions ([`Dec::truncate_int`] and [`Dec::ceil_int`]) are the
/// only places where rounding happens.  No binary floating point is involved
/// anywhere, which keeps every node bit-identical.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dec(BigUint);

impl Dec {
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    /// The decimal equal to the integer `value`.
    pub fn from_int(value: impl Into<BigUint>) -> Self {
        let value: BigUint = value.into();
        Self(value * precision_multiplier())
    }

    /// `value × 10^-prec`, e.g. `Dec::with_prec(1, 4)` is `0.0001`.
    pub fn with_prec(value: u64, prec: u32) -> Result<Self, CoinError> {
        let Some(shift) = PRECISION.checked_sub(prec) else {
            return Err(CoinError::PrecisionTooHigh {
                value: format!("{value}e-{prec}"),
                max: PRECISION,
            });
        };
        Ok(Self(BigUint::from(value) * BigUint::from(10u32).pow(shift)))
    }

    /// Build a decimal from its raw scaled representation.
    pub fn from_raw(raw: BigUint) -> Self {
        Self(raw)
    }

    /// The raw value, i.e. the numeric value multiplied by `10^18`.
    pub fn raw(&self) -> &BigUint {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Exact product with an integer.
    pub fn mul_int(&self, value: &BigUint) -> Self {
        Self(&self.0 * value)
    }

    /// Round toward zero.
    pub fn truncate_int(&self) -> BigUint {
        &self.0 / precision_multiplier()
    }

    /// Round away from zero.
    pub fn ceil_int(&self) -> BigUint {
        let multiplier = precision_multiplier();
        let quotient = &self.0 / &multiplier;
        if (&self.0 % &multiplier).is_zero() {
            quotient
        } else {
            quotient + BigUint::one()
        }
    }
}

#[inline]
fn precision_multiplier() -> BigUint {
    BigUint::from(PRECISION_MULTIPLIER)
}

impl FromStr for Dec {
    type Err = CoinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoinError::InvalidDecimal(s.to_string());
        let (int_part, frac_part) = match s.split_once('.') {
            Some((_, "")) => return Err(invalid()),
            Some(parts) => parts,
            None => (s, ""),
        };
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if int_part.is_empty() || !all_digits(int_part) || !all_digits(frac_part) {
            return Err(invalid());
        }
        if frac_part.len() > PRECISION as usize {
            return Err(CoinError::PrecisionTooHigh {
                value: s.to_string(),
                max: PRECISION,
            });
        }
        let scaled = format!("{int_part}{frac_part:0<width$}", width = PRECISION as usize);
        BigUint::parse_bytes(scaled.as_bytes(), 10)
            .map(Self)
            .ok_or_else(invalid)
    }
}

impl fmt::Display for Dec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let multiplier = precision_multiplier();
        let int_part = &self.0 / &multiplier;
        let frac_part = (&self.0 % &multiplier).to_string();
        write!(
            f,
            "{int_part}.{frac_part:0>width$}",
            width = PRECISION as usize
        )
    }
}

impl Serialize for Dec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Dec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

impl BorshSerialize for Dec {
    fn serialize<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        BorshSerialize::serialize(&self.0.to_bytes_le(), writer)
    }
}

impl BorshDeserialize for Dec {
    fn deserialize_reader<R: Read>(reader: &mut R) -> std::io::Result<Self> {
        let bytes = Vec::<u8>::deserialize_reader(reader)?;
        Ok(Self(BigUint::from_bytes_le(&bytes)))
    }
}
