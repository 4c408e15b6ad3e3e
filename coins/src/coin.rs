use {
    crate::{dec::Dec, error::CoinError},
    num_bigint::BigUint,
    num_traits::Zero,
    serde::{Deserialize, Serialize},
    std::{fmt, str::FromStr},
};

/// Maximum length of a denomination, in bytes.
pub const MAX_DENOM_LEN: usize = 128;
const MIN_DENOM_LEN: usize = 3;

/// Check a denomination against `[a-zA-Z][a-zA-Z0-9/:._-]{2,127}`.
pub fn validate_denom(denom: &str) -> Result<(), CoinError> {
    let bytes = denom.as_bytes();
    let valid = (MIN_DENOM_LEN..=MAX_DENOM_LEN).contains(&bytes.len())
        && bytes[0].is_ascii_alphabetic()
        && bytes[1..]
            .iter()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'/' | b':' | b'.' | b'_' | b'-'));
    if valid {
        Ok(())
    } else {
        Err(CoinError::InvalidDenom(denom.to_string()))
    }
}

/// Split `"<amount><denom>"` at the first character that cannot belong to
/// the amount. Whitespace between the two halves is tolerated.
fn split_amount_denom(s: &str, allow_point: bool) -> Option<(&str, &str)> {
    let s = s.trim();
    let idx = s.find(|c: char| !(c.is_ascii_digit() || (allow_point && c == '.')))?;
    let (amount, denom) = s.split_at(idx);
    (!amount.is_empty()).then(|| (amount, denom.trim_start()))
}

/// An integer amount of a single denomination, in base units.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    #[serde(with = "amount_as_string")]
    pub amount: BigUint,
}

impl Coin {
    /// Build a coin without validating the denomination; see [`Coin::validate`].
    pub fn new(denom: impl Into<String>, amount: impl Into<BigUint>) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.into(),
        }
    }

    pub fn validate(&self) -> Result<(), CoinError> {
        validate_denom(&self.denom)
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

impl FromStr for Coin {
    type Err = CoinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (amount, denom) =
            split_amount_denom(s, false).ok_or_else(|| CoinError::InvalidCoin(s.to_string()))?;
        validate_denom(denom)?;
        let amount = BigUint::parse_bytes(amount.as_bytes(), 10)
            .ok_or_else(|| CoinError::InvalidCoin(s.to_string()))?;
        Ok(Self::new(denom, amount))
    }
}

/// A decimal amount of a single denomination, used for per-gas prices.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecCoin {
    pub denom: String,
    pub amount: Dec,
}

impl DecCoin {
    pub fn new(denom: impl Into<String>, amount: Dec) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }

    pub fn validate(&self) -> Result<(), CoinError> {
        validate_denom(&self.denom)
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

impl fmt::Display for DecCoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

impl FromStr for DecCoin {
    type Err = CoinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (amount, denom) =
            split_amount_denom(s, true).ok_or_else(|| CoinError::InvalidCoin(s.to_string()))?;
        validate_denom(denom)?;
        Ok(Self::new(denom, amount.parse()?))
    }
}

mod amount_as_string {
    use {
        num_bigint::BigUint,
        serde::{de, Deserialize, Deserializer, Serializer},
    };

    pub fn serialize<S: Serializer>(amount: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(amount)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        let s = String::deserialize(deserializer)?;
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(de::Error::custom(format!("invalid coin amount {s:?}")));
        }
        BigUint::parse_bytes(s.as_bytes(), 10)
            .ok_or_else(|| de::Error::custom(format!("invalid coin amount {s:?}")))
    }
}
