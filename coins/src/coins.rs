use {
    crate::{
        coin::{Coin, DecCoin},
        dec::Dec,
        error::CoinError,
    },
    num_bigint::BigUint,
    num_traits::Zero,
    serde::{Deserialize, Serialize},
    std::{collections::BTreeMap, fmt, str::FromStr},
};

/// A multi-denomination integer amount.
///
/// The set is kept canonical at all times: entries are sorted by
/// denomination, every denomination appears at most once and zero-valued
/// entries are dropped. All arithmetic is denomination-wise, with a
/// denomination missing from one operand counting as zero.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Coin>", into = "Vec<Coin>")]
pub struct Coins(Vec<Coin>);

impl Coins {
    /// Strict constructor: validates every denomination and rejects
    /// duplicates. Zero-valued coins are removed.
    pub fn new(coins: impl IntoIterator<Item = Coin>) -> Result<Self, CoinError> {
        let mut coins: Vec<Coin> = coins.into_iter().filter(|coin| !coin.is_zero()).collect();
        coins.sort_by(|a, b| a.denom.cmp(&b.denom));
        for coin in &coins {
            coin.validate()?;
        }
        if let Some(pair) = coins.windows(2).find(|pair| pair[0].denom == pair[1].denom) {
            return Err(CoinError::DuplicateDenom(pair[0].denom.clone()));
        }
        Ok(Self(coins))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coin> {
        self.0.iter()
    }

    pub fn denoms(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|coin| coin.denom.as_str())
    }

    /// The amount held in `denom`, zero when absent.
    pub fn amount_of(&self, denom: &str) -> BigUint {
        self.0
            .binary_search_by(|coin| coin.denom.as_str().cmp(denom))
            .map(|idx| self.0[idx].amount.clone())
            .unwrap_or_default()
    }

    /// Denomination-wise sum.
    pub fn add(&self, other: &Coins) -> Coins {
        self.iter().chain(other.iter()).cloned().collect()
    }

    /// Denomination-wise difference, or `None` if any component of the
    /// result would be negative.
    pub fn checked_sub(&self, other: &Coins) -> Option<Coins> {
        if other
            .iter()
            .any(|coin| self.amount_of(&coin.denom) < coin.amount)
        {
            return None;
        }
        Some(
            self.iter()
                .map(|coin| {
                    let subtrahend = other.amount_of(&coin.denom);
                    Coin::new(coin.denom.clone(), &coin.amount - subtrahend)
                })
                .collect(),
        )
    }

    /// True if, for at least one denomination that `other` holds a non-zero
    /// amount of, `self` holds at least as much.
    ///
    /// An empty `other` is never dominated.
    pub fn is_any_gte(&self, other: &Coins) -> bool {
        self.iter().any(|coin| {
            let threshold = other.amount_of(&coin.denom);
            !threshold.is_zero() && coin.amount >= threshold
        })
    }
}

/// Collecting merges repeated denominations by summing them and drops
/// zero-valued results. Denominations are not validated.
impl FromIterator<Coin> for Coins {
    fn from_iter<I: IntoIterator<Item = Coin>>(iter: I) -> Self {
        let mut totals: BTreeMap<String, BigUint> = BTreeMap::new();
        for coin in iter {
            *totals.entry(coin.denom).or_default() += coin.amount;
        }
        Self(
            totals
                .into_iter()
                .map(|(denom, amount)| Coin { denom, amount })
                .filter(|coin| !coin.is_zero())
                .collect(),
        )
    }
}

impl From<Coin> for Coins {
    fn from(coin: Coin) -> Self {
        std::iter::once(coin).collect()
    }
}

impl TryFrom<Vec<Coin>> for Coins {
    type Error = CoinError;

    fn try_from(coins: Vec<Coin>) -> Result<Self, Self::Error> {
        Self::new(coins)
    }
}

impl From<Coins> for Vec<Coin> {
    fn from(coins: Coins) -> Self {
        coins.0
    }
}

impl<'a> IntoIterator for &'a Coins {
    type Item = &'a Coin;
    type IntoIter = std::slice::Iter<'a, Coin>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Coins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.0)
    }
}

/// Parses a comma separated list such as `"100uatom,5stake"`. An empty or
/// blank string yields an empty set.
impl FromStr for Coins {
    type Err = CoinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Self::default());
        }
        let coins = s.split(',').map(str::parse).collect::<Result<Vec<Coin>, _>>()?;
        Self::new(coins)
    }
}

/// A multi-denomination decimal amount, canonical in the same way as
/// [`Coins`]. Used for per-gas minimum prices.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<DecCoin>", into = "Vec<DecCoin>")]
pub struct DecCoins(Vec<DecCoin>);

impl DecCoins {
    pub fn new(coins: impl IntoIterator<Item = DecCoin>) -> Result<Self, CoinError> {
        let mut coins: Vec<DecCoin> = coins.into_iter().filter(|coin| !coin.is_zero()).collect();
        coins.sort_by(|a, b| a.denom.cmp(&b.denom));
        for coin in &coins {
            coin.validate()?;
        }
        if let Some(pair) = coins.windows(2).find(|pair| pair[0].denom == pair[1].denom) {
            return Err(CoinError::DuplicateDenom(pair[0].denom.clone()));
        }
        Ok(Self(coins))
    }

    /// True when no denomination carries a non-zero amount.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(DecCoin::is_zero)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DecCoin> {
        self.0.iter()
    }

    pub fn amount_of(&self, denom: &str) -> Dec {
        self.0
            .binary_search_by(|coin| coin.denom.as_str().cmp(denom))
            .map(|idx| self.0[idx].amount.clone())
            .unwrap_or_default()
    }
}

impl TryFrom<Vec<DecCoin>> for DecCoins {
    type Error = CoinError;

    fn try_from(coins: Vec<DecCoin>) -> Result<Self, Self::Error> {
        Self::new(coins)
    }
}

impl From<DecCoins> for Vec<DecCoin> {
    fn from(coins: DecCoins) -> Self {
        coins.0
    }
}

impl<'a> IntoIterator for &'a DecCoins {
    type Item = &'a DecCoin;
    type IntoIter = std::slice::Iter<'a, DecCoin>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for DecCoins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.0)
    }
}

/// Parses `"0.0001uatom,0.01stake"`; blank input yields an empty set.
impl FromStr for DecCoins {
    type Err = CoinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Self::default());
        }
        let coins = s
            .split(',')
            .map(str::parse)
            .collect::<Result<Vec<DecCoin>, _>>()?;
        Self::new(coins)
    }
}

fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
