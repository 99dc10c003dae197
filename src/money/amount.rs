// ============================================================================
// Money
// MZN amounts as integer centavos with rounding-controlled arithmetic
// ============================================================================

use super::errors::{MoneyError, MoneyResult};
use crate::storage::{Storable, StorageValue};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

/// An amount in Mozambican Metical (MZN).
///
/// Internally stores the amount as an i64 count of centavos
/// (1 MZN = 100 centavos). Every operation returns a new value.
///
/// # Overflow
/// `+`, `-`, negation, [`Money::abs`] and [`Money::multiply_int`] wrap on
/// i64 overflow in both debug and release builds. Use
/// [`Money::checked_add`] / [`Money::checked_sub`] when overflow must be
/// detected.
///
/// # Example
/// ```
/// use txova_types::money::Money;
///
/// let fare = Money::from_centavos(10001); // 100.01 MZN
/// let shares = fare.split(3).unwrap();
/// assert_eq!(shares, vec![
///     Money::from_centavos(3334),
///     Money::from_centavos(3334),
///     Money::from_centavos(3333),
/// ]);
///
/// let commission = fare.percentage(15).unwrap();
/// assert_eq!(commission.to_string(), "15.00 MZN");
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Money(i64);

/// Round half away from zero to the nearest whole centavo.
///
/// NaN maps to zero; infinities and out-of-range values saturate, per
/// Rust's float-to-int conversion.
#[inline]
fn round_centavos(value: f64) -> i64 {
    value.round() as i64
}

impl Money {
    /// Centavos in one MZN
    pub const CENTAVOS_PER_MZN: i64 = 100;

    /// ISO 4217 code used as the text suffix
    pub const CURRENCY_CODE: &'static str = "MZN";

    /// Zero value
    pub const ZERO: Self = Self(0);

    /// Maximum representable value
    pub const MAX: Self = Self(i64::MAX);

    /// Minimum representable value
    pub const MIN: Self = Self(i64::MIN);

    /// Remainders of this magnitude (out of 100) round away from zero.
    const HALF_PERCENT: i128 = 50;

    // ========================================================================
    // Construction
    // ========================================================================

    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Create from an exact centavo count.
    #[inline]
    pub const fn from_centavos(centavos: i64) -> Self {
        Self(centavos)
    }

    /// Create from a major-unit amount, rounding to the nearest centavo
    /// (half away from zero).
    ///
    /// This is the only place a float is turned into money; no later
    /// operation depends on it.
    ///
    /// # Example
    /// ```
    /// use txova_types::money::Money;
    ///
    /// let total = Money::from_mzn(0.1) + Money::from_mzn(0.2);
    /// assert_eq!(total.centavos(), 30);
    /// ```
    #[inline]
    pub fn from_mzn(mzn: f64) -> Self {
        Self(round_centavos(mzn * Self::CENTAVOS_PER_MZN as f64))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub const fn centavos(self) -> i64 {
        self.0
    }

    /// The amount in MZN as a float. For display only; never feed this
    /// back into a calculation.
    #[inline]
    pub fn to_mzn(self) -> f64 {
        self.0 as f64 / Self::CENTAVOS_PER_MZN as f64
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Absolute value. `Money::MIN.abs()` wraps to `Money::MIN`.
    #[inline]
    pub const fn abs(self) -> Self {
        Self(self.0.wrapping_abs())
    }

    /// Negation. `Money::MIN.negate()` wraps to `Money::MIN`.
    #[inline]
    pub const fn negate(self) -> Self {
        Self(self.0.wrapping_neg())
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition. Returns `None` on overflow.
    #[inline]
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.0.checked_add(rhs.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on overflow.
    #[inline]
    pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
        match self.0.checked_sub(rhs.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Multiply by a whole number. Exact, no rounding.
    #[inline]
    pub const fn multiply_int(self, factor: i64) -> Self {
        Self(self.0.wrapping_mul(factor))
    }

    /// Multiply by a fractional factor, rounding the result to the nearest
    /// centavo (half away from zero).
    #[inline]
    pub fn multiply(self, factor: f64) -> Self {
        Self(round_centavos(self.0 as f64 * factor))
    }

    /// Compute `rate` percent of the amount.
    ///
    /// The remainder of `amount × rate / 100` rounds the result away from
    /// zero when its magnitude is at least 50.
    ///
    /// # Errors
    /// Returns `InvalidPercentage` if `rate` is outside `[0, 100]`.
    pub fn percentage(self, rate: i64) -> MoneyResult<Self> {
        if !(0..=100).contains(&rate) {
            return Err(MoneyError::InvalidPercentage);
        }

        // i128 keeps the intermediate product exact
        let product = self.0 as i128 * rate as i128;
        let mut result = product / 100;
        let remainder = product % 100;

        if remainder >= Self::HALF_PERCENT {
            result += 1;
        } else if remainder <= -Self::HALF_PERCENT {
            result -= 1;
        }

        // |result| <= |amount| because rate <= 100
        Ok(Self(result as i64))
    }

    /// Like [`Money::percentage`], but panics on an invalid rate.
    ///
    /// For rates fixed at compile time only.
    pub fn must_percentage(self, rate: i64) -> Self {
        self.percentage(rate).unwrap_or_else(|err| panic!("{}", err))
    }

    /// Partition the amount into `n` parts that sum exactly to the amount.
    ///
    /// Every part gets `floor(amount / n)`; the leftover centavos (always in
    /// `[0, n)`) go one each to the first parts in order. Negative amounts
    /// follow the same rule, so `-105` split 4 ways is `[-26, -26, -26, -27]`.
    ///
    /// # Errors
    /// Returns `InvalidSplitCount` if `n` is zero or negative.
    pub fn split(self, n: i64) -> MoneyResult<Vec<Self>> {
        if n <= 0 {
            return Err(MoneyError::InvalidSplitCount);
        }

        // Euclidean division: floor for positive n, remainder in [0, n)
        let base = self.0.div_euclid(n);
        let remainder = self.0.rem_euclid(n);

        if remainder > 0 {
            tracing::trace!(
                centavos = self.0,
                parts = n,
                remainder,
                "distributing split remainder"
            );
        }

        Ok((0..n)
            .map(|i| Self(if i < remainder { base + 1 } else { base }))
            .collect())
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.wrapping_add(rhs.0))
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.wrapping_sub(rhs.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<Money> for i64 {
    fn from(m: Money) -> Self {
        m.0
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl Money {
    /// The amount without the currency suffix, e.g. `"-150.50"`.
    pub fn format_amount(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        // unsigned_abs keeps i64::MIN printable
        let magnitude = self.0.unsigned_abs();
        let per = Self::CENTAVOS_PER_MZN as u64;
        format!("{}{}.{:02}", sign, magnitude / per, magnitude % per)
    }
}

impl fmt::Display for Money {
    /// Canonical text form, e.g. `"150.00 MZN"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.format_amount(), Self::CURRENCY_CODE)
    }
}

impl fmt::Debug for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Money({}, centavos={})", self, self.0)
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl Money {
    /// Convert from a major-unit `Decimal`, rounding to the nearest centavo
    /// (half away from zero).
    ///
    /// # Errors
    /// Returns `InvalidAmount` if the value does not fit in i64 centavos.
    pub fn from_decimal(d: Decimal) -> MoneyResult<Self> {
        d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|scaled| scaled.to_i64())
            .map(Self)
            .ok_or_else(|| MoneyError::invalid_amount("decimal out of range"))
    }

    /// Exact major-unit `Decimal` with two decimal places.
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, 2)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl Money {
    /// Parse any of the accepted text forms.
    ///
    /// # Examples
    /// - `"150.00 MZN"`, `"150.00MZN"`, `"150.00"` -> 15000 centavos
    /// - `"150.5"` -> 15050 (one minor digit is right-padded)
    /// - `"150.555"` -> 15055 (extra minor digits are truncated)
    /// - `"-0.50"` -> -50
    /// - `"15000"` -> 15000 (no point: a bare centavo count)
    /// - `""` -> 0
    ///
    /// # Errors
    /// Returns `InvalidAmount` for anything else.
    pub fn parse(s: &str) -> MoneyResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::ZERO);
        }

        let s = s
            .strip_suffix(" MZN")
            .or_else(|| s.strip_suffix(Self::CURRENCY_CODE))
            .unwrap_or(s)
            .trim();

        match s.split_once('.') {
            Some((major, minor)) => Self::parse_decimal(major, minor),
            None => s
                .parse::<i64>()
                .map(Self)
                .map_err(|e| MoneyError::invalid_amount(e.to_string())),
        }
    }

    fn parse_decimal(major: &str, minor: &str) -> MoneyResult<Self> {
        if minor.contains('.') {
            return Err(MoneyError::invalid_amount("more than one decimal point"));
        }

        // Read the sign from the text: "-0.50" has a major part of zero
        let is_negative = major.starts_with('-');

        let major: i64 = major
            .parse()
            .map_err(|_| MoneyError::invalid_amount("invalid MZN part"))?;

        if !minor.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MoneyError::invalid_amount("invalid centavos part"));
        }

        // Pad to two digits or truncate past two
        let digits = minor.as_bytes();
        let tens = digits.first().map_or(0, |d| (d - b'0') as i64);
        let units = digits.get(1).map_or(0, |d| (d - b'0') as i64);
        let cents = tens * 10 + units;

        let scaled = major
            .checked_mul(Self::CENTAVOS_PER_MZN)
            .ok_or_else(|| MoneyError::invalid_amount("amount out of range"))?;
        let centavos = if is_negative {
            scaled.checked_sub(cents)
        } else {
            scaled.checked_add(cents)
        };

        centavos
            .map(Self)
            .ok_or_else(|| MoneyError::invalid_amount("amount out of range"))
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ============================================================================
// Storage
// ============================================================================

impl Storable for Money {
    type Error = MoneyError;

    /// Centavos as a 64-bit integer.
    fn to_storage(&self) -> StorageValue {
        StorageValue::Int64(self.0)
    }

    /// Accepts any integer width, a float (truncated toward zero), or a
    /// centavo count as text or bytes. Null decodes to zero.
    fn from_storage(value: &StorageValue) -> Result<Self, Self::Error> {
        match value {
            StorageValue::Null => Ok(Self::ZERO),
            StorageValue::Int16(v) => Ok(Self(i64::from(*v))),
            StorageValue::Int32(v) => Ok(Self(i64::from(*v))),
            StorageValue::Int64(v) => Ok(Self(*v)),
            StorageValue::Float64(v) => {
                // i64::MAX as f64 rounds up to 2^63, hence the strict bound
                if v.is_finite() && *v >= i64::MIN as f64 && *v < i64::MAX as f64 {
                    Ok(Self(v.trunc() as i64))
                } else {
                    Err(MoneyError::invalid_amount(format!("{} out of range", v)))
                }
            }
            StorageValue::Text(s) => Self::parse_centavos(s),
            StorageValue::Bytes(b) => std::str::from_utf8(b)
                .map_err(|e| MoneyError::invalid_amount(e.to_string()))
                .and_then(Self::parse_centavos),
            other => {
                tracing::debug!(source_type = other.type_name(), "rejected money storage value");
                Err(MoneyError::UnsupportedSource(other.type_name()))
            }
        }
    }
}

impl Money {
    fn parse_centavos(s: &str) -> MoneyResult<Self> {
        s.parse::<i64>()
            .map(Self)
            .map_err(|e| MoneyError::invalid_amount(e.to_string()))
    }
}

// ============================================================================
// Serde
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Money {
    /// A bare JSON integer of centavos.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Money {
    /// A bare JSON integer of centavos, or `null` for zero.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let centavos = <Option<i64> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(centavos.map_or(Self::ZERO, Self))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn c(centavos: i64) -> Money {
        Money::from_centavos(centavos)
    }

    #[test]
    fn test_constants() {
        assert_eq!(Money::CENTAVOS_PER_MZN, 100);
        assert_eq!(Money::ZERO.centavos(), 0);
        assert_eq!(Money::zero(), Money::default());
        assert_eq!(Money::MAX.centavos(), i64::MAX);
    }

    #[test]
    fn test_from_mzn() {
        let cases = [
            (0.0, 0),
            (150.0, 15000),
            (150.50, 15050),
            (150.555, 15056),
            (150.554, 15055),
            (-150.50, -15050),
            (0.01, 1),
            (50000.00, 5_000_000),
        ];
        for (mzn, want) in cases {
            assert_eq!(Money::from_mzn(mzn).centavos(), want, "from_mzn({})", mzn);
        }
    }

    #[test]
    fn test_to_mzn() {
        assert_eq!(c(15050).to_mzn(), 150.50);
        assert_eq!(c(-15050).to_mzn(), -150.50);
        assert_eq!(c(0).to_mzn(), 0.0);
    }

    #[test]
    fn test_precision_safety() {
        let total = Money::from_mzn(0.1) + Money::from_mzn(0.2);
        assert_eq!(total, c(30));
        assert_eq!(total.to_string(), "0.30 MZN");

        let mut acc = Money::ZERO;
        for _ in 0..1000 {
            acc += Money::from_mzn(0.01);
        }
        assert_eq!(acc, c(1000));
    }

    #[test]
    fn test_add_sub() {
        assert_eq!(c(15000) + c(5050), c(20050));
        assert_eq!(c(15000) - c(20000), c(-5000));
        let mut m = c(100);
        m -= c(30);
        assert_eq!(m, c(70));
    }

    #[test]
    fn test_add_wraps_on_overflow() {
        assert_eq!(Money::MAX + c(1), Money::MIN);
        assert_eq!(Money::MIN - c(1), Money::MAX);
    }

    #[test]
    fn test_checked_add_sub() {
        assert_eq!(c(1).checked_add(c(2)), Some(c(3)));
        assert_eq!(Money::MAX.checked_add(c(1)), None);
        assert_eq!(Money::MIN.checked_sub(c(1)), None);
    }

    #[test]
    fn test_multiply() {
        let cases = [
            (15000, 1.0, 15000),
            (15000, 0.0, 0),
            (15000, 2.0, 30000),
            (15000, 0.5, 7500),
            (15001, 0.5, 7501),
            (-15001, 0.5, -7501),
            (15000, 0.333, 4995),
            (15000, -1.0, -15000),
            (-15000, 2.0, -30000),
        ];
        for (amount, factor, want) in cases {
            assert_eq!(c(amount).multiply(factor), c(want), "{} * {}", amount, factor);
        }
    }

    #[test]
    fn test_multiply_int() {
        assert_eq!(c(15000).multiply_int(1), c(15000));
        assert_eq!(c(15000).multiply_int(0), c(0));
        assert_eq!(c(15000).multiply_int(-2), c(-30000));
    }

    #[test]
    fn test_percentage() {
        assert_eq!(c(10000).percentage(15).unwrap(), c(1500));
        assert_eq!(c(25000).percentage(15).unwrap(), c(3750));
        assert_eq!(c(10000).percentage(100).unwrap(), c(10000));
        assert_eq!(c(10000).percentage(0).unwrap(), c(0));
        // .5 remainder rounds away from zero
        assert_eq!(c(10001).percentage(50).unwrap(), c(5001));
        assert_eq!(c(-10001).percentage(50).unwrap(), c(-5001));
        assert_eq!(c(1).percentage(49).unwrap(), c(0));
        assert_eq!(Money::MAX.percentage(100).unwrap(), Money::MAX);
    }

    #[test]
    fn test_percentage_invalid_rate() {
        assert_eq!(c(10000).percentage(-1), Err(MoneyError::InvalidPercentage));
        assert_eq!(c(10000).percentage(101), Err(MoneyError::InvalidPercentage));
    }

    #[test]
    fn test_must_percentage() {
        assert_eq!(c(10000).must_percentage(15), c(1500));
    }

    #[test]
    #[should_panic(expected = "percentage must be between 0 and 100")]
    fn test_must_percentage_panics() {
        c(10000).must_percentage(-1);
    }

    #[test]
    fn test_split() {
        assert_eq!(c(10001).split(3).unwrap(), vec![c(3334), c(3334), c(3333)]);
        assert_eq!(c(10000).split(2).unwrap(), vec![c(5000), c(5000)]);
        assert_eq!(c(10000).split(1).unwrap(), vec![c(10000)]);
        assert_eq!(c(0).split(3).unwrap(), vec![c(0), c(0), c(0)]);
        assert_eq!(c(2).split(4).unwrap(), vec![c(1), c(1), c(0), c(0)]);
    }

    #[test]
    fn test_split_negative_amount() {
        let parts = c(-105).split(4).unwrap();
        assert_eq!(parts, vec![c(-26), c(-26), c(-26), c(-27)]);
        assert_eq!(parts.iter().sum::<Money>(), c(-105));
    }

    #[test]
    fn test_split_invalid_count() {
        assert_eq!(c(10000).split(0), Err(MoneyError::InvalidSplitCount));
        assert_eq!(c(10000).split(-1), Err(MoneyError::InvalidSplitCount));
    }

    #[test]
    fn test_comparison() {
        let a = c(15000);
        let b = c(10000);
        assert!(a > b);
        assert!(a >= b);
        assert!(b < a);
        assert!(b <= a);
        assert!(a >= c(15000));
        assert_eq!(a, c(15000));
        assert_ne!(a, b);
        assert_eq!(a.min(b), b);
        assert_eq!(a.max(b), a);
    }

    #[test]
    fn test_sign_queries() {
        assert!(c(0).is_zero());
        assert!(!c(1).is_zero());
        assert!(c(-1).is_negative());
        assert!(!c(0).is_negative());
        assert!(c(1).is_positive());
        assert!(!c(0).is_positive());
    }

    #[test]
    fn test_abs_and_negate() {
        assert_eq!(c(-15000).abs(), c(15000));
        assert_eq!(c(15000).abs(), c(15000));
        assert_eq!(c(15000).negate(), c(-15000));
        assert_eq!(-c(-15000), c(15000));
        assert_eq!(Money::MIN.negate(), Money::MIN);
    }

    #[test]
    fn test_display() {
        assert_eq!(c(15000).to_string(), "150.00 MZN");
        assert_eq!(c(15050).to_string(), "150.50 MZN");
        assert_eq!(c(5).to_string(), "0.05 MZN");
        assert_eq!(c(0).to_string(), "0.00 MZN");
        assert_eq!(c(-15050).to_string(), "-150.50 MZN");
        assert_eq!(c(-50).to_string(), "-0.50 MZN");
        assert_eq!(Money::MIN.to_string(), "-92233720368547758.08 MZN");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(c(15000).format_amount(), "150.00");
        assert_eq!(c(-5).format_amount(), "-0.05");
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", c(150)), "Money(1.50 MZN, centavos=150)");
    }

    #[test]
    fn test_parse() {
        let cases = [
            ("150.00 MZN", 15000),
            ("150.00MZN", 15000),
            ("  150.00 MZN  ", 15000),
            ("150.00", 15000),
            ("15000", 15000),
            ("", 0),
            ("   ", 0),
            ("-150.50 MZN", -15050),
            ("-0.50", -50),
            ("-0.05 MZN", -5),
            ("150.5", 15050),
            ("150.555", 15055),
            ("150.", 15000),
            ("-15050", -15050),
        ];
        for (input, want) in cases {
            assert_eq!(Money::parse(input).unwrap(), c(want), "parse({:?})", input);
        }
    }

    #[test]
    fn test_parse_invalid() {
        for input in ["abc", "1.2.3", "abc.00", "1.x0", "1.-5", ".50", "MZN", "12 34"] {
            let result = Money::parse(input);
            assert!(
                matches!(result, Err(MoneyError::InvalidAmount(_))),
                "parse({:?}) = {:?}",
                input,
                result
            );
        }
    }

    #[test]
    fn test_parse_out_of_range() {
        assert!(Money::parse("92233720368547759.00").is_err());
        assert_eq!(Money::parse("92233720368547758.07").unwrap(), Money::MAX);
        assert_eq!(Money::parse("-92233720368547758.08").unwrap(), Money::MIN);
    }

    #[test]
    fn test_from_str() {
        let m: Money = "12.34 MZN".parse().unwrap();
        assert_eq!(m, c(1234));
    }

    #[test]
    fn test_decimal_conversion() {
        assert_eq!(Money::from_decimal(Decimal::new(15055, 2)).unwrap(), c(15055));
        assert_eq!(Money::from_decimal(Decimal::new(150555, 3)).unwrap(), c(15056));
        assert_eq!(Money::from_decimal(Decimal::new(-150555, 3)).unwrap(), c(-15056));
        assert!(Money::from_decimal(Decimal::MAX).is_err());
        assert_eq!(c(15050).to_decimal().to_string(), "150.50");
        assert_eq!(c(-5).to_decimal(), Decimal::new(-5, 2));
    }

    #[test]
    fn test_sum() {
        let parts = [c(100), c(250), c(-50)];
        assert_eq!(parts.iter().sum::<Money>(), c(300));
        assert_eq!(parts.into_iter().sum::<Money>(), c(300));
    }

    #[test]
    fn test_storage_encode() {
        assert_eq!(c(15000).to_storage(), StorageValue::Int64(15000));
    }

    #[test]
    fn test_storage_decode() {
        let cases = [
            (StorageValue::Int64(15000), 15000),
            (StorageValue::Int32(-15000), -15000),
            (StorageValue::Int16(150), 150),
            (StorageValue::Float64(15000.0), 15000),
            (StorageValue::Float64(150.9), 150),
            (StorageValue::from("15000"), 15000),
            (StorageValue::Bytes(b"-250".to_vec()), -250),
            (StorageValue::Null, 0),
        ];
        for (value, want) in cases {
            assert_eq!(Money::from_storage(&value).unwrap(), c(want), "{}", value);
        }
    }

    #[test]
    fn test_storage_decode_errors() {
        assert_eq!(
            Money::from_storage(&StorageValue::Bool(true)),
            Err(MoneyError::UnsupportedSource("bool"))
        );
        assert!(matches!(
            Money::from_storage(&StorageValue::from("abc")),
            Err(MoneyError::InvalidAmount(_))
        ));
        assert!(matches!(
            Money::from_storage(&StorageValue::Float64(f64::NAN)),
            Err(MoneyError::InvalidAmount(_))
        ));
        assert!(matches!(
            Money::from_storage(&StorageValue::Float64(1e19)),
            Err(MoneyError::InvalidAmount(_))
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json() {
        assert_eq!(serde_json::to_string(&c(15050)).unwrap(), "15050");
        assert_eq!(serde_json::to_string(&c(-15050)).unwrap(), "-15050");
        assert_eq!(serde_json::from_str::<Money>("15050").unwrap(), c(15050));
        assert_eq!(serde_json::from_str::<Money>("-15050").unwrap(), c(-15050));
        assert_eq!(serde_json::from_str::<Money>("null").unwrap(), Money::ZERO);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_rejects_non_integers() {
        assert!(serde_json::from_str::<Money>("\"15050\"").is_err());
        assert!(serde_json::from_str::<Money>("150.5").is_err());
        assert!(serde_json::from_str::<Money>("true").is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_in_struct() {
        #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
        struct Fare {
            amount: Money,
            tip: Money,
        }

        let fare = Fare {
            amount: c(15000),
            tip: c(500),
        };
        let json = serde_json::to_string(&fare).unwrap();
        assert_eq!(json, r#"{"amount":15000,"tip":500}"#);
        assert_eq!(serde_json::from_str::<Fare>(&json).unwrap(), fare);

        let no_tip: Fare = serde_json::from_str(r#"{"amount":15000,"tip":null}"#).unwrap();
        assert_eq!(no_tip.tip, Money::ZERO);
    }

    proptest! {
        #[test]
        fn prop_split_sums_to_amount(amount in any::<i64>(), n in 1i64..64) {
            let parts = c(amount).split(n).unwrap();
            prop_assert_eq!(parts.len() as i64, n);
            let total: i128 = parts.iter().map(|p| p.centavos() as i128).sum();
            prop_assert_eq!(total, amount as i128);
            // leftmost parts are never smaller than later ones
            prop_assert!(parts.windows(2).all(|w| w[0] >= w[1]));
            prop_assert!(parts[0].centavos() - parts[parts.len() - 1].centavos() <= 1);
        }

        #[test]
        fn prop_percentage_bounded(amount in any::<i64>(), rate in 0i64..=100) {
            let part = c(amount).percentage(rate).unwrap();
            prop_assert!(part.centavos().unsigned_abs() <= amount.unsigned_abs());
            prop_assert!(part.is_zero() || part.is_negative() == (amount < 0));
        }

        #[test]
        fn prop_text_roundtrip(amount in any::<i64>()) {
            let m = c(amount);
            prop_assert_eq!(Money::parse(&m.to_string()).unwrap(), m);
            prop_assert_eq!(Money::parse(&m.format_amount()).unwrap(), m);
            prop_assert_eq!(Money::parse(&m.centavos().to_string()).unwrap(), m);
        }

        #[test]
        fn prop_storage_roundtrip(amount in any::<i64>()) {
            let m = c(amount);
            prop_assert_eq!(Money::from_storage(&m.to_storage()).unwrap(), m);
        }
    }
}
