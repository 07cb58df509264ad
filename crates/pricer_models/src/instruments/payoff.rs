//! Touch payoff taxonomy.
//!
//! Twelve single-barrier touch payoffs built from three axes:
//! barrier direction, payment timing, and knock sense crossed with the
//! delivered asset. `AtHit` timing only exists for knock-in payoffs.

use std::fmt;
use std::str::FromStr;

use super::error::InstrumentError;

/// Side from which the barrier is approached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BarrierDirection {
    /// Barrier below spot; touched from above.
    Down,
    /// Barrier above spot; touched from below.
    Up,
}

impl BarrierDirection {
    /// Whether `price` is at or through `barrier` for this direction.
    ///
    /// The comparison is inclusive: a price exactly on the barrier counts
    /// as a touch.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::instruments::BarrierDirection;
    ///
    /// assert!(BarrierDirection::Down.is_breached(90.0, 90.0));
    /// assert!(!BarrierDirection::Down.is_breached(90.1, 90.0));
    /// assert!(BarrierDirection::Up.is_breached(111.0, 110.0));
    /// ```
    #[inline]
    pub fn is_breached(self, price: f64, barrier: f64) -> bool {
        match self {
            BarrierDirection::Down => price <= barrier,
            BarrierDirection::Up => price >= barrier,
        }
    }

    /// Lower-case name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            BarrierDirection::Down => "down",
            BarrierDirection::Up => "up",
        }
    }
}

impl fmt::Display for BarrierDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// When the payment is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentTiming {
    /// At the first instant the barrier is touched.
    AtHit,
    /// At expiry.
    AtExpiry,
}

/// Whether the touch activates or cancels the payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnockType {
    /// Pays only if the barrier is touched.
    In,
    /// Pays only if the barrier is never touched.
    Out,
}

/// What is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayoffAsset {
    /// A fixed cash amount.
    Cash,
    /// The underlying: worth the barrier level at hit, `S(T)` at expiry.
    Asset,
}

/// Single-barrier touch payoff type.
///
/// Codes 1 to 12 follow the declaration order and are stable.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{BarrierDirection, KnockType, TouchPayoffType};
///
/// let payoff: TouchPayoffType = "UP_AND_OUT_CASH_OR_NOTHING".parse().unwrap();
/// assert_eq!(payoff.direction(), BarrierDirection::Up);
/// assert_eq!(payoff.knock(), KnockType::Out);
/// assert_eq!(payoff.code(), 6);
/// assert_eq!(TouchPayoffType::try_from(6u8).unwrap(), payoff);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum TouchPayoffType {
    /// Spot above barrier; pays cash at first hit.
    DownAndInCashAtHit,
    /// Spot below barrier; pays cash at first hit.
    UpAndInCashAtHit,
    /// Spot above barrier; pays cash at expiry if touched.
    DownAndInCashAtExpiry,
    /// Spot below barrier; pays cash at expiry if touched.
    UpAndInCashAtExpiry,
    /// Spot above barrier; pays cash at expiry if never touched.
    DownAndOutCashOrNothing,
    /// Spot below barrier; pays cash at expiry if never touched.
    UpAndOutCashOrNothing,
    /// Spot above barrier; delivers the asset (worth H) at first hit.
    DownAndInAssetAtHit,
    /// Spot below barrier; delivers the asset (worth H) at first hit.
    UpAndInAssetAtHit,
    /// Spot above barrier; pays S(T) at expiry if touched.
    DownAndInAssetAtExpiry,
    /// Spot below barrier; pays S(T) at expiry if touched.
    UpAndInAssetAtExpiry,
    /// Spot above barrier; pays S(T) at expiry if never touched.
    DownAndOutAssetOrNothing,
    /// Spot below barrier; pays S(T) at expiry if never touched.
    UpAndOutAssetOrNothing,
}

impl TouchPayoffType {
    /// All variants in code order.
    pub const ALL: [TouchPayoffType; 12] = [
        TouchPayoffType::DownAndInCashAtHit,
        TouchPayoffType::UpAndInCashAtHit,
        TouchPayoffType::DownAndInCashAtExpiry,
        TouchPayoffType::UpAndInCashAtExpiry,
        TouchPayoffType::DownAndOutCashOrNothing,
        TouchPayoffType::UpAndOutCashOrNothing,
        TouchPayoffType::DownAndInAssetAtHit,
        TouchPayoffType::UpAndInAssetAtHit,
        TouchPayoffType::DownAndInAssetAtExpiry,
        TouchPayoffType::UpAndInAssetAtExpiry,
        TouchPayoffType::DownAndOutAssetOrNothing,
        TouchPayoffType::UpAndOutAssetOrNothing,
    ];

    /// Barrier direction.
    pub fn direction(self) -> BarrierDirection {
        use TouchPayoffType::*;
        match self {
            DownAndInCashAtHit
            | DownAndInCashAtExpiry
            | DownAndOutCashOrNothing
            | DownAndInAssetAtHit
            | DownAndInAssetAtExpiry
            | DownAndOutAssetOrNothing => BarrierDirection::Down,
            UpAndInCashAtHit
            | UpAndInCashAtExpiry
            | UpAndOutCashOrNothing
            | UpAndInAssetAtHit
            | UpAndInAssetAtExpiry
            | UpAndOutAssetOrNothing => BarrierDirection::Up,
        }
    }

    /// Payment timing.
    pub fn timing(self) -> PaymentTiming {
        use TouchPayoffType::*;
        match self {
            DownAndInCashAtHit | UpAndInCashAtHit | DownAndInAssetAtHit | UpAndInAssetAtHit => {
                PaymentTiming::AtHit
            }
            DownAndInCashAtExpiry
            | UpAndInCashAtExpiry
            | DownAndOutCashOrNothing
            | UpAndOutCashOrNothing
            | DownAndInAssetAtExpiry
            | UpAndInAssetAtExpiry
            | DownAndOutAssetOrNothing
            | UpAndOutAssetOrNothing => PaymentTiming::AtExpiry,
        }
    }

    /// Knock sense.
    pub fn knock(self) -> KnockType {
        use TouchPayoffType::*;
        match self {
            DownAndOutCashOrNothing
            | UpAndOutCashOrNothing
            | DownAndOutAssetOrNothing
            | UpAndOutAssetOrNothing => KnockType::Out,
            DownAndInCashAtHit
            | UpAndInCashAtHit
            | DownAndInCashAtExpiry
            | UpAndInCashAtExpiry
            | DownAndInAssetAtHit
            | UpAndInAssetAtHit
            | DownAndInAssetAtExpiry
            | UpAndInAssetAtExpiry => KnockType::In,
        }
    }

    /// Delivered asset.
    pub fn asset(self) -> PayoffAsset {
        use TouchPayoffType::*;
        match self {
            DownAndInCashAtHit
            | UpAndInCashAtHit
            | DownAndInCashAtExpiry
            | UpAndInCashAtExpiry
            | DownAndOutCashOrNothing
            | UpAndOutCashOrNothing => PayoffAsset::Cash,
            DownAndInAssetAtHit
            | UpAndInAssetAtHit
            | DownAndInAssetAtExpiry
            | UpAndInAssetAtExpiry
            | DownAndOutAssetOrNothing
            | UpAndOutAssetOrNothing => PayoffAsset::Asset,
        }
    }

    /// Whether the payoff is asset-or-nothing.
    #[inline]
    pub fn is_asset(self) -> bool {
        self.asset() == PayoffAsset::Asset
    }

    /// The expiry-timed payoff with the opposite knock sense, same
    /// direction and asset. `None` for `AtHit` payoffs.
    ///
    /// A knock-in and its complement sum to the barrier-free claim.
    pub fn complement(self) -> Option<TouchPayoffType> {
        use TouchPayoffType::*;
        match self {
            DownAndInCashAtExpiry => Some(DownAndOutCashOrNothing),
            UpAndInCashAtExpiry => Some(UpAndOutCashOrNothing),
            DownAndOutCashOrNothing => Some(DownAndInCashAtExpiry),
            UpAndOutCashOrNothing => Some(UpAndInCashAtExpiry),
            DownAndInAssetAtExpiry => Some(DownAndOutAssetOrNothing),
            UpAndInAssetAtExpiry => Some(UpAndOutAssetOrNothing),
            DownAndOutAssetOrNothing => Some(DownAndInAssetAtExpiry),
            UpAndOutAssetOrNothing => Some(UpAndInAssetAtExpiry),
            DownAndInCashAtHit | UpAndInCashAtHit | DownAndInAssetAtHit | UpAndInAssetAtHit => {
                None
            }
        }
    }

    /// Stable integer code (1-12).
    pub fn code(self) -> u8 {
        self as u8 + 1
    }

    /// Canonical upper-case name.
    pub fn name(self) -> &'static str {
        use TouchPayoffType::*;
        match self {
            DownAndInCashAtHit => "DOWN_AND_IN_CASH_AT_HIT",
            UpAndInCashAtHit => "UP_AND_IN_CASH_AT_HIT",
            DownAndInCashAtExpiry => "DOWN_AND_IN_CASH_AT_EXPIRY",
            UpAndInCashAtExpiry => "UP_AND_IN_CASH_AT_EXPIRY",
            DownAndOutCashOrNothing => "DOWN_AND_OUT_CASH_OR_NOTHING",
            UpAndOutCashOrNothing => "UP_AND_OUT_CASH_OR_NOTHING",
            DownAndInAssetAtHit => "DOWN_AND_IN_ASSET_AT_HIT",
            UpAndInAssetAtHit => "UP_AND_IN_ASSET_AT_HIT",
            DownAndInAssetAtExpiry => "DOWN_AND_IN_ASSET_AT_EXPIRY",
            UpAndInAssetAtExpiry => "UP_AND_IN_ASSET_AT_EXPIRY",
            DownAndOutAssetOrNothing => "DOWN_AND_OUT_ASSET_OR_NOTHING",
            UpAndOutAssetOrNothing => "UP_AND_OUT_ASSET_OR_NOTHING",
        }
    }
}

impl TryFrom<u8> for TouchPayoffType {
    type Error = InstrumentError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1..=12 => Ok(Self::ALL[usize::from(code - 1)]),
            _ => Err(InstrumentError::UnknownPayoffType {
                value: code.to_string(),
            }),
        }
    }
}

impl FromStr for TouchPayoffType {
    type Err = InstrumentError;

    /// Parses the canonical name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| InstrumentError::UnknownPayoffType {
                value: s.to_string(),
            })
    }
}

impl fmt::Display for TouchPayoffType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
