//! Direction of travel.

use std::fmt;

/// Direction a vehicle is travelling in, as reported by the feed.
///
/// GTFS defines only 0 and 1 as valid directions, but feeds do produce
/// other values (and may omit the field entirely). The raw value is
/// preserved so that anomalous records remain stored and queryable;
/// ingest flags them with a warning instead of rejecting them.
///
/// # Examples
///
/// ```
/// use vehicle_server::domain::DirectionId;
///
/// assert!(DirectionId::OUTBOUND.is_valid());
/// assert!(DirectionId::INBOUND.is_valid());
/// assert!(!DirectionId::UNKNOWN.is_valid());
/// assert!(!DirectionId::new(2).is_valid());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DirectionId(u8);

impl DirectionId {
    /// Outbound travel (GTFS direction 0).
    pub const OUTBOUND: DirectionId = DirectionId(0);

    /// Inbound travel (GTFS direction 1).
    pub const INBOUND: DirectionId = DirectionId(1);

    /// Sentinel for feeds that omit the direction field.
    pub const UNKNOWN: DirectionId = DirectionId(u8::MAX);

    /// Wrap a raw direction value without validation.
    pub const fn new(raw: u8) -> Self {
        DirectionId(raw)
    }

    /// Wrap an optional raw value, mapping absence to [`Self::UNKNOWN`].
    pub fn from_raw(raw: Option<u8>) -> Self {
        raw.map(DirectionId).unwrap_or(Self::UNKNOWN)
    }

    /// Returns the raw value as reported by the feed.
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Whether this is one of the two directions GTFS defines.
    pub const fn is_valid(self) -> bool {
        self.0 <= 1
    }
}

impl fmt::Debug for DirectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DirectionId({})", self.0)
    }
}

impl fmt::Display for DirectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
