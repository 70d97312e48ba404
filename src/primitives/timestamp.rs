//! The `timestamp` primitive: a signed 64-bit count of milliseconds since the Unix epoch.

/// An absolute point in time.
///
/// encoding name = "ms64", code = 0x83, category = fixed, width = 8, label = "64-bit
/// two's-complement integer representing milliseconds since the unix epoch".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Creates a new [`Timestamp`] from a millisecond offset from the Unix epoch.
    pub fn from_milliseconds(milliseconds: i64) -> Self {
        Self(milliseconds)
    }

    /// Returns the timestamp as milliseconds since the Unix epoch.
    pub fn milliseconds(&self) -> i64 {
        self.0
    }

    /// Consumes the wrapper, returning the inner millisecond count.
    pub fn into_inner(self) -> i64 {
        self.0
    }
}

impl From<i64> for Timestamp {
    fn from(val: i64) -> Self {
        Self(val)
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::DateTime<chrono::Utc>> for Timestamp {
    /// Converts an absolute civil time into `floor((t - epoch) / 1ms)`, matching
    /// `chrono`'s own floor-towards-negative-infinity `timestamp_millis`.
    fn from(val: chrono::DateTime<chrono::Utc>) -> Self {
        Self(val.timestamp_millis())
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<Timestamp> for chrono::DateTime<chrono::Utc> {
    type Error = crate::error::Error;

    /// Fails if the millisecond value falls outside the range `chrono` can represent as a civil
    /// time (roughly ±262,000 years), which is narrower than `i64`'s own millisecond range.
    fn try_from(val: Timestamp) -> Result<Self, Self::Error> {
        use chrono::TimeZone;
        chrono::Utc
            .timestamp_millis_opt(val.0)
            .single()
            .ok_or_else(|| crate::error::Error::range("timestamp", val.0, "milliseconds not representable as a chrono civil time"))
    }
}
