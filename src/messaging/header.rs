//! `Header`: the first optional section of a message, carrying transport-level delivery hints
//! (§3.2.1, §6 "Header"). Grounded in `fe2o3-amqp-types::messaging::Header`, with the
//! `SerializeComposite`/`DeserializeComposite` derive stripped in favor of the explicit list
//! encoder in [`crate::encode::payload`] — every field stays `Option` rather than defaulting
//! (`durable: false`, `priority: 4`, …), since an unset field always encodes as `null`, never as
//! its AMQP-defined default value.

/// Transport headers for a message (§6 "Header"). An unset field encodes as AMQP `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    /// Whether the message is durable.
    pub durable: Option<bool>,
    /// Relative message priority.
    pub priority: Option<u8>,
    /// Time-to-live, in milliseconds.
    pub ttl: Option<u32>,
    /// Whether this is the first time this message is acquired by a receiver.
    pub first_acquirer: Option<bool>,
    /// The number of prior unsuccessful delivery attempts.
    pub delivery_count: Option<u32>,
}

impl Header {
    /// Creates a builder for [`Header`].
    pub fn builder() -> Builder {
        Builder::default()
    }
}

/// Builder for [`Header`].
#[derive(Debug, Default, Clone)]
pub struct Builder {
    inner: Header,
}

impl Builder {
    /// Sets the `durable` field.
    pub fn durable(mut self, value: bool) -> Self {
        self.inner.durable = Some(value);
        self
    }

    /// Sets the `priority` field.
    pub fn priority(mut self, value: u8) -> Self {
        self.inner.priority = Some(value);
        self
    }

    /// Sets the `ttl` field, in milliseconds.
    pub fn ttl(mut self, value: u32) -> Self {
        self.inner.ttl = Some(value);
        self
    }

    /// Sets the `first_acquirer` field.
    pub fn first_acquirer(mut self, value: bool) -> Self {
        self.inner.first_acquirer = Some(value);
        self
    }

    /// Sets the `delivery_count` field.
    pub fn delivery_count(mut self, value: u32) -> Self {
        self.inner.delivery_count = Some(value);
        self
    }

    /// Builds the [`Header`].
    pub fn build(self) -> Header {
        self.inner
    }
}

impl From<Builder> for Header {
    fn from(builder: Builder) -> Self {
        builder.build()
    }
}
