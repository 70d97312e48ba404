//! Fixed widths of AMQP primitive payloads, and the thresholds that decide short vs. long form.

/// Width in bytes of a UUID payload (no constructor).
pub(crate) const UUID_WIDTH: usize = 16;

/// Width in bytes of a timestamp payload (no constructor).
pub(crate) const TIMESTAMP_WIDTH: usize = 8;

/// Largest encoded length a `binary`/`string`/`symbol` payload may have and still use the
/// 1-byte-length short form (`vbin8`/`str8`/`sym8`). The length itself is the size field, so
/// this is simply the largest value a `u8` can hold.
pub(crate) const VARIABLE_WIDTH_SHORT_MAX: usize = u8::MAX as usize;

/// Largest byte length a compound's element body (list/map) or element-constructor-plus-payload
/// (array) may have and still use the short form. The wire size field is this value plus 1 (the
/// count field) for list/map, or plus 1 for array — one byte short of `u8::MAX` because the
/// size field written to the wire is `body_len + 1`, which must itself still fit in a `u8`.
pub(crate) const COMPOUND_BODY_SHORT_MAX: usize = u8::MAX as usize - 1;

/// Largest element count a list/map/array may have and still use the short form, independent of
/// the byte-length check above.
pub(crate) const SHORT_FORM_COUNT_MAX: usize = u8::MAX as usize - 1;
