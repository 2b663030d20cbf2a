//! ECI Registry
//!
//! Maps canonical encoding names to their Extended Channel Interpretation
//! designator values. A caller who names a non-default encoding gets an
//! FLG(n) escape (built by [`crate::sequencer::eci_escape_tokens`]) prefixed
//! onto the token stream, carrying that designator's decimal digits.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::error::{Error, Result};

static REGISTRY: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    HashMap::from([
        ("iso8859-1", 3),
        ("iso8859-2", 4),
        ("iso8859-3", 5),
        ("iso8859-4", 6),
        ("iso8859-5", 7),
        ("iso8859-6", 8),
        ("iso8859-7", 9),
        ("iso8859-8", 10),
        ("iso8859-9", 11),
        ("iso8859-10", 12),
        ("iso8859-11", 13),
        ("iso8859-13", 15),
        ("iso8859-14", 16),
        ("iso8859-15", 17),
        ("iso8859-16", 18),
        ("shift-jis", 20),
        ("cp1250", 21),
        ("cp1251", 22),
        ("cp1252", 23),
        ("cp1256", 24),
        ("utf-16-be", 25),
        ("utf-8", 26),
        ("us-ascii", 27),
        ("big5", 28),
        ("gb2312", 29),
        ("euc-kr", 30),
    ])
});

/// Resolve a canonical encoding name to its ECI designator value.
pub fn lookup(name: &str) -> Result<u32> {
    REGISTRY
        .get(name)
        .copied()
        .ok_or_else(|| Error::UnknownEncoding(name.to_string()))
}
