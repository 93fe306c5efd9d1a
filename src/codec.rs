//! Decoding of share documents
//!
//! Shares arrive as a JSON object. The threshold sits under `keys.k` (or a
//! top-level `k`), and every member whose name is a decimal integer is one
//! share: the name is `x`, and `value` holds `y` written in radix `base`.
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2",  "value": "111" },
//!     "3": { "base": "10", "value": "12" },
//!     "6": { "base": "4",  "value": "213" }
//! }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use num_bigint::BigInt;
//! use unshroud::codec::decode_document;
//!
//! # fn main() -> anyhow::Result<()> {
//! let document = decode_document(r#"{
//!     "keys": { "n": 2, "k": 2 },
//!     "2": { "base": "16", "value": "ff" },
//!     "1": { "base": "2", "value": "1010" }
//! }"#)?;
//!
//! assert_eq!(document.threshold, 2);
//! assert_eq!(document.declared_count, Some(2));
//! assert_eq!(document.shares.as_slice()[0].y, BigInt::from(10));
//! assert_eq!(document.shares.as_slice()[1].y, BigInt::from(255));
//! # Ok(())
//! # }
//! ```

use std::collections::HashSet;
use std::fmt;

use anyhow::{Context, Result, anyhow, bail};
use num_bigint::BigInt;
use num_traits::Num;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::{Share, ShareSet};

/// Smallest radix a share value may be written in
pub const MIN_RADIX: u32 = 2;

/// Largest radix a share value may be written in (digits `0-9a-z`)
pub const MAX_RADIX: u32 = 36;

/// A decoded share document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Number of genuine shares, `k`
    pub threshold: usize,
    /// Share count announced by `keys.n`, if present
    pub declared_count: Option<usize>,
    pub shares: ShareSet,
}

/// Integer written either as a JSON number or as a decimal string
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Count {
    Number(u64),
    Text(String),
}

impl Count {
    fn to_usize(&self, field: &str) -> Result<usize> {
        match self {
            Count::Number(n) => {
                usize::try_from(*n).with_context(|| format!("'{field}' value {n} is too large"))
            }
            Count::Text(s) => s
                .trim()
                .parse()
                .with_context(|| format!("'{field}' value \"{s}\" is not a non-negative integer")),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Keys {
    n: Option<Count>,
    k: Option<Count>,
}

#[derive(Debug, Deserialize)]
struct RawDocument {
    keys: Option<Keys>,
    k: Option<Count>,
    #[serde(flatten)]
    members: Members,
}

/// Remaining top-level members in document order, repeated names included
#[derive(Debug)]
struct Members(Vec<(String, Value)>);

impl<'de> Deserialize<'de> for Members {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct MembersVisitor;

        impl<'de> Visitor<'de> for MembersVisitor {
            type Value = Members;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<Members, A::Error> {
                let mut members = Vec::new();
                while let Some(entry) = map.next_entry::<String, serde_json::Value>()? {
                    members.push(entry);
                }
                Ok(Members(members))
            }
        }

        deserializer.deserialize_map(MembersVisitor)
    }
}

#[derive(Debug, Deserialize)]
struct RawShare {
    base: Count,
    value: String,
}

/// Decodes a JSON share document
///
/// # Errors
/// Returns an error if the text is not a JSON object, no threshold is
/// present, a share member is malformed, a value is not valid in its radix,
/// or the resulting shares violate [`ShareSet`] invariants
pub fn decode_document(text: &str) -> Result<Document> {
    let raw: RawDocument =
        serde_json::from_str(text).context("Failed to parse share document as a JSON object")?;

    let threshold = raw
        .keys
        .as_ref()
        .and_then(|keys| keys.k.as_ref())
        .or(raw.k.as_ref())
        .ok_or_else(|| anyhow!("Share document has no threshold 'k'"))?
        .to_usize("k")?;

    let declared_count = raw
        .keys
        .as_ref()
        .and_then(|keys| keys.n.as_ref())
        .map(|n| n.to_usize("n"))
        .transpose()?;

    let mut shares = Vec::new();
    let mut seen = HashSet::new();
    for (name, member) in raw.members.0 {
        if !is_decimal(&name) {
            continue;
        }
        if !seen.insert(name.clone()) {
            bail!("Duplicate share \"{name}\" in document");
        }
        let share = decode_share(&name, member)
            .with_context(|| format!("Invalid share \"{name}\""))?;
        shares.push(share);
    }

    let shares = ShareSet::new(shares)?;

    Ok(Document {
        threshold,
        declared_count,
        shares,
    })
}

/// Decodes one share member named `name`
fn decode_share(name: &str, member: Value) -> Result<Share> {
    let x = BigInt::from_str_radix(name, 10).context("Share name is not a decimal integer")?;

    if !member.is_object() {
        bail!("Share must be an object with 'base' and 'value'");
    }
    let raw: RawShare =
        serde_json::from_value(member).context("Share needs 'base' and 'value'")?;

    let base = raw.base.to_usize("base")?;
    let radix = u32::try_from(base)
        .ok()
        .filter(|radix| (MIN_RADIX..=MAX_RADIX).contains(radix))
        .ok_or_else(|| anyhow!("Base {base} is outside {MIN_RADIX}..={MAX_RADIX}"))?;
    let y = decode_value(&raw.value, radix)?;

    Ok(Share { x, y })
}

/// Decodes `digits` written in `radix`, case-insensitively
///
/// # Errors
/// Returns an error if the radix is outside 2..=36, `digits` is empty, or
/// contains a character that is not a digit of the radix
///
/// # Examples
///
/// ```rust
/// use num_bigint::BigInt;
/// use unshroud::codec::decode_value;
///
/// assert_eq!(decode_value("213", 4).unwrap(), BigInt::from(39));
/// assert_eq!(decode_value("FF", 16).unwrap(), BigInt::from(255));
///
/// assert!(decode_value("102", 2).is_err());
/// assert!(decode_value("10", 37).is_err());
/// ```
pub fn decode_value(digits: &str, radix: u32) -> Result<BigInt> {
    if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
        bail!("Base {radix} is outside {MIN_RADIX}..={MAX_RADIX}");
    }
    if digits.is_empty() {
        bail!("Share value is empty");
    }
    if let Some(bad) = digits.chars().find(|c| !c.is_digit(radix)) {
        bail!("Character '{bad}' is not a base-{radix} digit in \"{digits}\"");
    }
    BigInt::from_str_radix(digits, radix)
        .with_context(|| format!("Failed to decode \"{digits}\" in base {radix}"))
}

fn is_decimal(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit())
}
