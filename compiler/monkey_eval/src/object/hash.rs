//! Hash keys and hash objects.

use std::fmt;

use rustc_hash::FxHashMap;

use super::{Object, ObjectKind};

/// FNV-1a offset basis (64-bit).
const FNV_OFFSET_BASIS: u64 = 14_695_981_039_346_656_037;

/// FNV-1a prime (64-bit).
const FNV_PRIME: u64 = 1_099_511_628_211;

fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for &byte in bytes {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Identity of a hashable value.
///
/// Two objects map to the same key exactly when they are the same kind and
/// hold equal values. String keys are a 64-bit FNV-1a digest of the bytes;
/// distinct strings that collide would share a slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct HashKey {
    pub kind: ObjectKind,
    pub value: u64,
}

impl HashKey {
    #[expect(
        clippy::cast_sign_loss,
        reason = "two's-complement reinterpretation keeps every i64 distinct"
    )]
    pub fn integer(value: i64) -> Self {
        HashKey {
            kind: ObjectKind::Integer,
            value: value as u64,
        }
    }

    pub fn boolean(value: bool) -> Self {
        HashKey {
            kind: ObjectKind::Boolean,
            value: u64::from(value),
        }
    }

    pub fn string(value: &str) -> Self {
        HashKey {
            kind: ObjectKind::String,
            value: fnv1a(value.as_bytes()),
        }
    }
}

/// A stored entry: the original key object and its value.
#[derive(Clone, Debug, PartialEq)]
pub struct HashPair {
    pub key: Object,
    pub value: Object,
}

/// A hash map value. Iteration order is unspecified.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HashObject {
    pairs: FxHashMap<HashKey, HashPair>,
}

impl HashObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert, replacing any entry with an equal key.
    pub fn insert(&mut self, key: HashKey, pair: HashPair) {
        self.pairs.insert(key, pair);
    }

    pub fn get(&self, key: &HashKey) -> Option<&Object> {
        self.pairs.get(key).map(|pair| &pair.value)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> impl Iterator<Item = &HashPair> {
        self.pairs.values()
    }
}

impl fmt::Display for HashObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, pair) in self.pairs().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", pair.key, pair.value)?;
        }
        f.write_str("}")
    }
}
