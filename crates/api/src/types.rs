//! Algorithm identifiers and the set type the self-test state machine uses
//!
//! Tested/passed bookkeeping is set-valued: the context records which
//! algorithms have been attempted and which passed as two [`AlgorithmSet`]
//! values. The subset and equality operations defined here are what the
//! dispatcher's fail-closed and run-once checks are written in terms of, so
//! the set semantics live in one place instead of being re-derived from raw
//! bit arithmetic at every call site.

use core::fmt;

/// Identifier for one self-testable algorithm family.
///
/// Each variant carries a distinct bit so a set of identifiers packs into a
/// single word. The declaration order is also the execution order of
/// `run_all_self_tests`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u32)]
pub enum AlgorithmId {
    /// RSASSA-PKCS1-v1_5 signature generation and verification (SHA-256)
    RsaSsa = 1 << 0,
    /// Raw RSA encryption and decryption (RSAEP/RSADP)
    RsaCrypt = 1 << 1,
    /// Deterministic ECDSA over P-256 (SHA-256)
    EcdsaP256 = 1 << 2,
    /// AES-256 in Galois/Counter Mode
    Aes256Gcm = 1 << 3,
    /// SHA-256 message digest
    Sha256 = 1 << 4,
    /// HMAC with SHA-256
    HmacSha256 = 1 << 5,
    /// HKDF extract-and-expand with SHA-256
    HkdfSha256 = 1 << 6,
}

impl AlgorithmId {
    /// Every supported algorithm, in dispatch order.
    pub const ALL: [AlgorithmId; 7] = [
        AlgorithmId::RsaSsa,
        AlgorithmId::RsaCrypt,
        AlgorithmId::EcdsaP256,
        AlgorithmId::Aes256Gcm,
        AlgorithmId::Sha256,
        AlgorithmId::HmacSha256,
        AlgorithmId::HkdfSha256,
    ];

    /// The bit this identifier occupies in an [`AlgorithmSet`].
    #[inline]
    pub const fn bit(self) -> u32 {
        self as u32
    }

    /// Stable display name for this algorithm family.
    pub const fn name(self) -> &'static str {
        match self {
            AlgorithmId::RsaSsa => "RSA_SSA",
            AlgorithmId::RsaCrypt => "RSA_CRYPT",
            AlgorithmId::EcdsaP256 => "ECDSA_P256",
            AlgorithmId::Aes256Gcm => "AES_256_GCM",
            AlgorithmId::Sha256 => "SHA_256",
            AlgorithmId::HmacSha256 => "HMAC_SHA_256",
            AlgorithmId::HkdfSha256 => "HKDF_SHA_256",
        }
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of [`AlgorithmId`] values with bitmask representation.
///
/// `tested_algo` and `self_test_result` in the self-test context are both
/// values of this type. Equality between two sets is the fail-closed check;
/// membership is the run-once check; the subset relation is the structural
/// invariant between the two fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct AlgorithmSet(u32);

impl AlgorithmSet {
    /// The empty set.
    pub const EMPTY: AlgorithmSet = AlgorithmSet(0);

    /// The set containing every supported algorithm.
    pub const ALL: AlgorithmSet = {
        let mut bits = 0;
        let mut i = 0;
        while i < AlgorithmId::ALL.len() {
            bits |= AlgorithmId::ALL[i].bit();
            i += 1;
        }
        AlgorithmSet(bits)
    };

    /// Creates an empty set.
    #[inline]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Returns the set with `id` added, leaving `self` unchanged.
    #[inline]
    pub const fn with(self, id: AlgorithmId) -> Self {
        AlgorithmSet(self.0 | id.bit())
    }

    /// Adds `id` to the set.
    #[inline]
    pub fn insert(&mut self, id: AlgorithmId) {
        self.0 |= id.bit();
    }

    /// Removes `id` from the set.
    #[inline]
    pub fn remove(&mut self, id: AlgorithmId) {
        self.0 &= !id.bit();
    }

    /// Returns true if `id` is in the set.
    #[inline]
    pub const fn contains(self, id: AlgorithmId) -> bool {
        self.0 & id.bit() != 0
    }

    /// Set union.
    #[inline]
    pub const fn union(self, other: AlgorithmSet) -> AlgorithmSet {
        AlgorithmSet(self.0 | other.0)
    }

    /// Set intersection.
    #[inline]
    pub const fn intersection(self, other: AlgorithmSet) -> AlgorithmSet {
        AlgorithmSet(self.0 & other.0)
    }

    /// Returns true if every member of `self` is also in `other`.
    #[inline]
    pub const fn is_subset_of(self, other: AlgorithmSet) -> bool {
        self.0 & !other.0 == 0
    }

    /// Returns true if the set has no members.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of members.
    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// The raw bitmask.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }
}

impl FromIterator<AlgorithmId> for AlgorithmSet {
    fn from_iter<I: IntoIterator<Item = AlgorithmId>>(iter: I) -> Self {
        let mut set = AlgorithmSet::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

impl Extend<AlgorithmId> for AlgorithmSet {
    fn extend<I: IntoIterator<Item = AlgorithmId>>(&mut self, iter: I) {
        for id in iter {
            self.insert(id);
        }
    }
}

impl IntoIterator for AlgorithmSet {
    type Item = AlgorithmId;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        Iter { set: self, pos: 0 }
    }
}

/// Iterator over the members of an [`AlgorithmSet`], in dispatch order.
#[derive(Debug, Clone)]
pub struct Iter {
    set: AlgorithmSet,
    pos: usize,
}

impl Iterator for Iter {
    type Item = AlgorithmId;

    fn next(&mut self) -> Option<AlgorithmId> {
        while self.pos < AlgorithmId::ALL.len() {
            let id = AlgorithmId::ALL[self.pos];
            self.pos += 1;
            if self.set.contains(id) {
                return Some(id);
            }
        }
        None
    }
}

impl fmt::Display for AlgorithmSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for id in *self {
            if !first {
                write!(f, ", ")?;
            }
            f.write_str(id.name())?;
            first = false;
        }
        write!(f, "}}")
    }
}

/// Digest algorithm selector passed to sign/verify, MAC and KDF adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigestAlgorithm {
    /// SHA-256
    Sha256,
    /// SHA-384
    Sha384,
    /// SHA-512
    Sha512,
}

impl DigestAlgorithm {
    /// Digest output length in bytes.
    #[inline]
    pub const fn output_size(self) -> usize {
        match self {
            DigestAlgorithm::Sha256 => 32,
            DigestAlgorithm::Sha384 => 48,
            DigestAlgorithm::Sha512 => 64,
        }
    }

    /// Stable display name.
    pub const fn name(self) -> &'static str {
        match self {
            DigestAlgorithm::Sha256 => "SHA-256",
            DigestAlgorithm::Sha384 => "SHA-384",
            DigestAlgorithm::Sha512 => "SHA-512",
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Named RSA key components loaded into a provider key object one at a
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RsaKeyField {
    /// The public modulus n
    Modulus,
    /// The public exponent e
    PublicExponent,
    /// The private exponent d
    PrivateExponent,
}

impl RsaKeyField {
    /// Stable display name.
    pub const fn name(self) -> &'static str {
        match self {
            RsaKeyField::Modulus => "n",
            RsaKeyField::PublicExponent => "e",
            RsaKeyField::PrivateExponent => "d",
        }
    }
}
