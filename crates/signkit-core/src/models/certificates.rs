//! Certificate keys and the encoded certificates record.

use serde::ser::{Serialize, SerializeMap, Serializer};

// ============================================================================
// Certificate Key
// ============================================================================

/// Semantic key a signing file is published under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CertificateKey {
    ProvisioningProfile,
    SigningCertificate,
    MacSigningCertificate,
    MacProvisioningProfile,
}

impl CertificateKey {
    /// All recognized keys.
    pub const ALL: [CertificateKey; 4] = [
        CertificateKey::ProvisioningProfile,
        CertificateKey::SigningCertificate,
        CertificateKey::MacSigningCertificate,
        CertificateKey::MacProvisioningProfile,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CertificateKey::ProvisioningProfile => "provisioning_profile",
            CertificateKey::SigningCertificate => "signing_certificate",
            CertificateKey::MacSigningCertificate => "mac_signing_certificate",
            CertificateKey::MacProvisioningProfile => "mac_provisioning_profile",
        }
    }
}

impl std::str::FromStr for CertificateKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CertificateKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("Unknown certificate key: {}", s))
    }
}

impl std::fmt::Display for CertificateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for CertificateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// ============================================================================
// Certificates Record
// ============================================================================

/// Base64 payloads keyed by certificate key.
///
/// Keeps insertion order and serializes as a JSON object. Keys whose source
/// file was not found are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CertificatesRecord {
    entries: Vec<(CertificateKey, String)>,
}

impl CertificatesRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an encoded payload, replacing any previous value for `key`
    /// in place.
    pub fn insert(&mut self, key: CertificateKey, encoded: String) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, value)) => *value = encoded,
            None => self.entries.push((key, encoded)),
        }
    }

    pub fn get(&self, key: CertificateKey) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: CertificateKey) -> bool {
        self.get(key).is_some()
    }

    /// Keys in record order.
    pub fn keys(&self) -> impl Iterator<Item = CertificateKey> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reorders entries alphabetically by key name.
    pub fn sort_keys(&mut self) {
        self.entries.sort_by_key(|(k, _)| k.as_str());
    }
}

impl Serialize for CertificatesRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key.as_str(), value)?;
        }
        map.end()
    }
}
