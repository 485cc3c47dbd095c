//! Static filename lookup table.

use crate::models::CertificateKey;

/// Known signing files and the key each one is published under.
pub const CERTIFICATE_FILES: &[(&str, CertificateKey)] = &[
    (
        "Tasktivity_App_Store_distribution.mobileprovision",
        CertificateKey::ProvisioningProfile,
    ),
    ("Certificates.p12", CertificateKey::SigningCertificate),
    ("MacOSCertificates.p12", CertificateKey::MacSigningCertificate),
    (
        "Tasktivity_Mac_App_Store_distribution.provisionprofile",
        CertificateKey::MacProvisioningProfile,
    ),
];

/// Returns the key for a file name. Exact, case-sensitive match only.
pub fn match_filename(filename: &str) -> Option<CertificateKey> {
    CERTIFICATE_FILES
        .iter()
        .find(|(name, _)| *name == filename)
        .map(|(_, key)| *key)
}

/// Returns the file name expected for a key.
pub fn filename_for(key: CertificateKey) -> &'static str {
    match key {
        CertificateKey::ProvisioningProfile => "Tasktivity_App_Store_distribution.mobileprovision",
        CertificateKey::SigningCertificate => "Certificates.p12",
        CertificateKey::MacSigningCertificate => "MacOSCertificates.p12",
        CertificateKey::MacProvisioningProfile => {
            "Tasktivity_Mac_App_Store_distribution.provisionprofile"
        }
    }
}

/// All file names the encoder looks for.
pub fn known_filenames() -> impl Iterator<Item = &'static str> {
    CERTIFICATE_FILES.iter().map(|(name, _)| *name)
}
