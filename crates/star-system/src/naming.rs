//! Catalog names and name-derived seeds.

use rand::Rng;
use rand_chacha::ChaChaRng;
use uuid::Uuid;

/// Draw a catalog designation: three uppercase letters, a dash, four digits.
///
/// Provides 26³ × 10⁴ ≈ 175.8 million combinations. Uniqueness against an
/// existing set is the caller's job (see [`Universe::unused_name`](crate::Universe::unused_name)).
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
/// use star_system::{catalog_name, is_catalog_name};
///
/// let mut rng = ChaChaRng::seed_from_u64(42);
/// let name = catalog_name(&mut rng);
/// assert_eq!(name.len(), 8);
/// assert!(is_catalog_name(&name));
/// ```
pub fn catalog_name(rng: &mut ChaChaRng) -> String {
    let prefix: String = (0..3)
        .map(|_| (b'A' + rng.random_range(0..26u8)) as char)
        .collect();
    let number: u16 = rng.random_range(0..10_000);
    format!("{}-{:04}", prefix, number)
}

/// Whether `name` has the `ABC-1234` catalog shape.
pub fn is_catalog_name(name: &str) -> bool {
    let bytes = name.as_bytes();
    bytes.len() == 8
        && bytes[..3].iter().all(u8::is_ascii_uppercase)
        && bytes[3] == b'-'
        && bytes[4..].iter().all(u8::is_ascii_digit)
}

/// Derive a u64 RNG seed from a human-readable name
///
/// The name is hashed into a UUID v5 and the first 8 bytes are used, so the
/// same name always reproduces the same system.
pub fn seed_from_name(name: &str) -> u64 {
    Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes())
        .as_u64_pair()
        .0
}
