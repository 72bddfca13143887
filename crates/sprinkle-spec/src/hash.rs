//! Seed reduction and output digests.
//!
//! Determinism is keyed by `(seed, width, height)`: the seed string is
//! combined with the literal rendered dimensions into a composite string and
//! reduced to a 32-bit generator seed with FNV-1a. Rendered SVG documents are
//! digested with BLAKE3 for byte-identity checks.

/// FNV-1a 32-bit offset basis.
pub const FNV_OFFSET_BASIS: u32 = 2_166_136_261;

/// FNV-1a 32-bit prime.
pub const FNV_PRIME: u32 = 16_777_619;

/// Reduces a string to a 32-bit unsigned hash with FNV-1a.
///
/// Order-dependent: each character's code point is XORed into the running
/// state, which is then multiplied by the FNV prime with wrapping 32-bit
/// arithmetic.
pub fn fnv1a_32(input: &str) -> u32 {
    let mut hash = FNV_OFFSET_BASIS;
    for ch in input.chars() {
        hash ^= ch as u32;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Composes the generator seed for one render pass.
///
/// The composite string is `"{seed}|{width}x{height}"`, so the same seed at
/// a different rendered size yields an unrelated generator stream.
pub fn compose_seed(seed: &str, width: u32, height: u32) -> u32 {
    fnv1a_32(&format!("{}|{}x{}", seed, width, height))
}

/// BLAKE3 hex digest of a rendered SVG document.
pub fn scene_digest(svg: &str) -> String {
    blake3::hash(svg.as_bytes()).to_hex().to_string()
}
