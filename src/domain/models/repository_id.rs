use uuid::{Uuid, Variant};

const HYPHENATED_LEN: usize = 36;
const HYPHEN_POSITIONS: [usize; 4] = [8, 13, 18, 23];

/// Parses a repository id written in the canonical hyphenated UUID form.
///
/// Hex digits may be upper or lower case. The version nibble must be 1–8 and
/// the variant must be RFC 4122, except for the nil and max UUIDs which are
/// always accepted. Braced, URN and simple (unhyphenated) forms are rejected.
pub fn parse_repository_id(candidate: &str) -> Option<Uuid> {
    let bytes = candidate.as_bytes();
    if bytes.len() != HYPHENATED_LEN {
        return None;
    }
    if HYPHEN_POSITIONS.iter().any(|&i| bytes[i] != b'-') {
        return None;
    }

    let uuid = Uuid::try_parse(candidate).ok()?;
    if uuid.is_nil() || uuid == Uuid::from_u128(u128::MAX) {
        return Some(uuid);
    }

    let version_ok = (1..=8).contains(&uuid.get_version_num());
    let variant_ok = uuid.get_variant() == Variant::RFC4122;
    (version_ok && variant_ok).then_some(uuid)
}

pub fn is_valid_repository_id(candidate: &str) -> bool {
    parse_repository_id(candidate).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_generated_v4() {
        let id = Uuid::new_v4().to_string();
        assert!(is_valid_repository_id(&id));
    }

    #[test]
    fn test_accepts_upper_case() {
        assert!(is_valid_repository_id("9B2E1C3A-5D4F-4A6B-8C7D-0E1F2A3B4C5D"));
    }

    #[test]
    fn test_accepts_nil_and_max() {
        assert!(is_valid_repository_id("00000000-0000-0000-0000-000000000000"));
        assert!(is_valid_repository_id("ffffffff-ffff-ffff-ffff-ffffffffffff"));
    }

    #[test]
    fn test_rejects_garbage() {
        for candidate in ["", "abc", "123", "not-a-uuid"] {
            assert!(!is_valid_repository_id(candidate), "{candidate}");
        }
    }

    #[test]
    fn test_rejects_other_textual_forms() {
        assert!(!is_valid_repository_id("9b2e1c3a5d4f4a6b8c7d0e1f2a3b4c5d"));
        assert!(!is_valid_repository_id("{9b2e1c3a-5d4f-4a6b-8c7d-0e1f2a3b4c5d}"));
        assert!(!is_valid_repository_id(
            "urn:uuid:9b2e1c3a-5d4f-4a6b-8c7d-0e1f2a3b4c5d"
        ));
    }

    #[test]
    fn test_rejects_bad_version_nibble() {
        assert!(!is_valid_repository_id("9b2e1c3a-5d4f-0a6b-8c7d-0e1f2a3b4c5d"));
        assert!(!is_valid_repository_id("9b2e1c3a-5d4f-9a6b-8c7d-0e1f2a3b4c5d"));
    }

    #[test]
    fn test_rejects_bad_variant_nibble() {
        assert!(!is_valid_repository_id("9b2e1c3a-5d4f-4a6b-0c7d-0e1f2a3b4c5d"));
        assert!(!is_valid_repository_id("9b2e1c3a-5d4f-4a6b-cc7d-0e1f2a3b4c5d"));
    }

    #[test]
    fn test_rejects_non_hex_in_right_shape() {
        assert!(!is_valid_repository_id("zb2e1c3a-5d4f-4a6b-8c7d-0e1f2a3b4c5d"));
    }
}
