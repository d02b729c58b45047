const SEPARATORS: [char; 3] = ['.', ':', '-'];
const CANONICAL_DIGITS: usize = 12;

/// Canonical `aa:bb:cc:dd:ee:ff` form of a MAC token.
///
/// Accepts Cisco dotted (`001e.0b41.7afd`), colon, hyphen or bare notation.
/// Anything that does not leave exactly twelve characters once separators
/// are removed is returned stripped and lower-cased. Hex digits are not
/// checked.
pub fn normalize_mac(raw: &str) -> String {
    let stripped: Vec<char> = raw
        .to_lowercase()
        .chars()
        .filter(|c| !SEPARATORS.contains(c))
        .collect();

    if stripped.len() != CANONICAL_DIGITS {
        return stripped.into_iter().collect();
    }

    stripped
        .chunks(2)
        .map(|pair| pair.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(":")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_notations_agree() {
        let expected = "00:1e:0b:41:7a:fd";
        for raw in [
            "001e.0b41.7afd",
            "00:1E:0B:41:7A:FD",
            "00-1e-0b-41-7a-fd",
            "001E0B417AFD",
            "00:1e:0b:41:7a:fd",
        ] {
            assert_eq!(normalize_mac(raw), expected, "input {}", raw);
        }
    }

    #[test]
    fn test_idempotent_on_canonical_form() {
        let once = normalize_mac("aabb.ccdd.eeff");
        assert_eq!(normalize_mac(&once), once);
    }

    #[test]
    fn test_wrong_length_passes_through_lowercased() {
        assert_eq!(normalize_mac("001E.0B41"), "001e0b41");
        assert_eq!(normalize_mac("00:11:22:33:44:55:66"), "00112233445566");
        assert_eq!(normalize_mac(""), "");
    }

    #[test]
    fn test_non_hex_is_not_rejected() {
        assert_eq!(normalize_mac("zzzz.yyyy.xxxx"), "zz:zz:yy:yy:xx:xx");
    }
}
