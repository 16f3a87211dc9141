/// CN mainland mobile number: 11 digits, starts with 1, second digit 3-9.
pub fn is_cn_mobile(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 11
        && bytes[0] == b'1'
        && (b'3'..=b'9').contains(&bytes[1])
        && bytes.iter().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_mobiles() {
        assert!(is_cn_mobile("13812345678"));
        assert!(is_cn_mobile("19900000000"));
    }

    #[test]
    fn rejects_wrong_prefix_or_length() {
        assert!(!is_cn_mobile("12812345678")); // second digit 2
        assert!(!is_cn_mobile("1381234567")); // 10 digits
        assert!(!is_cn_mobile("138123456789")); // 12 digits
        assert!(!is_cn_mobile("23812345678")); // leading 2
        assert!(!is_cn_mobile("1381234567a"));
        assert!(!is_cn_mobile(""));
    }
}
