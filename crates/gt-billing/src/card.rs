// card.rs — Payment input formatters.
//
// Pure string transforms applied on every keystroke. No validation beyond
// character filtering: a 16-digit string of nines formats just fine.

/// Group a card number into blocks of 4 digits separated by spaces.
///
/// Non-digits are stripped first; only the first 16 digits are kept.
/// Inputs with fewer than 4 digits come back unchanged (including any
/// non-digit characters), matching the no-match fallback of the source
/// pattern `\d{4,16}`.
pub fn format_card_number(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() < 4 {
        return raw.to_string();
    }

    let run = &digits[..digits.len().min(16)];
    let mut out = String::with_capacity(run.len() + run.len() / 4);
    for (i, ch) in run.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

/// Format an expiry as `MM/YY`: a slash is inserted once a third digit
/// arrives. Non-digits are stripped; shorter inputs pass through as bare
/// digits; anything past four digits is dropped.
pub fn format_expiry(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() >= 3 {
        let end = digits.len().min(4);
        format!("{}/{}", &digits[..2], &digits[2..end])
    } else {
        digits
    }
}

/// Clamp a CVC to at most 3 digits, dropping non-digits.
pub fn clamp_cvc(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).take(3).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_number_groups_into_blocks_of_four() {
        assert_eq!(format_card_number("1234567890123456"), "1234 5678 9012 3456");
        assert_eq!(format_card_number("123456789"), "1234 5678 9");
    }

    #[test]
    fn card_number_strips_spaces_and_letters() {
        assert_eq!(format_card_number("1234 5678 9012 3456"), "1234 5678 9012 3456");
        assert_eq!(format_card_number("12ab34-5678"), "1234 5678");
    }

    #[test]
    fn card_number_caps_at_sixteen_digits() {
        assert_eq!(
            format_card_number("12345678901234567890"),
            "1234 5678 9012 3456"
        );
    }

    #[test]
    fn short_card_input_passes_through_unchanged() {
        assert_eq!(format_card_number("123"), "123");
        assert_eq!(format_card_number("12a"), "12a");
        assert_eq!(format_card_number(""), "");
    }

    #[test]
    fn expiry_inserts_slash_after_two_digits() {
        assert_eq!(format_expiry("1"), "1");
        assert_eq!(format_expiry("12"), "12");
        assert_eq!(format_expiry("123"), "12/3");
        assert_eq!(format_expiry("1225"), "12/25");
    }

    #[test]
    fn expiry_strips_non_digits_and_extra_digits() {
        assert_eq!(format_expiry("12/25"), "12/25");
        assert_eq!(format_expiry("12 25 99"), "12/25");
        assert_eq!(format_expiry("a1"), "1");
    }

    #[test]
    fn cvc_clamps_to_three_digits() {
        assert_eq!(clamp_cvc("123"), "123");
        assert_eq!(clamp_cvc("12345"), "123");
        assert_eq!(clamp_cvc("1a2b3c4"), "123");
        assert_eq!(clamp_cvc("ab"), "");
    }
}
