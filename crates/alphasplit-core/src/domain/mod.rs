//! Core domain layer for Alphasplit.
//!
//! Pure logic only: no filesystem access, no logging subscribers. Reading
//! and writing happen through the ports in `crate::application::ports`.

pub mod letter;

pub use letter::Letter;

#[cfg(test)]
mod tests {
    use super::*;

    fn key(line: &str) -> Option<char> {
        Letter::from_line(line).map(Letter::as_char)
    }

    // ========================================================================
    // Key derivation
    // ========================================================================

    #[test]
    fn from_line_trims_and_uppercases() {
        assert_eq!(key("apple\n"), Some('A'));
        assert_eq!(key("  Banana  \r\n"), Some('B'));
        assert_eq!(key("\tcherry"), Some('C'));
    }

    #[test]
    fn from_line_skips_blank_lines() {
        assert_eq!(key(""), None);
        assert_eq!(key("  \n"), None);
        assert_eq!(key("\r\n"), None);
        assert_eq!(key("\u{1c}\u{1f}\n"), None);
    }

    #[test]
    fn from_line_skips_non_letter_start() {
        assert_eq!(key("1fish\n"), None);
        assert_eq!(key("-dash"), None);
        assert_eq!(key("éclair"), None);
        assert_eq!(key("Ωmega"), None);
    }

    #[test]
    fn from_line_only_checks_first_character() {
        assert_eq!(key("a1234"), Some('A'));
    }

    #[test]
    fn from_line_uses_full_case_mapping() {
        assert_eq!(key("ßtraße"), Some('S'));
        assert_eq!(key("ıdea"), Some('I'));
    }

    #[test]
    fn from_line_strips_information_separators() {
        assert_eq!(key("\u{1c}apple\n"), Some('A'));
        assert_eq!(key("\u{1d}\u{1e} \u{1f}kiwi"), Some('K'));
        assert_eq!(key("\u{85}\u{a0}mango"), Some('M'));
    }

    // ========================================================================
    // Presentation
    // ========================================================================

    #[test]
    fn file_name_uses_uppercase() {
        assert_eq!(Letter::from_line("quince").unwrap().file_name(), "Q.txt");
    }

    #[test]
    fn display_is_bare_letter() {
        assert_eq!(Letter::from_line("melon").unwrap().to_string(), "M");
    }

    #[test]
    fn letters_order_alphabetically() {
        let a = Letter::from_line("apple").unwrap();
        let z = Letter::from_line("Zebra").unwrap();
        assert!(a < z);
    }
}
