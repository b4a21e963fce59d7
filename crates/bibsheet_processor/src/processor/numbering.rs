/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Marker text for numbered reference lists.

use bibsheet_core::NumberingStyle;

const SYMBOLS: [&str; 6] = ["*", "†", "‡", "§", "¶", "‖"];

const ROMAN: [(usize, &str); 13] = [
    (1000, "m"),
    (900, "cm"),
    (500, "d"),
    (400, "cd"),
    (100, "c"),
    (90, "xc"),
    (50, "l"),
    (40, "xl"),
    (10, "x"),
    (9, "ix"),
    (5, "v"),
    (4, "iv"),
    (1, "i"),
];

/// The marker for a 1-based position. Total for every ordinal; 0 is
/// treated as 1.
pub fn marker(ordinal: usize, style: NumberingStyle) -> String {
    let n = ordinal.max(1);
    match style {
        NumberingStyle::Numeric => format!("[{n}]"),
        NumberingStyle::NumericDot => format!("{n}."),
        NumberingStyle::NumericParen => format!("({n})"),
        NumberingStyle::Alphabetic => format!("{}.", to_letters(n)),
        NumberingStyle::Roman => format!("{}.", to_roman(n)),
        NumberingStyle::Symbols => {
            let symbol = SYMBOLS[(n - 1) % SYMBOLS.len()];
            symbol.repeat((n - 1) / SYMBOLS.len() + 1)
        }
        NumberingStyle::Bullet => "•".to_string(),
        NumberingStyle::None => String::new(),
    }
}

/// Spreadsheet-column letters: a..z, aa..az, ba...
pub fn to_letters(n: usize) -> String {
    let mut n = n;
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push(char::from(b'a' + (n % 26) as u8));
        n /= 26;
    }
    letters.iter().rev().collect()
}

/// Lowercase subtractive Roman numerals; thousands repeat `m`.
pub fn to_roman(n: usize) -> String {
    let mut n = n;
    let mut out = String::new();
    for (value, numeral) in ROMAN {
        while n >= value {
            out.push_str(numeral);
            n -= value;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_variants() {
        assert_eq!(marker(1, NumberingStyle::Numeric), "[1]");
        assert_eq!(marker(12, NumberingStyle::NumericDot), "12.");
        assert_eq!(marker(3, NumberingStyle::NumericParen), "(3)");
    }

    #[test]
    fn test_letters() {
        assert_eq!(to_letters(1), "a");
        assert_eq!(to_letters(26), "z");
        assert_eq!(to_letters(27), "aa");
        assert_eq!(to_letters(28), "ab");
        assert_eq!(to_letters(52), "az");
        assert_eq!(to_letters(53), "ba");
        assert_eq!(to_letters(702), "zz");
        assert_eq!(to_letters(703), "aaa");
        assert_eq!(marker(2, NumberingStyle::Alphabetic), "b.");
    }

    #[test]
    fn test_roman() {
        assert_eq!(to_roman(4), "iv");
        assert_eq!(to_roman(9), "ix");
        assert_eq!(to_roman(14), "xiv");
        assert_eq!(to_roman(1994), "mcmxciv");
        assert_eq!(marker(3, NumberingStyle::Roman), "iii.");
    }

    #[test]
    fn test_symbols_double_after_the_set() {
        assert_eq!(marker(1, NumberingStyle::Symbols), "*");
        assert_eq!(marker(6, NumberingStyle::Symbols), "‖");
        assert_eq!(marker(7, NumberingStyle::Symbols), "**");
        assert_eq!(marker(8, NumberingStyle::Symbols), "††");
        assert_eq!(marker(13, NumberingStyle::Symbols), "***");
    }

    #[test]
    fn test_constant_and_empty_markers() {
        assert_eq!(marker(1, NumberingStyle::Bullet), "•");
        assert_eq!(marker(99, NumberingStyle::Bullet), "•");
        assert_eq!(marker(5, NumberingStyle::None), "");
    }

    #[test]
    fn test_zero_is_clamped() {
        assert_eq!(marker(0, NumberingStyle::Numeric), "[1]");
    }

    #[test]
    fn test_total_up_to_a_thousand() {
        for style in NumberingStyle::ALL {
            for n in 1..=1000 {
                let m = marker(n, *style);
                assert_eq!(m.is_empty(), *style == NumberingStyle::None, "{style} {n}");
            }
        }
    }
}
