// Persian number and digit handling shared across the workspace.

pub mod persian_format {
    use crate::models::NumberStyle;

    const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];
    pub const DECIMAL_SEPARATOR: char = '٫';
    /// Upper bound on rendered fraction digits; larger requests are clamped.
    pub const MAX_DECIMALS: usize = 6;

    const ONES: [&str; 10] = ["", "یک", "دو", "سه", "چهار", "پنج", "شش", "هفت", "هشت", "نه"];
    const TEENS: [&str; 10] = [
        "ده", "یازده", "دوازده", "سیزده", "چهارده", "پانزده", "شانزده", "هفده", "هجده", "نوزده",
    ];
    const TENS: [&str; 10] = [
        "", "", "بیست", "سی", "چهل", "پنجاه", "شصت", "هفتاد", "هشتاد", "نود",
    ];
    const HUNDREDS: [&str; 10] = [
        "", "صد", "دویست", "سیصد", "چهارصد", "پانصد", "ششصد", "هفتصد", "هشتصد", "نهصد",
    ];
    // u64::MAX has seven three-digit groups.
    const SCALES: [&str; 7] = ["", "هزار", "میلیون", "میلیارد", "تریلیون", "کوادریلیون", "کوینتیلیون"];
    const FRACTION_DENOMINATORS: [&str; MAX_DECIMALS] = ["دهم", "صدم", "هزارم", "ده‌هزارم", "صدهزارم", "میلیونم"];

    // Renders ASCII digits as Persian digits; other characters pass through.
    pub fn to_persian_digits(s: &str) -> String {
        s.chars()
            .map(|c| match c.to_digit(10) {
                Some(d) if c.is_ascii_digit() => PERSIAN_DIGITS[d as usize],
                _ => c,
            })
            .collect()
    }

    // Maps Persian (U+06F0..U+06F9) and Arabic-Indic (U+0660..U+0669) digits to ASCII,
    // and the Persian decimal separator to '.'.
    pub fn to_ascii_digits(s: &str) -> String {
        s.chars()
            .map(|c| match c {
                '\u{06F0}'..='\u{06F9}' => ascii_digit(c as u32 - 0x06F0, c),
                '\u{0660}'..='\u{0669}' => ascii_digit(c as u32 - 0x0660, c),
                DECIMAL_SEPARATOR => '.',
                _ => c,
            })
            .collect()
    }

    fn ascii_digit(value: u32, fallback: char) -> char {
        char::from_digit(value, 10).unwrap_or(fallback)
    }

    // Rounds `value` to `decimals` places (at most MAX_DECIMALS). Unless `fixed` is set,
    // trailing zeros and a dangling separator are dropped so integral values carry no fraction.
    pub fn format_decimal(value: f64, decimals: usize, fixed: bool, style: NumberStyle) -> String {
        match style {
            NumberStyle::Words => decimal_to_words(value, decimals),
            NumberStyle::Latin => plain_decimal(value, decimals, fixed),
            NumberStyle::Persian => {
                to_persian_digits(&plain_decimal(value, decimals, fixed).replace('.', &DECIMAL_SEPARATOR.to_string()))
            }
        }
    }

    fn plain_decimal(value: f64, decimals: usize, fixed: bool) -> String {
        let text = format!("{:.*}", decimals.min(MAX_DECIMALS), value);
        if fixed || !text.contains('.') {
            return text;
        }
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }

    fn group_to_words(n: u64) -> String {
        let mut parts = Vec::new();
        let hundreds = (n / 100) as usize;
        let rest = (n % 100) as usize;
        if hundreds > 0 {
            parts.push(HUNDREDS[hundreds]);
        }
        if (10..20).contains(&rest) {
            parts.push(TEENS[rest - 10]);
        } else {
            if rest / 10 > 0 {
                parts.push(TENS[rest / 10]);
            }
            if rest % 10 > 0 {
                parts.push(ONES[rest % 10]);
            }
        }
        parts.join(" و ")
    }

    /// Spells a non-negative integer in Persian, e.g. `1500` → "یک هزار و پانصد".
    pub fn number_to_words(n: u64) -> String {
        if n == 0 {
            return "صفر".to_string();
        }

        let mut groups = Vec::new();
        let mut rest = n;
        let mut scale = 0;
        while rest > 0 {
            let group = rest % 1000;
            if group > 0 {
                let words = group_to_words(group);
                groups.push(if scale == 0 {
                    words
                } else {
                    format!("{} {}", words, SCALES[scale])
                });
            }
            rest /= 1000;
            scale += 1;
        }
        groups.reverse();
        groups.join(" و ")
    }

    /// Spells a real value, e.g. `1.5` → "یک و پنج دهم". At most [`MAX_DECIMALS`] fraction digits are kept.
    pub fn decimal_to_words(value: f64, decimals: usize) -> String {
        if value < 0.0 {
            return format!("منفی {}", decimal_to_words(-value, decimals));
        }

        let text = plain_decimal(value, decimals, false);
        let (int_part, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
        let int_words = number_to_words(int_part.parse().unwrap_or(0));

        match fraction.parse::<u64>() {
            Ok(f) if f > 0 => format!(
                "{} و {} {}",
                int_words,
                number_to_words(f),
                FRACTION_DENOMINATORS[fraction.len() - 1]
            ),
            _ => int_words,
        }
    }

}
