//! Ordinal formatting for event edition numbers ("51st Ijtemaa").

/// Suffix for an ordinal number ("st", "nd", "rd", "th").
pub fn ordinal_suffix(num: i32) -> &'static str {
    let last_two = num % 100;
    // 11th, 12th and 13th break the last-digit rule.
    if (11..=13).contains(&last_two.abs()) {
        return "th";
    }
    match num % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Format a number as an ordinal string, e.g. `51` → `"51st"`.
pub fn format_ordinal(num: i32) -> String {
    format!("{}{}", num, ordinal_suffix(num))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_suffixes() {
        assert_eq!(format_ordinal(1), "1st");
        assert_eq!(format_ordinal(2), "2nd");
        assert_eq!(format_ordinal(3), "3rd");
        assert_eq!(format_ordinal(4), "4th");
    }

    #[test]
    fn teens_always_use_th() {
        assert_eq!(format_ordinal(11), "11th");
        assert_eq!(format_ordinal(12), "12th");
        assert_eq!(format_ordinal(13), "13th");
        assert_eq!(format_ordinal(111), "111th");
        assert_eq!(format_ordinal(112), "112th");
    }

    #[test]
    fn larger_numbers_follow_last_digit() {
        assert_eq!(format_ordinal(21), "21st");
        assert_eq!(format_ordinal(23), "23rd");
        assert_eq!(format_ordinal(51), "51st");
        assert_eq!(format_ordinal(102), "102nd");
    }
}
