use super::Category;

/// Render a sequence value as a registration number, e.g. `K-0001`.
///
/// Values beyond 9999 widen naturally rather than truncate.
pub fn format_registration_number(category: Category, value: i64) -> String {
    format!("{}-{:04}", category.prefix(), value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_category_prefixed_and_zero_padded() {
        assert_eq!(format_registration_number(Category::Khuddam, 1), "K-0001");
        assert_eq!(format_registration_number(Category::Atfal, 23), "A-0023");
        assert_eq!(
            format_registration_number(Category::UnderSeven, 407),
            "U-0407"
        );
    }

    #[test]
    fn large_values_keep_all_digits() {
        assert_eq!(
            format_registration_number(Category::Khuddam, 12345),
            "K-12345"
        );
    }
}
