use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::RegistrationError;

/// Age-derived participant category.
///
/// The band boundaries overlap at 15; the Atfal band is checked first, so a
/// participant who is exactly 15 registers as Atfal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "participant_category", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Category {
    UnderSeven,
    Atfal,
    Khuddam,
}

impl Category {
    /// Prefix used in registration numbers (e.g. `K-0001`).
    pub fn prefix(&self) -> char {
        match self {
            Category::UnderSeven => 'U',
            Category::Atfal => 'A',
            Category::Khuddam => 'K',
        }
    }

    /// Human-readable label as shown on badges and rosters.
    pub fn label(&self) -> &'static str {
        match self {
            Category::UnderSeven => "Under 7",
            Category::Atfal => "Atfal",
            Category::Khuddam => "Khuddam",
        }
    }

    /// Age band as displayed next to the label in the registration form.
    pub fn age_band(&self) -> &'static str {
        match self {
            Category::UnderSeven => "Under 7 years",
            Category::Atfal => "7-15 years",
            Category::Khuddam => "15-40 years",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of classifying a birth date: the whole-year age and, if the age
/// falls inside a defined band, the category. `None` means unclassified and
/// the registration must be refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub age_years: i32,
    pub category: Option<Category>,
}

/// Classify a birth date against a reference date.
///
/// Age is the calendar-year difference, decremented by one when the birthday
/// has not yet been reached in the reference year. Pure and deterministic.
pub fn classify(
    birth_date: NaiveDate,
    reference_date: NaiveDate,
) -> Result<Classification, RegistrationError> {
    if birth_date > reference_date {
        return Err(RegistrationError::InvalidDate(format!(
            "date of birth {} is after {}",
            birth_date, reference_date
        )));
    }

    let mut age = reference_date.year() - birth_date.year();
    let birthday_not_reached = (reference_date.month(), reference_date.day())
        < (birth_date.month(), birth_date.day());
    if birthday_not_reached {
        age -= 1;
    }

    let category = if age < 7 {
        Some(Category::UnderSeven)
    } else if age <= 15 {
        Some(Category::Atfal)
    } else if age <= 40 {
        Some(Category::Khuddam)
    } else {
        None
    };

    Ok(Classification {
        age_years: age,
        category,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn future_birth_date_is_rejected() {
        let err = classify(date(2026, 1, 1), date(2025, 6, 1)).unwrap_err();
        assert!(matches!(err, RegistrationError::InvalidDate(_)));
    }

    #[test]
    fn turning_seven_today_is_atfal() {
        let result = classify(date(2018, 6, 15), date(2025, 6, 15)).unwrap();
        assert_eq!(result.age_years, 7);
        assert_eq!(result.category, Some(Category::Atfal));
    }

    #[test]
    fn one_day_before_turning_seven_is_under_seven() {
        let result = classify(date(2018, 6, 15), date(2025, 6, 14)).unwrap();
        assert_eq!(result.age_years, 6);
        assert_eq!(result.category, Some(Category::UnderSeven));
    }

    #[test]
    fn age_fifteen_resolves_to_atfal() {
        let result = classify(date(2010, 3, 1), date(2025, 3, 1)).unwrap();
        assert_eq!(result.age_years, 15);
        assert_eq!(result.category, Some(Category::Atfal));
    }

    #[test]
    fn age_sixteen_is_khuddam() {
        // Sixteenth birthday passed one day ago.
        let result = classify(date(2009, 3, 1), date(2025, 3, 2)).unwrap();
        assert_eq!(result.age_years, 16);
        assert_eq!(result.category, Some(Category::Khuddam));
    }

    #[test]
    fn age_forty_is_khuddam() {
        let result = classify(date(1985, 1, 10), date(2025, 1, 10)).unwrap();
        assert_eq!(result.age_years, 40);
        assert_eq!(result.category, Some(Category::Khuddam));
    }

    #[test]
    fn age_forty_one_is_unclassified() {
        let result = classify(date(1984, 1, 10), date(2025, 1, 10)).unwrap();
        assert_eq!(result.age_years, 41);
        assert_eq!(result.category, None);
    }

    #[test]
    fn ten_year_old_is_atfal() {
        let result = classify(date(2015, 8, 23), date(2025, 8, 23)).unwrap();
        assert_eq!(result.age_years, 10);
        assert_eq!(result.category, Some(Category::Atfal));
    }

    #[test]
    fn birthday_not_reached_decrements_age() {
        // Born in December, classified in June: 2025 - 2010 = 15, minus one.
        let result = classify(date(2010, 12, 25), date(2025, 6, 1)).unwrap();
        assert_eq!(result.age_years, 14);
        assert_eq!(result.category, Some(Category::Atfal));
    }

    #[test]
    fn classification_is_deterministic() {
        let first = classify(date(2000, 5, 5), date(2025, 5, 5)).unwrap();
        let second = classify(date(2000, 5, 5), date(2025, 5, 5)).unwrap();
        assert_eq!(first, second);
    }
}
