//! Gender inference.

use crate::models::records::Gender;

/// Infer gender from a case-insensitive substring test.
///
/// "female" contains "male", so it is checked first.
pub fn infer_gender(text: &str) -> Gender {
    let lower = text.to_lowercase();

    if lower.contains("female") {
        Gender::Female
    } else if lower.contains("male") {
        Gender::Male
    } else {
        Gender::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_female_takes_precedence() {
        assert_eq!(infer_gender("Female applicant"), Gender::Female);
        assert_eq!(infer_gender("MALE / FEMALE"), Gender::Female);
        assert_eq!(infer_gender("Sex: female\nGuardian: male"), Gender::Female);
    }

    #[test]
    fn test_male() {
        assert_eq!(infer_gender("Gender: Male"), Gender::Male);
        assert_eq!(infer_gender("male male"), Gender::Male);
    }

    #[test]
    fn test_unknown() {
        assert_eq!(infer_gender(""), Gender::Unknown);
        assert_eq!(infer_gender("DOB: 01/01/1990"), Gender::Unknown);
    }
}
