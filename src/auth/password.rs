//! Password strength policy
//!
//! Every condition is checked independently so a form can show the whole
//! checklist at once.

/// Characters that satisfy the special-character condition
pub const SPECIAL_CHARACTERS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?~"#;

/// Which strength conditions a candidate password meets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordChecklist {
    pub length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub number: bool,
    pub special_char: bool,
}

impl PasswordChecklist {
    pub fn evaluate(password: &str, min_length: usize) -> Self {
        Self {
            length: password.chars().count() >= min_length,
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            number: password.chars().any(|c| c.is_ascii_digit()),
            special_char: password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)),
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.length && self.uppercase && self.lowercase && self.number && self.special_char
    }

    /// Messages for every unmet condition, in rule order.
    pub fn violations(&self, min_length: usize) -> Vec<String> {
        let rules = [
            (
                self.length,
                format!("Password must be at least {} characters", min_length),
            ),
            (
                self.uppercase,
                "Password must contain at least one uppercase letter".to_string(),
            ),
            (
                self.lowercase,
                "Password must contain at least one lowercase letter".to_string(),
            ),
            (
                self.number,
                "Password must contain at least one number".to_string(),
            ),
            (
                self.special_char,
                "Password must contain at least one special character".to_string(),
            ),
        ];

        rules
            .into_iter()
            .filter(|(met, _)| !met)
            .map(|(_, message)| message)
            .collect()
    }

    /// Checklist lines in display order, each paired with whether it is met.
    pub fn items(&self, min_length: usize) -> Vec<(bool, String)> {
        vec![
            (self.length, format!("At least {} characters", min_length)),
            (self.lowercase, "At least one lowercase letter".to_string()),
            (self.uppercase, "At least one uppercase letter".to_string()),
            (self.number, "At least one number".to_string()),
            (self.special_char, "At least one special character".to_string()),
        ]
    }

    /// Checklist as printable lines
    pub fn render(&self, min_length: usize) -> String {
        self.items(min_length)
            .into_iter()
            .map(|(met, text)| format!("  [{}] {}\n", if met { "x" } else { " " }, text))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strong_password_meets_everything() {
        let check = PasswordChecklist::evaluate("Abcdef1!", 8);
        assert!(check.is_satisfied());
        assert!(check.violations(8).is_empty());
    }

    #[test]
    fn each_missing_condition_reports_only_itself() {
        let cases = [
            ("Abcde1!", "Password must be at least 8 characters"),
            ("abcdef1!", "Password must contain at least one uppercase letter"),
            ("ABCDEF1!", "Password must contain at least one lowercase letter"),
            ("Abcdefg!", "Password must contain at least one number"),
            ("Abcdefg1", "Password must contain at least one special character"),
        ];

        for (password, expected) in cases {
            let violations = PasswordChecklist::evaluate(password, 8).violations(8);
            assert_eq!(violations, vec![expected.to_string()], "password {password}");
        }
    }

    #[test]
    fn empty_password_fails_every_condition() {
        let violations = PasswordChecklist::evaluate("", 8).violations(8);
        assert_eq!(violations.len(), 5);
        assert_eq!(violations[0], "Password must be at least 8 characters");
        assert_eq!(
            violations[4],
            "Password must contain at least one special character"
        );
    }

    #[test]
    fn backtick_is_not_special() {
        assert!(!PasswordChecklist::evaluate("`", 1).special_char);
        assert!(PasswordChecklist::evaluate("\\", 1).special_char);
    }

    #[test]
    fn render_marks_met_items() {
        let rendered = PasswordChecklist::evaluate("abc", 8).render(8);
        assert!(rendered.contains("[ ] At least 8 characters"));
        assert!(rendered.contains("[x] At least one lowercase letter"));
    }
}
