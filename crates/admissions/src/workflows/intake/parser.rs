use crate::workflows::admissions::domain::{
    Applicant, Department, Preferences, SubjectScores, UnknownDepartment,
};

const FIELD_COUNT: usize = 10;

const SCORE_FIELDS: [&str; 5] = [
    "physics",
    "chemistry",
    "math",
    "computer science",
    "admission",
];

/// Reasons a single applicant line cannot be read.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LineError {
    #[error("expected 10 whitespace-separated fields, found {found}")]
    FieldCount { found: usize },
    #[error("{field} score '{value}' is not a real number")]
    Score { field: &'static str, value: String },
    #[error(transparent)]
    Department(#[from] UnknownDepartment),
}

/// Parses `first last physics chemistry math cs admission pref1 pref2 pref3`.
///
/// The line must hold exactly ten fields and each preference must match a
/// department label exactly. A misspelled preference such as `biotech` or an
/// eleventh trailing token rejects the line, where a lenient scanner would keep
/// the extra text or carry the odd name through as an unplaceable choice.
pub(crate) fn parse_line(line: &str) -> Result<Applicant, LineError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != FIELD_COUNT {
        return Err(LineError::FieldCount {
            found: fields.len(),
        });
    }

    let mut values = [0.0_f64; 5];
    for ((value, raw), field) in values.iter_mut().zip(&fields[2..7]).zip(SCORE_FIELDS) {
        *value = parse_score(field, raw)?;
    }
    let [physics, chemistry, math, computer_science, admission] = values;

    let preferences = Preferences::new(
        fields[7].parse::<Department>()?,
        fields[8].parse::<Department>()?,
        fields[9].parse::<Department>()?,
    );

    Ok(Applicant::new(
        fields[0],
        fields[1],
        SubjectScores {
            physics,
            chemistry,
            math,
            computer_science,
            admission,
        },
        preferences,
    ))
}

fn parse_score(field: &'static str, raw: &str) -> Result<f64, LineError> {
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| LineError::Score {
            field,
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::admissions::Flow;

    #[test]
    fn parses_complete_line() {
        let applicant =
            parse_line("Jane Doe 80 60.5 90 71 70 Physics Chemistry Mathematics").expect("parse");

        assert_eq!(applicant.full_name(), "Jane Doe");
        assert_eq!(applicant.scores.chemistry, 60.5);
        assert_eq!(applicant.scores.admission, 70.0);
        assert_eq!(
            applicant.preferences,
            Preferences::new(
                Department::Physics,
                Department::Chemistry,
                Department::Mathematics
            )
        );
        assert!(applicant.is_unassigned());
    }

    #[test]
    fn tolerates_repeated_whitespace_and_carriage_returns() {
        let applicant = parse_line("  Jane\tDoe  80 60 90 71 70  Biotech Engineering Physics\r")
            .expect("parse");
        assert_eq!(applicant.last_name, "Doe");
        assert_eq!(applicant.preferences.at(Flow::Third), Department::Physics);
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert_eq!(
            parse_line("Jane Doe 80 60 90 71 70 Physics Chemistry"),
            Err(LineError::FieldCount { found: 9 })
        );
        assert_eq!(parse_line(""), Err(LineError::FieldCount { found: 0 }));
    }

    #[test]
    fn trailing_tokens_reject_the_line() {
        assert_eq!(
            parse_line("Jane Doe 80 60 90 71 70 Physics Biotech Chemistry extra"),
            Err(LineError::FieldCount { found: 11 })
        );
    }

    #[test]
    fn rejects_non_numeric_and_non_finite_scores() {
        assert_eq!(
            parse_line("Jane Doe 80 sixty 90 71 70 Physics Chemistry Mathematics"),
            Err(LineError::Score {
                field: "chemistry",
                value: "sixty".to_string(),
            })
        );
        assert!(matches!(
            parse_line("Jane Doe 80 60 90 NaN 70 Physics Chemistry Mathematics"),
            Err(LineError::Score {
                field: "computer science",
                ..
            })
        ));
    }

    #[test]
    fn department_names_are_case_sensitive() {
        assert_eq!(
            parse_line("Jane Doe 80 60 90 71 70 physics Chemistry Mathematics"),
            Err(LineError::Department(UnknownDepartment("physics".to_string())))
        );
    }
}
