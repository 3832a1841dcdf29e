use crate::workflows::admissions::domain::{Applicant, Department, Preferences, SubjectScores};
use crate::workflows::admissions::ApplicantPool;

pub(super) use Department::{Biotech, Chemistry, Engineering, Mathematics, Physics};

pub(super) fn scores(
    physics: f64,
    chemistry: f64,
    math: f64,
    computer_science: f64,
    admission: f64,
) -> SubjectScores {
    SubjectScores {
        physics,
        chemistry,
        math,
        computer_science,
        admission,
    }
}

pub(super) fn applicant(
    name: &str,
    scores: SubjectScores,
    preferences: [Department; 3],
) -> Applicant {
    let (first, last) = name.split_once(' ').unwrap_or((name, ""));
    Applicant::new(
        first,
        last,
        scores,
        Preferences::new(preferences[0], preferences[1], preferences[2]),
    )
}

/// Applicant whose admission score dominates every department formula.
pub(super) fn flat(name: &str, score: f64, preferences: [Department; 3]) -> Applicant {
    applicant(name, scores(0.0, 0.0, 0.0, 0.0, score), preferences)
}

pub(super) fn department_of(pool: &ApplicantPool, name: &str) -> Option<Department> {
    pool.applicants()
        .iter()
        .find(|applicant| applicant.full_name() == name)
        .and_then(|applicant| applicant.department())
}

/// A mixed batch with contention in every department.
pub(super) fn sample_pool() -> ApplicantPool {
    ApplicantPool::new(vec![
        applicant(
            "Ada Lovelace",
            scores(71.0, 60.0, 98.0, 95.0, 80.0),
            [Engineering, Mathematics, Physics],
        ),
        applicant(
            "Alan Turing",
            scores(65.0, 55.0, 99.0, 97.0, 88.0),
            [Engineering, Mathematics, Biotech],
        ),
        applicant(
            "Marie Curie",
            scores(96.0, 99.0, 78.0, 50.0, 90.0),
            [Chemistry, Physics, Biotech],
        ),
        applicant(
            "Rosalind Franklin",
            scores(85.0, 92.0, 70.0, 60.0, 76.0),
            [Biotech, Chemistry, Physics],
        ),
        applicant(
            "Emmy Noether",
            scores(88.0, 40.0, 100.0, 62.0, 84.0),
            [Mathematics, Physics, Engineering],
        ),
        applicant(
            "Niels Bohr",
            scores(97.0, 70.0, 90.0, 55.0, 82.0),
            [Physics, Mathematics, Chemistry],
        ),
        applicant(
            "Grace Hopper",
            scores(60.0, 58.0, 92.0, 99.0, 86.0),
            [Engineering, Mathematics, Physics],
        ),
        applicant(
            "Linus Pauling",
            scores(75.0, 98.0, 71.0, 40.0, 79.0),
            [Chemistry, Biotech, Physics],
        ),
        applicant(
            "Barbara McClintock",
            scores(70.0, 88.0, 65.0, 45.0, 83.0),
            [Biotech, Chemistry, Mathematics],
        ),
        applicant(
            "Paul Dirac",
            scores(98.0, 52.0, 97.0, 66.0, 74.0),
            [Physics, Mathematics, Engineering],
        ),
        applicant(
            "Lise Meitner",
            scores(93.0, 91.0, 80.0, 48.0, 77.0),
            [Physics, Chemistry, Biotech],
        ),
        applicant(
            "Kurt Godel",
            scores(50.0, 30.0, 96.0, 70.0, 72.0),
            [Mathematics, Engineering, Physics],
        ),
    ])
}
