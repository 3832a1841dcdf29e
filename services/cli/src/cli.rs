use crate::commands::{run_assign, run_rank};
use admissions::error::AppError;
use admissions::workflows::admissions::Department;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "admissions",
    about = "Place university applicants into departments and write ranked rosters",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Assign applicants and write one roster per department (default command)
    Assign(AssignArgs),
    /// Print the full applicant ranking for one department without assigning
    Rank(RankArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct AssignArgs {
    /// Seats per department; read from standard input when omitted
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) capacity: Option<i64>,
    /// Override the configured applicant file
    #[arg(long)]
    pub(crate) applicants: Option<PathBuf>,
    /// Override the configured roster directory
    #[arg(long)]
    pub(crate) output_dir: Option<PathBuf>,
    /// Print a placement summary after writing rosters
    #[arg(long, conflicts_with = "json")]
    pub(crate) summary: bool,
    /// Print the placement summary as JSON
    #[arg(long)]
    pub(crate) json: bool,
    /// Also write the applicant-to-department mapping as CSV
    #[arg(long)]
    pub(crate) mapping_csv: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct RankArgs {
    /// Department to rank by (Biotech, Chemistry, Engineering, Mathematics, Physics)
    #[arg(long)]
    pub(crate) department: Department,
    /// Override the configured applicant file
    #[arg(long)]
    pub(crate) applicants: Option<PathBuf>,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Assign(AssignArgs::default()));

    match command {
        Command::Assign(args) => run_assign(args),
        Command::Rank(args) => run_rank(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_defaults_to_assign() {
        let cli = Cli::try_parse_from(["admissions"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn assign_accepts_overrides() {
        let cli = Cli::try_parse_from([
            "admissions",
            "assign",
            "--capacity",
            "-1",
            "--applicants",
            "in.txt",
            "--output-dir",
            "out",
            "--json",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Assign(args)) => {
                assert_eq!(args.capacity, Some(-1));
                assert_eq!(args.applicants, Some(PathBuf::from("in.txt")));
                assert_eq!(args.output_dir, Some(PathBuf::from("out")));
                assert!(args.json);
                assert!(!args.summary);
            }
            other => panic!("expected assign command, got {other:?}"),
        }
    }

    #[test]
    fn summary_and_json_are_exclusive() {
        assert!(Cli::try_parse_from(["admissions", "assign", "--summary", "--json"]).is_err());
    }

    #[test]
    fn rank_requires_a_known_department() {
        let cli = Cli::try_parse_from(["admissions", "rank", "--department", "Physics"])
            .expect("parses");
        assert!(matches!(
            cli.command,
            Some(Command::Rank(RankArgs {
                department: Department::Physics,
                ..
            }))
        ));

        assert!(Cli::try_parse_from(["admissions", "rank", "--department", "physics"]).is_err());
    }
}
