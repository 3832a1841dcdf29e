use crate::cli::{AssignArgs, RankArgs};
use crate::render::{format_ranking, format_summary};
use admissions::config::AppConfig;
use admissions::error::AppError;
use admissions::telemetry;
use admissions::workflows::admissions::{
    write_mapping_csv, AdmissionReport, AssignmentEngine, RosterWriter,
};
use admissions::workflows::intake::{read_capacity, ApplicantImporter};
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use tracing::info;

pub(crate) fn run_assign(args: AssignArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let stdout = std::io::stdout();
    run_assign_with(args, config, std::io::stdin().lock(), &mut stdout.lock())
}

/// Runs one batch against `config`, reading the capacity from `input` when the
/// flag is absent and printing any summary to `output`.
pub(crate) fn run_assign_with<R: BufRead, W: Write>(
    args: AssignArgs,
    mut config: AppConfig,
    input: R,
    output: &mut W,
) -> Result<(), AppError> {
    let AssignArgs {
        capacity,
        applicants,
        output_dir,
        summary,
        json,
        mapping_csv,
    } = args;

    if let Some(path) = applicants {
        config.intake.applicants_path = path;
    }
    if let Some(dir) = output_dir {
        config.intake.output_dir = dir;
    }

    let requested = match capacity {
        Some(value) => value,
        None => read_capacity(input)?,
    };

    let mut pool = ApplicantImporter::from_path(&config.intake.applicants_path)?;
    let engine = AssignmentEngine::from_requested(requested);
    let outcome = engine.assign(&mut pool);

    info!(
        ?config.environment,
        capacity = engine.capacity(),
        placed = outcome.total_placed(),
        unassigned = pool.unassigned().count(),
        "assignment complete"
    );

    RosterWriter::new(&config.intake.output_dir).write_all(&pool)?;

    if let Some(path) = mapping_csv {
        let file = File::create(&path)?;
        write_mapping_csv(&pool, BufWriter::new(file))?;
        info!(path = %path.display(), "assignment mapping written");
    }

    if json || summary {
        let report = AdmissionReport::build(&pool, &outcome);
        if json {
            writeln!(output, "{}", serde_json::to_string_pretty(&report)?)?;
        } else {
            write!(output, "{}", format_summary(&report))?;
        }
    }

    Ok(())
}

pub(crate) fn run_rank(args: RankArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    if let Some(path) = args.applicants {
        config.intake.applicants_path = path;
    }

    telemetry::init(&config.telemetry)?;

    let pool = ApplicantImporter::from_path(&config.intake.applicants_path)?;
    print!("{}", format_ranking(&pool, args.department));
    Ok(())
}
