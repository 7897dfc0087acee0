use crate::infra::{load_job_snapshot, FileExportSink, InMemoryJobDirectory};
use chrono::NaiveDate;
use clap::Args;
use hireboard::dashboard::applicants::{
    ApplicantRecord, ApplicantViewService, EducationEntry, ExperienceBand, ExperienceStint,
    ExportOutcome, FilterCriteria, Gender, GenderFilter, JobId, JobPosting, LocationFilter,
    PoolViewOutcome, ScoreBand, SortDirection, SortKey, SortSpec,
};
use hireboard::error::AppError;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ExportArgs {
    /// Job snapshot JSON file (job id, posting, applicants)
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Directory receiving the generated CSV (defaults to ./exports)
    #[arg(long)]
    pub(crate) out: Option<PathBuf>,
    #[command(flatten)]
    pub(crate) criteria: CriteriaArgs,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CriteriaArgs {
    /// Free-text search over name, role, and location
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Experience band selector (0-1, 1-3, 3-5, 5+, all)
    #[arg(long)]
    pub(crate) experience: Option<String>,
    /// Location fragment to filter on
    #[arg(long)]
    pub(crate) location: Option<String>,
    /// Gender selector (Male, Female, all)
    #[arg(long)]
    pub(crate) gender: Option<String>,
    /// Score band selector (90+, 75-90, 50-75, 0-50, all)
    #[arg(long)]
    pub(crate) score: Option<String>,
    /// Sort key (name, role, location, score)
    #[arg(long)]
    pub(crate) sort: Option<String>,
    /// Sort descending instead of ascending
    #[arg(long)]
    pub(crate) descending: bool,
}

impl CriteriaArgs {
    fn to_criteria(&self) -> FilterCriteria {
        let mut criteria = FilterCriteria::default();
        if let Some(search) = &self.search {
            criteria = criteria.with_search(search.clone());
        }
        if let Some(raw) = &self.experience {
            criteria = criteria.with_experience(ExperienceBand::from_param(raw));
        }
        if let Some(raw) = &self.location {
            criteria = criteria.with_location(LocationFilter::from_param(raw));
        }
        if let Some(raw) = &self.gender {
            criteria = criteria.with_gender(GenderFilter::from_param(raw));
        }
        if let Some(raw) = &self.score {
            criteria = criteria.with_score(ScoreBand::from_param(raw));
        }
        if let Some(key) = self.sort.as_deref().and_then(SortKey::from_param) {
            let direction = if self.descending {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            };
            criteria = criteria.with_sort(SortSpec::by(key, direction));
        }
        criteria
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Also write the demo export through the filesystem sink
    #[arg(long)]
    pub(crate) export: bool,
    /// Directory receiving the demo export (defaults to ./exports)
    #[arg(long)]
    pub(crate) out: Option<PathBuf>,
}

pub(crate) fn run_export(args: ExportArgs) -> Result<(), AppError> {
    let snapshot = load_job_snapshot(&args.input)?;
    let job_id = JobId(snapshot.job_id.clone());

    let directory = Arc::new(InMemoryJobDirectory::default());
    directory.insert(job_id.clone(), snapshot.job, snapshot.applicants);

    let out_dir = args.out.unwrap_or_else(|| PathBuf::from("./exports"));
    let sink = Arc::new(FileExportSink::new(out_dir.clone()));
    let service = ApplicantViewService::new(directory, sink);

    match service.export(&job_id, &args.criteria.to_criteria())? {
        ExportOutcome::Ready(document) => {
            println!(
                "Exported {} ({} rows) to {}",
                document.filename,
                document.content.lines().count().saturating_sub(1),
                out_dir.display()
            );
        }
        ExportOutcome::Loading => println!("Job {} is still loading upstream", job_id.0),
        ExportOutcome::NotFound => println!("Job {} not present in the snapshot", job_id.0),
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let directory = Arc::new(InMemoryJobDirectory::default());
    let job_id = seed_sample_pool(&directory);

    let out_dir = args.out.unwrap_or_else(|| PathBuf::from("./exports"));
    let sink = Arc::new(FileExportSink::new(out_dir.clone()));
    let service = ApplicantViewService::new(directory, sink);

    println!("Applicant dashboard demo");

    let everyone = service.view(&job_id, &FilterCriteria::default())?;
    print_view("Full pool (no criteria)", &everyone);

    let searched = service.view(
        &job_id,
        &FilterCriteria::default().with_search("engineer"),
    )?;
    print_view("Search: \"engineer\"", &searched);

    let top_scores = service.view(
        &job_id,
        &FilterCriteria::default().with_score(ScoreBand::NinetyPlus),
    )?;
    print_view("Filter: score 90% and above", &top_scores);

    let ranked = service.view(
        &job_id,
        &FilterCriteria::default()
            .with_sort(SortSpec::by(SortKey::Score, SortDirection::Descending)),
    )?;
    print_view("Sort: score descending", &ranked);

    if args.export {
        match service.export(
            &job_id,
            &FilterCriteria::default()
                .with_sort(SortSpec::by(SortKey::Score, SortDirection::Descending)),
        )? {
            ExportOutcome::Ready(document) => {
                println!(
                    "\nExported {} to {}",
                    document.filename,
                    out_dir.display()
                );
            }
            other => println!("\nExport unavailable: {other:?}"),
        }
    }

    Ok(())
}

fn print_view(title: &str, outcome: &PoolViewOutcome) {
    println!("\n{title}");
    match outcome {
        PoolViewOutcome::Ready(view) => {
            println!(
                "Showing {} of {} applicants for {}",
                view.shown, view.total, view.job_title
            );
            for row in &view.applicants {
                println!(
                    "- {} | {} | {} | {} | {}% | {:.1} years",
                    row.full_name,
                    row.current_role.as_deref().unwrap_or("N/A"),
                    row.location.as_deref().unwrap_or("N/A"),
                    row.gender.map(Gender::label).unwrap_or("N/A"),
                    row.screening_score,
                    row.experience_years
                );
            }
        }
        PoolViewOutcome::Loading => println!("Applicants are still loading upstream"),
        PoolViewOutcome::NotFound => println!("Job not found"),
    }
}

fn seed_sample_pool(directory: &InMemoryJobDirectory) -> JobId {
    let job_id = JobId("job-1024".to_string());
    directory.insert(
        job_id.clone(),
        JobPosting {
            job_title: "Backend Engineer".to_string(),
        },
        sample_applicants(),
    );
    job_id
}

fn sample_applicants() -> Vec<ApplicantRecord> {
    vec![
        ApplicantRecord {
            first_name: "Ana".to_string(),
            last_name: "Lee".to_string(),
            current_role: Some("Data Analyst".to_string()),
            location: Some("New York".to_string()),
            gender: Some(Gender::Female),
            screening_score: 92,
            experiences: vec![ExperienceStint::spanning(
                day(2020, 1, 1),
                day(2021, 1, 1),
            )],
            education: vec![EducationEntry {
                institute: "Hunter College".to_string(),
            }],
        },
        ApplicantRecord {
            first_name: "Bo".to_string(),
            last_name: "Kim".to_string(),
            current_role: Some("Backend Engineer".to_string()),
            location: Some("Los Angeles".to_string()),
            gender: Some(Gender::Male),
            screening_score: 60,
            experiences: Vec::new(),
            education: Vec::new(),
        },
        ApplicantRecord {
            first_name: "Carla".to_string(),
            last_name: "Mendes".to_string(),
            current_role: Some("Platform Engineer".to_string()),
            location: Some("Austin".to_string()),
            gender: Some(Gender::Female),
            screening_score: 95,
            experiences: vec![
                ExperienceStint::spanning(day(2016, 3, 1), day(2019, 8, 1)),
                ExperienceStint::spanning(day(2019, 9, 1), day(2023, 2, 1)),
            ],
            education: vec![EducationEntry {
                institute: "UT Austin".to_string(),
            }],
        },
        ApplicantRecord {
            first_name: "Dev".to_string(),
            last_name: "Patel".to_string(),
            current_role: None,
            location: None,
            gender: None,
            screening_score: 47,
            experiences: vec![ExperienceStint {
                start: None,
                end: None,
            }],
            education: Vec::new(),
        },
    ]
}

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
