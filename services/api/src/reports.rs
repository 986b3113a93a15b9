use crate::infra::InMemoryDirectory;
use chrono::{Local, NaiveDate};
use clap::Args;
use staffboard::error::AppError;
use staffboard::workforce::{
    derive_profile, Department, DerivedProfile, EmployeeFilter, EmployeeId, EnrichedEmployee,
    Rating, RosterImporter, WorkforceAnalytics, WorkforceService,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ProfileArgs {
    /// Employee identifier (non-negative whole number)
    #[arg(long, value_parser = crate::infra::parse_identifier)]
    pub(crate) id: EmployeeId,
    /// Reference date for generated history (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct AnalyticsArgs {
    /// Roster JSON export in the upstream users page format
    #[arg(long)]
    pub(crate) roster: PathBuf,
    /// Print JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct SearchArgs {
    /// Roster JSON export in the upstream users page format
    #[arg(long)]
    pub(crate) roster: PathBuf,
    /// Case-insensitive match against name, email, or department
    #[arg(long)]
    pub(crate) query: Option<String>,
    /// Restrict to a department (repeatable)
    #[arg(long = "department")]
    pub(crate) departments: Vec<Department>,
    /// Restrict to a whole-star rating (repeatable)
    #[arg(long = "rating")]
    pub(crate) ratings: Vec<Rating>,
}

pub(crate) fn run_profile_report(args: ProfileArgs) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let profile = derive_profile(args.id, today)?;

    if args.json {
        print_json(&profile);
    } else {
        render_profile(&profile, today);
    }
    Ok(())
}

pub(crate) fn run_analytics_report(args: AnalyticsArgs) -> Result<(), AppError> {
    let service = load_service(args.roster)?;
    let analytics = service.analytics()?;

    if args.json {
        print_json(&analytics);
    } else {
        render_analytics(&analytics);
    }
    Ok(())
}

pub(crate) fn run_search_report(args: SearchArgs) -> Result<(), AppError> {
    let SearchArgs {
        roster,
        query,
        departments,
        ratings,
    } = args;

    let service = load_service(roster)?;
    let filter = EmployeeFilter {
        search_term: query.unwrap_or_default().trim().to_string(),
        departments,
        ratings,
    };
    let matched = service.search(&filter)?;
    render_search(&matched);
    Ok(())
}

fn load_service(roster: PathBuf) -> Result<WorkforceService<InMemoryDirectory>, AppError> {
    let page = RosterImporter::from_path(roster)?;
    Ok(WorkforceService::new(Arc::new(
        InMemoryDirectory::from_page(page),
    )))
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("unable to render JSON: {err}"),
    }
}

fn render_profile(profile: &DerivedProfile, today: NaiveDate) {
    println!("Employee {} (as of {})", profile.id, today);
    println!(
        "- Department: {} | Rating: {}/5",
        profile.department, profile.performance_rating
    );

    println!("Projects:");
    for project in &profile.projects {
        let window = match project.end_date {
            Some(end) => format!("{} -> {}", project.start_date, end),
            None => format!("since {}", project.start_date),
        };
        println!(
            "  - {} [{}] {} | {}",
            project.name,
            project.status.label(),
            window,
            project.description
        );
    }

    println!("Feedback:");
    for entry in &profile.feedbacks {
        println!(
            "  - {} from {} ({}/5): {}",
            entry.date, entry.reviewer, entry.rating, entry.comment
        );
    }
}

fn render_analytics(analytics: &WorkforceAnalytics) {
    let overview = &analytics.overview;
    println!("Workforce analytics");
    println!(
        "- {} employees | average rating {:.1} | {} top performers | {} need improvement",
        overview.total_employees,
        overview.average_rating,
        overview.top_performers,
        overview.needs_improvement
    );

    if analytics.departments.is_empty() {
        println!("No departments to report.");
        return;
    }

    println!("Departments:");
    for entry in &analytics.departments {
        println!(
            "  - {}: {:.1} avg across {} employees ({})",
            entry.aggregate.department,
            entry.aggregate.average_rating,
            entry.aggregate.employee_count,
            entry.band_label
        );
    }
}

fn render_search(matched: &[EnrichedEmployee]) {
    println!("{} matching employees", matched.len());
    for employee in matched {
        println!(
            "  - #{} {} <{}> | {} | {}/5",
            employee.user.id,
            employee.user.full_name(),
            employee.user.email,
            employee.department,
            employee.performance_rating
        );
    }
}
