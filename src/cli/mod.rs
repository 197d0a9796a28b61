//! Command-line entry points

pub mod interactive;
pub mod render;

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::config::{self, Config};
use crate::services::{
    day_classes, export_text, normalized_day, session_report, PricingEngine, Session,
};
use crate::types::{Catalog, FitdeskError};

use interactive::Prompter;

/// Fitness center membership assistant
#[derive(Parser)]
#[command(name = "fitdesk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Catalog JSON file with plans, promo codes and schedule
    #[arg(long, global = true, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Fitness center name used in greetings and exports
    #[arg(long, global = true)]
    center: Option<String>,

    /// Export file path for the interactive session summary
    #[arg(long, short, global = true, value_name = "PATH")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive assistant (default)
    Interactive,

    /// Price a membership
    Price {
        /// Plan name (case-sensitive)
        plan: String,

        /// Number of months
        #[arg(long, short, default_value_t = 1, allow_negative_numbers = true)]
        months: i64,

        /// Apply the student/staff discount
        #[arg(long)]
        student: bool,

        /// Promo code
        #[arg(long)]
        promo: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show classes for a day
    Schedule {
        /// Day name or three-letter abbreviation
        day: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Summarize attendance counts
    Attendance {
        /// Entries as ACTIVITY=COUNT
        #[arg(value_name = "ACTIVITY=COUNT", value_parser = parse_entry, allow_negative_numbers = true)]
        entries: Vec<(String, i64)>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Also write the text export to this path
        #[arg(long, value_name = "PATH")]
        export: Option<PathBuf>,
    },

    /// List plans and promo codes
    Plans {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct ScheduleOutput<'a> {
    day: String,
    classes: &'a [String],
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        let mut cfg = Config::from_env();
        config::init_logging(&cfg.log_filter);

        if let Some(path) = self.catalog {
            cfg.catalog_path = Some(path);
        }
        if let Some(center) = self.center {
            cfg.center = center;
        }
        if let Some(path) = self.output {
            cfg.export_path = path;
        }
        let catalog = cfg.load_catalog()?;

        match self.command {
            None | Some(Commands::Interactive) => run_interactive(&catalog, &cfg),
            Some(Commands::Price {
                plan,
                months,
                student,
                promo,
                json,
            }) => {
                let breakdown = PricingEngine::new(&catalog.plans, &catalog.promo_codes)
                    .price_membership(&plan, months, student, promo.as_deref())?;
                if json {
                    println!("{}", serde_json::to_string_pretty(&breakdown)?);
                } else {
                    print_lines(&render::pricing_lines(&breakdown));
                }
                Ok(())
            }
            Some(Commands::Schedule { day, json }) => {
                let classes = day_classes(&day, &catalog.schedule);
                if json {
                    let out = ScheduleOutput {
                        day: normalized_day(&day),
                        classes,
                    };
                    println!("{}", serde_json::to_string_pretty(&out)?);
                } else {
                    print_lines(&render::schedule_lines(&day, classes));
                }
                Ok(())
            }
            Some(Commands::Attendance {
                entries,
                json,
                export,
            }) => {
                let mut session = Session::new();
                for (activity, count) in &entries {
                    session.add_attendance(activity, *count)?;
                }
                let summary = session.summary();
                if json {
                    println!("{}", serde_json::to_string_pretty(&summary)?);
                } else {
                    print_lines(&render::attendance_lines(&summary));
                }
                if let Some(path) = export {
                    export_text(&path, &session_report("", &cfg.center, None, &summary))?;
                }
                Ok(())
            }
            Some(Commands::Plans { json }) => {
                if json {
                    println!("{}", serde_json::to_string_pretty(&catalog)?);
                } else {
                    print_lines(&render::catalog_lines(&catalog));
                }
                Ok(())
            }
        }
    }
}

fn run_interactive(catalog: &Catalog, cfg: &Config) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    interactive::run(&mut prompter, catalog, &cfg.center, &cfg.export_path)?;
    Ok(())
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

/// Parse `ACTIVITY=COUNT`; the split is on the last `=`
fn parse_entry(s: &str) -> Result<(String, i64), FitdeskError> {
    let (activity, count) = s
        .rsplit_once('=')
        .ok_or_else(|| FitdeskError::Parse(format!("expected ACTIVITY=COUNT, got '{}'", s)))?;
    let count = count
        .trim()
        .parse::<i64>()
        .map_err(|e| FitdeskError::Parse(format!("invalid count in '{}': {}", s, e)))?;
    Ok((activity.to_string(), count))
}
