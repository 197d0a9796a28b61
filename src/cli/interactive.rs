//! Interactive prompt front-end
//!
//! Walks the member through greeting, class reminders, pricing and
//! attendance, then offers a text export. Bad answers produce a warning and
//! either a default or a skip; nothing here aborts the session.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::services::schedule::display_day;
use crate::services::{
    build_welcome, day_classes, export_text, session_report, PricingEngine, Session,
};
use crate::types::{Catalog, FitdeskError, PricingBreakdown, Result};

use super::render;

const DEFAULT_PLAN: &str = "Basic";
const DONE_SENTINEL: &str = "done";

/// Line-based prompt over any reader/writer pair
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and read one trimmed line; `None` at end of input
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    fn say_lines(&mut self, lines: &[String]) -> io::Result<()> {
        for line in lines {
            self.say(line)?;
        }
        Ok(())
    }

    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        Ok(self
            .ask(prompt)?
            .map(|answer| matches!(answer.to_uppercase().as_str(), "Y" | "YES"))
            .unwrap_or(false))
    }

    fn section(&mut self, title: &str) -> io::Result<()> {
        let rule = "-".repeat(60);
        self.say(&rule)?;
        self.say(title)?;
        self.say(&rule)
    }
}

/// What an interactive run produced
#[derive(Debug)]
pub struct SessionOutcome {
    pub name: String,
    pub pricing: Option<PricingBreakdown>,
    pub session: Session,
    pub exported_to: Option<PathBuf>,
}

/// Run the full prompt flow
pub fn run<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    catalog: &Catalog,
    center: &str,
    export_path: &Path,
) -> Result<SessionOutcome> {
    let banner = "=".repeat(60);
    prompter.say(&banner)?;
    prompter.say("FITNESS CENTER MEMBERSHIP ASSISTANT")?;
    prompter.say(&banner)?;

    let name = prompter.ask("Enter your name: ")?.unwrap_or_default();
    prompter.say(&format!("\n{}\n", build_welcome(&name, center)))?;

    let mut session = Session::new();
    class_reminders(prompter, catalog, &mut session)?;
    let pricing = pricing_calculator(prompter, catalog)?;
    attendance_tracking(prompter, &mut session)?;

    let summary = session.summary();
    prompter.say("")?;
    prompter.say_lines(&render::attendance_lines(&summary))?;

    let mut exported_to = None;
    if prompter.confirm("Export session summary to file? (Y/N): ")? {
        let lines = session_report(&name, center, pricing.as_ref(), &summary);
        match export_text(export_path, &lines) {
            Ok(()) => {
                prompter.say(&format!("Summary exported to: {}", export_path.display()))?;
                exported_to = Some(export_path.to_path_buf());
            }
            Err(e) => prompter.say(&format!("Error exporting file: {}", e))?,
        }
    }

    prompter.say("Thank you for using Fitness Center Assistant!")?;
    Ok(SessionOutcome {
        name,
        pricing,
        session,
        exported_to,
    })
}

fn class_reminders<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    catalog: &Catalog,
    session: &mut Session,
) -> Result<()> {
    prompter.section("CLASS REMINDERS")?;
    let day = prompter
        .ask("Enter a day of the week for class reminders: ")?
        .unwrap_or_default();
    if day.is_empty() {
        return Ok(());
    }

    let classes = day_classes(&day, &catalog.schedule);
    prompter.say_lines(&render::schedule_lines(&day, classes))?;
    if classes.is_empty() {
        return Ok(());
    }

    let note = prompter
        .ask(&format!(
            "Add a note for {} (optional, press Enter to skip): ",
            display_day(&day)
        ))?
        .unwrap_or_default();
    session.set_note(&day, &note);
    if let Some(note) = session.note(&day) {
        prompter.say(&format!("Note: {}", note))?;
    }
    Ok(())
}

fn pricing_calculator<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    catalog: &Catalog,
) -> Result<Option<PricingBreakdown>> {
    prompter.section("MEMBERSHIP PRICING CALCULATOR")?;
    prompter.say(&format!(
        "Available plans: {}",
        catalog.plan_names().join(", ")
    ))?;

    let mut plan = prompter.ask("Select a plan: ")?.unwrap_or_default();
    if !catalog.plans.contains_key(&plan) {
        prompter.say(&format!("Invalid plan. Using '{}' as default.", DEFAULT_PLAN))?;
        plan = DEFAULT_PLAN.to_string();
    }

    let months = match prompter
        .ask("Enter number of months: ")?
        .unwrap_or_default()
        .parse::<i64>()
    {
        Ok(m) if m > 0 => m,
        Ok(_) => {
            prompter.say("Invalid months. Using 1 as default.")?;
            1
        }
        Err(_) => {
            prompter.say("Invalid input. Using 1 month as default.")?;
            1
        }
    };

    let is_student_or_staff = prompter.confirm("Are you a student or staff member? (Y/N): ")?;
    let promo = prompter
        .ask("Enter promo code (optional, press Enter to skip): ")?
        .filter(|p| !p.is_empty());

    let engine = PricingEngine::new(&catalog.plans, &catalog.promo_codes);
    match engine.price_membership(&plan, months, is_student_or_staff, promo.as_deref()) {
        Ok(breakdown) => {
            prompter.say_lines(&render::pricing_lines(&breakdown))?;
            Ok(Some(breakdown))
        }
        // the default plan may be missing from a custom catalog
        Err(e @ (FitdeskError::InvalidPlan { .. } | FitdeskError::InvalidDuration(_))) => {
            prompter.say(&format!("Error: {}", e))?;
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn attendance_tracking<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    session: &mut Session,
) -> Result<()> {
    prompter.section("ATTENDANCE TRACKING")?;
    prompter.say("Enter activity names and attendance counts.")?;
    prompter.say(&format!("Type '{}' when finished.", DONE_SENTINEL))?;

    loop {
        let Some(activity) = prompter.ask(&format!(
            "Activity name (or '{}' to finish): ",
            DONE_SENTINEL
        ))?
        else {
            break;
        };
        if activity.eq_ignore_ascii_case(DONE_SENTINEL) {
            break;
        }
        if activity.is_empty() {
            prompter.say("Activity name cannot be empty. Skipping.")?;
            continue;
        }

        let answer = prompter
            .ask(&format!("  Attendance count for '{}': ", activity))?
            .unwrap_or_default();
        let Ok(count) = answer.parse::<i64>() else {
            prompter.say("Invalid count. Must be an integer. Skipping.")?;
            continue;
        };

        match session.add_attendance(&activity, count) {
            Ok(()) => prompter.say(&format!("  Added {} to {}", count, activity))?,
            Err(FitdeskError::NegativeCount(_)) => {
                prompter.say("Count must be non-negative. Skipping.")?
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}
