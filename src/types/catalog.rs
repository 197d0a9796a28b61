//! Static reference data: plans, promo codes and the weekly class schedule

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{normalize_promo, normalized_day, FitdeskError, Result};

/// Plan name (case-sensitive) → monthly price
pub type PlanCatalog = BTreeMap<String, f64>;

/// Upper-cased promo code → discount rate in [0, 1]
pub type PromoCatalog = BTreeMap<String, f64>;

/// Canonical lowercase day name → ordered class labels
pub type WeeklySchedule = BTreeMap<String, Vec<String>>;

const DEFAULT_PLANS: [(&str, f64); 3] = [("Basic", 25.0), ("Plus", 35.0), ("Premium", 50.0)];

const DEFAULT_PROMO_CODES: [(&str, f64); 2] = [("WELCOME10", 0.10), ("FALL5", 0.05)];

const DEFAULT_SCHEDULE: [(&str, [&str; 2]); 7] = [
    ("monday", ["Yoga Flow - 6:00 AM", "HIIT Training - 7:30 PM"]),
    ("tuesday", ["Spin Class - 6:30 AM", "Strength Training - 6:00 PM"]),
    ("wednesday", ["Pilates - 7:00 AM", "Cardio Blast - 5:30 PM"]),
    ("thursday", ["Morning Run Club - 6:00 AM", "CrossFit - 6:30 PM"]),
    ("friday", ["Yoga Relaxation - 7:00 AM", "Dance Fitness - 5:00 PM"]),
    ("saturday", ["Bootcamp - 8:00 AM", "Swimming Lessons - 10:00 AM"]),
    ("sunday", ["Stretch & Restore - 9:00 AM", "Cycling - 11:00 AM"]),
];

/// All three reference tables, read-only once built
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Catalog {
    pub plans: PlanCatalog,
    pub promo_codes: PromoCatalog,
    pub schedule: WeeklySchedule,
}

/// On-disk catalog file; every section is optional
#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    plans: Option<BTreeMap<String, f64>>,
    #[serde(default)]
    promo_codes: Option<BTreeMap<String, f64>>,
    #[serde(default)]
    schedule: Option<BTreeMap<String, Vec<String>>>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            plans: DEFAULT_PLANS
                .iter()
                .map(|(name, price)| (name.to_string(), *price))
                .collect(),
            promo_codes: DEFAULT_PROMO_CODES
                .iter()
                .map(|(code, rate)| (code.to_string(), *rate))
                .collect(),
            schedule: DEFAULT_SCHEDULE
                .iter()
                .map(|(day, classes)| {
                    (
                        day.to_string(),
                        classes.iter().map(|c| c.to_string()).collect(),
                    )
                })
                .collect(),
        }
    }
}

impl Catalog {
    /// Parse a JSON catalog, falling back to the built-in table for missing sections
    pub fn from_json(content: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(content)
            .map_err(|e| FitdeskError::Config(format!("Invalid catalog format: {}", e)))?;
        let mut catalog = Self::default();

        if let Some(plans) = file.plans {
            if let Some((name, price)) = plans.iter().find(|(_, p)| p.is_nan() || **p < 0.0) {
                return Err(FitdeskError::Config(format!(
                    "plan '{}' has invalid price {}",
                    name, price
                )));
            }
            catalog.plans = plans;
        }

        if let Some(codes) = file.promo_codes {
            let mut normalized = PromoCatalog::new();
            let mut spellings: BTreeMap<String, String> = BTreeMap::new();
            for (code, rate) in codes {
                if !(0.0..=1.0).contains(&rate) {
                    return Err(FitdeskError::Config(format!(
                        "promo code '{}' has rate {} outside [0, 1]",
                        code, rate
                    )));
                }
                let key = normalize_promo(&code);
                if let Some(previous) = spellings.insert(key.clone(), code.clone()) {
                    return Err(duplicate_key("promo code", &key, &previous, &code));
                }
                normalized.insert(key, rate);
            }
            catalog.promo_codes = normalized;
        }

        if let Some(schedule) = file.schedule {
            let mut normalized = WeeklySchedule::new();
            let mut spellings: BTreeMap<String, String> = BTreeMap::new();
            for (day, classes) in schedule {
                let key = normalized_day(&day);
                if let Some(previous) = spellings.insert(key.clone(), day.clone()) {
                    return Err(duplicate_key("schedule day", &key, &previous, &day));
                }
                normalized.insert(key, classes);
            }
            catalog.schedule = normalized;
        }

        Ok(catalog)
    }

    /// Plan names in catalog order
    pub fn plan_names(&self) -> Vec<String> {
        self.plans.keys().cloned().collect()
    }
}

fn duplicate_key(kind: &str, key: &str, first: &str, second: &str) -> FitdeskError {
    FitdeskError::Config(format!(
        "duplicate {} '{}': '{}' and '{}' normalize to the same key",
        kind, key, first, second
    ))
}
