//! Pricing service for membership cost calculation
//!
//! Discounts stack multiplicatively: the fixed student/staff discount is taken
//! off the base cost first, then the promo rate applies to what remains.

pub use crate::types::normalize_promo;
use crate::types::{FitdeskError, PlanCatalog, PricingBreakdown, PromoCatalog, Result};

/// Student/staff discount rate
pub const STUDENT_STAFF_DISCOUNT_RATE: f64 = 0.15;

/// Pricing engine over a plan catalog and a promo catalog
pub struct PricingEngine<'a> {
    plans: &'a PlanCatalog,
    promo_codes: &'a PromoCatalog,
}

impl<'a> PricingEngine<'a> {
    pub fn new(plans: &'a PlanCatalog, promo_codes: &'a PromoCatalog) -> Self {
        Self { plans, promo_codes }
    }

    /// Compute a cost breakdown.
    ///
    /// Fails with `InvalidPlan` for an unknown plan and `InvalidDuration` for
    /// `months <= 0`. An unrecognized promo code is not an error: it leaves
    /// `promo_applied` empty and sets `promo_attempted`.
    pub fn price_membership(
        &self,
        plan: &str,
        months: i64,
        is_student_or_staff: bool,
        promo: Option<&str>,
    ) -> Result<PricingBreakdown> {
        let monthly_price = *self
            .plans
            .get(plan)
            .ok_or_else(|| FitdeskError::InvalidPlan {
                plan: plan.to_string(),
                available: self.plans.keys().cloned().collect(),
            })?;

        let months = u64::try_from(months)
            .ok()
            .filter(|m| *m > 0)
            .ok_or(FitdeskError::InvalidDuration(months))?;

        let base_cost = monthly_price * months as f64;

        let student_staff_discount = if is_student_or_staff {
            base_cost * STUDENT_STAFF_DISCOUNT_RATE
        } else {
            0.0
        };
        let cost_after_student_discount = base_cost - student_staff_discount;

        let promo = promo.map(normalize_promo).filter(|code| !code.is_empty());
        let matched = promo
            .as_deref()
            .and_then(|code| self.promo_codes.get(code).map(|rate| (code, *rate)));

        let (promo_applied, promo_rate) = match matched {
            Some((code, rate)) => (Some(code.to_string()), rate),
            None => (None, 0.0),
        };
        let promo_attempted = promo.is_some() && promo_applied.is_none();
        if promo_attempted {
            tracing::info!(promo = ?promo, "promo code not recognized, not applied");
        }

        let promo_discount = cost_after_student_discount * promo_rate;
        let final_cost = (cost_after_student_discount - promo_discount).max(0.0);

        tracing::debug!(
            plan,
            months,
            base_cost,
            final_cost,
            "priced membership"
        );

        Ok(PricingBreakdown {
            plan: plan.to_string(),
            months,
            monthly_price,
            base_cost,
            student_staff_discount,
            promo_applied,
            promo_rate,
            promo_discount,
            promo_attempted,
            final_cost,
        })
    }
}
