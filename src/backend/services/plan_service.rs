// src/backend/services/plan_service.rs

use crate::datasource::DataSource;
use crate::error::PortalError;
use crate::models::{Plan, PlanId, PlanInput, Timestamp};
use crate::services::{existing, insert_new, oldest_first, remove_existing};
use validator::Validate;

/// Plans in the order the admin created them.
pub fn list_plans(source: &dyn DataSource) -> Vec<Plan> {
    oldest_first(source.plans().all())
}

/// Plans for the pricing section, cheapest first. Unparseable prices sort last.
pub fn public_plans(source: &dyn DataSource) -> Vec<Plan> {
    let mut plans = list_plans(source);
    plans.sort_by_key(|plan| plan.price_cents().unwrap_or(u64::MAX));
    plans
}

pub fn create_plan(source: &mut dyn DataSource, input: PlanInput, now: Timestamp) -> Result<Vec<Plan>, PortalError> {
    let id = source.next_id()?;
    let plan = Plan::from_input(id, input, now);
    plan.validate()?;
    crate::log_info!("Plan {} '{}' created at {}", plan.id, plan.name, plan.price);
    insert_new(source.plans_mut(), plan, "Plan")?;
    Ok(list_plans(source))
}

pub fn update_plan(source: &mut dyn DataSource, id: PlanId, input: PlanInput) -> Result<Vec<Plan>, PortalError> {
    let current = existing(source.plans(), &id, "Plan")?;
    let plan = Plan::from_input(id, input, current.created_at);
    plan.validate()?;
    source.plans_mut().put(plan);
    Ok(list_plans(source))
}

pub fn delete_plan(source: &mut dyn DataSource, id: &str) -> Result<Vec<Plan>, PortalError> {
    let removed = remove_existing(source.plans_mut(), id, "Plan")?;
    crate::log_info!("Plan {} '{}' deleted", removed.id, removed.name);
    Ok(list_plans(source))
}
