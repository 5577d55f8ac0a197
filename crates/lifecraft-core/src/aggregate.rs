//! Journey-wide aggregation over a user's progress records.
//!
//! Every function here validates the progress set first: records must belong
//! to one user, name modules the registry declares, appear at most once per
//! module and carry a percentage in 0..=100. Modules without a record count
//! as not started.

use crate::error::{LifecraftError, Result};
use crate::gate;
use crate::progress::ModuleProgress;
use crate::registry::Registry;
use crate::types::{ModuleId, ModulePart, ModuleStatus};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

// ---------------------------------------------------------------------------
// ProgressSet
// ---------------------------------------------------------------------------

/// A validated view of one user's records, keyed by module.
#[derive(Debug, Clone)]
pub struct ProgressSet<'a> {
    by_module: HashMap<ModuleId, &'a ModuleProgress>,
}

impl<'a> ProgressSet<'a> {
    pub fn new(registry: &Registry, records: &'a [ModuleProgress]) -> Result<Self> {
        let mut by_module = HashMap::with_capacity(records.len());
        let owner = records.first().map(|r| &r.user_id);

        for record in records {
            if Some(&record.user_id) != owner {
                return Err(LifecraftError::MalformedProgress(format!(
                    "records belong to more than one user ('{}' and '{}')",
                    owner.map(|u| u.as_str()).unwrap_or_default(),
                    record.user_id
                )));
            }
            if !registry.contains(record.module_id) {
                return Err(LifecraftError::MalformedProgress(format!(
                    "module '{}' is not in the registry",
                    record.module_id
                )));
            }
            if record.completion_percentage > 100 {
                return Err(LifecraftError::MalformedProgress(format!(
                    "module '{}' has completion percentage {}",
                    record.module_id, record.completion_percentage
                )));
            }
            if by_module.insert(record.module_id, record).is_some() {
                return Err(LifecraftError::MalformedProgress(format!(
                    "module '{}' appears more than once",
                    record.module_id
                )));
            }
        }
        Ok(Self { by_module })
    }

    pub fn get(&self, module: ModuleId) -> Option<&'a ModuleProgress> {
        self.by_module.get(&module).copied()
    }

    pub fn status(&self, module: ModuleId) -> ModuleStatus {
        self.get(module).map(|p| p.status).unwrap_or_default()
    }

    pub fn percentage(&self, module: ModuleId) -> u8 {
        self.get(module).map(|p| p.effective_percentage()).unwrap_or(0)
    }

    pub fn completed(&self) -> HashSet<ModuleId> {
        self.by_module
            .values()
            .filter(|p| p.is_completed())
            .map(|p| p.module_id)
            .collect()
    }
}

// ---------------------------------------------------------------------------
// NextStep
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "module", rename_all = "snake_case")]
pub enum NextStep {
    Module(ModuleId),
    JourneyComplete,
}

impl NextStep {
    pub fn module(self) -> Option<ModuleId> {
        match self {
            NextStep::Module(m) => Some(m),
            NextStep::JourneyComplete => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Mean of every registry module's own percentage, rounded half up.
///
/// An empty registry has nothing left to do and reports 100.
pub fn overall_percentage(registry: &Registry, records: &[ModuleProgress]) -> Result<u8> {
    let set = ProgressSet::new(registry, records)?;
    Ok(percentage_of(registry, &set))
}

fn percentage_of(registry: &Registry, set: &ProgressSet<'_>) -> u8 {
    let n = registry.len() as u32;
    if n == 0 {
        return 100;
    }
    let sum: u32 = registry.ids().map(|m| set.percentage(m) as u32).sum();
    ((2 * sum + n) / (2 * n)) as u8
}

/// First module in registry order that is not completed and whose gate is open.
pub fn next_module(registry: &Registry, records: &[ModuleProgress]) -> Result<NextStep> {
    let set = ProgressSet::new(registry, records)?;
    next_of(registry, &set)
}

fn next_of(registry: &Registry, set: &ProgressSet<'_>) -> Result<NextStep> {
    let completed = set.completed();
    for module in registry.ids() {
        if completed.contains(&module) {
            continue;
        }
        if gate::check(registry, module, &completed)?.can_start {
            return Ok(NextStep::Module(module));
        }
    }
    Ok(NextStep::JourneyComplete)
}

// ---------------------------------------------------------------------------
// JourneySummary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneySummary {
    pub overall_progress: u8,
    pub next_module: Option<ModuleId>,
    /// Part of the next module; `None` once the journey is complete.
    pub current_part: Option<ModulePart>,
    /// Completed modules in registry order.
    pub completed_modules: Vec<ModuleId>,
}

pub fn summarize(registry: &Registry, records: &[ModuleProgress]) -> Result<JourneySummary> {
    let set = ProgressSet::new(registry, records)?;
    summarize_set(registry, &set)
}

pub(crate) fn summarize_set(registry: &Registry, set: &ProgressSet<'_>) -> Result<JourneySummary> {
    let next = next_of(registry, set)?.module();
    let current_part = match next {
        Some(m) => Some(registry.get(m)?.part),
        None => None,
    };
    let completed = set.completed();
    Ok(JourneySummary {
        overall_progress: percentage_of(registry, set),
        next_module: next,
        current_part,
        completed_modules: registry.ids().filter(|m| completed.contains(m)).collect(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ModuleDef;
    use crate::types::UserId;

    const A: ModuleId = ModuleId::Values;
    const B: ModuleId = ModuleId::Strengths;
    const C: ModuleId = ModuleId::Enneagram;

    fn abc() -> Registry {
        Registry::new(vec![
            ModuleDef::new(A, ModulePart::SelfDiscovery, vec![]),
            ModuleDef::new(B, ModulePart::SelfDiscovery, vec![A]),
            ModuleDef::new(C, ModulePart::VisionMission, vec![A, B]),
        ])
        .unwrap()
    }

    fn record(module: ModuleId, status: ModuleStatus, pct: u8) -> ModuleProgress {
        let mut p = ModuleProgress::new(UserId::parse("u-1").unwrap(), module);
        p.status = status;
        p.completion_percentage = pct;
        p
    }

    fn done(module: ModuleId) -> ModuleProgress {
        record(module, ModuleStatus::Completed, 100)
    }

    #[test]
    fn empty_progress_is_zero_and_starts_at_first_module() {
        let reg = abc();
        assert_eq!(overall_percentage(&reg, &[]).unwrap(), 0);
        assert_eq!(next_module(&reg, &[]).unwrap(), NextStep::Module(A));
    }

    #[test]
    fn abc_example_next_is_b() {
        let reg = abc();
        assert_eq!(next_module(&reg, &[done(A)]).unwrap(), NextStep::Module(B));
    }

    #[test]
    fn all_completed_is_exactly_100() {
        let reg = Registry::lifecraft();
        let records: Vec<ModuleProgress> = ModuleId::all().iter().map(|m| done(*m)).collect();
        assert_eq!(overall_percentage(reg, &records).unwrap(), 100);
        assert_eq!(next_module(reg, &records).unwrap(), NextStep::JourneyComplete);
        let summary = summarize(reg, &records).unwrap();
        assert_eq!(summary.current_part, None);
        assert_eq!(summary.completed_modules, ModuleId::all().to_vec());
    }

    #[test]
    fn percentage_uses_status_semantics_and_rounds() {
        let reg = abc();
        // (100 + 50 + 0) / 3 = 50
        let records = vec![
            done(A),
            record(B, ModuleStatus::InProgress, 50),
            record(C, ModuleStatus::NotStarted, 80),
        ];
        assert_eq!(overall_percentage(&reg, &records).unwrap(), 50);
        // 100 / 3 = 33.33 -> 33
        assert_eq!(overall_percentage(&reg, &[done(A)]).unwrap(), 33);
        // 200 / 3 = 66.67 -> 67
        assert_eq!(overall_percentage(&reg, &[done(A), done(B)]).unwrap(), 67);
        // 1 / 2 = 0.5 -> 1 on a two module registry
        let two = Registry::new(vec![
            ModuleDef::new(A, ModulePart::SelfDiscovery, vec![]),
            ModuleDef::new(B, ModulePart::SelfDiscovery, vec![]),
        ])
        .unwrap();
        assert_eq!(
            overall_percentage(&two, &[record(A, ModuleStatus::InProgress, 1)]).unwrap(),
            1
        );
    }

    #[test]
    fn percentage_is_monotone_in_each_module() {
        let reg = abc();
        let mut last = 0;
        for pct in 0..=100u8 {
            let records = vec![done(A), record(B, ModuleStatus::InProgress, pct)];
            let overall = overall_percentage(&reg, &records).unwrap();
            assert!(overall >= last, "{pct}% gave {overall} after {last}");
            last = overall;
        }
        let completed = overall_percentage(&reg, &[done(A), done(B)]).unwrap();
        assert!(completed >= last);
    }

    #[test]
    fn next_never_has_unmet_prerequisites() {
        let reg = Registry::lifecraft();
        // Out-of-order completions: later modules done, early ones not.
        let records = vec![done(ModuleId::Swot), done(ModuleId::Strengths)];
        let next = next_module(reg, &records).unwrap();
        assert_eq!(next, NextStep::Module(ModuleId::Values));

        let records = vec![
            done(ModuleId::Values),
            done(ModuleId::Strengths),
            done(ModuleId::LifeThemes),
        ];
        let next = next_module(reg, &records).unwrap().module().unwrap();
        let completed: HashSet<ModuleId> = records.iter().map(|r| r.module_id).collect();
        assert!(gate::check(reg, next, &completed).unwrap().can_start);
        assert_eq!(next, ModuleId::Enneagram);
    }

    #[test]
    fn recommends_earliest_open_module() {
        // C is done out of order; B is still the first open module.
        let reg = abc();
        let records = vec![done(A), done(C)];
        assert_eq!(next_module(&reg, &records).unwrap(), NextStep::Module(B));
    }

    #[test]
    fn rejects_malformed_sets() {
        let reg = abc();
        let dup = vec![done(A), record(A, ModuleStatus::InProgress, 10)];
        assert!(matches!(
            overall_percentage(&reg, &dup),
            Err(LifecraftError::MalformedProgress(_))
        ));

        let foreign = vec![done(ModuleId::Errc)];
        assert!(matches!(
            next_module(&reg, &foreign),
            Err(LifecraftError::MalformedProgress(_))
        ));

        let too_high = vec![record(B, ModuleStatus::InProgress, 150)];
        assert!(overall_percentage(&reg, &too_high).is_err());

        let mut other_user = done(B);
        other_user.user_id = UserId::parse("u-2").unwrap();
        assert!(summarize(&reg, &[done(A), other_user]).is_err());
    }

    #[test]
    fn summary_reports_current_part() {
        let reg = abc();
        let summary = summarize(&reg, &[done(A), done(B)]).unwrap();
        assert_eq!(summary.next_module, Some(C));
        assert_eq!(summary.current_part, Some(ModulePart::VisionMission));
        assert_eq!(summary.completed_modules, vec![A, B]);
        assert_eq!(summary.overall_progress, 67);
    }

    #[test]
    fn next_step_json_shape() {
        let json = serde_json::to_value(NextStep::Module(ModuleId::Goals)).unwrap();
        assert_eq!(json["type"], "module");
        assert_eq!(json["module"], "goals");
        let done = serde_json::to_value(NextStep::JourneyComplete).unwrap();
        assert_eq!(done["type"], "journey_complete");
    }
}
