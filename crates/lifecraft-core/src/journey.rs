use crate::aggregate::{summarize_set, ProgressSet};
use crate::error::Result;
use crate::gate::{self, Access};
use crate::progress::ModuleProgress;
use crate::registry::Registry;
use crate::types::{ModuleId, ModulePart, ModuleStatus};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Journey rows
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyModule {
    pub module_id: ModuleId,
    pub name: String,
    pub name_ko: String,
    pub status: ModuleStatus,
    pub is_locked: bool,
    pub is_next: bool,
    pub order: usize,
    pub part: ModulePart,
    pub completion_percentage: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartSummary {
    pub part: ModulePart,
    pub name: String,
    pub total: usize,
    pub completed: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyStatus {
    pub modules: Vec<JourneyModule>,
    pub parts: Vec<PartSummary>,
    pub overall_progress: u8,
    pub current_part: Option<ModulePart>,
    pub next_module: Option<ModuleId>,
    pub is_admin: bool,
}

impl JourneyStatus {
    pub fn module(&self, id: ModuleId) -> Option<&JourneyModule> {
        self.modules.iter().find(|m| m.module_id == id)
    }

    pub fn is_complete(&self) -> bool {
        self.next_module.is_none()
    }
}

/// Build the full journey view for one user.
///
/// A module is locked when its gate is closed and it is not already
/// completed. Nothing is locked for admins.
pub fn build(
    registry: &Registry,
    records: &[ModuleProgress],
    access: Access,
) -> Result<JourneyStatus> {
    let set = ProgressSet::new(registry, records)?;
    let summary = summarize_set(registry, &set)?;
    let completed = set.completed();

    let mut modules = Vec::with_capacity(registry.len());
    for (index, def) in registry.modules().iter().enumerate() {
        let status = set.status(def.id);
        let open = gate::check(registry, def.id, &completed)?.can_start;
        modules.push(JourneyModule {
            module_id: def.id,
            name: def.name.to_string(),
            name_ko: def.name_ko.to_string(),
            status,
            is_locked: !access.is_admin() && !open && status != ModuleStatus::Completed,
            is_next: summary.next_module == Some(def.id),
            order: index + 1,
            part: def.part,
            completion_percentage: set.percentage(def.id),
        });
    }

    let parts = ModulePart::all()
        .iter()
        .map(|part| {
            let members: Vec<ModuleId> = registry.in_part(*part).map(|d| d.id).collect();
            PartSummary {
                part: *part,
                name: part.display_name().to_string(),
                total: members.len(),
                completed: members.iter().filter(|m| completed.contains(m)).count(),
            }
        })
        .filter(|p| p.total > 0)
        .collect();

    Ok(JourneyStatus {
        modules,
        parts,
        overall_progress: summary.overall_progress,
        current_part: summary.current_part,
        next_module: summary.next_module,
        is_admin: access.is_admin(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UserId;

    fn record(module: ModuleId, status: ModuleStatus, pct: u8) -> ModuleProgress {
        let mut p = ModuleProgress::new(UserId::parse("learner").unwrap(), module);
        p.status = status;
        p.completion_percentage = pct;
        p
    }

    #[test]
    fn fresh_journey_locks_everything_but_values() {
        let status = build(Registry::lifecraft(), &[], Access::Learner).unwrap();
        assert_eq!(status.modules.len(), 10);
        assert_eq!(status.next_module, Some(ModuleId::Values));
        assert_eq!(status.current_part, Some(ModulePart::SelfDiscovery));
        let values = status.module(ModuleId::Values).unwrap();
        assert!(!values.is_locked);
        assert!(values.is_next);
        assert_eq!(values.order, 1);
        assert!(status
            .modules
            .iter()
            .skip(1)
            .all(|m| m.is_locked && !m.is_next));
    }

    #[test]
    fn progress_unlocks_next_module() {
        let records = vec![
            record(ModuleId::Values, ModuleStatus::Completed, 100),
            record(ModuleId::Strengths, ModuleStatus::InProgress, 40),
        ];
        let status = build(Registry::lifecraft(), &records, Access::Learner).unwrap();
        let strengths = status.module(ModuleId::Strengths).unwrap();
        assert!(!strengths.is_locked);
        assert!(strengths.is_next);
        assert_eq!(strengths.completion_percentage, 40);
        assert!(status.module(ModuleId::Enneagram).unwrap().is_locked);
        // (100 + 40) / 10 = 14
        assert_eq!(status.overall_progress, 14);
        let self_discovery = &status.parts[0];
        assert_eq!(self_discovery.total, 4);
        assert_eq!(self_discovery.completed, 1);
    }

    #[test]
    fn completed_module_is_never_locked() {
        // Swot completed out of order (e.g. before linear enforcement existed).
        let records = vec![record(ModuleId::Swot, ModuleStatus::Completed, 100)];
        let status = build(Registry::lifecraft(), &records, Access::Learner).unwrap();
        assert!(!status.module(ModuleId::Swot).unwrap().is_locked);
        assert!(status.module(ModuleId::Goals).unwrap().is_locked);
    }

    #[test]
    fn admin_sees_everything_unlocked() {
        let status = build(Registry::lifecraft(), &[], Access::Admin).unwrap();
        assert!(status.is_admin);
        assert!(status.modules.iter().all(|m| !m.is_locked));
        assert_eq!(status.next_module, Some(ModuleId::Values));
    }

    #[test]
    fn complete_journey() {
        let records: Vec<ModuleProgress> = ModuleId::all()
            .iter()
            .map(|m| record(*m, ModuleStatus::Completed, 100))
            .collect();
        let status = build(Registry::lifecraft(), &records, Access::Learner).unwrap();
        assert!(status.is_complete());
        assert_eq!(status.overall_progress, 100);
        assert!(status.parts.iter().all(|p| p.completed == p.total));
    }
}
