//! Progress service: binds a module registry to a progress store and
//! enforces prerequisite locks on every status transition.

use crate::aggregate::{summarize_set, JourneySummary, ProgressSet};
use crate::error::{LifecraftError, Result};
use crate::gate::{self, Access, GateDecision};
use crate::journey::{self, JourneyStatus};
use crate::progress::{ModuleProgress, ProgressUpdate};
use crate::registry::{ModuleDef, Registry};
use crate::store::ProgressStore;
use crate::types::{ModuleId, Role, UserId};
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

/// One module as seen by one user: static config, stored progress, gate.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleState {
    pub module: ModuleDef,
    pub order: usize,
    pub progress: Option<ModuleProgress>,
    pub gate: GateDecision,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartCheck {
    pub module_id: ModuleId,
    pub can_start: bool,
    pub missing_prerequisites: Vec<ModuleId>,
    pub completed_modules: Vec<ModuleId>,
    pub next_module: Option<ModuleId>,
    pub overall_progress: u8,
    pub is_admin: bool,
}

// ---------------------------------------------------------------------------
// ProgressService
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct ProgressService {
    registry: Arc<Registry>,
    store: Arc<dyn ProgressStore>,
    admin_bypass: bool,
}

impl ProgressService {
    /// Service over the LifeCraft registry with the admin bypass on.
    pub fn new(store: Arc<dyn ProgressStore>) -> Self {
        Self::with_registry(Arc::new(Registry::lifecraft().clone()), store)
    }

    pub fn with_registry(registry: Arc<Registry>, store: Arc<dyn ProgressStore>) -> Self {
        Self {
            registry,
            store,
            admin_bypass: true,
        }
    }

    pub fn admin_bypass(mut self, enabled: bool) -> Self {
        self.admin_bypass = enabled;
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn records(&self, user: &UserId) -> Result<Vec<ModuleProgress>> {
        self.store.list(user)
    }

    pub fn role(&self, user: &UserId) -> Result<Role> {
        self.store.role(user)
    }

    pub fn set_role(&self, user: &UserId, role: Role) -> Result<()> {
        self.store.set_role(user, role)
    }

    pub fn access(&self, user: &UserId) -> Result<Access> {
        if self.admin_bypass && self.store.role(user)?.bypasses_gates() {
            Ok(Access::Admin)
        } else {
            Ok(Access::Learner)
        }
    }

    /// Every registry module with the user's progress and gate result.
    pub fn all_progress(&self, user: &UserId) -> Result<Vec<ModuleState>> {
        let records = self.store.list(user)?;
        let set = ProgressSet::new(&self.registry, &records)?;
        let completed = set.completed();
        let access = self.access(user)?;

        self.registry
            .modules()
            .iter()
            .enumerate()
            .map(|(index, def)| {
                Ok(ModuleState {
                    module: def.clone(),
                    order: index + 1,
                    progress: set.get(def.id).cloned(),
                    gate: gate::check_with_access(&self.registry, def.id, &completed, access)?,
                })
            })
            .collect()
    }

    pub fn module_progress(&self, user: &UserId, module: ModuleId) -> Result<ModuleState> {
        let def = self.registry.get(module)?;
        let records = self.store.list(user)?;
        let set = ProgressSet::new(&self.registry, &records)?;
        let access = self.access(user)?;
        Ok(ModuleState {
            module: def.clone(),
            order: self.registry.position(module)?,
            progress: set.get(module).cloned(),
            gate: gate::check_with_access(&self.registry, module, &set.completed(), access)?,
        })
    }

    pub fn can_start(&self, user: &UserId, module: ModuleId) -> Result<StartCheck> {
        let records = self.store.list(user)?;
        let set = ProgressSet::new(&self.registry, &records)?;
        let access = self.access(user)?;
        let decision = gate::check_with_access(&self.registry, module, &set.completed(), access)?;
        let summary = summarize_set(&self.registry, &set)?;

        Ok(StartCheck {
            module_id: module,
            can_start: decision.can_start,
            missing_prerequisites: decision.missing_prerequisites,
            completed_modules: summary.completed_modules,
            next_module: summary.next_module,
            overall_progress: summary.overall_progress,
            is_admin: access.is_admin(),
        })
    }

    /// Apply `update` to the user's record for `module`, creating it if needed.
    ///
    /// Moving into `in_progress` or `completed` requires every prerequisite
    /// to be completed unless the user has admin access.
    pub fn update_progress(
        &self,
        user: &UserId,
        module: ModuleId,
        update: &ProgressUpdate,
    ) -> Result<ModuleProgress> {
        let def = self.registry.get(module)?;
        update.validate(def)?;

        if update.status.is_some_and(|s| s.requires_gate()) {
            let records = self.store.list(user)?;
            let set = ProgressSet::new(&self.registry, &records)?;
            let access = self.access(user)?;
            let completed: HashSet<ModuleId> = set.completed();
            let decision = gate::check_with_access(&self.registry, module, &completed, access)?;
            if !decision.can_start {
                return Err(LifecraftError::PrerequisitesNotMet {
                    module: module.to_string(),
                    missing: decision
                        .missing_prerequisites
                        .iter()
                        .map(|m| m.to_string())
                        .collect(),
                });
            }
        }

        let mut record = self
            .store
            .get(user, module)?
            .unwrap_or_else(|| ModuleProgress::new(user.clone(), module));
        record.apply(update, def)?;
        self.store.upsert(&record)?;
        Ok(record)
    }

    pub fn next_module(&self, user: &UserId) -> Result<JourneySummary> {
        let records = self.store.list(user)?;
        let set = ProgressSet::new(&self.registry, &records)?;
        summarize_set(&self.registry, &set)
    }

    pub fn journey(&self, user: &UserId) -> Result<JourneyStatus> {
        let records = self.store.list(user)?;
        journey::build(&self.registry, &records, self.access(user)?)
    }

    /// Delete every progress record for `user`. Roles are kept.
    pub fn reset(&self, user: &UserId) -> Result<usize> {
        self.store.delete_user(user)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
