use super::ProgressStore;
use crate::error::Result;
use crate::progress::ModuleProgress;
use crate::types::{ModuleId, Role, UserId};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Default)]
struct Tables {
    progress: HashMap<(UserId, ModuleId), ModuleProgress>,
    roles: HashMap<UserId, Role>,
}

/// Process-local store. Backs the test suites and `AppState::in_memory`.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ProgressStore for MemoryStore {
    fn list(&self, user: &UserId) -> Result<Vec<ModuleProgress>> {
        let tables = self.lock();
        Ok(tables
            .progress
            .values()
            .filter(|p| &p.user_id == user)
            .cloned()
            .collect())
    }

    fn get(&self, user: &UserId, module: ModuleId) -> Result<Option<ModuleProgress>> {
        Ok(self.lock().progress.get(&(user.clone(), module)).cloned())
    }

    fn upsert(&self, record: &ModuleProgress) -> Result<()> {
        let mut tables = self.lock();
        let key = (record.user_id.clone(), record.module_id);
        let mut stored = record.clone();
        if let Some(existing) = tables.progress.get(&key) {
            stored.created_at = existing.created_at;
        }
        tables.progress.insert(key, stored);
        Ok(())
    }

    fn delete_user(&self, user: &UserId) -> Result<usize> {
        let mut tables = self.lock();
        let before = tables.progress.len();
        tables.progress.retain(|(u, _), _| u != user);
        Ok(before - tables.progress.len())
    }

    fn role(&self, user: &UserId) -> Result<Role> {
        Ok(self.lock().roles.get(user).copied().unwrap_or_default())
    }

    fn set_role(&self, user: &UserId, role: Role) -> Result<()> {
        self.lock().roles.insert(user.clone(), role);
        Ok(())
    }
}
