//! Persistence for per-user module progress and user roles.
//!
//! The store is a dumb keyed table. Gating is enforced one layer up in
//! [`crate::service::ProgressService`].

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::error::Result;
use crate::progress::ModuleProgress;
use crate::types::{ModuleId, Role, UserId};

pub trait ProgressStore: Send + Sync {
    /// All records for `user`, in no particular order.
    fn list(&self, user: &UserId) -> Result<Vec<ModuleProgress>>;

    fn get(&self, user: &UserId, module: ModuleId) -> Result<Option<ModuleProgress>>;

    /// Insert or replace the record keyed by `(user_id, module_id)`.
    /// `created_at` of an existing row is kept.
    fn upsert(&self, record: &ModuleProgress) -> Result<()>;

    /// Remove every progress record for `user`. Returns the number removed.
    fn delete_user(&self, user: &UserId) -> Result<usize>;

    /// Users without a stored role are plain users.
    fn role(&self, user: &UserId) -> Result<Role>;

    fn set_role(&self, user: &UserId, role: Role) -> Result<()>;
}

#[cfg(test)]
pub(crate) mod contract {
    //! Behaviour every store must share; run against each implementation.

    use super::*;
    use crate::types::ModuleStatus;

    fn user(id: &str) -> UserId {
        UserId::parse(id).unwrap()
    }

    pub fn roundtrip(store: &dyn ProgressStore) {
        let mut p = ModuleProgress::new(user("alice"), ModuleId::Values);
        p.status = ModuleStatus::InProgress;
        p.current_stage = Some("terminal".into());
        p.completion_percentage = 33;
        store.upsert(&p).unwrap();

        let loaded = store.get(&user("alice"), ModuleId::Values).unwrap().unwrap();
        assert_eq!(loaded.status, ModuleStatus::InProgress);
        assert_eq!(loaded.current_stage.as_deref(), Some("terminal"));
        assert_eq!(loaded.completion_percentage, 33);
        assert!(store.get(&user("alice"), ModuleId::Swot).unwrap().is_none());
        assert!(store.get(&user("bob"), ModuleId::Values).unwrap().is_none());
    }

    pub fn upsert_replaces_and_keeps_created_at(store: &dyn ProgressStore) {
        let first = ModuleProgress::new(user("alice"), ModuleId::Values);
        store.upsert(&first).unwrap();

        let mut second = ModuleProgress::new(user("alice"), ModuleId::Values);
        second.created_at = first.created_at + chrono::Duration::hours(1);
        second.status = ModuleStatus::Completed;
        second.completion_percentage = 100;
        second.completed_at = Some(second.updated_at);
        store.upsert(&second).unwrap();

        let all = store.list(&user("alice")).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].status, ModuleStatus::Completed);
        assert_eq!(all[0].created_at, first.created_at);
        assert!(all[0].completed_at.is_some());
    }

    pub fn delete_user_only_touches_that_user(store: &dyn ProgressStore) {
        for module in [ModuleId::Values, ModuleId::Strengths] {
            store
                .upsert(&ModuleProgress::new(user("alice"), module))
                .unwrap();
        }
        store
            .upsert(&ModuleProgress::new(user("bob"), ModuleId::Values))
            .unwrap();

        assert_eq!(store.delete_user(&user("alice")).unwrap(), 2);
        assert!(store.list(&user("alice")).unwrap().is_empty());
        assert_eq!(store.list(&user("bob")).unwrap().len(), 1);
    }

    pub fn roles(store: &dyn ProgressStore) {
        assert_eq!(store.role(&user("carol")).unwrap(), Role::User);
        store.set_role(&user("carol"), Role::Admin).unwrap();
        assert_eq!(store.role(&user("carol")).unwrap(), Role::Admin);
        store.set_role(&user("carol"), Role::SuperAdmin).unwrap();
        assert_eq!(store.role(&user("carol")).unwrap(), Role::SuperAdmin);
    }
}
