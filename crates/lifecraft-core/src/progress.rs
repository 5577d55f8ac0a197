use crate::error::{LifecraftError, Result};
use crate::registry::ModuleDef;
use crate::types::{ModuleId, ModuleStatus, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ModuleProgress
// ---------------------------------------------------------------------------

/// One user's state in one module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleProgress {
    pub user_id: UserId,
    pub module_id: ModuleId,
    pub status: ModuleStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_stage: Option<String>,
    pub completion_percentage: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ModuleProgress {
    pub fn new(user_id: UserId, module_id: ModuleId) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            module_id,
            status: ModuleStatus::NotStarted,
            current_stage: None,
            completion_percentage: 0,
            completed_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == ModuleStatus::Completed
    }

    /// The percentage this record contributes to the journey total.
    pub fn effective_percentage(&self) -> u8 {
        match self.status {
            ModuleStatus::NotStarted => 0,
            ModuleStatus::InProgress => self.completion_percentage,
            ModuleStatus::Completed => 100,
        }
    }

    /// Apply a validated update in place.
    ///
    /// Completing a module pins the percentage to 100 and stamps
    /// `completed_at`; fields the update leaves out keep their values.
    pub fn apply(&mut self, update: &ProgressUpdate, def: &ModuleDef) -> Result<()> {
        update.validate(def)?;
        let now = Utc::now();

        if let Some(stage) = &update.current_stage {
            self.current_stage = Some(stage.clone());
        }
        if let Some(pct) = update.completion_percentage {
            // validate() bounds this to 0..=100.
            self.completion_percentage = pct as u8;
        }
        if let Some(status) = update.status {
            self.status = status;
            match status {
                ModuleStatus::Completed => {
                    self.completion_percentage = 100;
                    self.completed_at = Some(now);
                }
                ModuleStatus::NotStarted | ModuleStatus::InProgress => {
                    self.completed_at = None;
                }
            }
        }
        self.updated_at = now;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// ProgressUpdate
// ---------------------------------------------------------------------------

/// Partial update sent when a user moves through a module.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressUpdate {
    #[serde(default)]
    pub status: Option<ModuleStatus>,
    #[serde(default)]
    pub current_stage: Option<String>,
    #[serde(default)]
    pub completion_percentage: Option<u32>,
}

impl ProgressUpdate {
    pub fn status(status: ModuleStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn validate(&self, def: &ModuleDef) -> Result<()> {
        if let Some(pct) = self.completion_percentage {
            if pct > 100 {
                return Err(LifecraftError::InvalidPercentage(pct));
            }
        }
        if let Some(stage) = &self.current_stage {
            if !def.has_stage(stage) {
                return Err(LifecraftError::InvalidStage {
                    module: def.id.to_string(),
                    stage: stage.clone(),
                });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;

    fn user() -> UserId {
        UserId::parse("u-1").unwrap()
    }

    fn values_def() -> &'static ModuleDef {
        Registry::lifecraft().get(ModuleId::Values).unwrap()
    }

    #[test]
    fn new_record_defaults() {
        let p = ModuleProgress::new(user(), ModuleId::Values);
        assert_eq!(p.status, ModuleStatus::NotStarted);
        assert_eq!(p.completion_percentage, 0);
        assert!(p.completed_at.is_none());
    }

    #[test]
    fn completing_forces_full_percentage() {
        let mut p = ModuleProgress::new(user(), ModuleId::Values);
        p.apply(
            &ProgressUpdate {
                status: Some(ModuleStatus::Completed),
                current_stage: None,
                completion_percentage: Some(40),
            },
            values_def(),
        )
        .unwrap();
        assert_eq!(p.completion_percentage, 100);
        assert!(p.completed_at.is_some());
        assert!(p.is_completed());
    }

    #[test]
    fn partial_update_keeps_other_fields() {
        let mut p = ModuleProgress::new(user(), ModuleId::Values);
        p.apply(
            &ProgressUpdate {
                status: Some(ModuleStatus::InProgress),
                current_stage: Some("terminal".into()),
                completion_percentage: Some(33),
            },
            values_def(),
        )
        .unwrap();
        p.apply(
            &ProgressUpdate {
                completion_percentage: Some(66),
                ..ProgressUpdate::default()
            },
            values_def(),
        )
        .unwrap();
        assert_eq!(p.status, ModuleStatus::InProgress);
        assert_eq!(p.current_stage.as_deref(), Some("terminal"));
        assert_eq!(p.completion_percentage, 66);
    }

    #[test]
    fn rejects_out_of_range_percentage() {
        let mut p = ModuleProgress::new(user(), ModuleId::Values);
        let err = p
            .apply(
                &ProgressUpdate {
                    completion_percentage: Some(101),
                    ..ProgressUpdate::default()
                },
                values_def(),
            )
            .unwrap_err();
        assert!(matches!(err, LifecraftError::InvalidPercentage(101)));
        assert_eq!(p.completion_percentage, 0);
    }

    #[test]
    fn rejects_unknown_stage() {
        let update = ProgressUpdate {
            current_stage: Some("canvas".into()),
            ..ProgressUpdate::default()
        };
        assert!(matches!(
            update.validate(values_def()),
            Err(LifecraftError::InvalidStage { .. })
        ));
    }

    #[test]
    fn effective_percentage_by_status() {
        let mut p = ModuleProgress::new(user(), ModuleId::Values);
        p.completion_percentage = 50;
        assert_eq!(p.effective_percentage(), 0);
        p.status = ModuleStatus::InProgress;
        assert_eq!(p.effective_percentage(), 50);
        p.status = ModuleStatus::Completed;
        assert_eq!(p.effective_percentage(), 100);
    }

    #[test]
    fn update_deserializes_from_camel_case() {
        let update: ProgressUpdate = serde_json::from_str(
            r#"{"status":"in_progress","currentStage":"work","completionPercentage":10}"#,
        )
        .unwrap();
        assert_eq!(update.status, Some(ModuleStatus::InProgress));
        assert_eq!(update.current_stage.as_deref(), Some("work"));
        assert_eq!(update.completion_percentage, Some(10));
    }
}
