use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ModuleId
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModuleId {
    Values,
    Strengths,
    Enneagram,
    LifeThemes,
    Vision,
    Mission,
    CareerOptions,
    Swot,
    Goals,
    Errc,
}

impl ModuleId {
    pub fn all() -> &'static [ModuleId] {
        &[
            ModuleId::Values,
            ModuleId::Strengths,
            ModuleId::Enneagram,
            ModuleId::LifeThemes,
            ModuleId::Vision,
            ModuleId::Mission,
            ModuleId::CareerOptions,
            ModuleId::Swot,
            ModuleId::Goals,
            ModuleId::Errc,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ModuleId::Values => "values",
            ModuleId::Strengths => "strengths",
            ModuleId::Enneagram => "enneagram",
            ModuleId::LifeThemes => "life-themes",
            ModuleId::Vision => "vision",
            ModuleId::Mission => "mission",
            ModuleId::CareerOptions => "career-options",
            ModuleId::Swot => "swot",
            ModuleId::Goals => "goals",
            ModuleId::Errc => "errc",
        }
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ModuleId {
    type Err = crate::error::LifecraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModuleId::all()
            .iter()
            .copied()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| crate::error::LifecraftError::UnknownModule(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// ModuleStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl ModuleStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ModuleStatus::NotStarted => "not_started",
            ModuleStatus::InProgress => "in_progress",
            ModuleStatus::Completed => "completed",
        }
    }

    /// Moving into this status requires the module's prerequisites.
    pub fn requires_gate(self) -> bool {
        matches!(self, ModuleStatus::InProgress | ModuleStatus::Completed)
    }
}

impl fmt::Display for ModuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ModuleStatus {
    type Err = crate::error::LifecraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not_started" => Ok(ModuleStatus::NotStarted),
            "in_progress" => Ok(ModuleStatus::InProgress),
            "completed" => Ok(ModuleStatus::Completed),
            _ => Err(crate::error::LifecraftError::InvalidStatus(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// ModulePart
// ---------------------------------------------------------------------------

/// The four phases of the journey that modules are grouped into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModulePart {
    SelfDiscovery,
    VisionMission,
    StrategicAnalysis,
    GoalSetting,
}

impl ModulePart {
    pub fn all() -> &'static [ModulePart] {
        &[
            ModulePart::SelfDiscovery,
            ModulePart::VisionMission,
            ModulePart::StrategicAnalysis,
            ModulePart::GoalSetting,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ModulePart::SelfDiscovery => "self-discovery",
            ModulePart::VisionMission => "vision-mission",
            ModulePart::StrategicAnalysis => "strategic-analysis",
            ModulePart::GoalSetting => "goal-setting",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ModulePart::SelfDiscovery => "Self Discovery",
            ModulePart::VisionMission => "Vision & Mission",
            ModulePart::StrategicAnalysis => "Strategic Analysis",
            ModulePart::GoalSetting => "Goal Setting",
        }
    }
}

impl fmt::Display for ModulePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    User,
    Admin,
    SuperAdmin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
            Role::SuperAdmin => "super_admin",
        }
    }

    /// Admins may enter any module regardless of prerequisites.
    pub fn bypasses_gates(self) -> bool {
        matches!(self, Role::Admin | Role::SuperAdmin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = crate::error::LifecraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            "super_admin" | "super-admin" => Ok(Role::SuperAdmin),
            _ => Err(crate::error::LifecraftError::InvalidRole(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// UserId
// ---------------------------------------------------------------------------

/// Identifier of the authenticated user, as forwarded by the auth layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    pub const MAX_LEN: usize = 128;

    pub fn parse(raw: impl Into<String>) -> crate::error::Result<Self> {
        let raw = raw.into();
        let valid_char = |c: char| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '@');
        if raw.is_empty() || raw.len() > Self::MAX_LEN || !raw.chars().all(valid_char) {
            return Err(crate::error::LifecraftError::InvalidUserId(raw));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for UserId {
    type Err = crate::error::LifecraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserId::parse(s)
    }
}

impl TryFrom<String> for UserId {
    type Error = crate::error::LifecraftError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        UserId::parse(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn module_id_roundtrip() {
        for id in ModuleId::all() {
            assert_eq!(ModuleId::from_str(id.as_str()).unwrap(), *id);
        }
        assert_eq!(ModuleId::all().len(), 10);
    }

    #[test]
    fn module_id_unknown_is_rejected() {
        assert!(matches!(
            ModuleId::from_str("dreams"),
            Err(crate::error::LifecraftError::UnknownModule(_))
        ));
    }

    #[test]
    fn module_id_serializes_kebab_case() {
        let json = serde_json::to_string(&ModuleId::CareerOptions).unwrap();
        assert_eq!(json, "\"career-options\"");
        let parsed: ModuleId = serde_json::from_str("\"life-themes\"").unwrap();
        assert_eq!(parsed, ModuleId::LifeThemes);
    }

    #[test]
    fn status_parse_and_gate_requirement() {
        assert_eq!(
            ModuleStatus::from_str("in_progress").unwrap(),
            ModuleStatus::InProgress
        );
        assert!(ModuleStatus::from_str("done").is_err());
        assert!(ModuleStatus::Completed.requires_gate());
        assert!(!ModuleStatus::NotStarted.requires_gate());
    }

    #[test]
    fn role_bypass() {
        assert!(Role::from_str("ADMIN").unwrap().bypasses_gates());
        assert!(Role::SuperAdmin.bypasses_gates());
        assert!(!Role::User.bypasses_gates());
        assert!(Role::from_str("owner").is_err());
    }

    #[test]
    fn user_id_validation() {
        assert!(UserId::parse("user-42@example.com").is_ok());
        assert!(UserId::parse("").is_err());
        assert!(UserId::parse("has space").is_err());
        assert!(UserId::parse("x".repeat(UserId::MAX_LEN + 1)).is_err());
        assert!(serde_json::from_str::<UserId>("\"bad/id\"").is_err());
    }
}
