use crate::error::{LifecraftError, Result};
use crate::types::{ModuleId, ModulePart};
use serde::Serialize;
use std::collections::HashSet;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// ModuleDef
// ---------------------------------------------------------------------------

/// Static description of one guided module.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDef {
    pub id: ModuleId,
    pub name: &'static str,
    pub name_ko: &'static str,
    pub description: &'static str,
    pub route: &'static str,
    pub part: ModulePart,
    pub stages: Vec<&'static str>,
    /// Modules that must be completed before this one can start, in the
    /// order they are reported when missing.
    pub prerequisites: Vec<ModuleId>,
}

impl ModuleDef {
    /// Bare definition with no metadata. Handy for ad-hoc registries.
    pub fn new(id: ModuleId, part: ModulePart, prerequisites: Vec<ModuleId>) -> Self {
        Self {
            id,
            name: id.as_str(),
            name_ko: id.as_str(),
            description: "",
            route: "",
            part,
            stages: Vec::new(),
            prerequisites,
        }
    }

    pub fn has_stage(&self, stage: &str) -> bool {
        self.stages.iter().any(|s| *s == stage)
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Ordered, validated set of module definitions.
///
/// Every prerequisite must name a module declared earlier in the list, so the
/// dependency graph is acyclic by construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Registry {
    modules: Vec<ModuleDef>,
}

impl Registry {
    pub fn new(modules: Vec<ModuleDef>) -> Result<Self> {
        let mut seen: HashSet<ModuleId> = HashSet::new();
        for def in &modules {
            let mut declared: HashSet<ModuleId> = HashSet::new();
            for prereq in &def.prerequisites {
                if *prereq == def.id {
                    return Err(LifecraftError::InvalidRegistry(format!(
                        "module '{}' lists itself as a prerequisite",
                        def.id
                    )));
                }
                if !declared.insert(*prereq) {
                    return Err(LifecraftError::InvalidRegistry(format!(
                        "module '{}' lists prerequisite '{}' twice",
                        def.id, prereq
                    )));
                }
                if !seen.contains(prereq) {
                    let reason = if modules.iter().any(|m| m.id == *prereq) {
                        "must be declared before it"
                    } else {
                        "is not in the registry"
                    };
                    return Err(LifecraftError::InvalidRegistry(format!(
                        "prerequisite '{}' of module '{}' {}",
                        prereq, def.id, reason
                    )));
                }
            }
            if !seen.insert(def.id) {
                return Err(LifecraftError::InvalidRegistry(format!(
                    "module '{}' declared twice",
                    def.id
                )));
            }
        }
        Ok(Self { modules })
    }

    /// The shared LifeCraft journey.
    pub fn lifecraft() -> &'static Registry {
        static REGISTRY: OnceLock<Registry> = OnceLock::new();
        REGISTRY.get_or_init(|| {
            Registry {
                modules: lifecraft_modules(),
            }
        })
    }

    pub fn modules(&self) -> &[ModuleDef] {
        &self.modules
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn contains(&self, id: ModuleId) -> bool {
        self.modules.iter().any(|m| m.id == id)
    }

    /// Look up a module, rejecting ids this registry does not declare.
    pub fn get(&self, id: ModuleId) -> Result<&ModuleDef> {
        self.modules
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(|| LifecraftError::UnknownModule(id.to_string()))
    }

    /// 1-based position in declared order.
    pub fn position(&self, id: ModuleId) -> Result<usize> {
        self.modules
            .iter()
            .position(|m| m.id == id)
            .map(|i| i + 1)
            .ok_or_else(|| LifecraftError::UnknownModule(id.to_string()))
    }

    pub fn prerequisites(&self, id: ModuleId) -> Result<&[ModuleId]> {
        Ok(self.get(id)?.prerequisites.as_slice())
    }

    pub fn ids(&self) -> impl Iterator<Item = ModuleId> + '_ {
        self.modules.iter().map(|m| m.id)
    }

    pub fn in_part(&self, part: ModulePart) -> impl Iterator<Item = &ModuleDef> + '_ {
        self.modules.iter().filter(move |m| m.part == part)
    }
}

// ---------------------------------------------------------------------------
// LifeCraft module table
// ---------------------------------------------------------------------------

/// Linear progression: each module requires every module before it.
fn lifecraft_modules() -> Vec<ModuleDef> {
    let table: [(ModuleId, &str, &str, &str, &str, ModulePart, &[&str]); 10] = [
        (
            ModuleId::Values,
            "Values Discovery",
            "가치관 발견",
            "Identify your terminal, instrumental, and work values",
            "/discover/values",
            ModulePart::SelfDiscovery,
            &["terminal", "instrumental", "work"],
        ),
        (
            ModuleId::Strengths,
            "Strengths Assessment",
            "강점 발견",
            "Discover your unique strengths through guided conversation",
            "/discover/strengths",
            ModulePart::SelfDiscovery,
            &["conversation", "analysis", "summary"],
        ),
        (
            ModuleId::Enneagram,
            "Enneagram Assessment",
            "에니어그램",
            "Discover your Enneagram personality type",
            "/discover/enneagram",
            ModulePart::SelfDiscovery,
            &["screener", "discriminators", "wings", "narrative", "complete"],
        ),
        (
            ModuleId::LifeThemes,
            "Life Themes Discovery",
            "생애 주제",
            "Discover recurring themes in your life through reflective questions",
            "/discover/life-themes",
            ModulePart::SelfDiscovery,
            &[
                "role-models",
                "media",
                "hobbies",
                "mottos",
                "subjects",
                "memories",
                "patterns",
                "themes",
                "results",
            ],
        ),
        (
            ModuleId::Vision,
            "Vision Statement",
            "비전 선언문",
            "Craft your personal vision statement and map your dreams",
            "/discover/vision",
            ModulePart::VisionMission,
            &["time-horizon", "step1", "step2", "step3", "dreams"],
        ),
        (
            ModuleId::Mission,
            "Mission Statement",
            "사명 선언문",
            "Write a mission statement grounded in your values and purpose",
            "/discover/mission",
            ModulePart::VisionMission,
            &["values", "purpose", "draft", "refine", "final"],
        ),
        (
            ModuleId::CareerOptions,
            "Career Options",
            "진로 탐색",
            "Explore career options matched to your Holland code",
            "/discover/career-options",
            ModulePart::StrategicAnalysis,
            &["holland", "suggestions", "exploration", "comparison", "choices"],
        ),
        (
            ModuleId::Swot,
            "SWOT Analysis",
            "SWOT 분석",
            "Strategic self-analysis with goal setting",
            "/discover/swot",
            ModulePart::StrategicAnalysis,
            &["analysis", "strategy", "prioritization", "goals", "action", "reflection"],
        ),
        (
            ModuleId::Goals,
            "Goal Setting (OKR)",
            "목표 설정",
            "OKR-based role-focused goal setting",
            "/discover/goals",
            ModulePart::GoalSetting,
            &["roles", "objectives", "key-results", "actions", "reflection"],
        ),
        (
            ModuleId::Errc,
            "ERRC Action Plan",
            "ERRC 실행 계획",
            "Eliminate, reduce, raise and create for a better life balance",
            "/discover/errc",
            ModulePart::GoalSetting,
            &[
                "wellbeing_before",
                "canvas",
                "actions",
                "progress",
                "journal",
                "wellbeing_after",
                "results",
            ],
        ),
    ];

    let mut earlier: Vec<ModuleId> = Vec::new();
    table
        .into_iter()
        .map(|(id, name, name_ko, description, route, part, stages)| {
            let def = ModuleDef {
                id,
                name,
                name_ko,
                description,
                route,
                part,
                stages: stages.to_vec(),
                prerequisites: earlier.clone(),
            };
            earlier.push(id);
            def
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecraft_registry_is_valid() {
        let reg = Registry::lifecraft();
        // Rebuilding through the validating constructor must succeed.
        Registry::new(reg.modules().to_vec()).unwrap();
        assert_eq!(reg.len(), 10);
        let ids: Vec<ModuleId> = reg.ids().collect();
        assert_eq!(ids, ModuleId::all().to_vec());
    }

    #[test]
    fn lifecraft_registry_is_linear() {
        let reg = Registry::lifecraft();
        assert!(reg.prerequisites(ModuleId::Values).unwrap().is_empty());
        assert_eq!(
            reg.prerequisites(ModuleId::Enneagram).unwrap(),
            &[ModuleId::Values, ModuleId::Strengths]
        );
        assert_eq!(reg.prerequisites(ModuleId::Errc).unwrap().len(), 9);
        assert_eq!(reg.position(ModuleId::Swot).unwrap(), 8);
    }

    #[test]
    fn parts_cover_registry() {
        let reg = Registry::lifecraft();
        let total: usize = ModulePart::all()
            .iter()
            .map(|p| reg.in_part(*p).count())
            .sum();
        assert_eq!(total, reg.len());
        assert_eq!(reg.in_part(ModulePart::SelfDiscovery).count(), 4);
    }

    #[test]
    fn unknown_module_lookup_fails() {
        let reg = Registry::new(vec![ModuleDef::new(
            ModuleId::Values,
            ModulePart::SelfDiscovery,
            vec![],
        )])
        .unwrap();
        assert!(matches!(
            reg.get(ModuleId::Goals),
            Err(LifecraftError::UnknownModule(_))
        ));
    }

    #[test]
    fn rejects_forward_prerequisite() {
        let result = Registry::new(vec![
            ModuleDef::new(
                ModuleId::Values,
                ModulePart::SelfDiscovery,
                vec![ModuleId::Strengths],
            ),
            ModuleDef::new(ModuleId::Strengths, ModulePart::SelfDiscovery, vec![]),
        ]);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("must be declared before it"), "{err}");
    }

    #[test]
    fn rejects_missing_prerequisite() {
        let result = Registry::new(vec![ModuleDef::new(
            ModuleId::Vision,
            ModulePart::VisionMission,
            vec![ModuleId::Values],
        )]);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("is not in the registry"), "{err}");
    }

    #[test]
    fn rejects_duplicates_and_self_reference() {
        let dup = Registry::new(vec![
            ModuleDef::new(ModuleId::Values, ModulePart::SelfDiscovery, vec![]),
            ModuleDef::new(ModuleId::Values, ModulePart::SelfDiscovery, vec![]),
        ]);
        assert!(matches!(dup, Err(LifecraftError::InvalidRegistry(_))));

        let own = Registry::new(vec![ModuleDef::new(
            ModuleId::Values,
            ModulePart::SelfDiscovery,
            vec![ModuleId::Values],
        )]);
        assert!(matches!(own, Err(LifecraftError::InvalidRegistry(_))));

        let twice = Registry::new(vec![
            ModuleDef::new(ModuleId::Values, ModulePart::SelfDiscovery, vec![]),
            ModuleDef::new(
                ModuleId::Strengths,
                ModulePart::SelfDiscovery,
                vec![ModuleId::Values, ModuleId::Values],
            ),
        ]);
        assert!(matches!(twice, Err(LifecraftError::InvalidRegistry(_))));
    }

    #[test]
    fn stage_lookup() {
        let def = Registry::lifecraft().get(ModuleId::Values).unwrap();
        assert!(def.has_stage("instrumental"));
        assert!(!def.has_stage("canvas"));
    }
}
