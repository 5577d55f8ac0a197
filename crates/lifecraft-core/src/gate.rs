use crate::error::Result;
use crate::registry::Registry;
use crate::types::ModuleId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ---------------------------------------------------------------------------
// Access
// ---------------------------------------------------------------------------

/// Who is asking. Admins are never locked out of a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Access {
    #[default]
    Learner,
    Admin,
}

impl Access {
    pub fn is_admin(self) -> bool {
        matches!(self, Access::Admin)
    }
}

// ---------------------------------------------------------------------------
// GateDecision
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GateDecision {
    pub can_start: bool,
    /// Unmet prerequisites in declared order. Empty iff `can_start`.
    pub missing_prerequisites: Vec<ModuleId>,
}

impl GateDecision {
    pub fn open() -> Self {
        Self {
            can_start: true,
            missing_prerequisites: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Gating
// ---------------------------------------------------------------------------

/// Can `module` be started given the set of completed modules?
///
/// Unknown modules are an error for every caller, admins included.
pub fn check(
    registry: &Registry,
    module: ModuleId,
    completed: &HashSet<ModuleId>,
) -> Result<GateDecision> {
    let missing: Vec<ModuleId> = registry
        .prerequisites(module)?
        .iter()
        .copied()
        .filter(|p| !completed.contains(p))
        .collect();

    Ok(GateDecision {
        can_start: missing.is_empty(),
        missing_prerequisites: missing,
    })
}

/// `check` with the admin bypass applied.
pub fn check_with_access(
    registry: &Registry,
    module: ModuleId,
    completed: &HashSet<ModuleId>,
    access: Access,
) -> Result<GateDecision> {
    let decision = check(registry, module, completed)?;
    if access.is_admin() {
        return Ok(GateDecision::open());
    }
    Ok(decision)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ModuleDef;
    use crate::types::ModulePart;

    const A: ModuleId = ModuleId::Values;
    const B: ModuleId = ModuleId::Strengths;
    const C: ModuleId = ModuleId::Enneagram;

    fn abc() -> Registry {
        Registry::new(vec![
            ModuleDef::new(A, ModulePart::SelfDiscovery, vec![]),
            ModuleDef::new(B, ModulePart::SelfDiscovery, vec![A]),
            ModuleDef::new(C, ModulePart::SelfDiscovery, vec![A, B]),
        ])
        .unwrap()
    }

    fn set(ids: &[ModuleId]) -> HashSet<ModuleId> {
        ids.iter().copied().collect()
    }

    #[test]
    fn abc_example() {
        let reg = abc();
        let done = set(&[A]);
        assert_eq!(check(&reg, B, &done).unwrap(), GateDecision::open());
        let c = check(&reg, C, &done).unwrap();
        assert!(!c.can_start);
        assert_eq!(c.missing_prerequisites, vec![B]);
    }

    #[test]
    fn no_prerequisites_always_open() {
        let reg = abc();
        for done in [set(&[]), set(&[B]), set(&[A, B, C])] {
            assert!(check(&reg, A, &done).unwrap().can_start);
        }
    }

    #[test]
    fn open_iff_prerequisites_subset() {
        let reg = abc();
        let all = [A, B, C];
        // Every subset of {A, B, C}.
        for mask in 0u8..8 {
            let done: HashSet<ModuleId> = all
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, m)| *m)
                .collect();
            for module in all {
                let prereqs: HashSet<ModuleId> =
                    reg.prerequisites(module).unwrap().iter().copied().collect();
                let decision = check(&reg, module, &done).unwrap();
                assert_eq!(decision.can_start, prereqs.is_subset(&done));
                assert_eq!(decision.can_start, decision.missing_prerequisites.is_empty());
            }
        }
    }

    #[test]
    fn missing_preserves_declared_order() {
        let reg = Registry::lifecraft();
        let decision = check(reg, ModuleId::Vision, &set(&[ModuleId::Strengths])).unwrap();
        assert_eq!(
            decision.missing_prerequisites,
            vec![ModuleId::Values, ModuleId::Enneagram, ModuleId::LifeThemes]
        );
    }

    #[test]
    fn unknown_module_is_rejected() {
        let reg = abc();
        assert!(check(&reg, ModuleId::Errc, &set(&[])).is_err());
        assert!(check_with_access(&reg, ModuleId::Errc, &set(&[]), Access::Admin).is_err());
    }

    #[test]
    fn admin_bypass() {
        let reg = abc();
        let decision = check_with_access(&reg, C, &set(&[]), Access::Admin).unwrap();
        assert_eq!(decision, GateDecision::open());
        let learner = check_with_access(&reg, C, &set(&[]), Access::Learner).unwrap();
        assert_eq!(learner.missing_prerequisites, vec![A, B]);
    }

    #[test]
    fn decision_json_is_camel_case() {
        let json = serde_json::to_value(GateDecision {
            can_start: false,
            missing_prerequisites: vec![ModuleId::LifeThemes],
        })
        .unwrap();
        assert_eq!(json["canStart"], false);
        assert_eq!(json["missingPrerequisites"][0], "life-themes");
    }
}
