use std::collections::{BTreeMap, BTreeSet};

use crate::types::ownership::EmployeeKey;

/// One link row reduced to what planning needs. Team links produce one of
/// these per role-row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnerFlag {
    pub employee_key: EmployeeKey,
    pub is_owner: bool,
}

/// Row changes needed to move an entity from its current owner set to the
/// desired one. All lists are sorted and free of duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnerPlan {
    /// Hold at least one owner row but are not desired.
    pub demote: Vec<EmployeeKey>,
    /// Desired, linked, with at least one row not yet flagged owner.
    pub promote: Vec<EmployeeKey>,
    /// Desired with no link row at all.
    pub enroll: Vec<EmployeeKey>,
}

impl OwnerPlan {
    pub fn is_noop(&self) -> bool {
        self.demote.is_empty() && self.promote.is_empty() && self.enroll.is_empty()
    }
}

struct Standing {
    any_owner: bool,
    all_owner: bool,
}

pub fn plan_owner_changes(links: &[OwnerFlag], desired: &BTreeSet<EmployeeKey>) -> OwnerPlan {
    let mut standing: BTreeMap<EmployeeKey, Standing> = BTreeMap::new();
    for link in links {
        let s = standing.entry(link.employee_key).or_insert(Standing {
            any_owner: false,
            all_owner: true,
        });
        s.any_owner |= link.is_owner;
        s.all_owner &= link.is_owner;
    }

    let demote = standing
        .iter()
        .filter(|(key, s)| s.any_owner && !desired.contains(*key))
        .map(|(key, _)| *key)
        .collect();

    let mut promote = Vec::new();
    let mut enroll = Vec::new();
    for key in desired {
        match standing.get(key) {
            Some(s) if s.all_owner => {}
            Some(_) => promote.push(*key),
            None => enroll.push(*key),
        }
    }

    OwnerPlan { demote, promote, enroll }
}
