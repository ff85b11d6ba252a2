//! The 19 fine-grained personal values and their fixed grouping into 10 categories.
//!
//! Both orders are alphabetical by value name and are load-bearing: consumers
//! index the derived vectors by position, never by name.

/// Data property names of the 19 fine-grained values, in vector order.
pub const PERSONAL_VALUES_19: [&str; 19] = [
    "achievement",
    "benevolence_caring",
    "benevolence_dependability",
    "conformity_interpersonal",
    "conformity_rules",
    "face",
    "hedonism",
    "humility",
    "power_dominance",
    "power_resources",
    "security_personal",
    "security_societal",
    "self-direction_autonomy_of_action",
    "self-direction_autonomy_of_thought",
    "stimulation",
    "tradition",
    "universalism_concern",
    "universalism_nature",
    "universalism_tolerance",
];

/// One of the 10 collapsed personal value categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueGroup {
    /// Category name, used as the view name for its subtree.
    pub name: &'static str,
    /// Fine-grained data properties that collapse into this category.
    pub members: &'static [&'static str],
}

impl ValueGroup {
    /// Single-member groups copy the raw value instead of collapsing.
    pub fn is_singleton(&self) -> bool {
        self.members.len() == 1
    }
}

/// The 10 categories, in vector order.
///
/// "face" and "humility" belong to no category; they only appear in the
/// 19-slot vector.
pub const PERSONAL_VALUES_10: [ValueGroup; 10] = [
    ValueGroup {
        name: "achievement",
        members: &["achievement"],
    },
    ValueGroup {
        name: "benevolence",
        members: &["benevolence_caring", "benevolence_dependability"],
    },
    ValueGroup {
        name: "conformity",
        members: &["conformity_interpersonal", "conformity_rules"],
    },
    ValueGroup {
        name: "hedonism",
        members: &["hedonism"],
    },
    ValueGroup {
        name: "power",
        members: &["power_dominance", "power_resources"],
    },
    ValueGroup {
        name: "security",
        members: &["security_personal", "security_societal"],
    },
    ValueGroup {
        name: "self-direction",
        members: &[
            "self-direction_autonomy_of_action",
            "self-direction_autonomy_of_thought",
        ],
    },
    ValueGroup {
        name: "stimulation",
        members: &["stimulation"],
    },
    ValueGroup {
        name: "tradition",
        members: &["tradition"],
    },
    ValueGroup {
        name: "universalism",
        members: &[
            "universalism_concern",
            "universalism_nature",
            "universalism_tolerance",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_group_member_is_a_fine_grained_value() {
        for group in PERSONAL_VALUES_10 {
            for member in group.members {
                assert!(PERSONAL_VALUES_19.contains(member), "{member} not in the 19");
            }
        }
    }

    #[test]
    fn face_and_humility_are_ungrouped() {
        let grouped: Vec<&str> = PERSONAL_VALUES_10
            .iter()
            .flat_map(|g| g.members.iter().copied())
            .collect();
        assert_eq!(grouped.len(), 17);
        assert!(!grouped.contains(&"face"));
        assert!(!grouped.contains(&"humility"));
    }
}
