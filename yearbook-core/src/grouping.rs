use crate::models::{DecadeBucket, School};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Group name used for schools missing the grouping field
pub const UNSPECIFIED_GROUP: &str = "_unspecified_";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupField {
    Country,
    Decade,
}

impl FromStr for GroupField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "country" => Ok(GroupField::Country),
            "decade" => Ok(GroupField::Decade),
            other => Err(format!(
                "Unknown group field '{}' (expected country or decade)",
                other
            )),
        }
    }
}

impl fmt::Display for GroupField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupField::Country => write!(f, "country"),
            GroupField::Decade => write!(f, "decade"),
        }
    }
}

/// Group schools by country or founding decade
/// Schools keep their relative order inside each group
pub fn group_schools(schools: &[School], field: GroupField) -> HashMap<String, Vec<School>> {
    let mut groups: HashMap<String, Vec<School>> = HashMap::new();

    for school in schools {
        let key = match field {
            GroupField::Country => school.classified_country().map(str::to_string),
            GroupField::Decade => school.decade_label(),
        };

        groups
            .entry(key.unwrap_or_else(|| UNSPECIFIED_GROUP.to_string()))
            .or_default()
            .push(school.clone());
    }

    groups
}

/// Get display-ordered group names
/// Countries ascend, decades run newest first, the unspecified group is always last
pub fn sorted_group_names(groups: &HashMap<String, Vec<School>>, field: GroupField) -> Vec<String> {
    let mut group_names: Vec<String> = groups
        .keys()
        .filter(|name| name.as_str() != UNSPECIFIED_GROUP)
        .cloned()
        .collect();

    match field {
        GroupField::Country => group_names.sort(),
        GroupField::Decade => group_names.sort_by_key(|name| {
            std::cmp::Reverse(DecadeBucket::from_label(name).map(|b| b.start))
        }),
    }

    if groups.contains_key(UNSPECIFIED_GROUP) {
        group_names.push(UNSPECIFIED_GROUP.to_string());
    }

    group_names
}
