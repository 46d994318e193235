use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::primitives::datetime_to_unix_seconds;
use crate::error::{TimelineError, TimelineResult};

/// Opaque activity identifier, unique within one data set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityId(String);

impl ActivityId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ActivityId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for ActivityId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resource lane key (machine, person, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceKey(String);

impl ResourceKey {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ResourceKey {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for ResourceKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Timed activity as provided by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    pub start: f64,
    pub finish: f64,
    pub resource: ResourceKey,
}

impl Activity {
    #[must_use]
    pub fn new(
        id: impl Into<ActivityId>,
        start: f64,
        finish: f64,
        resource: impl Into<ResourceKey>,
    ) -> Self {
        Self {
            id: id.into(),
            start,
            finish,
            resource: resource.into(),
        }
    }

    /// Checked constructor rejecting non-finite or reversed time bounds.
    pub fn try_new(
        id: impl Into<ActivityId>,
        start: f64,
        finish: f64,
        resource: impl Into<ResourceKey>,
    ) -> TimelineResult<Self> {
        let activity = Self::new(id, start, finish, resource);
        activity.validate()?;
        Ok(activity)
    }

    /// Builds an activity from UTC bounds, using unix seconds as time units.
    pub fn from_datetimes(
        id: impl Into<ActivityId>,
        start: DateTime<Utc>,
        finish: DateTime<Utc>,
        resource: impl Into<ResourceKey>,
    ) -> TimelineResult<Self> {
        Self::try_new(
            id,
            datetime_to_unix_seconds(start),
            datetime_to_unix_seconds(finish),
            resource,
        )
    }

    pub fn validate(&self) -> TimelineResult<()> {
        if !self.start.is_finite() || !self.finish.is_finite() {
            return Err(TimelineError::InvalidData(format!(
                "activity `{}` times must be finite",
                self.id
            )));
        }
        if self.finish < self.start {
            return Err(TimelineError::InvalidData(format!(
                "activity `{}` finishes before it starts",
                self.id
            )));
        }
        Ok(())
    }
}

/// Checks the assumptions the store makes about a data set.
///
/// The store itself does not call this; hosts that do not control their
/// input can run it before dispatching.
pub fn validate_activities(activities: &[Activity]) -> TimelineResult<()> {
    let mut seen = HashSet::with_capacity(activities.len());
    for activity in activities {
        activity.validate()?;
        if !seen.insert(&activity.id) {
            return Err(TimelineError::InvalidData(format!(
                "duplicate activity id `{}`",
                activity.id
            )));
        }
    }
    Ok(())
}

/// Activity annotated with its drag-tentative placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedActivity {
    pub activity: Activity,
    pub updated_start: f64,
    pub updated_finish: f64,
    pub updated_series: ResourceKey,
}

impl PositionedActivity {
    #[must_use]
    pub fn id(&self) -> &ActivityId {
        &self.activity.id
    }

    /// Collapses the updated placement into a plain activity.
    #[must_use]
    pub fn commit(&self) -> Activity {
        Activity {
            id: self.activity.id.clone(),
            start: self.updated_start,
            finish: self.updated_finish,
            resource: self.updated_series.clone(),
        }
    }
}

impl From<&Activity> for PositionedActivity {
    fn from(activity: &Activity) -> Self {
        Self {
            activity: activity.clone(),
            updated_start: activity.start,
            updated_finish: activity.finish,
            updated_series: activity.resource.clone(),
        }
    }
}

#[must_use]
pub fn position_activities(activities: &[Activity]) -> Vec<PositionedActivity> {
    activities.iter().map(PositionedActivity::from).collect()
}

#[cfg(test)]
mod tests {
    use super::{Activity, validate_activities};

    #[test]
    fn duplicate_ids_are_reported() {
        let data = vec![
            Activity::new("a", 0.0, 1.0, "r1"),
            Activity::new("a", 2.0, 3.0, "r2"),
        ];
        let err = validate_activities(&data).expect_err("duplicate id must fail");
        assert!(format!("{err}").contains("duplicate activity id `a`"));
    }

    #[test]
    fn reversed_bounds_are_reported() {
        let err = Activity::try_new("b", 5.0, 1.0, "r1").expect_err("reversed must fail");
        assert!(format!("{err}").contains("finishes before it starts"));
    }

    #[test]
    fn zero_length_activity_is_accepted() {
        assert!(Activity::try_new("c", 4.0, 4.0, "r1").is_ok());
    }
}
