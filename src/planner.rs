use crate::activity::{Activity, Rgb, TimeOfDay};
use crate::overlap::is_overlapping;
use crate::store::PlanStore;

pub type Palette = [Rgb; 6];

/// Why an add was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlannerError {
    #[error("Check inputs (Hour 0-23, Min 0-59).")]
    InvalidTime,
    #[error("Start and End time cannot be the same.")]
    SameStartEnd,
    #[error("Please enter activity name.")]
    EmptyDescription,
    #[error("Time overlaps with another task!")]
    Overlap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl PlannerError {
    /// Dialog title and severity the user sees for this rejection.
    pub fn presentation(self) -> (&'static str, Severity) {
        match self {
            PlannerError::InvalidTime => ("Error", Severity::Error),
            PlannerError::SameStartEnd | PlannerError::EmptyDescription => {
                ("Oops", Severity::Warning)
            }
            PlannerError::Overlap => ("Conflict", Severity::Error),
        }
    }
}

/// Raw text of the add-activity form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityForm {
    pub start_hour: String,
    pub start_minute: String,
    pub end_hour: String,
    pub end_minute: String,
    pub description: String,
}

impl ActivityForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A blank field reads as 0; anything else must be an integer.
fn parse_field(raw: &str) -> Result<i64, PlannerError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed.parse().map_err(|_| PlannerError::InvalidTime)
}

fn parse_time(hour: &str, minute: &str) -> Result<TimeOfDay, PlannerError> {
    let hour = parse_field(hour)?;
    let minute = parse_field(minute)?;
    u8::try_from(hour)
        .ok()
        .zip(u8::try_from(minute).ok())
        .and_then(|(h, m)| TimeOfDay::new(h, m))
        .ok_or(PlannerError::InvalidTime)
}

/// Check the form on its own, without looking at existing activities.
pub fn validate(form: &ActivityForm) -> Result<(TimeOfDay, TimeOfDay), PlannerError> {
    let start = parse_time(&form.start_hour, &form.start_minute)?;
    let end = parse_time(&form.end_hour, &form.end_minute)?;
    if start == end {
        return Err(PlannerError::SameStartEnd);
    }
    if form.description.is_empty() {
        return Err(PlannerError::EmptyDescription);
    }
    Ok((start, end))
}

/// Owns the day plan: validates additions, keeps the list sorted, hands out
/// colors and mirrors every change to disk.
pub struct Planner {
    activities: Vec<Activity>,
    color_index: usize,
    palette: Palette,
    store: PlanStore,
}

impl Planner {
    pub fn new(store: PlanStore, palette: Palette) -> Self {
        Self {
            activities: Vec::new(),
            color_index: 0,
            palette,
            store,
        }
    }

    /// Start from whatever the store holds. Any load failure leaves the plan
    /// empty; the color cycle resumes after the loaded entries.
    pub fn load(store: PlanStore, palette: Palette) -> Self {
        let mut planner = Self::new(store, palette);
        match planner.store.load() {
            Ok(activities) => {
                tracing::info!(
                    count = activities.len(),
                    path = %planner.store.path().display(),
                    "plan loaded"
                );
                planner.color_index = activities.len();
                planner.activities = activities;
            }
            Err(e) => {
                tracing::warn!(
                    path = %planner.store.path().display(),
                    error = %e,
                    "ignoring unreadable plan file"
                );
            }
        }
        planner
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn color_index(&self) -> usize {
        self.color_index
    }

    /// Validate `form`, reject overlaps, then insert in start-time order.
    pub fn add(&mut self, form: &ActivityForm) -> Result<&Activity, PlannerError> {
        let (start, end) = validate(form)?;
        if is_overlapping(start.total_minutes(), end.total_minutes(), &self.activities) {
            return Err(PlannerError::Overlap);
        }

        let color = self.palette[self.color_index % self.palette.len()];
        self.color_index += 1;

        let activity = Activity {
            start,
            end,
            description: form.description.clone(),
            color,
        };
        tracing::info!(
            start = %activity.start,
            end = %activity.end,
            minutes = activity.duration_minutes(),
            desc = %activity.description,
            color = %activity.color,
            color_index = self.color_index,
            "activity added"
        );
        self.activities.push(activity);
        self.activities.sort_by_key(Activity::start_minutes);
        self.persist();

        let position = self
            .activities
            .iter()
            .rposition(|a| a.start == start && a.end == end)
            .unwrap_or(self.activities.len() - 1);
        Ok(&self.activities[position])
    }

    /// Remove the entry shown at `index`. Nothing selected or a stale index
    /// is a no-op.
    pub fn delete(&mut self, index: Option<usize>) -> Option<Activity> {
        let index = index.filter(|&i| i < self.activities.len())?;
        let removed = self.activities.remove(index);
        tracing::info!(index, desc = %removed.description, "activity deleted");
        self.persist();
        Some(removed)
    }

    /// Drop every activity. The color cycle keeps counting.
    pub fn reset(&mut self) {
        let count = self.activities.len();
        self.activities.clear();
        tracing::info!(count, "plan reset");
        self.persist();
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.activities) {
            tracing::warn!(
                path = %self.store.path().display(),
                error = %e,
                "failed to save plan"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeColors;

    fn form(sh: &str, sm: &str, eh: &str, em: &str, desc: &str) -> ActivityForm {
        ActivityForm {
            start_hour: sh.into(),
            start_minute: sm.into(),
            end_hour: eh.into(),
            end_minute: em.into(),
            description: desc.into(),
        }
    }

    fn planner_in(dir: &tempfile::TempDir) -> Planner {
        Planner::new(
            PlanStore::new(dir.path().join("firta_plan.json")),
            ThemeColors::light().palette,
        )
    }

    fn starts(p: &Planner) -> Vec<String> {
        p.activities().iter().map(|a| a.start.to_string()).collect()
    }

    #[test]
    fn validate_rejects_out_of_range_and_garbage() {
        for f in [
            form("24", "0", "1", "0", "x"),
            form("1", "60", "2", "0", "x"),
            form("1", "0", "2", "-1", "x"),
            form("ab", "0", "2", "0", "x"),
            form("1.5", "0", "2", "0", "x"),
        ] {
            assert_eq!(validate(&f), Err(PlannerError::InvalidTime), "{f:?}");
        }
    }

    #[test]
    fn validate_blank_fields_are_zero() {
        let (start, end) = validate(&form("", "", "1", "", "Nap")).unwrap();
        assert_eq!(start, TimeOfDay::new(0, 0).unwrap());
        assert_eq!(end, TimeOfDay::new(1, 0).unwrap());
    }

    #[test]
    fn validate_same_start_end() {
        assert_eq!(
            validate(&form("9", "0", "9", "00", "Anything")),
            Err(PlannerError::SameStartEnd)
        );
    }

    #[test]
    fn validate_empty_description() {
        assert_eq!(
            validate(&form("9", "0", "10", "0", "")),
            Err(PlannerError::EmptyDescription)
        );
    }

    #[test]
    fn range_error_reported_before_other_checks() {
        assert_eq!(
            validate(&form("99", "0", "99", "0", "")),
            Err(PlannerError::InvalidTime)
        );
    }

    #[test]
    fn add_keeps_list_sorted_regardless_of_insertion_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut p = planner_in(&dir);
        p.add(&form("14", "0", "15", "0", "Meeting")).unwrap();
        p.add(&form("7", "30", "8", "0", "Coffee")).unwrap();
        p.add(&form("10", "0", "11", "0", "Review")).unwrap();
        assert_eq!(starts(&p), ["07:30", "10:00", "14:00"]);
    }

    #[test]
    fn add_returns_the_inserted_activity() {
        let dir = tempfile::tempdir().unwrap();
        let mut p = planner_in(&dir);
        p.add(&form("14", "0", "15", "0", "Meeting")).unwrap();
        let added = p.add(&form("7", "0", "8", "0", "Coffee")).unwrap();
        assert_eq!(added.description, "Coffee");
    }

    #[test]
    fn overlap_rejected_and_list_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let mut p = planner_in(&dir);
        p.add(&form("9", "0", "12", "0", "Work")).unwrap();
        let before = p.activities().to_vec();
        assert_eq!(
            p.add(&form("11", "0", "13", "0", "Lunch")).unwrap_err(),
            PlannerError::Overlap
        );
        assert_eq!(p.activities(), before.as_slice());
        assert_eq!(p.color_index(), 1);
    }

    #[test]
    fn colors_cycle_and_are_not_reused_after_delete() {
        let dir = tempfile::tempdir().unwrap();
        let mut p = planner_in(&dir);
        let palette = ThemeColors::light().palette;
        p.add(&form("1", "0", "2", "0", "a")).unwrap();
        p.add(&form("2", "0", "3", "0", "b")).unwrap();
        p.delete(Some(1));
        let c = p.add(&form("3", "0", "4", "0", "c")).unwrap().color;
        assert_eq!(c, palette[2]);

        for h in 4..10 {
            p.add(&form(&h.to_string(), "0", &(h + 1).to_string(), "0", "n"))
                .unwrap();
        }
        // 9 successful adds so far; the 10th wraps to palette[3].
        let c = p.add(&form("20", "0", "21", "0", "wrap")).unwrap().color;
        assert_eq!(c, palette[9 % 6]);
    }

    #[test]
    fn delete_removes_displayed_position_only() {
        let dir = tempfile::tempdir().unwrap();
        let mut p = planner_in(&dir);
        p.add(&form("12", "0", "13", "0", "c")).unwrap();
        p.add(&form("8", "0", "9", "0", "a")).unwrap();
        p.add(&form("10", "0", "11", "0", "b")).unwrap();
        p.add(&form("14", "0", "15", "0", "d")).unwrap();

        let removed = p.delete(Some(1)).unwrap();
        assert_eq!(removed.description, "b");
        let names: Vec<&str> = p.activities().iter().map(|a| a.description.as_str()).collect();
        assert_eq!(names, ["a", "c", "d"]);
    }

    #[test]
    fn delete_without_selection_or_stale_index_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut p = planner_in(&dir);
        p.add(&form("8", "0", "9", "0", "a")).unwrap();
        assert!(p.delete(None).is_none());
        assert!(p.delete(Some(5)).is_none());
        assert_eq!(p.activities().len(), 1);
    }

    #[test]
    fn changes_are_persisted_and_reloaded() {
        let dir = tempfile::tempdir().unwrap();
        let mut p = planner_in(&dir);
        p.add(&form("10", "0", "11", "0", "b")).unwrap();
        p.add(&form("8", "15", "9", "45", "a")).unwrap();
        p.add(&form("22", "0", "6", "0", "Sleep")).unwrap();

        let reloaded = Planner::load(
            PlanStore::new(dir.path().join("firta_plan.json")),
            ThemeColors::light().palette,
        );
        assert_eq!(reloaded.activities(), p.activities());
        assert_eq!(reloaded.color_index(), 3);
    }

    #[test]
    fn corrupt_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("firta_plan.json");
        std::fs::write(&path, "[{\"desc\": 1}]").unwrap();
        let p = Planner::load(PlanStore::new(path), ThemeColors::light().palette);
        assert!(p.activities().is_empty());
        assert_eq!(p.color_index(), 0);
    }

    #[test]
    fn unwritable_store_is_silent() {
        let dir = tempfile::tempdir().unwrap();
        // A directory path cannot be written as a file.
        let mut p = Planner::new(PlanStore::new(dir.path()), ThemeColors::light().palette);
        assert!(p.add(&form("8", "0", "9", "0", "a")).is_ok());
        assert_eq!(p.activities().len(), 1);
    }

    #[test]
    fn gym_breakfast_call_then_reset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("firta_plan.json");
        let mut p = planner_in(&dir);
        let palette = ThemeColors::light().palette;

        let gym = p.add(&form("8", "0", "9", "0", "Gym")).unwrap();
        assert_eq!(gym.color, palette[0]);
        p.add(&form("9", "0", "10", "0", "Breakfast")).unwrap();
        assert_eq!(
            p.add(&form("8", "30", "9", "30", "Call")).unwrap_err(),
            PlannerError::Overlap
        );
        assert_eq!(p.activities().len(), 2);

        p.reset();
        assert!(p.activities().is_empty());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
        // Reset does not rewind the color cycle.
        assert_eq!(p.color_index(), 2);
    }

    #[test]
    fn error_presentation() {
        assert_eq!(PlannerError::Overlap.presentation(), ("Conflict", Severity::Error));
        assert_eq!(PlannerError::InvalidTime.presentation().1, Severity::Error);
        assert_eq!(PlannerError::EmptyDescription.presentation().1, Severity::Warning);
        assert_eq!(
            PlannerError::Overlap.to_string(),
            "Time overlaps with another task!"
        );
    }
}
