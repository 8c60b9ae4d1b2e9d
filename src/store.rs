use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::activity::{Activity, Rgb, TimeOfDay};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("plan file I/O: {0}")]
    Io(#[from] std::io::Error),
    #[error("plan file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("record {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
}

/// On-disk shape of one activity, as written.
#[derive(Debug, Serialize)]
struct StoredActivity<'a> {
    start_h: u8,
    start_m: u8,
    end_h: u8,
    end_m: u8,
    desc: &'a str,
    color: String,
}

/// On-disk shape as read. Older files carry whole hours in `start`/`end`
/// and no minute fields; `start_h`/`end_h` win when both are present.
#[derive(Debug, Deserialize)]
struct RawActivity {
    #[serde(default)]
    start_h: Option<i64>,
    #[serde(default)]
    start: Option<i64>,
    #[serde(default)]
    start_m: Option<i64>,
    #[serde(default)]
    end_h: Option<i64>,
    #[serde(default)]
    end: Option<i64>,
    #[serde(default)]
    end_m: Option<i64>,
    desc: String,
    color: String,
}

impl RawActivity {
    fn into_activity(self, index: usize) -> Result<Activity, StoreError> {
        let invalid = |reason: String| StoreError::InvalidRecord { index, reason };
        let time = |hour: i64, minute: i64| {
            u8::try_from(hour)
                .ok()
                .zip(u8::try_from(minute).ok())
                .and_then(|(h, m)| TimeOfDay::new(h, m))
                .ok_or_else(|| invalid(format!("time {hour}:{minute} out of range")))
        };

        let start = time(
            self.start_h.or(self.start).unwrap_or(0),
            self.start_m.unwrap_or(0),
        )?;
        let end = time(self.end_h.or(self.end).unwrap_or(0), self.end_m.unwrap_or(0))?;
        let color: Rgb = self.color.parse().map_err(|e| invalid(format!("{e}")))?;

        Ok(Activity {
            start,
            end,
            description: self.desc,
            color,
        })
    }
}

/// Whole-file JSON persistence for the day plan.
#[derive(Debug, Clone)]
pub struct PlanStore {
    path: PathBuf,
}

impl PlanStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every stored activity in file order. A missing file is an empty
    /// plan; any bad record fails the whole load.
    pub fn load(&self) -> Result<Vec<Activity>, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let raw: Vec<RawActivity> = serde_json::from_str(&content)?;
        raw.into_iter()
            .enumerate()
            .map(|(i, r)| r.into_activity(i))
            .collect()
    }

    /// Overwrite the file with `activities`.
    pub fn save(&self, activities: &[Activity]) -> Result<(), StoreError> {
        let records: Vec<StoredActivity<'_>> = activities
            .iter()
            .map(|a| StoredActivity {
                start_h: a.start.hour(),
                start_m: a.start.minute(),
                end_h: a.end.hour(),
                end_m: a.end.minute(),
                desc: &a.description,
                color: a.color.to_string(),
            })
            .collect();
        let json = serde_json::to_string(&records)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}
