//! Slot computation settings.
//!
//! Every field has a default, so `{}` is a valid configuration document and
//! reproduces plain UTC stepping with no warning buffer.

use chrono::Duration;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::tz::{parse_timezone, DstPolicy};

pub const DEFAULT_HORIZON_DAYS: u32 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotConfig {
    /// Minutes before another booking's start within which a free slot ends
    /// up flagged with `warning`. Zero disables warnings.
    pub buffer_minutes: u32,
    /// IANA timezone the branch's working hours are expressed in.
    pub timezone: String,
    pub dst_policy: DstPolicy,
    /// How far ahead the booking screen lets customers pick a slot.
    pub horizon_days: u32,
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self {
            buffer_minutes: 0,
            timezone: "UTC".to_string(),
            dst_policy: DstPolicy::default(),
            horizon_days: DEFAULT_HORIZON_DAYS,
        }
    }
}

impl SlotConfig {
    /// Parse a (possibly partial) JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| SlotError::Config(e.to_string()))?;
        config.tz()?;
        Ok(config)
    }

    pub fn tz(&self) -> Result<Tz> {
        parse_timezone(&self.timezone)
    }

    pub fn buffer(&self) -> Duration {
        Duration::minutes(i64::from(self.buffer_minutes))
    }
}
