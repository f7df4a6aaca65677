use chrono::NaiveDateTime;
use entity::structure_timer::{TimerObjective, TimerType, TimerVisibility};

/// Validated timer fields from the add or edit form
#[derive(Clone, Debug, PartialEq)]
pub struct TimerInput {
    pub timer_type: TimerType,
    pub eve_solar_system_id: i32,
    pub location_details: String,
    pub structure_type_id: i32,
    pub structure_name: String,
    pub objective: TimerObjective,
    pub date: NaiveDateTime,
    pub is_important: bool,
    pub owner_name: Option<String>,
    pub is_opsec: bool,
    pub visibility: TimerVisibility,
    pub details_image_url: Option<String>,
    pub details_notes: String,
}

/// Creator columns captured when a timer is created
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimerCreator {
    pub user_id: i32,
    pub eve_character_id: Option<i32>,
    pub eve_corporation_id: Option<i32>,
    pub eve_alliance_id: Option<i32>,
}

/// Tabs of the timer list page
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TimerTab {
    /// Timers at or after now, soonest first
    Current,
    /// Timers before now, most recent first
    Past,
}

impl TimerTab {
    pub fn parse(tab_name: &str) -> Option<Self> {
        match tab_name {
            "current" => Some(Self::Current),
            "past" => Some(Self::Past),
            _ => None,
        }
    }
}
