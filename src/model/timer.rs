use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Row of the timer list grid
#[derive(Serialize, Deserialize, Debug, Clone, utoipa::ToSchema)]
pub struct TimerListItemDto {
    pub id: i32,
    /// Event time in UTC
    pub date: NaiveDateTime,
    pub timer_type: String,
    pub timer_type_label: String,
    pub objective: String,
    pub objective_label: String,
    pub structure_display_name: String,
    pub structure_name: String,
    pub owner_name: Option<String>,
    pub visibility: String,
    pub is_important: bool,
    pub is_opsec: bool,
    /// Name of the character that created the timer, if still known
    pub creator_name: Option<String>,
    /// Whether the requesting user may edit or remove the timer
    pub can_modify: bool,
}

/// Full details of a single timer
#[derive(Serialize, Deserialize, Debug, Clone, utoipa::ToSchema)]
pub struct TimerDetailDto {
    pub id: i32,
    /// E.g. `Armor timer for Abune - Planet 5 (Astrahus)`
    pub display_name: String,
    pub date: NaiveDateTime,
    pub timer_type: String,
    pub timer_type_label: String,
    pub objective: String,
    pub objective_label: String,
    pub solar_system_name: String,
    pub location_details: String,
    pub structure_type_name: String,
    pub structure_name: String,
    pub owner_name: Option<String>,
    pub visibility: String,
    pub is_important: bool,
    pub is_opsec: bool,
    pub details_image_url: Option<String>,
    pub details_notes: String,
    pub creator_name: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
