mod add_timer;
mod edit_timer;
mod remove_timer;

use structuretimers::server::model::form::TimerForm;

use super::*;

/// A valid armor timer in Abune, submitted with `csrf_token`
fn armor_timer_form(csrf_token: String) -> TimerForm {
    TimerForm {
        timer_type: "AR".to_string(),
        eve_solar_system: SYSTEM_ABUNE_ID.to_string(),
        location_details: "Planet 5".to_string(),
        structure_type: TYPE_ASTRAHUS_ID.to_string(),
        structure_name: "Big House".to_string(),
        objective: "HO".to_string(),
        date: "2030-01-01 12:00".to_string(),
        csrf_token,
        ..Default::default()
    }
}
