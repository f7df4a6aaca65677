//! Timer add/edit form and its validation.
//!
//! [`TimerForm`] is the raw `application/x-www-form-urlencoded` body. [`TimerForm::clean`]
//! checks everything that can be decided without the database and produces a
//! [`TimerInput`]; catalog lookups happen in the timer service.

use std::{collections::BTreeMap, fmt};

use chrono::{NaiveDateTime, TimeDelta};
use entity::structure_timer::{TimerObjective, TimerType, TimerVisibility};
use sea_orm::ActiveEnum;
use serde::Deserialize;

use crate::server::model::{
    db::TimerModel, permission::Permission, timer::TimerInput, viewer::Viewer,
};

pub const MAX_TEXT_LENGTH: usize = 254;
pub const MAX_URL_LENGTH: usize = 1024;

/// Accepted formats of the absolute `date` field, interpreted as UTC
const DATE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

const REQUIRED: &str = "This field is required.";
const INVALID_CHOICE: &str = "Select a valid choice.";

/// Field errors of a rejected form, keyed by field name
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<&'static str, Vec<String>>);

impl FormErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    /// First message for `field`, used by templates to show one error per input
    pub fn first(&self, field: &str) -> Option<&str> {
        self.get(field).first().map(String::as_str)
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{}: {}", field, message)?;
                first = false;
            }
        }

        Ok(())
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct TimerForm {
    pub timer_type: String,
    pub eve_solar_system: String,
    pub location_details: String,
    pub structure_type: String,
    pub structure_name: String,
    pub objective: String,
    pub date: String,
    pub days_left: String,
    pub hours_left: String,
    pub minutes_left: String,
    /// Checkboxes are only submitted when ticked
    pub is_important: Option<String>,
    pub owner_name: String,
    pub is_opsec: Option<String>,
    pub visibility: String,
    pub details_image_url: String,
    pub details_notes: String,
    pub csrf_token: String,
}

/// Body of the remove confirmation form
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RemoveTimerForm {
    pub csrf_token: String,
}

impl TimerForm {
    /// Prefill the edit form from an existing timer.
    pub fn from_timer(timer: &TimerModel) -> Self {
        Self {
            timer_type: timer.timer_type.to_value(),
            eve_solar_system: timer.eve_solar_system_id.to_string(),
            location_details: timer.location_details.clone(),
            structure_type: timer.structure_type_id.to_string(),
            structure_name: timer.structure_name.clone(),
            objective: timer.objective.to_value(),
            date: timer.date.format("%Y-%m-%d %H:%M").to_string(),
            is_important: timer.is_important.then(|| "on".to_string()),
            owner_name: timer.owner_name.clone().unwrap_or_default(),
            is_opsec: timer.is_opsec.then(|| "on".to_string()),
            visibility: timer.visibility.to_value(),
            details_image_url: timer.details_image_url.clone().unwrap_or_default(),
            details_notes: timer.details_notes.clone(),
            ..Default::default()
        }
    }

    pub fn is_important(&self) -> bool {
        is_checked(&self.is_important)
    }

    pub fn is_opsec(&self) -> bool {
        is_checked(&self.is_opsec)
    }

    /// Validate the submitted fields for `viewer`.
    ///
    /// A remaining time (`days_left`, `hours_left`, `minutes_left`) is added to `now`
    /// when no absolute `date` is given.
    pub fn clean(&self, viewer: &Viewer, now: NaiveDateTime) -> Result<TimerInput, FormErrors> {
        let mut errors = FormErrors::default();

        let eve_solar_system_id = parse_id(&self.eve_solar_system, "eve_solar_system", &mut errors);
        let structure_type_id = parse_id(&self.structure_type, "structure_type", &mut errors);

        let timer_type = parse_code(&self.timer_type, TimerType::None, "timer_type", &mut errors);
        let objective = parse_code(
            &self.objective,
            TimerObjective::Undefined,
            "objective",
            &mut errors,
        );
        let visibility = parse_code(
            &self.visibility,
            TimerVisibility::Unrestricted,
            "visibility",
            &mut errors,
        );

        let date = self.clean_date(now, &mut errors);

        let location_details = self.location_details.trim().to_string();
        check_length(&location_details, MAX_TEXT_LENGTH, "location_details", &mut errors);
        let structure_name = self.structure_name.trim().to_string();
        check_length(&structure_name, MAX_TEXT_LENGTH, "structure_name", &mut errors);
        let owner_name = non_empty(&self.owner_name);
        if let Some(owner_name) = &owner_name {
            check_length(owner_name, MAX_TEXT_LENGTH, "owner_name", &mut errors);
        }

        let details_image_url = non_empty(&self.details_image_url);
        if let Some(url) = &details_image_url {
            check_length(url, MAX_URL_LENGTH, "details_image_url", &mut errors);
            if !is_http_url(url) {
                errors.add("details_image_url", "Enter a valid URL.");
            }
        }

        let is_opsec = self.is_opsec();
        if is_opsec && !viewer.has_permission(Permission::ViewOpsecTimer) {
            errors.add("is_opsec", "You are not allowed to create opsec timers.");
        }

        match visibility {
            Some(TimerVisibility::Alliance) if viewer.alliance_id().is_none() => errors.add(
                "visibility",
                "Your main character is not a member of an alliance.",
            ),
            Some(TimerVisibility::Corporation) if viewer.corporation_id().is_none() => {
                errors.add("visibility", "You need a main character to restrict by corporation.")
            }
            _ => {}
        }

        match (
            eve_solar_system_id,
            structure_type_id,
            timer_type,
            objective,
            visibility,
            date,
        ) {
            (
                Some(eve_solar_system_id),
                Some(structure_type_id),
                Some(timer_type),
                Some(objective),
                Some(visibility),
                Some(date),
            ) if errors.is_empty() => Ok(TimerInput {
                timer_type,
                eve_solar_system_id,
                location_details,
                structure_type_id,
                structure_name,
                objective,
                date,
                is_important: self.is_important(),
                owner_name,
                is_opsec,
                visibility,
                details_image_url,
                details_notes: self.details_notes.trim().to_string(),
            }),
            _ => Err(errors),
        }
    }

    fn clean_date(&self, now: NaiveDateTime, errors: &mut FormErrors) -> Option<NaiveDateTime> {
        let date = self.date.trim();
        if !date.is_empty() {
            let parsed = DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(date, format).ok());
            if parsed.is_none() {
                errors.add("date", "Enter a valid date and time.");
            }
            return parsed;
        }

        let days = parse_remaining(&self.days_left, "days_left", errors);
        let hours = parse_remaining(&self.hours_left, "hours_left", errors);
        let minutes = parse_remaining(&self.minutes_left, "minutes_left", errors);

        let (days, hours, minutes) = match (days, hours, minutes) {
            (Ok(days), Ok(hours), Ok(minutes)) => (days, hours, minutes),
            _ => return None,
        };

        if days.is_none() && hours.is_none() && minutes.is_none() {
            errors.add("date", "Enter either a date or the time remaining.");
            return None;
        }

        let remaining = TimeDelta::try_days(days.unwrap_or(0).into())
            .zip(TimeDelta::try_hours(hours.unwrap_or(0).into()))
            .zip(TimeDelta::try_minutes(minutes.unwrap_or(0).into()))
            .and_then(|((d, h), m)| d.checked_add(&h)?.checked_add(&m));

        let date = remaining.and_then(|remaining| now.checked_add_signed(remaining));
        if date.is_none() {
            errors.add("date", "The time remaining is too large.");
        }

        date
    }
}

fn is_checked(value: &Option<String>) -> bool {
    value
        .as_deref()
        .is_some_and(|v| !v.is_empty() && v != "false" && v != "off")
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn is_http_url(value: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        value
            .strip_prefix(scheme)
            .is_some_and(|rest| !rest.is_empty() && !rest.contains(char::is_whitespace))
    })
}

fn parse_id(value: &str, field: &'static str, errors: &mut FormErrors) -> Option<i32> {
    let value = value.trim();
    if value.is_empty() {
        errors.add(field, REQUIRED);
        return None;
    }

    let id = value.parse::<i32>().ok();
    if id.is_none() {
        errors.add(field, INVALID_CHOICE);
    }

    id
}

/// Parse a two letter code, an empty value selects `default`.
fn parse_code<T>(value: &str, default: T, field: &'static str, errors: &mut FormErrors) -> Option<T>
where
    T: ActiveEnum<Value = String>,
{
    let value = value.trim();
    if value.is_empty() {
        return Some(default);
    }

    let code = T::try_from_value(&value.to_string()).ok();
    if code.is_none() {
        errors.add(field, INVALID_CHOICE);
    }

    code
}

/// `Ok(None)` for an empty field, `Err(())` after recording an error.
fn parse_remaining(
    value: &str,
    field: &'static str,
    errors: &mut FormErrors,
) -> Result<Option<u32>, ()> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    match value.parse::<u32>() {
        Ok(number) => Ok(Some(number)),
        Err(_) => {
            errors.add(field, "Enter a whole number of 0 or more.");
            Err(())
        }
    }
}

fn check_length(value: &str, max: usize, field: &'static str, errors: &mut FormErrors) {
    if value.chars().count() > max {
        errors.add(
            field,
            format!("Ensure this value has at most {} characters.", max),
        );
    }
}
