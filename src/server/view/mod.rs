//! HTML pages rendered with askama.
//!
//! Templates live in `templates/` at the crate root. Template structs hold precomputed
//! values so the templates themselves stay free of logic.

use askama::Template;
use axum::response::Html;
use entity::structure_timer::{TimerObjective, TimerType, TimerVisibility};
use sea_orm::{ActiveEnum, Iterable};

use crate::{
    model::universe::Select2ResultDto,
    server::{
        error::Error,
        model::form::{FormErrors, TimerForm},
    },
};

/// Render a template into an HTML response body.
pub fn render<T: Template>(template: &T) -> Result<Html<String>, Error> {
    Ok(Html(template.render()?))
}

/// Option of a `<select>` element
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    fn for_enum<T>(current: &str, label: fn(&T) -> &'static str) -> Vec<Self>
    where
        T: ActiveEnum<Value = String> + Iterable,
    {
        T::iter()
            .map(|variant| {
                let value = variant.to_value();
                Self {
                    selected: value == current,
                    label: label(&variant).to_string(),
                    value,
                }
            })
            .collect()
    }
}

#[derive(Template)]
#[template(path = "timer_list.html")]
pub struct TimerListTemplate {
    pub can_create: bool,
    /// Label of the main staging system, shown above the tabs
    pub staging_system: Option<String>,
}

/// Whether the form creates a new timer or edits an existing one
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormAction {
    Add,
    Edit(i32),
}

#[derive(Template)]
#[template(path = "timer_form.html")]
pub struct TimerFormTemplate {
    pub title: &'static str,
    pub action_url: String,
    pub submit_label: &'static str,
    pub form: TimerForm,
    pub errors: FormErrors,
    pub csrf_token: String,
    pub timer_types: Vec<SelectOption>,
    pub objectives: Vec<SelectOption>,
    pub visibilities: Vec<SelectOption>,
    pub solar_system: Option<Select2ResultDto>,
    pub structure_type: Option<Select2ResultDto>,
    /// Only users allowed to see opsec timers get the opsec checkbox
    pub can_opsec: bool,
}

impl TimerFormTemplate {
    pub fn new(
        action: FormAction,
        form: TimerForm,
        errors: FormErrors,
        csrf_token: String,
        (solar_system, structure_type): (Option<Select2ResultDto>, Option<Select2ResultDto>),
        can_opsec: bool,
    ) -> Self {
        let (title, action_url, submit_label) = match action {
            FormAction::Add => ("Create new timer", "/timers/add".to_string(), "Create"),
            FormAction::Edit(timer_id) => (
                "Edit timer",
                format!("/timers/edit/{}", timer_id),
                "Update",
            ),
        };

        let timer_types = SelectOption::for_enum::<TimerType>(
            non_empty_or(&form.timer_type, "NO"),
            TimerType::display_name,
        );
        let objectives = SelectOption::for_enum::<TimerObjective>(
            non_empty_or(&form.objective, "UN"),
            TimerObjective::display_name,
        );
        let visibilities = SelectOption::for_enum::<TimerVisibility>(
            non_empty_or(&form.visibility, "UN"),
            TimerVisibility::display_name,
        );

        Self {
            title,
            action_url,
            submit_label,
            form,
            errors,
            csrf_token,
            timer_types,
            objectives,
            visibilities,
            solar_system,
            structure_type,
            can_opsec,
        }
    }
}

fn non_empty_or<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() {
        default
    } else {
        value
    }
}

#[derive(Template)]
#[template(path = "timer_remove.html")]
pub struct TimerRemoveTemplate {
    pub timer_id: i32,
    pub display_name: String,
    pub csrf_token: String,
}
