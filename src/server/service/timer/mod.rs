//! Timer listing, lookup and editing under the visibility rules.

pub mod visibility;

use std::collections::HashMap;

use chrono::{NaiveDateTime, TimeDelta};
use entity::structure_timer::Column;
use sea_orm::{ColumnTrait, Condition, DatabaseConnection, Order};

use crate::{
    model::timer::{TimerDetailDto, TimerListItemDto},
    server::{
        data::{
            eve::character::CharacterRepository,
            timer::TimerRepository,
            universe::{eve_type::EveTypeRepository, solar_system::SolarSystemRepository},
        },
        error::{timer::TimerError, Error},
        model::{
            db::{EveSolarSystemModel, EveTypeModel, TimerModel},
            form::{FormErrors, TimerForm},
            permission::Permission,
            timer::{TimerInput, TimerTab},
            viewer::Viewer,
        },
    },
};

use self::visibility::{is_visible_to, visible_timers_condition};

pub struct TimerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TimerService<'a> {
    /// Creates a new instance of [`TimerService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Timers of `tab` visible to `viewer`.
    ///
    /// `Current` holds timers dated at or after `now`, soonest first. `Past` holds the
    /// rest, most recent first.
    pub async fn list_timers(
        &self,
        viewer: &Viewer,
        tab: TimerTab,
        now: NaiveDateTime,
    ) -> Result<Vec<TimerListItemDto>, Error> {
        let (date_condition, order) = match tab {
            TimerTab::Current => (Column::Date.gte(now), Order::Asc),
            TimerTab::Past => (Column::Date.lt(now), Order::Desc),
        };
        let condition = Condition::all()
            .add(date_condition)
            .add(visible_timers_condition(viewer));

        let timers = TimerRepository::new(self.db)
            .get_matching(condition, order)
            .await?;
        let names = self.load_names(&timers).await?;

        let items = timers
            .into_iter()
            .map(|timer| TimerListItemDto {
                id: timer.id,
                date: timer.date,
                timer_type: timer.timer_type.display_name().to_string(),
                timer_type_label: timer.timer_type.label_type().to_string(),
                objective: timer.objective.display_name().to_string(),
                objective_label: timer.objective.label_type().to_string(),
                structure_display_name: names.structure_display_name(&timer),
                can_modify: can_modify(viewer, &timer),
                creator_name: names.creator_name(&timer),
                structure_name: timer.structure_name,
                owner_name: timer.owner_name,
                visibility: timer.visibility.display_name().to_string(),
                is_important: timer.is_important,
                is_opsec: timer.is_opsec,
            })
            .collect();

        Ok(items)
    }

    /// Timer `timer_id` if it exists and `viewer` may see it.
    ///
    /// # Returns
    /// - `Ok(TimerModel)` - Timer found and visible
    /// - `Err(Error::TimerError(TimerError::TimerNotFound))` - Timer missing or hidden
    /// - `Err(Error)` - Database error
    pub async fn get_visible_timer(
        &self,
        viewer: &Viewer,
        timer_id: i32,
    ) -> Result<TimerModel, Error> {
        match TimerRepository::new(self.db).get_by_id(timer_id).await? {
            Some(timer) if is_visible_to(&timer, viewer) => Ok(timer),
            _ => Err(TimerError::TimerNotFound(timer_id).into()),
        }
    }

    pub async fn get_timer_details(
        &self,
        viewer: &Viewer,
        timer_id: i32,
    ) -> Result<TimerDetailDto, Error> {
        let timer = self.get_visible_timer(viewer, timer_id).await?;
        let names = self.load_names(std::slice::from_ref(&timer)).await?;

        Ok(TimerDetailDto {
            id: timer.id,
            display_name: names.display_name(&timer),
            date: timer.date,
            timer_type: timer.timer_type.display_name().to_string(),
            timer_type_label: timer.timer_type.label_type().to_string(),
            objective: timer.objective.display_name().to_string(),
            objective_label: timer.objective.label_type().to_string(),
            solar_system_name: names.solar_system_name(&timer).to_string(),
            structure_type_name: names.structure_type_name(&timer).to_string(),
            creator_name: names.creator_name(&timer),
            location_details: timer.location_details,
            structure_name: timer.structure_name,
            owner_name: timer.owner_name,
            visibility: timer.visibility.display_name().to_string(),
            is_important: timer.is_important,
            is_opsec: timer.is_opsec,
            details_image_url: timer.details_image_url,
            details_notes: timer.details_notes,
            created_at: timer.created_at,
            updated_at: timer.updated_at,
        })
    }

    /// `"{timer type} timer for {structure display name}"`, used on confirmation pages
    pub async fn get_display_name(&self, timer: &TimerModel) -> Result<String, Error> {
        let names = self.load_names(std::slice::from_ref(timer)).await?;

        Ok(names.display_name(timer))
    }

    /// Validate `form` and create a timer owned by `viewer`.
    ///
    /// # Returns
    /// - `Ok(TimerModel)` - Timer created
    /// - `Err(Error::AuthError(AuthError::MissingPermission))` - Viewer may not create timers
    /// - `Err(Error::TimerError(TimerError::InvalidForm))` - Form has field errors
    /// - `Err(Error)` - Database error
    pub async fn create_timer(
        &self,
        viewer: &Viewer,
        form: &TimerForm,
        now: NaiveDateTime,
    ) -> Result<TimerModel, Error> {
        viewer.require(Permission::CreateTimer)?;

        let input = self.validate(viewer, form, now).await?;
        let timer = TimerRepository::new(self.db)
            .create(input, viewer.as_creator())
            .await?;

        tracing::info!(
            timer_id = %timer.id,
            user_id = %viewer.user_id,
            "Created structure timer"
        );

        Ok(timer)
    }

    /// Validate `form` and replace the fields of timer `timer_id`.
    ///
    /// The creator of a timer is never changed by an edit. Editors without
    /// `view_opsec_timer` are not offered the opsec flag, so the stored flag is kept.
    pub async fn update_timer(
        &self,
        viewer: &Viewer,
        timer_id: i32,
        form: &TimerForm,
        now: NaiveDateTime,
    ) -> Result<TimerModel, Error> {
        let timer = self.get_modifiable_timer(viewer, timer_id).await?;

        let mut input = self.validate(viewer, form, now).await?;
        if !viewer.has_permission(Permission::ViewOpsecTimer) {
            input.is_opsec = timer.is_opsec;
        }
        let timer = TimerRepository::new(self.db)
            .update(timer.id, input)
            .await?
            .ok_or(TimerError::TimerNotFound(timer_id))?;

        tracing::info!(
            timer_id = %timer.id,
            user_id = %viewer.user_id,
            "Updated structure timer"
        );

        Ok(timer)
    }

    pub async fn delete_timer(&self, viewer: &Viewer, timer_id: i32) -> Result<(), Error> {
        let timer = self.get_modifiable_timer(viewer, timer_id).await?;

        TimerRepository::new(self.db).delete(timer.id).await?;

        tracing::info!(
            timer_id = %timer.id,
            user_id = %viewer.user_id,
            "Deleted structure timer"
        );

        Ok(())
    }

    /// Visible timer that `viewer` may also edit and remove.
    ///
    /// Hidden timers are reported as not found, visible ones the viewer may not modify
    /// as a missing `manage_timer` permission.
    pub async fn get_modifiable_timer(
        &self,
        viewer: &Viewer,
        timer_id: i32,
    ) -> Result<TimerModel, Error> {
        let timer = self.get_visible_timer(viewer, timer_id).await?;

        if !can_modify(viewer, &timer) {
            viewer.require(Permission::ManageTimer)?;
        }

        Ok(timer)
    }

    /// Delete timers dated more than `days` days before `now`, returning how many
    pub async fn delete_obsolete_timers(
        &self,
        days: u32,
        now: NaiveDateTime,
    ) -> Result<u64, Error> {
        let cutoff = TimeDelta::try_days(days.into())
            .and_then(|age| now.checked_sub_signed(age))
            .ok_or_else(|| {
                Error::ParseError(format!("Timer age of {} days is out of range", days))
            })?;

        let deleted = TimerRepository::new(self.db)
            .delete_older_than(cutoff)
            .await?;

        Ok(deleted)
    }

    async fn validate(
        &self,
        viewer: &Viewer,
        form: &TimerForm,
        now: NaiveDateTime,
    ) -> Result<TimerInput, Error> {
        let input = form
            .clean(viewer, now)
            .map_err(TimerError::InvalidForm)?;

        let mut errors = FormErrors::default();

        if SolarSystemRepository::new(self.db)
            .get_by_id(input.eve_solar_system_id)
            .await?
            .is_none()
        {
            errors.add("eve_solar_system", "Select a valid choice.");
        }

        match EveTypeRepository::new(self.db)
            .get_by_id(input.structure_type_id)
            .await?
        {
            Some(eve_type) if eve_type.is_structure() => {}
            Some(_) => errors.add("structure_type", "This type is not a structure."),
            None => errors.add("structure_type", "Select a valid choice."),
        }

        if !errors.is_empty() {
            return Err(TimerError::InvalidForm(errors).into());
        }

        Ok(input)
    }

    async fn load_names(&self, timers: &[TimerModel]) -> Result<TimerNames, Error> {
        let mut solar_system_ids: Vec<i32> = timers.iter().map(|t| t.eve_solar_system_id).collect();
        solar_system_ids.sort_unstable();
        solar_system_ids.dedup();

        let mut type_ids: Vec<i32> = timers.iter().map(|t| t.structure_type_id).collect();
        type_ids.sort_unstable();
        type_ids.dedup();

        let mut character_ids: Vec<i32> = timers.iter().filter_map(|t| t.eve_character_id).collect();
        character_ids.sort_unstable();
        character_ids.dedup();

        let solar_systems = SolarSystemRepository::new(self.db)
            .get_many_by_ids(&solar_system_ids)
            .await?;
        let eve_types = EveTypeRepository::new(self.db)
            .get_many_by_ids(&type_ids)
            .await?;
        let characters = CharacterRepository::new(self.db)
            .get_many_by_ids(&character_ids)
            .await?;

        Ok(TimerNames {
            solar_systems: solar_systems.into_iter().map(|s| (s.id, s)).collect(),
            eve_types: eve_types.into_iter().map(|t| (t.id, t)).collect(),
            characters: characters.into_iter().map(|c| (c.id, c.name)).collect(),
        })
    }
}

/// Whether `viewer` may edit and remove `timer`: its creator, or anyone with `manage_timer`
pub fn can_modify(viewer: &Viewer, timer: &TimerModel) -> bool {
    timer.user_id == Some(viewer.user_id) || viewer.has_permission(Permission::ManageTimer)
}

/// `"{system}{ - location details} ({structure type})"`
pub fn structure_display_name(
    solar_system_name: &str,
    location_details: &str,
    structure_type_name: &str,
) -> String {
    if location_details.is_empty() {
        format!("{} ({})", solar_system_name, structure_type_name)
    } else {
        format!(
            "{} - {} ({})",
            solar_system_name, location_details, structure_type_name
        )
    }
}

/// Catalog and character names referenced by a batch of timers
struct TimerNames {
    solar_systems: HashMap<i32, EveSolarSystemModel>,
    eve_types: HashMap<i32, EveTypeModel>,
    characters: HashMap<i32, String>,
}

impl TimerNames {
    fn solar_system_name(&self, timer: &TimerModel) -> &str {
        self.solar_systems
            .get(&timer.eve_solar_system_id)
            .map(|s| s.name.as_str())
            .unwrap_or("?")
    }

    fn structure_type_name(&self, timer: &TimerModel) -> &str {
        self.eve_types
            .get(&timer.structure_type_id)
            .map(|t| t.name.as_str())
            .unwrap_or("?")
    }

    fn creator_name(&self, timer: &TimerModel) -> Option<String> {
        timer
            .eve_character_id
            .and_then(|id| self.characters.get(&id).cloned())
    }

    fn structure_display_name(&self, timer: &TimerModel) -> String {
        structure_display_name(
            self.solar_system_name(timer),
            &timer.location_details,
            self.structure_type_name(timer),
        )
    }

    fn display_name(&self, timer: &TimerModel) -> String {
        format!(
            "{} timer for {}",
            timer.timer_type.display_name(),
            self.structure_display_name(timer)
        )
    }
}
