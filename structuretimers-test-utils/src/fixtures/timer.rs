use chrono::{NaiveDateTime, Utc};
use entity::structure_timer::{TimerObjective, TimerType, TimerVisibility};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::{SYSTEM_ABUNE_ID, TYPE_ASTRAHUS_ID},
    error::TestError,
    TestContext,
};

impl TestContext {
    pub fn timer<'a>(&'a self) -> TimerFixtures<'a> {
        TimerFixtures { setup: self }
    }
}

pub struct TimerFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> TimerFixtures<'a> {
    pub async fn insert_timer(
        &self,
        timer: entity::structure_timer::ActiveModel,
    ) -> Result<entity::structure_timer::Model, TestError> {
        Ok(entity::prelude::StructureTimer::insert(timer)
            .exec_with_returning(&self.setup.db)
            .await?)
    }
}

/// Unrestricted, non-opsec Astrahus timer in Abune without a creator.
///
/// Requires the default catalog. Override fields with struct update syntax:
///
/// ```ignore
/// let timer = entity::structure_timer::ActiveModel {
///     visibility: ActiveValue::Set(TimerVisibility::Corporation),
///     ..mock_timer(now + Duration::hours(4))
/// };
/// ```
pub fn mock_timer(date: NaiveDateTime) -> entity::structure_timer::ActiveModel {
    let now = Utc::now().naive_utc();

    entity::structure_timer::ActiveModel {
        timer_type: ActiveValue::Set(TimerType::None),
        eve_solar_system_id: ActiveValue::Set(SYSTEM_ABUNE_ID),
        location_details: ActiveValue::Set(String::new()),
        structure_type_id: ActiveValue::Set(TYPE_ASTRAHUS_ID),
        structure_name: ActiveValue::Set(String::new()),
        objective: ActiveValue::Set(TimerObjective::Undefined),
        date: ActiveValue::Set(date),
        is_important: ActiveValue::Set(false),
        owner_name: ActiveValue::Set(None),
        is_opsec: ActiveValue::Set(false),
        eve_character_id: ActiveValue::Set(None),
        eve_corporation_id: ActiveValue::Set(None),
        eve_alliance_id: ActiveValue::Set(None),
        visibility: ActiveValue::Set(TimerVisibility::Unrestricted),
        user_id: ActiveValue::Set(None),
        details_image_url: ActiveValue::Set(None),
        details_notes: ActiveValue::Set(String::new()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
}

/// Set the creator columns of `timer` from a character row and an optional user.
pub fn with_creator(
    mut timer: entity::structure_timer::ActiveModel,
    character: &entity::eve_character::Model,
    user_id: Option<i32>,
) -> entity::structure_timer::ActiveModel {
    timer.eve_character_id = ActiveValue::Set(Some(character.id));
    timer.eve_corporation_id = ActiveValue::Set(Some(character.corporation_id));
    timer.eve_alliance_id = ActiveValue::Set(character.alliance_id);
    timer.user_id = ActiveValue::Set(user_id);
    timer
}
