use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, Order, QueryFilter, QueryOrder,
};

use crate::server::model::timer::{TimerCreator, TimerInput};

pub struct TimerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TimerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        input: TimerInput,
        creator: TimerCreator,
    ) -> Result<entity::structure_timer::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let mut timer = entity::structure_timer::ActiveModel {
            eve_character_id: ActiveValue::Set(creator.eve_character_id),
            eve_corporation_id: ActiveValue::Set(creator.eve_corporation_id),
            eve_alliance_id: ActiveValue::Set(creator.eve_alliance_id),
            user_id: ActiveValue::Set(Some(creator.user_id)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };
        apply_input(&mut timer, input);

        timer.insert(self.db).await
    }

    /// Replace the editable fields of a timer, creator columns are left untouched.
    ///
    /// Returns `None` if the timer does not exist.
    pub async fn update(
        &self,
        timer_id: i32,
        input: TimerInput,
    ) -> Result<Option<entity::structure_timer::Model>, DbErr> {
        let timer = match entity::prelude::StructureTimer::find_by_id(timer_id)
            .one(self.db)
            .await?
        {
            Some(timer) => timer,
            None => return Ok(None),
        };

        let mut timer_am = timer.into_active_model();
        apply_input(&mut timer_am, input);
        timer_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let timer = timer_am.update(self.db).await?;

        Ok(Some(timer))
    }

    pub async fn delete(&self, timer_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::StructureTimer::delete_by_id(timer_id)
            .exec(self.db)
            .await
    }

    pub async fn get_by_id(
        &self,
        timer_id: i32,
    ) -> Result<Option<entity::structure_timer::Model>, DbErr> {
        entity::prelude::StructureTimer::find_by_id(timer_id)
            .one(self.db)
            .await
    }

    /// Timers matching `condition`, ordered by date in `order` then by ID
    pub async fn get_matching(
        &self,
        condition: Condition,
        order: Order,
    ) -> Result<Vec<entity::structure_timer::Model>, DbErr> {
        entity::prelude::StructureTimer::find()
            .filter(condition)
            .order_by(entity::structure_timer::Column::Date, order)
            .order_by_asc(entity::structure_timer::Column::Id)
            .all(self.db)
            .await
    }

    /// Delete every timer dated before `cutoff`, returning the number deleted
    pub async fn delete_older_than(&self, cutoff: NaiveDateTime) -> Result<u64, DbErr> {
        let result = entity::prelude::StructureTimer::delete_many()
            .filter(entity::structure_timer::Column::Date.lt(cutoff))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

fn apply_input(timer: &mut entity::structure_timer::ActiveModel, input: TimerInput) {
    timer.timer_type = ActiveValue::Set(input.timer_type);
    timer.eve_solar_system_id = ActiveValue::Set(input.eve_solar_system_id);
    timer.location_details = ActiveValue::Set(input.location_details);
    timer.structure_type_id = ActiveValue::Set(input.structure_type_id);
    timer.structure_name = ActiveValue::Set(input.structure_name);
    timer.objective = ActiveValue::Set(input.objective);
    timer.date = ActiveValue::Set(input.date);
    timer.is_important = ActiveValue::Set(input.is_important);
    timer.owner_name = ActiveValue::Set(input.owner_name);
    timer.is_opsec = ActiveValue::Set(input.is_opsec);
    timer.visibility = ActiveValue::Set(input.visibility);
    timer.details_image_url = ActiveValue::Set(input.details_image_url);
    timer.details_notes = ActiveValue::Set(input.details_notes);
}
