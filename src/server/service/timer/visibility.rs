//! Which timers a viewer may see.
//!
//! A timer is visible to the user who created it. Anyone else sees it when its
//! visibility scope matches the viewer's main character (unrestricted, same alliance,
//! or same corporation) and, for opsec timers, when they hold the opsec permission.
//! Viewers without a main character only match unrestricted timers.
//!
//! The rule exists as a query [`Condition`] for lists and as a predicate for single
//! timers, and both must agree.

use entity::structure_timer::{Column, TimerVisibility};
use sea_orm::{ColumnTrait, Condition};

use crate::server::model::{db::TimerModel, permission::Permission, viewer::Viewer};

/// Query condition selecting the timers visible to `viewer`
pub fn visible_timers_condition(viewer: &Viewer) -> Condition {
    let mut scope = Condition::any().add(Column::Visibility.eq(TimerVisibility::Unrestricted));

    if let Some(alliance_id) = viewer.alliance_id() {
        scope = scope.add(
            Condition::all()
                .add(Column::Visibility.eq(TimerVisibility::Alliance))
                .add(Column::EveAllianceId.eq(alliance_id)),
        );
    }

    if let Some(corporation_id) = viewer.corporation_id() {
        scope = scope.add(
            Condition::all()
                .add(Column::Visibility.eq(TimerVisibility::Corporation))
                .add(Column::EveCorporationId.eq(corporation_id)),
        );
    }

    let mut shared = Condition::all().add(scope);
    if !viewer.has_permission(Permission::ViewOpsecTimer) {
        shared = shared.add(Column::IsOpsec.eq(false));
    }

    Condition::any()
        .add(Column::UserId.eq(viewer.user_id))
        .add(shared)
}

/// Whether `viewer` may see `timer`
pub fn is_visible_to(timer: &TimerModel, viewer: &Viewer) -> bool {
    if timer.user_id == Some(viewer.user_id) {
        return true;
    }

    let scope_ok = match timer.visibility {
        TimerVisibility::Unrestricted => true,
        TimerVisibility::Alliance => {
            viewer.alliance_id().is_some() && timer.eve_alliance_id == viewer.alliance_id()
        }
        TimerVisibility::Corporation => {
            viewer.corporation_id().is_some() && timer.eve_corporation_id == viewer.corporation_id()
        }
    };

    scope_ok && (!timer.is_opsec || viewer.has_permission(Permission::ViewOpsecTimer))
}
