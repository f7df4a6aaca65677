//! Universe catalog entries inserted by [`TestBuilder::with_default_catalog`].
//!
//! IDs are the real EVE Online IDs so assertions read the same as in-game data.
//!
//! [`TestBuilder::with_default_catalog`]: crate::TestBuilder::with_default_catalog

pub const SYSTEM_ABUNE_ID: i32 = 30004984;
pub const SYSTEM_ABUNE_NAME: &str = "Abune";
pub const SYSTEM_ENALURI_ID: i32 = 30045339;
pub const SYSTEM_ENALURI_NAME: &str = "Enaluri";
pub const SYSTEM_AMAMAKE_ID: i32 = 30002537;
pub const SYSTEM_AMAMAKE_NAME: &str = "Amamake";

pub const TYPE_ASTRAHUS_ID: i32 = 35832;
pub const TYPE_ASTRAHUS_NAME: &str = "Astrahus";
pub const TYPE_RAITARU_ID: i32 = 35825;
pub const TYPE_RAITARU_NAME: &str = "Raitaru";
pub const TYPE_TRITANIUM_ID: i32 = 34;
pub const TYPE_TRITANIUM_NAME: &str = "Tritanium";

pub const GROUP_CITADEL: i32 = 1657;
pub const GROUP_ENGINEERING_COMPLEX: i32 = 1404;
pub const GROUP_MINERAL: i32 = 18;
pub const CATEGORY_MATERIAL: i32 = 4;
