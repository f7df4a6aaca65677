//! Declarative test builder.
//!
//! Configuration methods queue tables and fixtures; nothing touches the database until
//! `build()` runs them in dependency order.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{
    constant::{
        CATEGORY_MATERIAL, GROUP_CITADEL, GROUP_ENGINEERING_COMPLEX, GROUP_MINERAL,
        SYSTEM_ABUNE_ID, SYSTEM_ABUNE_NAME, SYSTEM_AMAMAKE_ID, SYSTEM_AMAMAKE_NAME,
        SYSTEM_ENALURI_ID, SYSTEM_ENALURI_NAME, TYPE_ASTRAHUS_ID, TYPE_ASTRAHUS_NAME,
        TYPE_RAITARU_ID, TYPE_RAITARU_NAME, TYPE_TRITANIUM_ID, TYPE_TRITANIUM_NAME,
    },
    error::TestError,
    TestContext,
};

/// Builder for declarative test initialization.
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_timer_tables()
///     .with_default_catalog()
///     .with_mock_character(1001, 2001, Some(3001))
///     .with_user_for_character(1001, &["structuretimers.basic_access"])
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_timer_tables: bool,

    alliances: Vec<i64>,
    corporations: Vec<(i64, Option<i64>)>, // (corporation_id, alliance_id)
    characters: Vec<(i64, i64, Option<i64>)>, // (character_id, corporation_id, alliance_id)
    users_for_characters: Vec<(i64, Vec<String>)>, // (character_id, permissions)

    solar_systems: Vec<(i32, String)>,
    eve_types: Vec<(i32, String, i32, i32)>, // (type_id, name, group_id, category_id)
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_timer_tables: false,
            alliances: Vec::new(),
            corporations: Vec::new(),
            characters: Vec::new(),
            users_for_characters: Vec::new(),
            solar_systems: Vec::new(),
            eve_types: Vec::new(),
        }
    }

    /// Create every table of the schema: the EVE and user tables, the universe catalog,
    /// structure timers and staging systems.
    pub fn with_timer_tables(mut self) -> Self {
        self.include_timer_tables = true;
        self
    }

    /// Add a single entity table, for tests that only need part of the schema.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    pub fn with_mock_alliance(mut self, alliance_id: i64) -> Self {
        self.alliances.push(alliance_id);
        self
    }

    /// Insert a mock corporation, creating its alliance first if needed.
    pub fn with_mock_corporation(mut self, corporation_id: i64, alliance_id: Option<i64>) -> Self {
        self.corporations.push((corporation_id, alliance_id));
        self
    }

    /// Insert a mock character, creating its corporation and alliance first if needed.
    pub fn with_mock_character(
        mut self,
        character_id: i64,
        corporation_id: i64,
        alliance_id: Option<i64>,
    ) -> Self {
        self.characters
            .push((character_id, corporation_id, alliance_id));
        self
    }

    /// Create a user whose main is the given character and grant it `permissions`.
    ///
    /// The character must be queued with [`Self::with_mock_character`]; users are
    /// inserted after every character.
    pub fn with_user_for_character(mut self, character_id: i64, permissions: &[&str]) -> Self {
        self.users_for_characters.push((
            character_id,
            permissions.iter().map(|p| p.to_string()).collect(),
        ));
        self
    }

    pub fn with_solar_system(mut self, solar_system_id: i32, name: &str) -> Self {
        self.solar_systems.push((solar_system_id, name.to_string()));
        self
    }

    pub fn with_eve_type(
        mut self,
        type_id: i32,
        name: &str,
        group_id: i32,
        category_id: i32,
    ) -> Self {
        self.eve_types
            .push((type_id, name.to_string(), group_id, category_id));
        self
    }

    /// Insert the catalog from [`crate::constant`]: Abune, Enaluri and Amamake, the
    /// Astrahus and Raitaru structures, and Tritanium as a non-structure type.
    pub fn with_default_catalog(self) -> Self {
        self.with_solar_system(SYSTEM_ABUNE_ID, SYSTEM_ABUNE_NAME)
            .with_solar_system(SYSTEM_ENALURI_ID, SYSTEM_ENALURI_NAME)
            .with_solar_system(SYSTEM_AMAMAKE_ID, SYSTEM_AMAMAKE_NAME)
            .with_eve_type(
                TYPE_ASTRAHUS_ID,
                TYPE_ASTRAHUS_NAME,
                GROUP_CITADEL,
                entity::eve_type::CATEGORY_STRUCTURE,
            )
            .with_eve_type(
                TYPE_RAITARU_ID,
                TYPE_RAITARU_NAME,
                GROUP_ENGINEERING_COMPLEX,
                entity::eve_type::CATEGORY_STRUCTURE,
            )
            .with_eve_type(
                TYPE_TRITANIUM_ID,
                TYPE_TRITANIUM_NAME,
                GROUP_MINERAL,
                CATEGORY_MATERIAL,
            )
    }

    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_timer_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::EveAlliance),
                schema.create_table_from_entity(entity::prelude::EveCorporation),
                schema.create_table_from_entity(entity::prelude::EveCharacter),
                schema.create_table_from_entity(entity::prelude::AuthUser),
                schema.create_table_from_entity(entity::prelude::AuthUserPermission),
                schema.create_table_from_entity(entity::prelude::EveSolarSystem),
                schema.create_table_from_entity(entity::prelude::EveType),
                schema.create_table_from_entity(entity::prelude::StructureTimer),
                schema.create_table_from_entity(entity::prelude::StagingSystem),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for alliance_id in self.alliances {
            setup.eve().insert_mock_alliance(alliance_id).await?;
        }

        for (corporation_id, alliance_id) in self.corporations {
            setup
                .eve()
                .insert_mock_corporation(corporation_id, alliance_id)
                .await?;
        }

        for (character_id, corporation_id, alliance_id) in self.characters {
            setup
                .eve()
                .insert_mock_character(character_id, corporation_id, alliance_id)
                .await?;
        }

        for (character_id, permissions) in self.users_for_characters {
            let user = setup.user().insert_user_for_character(character_id).await?;
            for permission in permissions {
                setup.user().grant_permission(user.id, &permission).await?;
            }
        }

        for (solar_system_id, name) in self.solar_systems {
            setup
                .universe()
                .insert_solar_system(solar_system_id, &name)
                .await?;
        }

        for (type_id, name, group_id, category_id) in self.eve_types {
            setup
                .universe()
                .insert_eve_type(type_id, &name, group_id, category_id)
                .await?;
        }

        Ok(setup)
    }
}
