use sea_orm::DatabaseConnection;

use crate::{
    model::universe::{Select2ResponseDto, Select2ResultDto},
    server::{
        data::universe::{
            eve_type::EveTypeRepository, solar_system::SolarSystemRepository,
            staging_system::StagingSystemRepository,
        },
        error::Error,
        model::form::TimerForm,
    },
};

pub struct UniverseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UniverseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Solar systems for the select2 widget. A blank term yields no results.
    pub async fn search_solar_systems(&self, term: &str) -> Result<Select2ResponseDto, Error> {
        let term = term.trim();
        if term.is_empty() {
            return Ok(Select2ResponseDto { results: vec![] });
        }

        let results = SolarSystemRepository::new(self.db)
            .search_by_name(term)
            .await?
            .into_iter()
            .map(|s| Select2ResultDto {
                id: s.id,
                text: s.name,
            })
            .collect();

        Ok(Select2ResponseDto { results })
    }

    /// Structure types for the select2 widget. A blank term yields no results.
    pub async fn search_structure_types(&self, term: &str) -> Result<Select2ResponseDto, Error> {
        let term = term.trim();
        if term.is_empty() {
            return Ok(Select2ResponseDto { results: vec![] });
        }

        let results = EveTypeRepository::new(self.db)
            .search_structure_types(term)
            .await?
            .into_iter()
            .map(|t| Select2ResultDto {
                id: t.id,
                text: t.name,
            })
            .collect();

        Ok(Select2ResponseDto { results })
    }

    /// Catalog entries currently selected in `form`, to prefill its select2 widgets
    pub async fn get_form_selection(
        &self,
        form: &TimerForm,
    ) -> Result<(Option<Select2ResultDto>, Option<Select2ResultDto>), Error> {
        let solar_system = match form.eve_solar_system.trim().parse::<i32>() {
            Ok(id) => SolarSystemRepository::new(self.db)
                .get_by_id(id)
                .await?
                .map(|s| Select2ResultDto {
                    id: s.id,
                    text: s.name,
                }),
            Err(_) => None,
        };

        let structure_type = match form.structure_type.trim().parse::<i32>() {
            Ok(id) => EveTypeRepository::new(self.db)
                .get_by_id(id)
                .await?
                .map(|t| Select2ResultDto {
                    id: t.id,
                    text: t.name,
                }),
            Err(_) => None,
        };

        Ok((solar_system, structure_type))
    }

    /// Label of the main staging system, e.g. `Home (Amamake)`
    pub async fn get_main_staging_system(&self) -> Result<Option<String>, Error> {
        let main = StagingSystemRepository::new(self.db).get_main().await?;

        Ok(main.map(|(staging, solar_system)| match solar_system {
            Some(solar_system) => format!("{} ({})", staging.name, solar_system.name),
            None => staging.name,
        }))
    }
}
