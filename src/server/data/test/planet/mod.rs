use crate::server::{
    data::planet::PlanetRepository,
    model::planet::{CreatePlanetParams, UpdatePlanetParams},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod update;

fn tatooine(uid: i32) -> CreatePlanetParams {
    CreatePlanetParams {
        uid,
        name: "Tatooine".to_string(),
        climate: "arid".to_string(),
        diameter: 10465,
        gravity: "1 standard".to_string(),
        orbital_period: 304,
        population: 200_000,
        rotation_period: 23,
        terrain: "desert".to_string(),
        url: format!("https://swapi.tech/api/planets/{}", uid),
    }
}
