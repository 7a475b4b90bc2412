use crate::server::{
    data::character::CharacterRepository,
    model::character::{CreateCharacterParams, UpdateCharacterParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod update;

fn luke(uid: i32, homeworld: Option<i32>) -> CreateCharacterParams {
    CreateCharacterParams {
        uid,
        name: "Luke Skywalker".to_string(),
        gender: "male".to_string(),
        skin_color: "fair".to_string(),
        hair_color: "blond".to_string(),
        height: 172,
        eye_color: "blue".to_string(),
        mass: 77,
        homeworld,
        birth_year: "19BBY".to_string(),
        url: format!("https://swapi.tech/api/people/{}", uid),
    }
}
