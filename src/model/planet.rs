use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub uid: i32,
    pub name: String,
    pub climate: String,
    pub diameter: i32,
    pub gravity: String,
    pub orbital_period: i32,
    pub population: i64,
    pub rotation_period: i32,
    pub terrain: String,
    pub url: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct CreatePlanetDto {
    pub uid: Option<i32>,
    pub name: Option<String>,
    pub climate: Option<String>,
    pub diameter: Option<i32>,
    pub gravity: Option<String>,
    pub orbital_period: Option<i32>,
    pub population: Option<i64>,
    pub rotation_period: Option<i32>,
    pub terrain: Option<String>,
    pub url: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdatePlanetDto {
    pub uid: Option<i32>,
    pub name: Option<String>,
    pub climate: Option<String>,
    pub diameter: Option<i32>,
    pub gravity: Option<String>,
    pub orbital_period: Option<i32>,
    pub population: Option<i64>,
    pub rotation_period: Option<i32>,
    pub terrain: Option<String>,
    pub url: Option<String>,
}
