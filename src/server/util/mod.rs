pub mod json;
pub mod path;
pub mod sitemap;
pub mod validate;
