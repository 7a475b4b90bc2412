use utoipa::openapi::OpenApi;

use crate::model::sitemap::{EndpointDto, SitemapDto};

/// Lists every documented endpoint of the API.
///
/// Paths come out sorted; within a path methods follow GET, POST, PUT, PATCH, DELETE.
///
/// # Arguments
/// - `api` - OpenAPI document assembled by the router
///
/// # Returns
/// - `SitemapDto` - One entry per path and method pair
pub fn build_sitemap(api: &OpenApi) -> SitemapDto {
    let mut endpoints = Vec::new();

    for (path, item) in api.paths.paths.iter() {
        let operations = [
            ("GET", item.get.is_some()),
            ("POST", item.post.is_some()),
            ("PUT", item.put.is_some()),
            ("PATCH", item.patch.is_some()),
            ("DELETE", item.delete.is_some()),
        ];

        for (method, present) in operations {
            if present {
                endpoints.push(EndpointDto {
                    method: method.to_string(),
                    path: path.clone(),
                });
            }
        }
    }

    endpoints.sort_by(|a, b| a.path.cmp(&b.path));

    SitemapDto { endpoints }
}
