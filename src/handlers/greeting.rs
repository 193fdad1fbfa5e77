//! Greeting handler.

use crate::model::Greeting;
use axum::{extract::Query, Json};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct GreetingParams {
    name: Option<String>,
}

pub async fn greeting(Query(params): Query<GreetingParams>) -> Json<Greeting> {
    Json(Greeting::new(greeting_content(params.name.as_deref())))
}

fn greeting_content(name: Option<&str>) -> String {
    format!("Hello, {}!", name.unwrap_or("World"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_defaults_to_world() {
        assert_eq!(greeting_content(None), "Hello, World!");
    }

    #[test]
    fn name_is_interpolated() {
        assert_eq!(greeting_content(Some("sayhi")), "Hello, sayhi!");
    }
}
