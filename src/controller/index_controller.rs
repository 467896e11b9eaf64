use axum::response::Html;

const LANDING_PAGE: &str = include_str!("../../templates/index.html");

pub async fn index() -> Html<&'static str> {
    Html(LANDING_PAGE)
}
