use axum::response::Html;

const INPUT_FORM: &str = include_str!("../static/input.html");

/// Serves the manual input form. Query parameters are ignored.
pub async fn input_handler() -> Html<&'static str> {
    Html(INPUT_FORM)
}
