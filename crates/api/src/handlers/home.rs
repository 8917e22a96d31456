/// GET /
///
/// Plain-text landing page.
pub async fn home_page() -> &'static str {
    "Welcome to the HomePage!"
}
