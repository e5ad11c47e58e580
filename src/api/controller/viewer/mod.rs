//! Viewer controller: mounts one viewer per page request and renders it

use axum::extract::State;
use axum::response::Html;

use crate::app_state::AppState;
use crate::domain::viewer::render::render_page;
use crate::domain::viewer::Viewer;

pub struct ViewerController;

impl ViewerController {
    pub async fn page(State(state): State<AppState>) -> Html<String> {
        let view = Viewer::mount(state.viewer_client.clone()).settle().await;
        Html(render_page(&state.page_title, &view))
    }
}
