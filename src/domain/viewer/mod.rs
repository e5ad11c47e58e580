//! Client-side viewer: fetches the interests list once per mounted instance
//! and renders either the entries or an error line.

pub mod interests_client;
pub mod mount;
pub mod render;
pub mod view_state;

pub use interests_client::{FetchError, HttpInterestsClient, InterestsClient};
pub use mount::Viewer;
pub use view_state::{ViewPhase, ViewState};
