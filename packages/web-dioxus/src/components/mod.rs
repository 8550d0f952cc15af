// UI components for the import flow
pub mod event_preview;
pub mod loading;
pub mod status_message;
pub mod url_form;

pub use event_preview::EventPreview;
pub use loading::LoadingIndicator;
pub use status_message::StatusMessage;
pub use url_form::UrlForm;
