pub mod app;
pub mod error_dialog;
pub mod filter_form;

pub use app::{render_app, PageProps};
pub use error_dialog::{render_error_dialog, ErrorDialogProps};
pub use filter_form::{render_filter_form, FilterFormProps};
