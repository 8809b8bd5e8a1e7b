pub mod form_view;
pub mod reference_view;

pub use form_view::FormView;
pub use reference_view::{ReferenceAction, ReferenceView};
