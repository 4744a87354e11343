//! Pure rendering functions, separate from widget state

pub mod loader_display;
pub mod text_display;

pub use loader_display::{
    render_loader, scale_role, DotPosition, LoaderFrame, LoaderGeometry, ScaleRole,
};
pub use text_display::{
    fit_label_size, fit_text_size, measure_text_width, render_pulsing_text, TEXT_DESIRED_HEIGHT,
    TEXT_DESIRED_WIDTH,
};
