//! Map rendering for the dive dashboard.
//!
//! The equirectangular projection plus the base map and marker renderers,
//! all drawing through the [`Surface`] abstraction.

mod basemap;
mod projection;
mod renderer;
mod surface;

pub use basemap::render_base_map;
pub use projection::{MapProjection, MAP_HEIGHT, MAP_WIDTH};
pub use renderer::{
    render_highlight, render_marker, render_pulse, PULSE_END_RADIUS, PULSE_START_RADIUS,
};
pub use surface::{PainterSurface, Surface};
