mod overlay;
mod style;
pub mod surface;
pub mod theme;

pub use overlay::render_hinted_input;
pub use style::{Edges, InputStyle};
pub use surface::Surface;
