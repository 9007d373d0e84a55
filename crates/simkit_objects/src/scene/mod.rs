//! Render-side state of a simulated object

mod appearance;
mod transform;

pub use appearance::Appearance;
pub use transform::VisualTransform;
