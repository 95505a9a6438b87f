mod error;
mod gradient;
mod options;
mod point;
pub mod strategy;

pub use error::GradientError;
pub use gradient::Gradient;
pub use options::GradientOptions;
pub use point::Point;
