mod coverage;
mod outer_circle;
mod pullout;

pub use coverage::CoverageArrangement;
pub use outer_circle::outer_half_circle;
pub use pullout::{IsPulloutDirection, PulloutDirections, PulloutRange};
