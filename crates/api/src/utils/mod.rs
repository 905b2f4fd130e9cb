pub mod duration;
pub mod fragment;

pub use duration::format_duration;
pub use fragment::validate_fragment;
