pub mod is_mobile;
pub mod reveal;

pub use is_mobile::use_is_mobile;
pub use reveal::use_reveal;
