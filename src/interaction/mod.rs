pub mod drag;
pub mod engagement;
pub mod scroll;
pub mod scroll_lock;
