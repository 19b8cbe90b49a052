pub mod components;
pub mod confirm;
pub mod date_utils;
pub mod icons;
pub mod modal_frame;
pub mod modal_stack;
