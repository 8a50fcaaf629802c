pub mod sea;
pub mod toast;
