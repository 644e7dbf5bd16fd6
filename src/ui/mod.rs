pub mod components;
pub mod icon;
pub mod motion;
pub mod pages;
pub mod sync;
pub mod widgets;

pub use icon::{Icon, icons};
