/// UI layer: the sidebar and top-bar widgets plus the five display nodes
/// that turn the shared filtered view into renderable artifacts.

pub mod display;
pub mod histogram;
pub mod panels;
pub mod scatter;
pub mod table;
