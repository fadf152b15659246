pub mod atlas;
pub mod badges;
pub mod popup;
pub mod tables;
