pub mod config;
pub mod logging;

pub mod embed;
pub mod media_item;
pub mod media_list;
pub mod section;
pub mod url_model;
