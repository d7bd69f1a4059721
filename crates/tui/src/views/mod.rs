pub mod episode_list;
pub mod help;
pub mod model_picker;
pub mod summary;
pub mod transcript;
