pub mod main_content;

pub use main_content::MainContentState;
