mod page;
mod photo;
mod video;

pub use page::*;
pub use photo::*;
pub use video::*;
