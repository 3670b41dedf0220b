pub mod interrupt;
pub mod render;
pub mod session;

pub use render::render_page;
pub use session::{Command, Session};
