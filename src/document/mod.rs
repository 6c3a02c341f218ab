pub(crate) mod io;
pub(crate) mod models;

pub use io::{STDIO, load, save};
pub use models::{Document, Element};
