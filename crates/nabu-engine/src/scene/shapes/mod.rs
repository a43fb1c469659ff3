pub(crate) mod text;

pub use text::TextCmd;
