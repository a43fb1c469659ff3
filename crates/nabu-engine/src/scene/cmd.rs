use crate::scene::shapes::TextCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - teach `render::rasterize` to paint it
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Text(TextCmd),
}
