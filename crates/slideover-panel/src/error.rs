use crate::surface::SurfaceId;
use std::fmt;

/// Composition-time configuration failures.
///
/// Gesture handling itself never errors; the only way to fail is wiring a
/// panel up against a surface registry that cannot satisfy its config.
#[derive(Debug)]
pub enum PanelError {
    /// The required foreground surface is not in the registry. The panel is
    /// unusable without it, so construction fails rather than deferring the
    /// problem to the first gesture.
    AboveSurfaceUnbound(SurfaceId),
}

impl fmt::Display for PanelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelError::AboveSurfaceUnbound(id) => {
                write!(f, "above surface {id:?} is not bound; set it before composing the panel")
            }
        }
    }
}

impl std::error::Error for PanelError {}
