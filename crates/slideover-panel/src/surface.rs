use slideover_core::{MutableState, State};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Identifier a surface is registered and looked up under.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SurfaceId(String);

impl SurfaceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SurfaceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A visual element with a fixed width and an observable horizontal offset.
///
/// The offset is the one piece of state shared between gesture handling and
/// layout: the gesture machine writes it, the layout coupling observes it.
/// Width is fixed for the surface's lifetime; the external layout system
/// owns everything else about the element.
pub struct Surface {
    id: SurfaceId,
    width: f32,
    offset: MutableState<f32>,
}

impl Surface {
    /// Creates a surface at offset 0.
    pub fn new(id: impl Into<SurfaceId>, width: f32) -> Rc<Self> {
        Rc::new(Self {
            id: id.into(),
            width,
            offset: MutableState::new(0.0),
        })
    }

    pub fn id(&self) -> &SurfaceId {
        &self.id
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn x(&self) -> f32 {
        self.offset.get()
    }

    pub fn set_x(&self, x: f32) {
        self.offset.set_value(x);
    }

    /// The writable offset cell. Animations drive this directly.
    pub fn offset(&self) -> MutableState<f32> {
        self.offset.clone()
    }

    /// Read-only view of the offset for observers that must not write.
    pub fn offset_state(&self) -> State<f32> {
        self.offset.as_state()
    }
}

impl fmt::Debug for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Surface")
            .field("id", &self.id)
            .field("width", &self.width)
            .field("x", &self.x())
            .finish()
    }
}

/// Composition-time lookup of surfaces by identifier.
#[derive(Default)]
pub struct SurfaceRegistry {
    surfaces: HashMap<SurfaceId, Rc<Surface>>,
}

impl SurfaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, surface: Rc<Surface>) {
        self.surfaces.insert(surface.id().clone(), surface);
    }

    pub fn get(&self, id: &SurfaceId) -> Option<Rc<Surface>> {
        self.surfaces.get(id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_resolves_by_id() {
        let mut registry = SurfaceRegistry::new();
        let surface = Surface::new("above", 600.0);
        registry.insert(Rc::clone(&surface));

        let found = registry.get(&SurfaceId::new("above")).expect("registered");
        assert_eq!(found.width(), 600.0);
        assert!(registry.get(&SurfaceId::new("missing")).is_none());
    }

    #[test]
    fn surface_offset_starts_at_zero_and_is_observable() {
        let surface = Surface::new("above", 600.0);
        assert_eq!(surface.x(), 0.0);
        let view = surface.offset_state();
        surface.set_x(-40.0);
        assert_eq!(view.get(), -40.0);
    }
}
