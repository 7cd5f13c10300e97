//! Layout coupling between the two surfaces.

use crate::surface::Surface;
use slideover_core::Subscription;
use std::rc::Rc;

/// Keeps a dependent surface glued to the right edge of an observed one.
///
/// Whenever the observed (above) surface's offset changes, the dependent
/// (below) surface is repositioned to `below.width + above.x`: flush with
/// the above surface's trailing edge, so sliding the above surface left by
/// `n` pixels reveals exactly `n` pixels of the below surface.
///
/// The rule is a pure function of the observed offset; the behavior itself
/// holds no state beyond its subscription and detaches when dropped.
pub struct RightEdgeBehavior {
    _subscription: Subscription,
}

impl RightEdgeBehavior {
    pub fn attach(below: Rc<Surface>, above: &Surface) -> Self {
        // Apply once up front so the surfaces start glued rather than
        // waiting for the first drag.
        below.set_x(below.width() + above.x());

        let dependent = Rc::clone(&below);
        let subscription = above
            .offset()
            .subscribe(move |above_x| dependent.set_x(dependent.width() + above_x));

        log::debug!(
            "behavior attached: {} follows right edge of {}",
            below.id(),
            above.id()
        );
        Self {
            _subscription: subscription,
        }
    }
}
