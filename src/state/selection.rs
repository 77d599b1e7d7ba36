use crate::models::GeoPoint;

/// Which of the two endpoint markers a click filled.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum MarkerSlot {
    Origin,
    Destination,
}

impl MarkerSlot {
    pub fn label(&self) -> &'static str {
        match self {
            MarkerSlot::Origin => "A",
            MarkerSlot::Destination => "B",
        }
    }
}

/// Origin/destination selection, driven only by map clicks.
///
/// The first click sets the origin, the second the destination, and every
/// further click is ignored until a full reload. Coordinates are taken
/// as-is; range validation is the map SDK's business.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub struct SelectionState {
    origin: Option<GeoPoint>,
    destination: Option<GeoPoint>,
}

impl SelectionState {
    pub fn origin(&self) -> Option<GeoPoint> {
        self.origin
    }

    pub fn destination(&self) -> Option<GeoPoint> {
        self.destination
    }

    /// Both endpoints chosen, so a route may be requested.
    pub fn is_complete(&self) -> bool {
        self.origin.is_some() && self.destination.is_some()
    }

    pub fn endpoints(&self) -> Option<(GeoPoint, GeoPoint)> {
        Some((self.origin?, self.destination?))
    }

    /// Applies a map click. Returns the next state and the marker slot the
    /// click filled, or `None` when both slots were already taken.
    pub fn click(&self, point: GeoPoint) -> (Self, Option<MarkerSlot>) {
        if self.origin.is_none() {
            (
                Self {
                    origin: Some(point),
                    destination: None,
                },
                Some(MarkerSlot::Origin),
            )
        } else if self.destination.is_none() {
            (
                Self {
                    origin: self.origin,
                    destination: Some(point),
                },
                Some(MarkerSlot::Destination),
            )
        } else {
            (*self, None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P1: GeoPoint = GeoPoint { lat: 40.0, lng: -100.0 };
    const P2: GeoPoint = GeoPoint { lat: 41.5, lng: -99.25 };
    const P3: GeoPoint = GeoPoint { lat: 10.0, lng: 10.0 };

    #[test]
    fn starts_empty_and_incomplete() {
        let state = SelectionState::default();
        assert!(state.origin().is_none());
        assert!(state.destination().is_none());
        assert!(!state.is_complete());
        assert!(state.endpoints().is_none());
    }

    #[test]
    fn first_click_sets_origin_only() {
        let (state, slot) = SelectionState::default().click(P1);
        assert_eq!(slot, Some(MarkerSlot::Origin));
        assert_eq!(state.origin(), Some(P1));
        assert!(state.destination().is_none());
        assert!(!state.is_complete());
    }

    #[test]
    fn second_click_completes_and_third_is_ignored() {
        let (state, _) = SelectionState::default().click(P1);
        let (state, slot) = state.click(P2);
        assert_eq!(slot, Some(MarkerSlot::Destination));
        assert!(state.is_complete());
        assert_eq!(state.endpoints(), Some((P1, P2)));

        let (unchanged, slot) = state.click(P3);
        assert_eq!(slot, None);
        assert_eq!(unchanged, state);
    }

    #[test]
    fn marker_labels() {
        assert_eq!(MarkerSlot::Origin.label(), "A");
        assert_eq!(MarkerSlot::Destination.label(), "B");
    }
}
