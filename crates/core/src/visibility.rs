use lil_protocol::{NodeBox, Viewport};

/// Whether an element is on screen.
///
/// An element counts as visible when its top edge or its bottom edge lies
/// inside the viewport (edges inclusive). An element that covers the whole
/// viewport with both edges outside it is not reported visible.
pub fn is_visible(node: &NodeBox, viewport: &Viewport) -> bool {
    let (top, bottom) = (viewport.top(), viewport.bottom());
    let within = |y: f64| y >= top && y <= bottom;
    within(node.top) || within(node.bottom())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(scroll_y: f64) -> Viewport {
        Viewport::new(scroll_y, 1024.0, 600.0, 1.0)
    }

    #[test]
    fn node_inside_viewport() {
        assert!(is_visible(&NodeBox::new(100.0, 50.0), &viewport(0.0)));
    }

    #[test]
    fn top_edge_only() {
        // Top at 550, bottom at 750; viewport spans 0..600.
        assert!(is_visible(&NodeBox::new(550.0, 200.0), &viewport(0.0)));
    }

    #[test]
    fn bottom_edge_only() {
        // Viewport spans 1000..1600; node spans 900..1100.
        assert!(is_visible(&NodeBox::new(900.0, 200.0), &viewport(1000.0)));
    }

    #[test]
    fn edges_are_inclusive() {
        assert!(is_visible(&NodeBox::new(600.0, 10.0), &viewport(0.0)));
        assert!(is_visible(&NodeBox::new(-10.0, 10.0), &viewport(0.0)));
    }

    #[test]
    fn below_and_above_fold() {
        assert!(!is_visible(&NodeBox::new(601.0, 100.0), &viewport(0.0)));
        assert!(!is_visible(&NodeBox::new(100.0, 100.0), &viewport(500.0)));
    }

    #[test]
    fn oversized_node_spanning_viewport() {
        assert!(!is_visible(&NodeBox::new(-100.0, 1000.0), &viewport(0.0)));
    }
}
