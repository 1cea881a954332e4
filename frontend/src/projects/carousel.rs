//! Scroll position and pause state of the auto-scrolling project strip.
//!
//! The strip renders the project list twice in a row. Scrolling through the
//! first copy and jumping back to zero at its end is invisible, because the
//! second copy shows exactly what offset zero shows.

/// Distance the strip moves per animation frame.
pub const SCROLL_STEP: f64 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState {
    offset: f64,
    paused: bool,
    step: f64,
}

impl Default for CarouselState {
    fn default() -> Self {
        Self::new(SCROLL_STEP)
    }
}

impl CarouselState {
    pub fn new(step: f64) -> Self {
        Self {
            offset: 0.0,
            paused: false,
            step,
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Advances one frame given the full scroll width of the doubled strip.
    /// Returns the offset to apply, or `None` when nothing moved.
    pub fn tick(&mut self, total_width: f64) -> Option<f64> {
        if self.paused || total_width <= 0.0 {
            return None;
        }
        let half = total_width / 2.0;
        let next = self.offset + self.step;
        self.offset = if next >= half { 0.0 } else { next };
        Some(self.offset)
    }

    // Hovering any card stops the whole strip; the index is not consulted.
    pub fn on_pointer_enter(&mut self, _card_index: usize) {
        self.paused = true;
    }

    pub fn on_pointer_leave(&mut self, _card_index: usize) {
        self.paused = false;
    }

    /// Start over, used when the project list is replaced.
    pub fn reset(&mut self) {
        self.offset = 0.0;
    }
}

/// Whether the frame loop should be running at all.
pub fn should_animate(project_count: usize, loading: bool) -> bool {
    !loading && project_count > 0
}

/// The rendered card sequence: the list followed by itself.
pub fn looped<T>(projects: &[T]) -> impl Iterator<Item = (usize, &T)> {
    projects.iter().chain(projects.iter()).enumerate()
}

/// Maps a rendered card index back to the project it shows.
pub fn resolve<T>(projects: &[T], render_index: usize) -> Option<&T> {
    if projects.is_empty() {
        return None;
    }
    projects.get(render_index % projects.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_at_half_width() {
        // 3 cards of 100 each, rendered twice.
        let total = 600.0;
        let mut state = CarouselState::new(50.0);
        let offsets: Vec<f64> = (0..7).filter_map(|_| state.tick(total)).collect();
        assert_eq!(offsets, vec![50.0, 100.0, 150.0, 200.0, 250.0, 0.0, 50.0]);
    }

    #[test]
    fn offset_stays_below_half_with_default_step() {
        let total = 301.0;
        let mut state = CarouselState::default();
        for _ in 0..5_000 {
            let offset = state.tick(total).unwrap();
            assert!((0.0..total / 2.0).contains(&offset));
        }
    }

    #[test]
    fn wrap_point_shows_the_same_cards_as_zero() {
        let projects = ["A", "B", "C"];
        let rendered: Vec<&str> = looped(&projects).map(|(_, p)| *p).collect();
        let card_width = 100.0;
        let total = rendered.len() as f64 * card_width;
        let window = |offset: f64| {
            let first = (offset / card_width) as usize;
            rendered[first..first + projects.len()].to_vec()
        };

        let step = 25.0;
        let mut state = CarouselState::new(step);
        let mut before_wrap = state.offset();
        let wrapped = loop {
            let offset = state.tick(total).unwrap();
            if offset < before_wrap {
                break offset;
            }
            // Every position reached keeps a full window of cards on screen.
            assert_eq!(window(offset).len(), projects.len());
            before_wrap = offset;
        };

        let would_have_reached = before_wrap + step;
        assert_eq!(would_have_reached, total / 2.0);
        assert_eq!(wrapped, 0.0);
        assert_eq!(window(would_have_reached), window(wrapped));
        assert_eq!(window(wrapped), vec!["A", "B", "C"]);
    }

    #[test]
    fn pause_is_idempotent() {
        let mut state = CarouselState::new(1.0);
        state.tick(100.0);
        state.on_pointer_enter(0);
        state.on_pointer_enter(4);
        assert!(state.is_paused());
        assert_eq!(state.tick(100.0), None);
        assert_eq!(state.offset(), 1.0);

        state.on_pointer_leave(4);
        state.on_pointer_leave(0);
        assert!(!state.is_paused());
        assert_eq!(state.tick(100.0), Some(2.0));
    }

    #[test]
    fn resume_continues_from_the_paused_offset() {
        let mut state = CarouselState::new(1.0);
        for _ in 0..10 {
            state.tick(1000.0);
        }
        state.on_pointer_enter(2);
        state.on_pointer_leave(2);
        assert_eq!(state.tick(1000.0), Some(11.0));
    }

    #[test]
    fn unmeasured_strip_does_not_move() {
        let mut state = CarouselState::default();
        assert_eq!(state.tick(0.0), None);
        assert_eq!(state.offset(), 0.0);
    }

    #[test]
    fn doubled_list_maps_back_by_modulo() {
        let projects = ["A", "B", "C"];
        let rendered: Vec<(usize, &&str)> = looped(&projects).collect();
        assert_eq!(rendered.len(), 6);
        assert_eq!(resolve(&projects, 4), Some(&"B"));
        assert_eq!(resolve(&projects, 5), Some(&"C"));
        assert_eq!(resolve(&projects, 0), Some(&"A"));
    }

    #[test]
    fn single_project_is_still_doubled() {
        let projects = ["A"];
        assert_eq!(looped(&projects).count(), 2);
        assert_eq!(resolve(&projects, 1), Some(&"A"));
    }

    #[test]
    fn empty_list_never_animates_or_resolves() {
        let projects: [&str; 0] = [];
        assert!(!should_animate(projects.len(), false));
        assert!(!should_animate(3, true));
        assert!(should_animate(3, false));
        assert_eq!(resolve(&projects, 4), None);
    }
}
