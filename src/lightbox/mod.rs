// SPDX-License-Identifier: MPL-2.0
//! Lightbox controller: the full-view single-photo mode of the gallery.
//!
//! [`Lightbox`] owns the flattened photo sequence and the only mutable viewer
//! state of the application: whether the overlay is open and which photo it
//! shows. Every change goes through one of the transitions below, and each
//! transition reports an [`Effect`] that the caller applies to the page
//! (scroll lock, redraw).
//!
//! | From   | Transition     | To     | Effect    |
//! |--------|----------------|--------|-----------|
//! | Closed | `open(i)`      | Open   | `Opened`  |
//! | Open   | `open(i)`      | Open   | `Moved`   |
//! | Open   | `next()`       | Open   | `Moved`   |
//! | Open   | `previous()`   | Open   | `Moved`   |
//! | Open   | `close()`      | Closed | `Closed`  |
//!
//! Anything else is a no-op returning [`Effect::None`]: opening an empty
//! sequence, opening an out-of-range index, navigating or closing while
//! closed. Navigation wraps around at both ends.

pub mod input;

pub use input::{
    classify_swipe, Input, LightboxKey, SwipeDirection, SwipeTracker, SWIPE_THRESHOLD,
};

use crate::catalog::{FlattenedSequence, GlobalIndex, Photo};
use std::fmt;

/// What the application has to do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed.
    None,
    /// The overlay became visible; the page must lock scrolling.
    Opened,
    /// The overlay stayed open but shows another photo.
    Moved,
    /// The overlay was hidden; the page must release its scroll lock.
    Closed,
}

impl Effect {
    /// Scroll-lock value the page must adopt, if this effect changes it.
    #[must_use]
    pub fn scroll_lock(self) -> Option<bool> {
        match self {
            Effect::Opened => Some(true),
            Effect::Closed => Some(false),
            Effect::None | Effect::Moved => None,
        }
    }
}

/// Cursor and visibility of the overlay.
///
/// `current_index` is only meaningful while `is_open` is set; it is then
/// always a valid index into the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewerState {
    current_index: usize,
    is_open: bool,
}

/// The "current / total" counter shown under the photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionIndicator {
    /// 1-based position, `None` while closed.
    pub current: Option<usize>,
    pub total: usize,
}

impl fmt::Display for PositionIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.current {
            Some(current) => write!(f, "{} / {}", current, self.total),
            None => write!(f, "– / {}", self.total),
        }
    }
}

/// The photo currently shown by the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Displayed<'a> {
    pub photo: &'a Photo,
    pub index: GlobalIndex,
    pub indicator: PositionIndicator,
}

/// Viewer controller owning the lightbox state.
#[derive(Debug, Clone, Default)]
pub struct Lightbox {
    photos: FlattenedSequence,
    state: ViewerState,
    swipe: SwipeTracker,
}

impl Lightbox {
    /// Creates a closed lightbox over the given sequence.
    #[must_use]
    pub fn new(photos: FlattenedSequence) -> Self {
        Self {
            photos,
            state: ViewerState::default(),
            swipe: SwipeTracker::default(),
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    /// Index of the shown photo, `None` while closed.
    #[must_use]
    pub fn current_index(&self) -> Option<GlobalIndex> {
        self.state
            .is_open
            .then_some(GlobalIndex::new(self.state.current_index))
    }

    /// Number of photos the lightbox navigates through.
    #[must_use]
    pub fn total(&self) -> usize {
        self.photos.len()
    }

    #[must_use]
    pub fn photos(&self) -> &FlattenedSequence {
        &self.photos
    }

    #[must_use]
    pub fn indicator(&self) -> PositionIndicator {
        PositionIndicator {
            current: self.current_index().map(|index| index.value() + 1),
            total: self.total(),
        }
    }

    /// The photo to render, or `None` while closed.
    #[must_use]
    pub fn displayed(&self) -> Option<Displayed<'_>> {
        let index = self.current_index()?;
        let photo = self.photos.get(index)?;
        Some(Displayed {
            photo,
            index,
            indicator: self.indicator(),
        })
    }

    /// Shows the photo at `index`.
    ///
    /// Rejected without any state change when the sequence is empty or the
    /// index is out of range.
    pub fn open(&mut self, index: GlobalIndex) -> Effect {
        let total = self.total();
        if index.value() >= total {
            log::debug!(
                "lightbox: ignoring open({}) with {} photo(s)",
                index.value(),
                total
            );
            return Effect::None;
        }

        self.state.current_index = index.value();
        if self.state.is_open {
            Effect::Moved
        } else {
            self.state.is_open = true;
            log::debug!("lightbox: opened at {}", index.value());
            Effect::Opened
        }
    }

    /// Hides the overlay.
    pub fn close(&mut self) -> Effect {
        if !self.state.is_open {
            return Effect::None;
        }
        self.state.is_open = false;
        self.swipe.reset();
        log::debug!("lightbox: closed");
        Effect::Closed
    }

    /// Closes the overlay after a click on its background.
    pub fn close_via_outside_click(&mut self) -> Effect {
        self.close()
    }

    /// Advances to the next photo, wrapping from the last to the first.
    pub fn next(&mut self) -> Effect {
        self.step(1)
    }

    /// Goes back to the previous photo, wrapping from the first to the last.
    pub fn previous(&mut self) -> Effect {
        self.step(self.total().saturating_sub(1))
    }

    fn step(&mut self, forward: usize) -> Effect {
        let total = self.total();
        if !self.state.is_open || total == 0 {
            return Effect::None;
        }
        self.state.current_index = (self.state.current_index + forward) % total;
        Effect::Moved
    }

    /// Routes one input to its transition.
    ///
    /// Key presses and touch gestures are ignored while the overlay is closed.
    pub fn handle(&mut self, input: Input) -> Effect {
        match input {
            Input::GridItemClicked(index) => self.open(index),
            Input::CloseClicked => self.close(),
            Input::NextClicked => self.next(),
            Input::PreviousClicked => self.previous(),
            Input::BackdropClicked => self.close_via_outside_click(),
            Input::KeyPressed(key) => {
                if !self.state.is_open {
                    return Effect::None;
                }
                match key {
                    LightboxKey::Escape => self.close(),
                    LightboxKey::ArrowRight => self.next(),
                    LightboxKey::ArrowLeft => self.previous(),
                }
            }
            Input::TouchStarted { x } => {
                if self.state.is_open {
                    self.swipe.begin(x);
                }
                Effect::None
            }
            Input::TouchEnded { x } => {
                if !self.state.is_open {
                    self.swipe.reset();
                    return Effect::None;
                }
                match self.swipe.finish(x) {
                    Some(SwipeDirection::Next) => self.next(),
                    Some(SwipeDirection::Previous) => self.previous(),
                    None => Effect::None,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{self, Catalog, Category};

    fn lightbox_with(counts: &[usize]) -> Lightbox {
        let categories = counts
            .iter()
            .enumerate()
            .map(|(c, &count)| {
                let photos = (0..count)
                    .map(|p| Photo::new(format!("{c}/{p}.jpg"), format!("cat {c}")))
                    .collect();
                Category::new(format!("cat{c}"), format!("Category {c}"), photos)
            })
            .collect();
        let (_, sequence) = catalog::build(&Catalog::new(categories));
        Lightbox::new(sequence)
    }

    fn index(i: usize) -> GlobalIndex {
        GlobalIndex::new(i)
    }

    #[test]
    fn new_lightbox_is_closed() {
        let lightbox = lightbox_with(&[3]);
        assert!(!lightbox.is_open());
        assert_eq!(lightbox.current_index(), None);
        assert!(lightbox.displayed().is_none());
    }

    #[test]
    fn open_shows_requested_photo_and_locks_scroll() {
        let mut lightbox = lightbox_with(&[3]);
        let effect = lightbox.open(index(1));

        assert_eq!(effect, Effect::Opened);
        assert_eq!(effect.scroll_lock(), Some(true));
        let shown = lightbox.displayed().expect("photo should be displayed");
        assert_eq!(shown.photo.source, "0/1.jpg");
        assert_eq!(shown.indicator.to_string(), "2 / 3");
    }

    #[test]
    fn open_while_open_moves_without_relocking() {
        let mut lightbox = lightbox_with(&[3]);
        lightbox.open(index(0));
        let effect = lightbox.open(index(2));

        assert_eq!(effect, Effect::Moved);
        assert_eq!(effect.scroll_lock(), None);
        assert_eq!(lightbox.current_index(), Some(index(2)));
    }

    #[test]
    fn open_out_of_range_is_rejected() {
        let mut lightbox = lightbox_with(&[2]);
        assert_eq!(lightbox.open(index(2)), Effect::None);
        assert!(!lightbox.is_open());

        lightbox.open(index(1));
        assert_eq!(lightbox.open(index(9)), Effect::None);
        assert_eq!(lightbox.current_index(), Some(index(1)));
    }

    #[test]
    fn empty_sequence_never_opens() {
        let mut lightbox = lightbox_with(&[]);
        assert_eq!(lightbox.open(index(0)), Effect::None);
        assert!(!lightbox.is_open());
        assert_eq!(lightbox.indicator().total, 0);
        assert_eq!(lightbox.next(), Effect::None);
        assert_eq!(lightbox.previous(), Effect::None);
    }

    #[test]
    fn close_releases_scroll_and_is_idempotent() {
        let mut lightbox = lightbox_with(&[2]);
        lightbox.open(index(0));

        let effect = lightbox.close();
        assert_eq!(effect, Effect::Closed);
        assert_eq!(effect.scroll_lock(), Some(false));
        assert_eq!(lightbox.close(), Effect::None);
    }

    #[test]
    fn navigation_while_closed_is_ignored() {
        let mut lightbox = lightbox_with(&[3]);
        assert_eq!(lightbox.next(), Effect::None);
        assert_eq!(lightbox.previous(), Effect::None);
        assert_eq!(lightbox.handle(Input::NextClicked), Effect::None);
        assert!(!lightbox.is_open());
    }

    #[test]
    fn next_and_previous_wrap_around() {
        // Catalog = [A: 2 photos, B: 1 photo]
        let mut lightbox = lightbox_with(&[2, 1]);

        lightbox.open(index(2));
        lightbox.next();
        assert_eq!(lightbox.current_index(), Some(index(0)));

        lightbox.open(index(0));
        lightbox.previous();
        assert_eq!(lightbox.current_index(), Some(index(2)));
    }

    #[test]
    fn full_cycle_returns_to_start() {
        for total in 1..=7 {
            let mut lightbox = lightbox_with(&[total]);
            for start in 0..total {
                lightbox.open(index(start));
                for _ in 0..total {
                    lightbox.next();
                }
                assert_eq!(lightbox.current_index(), Some(index(start)));
                for _ in 0..total {
                    lightbox.previous();
                }
                assert_eq!(lightbox.current_index(), Some(index(start)));
            }
        }
    }

    #[test]
    fn single_photo_navigation_stays_put() {
        let mut lightbox = lightbox_with(&[1]);
        lightbox.open(index(0));
        assert_eq!(lightbox.next(), Effect::Moved);
        assert_eq!(lightbox.previous(), Effect::Moved);
        assert_eq!(lightbox.current_index(), Some(index(0)));
    }

    #[test]
    fn index_and_scroll_lock_stay_consistent_over_mixed_inputs() {
        let mut lightbox = lightbox_with(&[3, 0, 2]);
        let total = lightbox.total();
        let mut scroll_locked = false;

        // Deterministic pseudo-random walk over the whole input table.
        let mut seed: u32 = 0x2545_f491;
        for _ in 0..500 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            let input = match seed % 10 {
                0 => Input::GridItemClicked(index((seed as usize / 10) % (total + 2))),
                1 => Input::CloseClicked,
                2 => Input::NextClicked,
                3 => Input::PreviousClicked,
                4 => Input::BackdropClicked,
                5 => Input::KeyPressed(LightboxKey::Escape),
                6 => Input::KeyPressed(LightboxKey::ArrowRight),
                7 => Input::KeyPressed(LightboxKey::ArrowLeft),
                8 => Input::TouchStarted { x: (seed % 400) as f32 },
                _ => Input::TouchEnded { x: (seed % 400) as f32 },
            };

            if let Some(locked) = lightbox.handle(input).scroll_lock() {
                scroll_locked = locked;
            }

            assert_eq!(scroll_locked, lightbox.is_open());
            if let Some(current) = lightbox.current_index() {
                assert!(current.value() < total);
            }
        }
    }

    #[test]
    fn escape_closes_open_lightbox() {
        let mut lightbox = lightbox_with(&[3]);
        lightbox.open(index(1));

        let effect = lightbox.handle(Input::KeyPressed(LightboxKey::Escape));
        assert_eq!(effect, Effect::Closed);
        assert!(!lightbox.is_open());
    }

    #[test]
    fn arrow_keys_navigate_only_while_open() {
        let mut lightbox = lightbox_with(&[3]);
        assert_eq!(
            lightbox.handle(Input::KeyPressed(LightboxKey::ArrowRight)),
            Effect::None
        );
        assert_eq!(
            lightbox.handle(Input::KeyPressed(LightboxKey::Escape)),
            Effect::None
        );

        lightbox.open(index(0));
        lightbox.handle(Input::KeyPressed(LightboxKey::ArrowRight));
        assert_eq!(lightbox.current_index(), Some(index(1)));
        lightbox.handle(Input::KeyPressed(LightboxKey::ArrowLeft));
        lightbox.handle(Input::KeyPressed(LightboxKey::ArrowLeft));
        assert_eq!(lightbox.current_index(), Some(index(2)));
    }

    #[test]
    fn backdrop_click_closes() {
        let mut lightbox = lightbox_with(&[2]);
        lightbox.handle(Input::GridItemClicked(index(1)));
        assert_eq!(lightbox.handle(Input::BackdropClicked), Effect::Closed);
    }

    #[test]
    fn left_swipe_advances() {
        let mut lightbox = lightbox_with(&[3]);
        lightbox.open(index(0));

        lightbox.handle(Input::TouchStarted { x: 200.0 });
        let effect = lightbox.handle(Input::TouchEnded { x: 100.0 });
        assert_eq!(effect, Effect::Moved);
        assert_eq!(lightbox.current_index(), Some(index(1)));
    }

    #[test]
    fn swipe_threshold_is_exclusive() {
        let mut lightbox = lightbox_with(&[3]);
        lightbox.open(index(1));

        lightbox.handle(Input::TouchStarted { x: 150.0 });
        assert_eq!(lightbox.handle(Input::TouchEnded { x: 100.0 }), Effect::None);
        assert_eq!(lightbox.current_index(), Some(index(1)));

        lightbox.handle(Input::TouchStarted { x: 151.0 });
        lightbox.handle(Input::TouchEnded { x: 100.0 });
        assert_eq!(lightbox.current_index(), Some(index(2)));

        lightbox.handle(Input::TouchStarted { x: 100.0 });
        lightbox.handle(Input::TouchEnded { x: 151.0 });
        assert_eq!(lightbox.current_index(), Some(index(1)));
    }

    #[test]
    fn touches_while_closed_are_ignored() {
        let mut lightbox = lightbox_with(&[3]);
        lightbox.handle(Input::TouchStarted { x: 300.0 });
        lightbox.open(index(0));

        // The start recorded while closed must not pair with this end.
        assert_eq!(lightbox.handle(Input::TouchEnded { x: 0.0 }), Effect::None);
        assert_eq!(lightbox.current_index(), Some(index(0)));
    }

    #[test]
    fn closing_discards_pending_swipe() {
        let mut lightbox = lightbox_with(&[3]);
        lightbox.open(index(0));
        lightbox.handle(Input::TouchStarted { x: 300.0 });
        lightbox.close();
        lightbox.open(index(0));

        assert_eq!(lightbox.handle(Input::TouchEnded { x: 0.0 }), Effect::None);
    }

    #[test]
    fn indicator_formats_position_and_total() {
        let mut lightbox = lightbox_with(&[4]);
        assert_eq!(lightbox.indicator().to_string(), "– / 4");
        lightbox.open(index(3));
        assert_eq!(lightbox.indicator().to_string(), "4 / 4");
    }
}
