// SPDX-License-Identifier: MPL-2.0
//! Cyclic navigation over a fixed, non-empty photo list.
//!
//! [`GalleryViewModel`] is the single source of truth for the photo currently
//! on screen. The index always satisfies `0 <= index < len`, and every committed
//! change is pushed synchronously to the registered listeners so dependent
//! views can re-render.

use super::PhotoRecord;
use crate::error::{Error, Result};
use std::fmt;

/// Direction of a navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Move to the following photo, wrapping to the first one.
    Next,
    /// Move to the preceding photo, wrapping to the last one.
    Previous,
}

/// Notification sent to listeners after the index has been committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationEvent {
    pub from: usize,
    pub to: usize,
    /// `None` for direct jumps via [`GalleryViewModel::go_to`].
    pub direction: Option<Direction>,
}

/// Handle returned by [`GalleryViewModel::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&NavigationEvent) + Send>;

/// Navigation state for the gallery screen.
pub struct GalleryViewModel {
    photos: Vec<PhotoRecord>,
    current_index: usize,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: u64,
}

impl fmt::Debug for GalleryViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GalleryViewModel")
            .field("len", &self.photos.len())
            .field("current_index", &self.current_index)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl GalleryViewModel {
    /// Creates a view model positioned on the first photo.
    ///
    /// Returns [`Error::EmptyGallery`] if `photos` is empty.
    pub fn new(photos: Vec<PhotoRecord>) -> Result<Self> {
        if photos.is_empty() {
            return Err(Error::EmptyGallery);
        }
        Ok(Self {
            photos,
            current_index: 0,
            listeners: Vec::new(),
            next_listener_id: 0,
        })
    }

    /// Advances to the next photo and returns the new index.
    pub fn next(&mut self) -> usize {
        let to = (self.current_index + 1) % self.photos.len();
        self.commit(to, Some(Direction::Next))
    }

    /// Steps back to the previous photo and returns the new index.
    pub fn previous(&mut self) -> usize {
        let len = self.photos.len();
        let to = (self.current_index + len - 1) % len;
        self.commit(to, Some(Direction::Previous))
    }

    /// Applies a step in the given direction.
    pub fn step(&mut self, direction: Direction) -> usize {
        match direction {
            Direction::Next => self.next(),
            Direction::Previous => self.previous(),
        }
    }

    /// Jumps to `index`. Returns `None` and leaves the state untouched when the
    /// index is out of range.
    pub fn go_to(&mut self, index: usize) -> Option<usize> {
        if index >= self.photos.len() {
            return None;
        }
        Some(self.commit(index, None))
    }

    /// The photo currently selected.
    #[must_use]
    pub fn current(&self) -> &PhotoRecord {
        &self.photos[self.current_index]
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    /// Always `false`; construction rejects empty lists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    #[must_use]
    pub fn photos(&self) -> &[PhotoRecord] {
        &self.photos
    }

    /// Registers a listener called after every committed index change.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&NavigationEvent) + Send + 'static,
    {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn commit(&mut self, to: usize, direction: Option<Direction>) -> usize {
        debug_assert!(to < self.photos.len());
        let event = NavigationEvent {
            from: self.current_index,
            to,
            direction,
        };
        self.current_index = to;
        for (_, listener) in &mut self.listeners {
            listener(&event);
        }
        to
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::catalog::ued_photos;
    use std::sync::{Arc, Mutex};

    fn photos(n: usize) -> Vec<PhotoRecord> {
        (0..n)
            .map(|i| {
                PhotoRecord::new(
                    format!("p{i}.png"),
                    format!("Title {i}"),
                    format!("Caption {i}"),
                )
            })
            .collect()
    }

    fn step_event(from: usize, to: usize, direction: Direction) -> NavigationEvent {
        NavigationEvent {
            from,
            to,
            direction: Some(direction),
        }
    }

    fn model_at(n: usize, index: usize) -> GalleryViewModel {
        let mut model = GalleryViewModel::new(photos(n)).expect("non-empty gallery");
        model.go_to(index).expect("index in range");
        model
    }

    #[test]
    fn empty_list_is_rejected() {
        let err = GalleryViewModel::new(Vec::new()).unwrap_err();
        assert_eq!(err, Error::EmptyGallery);
    }

    #[test]
    fn starts_at_first_photo() {
        let model = GalleryViewModel::new(ued_photos()).expect("catalog is non-empty");
        assert_eq!(model.current_index(), 0);
        assert_eq!(model.current(), &ued_photos()[0]);
        assert!(!model.is_empty());
    }

    #[test]
    fn next_wraps_from_last_to_first() {
        let mut model = model_at(5, 4);
        assert_eq!(model.next(), 0);
    }

    #[test]
    fn previous_wraps_from_first_to_last() {
        let mut model = model_at(5, 0);
        assert_eq!(model.previous(), 4);
    }

    #[test]
    fn full_cycle_returns_to_start() {
        for n in 1..=12 {
            for start in 0..n {
                let mut model = model_at(n, start);
                for _ in 0..n {
                    model.next();
                }
                assert_eq!(model.current_index(), start, "n={n} start={start}");
            }
        }
    }

    #[test]
    fn previous_is_inverse_of_next() {
        for n in 1..=12 {
            for start in 0..n {
                let mut model = model_at(n, start);
                model.next();
                model.previous();
                assert_eq!(model.current_index(), start, "next then previous, n={n}");

                model.previous();
                model.next();
                assert_eq!(model.current_index(), start, "previous then next, n={n}");
            }
        }
    }

    #[test]
    fn index_stays_in_bounds() {
        for n in 1..=12 {
            let mut model = model_at(n, 0);
            for step in 0..(3 * n) {
                let index = if step % 3 == 0 {
                    model.previous()
                } else {
                    model.next()
                };
                assert!(index < n);
                assert_eq!(index, model.current_index());
            }
        }
    }

    #[test]
    fn single_photo_gallery_stays_on_zero() {
        let mut model = model_at(1, 0);
        assert_eq!(model.next(), 0);
        assert_eq!(model.previous(), 0);
    }

    #[test]
    fn reference_sequence_visits_expected_indices() {
        let mut model = GalleryViewModel::new(ued_photos()).expect("catalog is non-empty");
        let visited = vec![
            model.next(),
            model.next(),
            model.previous(),
            model.next(),
            model.next(),
            model.next(),
        ];
        assert_eq!(visited, vec![1, 2, 1, 2, 3, 4]);
        assert_eq!(model.current(), &ued_photos()[4]);
    }

    #[test]
    fn go_to_out_of_range_is_ignored() {
        let mut model = model_at(3, 1);
        assert_eq!(model.go_to(3), None);
        assert_eq!(model.current_index(), 1);
    }

    #[test]
    fn listeners_receive_committed_changes() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        let mut model = model_at(3, 0);
        model.subscribe(move |event| sink.lock().unwrap().push(*event));

        model.next();
        model.previous();
        model.previous();

        let events = events.lock().unwrap();
        assert_eq!(
            *events,
            vec![
                step_event(0, 1, Direction::Next),
                step_event(1, 0, Direction::Previous),
                step_event(0, 2, Direction::Previous),
            ]
        );
    }

    #[test]
    fn listener_observes_new_index_through_event() {
        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);
        let mut model = model_at(4, 3);
        model.subscribe(move |event| *sink.lock().unwrap() = Some(event.to));

        let index = model.next();
        assert_eq!(*seen.lock().unwrap(), Some(index));
    }

    #[test]
    fn unsubscribed_listener_is_not_called() {
        let calls = Arc::new(Mutex::new(0));
        let sink = Arc::clone(&calls);
        let mut model = model_at(2, 0);
        let id = model.subscribe(move |_| *sink.lock().unwrap() += 1);

        model.next();
        assert!(model.unsubscribe(id));
        assert!(!model.unsubscribe(id));
        model.next();

        assert_eq!(*calls.lock().unwrap(), 1);
    }

    #[test]
    fn step_dispatches_on_direction() {
        let mut model = model_at(5, 2);
        assert_eq!(model.step(Direction::Next), 3);
        assert_eq!(model.step(Direction::Previous), 2);
    }
}
