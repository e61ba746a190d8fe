//! Lightbox / carousel session
//!
//! Framework-free state machine behind the product lightbox. The UI layer
//! feeds it discrete events (open, close, arrow keys, swipes, dot clicks,
//! image load callbacks) and renders whatever state it ends up in.
//!
//! States:
//! - `Closed` (initial): nothing interactive is shown. The last product stays
//!   "displayed" until the close grace period elapses so the fade-out never
//!   shows an empty frame.
//! - `Open`: one product is shown; navigation moves `current_index` cyclically
//!   through the whole catalog.
//!
//! Every image request is tagged with an [`ImageTicket`]. Load/error callbacks
//! carrying an outdated ticket are dropped, which resolves the stale-load race
//! without cancelling anything.

use crate::core::catalog::{Catalog, Product};

/// Time the last product stays displayed after closing (ms)
pub const CLOSE_GRACE_MS: u64 = 300;

/// Navigation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    fn delta(self) -> isize {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }
}

/// Open/closed state of the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    Open,
}

/// Load state of the currently requested full-resolution image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageState {
    /// Skeleton visible
    #[default]
    Loading,
    Loaded,
    /// Fallback panel with a retry control
    Failed,
}

/// Identifies a single image request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageTicket {
    pub index: usize,
    pub generation: u64,
}

impl ImageTicket {
    pub fn new(index: usize, generation: u64) -> Self {
        Self { index, generation }
    }
}

/// Handle returned by [`LightboxSession::close`]; pass it back to
/// [`LightboxSession::finish_close`] once the grace period elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseToken(u64);

/// Input-agnostic commands the UI maps keys, swipes and clicks onto
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxCommand {
    Navigate(Direction),
    JumpTo(usize),
    Close,
}

/// Outcome of applying a [`LightboxCommand`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The displayed index changed
    Moved,
    /// The session closed; schedule `finish_close` with the token
    Closed(CloseToken),
    /// Nothing changed
    Ignored,
}

/// Transient state owned by one lightbox instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxSession<'a> {
    catalog: &'a Catalog,
    state: LightboxState,
    current_index: usize,
    image: ImageState,
    /// Bumped on every image request; doubles as the replay counter for the
    /// image entrance transition.
    generation: u64,
    /// Index kept on screen while open and during the close grace period
    displayed: Option<usize>,
    /// Bumped on every open/close so a late grace timer can't clear a newer session
    close_epoch: u64,
}

impl<'a> LightboxSession<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            state: LightboxState::Closed,
            current_index: 0,
            image: ImageState::Loading,
            generation: 0,
            displayed: None,
            close_epoch: 0,
        }
    }

    /// Open on `product`. Products that are not in the catalog are ignored and
    /// leave the session untouched; returns whether the session opened.
    pub fn open(&mut self, product: &Product) -> bool {
        let Some(index) = self.catalog.position_of(&product.id) else {
            return false;
        };

        self.state = LightboxState::Open;
        self.close_epoch += 1;
        self.current_index = index;
        self.displayed = Some(index);
        self.request_image();
        true
    }

    /// Close the overlay. Returns `None` when already closed.
    pub fn close(&mut self) -> Option<CloseToken> {
        if self.state == LightboxState::Closed {
            return None;
        }

        self.state = LightboxState::Closed;
        self.close_epoch += 1;
        Some(CloseToken(self.close_epoch))
    }

    /// Drop the displayed product after the grace period. No-op when the
    /// session was reopened (or closed again) since `token` was issued.
    pub fn finish_close(&mut self, token: CloseToken) -> bool {
        if self.state != LightboxState::Closed || token.0 != self.close_epoch {
            return false;
        }

        self.displayed = None;
        true
    }

    /// Move one step with wrap-around at both ends. Ignored unless open.
    pub fn navigate(&mut self, direction: Direction) -> bool {
        let len = self.catalog.len() as isize;
        if self.state != LightboxState::Open || len == 0 {
            return false;
        }

        let next = (self.current_index as isize + direction.delta()).rem_euclid(len);
        self.move_to(next as usize)
    }

    /// Jump straight to `index`. Ignored unless open or when out of range.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if self.state != LightboxState::Open || index >= self.catalog.len() {
            return false;
        }

        self.move_to(index)
    }

    /// Apply a mapped input command
    pub fn apply(&mut self, command: LightboxCommand) -> CommandOutcome {
        match command {
            LightboxCommand::Navigate(direction) => {
                if self.navigate(direction) {
                    CommandOutcome::Moved
                } else {
                    CommandOutcome::Ignored
                }
            }
            LightboxCommand::JumpTo(index) => {
                if self.jump_to(index) {
                    CommandOutcome::Moved
                } else {
                    CommandOutcome::Ignored
                }
            }
            LightboxCommand::Close => match self.close() {
                Some(token) => CommandOutcome::Closed(token),
                None => CommandOutcome::Ignored,
            },
        }
    }

    /// Record a completed load. Stale tickets are ignored.
    pub fn on_image_load(&mut self, ticket: ImageTicket) -> bool {
        if ticket != self.image_ticket() {
            return false;
        }

        self.image = ImageState::Loaded;
        true
    }

    /// Record a failed load. Stale tickets are ignored.
    pub fn on_image_error(&mut self, ticket: ImageTicket) -> bool {
        if ticket != self.image_ticket() || self.image == ImageState::Loaded {
            return false;
        }

        self.image = ImageState::Failed;
        true
    }

    /// Re-request the current image after a failure
    pub fn retry(&mut self) -> Option<ImageTicket> {
        if self.image != ImageState::Failed {
            return None;
        }

        self.request_image();
        Some(self.image_ticket())
    }

    pub fn state(&self) -> LightboxState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == LightboxState::Open
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn image_state(&self) -> ImageState {
        self.image
    }

    pub fn image_loaded(&self) -> bool {
        self.image == ImageState::Loaded
    }

    /// Ticket for the image currently being requested
    pub fn image_ticket(&self) -> ImageTicket {
        ImageTicket::new(self.current_index, self.generation)
    }

    /// Monotonic counter; changes whenever the image transition should replay
    pub fn replay_count(&self) -> u64 {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Product at `current_index`
    pub fn current_product(&self) -> Option<&'a Product> {
        self.catalog.get(self.current_index)
    }

    /// Product that should be on screen (includes the close grace period)
    pub fn displayed_product(&self) -> Option<&'a Product> {
        self.displayed.and_then(|i| self.catalog.get(i))
    }

    /// Every move re-requests the image, including a move onto the current
    /// index; the view acknowledges an already-decoded src on its own.
    fn move_to(&mut self, index: usize) -> bool {
        self.current_index = index;
        self.displayed = Some(index);
        self.request_image();
        true
    }

    fn request_image(&mut self) {
        self.image = ImageState::Loading;
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(ids: &[&str]) -> Catalog {
        Catalog::new(
            ids.iter()
                .map(|id| Product::new(*id, *id, format!("/t/{id}"), format!("/i/{id}")))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_initial_state_is_closed() {
        let catalog = catalog(&["a", "b"]);
        let session = LightboxSession::new(&catalog);

        assert_eq!(session.state(), LightboxState::Closed);
        assert!(!session.is_open());
        assert!(session.displayed_product().is_none());
        assert_eq!(session.image_state(), ImageState::Loading);
    }

    #[test]
    fn test_open_sets_index_of_product() {
        let catalog = catalog(&["a", "b", "c"]);
        let mut session = LightboxSession::new(&catalog);

        let target = catalog.get(2).unwrap().clone();
        assert!(session.open(&target));
        assert!(session.is_open());
        assert_eq!(session.current_index(), 2);
        assert_eq!(session.displayed_product().map(|p| p.id.as_str()), Some("c"));
    }

    #[test]
    fn test_open_unknown_product_is_noop() {
        let catalog = catalog(&["a", "b"]);
        let mut session = LightboxSession::new(&catalog);
        let before = session.clone();

        let stranger = Product::new("zzz", "Nope", "/t", "/i");
        assert!(!session.open(&stranger));
        assert_eq!(session, before);
    }

    #[test]
    fn test_open_unknown_product_while_open_keeps_state() {
        let catalog = catalog(&["a", "b"]);
        let mut session = LightboxSession::new(&catalog);
        session.open(&catalog.get(1).unwrap().clone());

        let stranger = Product::new("zzz", "Nope", "/t", "/i");
        assert!(!session.open(&stranger));
        assert!(session.is_open());
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn test_close_is_idempotent() {
        let catalog = catalog(&["a"]);
        let mut session = LightboxSession::new(&catalog);

        assert!(session.close().is_none());

        session.open(&catalog.get(0).unwrap().clone());
        assert!(session.close().is_some());
        assert!(session.close().is_none());
        assert!(!session.is_open());
    }

    #[test]
    fn test_close_keeps_product_until_grace_period_ends() {
        let catalog = catalog(&["a", "b"]);
        let mut session = LightboxSession::new(&catalog);
        session.open(&catalog.get(1).unwrap().clone());

        let token = session.close().unwrap();
        assert_eq!(session.displayed_product().map(|p| p.id.as_str()), Some("b"));

        assert!(session.finish_close(token));
        assert!(session.displayed_product().is_none());
    }

    #[test]
    fn test_reopen_before_grace_timer_survives_late_timer() {
        let catalog = catalog(&["a", "b", "c"]);
        let mut session = LightboxSession::new(&catalog);
        session.open(&catalog.get(0).unwrap().clone());

        let token = session.close().unwrap();
        session.open(&catalog.get(2).unwrap().clone());

        assert!(!session.finish_close(token));
        assert!(session.is_open());
        assert_eq!(session.displayed_product().map(|p| p.id.as_str()), Some("c"));
    }

    #[test]
    fn test_stale_token_after_second_close_is_ignored() {
        let catalog = catalog(&["a", "b"]);
        let mut session = LightboxSession::new(&catalog);
        session.open(&catalog.get(0).unwrap().clone());
        let first = session.close().unwrap();
        session.open(&catalog.get(1).unwrap().clone());
        let second = session.close().unwrap();

        assert!(!session.finish_close(first));
        assert!(session.displayed_product().is_some());
        assert!(session.finish_close(second));
        assert!(session.displayed_product().is_none());
    }

    #[test]
    fn test_navigation_does_not_change_open_state() {
        let catalog = catalog(&["a", "b", "c"]);
        let mut session = LightboxSession::new(&catalog);
        session.open(&catalog.get(0).unwrap().clone());

        session.navigate(Direction::Next);
        session.jump_to(2);
        session.navigate(Direction::Previous);
        assert!(session.is_open());
    }

    #[test]
    fn test_jump_out_of_range_is_ignored() {
        let catalog = catalog(&["a", "b"]);
        let mut session = LightboxSession::new(&catalog);
        session.open(&catalog.get(0).unwrap().clone());
        let generation = session.replay_count();

        assert!(!session.jump_to(2));
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.replay_count(), generation);
    }

    #[test]
    fn test_navigation_bumps_replay_count() {
        let catalog = catalog(&["a", "b"]);
        let mut session = LightboxSession::new(&catalog);
        session.open(&catalog.get(0).unwrap().clone());
        let before = session.replay_count();

        session.navigate(Direction::Next);
        assert_eq!(session.replay_count(), before + 1);
        session.jump_to(0);
        assert_eq!(session.replay_count(), before + 2);
    }

    #[test]
    fn test_jump_to_current_index_still_resets_image() {
        let catalog = catalog(&["a", "b"]);
        let mut session = LightboxSession::new(&catalog);
        session.open(&catalog.get(1).unwrap().clone());
        assert!(session.on_image_load(session.image_ticket()));
        let before = session.replay_count();

        assert!(session.jump_to(1));
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.image_state(), ImageState::Loading);
        assert_eq!(session.replay_count(), before + 1);
    }

    #[test]
    fn test_image_load_marks_loaded_without_moving() {
        let catalog = catalog(&["a", "b"]);
        let mut session = LightboxSession::new(&catalog);
        session.open(&catalog.get(1).unwrap().clone());

        let ticket = session.image_ticket();
        assert!(session.on_image_load(ticket));
        assert!(session.image_loaded());
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn test_stale_image_load_is_ignored() {
        let catalog = catalog(&["a", "b", "c"]);
        let mut session = LightboxSession::new(&catalog);
        session.open(&catalog.get(0).unwrap().clone());
        let stale = session.image_ticket();

        session.navigate(Direction::Next);
        assert!(!session.on_image_load(stale));
        assert!(!session.image_loaded());

        assert!(session.on_image_load(session.image_ticket()));
        assert!(session.image_loaded());
    }

    #[test]
    fn test_revisiting_index_does_not_accept_old_ticket() {
        let catalog = catalog(&["a", "b"]);
        let mut session = LightboxSession::new(&catalog);
        session.open(&catalog.get(0).unwrap().clone());
        let first_visit = session.image_ticket();

        session.navigate(Direction::Next);
        session.navigate(Direction::Previous);
        assert_eq!(session.current_index(), first_visit.index);
        assert!(!session.on_image_load(first_visit));
    }

    #[test]
    fn test_image_error_and_retry() {
        let catalog = catalog(&["a", "b"]);
        let mut session = LightboxSession::new(&catalog);
        session.open(&catalog.get(0).unwrap().clone());

        assert!(session.retry().is_none());

        let ticket = session.image_ticket();
        assert!(session.on_image_error(ticket));
        assert_eq!(session.image_state(), ImageState::Failed);

        let retry = session.retry().unwrap();
        assert_ne!(retry, ticket);
        assert_eq!(session.image_state(), ImageState::Loading);
        assert!(session.on_image_load(retry));
        assert_eq!(session.image_state(), ImageState::Loaded);
    }

    #[test]
    fn test_stale_image_error_is_ignored() {
        let catalog = catalog(&["a", "b"]);
        let mut session = LightboxSession::new(&catalog);
        session.open(&catalog.get(0).unwrap().clone());
        let stale = session.image_ticket();

        session.navigate(Direction::Next);
        assert!(!session.on_image_error(stale));
        assert_eq!(session.image_state(), ImageState::Loading);
    }

    #[test]
    fn test_apply_maps_commands() {
        let catalog = catalog(&["a", "b", "c"]);
        let mut session = LightboxSession::new(&catalog);
        session.open(&catalog.get(0).unwrap().clone());

        assert_eq!(
            session.apply(LightboxCommand::Navigate(Direction::Previous)),
            CommandOutcome::Moved
        );
        assert_eq!(session.current_index(), 2);
        assert_eq!(session.apply(LightboxCommand::JumpTo(3)), CommandOutcome::Ignored);
        assert_eq!(session.apply(LightboxCommand::JumpTo(1)), CommandOutcome::Moved);

        assert!(matches!(
            session.apply(LightboxCommand::Close),
            CommandOutcome::Closed(_)
        ));
        assert_eq!(session.apply(LightboxCommand::Close), CommandOutcome::Ignored);
    }
}
