// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the gallery view model, localization, and resolved
//! images together and translates UI messages into navigation calls. The view
//! model is the only owner of the current index; the screen re-renders from it
//! after every update.

pub mod config;
mod message;
pub mod paths;
mod subscription;

pub use message::{Flags, Message};

use crate::domain::ui::Breakpoint;
use crate::error::Result;
use crate::gallery::catalog::ued_photos;
use crate::gallery::navigator::Direction;
use crate::gallery::{
    AssetProvider, EmbeddedAssets, GalleryViewModel, PhotoRecord, ResolvedImages,
};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::sizing;
use crate::ui::gallery::{self, Effect, ViewContext, ViewModel};
use crate::ui::theming::ThemeMode;
use config::Config;
use iced::keyboard::{self, key::Named};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    model: GalleryViewModel,
    images: ResolvedImages,
    gallery: gallery::State,
    group_name: String,
    /// Translated title, shared by the window and the photo banner.
    screen_title: String,
    breakpoint: Breakpoint,
    theme_mode: ThemeMode,
    /// Incremented by the view-model listener on every committed change.
    revision: Arc<AtomicU64>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("model", &self.model)
            .field("group_name", &self.group_name)
            .field("breakpoint", &self.breakpoint)
            .field("theme_mode", &self.theme_mode)
            .field("revision", &self.revision())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(sizing::WINDOW_DEFAULT_WIDTH, sizing::WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(
            sizing::WINDOW_MIN_WIDTH,
            sizing::WINDOW_MIN_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(app: App) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function; the state is handed over once
    let boot_state = RefCell::new(Some(app));
    let boot = move || {
        let app = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        (app, Task::none())
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration and builds the gallery from the bundled photos.
    pub fn new(flags: Flags) -> Result<Self> {
        let (config, config_warning) = config::load();
        let app = Self::with_parts(flags, &config, ued_photos(), &EmbeddedAssets)?;
        if let Some(key) = config_warning {
            app.report_config_warning(&key);
        }
        Ok(app)
    }

    /// Logs a config warning key in the active language and returns the text.
    fn report_config_warning(&self, key: &str) -> String {
        let message = self.i18n.tr(key);
        tracing::warn!(warning = %key, "{message}");
        message
    }

    /// Builds the application from explicit parts.
    ///
    /// Returns [`crate::error::Error::EmptyGallery`] if `photos` is empty.
    pub fn with_parts<P: AssetProvider + ?Sized>(
        flags: Flags,
        config: &Config,
        photos: Vec<PhotoRecord>,
        assets: &P,
    ) -> Result<Self> {
        let i18n = I18n::new(flags.lang.clone(), config);
        let group_name = flags
            .group
            .as_deref()
            .map(str::trim)
            .filter(|group| !group.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| config.group_name());
        let screen_title = i18n.tr_with_args("gallery-title", &[("group", group_name.as_str())]);

        let images = ResolvedImages::resolve(assets, &photos);
        let mut model = GalleryViewModel::new(photos)?;

        let revision = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&revision);
        model.subscribe(move |event| {
            counter.fetch_add(1, Ordering::Relaxed);
            tracing::debug!(
                from = event.from,
                to = event.to,
                direction = ?event.direction,
                "photo changed"
            );
        });

        tracing::info!(
            photos = model.len(),
            missing_images = images.missing_count(),
            locale = %i18n.current_locale(),
            group = %group_name,
            "gallery ready"
        );

        Ok(Self {
            gallery: gallery::State::new(config.swipe_threshold(), config.swipe_policy()),
            breakpoint: config.breakpoint(),
            theme_mode: config.general.theme_mode,
            i18n,
            model,
            images,
            group_name,
            screen_title,
            revision,
        })
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.model.current_index()
    }

    #[must_use]
    pub fn model(&self) -> &GalleryViewModel {
        &self.model
    }

    #[must_use]
    pub fn group_name(&self) -> &str {
        &self.group_name
    }

    /// Number of index changes observed by the view-model listener.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::Relaxed)
    }

    pub fn title(&self) -> String {
        self.screen_title.clone()
    }

    pub fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(gallery_message) => {
                if let Effect::Navigate(direction) = self.gallery.handle(gallery_message) {
                    self.model.step(direction);
                }
            }
            Message::KeyPressed(key) => self.handle_key(&key),
        }
        Task::none()
    }

    fn handle_key(&mut self, key: &keyboard::Key) {
        match key {
            keyboard::Key::Named(Named::ArrowLeft) => {
                self.model.step(Direction::Previous);
            }
            keyboard::Key::Named(Named::ArrowRight) => {
                self.model.step(Direction::Next);
            }
            keyboard::Key::Named(Named::Home) => {
                self.model.go_to(0);
            }
            keyboard::Key::Named(Named::End) => {
                self.model.go_to(self.model.len() - 1);
            }
            _ => {}
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let index = self.model.current_index();
        let ctx = ViewContext {
            i18n: &self.i18n,
            breakpoint: self.breakpoint,
            screen_title: &self.screen_title,
        };
        let model = ViewModel {
            photo: self.model.current(),
            image: self.images.get(index),
            position: index + 1,
            total: self.model.len(),
        };
        gallery::view(ctx, model).map(Message::Gallery)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::gallery::ImageRef;
    use iced::widget::image::Handle;
    use iced::Point;

    struct NoAssets;

    impl AssetProvider for NoAssets {
        fn resolve(&self, _image: &ImageRef) -> Option<Handle> {
            None
        }
    }

    fn english() -> Flags {
        Flags {
            lang: Some("en-US".to_string()),
            ..Flags::default()
        }
    }

    fn app() -> App {
        App::with_parts(english(), &Config::default(), ued_photos(), &NoAssets)
            .expect("catalog is not empty")
    }

    fn press(app: &mut App, message: gallery::Message) {
        let _ = app.update(Message::Gallery(message));
    }

    fn move_to(app: &mut App, x: f32) {
        press(app, gallery::Message::PointerMoved(Point::new(x, 100.0)));
    }

    #[test]
    fn starts_on_first_photo() {
        let app = app();
        assert_eq!(app.current_index(), 0);
        assert_eq!(app.revision(), 0);
    }

    #[test]
    fn empty_photo_list_is_rejected() {
        let result = App::with_parts(english(), &Config::default(), Vec::new(), &NoAssets);
        assert_eq!(result.err(), Some(Error::EmptyGallery));
    }

    #[test]
    fn button_sequence_matches_reference() {
        let mut app = app();
        let mut seen = Vec::new();
        for message in [
            gallery::Message::NextPressed,
            gallery::Message::NextPressed,
            gallery::Message::PreviousPressed,
            gallery::Message::NextPressed,
            gallery::Message::NextPressed,
            gallery::Message::NextPressed,
        ] {
            press(&mut app, message);
            seen.push(app.current_index() + 1);
        }
        assert_eq!(seen, vec![2, 3, 2, 3, 4, 5]);
        assert_eq!(app.revision(), 6);
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let mut app = app();
        press(&mut app, gallery::Message::PreviousPressed);
        assert_eq!(app.current_index(), 4);
    }

    #[test]
    fn swipe_left_advances_once_per_gesture() {
        let mut app = app();
        move_to(&mut app, 300.0);
        press(&mut app, gallery::Message::PointerPressed);
        move_to(&mut app, 275.0);
        move_to(&mut app, 250.0);
        press(&mut app, gallery::Message::PointerReleased);

        assert_eq!(app.current_index(), 1);
    }

    #[test]
    fn small_drag_does_not_navigate() {
        let mut app = app();
        move_to(&mut app, 300.0);
        press(&mut app, gallery::Message::PointerPressed);
        move_to(&mut app, 310.0);
        press(&mut app, gallery::Message::PointerReleased);

        assert_eq!(app.current_index(), 0);
        assert_eq!(app.revision(), 0);
    }

    #[test]
    fn swipe_right_goes_back() {
        let mut app = app();
        move_to(&mut app, 100.0);
        press(&mut app, gallery::Message::PointerPressed);
        move_to(&mut app, 125.0);

        assert_eq!(app.current_index(), 4);
    }

    #[test]
    fn arrow_keys_navigate() {
        let mut app = app();
        let _ = app.update(Message::KeyPressed(keyboard::Key::Named(Named::ArrowRight)));
        let _ = app.update(Message::KeyPressed(keyboard::Key::Named(Named::ArrowRight)));
        let _ = app.update(Message::KeyPressed(keyboard::Key::Named(Named::ArrowLeft)));
        assert_eq!(app.current_index(), 1);
    }

    #[test]
    fn home_and_end_jump_to_bounds() {
        let mut app = app();
        let _ = app.update(Message::KeyPressed(keyboard::Key::Named(Named::End)));
        assert_eq!(app.current_index(), 4);
        let _ = app.update(Message::KeyPressed(keyboard::Key::Named(Named::Home)));
        assert_eq!(app.current_index(), 0);
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        let mut app = app();
        let _ = app.update(Message::KeyPressed(keyboard::Key::Character("a".into())));
        assert_eq!(app.current_index(), 0);
        assert_eq!(app.revision(), 0);
    }

    #[test]
    fn title_uses_default_group() {
        let app = app();
        assert_eq!(app.title(), "UED Gallery Nhóm 13");
    }

    #[test]
    fn group_flag_overrides_config() {
        let mut config = Config::default();
        config.gallery.group_name = Some("Config Group".to_string());

        let flags = Flags {
            group: Some("Flag Group".to_string()),
            ..english()
        };
        let app = App::with_parts(flags, &config, ued_photos(), &NoAssets).expect("app");
        assert_eq!(app.group_name(), "Flag Group");

        let app = App::with_parts(english(), &config, ued_photos(), &NoAssets).expect("app");
        assert_eq!(app.group_name(), "Config Group");
    }

    #[test]
    fn blank_group_flag_falls_back() {
        let flags = Flags {
            group: Some("   ".to_string()),
            ..english()
        };
        let app = App::with_parts(flags, &Config::default(), ued_photos(), &NoAssets).expect("app");
        assert_eq!(app.group_name(), "Nhóm 13");
    }

    #[test]
    fn config_warning_is_translated() {
        let app = app();
        assert_eq!(
            app.report_config_warning("notification-config-load-error"),
            "Could not read settings, defaults are in use."
        );
    }

    #[test]
    fn view_builds_with_missing_images() {
        let app = app();
        let _element = app.view();
    }

    #[test]
    fn default_theme_is_light() {
        assert_eq!(app().theme(), Theme::Light);
    }

    #[test]
    fn window_settings_enforce_minimum_size() {
        let settings = window_settings();
        let min = settings.min_size.expect("min size");
        assert!(settings.size.width >= min.width);
        assert!(settings.size.height >= min.height);
    }
}
