//! Screen flow after the love meter fills
//!
//! ```text
//! Start -> Game -> Proposal -yes-> Celebration <-> Card <-> Gallery
//!                     ^  |
//!                 back|  no
//!                     Declined
//! ```

/// Photos shown in the gallery, relative to `photos/`
pub const GALLERY_PHOTOS: &[&str] = &["2.jpeg", "3.jpeg", "4.jpeg", "5.jpeg", "6.jpeg"];

const PHOTO_DIR: &str = "photos";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Start,
    /// Canvas only, no overlay screen
    Game,
    Proposal,
    Declined,
    Celebration,
    Card,
    Gallery,
}

impl Screen {
    /// DOM id of the overlay element for this screen
    pub fn element_id(&self) -> Option<&'static str> {
        match self {
            Screen::Start => Some("start-screen"),
            Screen::Game => None,
            Screen::Proposal => Some("proposal-screen"),
            Screen::Declined => Some("noScreen"),
            Screen::Celebration => Some("celebration-screen"),
            Screen::Card => Some("card-screen"),
            Screen::Gallery => Some("gallery-screen"),
        }
    }
}

/// User or game driven navigation requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Start,
    MeterFull,
    Yes,
    No,
    GoBack,
    Next,
    BackToCelebration,
    ToGallery,
    BackToCard,
    BackFromGallery,
}

/// A screen change that the page must apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Screen,
    pub to: Screen,
}

/// One gallery tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryEntry {
    pub name: &'static str,
    pub src: String,
    pub alt: String,
}

/// Gallery tiles in display order
pub fn gallery_entries() -> Vec<GalleryEntry> {
    GALLERY_PHOTOS
        .iter()
        .enumerate()
        .map(|(i, &name)| GalleryEntry {
            name,
            src: photo_src(name),
            alt: format!("Memory Photo {}", i + 1),
        })
        .collect()
}

pub fn photo_src(name: &str) -> String {
    format!("{}/{}", PHOTO_DIR, name)
}

/// Current screen, HUD visibility and the photo modal
#[derive(Debug, Clone)]
pub struct ScreenFlow {
    current: Screen,
    hud_visible: bool,
    modal_photo: Option<String>,
}

impl Default for ScreenFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenFlow {
    pub fn new() -> Self {
        Self {
            current: Screen::Start,
            hud_visible: true,
            modal_photo: None,
        }
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    pub fn hud_visible(&self) -> bool {
        self.hud_visible
    }

    /// Apply an action; actions that make no sense on the current screen are ignored
    pub fn apply(&mut self, action: NavAction) -> Option<Transition> {
        use Screen::*;

        let to = match (self.current, action) {
            (Start, NavAction::Start) => Game,
            (Game, NavAction::MeterFull) => Proposal,
            (Proposal, NavAction::Yes) => Celebration,
            (Proposal, NavAction::No) => Declined,
            (Declined, NavAction::GoBack) => Proposal,
            (Celebration, NavAction::Next) => Card,
            (Card, NavAction::BackToCelebration) => Celebration,
            (Card, NavAction::ToGallery) => Gallery,
            (Gallery, NavAction::BackToCard | NavAction::BackFromGallery) => Card,
            (screen, action) => {
                log::debug!("Ignoring {:?} on {:?}", action, screen);
                return None;
            }
        };

        if to == Celebration {
            self.hud_visible = false;
        }
        let transition = Transition {
            from: self.current,
            to,
        };
        log::info!("Screen {:?} -> {:?}", transition.from, transition.to);
        self.current = to;
        Some(transition)
    }

    pub fn modal_photo(&self) -> Option<&str> {
        self.modal_photo.as_deref()
    }

    /// Show a photo full size; returns its source path
    pub fn open_photo(&mut self, name: &str) -> String {
        let src = photo_src(name);
        self.modal_photo = Some(src.clone());
        src
    }

    /// Returns whether the modal was open
    pub fn close_photo(&mut self) -> bool {
        self.modal_photo.take().is_some()
    }

    /// Escape closes the modal only while it is open
    pub fn on_escape(&mut self) -> bool {
        self.close_photo()
    }
}
