// Stream element source lifecycle - visibility pause/resume and reload
/// 1x1 transparent GIF shown while the page is hidden, so the element
/// releases its open stream connection.
pub const PLACEHOLDER_SRC: &str =
    "data:image/gif;base64,R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

/// Source-URL policy for the live image element.
///
/// While visible the element points at the relay; losing visibility swaps
/// it to the placeholder and saves the URL held at that moment, so
/// regaining visibility restores exactly that URL rather than forcing a
/// reload. A manual reload appends a cache-busting timestamp to defeat
/// renderers that skip re-assigning an unchanged source string.
#[derive(Debug, Clone)]
pub struct StreamLifecycle {
    relay_url: String,
    visibility: Visibility,
    src: String,
    saved_src: Option<String>,
}

impl StreamLifecycle {
    pub fn new(relay_url: impl Into<String>) -> Self {
        let relay_url = relay_url.into();
        let src = relay_url.clone();
        Self {
            relay_url,
            visibility: Visibility::Visible,
            src,
            saved_src: None,
        }
    }

    /// URL the image element should currently render.
    pub fn current_src(&self) -> &str {
        &self.src
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Page lost visibility: park the element on the placeholder. A repeat
    /// signal while already hidden must not clobber the saved URL.
    pub fn page_hidden(&mut self) {
        if self.visibility == Visibility::Hidden {
            return;
        }
        self.visibility = Visibility::Hidden;
        self.saved_src = Some(std::mem::replace(&mut self.src, PLACEHOLDER_SRC.to_string()));
    }

    /// Page regained visibility: restore the URL held when it was lost.
    pub fn page_visible(&mut self) {
        if self.visibility == Visibility::Visible {
            return;
        }
        self.visibility = Visibility::Visible;
        self.src = self.saved_src.take().unwrap_or_else(|| self.relay_url.clone());
    }

    /// Manual reload: re-point at the relay with a cache-busting timestamp
    /// supplied by the caller. Issued while hidden it updates the saved
    /// URL so the resume picks up the fresh connection.
    pub fn reload(&mut self, now_ms: i64) {
        let busted = format!("{}?t={}", self.relay_url, now_ms);
        match self.visibility {
            Visibility::Visible => self.src = busted,
            Visibility::Hidden => self.saved_src = Some(busted),
        }
    }
}
