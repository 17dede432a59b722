//! Scroll-position tracking for the content panel
//!
//! The content document carries an anchor per endpoint heading. After each
//! frame the viewport tracker checks which anchor sits inside the top band
//! of the viewport (the upper 20%, biased like the original page toward
//! headings near the top of the screen) and reports transitions to the
//! navigation context. The context is an injected trait so the TOC
//! highlight and header display can be tested without a terminal.

use crate::types::PageMetadata;

/// Navigation context operations available to the content view.
///
/// `update_section` is driven automatically by scroll-visibility
/// transitions; `update_metadata` only by explicit jumps from the TOC.
pub trait NavigationSink {
    fn update_section(&mut self, section: &str, slug: &str);
    fn update_metadata(&mut self, metadata: PageMetadata);
}

/// The app's navigation context: current anchor plus page metadata.
#[derive(Debug, Clone, Default)]
pub struct PageNavigation {
    pub current_section: Option<String>,
    pub current_slug: Option<String>,
    pub metadata: Option<PageMetadata>,
}

impl NavigationSink for PageNavigation {
    fn update_section(&mut self, section: &str, slug: &str) {
        self.current_section = Some(section.to_string());
        self.current_slug = Some(slug.to_string());
    }

    fn update_metadata(&mut self, metadata: PageMetadata) {
        self.metadata = Some(metadata);
    }
}

/// Position of one endpoint heading inside the content document.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingAnchor {
    pub section: String,
    pub slug: String,
    pub line: usize,
}

/// Line geometry of the built content document.
#[derive(Debug, Clone, Default)]
pub struct ContentLayout {
    pub anchors: Vec<HeadingAnchor>,
    pub total_lines: usize,
}

impl ContentLayout {
    /// The anchor currently inside the viewport band, if any.
    /// When several headings fit in the band the deepest one wins.
    pub fn anchor_in_band(&self, scroll: usize, viewport_height: u16) -> Option<&HeadingAnchor> {
        let band = band_height(viewport_height);
        self.anchors
            .iter()
            .filter(|a| a.line >= scroll && a.line < scroll + band)
            .next_back()
    }

    /// Find an anchor by section and slug. Slugs alone are not unique:
    /// two sections can both document a "List" endpoint.
    pub fn anchor_for(&self, section: &str, slug: &str) -> Option<&HeadingAnchor> {
        self.anchors
            .iter()
            .find(|a| a.section == section && a.slug == slug)
    }

    /// Largest useful scroll offset for a viewport of the given height,
    /// capped at what `Paragraph::scroll` can address.
    pub fn max_scroll(&self, viewport_height: u16) -> usize {
        self.total_lines
            .saturating_sub(viewport_height as usize)
            .min(u16::MAX as usize)
    }
}

/// Lines at the top of the viewport that count as "in view" for a heading.
pub fn band_height(viewport_height: u16) -> usize {
    (viewport_height as usize / 5).max(1)
}

/// Edge-triggered observer over the viewport band.
///
/// Reports a section update only when the in-band anchor changes, never on
/// every frame while the same heading stays in view. Anchors are identified
/// by their heading line, which is unique even when slugs collide.
#[derive(Debug, Default)]
pub struct ViewportTracker {
    in_view: Option<usize>,
}

impl ViewportTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(
        &mut self,
        layout: &ContentLayout,
        scroll: usize,
        viewport_height: u16,
        nav: &mut dyn NavigationSink,
    ) {
        let visible = layout.anchor_in_band(scroll, viewport_height);
        let line = visible.map(|a| a.line);

        if line != self.in_view {
            if let Some(anchor) = visible {
                nav.update_section(&anchor.section, &anchor.slug);
            }
            self.in_view = line;
        }
    }

    /// Forget the last observation, e.g. after the document is rebuilt.
    pub fn reset(&mut self) {
        self.in_view = None;
    }
}
