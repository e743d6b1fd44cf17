//! The three hosted pages and their viewers

use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

use pf_core::{Clock, InputAdapter, InputEvent, Navigable, PageConfig, RenderBinding, Viewer};
use pf_views::{
    FilmstripBinding, GalleryMode, PageFlipBinding, PaperStackBinding, PhotoGallery, Sheet,
    StageFrame,
};

use crate::stage::Layout;

/// Pages selectable from the top bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Portraits,
    Sketchbook,
    Photography,
}

impl PageKind {
    pub const ALL: [PageKind; 3] = [PageKind::Portraits, PageKind::Sketchbook, PageKind::Photography];

    pub fn title(&self) -> &'static str {
        match self {
            PageKind::Portraits => "Portraits",
            PageKind::Sketchbook => "Urban Sketch",
            PageKind::Photography => "Photography",
        }
    }
}

/// A page hosting one viewer
pub trait HostedPage {
    fn layout(&self) -> Layout;

    /// Forward an input event to the page's viewer
    fn handle(&mut self, event: InputEvent);

    /// Viewer driven by the prev/next controls
    fn navigator(&self) -> &dyn Navigable;

    /// Fire due timers and return the next deadline, if any
    fn poll(&self) -> Option<Instant>;

    fn frame(&self) -> StageFrame;

    /// Text drawn on each item
    fn labels(&self) -> Vec<String>;

    /// Page-specific controls shown above the stage
    fn toolbar(&mut self, _ui: &mut egui::Ui) {}
}

fn attach<T, B>(viewer: &Viewer<T>, binding: &Arc<B>)
where
    T: Send + Sync + 'static,
    B: RenderBinding<T> + 'static,
{
    viewer.add_binding(binding.clone());
    viewer.render_now();
}

pub struct PortraitsPage {
    viewer: Viewer<Sheet>,
    binding: Arc<PaperStackBinding>,
    input: InputAdapter,
}

impl PortraitsPage {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        let config = PageConfig::portraits();
        let sheets: Vec<Sheet> = ["Charcoal study", "Ink on newsprint", "Graphite, 30 min", "Conte crayon", "Blind contour"]
            .into_iter()
            .map(Sheet::new)
            .collect();

        let viewer = Viewer::with_clock(sheets, config.viewer, clock);
        let binding = Arc::new(PaperStackBinding::new());
        attach(&viewer, &binding);

        Self {
            viewer,
            binding,
            input: InputAdapter::new(config.input),
        }
    }
}

impl HostedPage for PortraitsPage {
    fn layout(&self) -> Layout {
        Layout::Stack
    }

    fn handle(&mut self, event: InputEvent) {
        if let Some(command) = self.input.handle(event, &self.viewer) {
            debug!(?command, "Portraits navigation");
        }
    }

    fn navigator(&self) -> &dyn Navigable {
        &self.viewer
    }

    fn poll(&self) -> Option<Instant> {
        self.viewer.poll();
        self.viewer.next_deadline()
    }

    fn frame(&self) -> StageFrame {
        self.binding.frame()
    }

    fn labels(&self) -> Vec<String> {
        self.viewer.items().iter().map(|sheet| sheet.note.clone()).collect()
    }
}

pub struct SketchbookPage {
    viewer: Viewer<String>,
    binding: Arc<PageFlipBinding>,
    input: InputAdapter,
}

impl SketchbookPage {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        let config = PageConfig::sketchbook();
        let pages: Vec<String> = ["Front cover", "Harbour", "Market street", "Station", "Old bridge", "Back cover"]
            .into_iter()
            .map(String::from)
            .collect();

        let viewer = Viewer::with_clock(pages, config.viewer.clone(), clock);
        let binding = Arc::new(PageFlipBinding::new(config.viewer.min_index));
        attach(&viewer, &binding);

        Self {
            viewer,
            binding,
            input: InputAdapter::new(config.input),
        }
    }
}

impl HostedPage for SketchbookPage {
    fn layout(&self) -> Layout {
        Layout::Spread
    }

    fn handle(&mut self, event: InputEvent) {
        if let Some(command) = self.input.handle(event, &self.viewer) {
            debug!(?command, "Sketchbook navigation");
        }
    }

    fn navigator(&self) -> &dyn Navigable {
        &self.viewer
    }

    fn poll(&self) -> Option<Instant> {
        self.viewer.poll();
        self.viewer.next_deadline()
    }

    fn frame(&self) -> StageFrame {
        self.binding.frame()
    }

    fn labels(&self) -> Vec<String> {
        self.viewer.items().to_vec()
    }
}

pub struct PhotographyPage {
    gallery: PhotoGallery,
    binding: Arc<FilmstripBinding>,
    input: InputAdapter,
}

impl PhotographyPage {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        let config = PageConfig::photography();
        let gallery = PhotoGallery::new(config.viewer, clock);
        let binding = Arc::new(FilmstripBinding::new());
        attach(gallery.viewer(), &binding);

        Self {
            gallery,
            binding,
            input: InputAdapter::new(config.input),
        }
    }
}

impl HostedPage for PhotographyPage {
    fn layout(&self) -> Layout {
        Layout::Strip {
            portrait: self.gallery.mode().stage_class().is_some(),
        }
    }

    fn handle(&mut self, event: InputEvent) {
        if let Some(command) = self.input.handle(event, self.gallery.viewer().as_ref()) {
            debug!(?command, "Photography navigation");
        }
    }

    fn navigator(&self) -> &dyn Navigable {
        self.gallery.viewer().as_ref()
    }

    fn poll(&self) -> Option<Instant> {
        self.gallery.viewer().poll();
        self.gallery.poll();
        [self.gallery.viewer().next_deadline(), self.gallery.next_deadline()]
            .into_iter()
            .flatten()
            .min()
    }

    fn frame(&self) -> StageFrame {
        self.binding.frame()
    }

    fn labels(&self) -> Vec<String> {
        self.gallery
            .viewer()
            .items()
            .iter()
            .map(|slide| slide.src.rsplit('/').next().unwrap_or(&slide.src).to_string())
            .collect()
    }

    fn toolbar(&mut self, ui: &mut egui::Ui) {
        let current = self.gallery.mode();
        for (mode, label) in [(GalleryMode::Landscape, "Landscape"), (GalleryMode::Portrait, "Portrait")] {
            if ui.selectable_label(current == mode, label).clicked() {
                self.gallery.switch_mode(mode);
            }
        }
    }
}
