//! Main application entry point

use std::sync::Arc;
use std::time::Instant;
use eframe::egui::{self, Context};
use anyhow::Result;
use tracing::{debug, info};

use pf_core::{Clock, Direction, InputEvent, NavKey, SystemClock};

mod pages;
mod stage;

use pages::{HostedPage, PageKind, PhotographyPage, PortraitsPage, SketchbookPage};

/// Main application state
struct PortfolioViewerApp {
    /// Page currently on screen
    active: PageKind,

    portraits: PortraitsPage,
    sketchbook: SketchbookPage,
    photography: PhotographyPage,
}

impl PortfolioViewerApp {
    fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        Self {
            active: PageKind::Portraits,
            portraits: PortraitsPage::new(clock.clone()),
            sketchbook: SketchbookPage::new(clock.clone()),
            photography: PhotographyPage::new(clock),
        }
    }

    fn page_mut(&mut self) -> &mut dyn HostedPage {
        match self.active {
            PageKind::Portraits => &mut self.portraits,
            PageKind::Sketchbook => &mut self.sketchbook,
            PageKind::Photography => &mut self.photography,
        }
    }

    /// Collect this frame's raw input as viewer input events
    fn input_events(ctx: &Context) -> Vec<InputEvent> {
        ctx.input(|i| {
            let mut events = Vec::new();

            if i.key_pressed(egui::Key::ArrowLeft) {
                events.push(InputEvent::Key(NavKey::ArrowLeft));
            }
            if i.key_pressed(egui::Key::ArrowRight) {
                events.push(InputEvent::Key(NavKey::ArrowRight));
            }

            // A primary-button drag stands in for a touch swipe
            if let Some(pos) = i.pointer.interact_pos() {
                if i.pointer.primary_pressed() {
                    events.push(InputEvent::TouchStart { screen_x: pos.x });
                }
                if i.pointer.primary_released() {
                    events.push(InputEvent::TouchEnd { screen_x: pos.x });
                }
            }

            events
        })
    }
}

impl eframe::App for PortfolioViewerApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Page selector
        egui::TopBottomPanel::top("page_selector").show(ctx, |ui| {
            ui.horizontal(|ui| {
                for kind in PageKind::ALL {
                    if ui.selectable_label(self.active == kind, kind.title()).clicked() {
                        self.active = kind;
                    }
                }
                ui.separator();
                self.page_mut().toolbar(ui);
            });
        });

        for event in Self::input_events(ctx) {
            self.page_mut().handle(event);
        }

        // Settle transitions on every page so none stalls while hidden
        let next_deadline = [
            self.portraits.poll(),
            self.sketchbook.poll(),
            self.photography.poll(),
        ]
        .into_iter()
        .flatten()
        .min();

        egui::CentralPanel::default().show(ctx, |ui| {
            let page = self.page_mut();
            let response = stage::show(ui, page.layout(), &page.frame(), &page.labels());
            if let Some(direction) = response.control {
                let target = page.navigator();
                let accepted = match direction {
                    Direction::Forward => target.next(),
                    Direction::Backward => target.previous(),
                };
                debug!(?direction, accepted, "Control clicked");
            } else if let Some(index) = response.clicked {
                page.handle(InputEvent::ItemClick { index });
            }
        });

        if let Some(deadline) = next_deadline {
            ctx.request_repaint_after(deadline.saturating_duration_since(Instant::now()));
        }
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting portfolio viewer");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([640.0, 480.0]),
        default_theme: eframe::Theme::Dark,
        persist_window: false,
        ..Default::default()
    };

    eframe::run_native(
        "Portfolio Viewer",
        options,
        Box::new(|cc| {
            Box::new(PortfolioViewerApp::new(cc))
        }),
    ).map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
