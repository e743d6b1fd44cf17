//! Paints a `StageFrame` with egui

use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Sense, Stroke, Ui, Vec2};
use pf_core::Direction;
use pf_views::{ElementStyle, StageFrame};

/// How item elements are arranged on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Sheets stacked on top of each other
    Stack,
    /// Open book, flipped pages on the left
    Spread,
    /// Horizontal filmstrip
    Strip { portrait: bool },
}

/// Result of drawing one frame
#[derive(Debug, Default)]
pub struct StageResponse {
    /// Item the user clicked on
    pub clicked: Option<usize>,

    /// Prev/next control the user clicked on
    pub control: Option<Direction>,
}

const SHEET_SIZE: Vec2 = Vec2::new(260.0, 340.0);
const PAGE_SIZE: Vec2 = Vec2::new(220.0, 300.0);
const CONTROL_SIZE: Vec2 = Vec2::new(48.0, 32.0);

/// Draw the frame into the remaining space of `ui`
pub fn show(ui: &mut Ui, layout: Layout, frame: &StageFrame, labels: &[String]) -> StageResponse {
    let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click());
    let painter = ui.painter_at(rect);
    let center = rect.center();

    // Paint in z order; hit-test from the top down
    let mut placed: Vec<(usize, i32, Rect, f32)> = frame
        .elements
        .iter()
        .enumerate()
        .filter(|(_, style)| style.is_visible())
        .map(|(index, style)| {
            let (item_rect, alpha) = place(layout, center, index, style);
            (index, style.z_index.unwrap_or(0), item_rect, alpha)
        })
        .collect();
    placed.sort_by_key(|(index, z, _, _)| (*z, *index));

    for (index, _, item_rect, alpha) in &placed {
        let style = &frame.elements[*index];
        let fill = if style.has_class("active") || style.position == Some(0) {
            Color32::from_rgb(236, 228, 210)
        } else {
            Color32::from_rgb(200, 192, 176)
        };
        painter.rect(
            *item_rect,
            4.0,
            fill.gamma_multiply(*alpha),
            Stroke::new(1.0, Color32::from_gray(60).gamma_multiply(*alpha)),
        );
        if let Some(label) = labels.get(*index) {
            painter.text(
                item_rect.center(),
                Align2::CENTER_CENTER,
                label,
                FontId::proportional(14.0),
                Color32::from_gray(30).gamma_multiply(*alpha),
            );
        }
    }

    if let Some(caption) = &frame.caption {
        painter.text(
            Pos2::new(center.x, rect.bottom() - 24.0),
            Align2::CENTER_CENTER,
            caption,
            FontId::monospace(13.0),
            Color32::from_gray(200),
        );
    }

    paint_controls(&painter, rect, frame);

    let pointer = response
        .clicked()
        .then(|| response.interact_pointer_pos())
        .flatten();

    // Controls sit above the items
    let control = pointer.and_then(|pos| hit_control(rect, pos));
    let clicked = match (pointer, control) {
        (Some(pos), None) => placed
            .iter()
            .rev()
            .find(|(index, _, item_rect, _)| {
                item_rect.contains(pos) && frame.elements[*index].pointer_events != Some(false)
            })
            .map(|(index, _, _, _)| *index),
        _ => None,
    };

    StageResponse { clicked, control }
}

fn place(layout: Layout, center: Pos2, index: usize, style: &ElementStyle) -> (Rect, f32) {
    match layout {
        Layout::Stack => {
            let mut offset = Vec2::ZERO;
            if style.has_class("next") {
                offset = Vec2::new(14.0, 10.0);
            }
            if style.has_class("fly-out-right") {
                offset = Vec2::new(SHEET_SIZE.x * 0.6, -20.0);
            }
            if style.has_class("fly-out-left") {
                offset = Vec2::new(-SHEET_SIZE.x * 0.6, -20.0);
            }
            (Rect::from_center_size(center + offset, SHEET_SIZE), 1.0)
        }
        Layout::Spread => {
            let side = if style.has_class("flipped") { -0.5 } else { 0.5 };
            let lift = if style.has_class("turning") { -12.0 } else { 0.0 };
            let page_center = center + Vec2::new(side * PAGE_SIZE.x, lift);
            (Rect::from_center_size(page_center, PAGE_SIZE), 1.0)
        }
        Layout::Strip { portrait } => {
            let size = if portrait {
                Vec2::new(180.0, 260.0)
            } else {
                Vec2::new(280.0, 190.0)
            };
            let distance = style.position.unwrap_or(index as i32) as f32;
            let scale = 1.0 - 0.15 * distance.abs();
            let item_center = center + Vec2::new(distance * size.x * 0.75, 0.0);
            let alpha = 1.0 - 0.3 * distance.abs();
            (Rect::from_center_size(item_center, size * scale), alpha.max(0.2))
        }
    }
}

fn control_rects(rect: Rect) -> [(Rect, Direction); 2] {
    let y = rect.bottom() - 60.0;
    [
        (Rect::from_center_size(Pos2::new(rect.left() + 40.0, y), CONTROL_SIZE), Direction::Backward),
        (Rect::from_center_size(Pos2::new(rect.right() - 40.0, y), CONTROL_SIZE), Direction::Forward),
    ]
}

/// Which control, if any, lies under `pos`
fn hit_control(rect: Rect, pos: Pos2) -> Option<Direction> {
    control_rects(rect)
        .into_iter()
        .find(|(control_rect, _)| control_rect.contains(pos))
        .map(|(_, direction)| direction)
}

fn paint_controls(painter: &Painter, rect: Rect, frame: &StageFrame) {
    for (control_rect, direction) in control_rects(rect) {
        let (glyph, opacity) = match direction {
            Direction::Backward => ("<", frame.controls.prev_opacity),
            Direction::Forward => (">", frame.controls.next_opacity),
        };
        let color = Color32::from_gray(220).gamma_multiply(opacity);
        painter.rect_stroke(control_rect, 4.0, Stroke::new(1.0, color));
        painter.text(control_rect.center(), Align2::CENTER_CENTER, glyph, FontId::proportional(18.0), color);
    }
}
