//! Static fractal viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the generated geometry for
//! both scenes (branching tree segments and carpet grid) and implements
//! [`eframe::App`] to paint whichever scene is selected.

use eframe::App;
use fractal_core::{
    carpet::{self, CarpetError},
    config::{CarpetConfig, TreeConfig},
    grid::{Cell, Grid},
    tree::{self, Segment},
};
use glam::Vec2;
use log::debug;

/// Vertical distance from the bottom canvas edge to the tree's root.
const TREE_BASE_MARGIN: f32 = 100.0;

/// Which of the two generated patterns is painted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Scene {
    Tree,
    Carpet,
}

/// Main application state for the viewer.
///
/// Both scenes are generated once in [`Viewer::new`] and never change;
/// per frame the viewer only paints the selected one.
///
/// ### Fields
/// - `scene` - Currently selected scene.
/// - `segments` - Branching-tree segments in a local frame rooted at `(0, 0)`.
/// - `carpet` - Completed carpet grid, read-only.
pub struct Viewer {
    scene: Scene,
    segments: Vec<Segment>,
    carpet: Grid,
}

impl Viewer {
    /// Generates both scenes from the default configuration.
    ///
    /// The tree is generated in a local y-down frame with its root at
    /// `(0, 0)` and an upward trunk; painting later anchors that frame
    /// near the bottom-center of the canvas.
    ///
    /// ### Returns
    /// - `Ok(Viewer)` with the generated geometry.
    /// - `Err` if the configured carpet size is not a power of 3.
    pub fn new() -> Result<Self, CarpetError> {
        let tree_cfg = TreeConfig::default();
        let carpet_cfg = CarpetConfig::default();

        let segments = tree::generate(
            &tree_cfg,
            Vec2::ZERO,
            tree_cfg.trunk_length,
            tree_cfg.start_angle,
        );
        debug!("generated {} tree segments", segments.len());

        let carpet = carpet::generate(carpet_cfg.size)?;
        debug!(
            "generated a size-{} carpet ({} filled cells)",
            carpet.size(),
            carpet.count(Cell::Filled)
        );

        Ok(Self {
            scene: Scene::Tree,
            segments,
            carpet,
        })
    }

    /// Builds the top panel with the scene selector.
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .selectable_label(matches!(self.scene, Scene::Tree), "Branching tree")
                    .clicked()
                {
                    self.scene = Scene::Tree;
                }

                if ui
                    .selectable_label(matches!(self.scene, Scene::Carpet), "Sierpiński carpet")
                    .clicked()
                {
                    self.scene = Scene::Carpet;
                }
            });
        });
    }

    /// Builds the bottom status bar with counts for the selected scene.
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                match self.scene {
                    Scene::Tree => {
                        ui.label(format!("segments = {}", self.segments.len()));
                    }
                    Scene::Carpet => {
                        ui.label(format!("empty = {}", self.carpet.count(Cell::Empty)));
                        ui.label(format!("filled = {}", self.carpet.count(Cell::Filled)));
                        ui.separator();
                        ui.label(format!("size = {}", self.carpet.size()));
                    }
                }
            });
        });
    }

    /// Builds the central panel and paints the selected scene.
    fn ui_central_panel(&self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::hover());
            let rect = response.rect;
            let painter = ui.painter_at(rect);

            match self.scene {
                Scene::Tree => self.draw_tree(&painter, rect),
                Scene::Carpet => self.draw_carpet(&painter, rect),
            }
        });
    }

    /// Paints every tree segment, anchored at the bottom-center of `rect`.
    fn draw_tree(&self, painter: &egui::Painter, rect: egui::Rect) {
        let anchor = tree_anchor(rect);
        let stroke = egui::Stroke::new(2.0, egui::Color32::LIGHT_GREEN);

        for seg in &self.segments {
            let a = egui::pos2(anchor.x + seg.start.x, anchor.y + seg.start.y);
            let b = egui::pos2(anchor.x + seg.end.x, anchor.y + seg.end.y);
            painter.line_segment([a, b], stroke);
        }
    }

    /// Paints every carpet cell as a filled square, centered in `rect`.
    fn draw_carpet(&self, painter: &egui::Painter, rect: egui::Rect) {
        let size = self.carpet.size();
        let (cell, origin) = carpet_layout(rect, size);
        if cell <= 0.0 {
            return;
        }

        for row in 0..size {
            for col in 0..size {
                let min = egui::pos2(
                    origin.x + col as f32 * cell,
                    origin.y + row as f32 * cell,
                );
                let cell_rect = egui::Rect::from_min_size(min, egui::vec2(cell, cell));

                let color = match self.carpet.get(row, col) {
                    Cell::Filled => egui::Color32::from_gray(25),
                    Cell::Empty => egui::Color32::from_gray(230),
                };
                painter.rect_filled(cell_rect, egui::CornerRadius::ZERO, color);
            }
        }
    }
}

/// Screen anchor of the tree's local frame: bottom-center of the canvas,
/// [`TREE_BASE_MARGIN`] pixels above the bottom edge.
fn tree_anchor(rect: egui::Rect) -> egui::Pos2 {
    egui::pos2(rect.center().x, rect.max.y - TREE_BASE_MARGIN)
}

/// Pixel layout of the carpet inside the canvas.
///
/// The cell size is the shorter canvas edge divided by the grid side,
/// rounded down to whole pixels; the returned origin centers the grid.
fn carpet_layout(rect: egui::Rect, size: usize) -> (f32, egui::Pos2) {
    let cell = (rect.width().min(rect.height()) / size as f32).floor();
    let span = cell * size as f32;
    let origin = egui::pos2(
        rect.min.x + (rect.width() - span) / 2.0,
        rect.min.y + (rect.height() - span) / 2.0,
    );
    (cell, origin)
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_central_panel(ctx);
    }
}
