// src/render/window.rs

//! Native window renderer built on `eframe` / `egui`.
//!
//! `render` blocks the calling thread until the user closes the window.

use egui::{Align2, Color32, FontId, Pos2, Sense, Shape, Stroke};
use tracing::info;

use crate::errors::{GraphviewError, Result};
use crate::render::{Figure, Point, Primitive, Renderer, Rgb};

#[derive(Debug, Clone, Copy, Default)]
pub struct WindowRenderer;

impl Renderer for WindowRenderer {
    fn render(&self, figure: Figure) -> Result<()> {
        let title = figure.style.title.clone();
        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(title.clone())
                .with_inner_size([figure.style.width, figure.style.height]),
            ..Default::default()
        };

        info!(%title, nodes = figure.nodes.len(), "opening figure window");
        eframe::run_native(
            &title,
            native_options,
            Box::new(move |cc| {
                cc.egui_ctx.set_visuals(egui::Visuals::light());
                Box::new(FigureApp { figure })
            }),
        )
        .map_err(|e| GraphviewError::Render(e.to_string()))
    }
}

struct FigureApp {
    figure: Figure,
}

impl eframe::App for FigureApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::WHITE))
            .show(ctx, |ui| {
                let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
                let rect = response.rect;
                let canvas = self
                    .figure
                    .canvas_at(rect.min.x, rect.min.y, rect.width(), rect.height());

                let style = &self.figure.style;
                let node_fill = color(style.node_color);
                let edge_stroke = Stroke::new(1.5, color(style.edge_color));

                for prim in self.figure.primitives(&canvas) {
                    match prim {
                        Primitive::Title { at, text } => {
                            painter.text(
                                pos(at),
                                Align2::CENTER_CENTER,
                                text,
                                FontId::proportional(style.font_size * 1.3),
                                Color32::BLACK,
                            );
                        }
                        Primitive::Line { from, to } => {
                            painter.line_segment([pos(from), pos(to)], edge_stroke);
                        }
                        Primitive::Arrowhead(points) => {
                            painter.add(Shape::convex_polygon(
                                points.iter().copied().map(pos).collect(),
                                edge_stroke.color,
                                Stroke::NONE,
                            ));
                        }
                        Primitive::Loop { center, radius } => {
                            painter.circle_stroke(pos(center), radius, edge_stroke);
                        }
                        Primitive::Node { center, radius } => {
                            painter.circle_filled(pos(center), radius, node_fill);
                        }
                        Primitive::Label { at, text } => {
                            painter.text(
                                pos(at),
                                Align2::CENTER_CENTER,
                                text,
                                FontId::proportional(style.font_size),
                                Color32::BLACK,
                            );
                        }
                    }
                }
            });
    }
}

fn pos(p: Point) -> Pos2 {
    Pos2::new(p.x, p.y)
}

fn color(c: Rgb) -> Color32 {
    Color32::from_rgb(c.0, c.1, c.2)
}
