//! Sunburst geometry and egui painting.
//!
//! The decorated tree is flattened into annular segments (angle span
//! proportional to subtree leaf count, radial band per ring), painted as
//! quad fans, and hit-tested in polar coordinates. Drill-down re-roots the
//! flattening at the chosen branch, which then occupies the center disc.

use std::f32::consts::TAU;

use egui::{Pos2, Vec2};

use crate::style::{Color, DecoratedNode, LabelPosition, LabelStyle};

use super::{ChartOptions, LEVELS};

/// One paintable ring sector, angles in radians clockwise from the series
/// start angle. The drill root becomes a full-circle segment in band 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub name: String,
    pub band: usize,
    pub a0: f32,
    pub a1: f32,
    pub color: Color,
    pub label: Option<LabelStyle>,
    pub is_leaf: bool,
    pub parent_name: Option<String>,
}

impl Segment {
    pub fn is_center(&self) -> bool {
        self.band == 0
    }
}

/// What the pointer landed on.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartHit {
    Node(Segment),
    Background,
}

#[derive(Default)]
pub struct SunburstOutput {
    pub clicked: Option<ChartHit>,
    pub hovered: Option<Segment>,
    /// Pointer position when hovering a node, for tooltip placement.
    pub hover_pos: Option<Pos2>,
}

fn weight(node: &DecoratedNode) -> f64 {
    node.value.unwrap_or(0) as f64 + node.children.iter().map(weight).sum::<f64>()
}

fn find<'a>(nodes: &'a [DecoratedNode], name: &str) -> Option<&'a DecoratedNode> {
    for node in nodes {
        if node.name == name {
            return Some(node);
        }
        if let Some(found) = find(&node.children, name) {
            return Some(found);
        }
    }
    None
}

/// Flatten the tree (or the drill subtree) into segments.
pub fn build_segments(data: &[DecoratedNode], drill_root: Option<&str>) -> Vec<Segment> {
    let mut out = Vec::new();
    match drill_root.and_then(|name| find(data, name)) {
        Some(root) => {
            out.push(Segment {
                name: root.name.clone(),
                band: 0,
                a0: 0.0,
                a1: TAU,
                color: root.color,
                label: root.label,
                is_leaf: root.is_leaf(),
                parent_name: root.parent_name.clone(),
            });
            assign(&root.children, 1, 0.0, TAU, &mut out);
        }
        None => assign(data, 1, 0.0, TAU, &mut out),
    }
    out
}

fn assign(nodes: &[DecoratedNode], band: usize, a0: f32, a1: f32, out: &mut Vec<Segment>) {
    let total: f64 = nodes.iter().map(weight).sum();
    if total <= 0.0 {
        return;
    }
    let mut cursor = a0;
    for node in nodes {
        let span = ((a1 - a0) as f64 * weight(node) / total) as f32;
        out.push(Segment {
            name: node.name.clone(),
            band: band.min(LEVELS.len() - 1),
            a0: cursor,
            a1: cursor + span,
            color: node.color,
            label: node.label,
            is_leaf: node.is_leaf(),
            parent_name: node.parent_name.clone(),
        });
        assign(&node.children, band + 1, cursor, cursor + span, out);
        cursor += span;
    }
}

/// Map a chart angle (clockwise from the start angle) to a screen direction.
fn direction(start_rad: f32, a: f32) -> Vec2 {
    let theta = start_rad - a;
    Vec2::new(theta.cos(), -theta.sin())
}

/// Polar hit test against the segment list.
pub fn hit_test<'a>(
    segments: &'a [Segment],
    center: Pos2,
    radius: f32,
    start_rad: f32,
    pos: Pos2,
) -> Option<&'a Segment> {
    let d = pos - center;
    let rf = d.length() / radius;
    let theta = (-d.y).atan2(d.x);
    let a = (start_rad - theta).rem_euclid(TAU);

    segments.iter().find(|seg| {
        let band = LEVELS[seg.band];
        if rf < band.r0 || rf >= band.r1 {
            return false;
        }
        seg.is_center() || (a >= seg.a0 && a < seg.a1)
    })
}

/// Draw the chart into the available square and report pointer activity.
pub fn draw(
    ui: &mut egui::Ui,
    options: &ChartOptions,
    drill_root: Option<&str>,
    highlighted: Option<&str>,
) -> SunburstOutput {
    let side = ui.available_width().min(ui.available_height()).max(120.0);
    let (rect, response) =
        ui.allocate_exact_size(Vec2::splat(side), egui::Sense::click());
    let painter = ui.painter_at(rect);
    let center = rect.center();
    let radius = side * 0.5 * 0.95;
    let start_rad = options.series.start_angle_deg.to_radians();

    let segments = build_segments(&options.series.data, drill_root);

    let hover_pos = response.hover_pos();
    let hovered =
        hover_pos.and_then(|pos| hit_test(&segments, center, radius, start_rad, pos)).cloned();

    // Ancestor-focus emphasis: hovering keeps the lineage at full strength
    // and dims everything else.
    let lineage: Vec<&str> = match (&hovered, options.series.emphasis_ancestor_focus) {
        (Some(seg), true) => {
            let mut chain = vec![seg.name.as_str()];
            let mut parent = seg.parent_name.as_deref();
            while let Some(p) = parent {
                chain.push(p);
                parent = segments
                    .iter()
                    .find(|s| s.name == p)
                    .and_then(|s| s.parent_name.as_deref());
            }
            chain
        }
        _ => Vec::new(),
    };

    let border = egui::Stroke::new(options.series.border_width, egui::Color32::from_gray(18));
    for seg in &segments {
        let mut fill = seg.color.to_egui();
        if !lineage.is_empty() && !lineage.contains(&seg.name.as_str()) {
            fill = fill.linear_multiply(0.25);
        }
        paint_segment(&painter, center, radius, start_rad, seg, fill, border);
        if highlighted == Some(seg.name.as_str()) {
            outline_segment(
                &painter,
                center,
                radius,
                start_rad,
                seg,
                egui::Stroke::new(2.0, egui::Color32::WHITE),
            );
        }
    }

    for seg in &segments {
        paint_label(&painter, center, radius, start_rad, seg);
    }

    let clicked = if response.clicked() {
        match response
            .interact_pointer_pos()
            .and_then(|pos| hit_test(&segments, center, radius, start_rad, pos))
        {
            Some(seg) => Some(ChartHit::Node(seg.clone())),
            None => Some(ChartHit::Background),
        }
    } else {
        None
    };

    SunburstOutput { clicked, hovered, hover_pos }
}

fn arc_points(
    center: Pos2,
    r: f32,
    start_rad: f32,
    a0: f32,
    a1: f32,
    reverse: bool,
) -> Vec<Pos2> {
    let steps = (((a1 - a0) / 0.05).ceil() as usize).max(2);
    (0..=steps)
        .map(|i| {
            let t = i as f32 / steps as f32;
            let a = if reverse { a1 - (a1 - a0) * t } else { a0 + (a1 - a0) * t };
            center + direction(start_rad, a) * r
        })
        .collect()
}

fn sector_outline(center: Pos2, radius: f32, start_rad: f32, seg: &Segment) -> Vec<Pos2> {
    let band = LEVELS[seg.band];
    let mut pts = arc_points(center, band.r1 * radius, start_rad, seg.a0, seg.a1, false);
    pts.extend(arc_points(center, band.r0 * radius, start_rad, seg.a0, seg.a1, true));
    pts
}

fn paint_segment(
    painter: &egui::Painter,
    center: Pos2,
    radius: f32,
    start_rad: f32,
    seg: &Segment,
    fill: egui::Color32,
    border: egui::Stroke,
) {
    let band = LEVELS[seg.band];
    if seg.is_center() {
        painter.circle_filled(center, band.r1 * radius, fill);
        painter.circle_stroke(center, band.r1 * radius, border);
        return;
    }

    // Fill with a fan of convex quads; an annular sector itself is concave.
    let outer = arc_points(center, band.r1 * radius, start_rad, seg.a0, seg.a1, false);
    let inner = arc_points(center, band.r0 * radius, start_rad, seg.a0, seg.a1, false);
    for i in 0..outer.len() - 1 {
        painter.add(egui::Shape::convex_polygon(
            vec![inner[i], outer[i], outer[i + 1], inner[i + 1]],
            fill,
            egui::Stroke::NONE,
        ));
    }
    painter.add(egui::Shape::closed_line(
        sector_outline(center, radius, start_rad, seg),
        border,
    ));
}

fn outline_segment(
    painter: &egui::Painter,
    center: Pos2,
    radius: f32,
    start_rad: f32,
    seg: &Segment,
    stroke: egui::Stroke,
) {
    if seg.is_center() {
        painter.circle_stroke(center, LEVELS[0].r1 * radius, stroke);
    } else {
        painter.add(egui::Shape::closed_line(
            sector_outline(center, radius, start_rad, seg),
            stroke,
        ));
    }
}

fn paint_label(
    painter: &egui::Painter,
    center: Pos2,
    radius: f32,
    start_rad: f32,
    seg: &Segment,
) {
    let Some(label) = seg.label else { return };
    let band = LEVELS[seg.band];
    let mid = (seg.a0 + seg.a1) * 0.5;

    match label.position {
        LabelPosition::Inside => {
            // Skip labels whose arc is too small to carry text.
            if !seg.is_center() && (seg.a1 - seg.a0) * band.r1 * radius < 14.0 {
                return;
            }
            let r = (band.r0 + band.r1) * 0.5 * radius;
            let pos = if seg.is_center() { center } else { center + direction(start_rad, mid) * r };
            painter.text(
                pos,
                egui::Align2::CENTER_CENTER,
                &seg.name,
                egui::FontId::proportional(label.font_size),
                egui::Color32::WHITE,
            );
        }
        LabelPosition::Outside => {
            if (seg.a1 - seg.a0) * band.r1 * radius < 6.0 {
                return;
            }
            let dir = direction(start_rad, mid);
            let pos = center + dir * (band.r1 * radius + 4.0);
            let anchor = if dir.x >= 0.0 {
                egui::Align2::LEFT_CENTER
            } else {
                egui::Align2::RIGHT_CENTER
            };
            painter.text(
                pos,
                anchor,
                &seg.name,
                egui::FontId::proportional(label.font_size),
                egui::Color32::LIGHT_GRAY,
            );
        }
    }
}
