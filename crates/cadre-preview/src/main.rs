use anyhow::Result;
use cadre_engine::border::{Border, BorderSegment, Corner, CornerPatch, CornerSet, Edge, EdgePatch, EdgeSet, Segment};
use cadre_engine::coords::Rect;
use cadre_engine::logging::{LoggingConfig, init_logging};
use cadre_engine::paint::Color;
use cadre_engine::path::PathOp;
use clap::Parser;

const LINE_WIDTH: f32 = 5.0;

const DEFAULT_SIZE: f32 = 100.0;

/// Prints the sample border's outline ops, its eight segments, and an SVG that
/// shows the outline as a clip plus the segments as an overlay.
#[derive(Parser, Debug)]
#[command(name = "cadre-preview")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Dump the sample border's outline, segments and SVG", long_about = None)]
struct Args {
    /// Width of the bordered rectangle (default 100)
    #[arg(requires = "height", allow_negative_numbers = true)]
    width: Option<f32>,

    /// Height of the bordered rectangle (default 100)
    #[arg(allow_negative_numbers = true)]
    height: Option<f32>,
}

impl Args {
    fn rect(&self) -> Rect {
        let w = self.width.unwrap_or(DEFAULT_SIZE);
        let h = self.height.unwrap_or(DEFAULT_SIZE);
        if w < 0.0 || h < 0.0 {
            log::warn!("negative size {w} x {h}; the outline will be degenerate");
        }
        Rect::new(0.0, 0.0, w, h)
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let rect = Args::parse().rect();
    log::info!("previewing border in {rect:?}");

    let border = sample_border();

    println!();
    println!("  ── outline ({} x {}) ──", rect.size.x, rect.size.y);
    for op in border.build_path(rect).ops() {
        println!("  {}", describe(op));
    }

    println!();
    println!("  ── segments ──");
    for segment in border.segments() {
        let name = match segment {
            Segment::Corner(c) => format!("{:?}", c.corner()),
            Segment::Edge(e) => format!("{:?}", e.edge()),
        };
        let start = segment.starting_point(rect);
        let end = segment.ending_point(rect);
        println!(
            "  {name:<15} {}  w={}  {}  ({:.1}, {:.1}) -> ({:.1}, {:.1})",
            hex(segment.color()),
            segment.stroke_width(),
            if segment.dashed() { "dashed" } else { "solid " },
            start.x, start.y, end.x, end.y,
        );
    }

    println!();
    println!("  ── svg ──");
    println!("{}", svg(&border, rect));

    Ok(())
}

/// Two rounded corners, four colored edges, top and bottom dashed.
fn sample_border() -> Border {
    let corners = CornerSet::none()
        .with_corner(
            Corner::TopLeading,
            CornerPatch::new().radius(20.0).color(Color::RED).stroke_width(LINE_WIDTH),
        )
        .with_corner(
            Corner::BottomTrailing,
            CornerPatch::new().radius(20.0).color(Color::GREEN).stroke_width(LINE_WIDTH),
        );

    let edges = EdgeSet::all(EdgePatch::new().stroke_width(LINE_WIDTH))
        .with_edge(Edge::Top, EdgePatch::new().color(Color::ORANGE).dashed(true))
        .with_edge(Edge::Leading, EdgePatch::new().color(Color::PURPLE))
        .with_edge(Edge::Trailing, EdgePatch::new().color(Color::YELLOW))
        .with_edge(Edge::Bottom, EdgePatch::new().color(Color::BLUE).dashed(true));

    Border::new(corners, edges)
}

fn describe(op: &PathOp) -> String {
    match op {
        PathOp::MoveTo(p) => format!("move  ({:.1}, {:.1})", p.x, p.y),
        PathOp::LineTo(p) => format!("line  ({:.1}, {:.1})", p.x, p.y),
        PathOp::Arc(a) => format!(
            "arc   c=({:.1}, {:.1}) r={:.1} start={:.0}° sweep={:.0}°",
            a.center.x,
            a.center.y,
            a.radius,
            a.start_angle.to_degrees(),
            a.sweep_angle.to_degrees(),
        ),
        PathOp::Close => "close".to_string(),
    }
}

fn hex(color: Color) -> String {
    let [r, g, b, _] = color.to_srgb_u8();
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Outline as a clip path with a light fill, segments stroked on top of it.
fn svg(border: &Border, rect: Rect) -> String {
    let pad = LINE_WIDTH * 2.0;
    let mut out = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{} {} {} {}\">\n",
        rect.min_x() - pad,
        rect.min_y() - pad,
        rect.width() + pad * 2.0,
        rect.height() + pad * 2.0,
    );
    out += &format!(
        "  <clipPath id=\"outline\"><path d=\"{}\"/></clipPath>\n",
        border.to_bez_path(rect).to_svg()
    );
    out += &format!(
        "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"#e6e6e6\" clip-path=\"url(#outline)\"/>\n",
        rect.min_x(),
        rect.min_y(),
        rect.width(),
        rect.height(),
    );

    for segment in border.segments() {
        let style = segment.stroke_style();
        let dash = style
            .dash
            .iter()
            .map(|d| format!("{d:.2}"))
            .collect::<Vec<_>>()
            .join(" ");
        out += &format!(
            "  <path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" stroke-linecap=\"square\" stroke-linejoin=\"miter\"{}/>\n",
            segment.path(rect).to_bez_path().to_svg(),
            hex(segment.color()),
            style.width,
            if dash.is_empty() { String::new() } else { format!(" stroke-dasharray=\"{dash}\"") },
        );
    }

    out += "</svg>";
    out
}
