//! Schematic drawing.
//!
//! Drawing is split in two steps: [`schematic`] turns a circuit and its
//! latest reading into a list of [`DrawPrimitive`]s at fixed coordinates, and
//! a [`Renderer`] consumes that list. The layout is constant per topology and
//! side; only the voltage and ammeter annotations change between frames.
//!
//! Coordinates are in pixels on a 400 × 200 canvas, y pointing down.

use std::fmt::Write as _;

use crate::circuit::{CircuitSide, NetworkConfig, NetworkTopology};
use crate::components::{resistors, Resistor};

/// Canvas width in pixels.
pub const CANVAS_WIDTH: f64 = 400.0;

/// Canvas height in pixels.
pub const CANVAS_HEIGHT: f64 = 200.0;

const CENTER_Y: f64 = 100.0;
const TOP_RAIL: f64 = CENTER_Y - 40.0;
const BOTTOM_RAIL: f64 = CENTER_Y + 40.0;
const AMMETER_RADIUS: f64 = 15.0;

/// A point on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Fill or text color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    /// Voltage sources
    Red,
}

impl Color {
    /// CSS color string.
    pub fn css(&self) -> &'static str {
        match self {
            Color::Black => "#000",
            Color::Red => "#ff0000",
        }
    }
}

/// One drawing operation. Lines and circles are stroked in black.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawPrimitive {
    Line { from: Point, to: Point },
    FilledRect { origin: Point, width: f64, height: f64, color: Color },
    Circle { center: Point, radius: f64 },
    Text { at: Point, text: String, color: Color },
}

impl DrawPrimitive {
    fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        DrawPrimitive::Line {
            from: Point::new(x1, y1),
            to: Point::new(x2, y2),
        }
    }

    fn text(x: f64, y: f64, text: impl Into<String>) -> Self {
        DrawPrimitive::Text {
            at: Point::new(x, y),
            text: text.into(),
            color: Color::Black,
        }
    }

    /// The label of a text primitive.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DrawPrimitive::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// Build the schematic for one circuit.
///
/// `practical_current_ma` annotates the ammeter; `volts` annotates the source.
pub fn schematic(
    config: &NetworkConfig,
    side: CircuitSide,
    volts: f64,
    practical_current_ma: f64,
) -> Vec<DrawPrimitive> {
    let labels: Vec<String> = resistors(config).iter().map(Resistor::label).collect();
    match config.topology() {
        NetworkTopology::Bridge => bridge(&labels, side, volts, practical_current_ma),
        NetworkTopology::Ladder => ladder(&labels, side, volts, practical_current_ma),
    }
}

fn ammeter(x: f64, y: f64, current_ma: f64, out: &mut Vec<DrawPrimitive>) {
    out.push(DrawPrimitive::Circle {
        center: Point::new(x, y),
        radius: AMMETER_RADIUS,
    });
    out.push(DrawPrimitive::text(x - 5.0, y + 25.0, format!("{:.1}mA", current_ma)));
}

fn source(x: f64, volts: f64, out: &mut Vec<DrawPrimitive>) {
    out.push(DrawPrimitive::FilledRect {
        origin: Point::new(x, CENTER_Y - 20.0),
        width: 20.0,
        height: 40.0,
        color: Color::Red,
    });
    out.push(DrawPrimitive::text(x - 10.0, CENTER_Y + 30.0, format!("+{:.1}V-", volts)));
}

/// Three vertical legs between two rails. Circuit 1 drives the left leg (R1)
/// and measures the middle (R2); circuit 2 is its mirror image with the
/// source on the right leg (R2) and the ammeter in the middle (R1).
fn bridge(labels: &[String], side: CircuitSide, volts: f64, current_ma: f64) -> Vec<DrawPrimitive> {
    const LEGS_X: [f64; 3] = [50.0, 175.0, 300.0];

    // Resistor index drawn on each leg, the ammeter leg and the source position
    let (order, source_x) = match side {
        CircuitSide::First => ([0, 1, 2], 20.0),
        CircuitSide::Second => ([2, 0, 1], 360.0),
    };
    let ammeter_leg = 1;

    let mut out = vec![
        DrawPrimitive::line(50.0, TOP_RAIL, 350.0, TOP_RAIL),
        DrawPrimitive::line(50.0, BOTTOM_RAIL, 350.0, BOTTOM_RAIL),
    ];

    for (leg, (&x, &index)) in LEGS_X.iter().zip(order.iter()).enumerate() {
        out.push(DrawPrimitive::line(x, TOP_RAIL, x, BOTTOM_RAIL));
        let mut label = format!("R{} {}", index + 1, labels[index]);
        if leg == ammeter_leg {
            label.push_str(&format!(" (I{})", side.letter()));
        }
        out.push(DrawPrimitive::text(x - 15.0, CENTER_Y - 20.0, label));
        if leg == ammeter_leg {
            ammeter(x, CENTER_Y, current_ma, &mut out);
        }
    }

    source(source_x, volts, &mut out);
    out
}

/// Source and R5 on the top rail feeding two vertical series pairs. The
/// ammeter sits next to the source and reads the total current. Both
/// circuits share the layout.
fn ladder(labels: &[String], side: CircuitSide, volts: f64, current_ma: f64) -> Vec<DrawPrimitive> {
    let mut out = vec![
        // Source leg
        DrawPrimitive::line(50.0, TOP_RAIL, 50.0, BOTTOM_RAIL),
        // Top rail through R5
        DrawPrimitive::line(50.0, TOP_RAIL, 300.0, TOP_RAIL),
        DrawPrimitive::text(130.0, TOP_RAIL - 8.0, format!("R5 {}", labels[4])),
        DrawPrimitive::line(50.0, BOTTOM_RAIL, 300.0, BOTTOM_RAIL),
    ];

    // (R1 + R2) on the first branch, (R3 + R4) on the second
    for (x, upper, lower) in [(200.0, 0, 1), (300.0, 2, 3)] {
        out.push(DrawPrimitive::line(x, TOP_RAIL, x, BOTTOM_RAIL));
        out.push(DrawPrimitive::text(x + 5.0, CENTER_Y - 15.0, format!("R{} {}", upper + 1, labels[upper])));
        out.push(DrawPrimitive::text(x + 5.0, CENTER_Y + 25.0, format!("R{} {}", lower + 1, labels[lower])));
    }

    out.push(DrawPrimitive::text(75.0, TOP_RAIL - 20.0, format!("I{}", side.letter())));
    ammeter(90.0, TOP_RAIL, current_ma, &mut out);
    source(20.0, volts, &mut out);
    out
}

/// A drawing backend.
pub trait Renderer {
    /// Erase the previous frame.
    fn clear(&mut self);

    /// Draw one primitive.
    fn draw(&mut self, primitive: &DrawPrimitive);
}

/// Clear the renderer and draw every primitive in order.
pub fn render(renderer: &mut dyn Renderer, primitives: &[DrawPrimitive]) {
    renderer.clear();
    for primitive in primitives {
        renderer.draw(primitive);
    }
}

/// Renders primitives into an SVG document.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    width: f64,
    height: f64,
    body: String,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new(CANVAS_WIDTH, CANVAS_HEIGHT)
    }
}

impl SvgRenderer {
    /// Create a renderer for a canvas of the given size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            body: String::new(),
        }
    }

    /// The complete SVG document for everything drawn since the last clear.
    pub fn finish(&self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body
        )
    }
}

impl Renderer for SvgRenderer {
    fn clear(&mut self) {
        self.body.clear();
    }

    fn draw(&mut self, primitive: &DrawPrimitive) {
        // Writing to a String cannot fail
        let _ = match primitive {
            DrawPrimitive::Line { from, to } => writeln!(
                self.body,
                "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"#000\" stroke-width=\"2\"/>",
                from.x, from.y, to.x, to.y
            ),
            DrawPrimitive::FilledRect { origin, width, height, color } => writeln!(
                self.body,
                "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
                origin.x,
                origin.y,
                width,
                height,
                color.css()
            ),
            DrawPrimitive::Circle { center, radius } => writeln!(
                self.body,
                "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"none\" stroke=\"#000\" stroke-width=\"2\"/>",
                center.x, center.y, radius
            ),
            DrawPrimitive::Text { at, text, color } => writeln!(
                self.body,
                "  <text x=\"{}\" y=\"{}\" fill=\"{}\" font-family=\"sans-serif\" font-size=\"10\">{}</text>",
                at.x,
                at.y,
                color.css(),
                escape_xml(text)
            ),
        };
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
