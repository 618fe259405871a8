//!
//! Vertex and polyline representations, and their textual rendering
//!

use serde::{Deserialize, Serialize};

/// The vertices of the demo quadrilateral, in drawing order.
pub const DEMO_POINTS: [[i32; 2]; 4] = [[910, 641], [206, 632], [696, 488], [458, 485]];

///
/// A single integer pixel coordinate. Serialises as a `[x, y]` pair.
///
/// # Fields:
/// - `x`: The column of the vertex, growing rightwards
/// - `y`: The row of the vertex, growing downwards
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct Vertex {
    pub x: i32,
    pub y: i32,
}

impl Vertex {
    pub fn new(x: i32, y: i32) -> Vertex {
        Vertex { x, y }
    }

    ///
    /// # Returns:
    /// - The vertex as an (x, y) float pair, exact for every `i32`
    ///
    pub fn as_f64(&self) -> (f64, f64) {
        (self.x as f64, self.y as f64)
    }
}

impl From<[i32; 2]> for Vertex {
    fn from(pair: [i32; 2]) -> Vertex {
        Vertex { x: pair[0], y: pair[1] }
    }
}

impl From<(i32, i32)> for Vertex {
    fn from((x, y): (i32, i32)) -> Vertex {
        Vertex { x, y }
    }
}

impl From<Vertex> for [i32; 2] {
    fn from(vertex: Vertex) -> [i32; 2] {
        [vertex.x, vertex.y]
    }
}

///
/// An ordered list of vertices joined by straight segments.
///
/// # Fields:
/// - `points`: The vertices, in drawing order
/// - `closed`: Whether the last vertex is joined back to the first
///
#[derive(Debug, Clone, PartialEq, getset::Getters)]
#[get = "pub"]
pub struct Polyline {
    points: Vec<Vertex>,
    closed: bool,
}

impl Polyline {
    ///
    /// Creates a new polyline from any sequence of vertex-like values.
    ///
    /// # Parameters:
    /// - `points`: The vertices, in drawing order
    /// - `closed`: Whether to join the last vertex back to the first
    ///
    /// # Returns:
    /// - A new `Polyline` instance
    ///
    pub fn new<P: Into<Vertex>>(points: impl IntoIterator<Item = P>, closed: bool) -> Polyline {
        Polyline { points: points.into_iter().map(Into::into).collect(), closed }
    }

    ///
    /// # Returns:
    /// - The closed demo quadrilateral
    ///
    pub fn demo() -> Polyline {
        Polyline::new(DEMO_POINTS, true)
    }

    ///
    /// Lists every segment of the polyline as a pair of endpoints. A closed polyline with three
    /// or more vertices gets a final segment back to its first vertex; with two vertices the
    /// closing segment would retrace the only segment, so it is skipped.
    ///
    /// # Returns:
    /// - The (start, end) vertex pairs, in drawing order
    ///
    pub fn segments(&self) -> Vec<(Vertex, Vertex)> {
        let mut segments: Vec<(Vertex, Vertex)> = self.points.windows(2).map(|w| (w[0], w[1])).collect();

        if self.closed && self.points.len() >= 3 {
            if let (Some(last), Some(first)) = (self.points.last(), self.points.first()) {
                segments.push((*last, *first));
            }
        }

        segments
    }
}

///
/// Renders a list of vertices as an `N x 2` integer matrix, with every element right-aligned to
/// the widest one:
///
/// ```text
/// [[910 641]
///  [206 632]]
/// ```
///
/// # Parameters:
/// - `points`: The vertices to render
///
/// # Returns:
/// - The rendered matrix, without a trailing newline
///
pub fn format_points(points: &[Vertex]) -> String {
    if points.is_empty() {
        return "[]".to_owned();
    }

    let width = points.iter()
        .flat_map(|v| [v.x, v.y])
        .map(|n| n.to_string().len())
        .max()
        .unwrap_or(1);

    let rows: Vec<String> = points.iter()
        .map(|v| format!("[{:>w$} {:>w$}]", v.x, v.y, w = width))
        .collect();

    format!("[{}]", rows.join("\n "))
}
