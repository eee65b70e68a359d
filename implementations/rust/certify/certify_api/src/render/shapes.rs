//! Decorative bars drawn along the top and bottom edges of a certificate.
//!
//! Coordinates are absolute, in the 800x570 certificate canvas. Every bar is
//! made of a wide layer in the primary color with a thinner accent layer
//! drawn over it.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TopBar {
    Angled,
    Wave,
    Ribbon,
    Chevron,
    Arc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BottomBar {
    Angled,
    Wave,
    Ribbon,
    Chevron,
    Arc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Points of an SVG `<polygon>`
    Polygon(&'static str),
    /// Data of an SVG `<path>`
    Path(&'static str),
    /// Full-width rectangle
    Band { y: u32, height: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    Primary,
    Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layer {
    pub shape: Shape,
    pub fill: Fill,
}

const fn primary(shape: Shape) -> Layer {
    Layer {
        shape,
        fill: Fill::Primary,
    }
}

const fn accent(shape: Shape) -> Layer {
    Layer {
        shape,
        fill: Fill::Accent,
    }
}

impl TopBar {
    pub fn name(&self) -> &'static str {
        match self {
            TopBar::Angled => "angled",
            TopBar::Wave => "wave",
            TopBar::Ribbon => "ribbon",
            TopBar::Chevron => "chevron",
            TopBar::Arc => "arc",
        }
    }

    /// Layers in drawing order
    pub fn layers(&self) -> [Layer; 2] {
        match self {
            TopBar::Angled => [
                primary(Shape::Polygon("0,0 800,0 800,48 0,80")),
                accent(Shape::Polygon("0,0 800,0 800,32 0,19")),
            ],
            TopBar::Wave => [
                primary(Shape::Path("M0,0 H800 V56 C600,96 200,24 0,72 Z")),
                accent(Shape::Path("M0,0 H800 V24 C600,48 200,8 0,32 Z")),
            ],
            TopBar::Ribbon => [
                primary(Shape::Band { y: 0, height: 64 }),
                accent(Shape::Band { y: 64, height: 10 }),
            ],
            TopBar::Chevron => [
                primary(Shape::Polygon("0,0 800,0 800,56 400,88 0,56")),
                accent(Shape::Polygon("0,0 800,0 800,24 400,44 0,24")),
            ],
            TopBar::Arc => [
                primary(Shape::Path("M0,0 H800 V40 Q400,120 0,40 Z")),
                accent(Shape::Path("M0,0 H800 V16 Q400,64 0,16 Z")),
            ],
        }
    }
}

impl BottomBar {
    pub fn name(&self) -> &'static str {
        match self {
            BottomBar::Angled => "angled",
            BottomBar::Wave => "wave",
            BottomBar::Ribbon => "ribbon",
            BottomBar::Chevron => "chevron",
            BottomBar::Arc => "arc",
        }
    }

    /// Layers in drawing order
    pub fn layers(&self) -> [Layer; 2] {
        match self {
            BottomBar::Angled => [
                primary(Shape::Polygon("0,532 800,506 800,570 0,570")),
                accent(Shape::Polygon("0,546 800,556 800,570 0,570")),
            ],
            BottomBar::Wave => [
                primary(Shape::Path("M0,570 H800 V522 C600,482 200,554 0,506 Z")),
                accent(Shape::Path("M0,570 H800 V550 C600,530 200,566 0,540 Z")),
            ],
            BottomBar::Ribbon => [
                primary(Shape::Band { y: 514, height: 56 }),
                accent(Shape::Band { y: 504, height: 10 }),
            ],
            BottomBar::Chevron => [
                primary(Shape::Polygon("0,570 800,570 800,518 400,490 0,518")),
                accent(Shape::Polygon("0,570 800,570 800,548 400,530 0,548")),
            ],
            BottomBar::Arc => [
                primary(Shape::Path("M0,570 H800 V530 Q400,458 0,530 Z")),
                accent(Shape::Path("M0,570 H800 V554 Q400,510 0,554 Z")),
            ],
        }
    }
}

impl Layer {
    /// SVG element for this layer
    pub fn to_svg(&self, primary: &str, accent: &str) -> String {
        let fill = match self.fill {
            Fill::Primary => primary,
            Fill::Accent => accent,
        };
        match self.shape {
            Shape::Polygon(points) => format!("<polygon points=\"{points}\" fill=\"{fill}\"/>"),
            Shape::Path(data) => format!("<path d=\"{data}\" fill=\"{fill}\"/>"),
            Shape::Band { y, height } => format!(
                "<rect x=\"0\" y=\"{y}\" width=\"{}\" height=\"{height}\" fill=\"{fill}\"/>",
                super::svg::WIDTH
            ),
        }
    }
}
