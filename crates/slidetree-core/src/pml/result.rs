use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Converted document: one entry per slide plus the slide size in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Presentation {
    pub slides: Vec<Slide>,
    pub size: SlideSize,
}

impl Presentation {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Elements per slide, nested group/diagram members included.
    pub fn element_counts(&self) -> Vec<usize> {
        self.slides.iter().map(Slide::element_count).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlideSize {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub fill: SlideFill,
    pub elements: Vec<Element>,
    pub note: String,
}

impl Slide {
    pub fn element_count(&self) -> usize {
        self.elements.iter().map(|e| e.descendants().len()).sum()
    }
}

/// Slide background: `{"type": "color", "value": "#RRGGBB"}` or an image source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum SlideFill {
    Color(String),
    Image(String),
}

impl Default for SlideFill {
    fn default() -> Self {
        Self::Color(String::new())
    }
}

/// Geometry and paint order shared by every element. Undefined geometry is
/// left out of the JSON rather than reported as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    pub rotate: f64,
    pub order: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Border {
    pub border_color: String,
    pub border_width: f64,
    pub border_type: String,
    pub border_stroke_dasharray: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub h: f64,
    pub v: f64,
    pub blur: f64,
    pub color: String,
}

/// Fields common to the shape and text outputs of the shape generator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeBody {
    #[serde(flatten)]
    pub frame: Frame,
    #[serde(flatten)]
    pub border: Border,
    pub fill_color: String,
    pub content: String,
    pub is_flip_v: bool,
    pub is_flip_h: bool,
    pub v_align: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeElement {
    #[serde(flatten)]
    pub body: ShapeBody,
    pub shap_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextElement {
    #[serde(flatten)]
    pub body: ShapeBody,
    pub is_vertical: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageElement {
    #[serde(flatten)]
    pub frame: Frame,
    pub src: String,
    pub is_flip_v: bool,
    pub is_flip_h: bool,
}

/// Linked video carries `src`; embedded video carries `blob`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoElement {
    #[serde(flatten)]
    pub frame: Frame,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blob: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioElement {
    #[serde(flatten)]
    pub frame: Frame,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blob: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupElement {
    #[serde(flatten)]
    pub frame: Frame,
    pub elements: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableElement {
    #[serde(flatten)]
    pub frame: Frame,
    pub data: Vec<Vec<TableCell>>,
    #[serde(flatten, default)]
    pub border: Option<Border>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCell {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_span: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub col_span: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub v_merge: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h_merge: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartElement {
    #[serde(flatten)]
    pub frame: Frame,
    #[serde(flatten)]
    pub chart: ChartData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub chart_type: String,
    pub data: Vec<ChartSeries>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bar_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grouping: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hole_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub key: String,
    pub values: Vec<ChartPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: String,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramElement {
    #[serde(flatten)]
    pub frame: Frame,
    pub elements: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MathElement {
    #[serde(flatten)]
    pub frame: Frame,
    pub latex: String,
}

/// One resolved visual element, tagged by `"type"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Element {
    Shape(ShapeElement),
    Text(TextElement),
    Image(ImageElement),
    Video(VideoElement),
    Audio(AudioElement),
    Group(GroupElement),
    Table(TableElement),
    Chart(ChartElement),
    Diagram(DiagramElement),
    Math(MathElement),
}

impl Element {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Shape(_) => "shape",
            Self::Text(_) => "text",
            Self::Image(_) => "image",
            Self::Video(_) => "video",
            Self::Audio(_) => "audio",
            Self::Group(_) => "group",
            Self::Table(_) => "table",
            Self::Chart(_) => "chart",
            Self::Diagram(_) => "diagram",
            Self::Math(_) => "math",
        }
    }

    pub fn frame(&self) -> &Frame {
        match self {
            Self::Shape(e) => &e.body.frame,
            Self::Text(e) => &e.body.frame,
            Self::Image(e) => &e.frame,
            Self::Video(e) => &e.frame,
            Self::Audio(e) => &e.frame,
            Self::Group(e) => &e.frame,
            Self::Table(e) => &e.frame,
            Self::Chart(e) => &e.frame,
            Self::Diagram(e) => &e.frame,
            Self::Math(e) => &e.frame,
        }
    }

    pub fn frame_mut(&mut self) -> &mut Frame {
        match self {
            Self::Shape(e) => &mut e.body.frame,
            Self::Text(e) => &mut e.body.frame,
            Self::Image(e) => &mut e.frame,
            Self::Video(e) => &mut e.frame,
            Self::Audio(e) => &mut e.frame,
            Self::Group(e) => &mut e.frame,
            Self::Table(e) => &mut e.frame,
            Self::Chart(e) => &mut e.frame,
            Self::Diagram(e) => &mut e.frame,
            Self::Math(e) => &mut e.frame,
        }
    }

    /// Nested members of a group or diagram.
    pub fn children(&self) -> &[Element] {
        match self {
            Self::Group(e) => &e.elements,
            Self::Diagram(e) => &e.elements,
            _ => &[],
        }
    }

    /// This element followed by every nested member, pre-order.
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = vec![self];
        for child in self.children() {
            out.extend(child.descendants());
        }
        out
    }
}
