use analytics::{Ranked, Share};
use serde::Serialize;

/// F1 red, used for wins and race counts.
pub const RED: &str = "#E10600";
/// Podium teal, used for podiums and nationality breakdowns.
pub const TEAL: &str = "#00D2BE";
/// Blue, used for pole positions and circuits.
pub const BLUE: &str = "#007BFF";

/// A chart-ready figure, independent of any plotting library.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Chart {
    Bar(BarChart),
    Line(LineChart),
    Pie(PieChart),
    /// Placeholder shown instead of a figure when there is nothing to plot.
    Empty(EmptyChart),
}

impl Chart {
    pub fn empty(title: impl Into<String>, message: impl Into<String>) -> Self {
        Chart::Empty(EmptyChart {
            title: title.into(),
            message: message.into(),
        })
    }

    pub fn title(&self) -> &str {
        match self {
            Chart::Bar(c) => &c.title,
            Chart::Line(c) => &c.title,
            Chart::Pie(c) => &c.title,
            Chart::Empty(c) => &c.title,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Chart::Empty(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmptyChart {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// A bar chart. Bars are listed in ranking order, best first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: String,
    pub orientation: Orientation,
    pub category_axis: String,
    pub value_axis: String,
    pub color: &'static str,
    pub bars: Vec<Bar>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

impl BarChart {
    pub fn horizontal(title: impl Into<String>, category_axis: &str, value_axis: &str) -> Self {
        Self {
            title: title.into(),
            orientation: Orientation::Horizontal,
            category_axis: category_axis.to_string(),
            value_axis: value_axis.to_string(),
            color: RED,
            bars: Vec::new(),
        }
    }

    pub fn vertical(title: impl Into<String>, category_axis: &str, value_axis: &str) -> Self {
        Self {
            orientation: Orientation::Vertical,
            ..Self::horizontal(title, category_axis, value_axis)
        }
    }

    pub fn color(mut self, color: &'static str) -> Self {
        self.color = color;
        self
    }

    pub fn ranking<K>(mut self, ranking: Vec<Ranked<K, u32>>) -> Self {
        self.bars = ranking
            .into_iter()
            .map(|entry| Bar {
                label: entry.label,
                value: f64::from(entry.value),
            })
            .collect();
        self
    }

    pub fn bars(mut self, bars: Vec<Bar>) -> Self {
        self.bars = bars;
        self
    }

    /// Wraps the chart, or an empty placeholder carrying `message` if there are no bars.
    pub fn or_empty(self, message: &str) -> Chart {
        if self.bars.is_empty() {
            Chart::empty(self.title, message)
        } else {
            Chart::Bar(self)
        }
    }
}

/// A multi-series line chart over seasons.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    pub title: String,
    pub value_axis: String,
    pub series: Vec<LineSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSeries {
    pub name: String,
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub year: i32,
    pub value: f64,
}

impl LineChart {
    pub fn new(title: impl Into<String>, value_axis: &str) -> Self {
        Self {
            title: title.into(),
            value_axis: value_axis.to_string(),
            series: Vec::new(),
        }
    }

    pub fn or_empty(self, message: &str) -> Chart {
        if self.series.iter().all(|s| s.points.is_empty()) {
            Chart::empty(self.title, message)
        } else {
            Chart::Line(self)
        }
    }
}

/// A pie chart with precomputed percentages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<Share>,
}

impl PieChart {
    pub fn or_empty(self, message: &str) -> Chart {
        if self.slices.is_empty() {
            Chart::empty(self.title, message)
        } else {
            Chart::Pie(self)
        }
    }
}
