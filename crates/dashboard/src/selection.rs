use core_types::YearRange;

/// Seasons used when the dataset is empty and no bounds can be derived.
pub const FALLBACK_YEARS: YearRange = YearRange { from: 1950, to: 2024 };

/// The year slider state. Missing bounds fall back to the dashboard default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct YearSelection {
    pub from: Option<i32>,
    pub to: Option<i32>,
}

impl YearSelection {
    pub fn new(from: Option<i32>, to: Option<i32>) -> Self {
        Self { from, to }
    }

    /// Parses raw query parameters. Anything that is not an integer is
    /// treated as absent.
    pub fn from_params(from: Option<&str>, to: Option<&str>) -> Self {
        let parse = |raw: Option<&str>| raw.and_then(|v| v.trim().parse::<i32>().ok());
        Self {
            from: parse(from),
            to: parse(to),
        }
    }

    /// Fills the missing bounds from `default`.
    pub fn resolve(&self, default: YearRange) -> YearRange {
        YearRange::new(
            self.from.unwrap_or(default.from),
            self.to.unwrap_or(default.to),
        )
    }
}

/// Which drivers, constructors or circuit a tab should plot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EntitySelection {
    /// The user has not touched the dropdown; the configured defaults apply.
    #[default]
    Default,
    /// Explicit names. An empty list means the dropdown was cleared.
    Names(Vec<String>),
}

impl EntitySelection {
    /// Parses a comma-separated multi-select parameter.
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            None => EntitySelection::Default,
            Some(raw) => EntitySelection::Names(
                raw.split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .collect(),
            ),
        }
    }

    /// Parses a single-select parameter. Commas are kept as part of the name.
    pub fn single(param: Option<&str>) -> Self {
        match param.map(str::trim) {
            None => EntitySelection::Default,
            Some("") => EntitySelection::Names(Vec::new()),
            Some(name) => EntitySelection::Names(vec![name.to_string()]),
        }
    }

    pub fn names<'a>(&'a self, defaults: &'a [String]) -> &'a [String] {
        match self {
            EntitySelection::Default => defaults,
            EntitySelection::Names(names) => names,
        }
    }
}
