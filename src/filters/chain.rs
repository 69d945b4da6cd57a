//! Filter chain state and canonical-order application.

use image::DynamicImage;

use super::ops;

/// Declared range, slider step, and default for a filter parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub default: f32,
}

impl ParamSpec {
    /// Clamp a value into this parameter's declared range.
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }
}

const THRESHOLD_SPEC: ParamSpec = ParamSpec {
    min: 0.0,
    max: 255.0,
    step: 1.0,
    default: 128.0,
};

const RADIUS_SPEC: ParamSpec = ParamSpec {
    min: 0.0,
    max: 10.0,
    step: 0.1,
    default: 2.0,
};

const FACTOR_SPEC: ParamSpec = ParamSpec {
    min: 0.1,
    max: 3.0,
    step: 0.1,
    default: 1.0,
};

/// One of the five named filters, in canonical application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Grayscale,
    Invert,
    Blur,
    Brightness,
    Contrast,
}

impl FilterKind {
    /// All filters in canonical application order.
    pub const ALL: [FilterKind; 5] = [
        FilterKind::Grayscale,
        FilterKind::Invert,
        FilterKind::Blur,
        FilterKind::Brightness,
        FilterKind::Contrast,
    ];

    /// Human-readable label for the filter toggle.
    pub fn label(&self) -> &'static str {
        match self {
            FilterKind::Grayscale => "Grayscale",
            FilterKind::Invert => "Invert",
            FilterKind::Blur => "Blur",
            FilterKind::Brightness => "Brightness",
            FilterKind::Contrast => "Contrast",
        }
    }

    /// Name of this filter's parameter, if it has one.
    pub fn param_name(&self) -> Option<&'static str> {
        match self {
            FilterKind::Grayscale => None,
            FilterKind::Invert => Some("threshold"),
            FilterKind::Blur => Some("radius"),
            FilterKind::Brightness | FilterKind::Contrast => Some("factor"),
        }
    }

    /// Declared range/step/default for this filter's parameter, if any.
    pub fn param_spec(&self) -> Option<ParamSpec> {
        match self {
            FilterKind::Grayscale => None,
            FilterKind::Invert => Some(THRESHOLD_SPEC),
            FilterKind::Blur => Some(RADIUS_SPEC),
            FilterKind::Brightness | FilterKind::Contrast => Some(FACTOR_SPEC),
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// The set of all five filter descriptors: per-filter enabled flags and
/// parameter values.
///
/// Flags and values are independently mutable at any time, but the
/// application order when rendering is always Grayscale -> Invert ->
/// Blur -> Brightness -> Contrast, irrespective of toggle order. This
/// keeps the output reproducible from (source, enabled set, parameters)
/// alone, independent of interaction history.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterChain {
    enabled: [bool; 5],
    params: [f32; 5],
}

impl Default for FilterChain {
    fn default() -> Self {
        let mut params = [0.0; 5];
        for kind in FilterKind::ALL {
            if let Some(spec) = kind.param_spec() {
                params[kind.index()] = spec.default;
            }
        }
        Self {
            enabled: [false; 5],
            params,
        }
    }
}

impl FilterChain {
    /// A chain with every filter disabled and parameters at defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a filter is currently enabled.
    pub fn is_enabled(&self, kind: FilterKind) -> bool {
        self.enabled[kind.index()]
    }

    /// Enable or disable a filter.
    pub fn set_enabled(&mut self, kind: FilterKind, on: bool) {
        self.enabled[kind.index()] = on;
    }

    /// Current parameter value for a filter (0.0 for unparameterized).
    pub fn param_value(&self, kind: FilterKind) -> f32 {
        self.params[kind.index()]
    }

    /// Set a filter's parameter value, clamping into its declared range.
    ///
    /// A no-op for filters without a parameter.
    pub fn set_param(&mut self, kind: FilterKind, value: f32) {
        if let Some(spec) = kind.param_spec() {
            self.params[kind.index()] = spec.clamp(value);
        }
    }

    /// Apply the enabled subset of filters to a raster, in canonical
    /// order. Disabled filters are skipped entirely; a chain with nothing
    /// enabled returns an unmodified copy.
    ///
    /// Blur is additionally skipped at radius 0 so that boundary value is
    /// a guaranteed identity.
    pub fn apply(&self, raster: &DynamicImage) -> DynamicImage {
        let mut img = raster.clone();

        if self.is_enabled(FilterKind::Grayscale) {
            img = ops::grayscale(&img);
        }
        if self.is_enabled(FilterKind::Invert) {
            img = ops::invert_threshold(&img, self.param_value(FilterKind::Invert));
        }
        if self.is_enabled(FilterKind::Blur) {
            let radius = self.param_value(FilterKind::Blur);
            if radius > 0.0 {
                img = ops::blur(&img, radius);
            }
        }
        if self.is_enabled(FilterKind::Brightness) {
            img = ops::brightness(&img, self.param_value(FilterKind::Brightness));
        }
        if self.is_enabled(FilterKind::Contrast) {
            img = ops::contrast(&img, self.param_value(FilterKind::Contrast));
        }

        img
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let chain = FilterChain::new();
        for kind in FilterKind::ALL {
            assert!(!chain.is_enabled(kind));
        }
        assert_eq!(chain.param_value(FilterKind::Invert), 128.0);
        assert_eq!(chain.param_value(FilterKind::Blur), 2.0);
        assert_eq!(chain.param_value(FilterKind::Brightness), 1.0);
        assert_eq!(chain.param_value(FilterKind::Contrast), 1.0);
    }

    #[test]
    fn test_set_param_clamps() {
        let mut chain = FilterChain::new();
        chain.set_param(FilterKind::Invert, 400.0);
        assert_eq!(chain.param_value(FilterKind::Invert), 255.0);
        chain.set_param(FilterKind::Invert, -12.0);
        assert_eq!(chain.param_value(FilterKind::Invert), 0.0);
        chain.set_param(FilterKind::Brightness, 0.0);
        assert_eq!(chain.param_value(FilterKind::Brightness), 0.1);
    }

    #[test]
    fn test_set_param_unparameterized_is_noop() {
        let mut chain = FilterChain::new();
        chain.set_param(FilterKind::Grayscale, 42.0);
        assert_eq!(chain.param_value(FilterKind::Grayscale), 0.0);
    }

    #[test]
    fn test_param_specs() {
        assert!(FilterKind::Grayscale.param_spec().is_none());
        let spec = FilterKind::Blur.param_spec().unwrap();
        assert_eq!(spec.min, 0.0);
        assert_eq!(spec.max, 10.0);
        assert_eq!(spec.step, 0.1);
        assert_eq!(spec.default, 2.0);
    }

    #[test]
    fn test_labels_and_param_names() {
        assert_eq!(FilterKind::Grayscale.label(), "Grayscale");
        assert_eq!(FilterKind::Grayscale.param_name(), None);
        assert_eq!(FilterKind::Invert.param_name(), Some("threshold"));
        assert_eq!(FilterKind::Blur.param_name(), Some("radius"));
        assert_eq!(FilterKind::Brightness.param_name(), Some("factor"));
        assert_eq!(FilterKind::Contrast.param_name(), Some("factor"));
    }
}
