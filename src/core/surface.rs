use serde::{Deserialize, Serialize};

use crate::core::types::PointerPosition;
use crate::error::{ChartError, ChartResult};

/// Pointer event in client (page) coordinates, before normalization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawPointerEvent {
    pub client_x: f64,
    pub client_y: f64,
}

impl RawPointerEvent {
    #[must_use]
    pub fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SurfacePadding {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl SurfacePadding {
    #[must_use]
    pub fn uniform(value: f64) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }
}

/// Placement of the chart canvas inside the host window.
///
/// `left`/`top`/`width`/`height` describe the element's bounding box in client
/// coordinates, padding included. `chart_width`/`chart_height` are the logical
/// pixel dimensions the layout pass positioned elements in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartSurface {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub padding: SurfacePadding,
    pub chart_width: f64,
    pub chart_height: f64,
}

impl ChartSurface {
    /// Surface anchored at the client origin whose box matches the chart size.
    pub fn new(width: f64, height: f64) -> ChartResult<Self> {
        validate_extent(width, height)?;
        Ok(Self {
            left: 0.0,
            top: 0.0,
            width,
            height,
            padding: SurfacePadding::default(),
            chart_width: width,
            chart_height: height,
        })
    }

    #[must_use]
    pub fn with_origin(mut self, left: f64, top: f64) -> Self {
        self.left = left;
        self.top = top;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: SurfacePadding) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the logical chart size when it differs from the on-screen box,
    /// e.g. when the canvas is stretched by CSS.
    pub fn with_chart_size(mut self, chart_width: f64, chart_height: f64) -> ChartResult<Self> {
        validate_extent(chart_width, chart_height)?;
        self.chart_width = chart_width;
        self.chart_height = chart_height;
        Ok(self)
    }

    /// Maps a client-space event into chart pixels, snapped to whole pixels.
    #[must_use]
    pub fn relative_position(&self, event: &RawPointerEvent) -> PointerPosition {
        let content_width = self.width - self.padding.left - self.padding.right;
        let content_height = self.height - self.padding.top - self.padding.bottom;
        let x = scale_axis(
            event.client_x - self.left - self.padding.left,
            content_width,
            self.chart_width,
        );
        let y = scale_axis(
            event.client_y - self.top - self.padding.top,
            content_height,
            self.chart_height,
        );
        PointerPosition::new(round_half_up(x), round_half_up(y))
    }
}

fn validate_extent(width: f64, height: f64) -> ChartResult<()> {
    if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "surface extent must be finite and > 0: width={width}, height={height}"
        )));
    }
    Ok(())
}

fn scale_axis(offset: f64, content_extent: f64, chart_extent: f64) -> f64 {
    if content_extent > 0.0 && content_extent.is_finite() {
        offset / content_extent * chart_extent
    } else {
        offset
    }
}

fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
