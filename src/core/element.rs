use std::f64::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

use crate::core::types::PointerPosition;

pub const DEFAULT_POINT_RADIUS: f64 = 3.0;
pub const DEFAULT_POINT_HIT_RADIUS: f64 = 1.0;

/// Geometry and identity of one drawn datum, as seen by hit-testing.
pub trait ChartElement {
    /// Whether the pointer falls on the element.
    fn in_range(&self, x: f64, y: f64) -> bool;

    /// Whether the pointer falls within the element's category column.
    /// Implementations ignore `y` unless their column is not vertical.
    fn in_label_range(&self, x: f64, y: f64) -> bool;

    fn center(&self) -> PointerPosition;

    fn distance_to_center(&self, position: PointerPosition) -> f64 {
        self.center().distance_to(position)
    }

    fn area(&self) -> f64;

    /// Set for elements without a valid datum.
    fn is_skipped(&self) -> bool;

    fn dataset_index(&self) -> usize;

    /// X coordinate of the category column the element is drawn in.
    fn label_column_x(&self) -> f64 {
        self.center().x
    }
}

/// Circular marker of a line or scatter series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointElement {
    pub dataset_index: usize,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    /// Extra tolerance added to `radius` when hit-testing.
    pub hit_radius: f64,
    #[serde(default)]
    pub skip: bool,
}

impl PointElement {
    #[must_use]
    pub fn new(dataset_index: usize, x: f64, y: f64) -> Self {
        Self {
            dataset_index,
            x,
            y,
            radius: DEFAULT_POINT_RADIUS,
            hit_radius: DEFAULT_POINT_HIT_RADIUS,
            skip: false,
        }
    }

    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    #[must_use]
    pub fn with_hit_radius(mut self, hit_radius: f64) -> Self {
        self.hit_radius = hit_radius;
        self
    }

    #[must_use]
    pub fn with_skip(mut self, skip: bool) -> Self {
        self.skip = skip;
        self
    }

    fn reach(&self) -> f64 {
        self.radius + self.hit_radius
    }
}

impl ChartElement for PointElement {
    fn in_range(&self, x: f64, y: f64) -> bool {
        if self.skip {
            return false;
        }
        (x - self.x).powi(2) + (y - self.y).powi(2) < self.reach().powi(2)
    }

    fn in_label_range(&self, x: f64, _y: f64) -> bool {
        if self.skip {
            return false;
        }
        (x - self.x).powi(2) < self.reach().powi(2)
    }

    fn center(&self) -> PointerPosition {
        PointerPosition::new(self.x, self.y)
    }

    fn area(&self) -> f64 {
        PI * self.radius.powi(2)
    }

    fn is_skipped(&self) -> bool {
        self.skip
    }

    fn dataset_index(&self) -> usize {
        self.dataset_index
    }

    fn label_column_x(&self) -> f64 {
        self.x
    }
}

/// Vertical bar spanning from `base` to `y`, centered on `x`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarElement {
    pub dataset_index: usize,
    pub x: f64,
    pub y: f64,
    pub base: f64,
    pub width: f64,
    #[serde(default)]
    pub skip: bool,
}

impl BarElement {
    #[must_use]
    pub fn new(dataset_index: usize, x: f64, y: f64, base: f64, width: f64) -> Self {
        Self {
            dataset_index,
            x,
            y,
            base,
            width,
            skip: false,
        }
    }

    #[must_use]
    pub fn with_skip(mut self, skip: bool) -> Self {
        self.skip = skip;
        self
    }

    fn covers_x(&self, x: f64) -> bool {
        let half_width = self.width / 2.0;
        x >= self.x - half_width && x <= self.x + half_width
    }
}

impl ChartElement for BarElement {
    fn in_range(&self, x: f64, y: f64) -> bool {
        if self.skip {
            return false;
        }
        // Bars below the baseline have y greater than base in pixel space.
        let (top, bottom) = if self.y < self.base {
            (self.y, self.base)
        } else {
            (self.base, self.y)
        };
        self.covers_x(x) && y >= top && y <= bottom
    }

    fn in_label_range(&self, x: f64, _y: f64) -> bool {
        !self.skip && self.covers_x(x)
    }

    fn center(&self) -> PointerPosition {
        PointerPosition::new(self.x, (self.y + self.base) / 2.0)
    }

    fn area(&self) -> f64 {
        self.width * (self.y - self.base).abs()
    }

    fn is_skipped(&self) -> bool {
        self.skip
    }

    fn dataset_index(&self) -> usize {
        self.dataset_index
    }

    fn label_column_x(&self) -> f64 {
        self.x
    }
}

/// Pie or doughnut slice around (`x`, `y`).
///
/// Angles are radians measured clockwise from the positive x axis in screen
/// space, so a sweep starting at `-PI / 2` begins at twelve o'clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcElement {
    pub dataset_index: usize,
    pub x: f64,
    pub y: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    #[serde(default)]
    pub skip: bool,
}

impl ArcElement {
    #[must_use]
    pub fn new(
        dataset_index: usize,
        x: f64,
        y: f64,
        start_angle: f64,
        end_angle: f64,
        outer_radius: f64,
    ) -> Self {
        Self {
            dataset_index,
            x,
            y,
            start_angle,
            end_angle,
            inner_radius: 0.0,
            outer_radius,
            skip: false,
        }
    }

    #[must_use]
    pub fn with_inner_radius(mut self, inner_radius: f64) -> Self {
        self.inner_radius = inner_radius;
        self
    }

    #[must_use]
    pub fn with_skip(mut self, skip: bool) -> Self {
        self.skip = skip;
        self
    }

    /// End angle unwrapped so that it is never before the start angle.
    fn unwrapped_end_angle(&self) -> f64 {
        if self.end_angle < self.start_angle {
            self.start_angle + (self.end_angle - self.start_angle).rem_euclid(TAU)
        } else {
            self.end_angle
        }
    }
}

impl ChartElement for ArcElement {
    fn in_range(&self, x: f64, y: f64) -> bool {
        if self.skip
            || !self.start_angle.is_finite()
            || !self.end_angle.is_finite()
            || !x.is_finite()
            || !y.is_finite()
        {
            return false;
        }

        let dx = x - self.x;
        let dy = y - self.y;
        let distance = dx.hypot(dy);
        let end_angle = self.unwrapped_end_angle();
        let mut angle = dy.atan2(dx);
        if angle < self.start_angle || angle > end_angle {
            angle = self.start_angle + (angle - self.start_angle).rem_euclid(TAU);
        }

        let within_sweep = angle >= self.start_angle && angle <= end_angle;
        let within_radius = distance >= self.inner_radius && distance <= self.outer_radius;
        within_sweep && within_radius
    }

    fn in_label_range(&self, _x: f64, _y: f64) -> bool {
        false
    }

    fn center(&self) -> PointerPosition {
        let mid_angle = (self.start_angle + self.unwrapped_end_angle()) / 2.0;
        let mid_radius = (self.inner_radius + self.outer_radius) / 2.0;
        PointerPosition::new(
            self.x + mid_angle.cos() * mid_radius,
            self.y + mid_angle.sin() * mid_radius,
        )
    }

    fn area(&self) -> f64 {
        let sweep = self.unwrapped_end_angle() - self.start_angle;
        PI * (sweep / TAU) * (self.outer_radius.powi(2) - self.inner_radius.powi(2))
    }

    fn is_skipped(&self) -> bool {
        self.skip
    }

    fn dataset_index(&self) -> usize {
        self.dataset_index
    }

    fn label_column_x(&self) -> f64 {
        self.x
    }
}

/// Any of the bundled element kinds, for charts mixing series types.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnyElement {
    Point(PointElement),
    Bar(BarElement),
    Arc(ArcElement),
}

impl AnyElement {
    fn as_element(&self) -> &dyn ChartElement {
        match self {
            Self::Point(point) => point,
            Self::Bar(bar) => bar,
            Self::Arc(arc) => arc,
        }
    }
}

impl ChartElement for AnyElement {
    fn in_range(&self, x: f64, y: f64) -> bool {
        self.as_element().in_range(x, y)
    }

    fn in_label_range(&self, x: f64, y: f64) -> bool {
        self.as_element().in_label_range(x, y)
    }

    fn center(&self) -> PointerPosition {
        self.as_element().center()
    }

    fn distance_to_center(&self, position: PointerPosition) -> f64 {
        self.as_element().distance_to_center(position)
    }

    fn area(&self) -> f64 {
        self.as_element().area()
    }

    fn is_skipped(&self) -> bool {
        self.as_element().is_skipped()
    }

    fn dataset_index(&self) -> usize {
        self.as_element().dataset_index()
    }

    fn label_column_x(&self) -> f64 {
        self.as_element().label_column_x()
    }
}

impl From<PointElement> for AnyElement {
    fn from(value: PointElement) -> Self {
        Self::Point(value)
    }
}

impl From<BarElement> for AnyElement {
    fn from(value: BarElement) -> Self {
        Self::Bar(value)
    }
}

impl From<ArcElement> for AnyElement {
    fn from(value: ArcElement) -> Self {
        Self::Arc(value)
    }
}
