use ordered_float::OrderedFloat;
use smallvec::SmallVec;
use tracing::trace;

use crate::core::{ChartElement, PointerPosition};

/// Distance used for proximity comparisons, rounded to whole pixels.
#[must_use]
pub fn rounded_distance<E: ChartElement + ?Sized>(element: &E, position: PointerPosition) -> f64 {
    element.distance_to_center(position).round()
}

/// Orders candidates tied at the same rounded distance.
///
/// Smaller area wins, then the lower dataset index. Candidates equal on both
/// keep their scan order.
#[must_use]
pub fn tie_break_key<E: ChartElement + ?Sized>(element: &E) -> (OrderedFloat<f64>, usize) {
    (OrderedFloat(element.area()), element.dataset_index())
}

/// Picks the candidate closest to `position`.
///
/// Candidates with a NaN distance never win. Returns `None` for an empty
/// candidate set.
pub fn nearest_to<'a, E, I>(position: PointerPosition, candidates: I) -> Option<&'a E>
where
    E: ChartElement + 'a,
    I: IntoIterator<Item = &'a E>,
{
    let mut min_distance = f64::INFINITY;
    let mut tied: SmallVec<[&'a E; 4]> = SmallVec::new();

    for element in candidates {
        let distance = rounded_distance(element, position);
        if distance < min_distance {
            tied.clear();
            tied.push(element);
            min_distance = distance;
        } else if distance == min_distance {
            tied.push(element);
        }
    }

    if tied.len() > 1 {
        trace!(
            tied = tied.len(),
            distance = min_distance,
            "break nearest tie by area"
        );
    }

    tied.into_iter().min_by_key(|element| tie_break_key(*element))
}
