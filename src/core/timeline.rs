use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::warn;

use crate::core::types::{PlotArea, Point, Rect};

pub const ROW_HEIGHT: f64 = 30.0;
/// Vertical gap between a row's top edge and its bar.
pub const ROW_INSET: f64 = 5.0;
pub const BAR_HEIGHT: f64 = ROW_HEIGHT - 2.0 * ROW_INSET;
pub const BAR_CORNER_RADIUS: f64 = 3.0;
pub const MIN_BAR_WIDTH: f64 = 1.0;
/// Horizontal run of a dependency connector before it turns.
pub const CONNECTOR_STUB: f64 = 10.0;
pub const ARROW_SIZE: f64 = 6.0;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Start/end pair placed on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSpan {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Finish-to-start link between two task indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskDependency {
    pub from: usize,
    pub to: usize,
}

impl TaskDependency {
    #[must_use]
    pub const fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }
}

/// Linear mapping from calendar time to plot X.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timeline {
    pub min: NaiveDateTime,
    pub max: NaiveDateTime,
    origin_x: f64,
    width: f64,
    total_days: f64,
}

impl Timeline {
    /// Spans the earliest start to the latest end; `None` for no tasks.
    ///
    /// A zero-length span is widened by one day, backwards when the start
    /// sits at the end of the representable calendar.
    #[must_use]
    pub fn fit(spans: &[TimeSpan], plot: PlotArea) -> Option<Self> {
        let earliest = spans.iter().map(|span| span.start).min()?;
        let latest = spans.iter().map(|span| span.end).max()?;
        let (min, max) = if latest > earliest {
            (earliest, latest)
        } else if let Some(widened) = earliest.checked_add_signed(TimeDelta::days(1)) {
            (earliest, widened)
        } else {
            (earliest.checked_sub_signed(TimeDelta::days(1))?, earliest)
        };
        Some(Self {
            min,
            max,
            origin_x: plot.x,
            width: plot.width,
            total_days: days_between(min, max),
        })
    }

    #[must_use]
    pub fn total_days(&self) -> f64 {
        self.total_days
    }

    #[must_use]
    pub fn x_of(&self, at: NaiveDateTime) -> f64 {
        self.origin_x + days_between(self.min, at) / self.total_days * self.width
    }

    #[must_use]
    pub fn width_of(&self, span: TimeSpan) -> f64 {
        days_between(span.start, span.end) / self.total_days * self.width
    }

    /// Instant at fraction `t` of the span, rounded to the millisecond.
    #[must_use]
    pub fn at_fraction(&self, t: f64) -> NaiveDateTime {
        let millis = (self.total_days * t * MILLIS_PER_DAY).round() as i64;
        self.min + TimeDelta::milliseconds(millis)
    }
}

fn days_between(from: NaiveDateTime, to: NaiveDateTime) -> f64 {
    (to - from).num_milliseconds() as f64 / MILLIS_PER_DAY
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaskBar {
    pub task_index: usize,
    pub rect: Rect,
}

/// Three-segment orthogonal connector with an arrowhead into the target bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyConnector {
    pub dependency: TaskDependency,
    pub path: SmallVec<[Point; 4]>,
    pub arrow_head: [Point; 3],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeTick {
    pub at: NaiveDateTime,
    pub x: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TimelineLayout {
    pub bars: Vec<TaskBar>,
    pub connectors: Vec<DependencyConnector>,
    pub today_x: Option<f64>,
    pub ticks: Vec<TimeTick>,
}

/// Places one bar per task (rows in input order), routes dependencies and
/// positions the optional today marker and the time ticks.
///
/// Dependencies pointing at unknown task indices are skipped.
#[must_use]
pub fn layout_timeline(
    spans: &[TimeSpan],
    dependencies: &[TaskDependency],
    plot: PlotArea,
    today: Option<NaiveDate>,
    tick_count: usize,
) -> TimelineLayout {
    let Some(timeline) = Timeline::fit(spans, plot) else {
        return TimelineLayout::default();
    };
    if !plot.is_valid() {
        return TimelineLayout::default();
    }

    let bars = spans
        .iter()
        .enumerate()
        .map(|(task_index, span)| TaskBar {
            task_index,
            rect: Rect::new(
                timeline.x_of(span.start),
                plot.y + task_index as f64 * ROW_HEIGHT + ROW_INSET,
                timeline.width_of(*span).max(MIN_BAR_WIDTH),
                BAR_HEIGHT,
            ),
        })
        .collect::<Vec<_>>();

    let connectors = dependencies
        .iter()
        .filter_map(|dependency| {
            let (Some(from), Some(to)) = (bars.get(dependency.from), bars.get(dependency.to))
            else {
                warn!(
                    from = dependency.from,
                    to = dependency.to,
                    task_count = bars.len(),
                    "skipping dependency that references an unknown task"
                );
                return None;
            };
            Some(route_connector(*dependency, from.rect, to.rect))
        })
        .collect();

    let today_x = today.and_then(|today| {
        if today < timeline.min.date() || today > timeline.max.date() {
            return None;
        }
        let x = timeline.x_of(today.and_time(NaiveTime::MIN));
        Some(x.clamp(plot.x, plot.right()))
    });

    let ticks = match tick_count {
        0 => Vec::new(),
        1 => vec![TimeTick {
            at: timeline.min,
            x: plot.x,
        }],
        count => (0..count)
            .map(|index| {
                let t = index as f64 / (count - 1) as f64;
                TimeTick {
                    at: timeline.at_fraction(t),
                    x: plot.x + plot.width * t,
                }
            })
            .collect(),
    };

    TimelineLayout {
        bars,
        connectors,
        today_x,
        ticks,
    }
}

#[must_use]
pub fn route_connector(dependency: TaskDependency, from: Rect, to: Rect) -> DependencyConnector {
    let start = Point::new(from.right(), from.y + from.height / 2.0);
    let elbow = Point::new(start.x + CONNECTOR_STUB, start.y);
    let end = Point::new(to.x, to.y + to.height / 2.0);
    let drop = Point::new(elbow.x, end.y);

    let mut path = SmallVec::new();
    path.extend([start, elbow, drop, end]);
    DependencyConnector {
        dependency,
        path,
        arrow_head: [
            end,
            Point::new(end.x - ARROW_SIZE, end.y - ARROW_SIZE / 2.0),
            Point::new(end.x - ARROW_SIZE, end.y + ARROW_SIZE / 2.0),
        ],
    }
}
