use crate::foundation::core::JulianDate;
use crate::foundation::error::{SceneError, SceneResult};

/// A span of time between two dates carrying a piece of data.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeInterval<T> {
    /// First instant of the interval.
    pub start: JulianDate,
    /// Last instant of the interval.
    pub stop: JulianDate,
    /// Whether `start` itself belongs to the interval.
    pub is_start_included: bool,
    /// Whether `stop` itself belongs to the interval.
    pub is_stop_included: bool,
    /// Value held for the whole interval.
    pub data: T,
}

impl<T> TimeInterval<T> {
    /// Create an interval with explicit bound inclusivity.
    pub fn new(
        start: JulianDate,
        stop: JulianDate,
        is_start_included: bool,
        is_stop_included: bool,
        data: T,
    ) -> Self {
        Self {
            start,
            stop,
            is_start_included,
            is_stop_included,
            data,
        }
    }

    /// Create a closed interval `[start, stop]`.
    pub fn closed(start: JulianDate, stop: JulianDate, data: T) -> Self {
        Self::new(start, stop, true, true, data)
    }

    /// `true` when no instant lies inside the interval.
    pub fn is_empty(&self) -> bool {
        if self.stop < self.start {
            return true;
        }
        self.stop == self.start && !(self.is_start_included && self.is_stop_included)
    }

    /// `true` when `date` lies inside the interval, honoring bound inclusivity.
    pub fn contains(&self, date: JulianDate) -> bool {
        if self.is_empty() {
            return false;
        }
        let after_start = if self.is_start_included {
            date >= self.start
        } else {
            date > self.start
        };
        let before_stop = if self.is_stop_included {
            date <= self.stop
        } else {
            date < self.stop
        };
        after_start && before_stop
    }

    /// `true` when the two intervals share at least one instant.
    pub fn intersects<U>(&self, other: &TimeInterval<U>) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        let (start, start_included) = if self.start > other.start {
            (self.start, self.is_start_included)
        } else if other.start > self.start {
            (other.start, other.is_start_included)
        } else {
            (self.start, self.is_start_included && other.is_start_included)
        };
        let (stop, stop_included) = if self.stop < other.stop {
            (self.stop, self.is_stop_included)
        } else if other.stop < self.stop {
            (other.stop, other.is_stop_included)
        } else {
            (self.stop, self.is_stop_included && other.is_stop_included)
        };

        start < stop || (start == stop && start_included && stop_included)
    }
}

/// Ordered collection of non-overlapping [`TimeInterval`]s.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeIntervalCollection<T> {
    intervals: Vec<TimeInterval<T>>, // sorted by start, pairwise disjoint
}

impl<T> TimeIntervalCollection<T> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self {
            intervals: Vec::new(),
        }
    }

    /// Number of intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// `true` when the collection holds no intervals.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Interval at `index` in chronological order.
    pub fn get(&self, index: usize) -> Option<&TimeInterval<T>> {
        self.intervals.get(index)
    }

    /// Iterate intervals in chronological order.
    pub fn iter(&self) -> std::slice::Iter<'_, TimeInterval<T>> {
        self.intervals.iter()
    }

    /// Start of the earliest interval.
    pub fn start(&self) -> Option<JulianDate> {
        self.intervals.first().map(|i| i.start)
    }

    /// Stop of the latest interval.
    pub fn stop(&self) -> Option<JulianDate> {
        self.intervals.last().map(|i| i.stop)
    }

    /// Remove every interval.
    pub fn clear(&mut self) {
        self.intervals.clear();
    }

    /// Insert `interval`, keeping chronological order.
    ///
    /// Empty intervals are ignored. Returns `true` when the interval was inserted.
    pub fn add_interval(&mut self, interval: TimeInterval<T>) -> SceneResult<bool> {
        if interval.is_empty() {
            return Ok(false);
        }
        if let Some(existing) = self.intervals.iter().find(|i| i.intersects(&interval)) {
            return Err(SceneError::interval(format!(
                "interval {:?}..{:?} overlaps existing interval {:?}..{:?}",
                interval.start, interval.stop, existing.start, existing.stop
            )));
        }

        // Equal starts only occur for `[a, a]` followed by `(a, ..`.
        let idx = self.intervals.partition_point(|i| {
            i.start < interval.start || (i.start == interval.start && i.is_start_included)
        });
        self.intervals.insert(idx, interval);
        Ok(true)
    }

    /// Index of the interval containing `date`.
    pub fn index_of(&self, date: JulianDate) -> Option<usize> {
        let upper = self.intervals.partition_point(|i| i.start <= date);
        (0..upper)
            .rev()
            .take_while(|&idx| self.intervals[idx].stop >= date)
            .find(|&idx| self.intervals[idx].contains(date))
    }

    /// Interval containing `date`.
    pub fn find_interval_containing_date(&self, date: JulianDate) -> Option<&TimeInterval<T>> {
        self.index_of(date).map(|idx| &self.intervals[idx])
    }

    /// Data of the interval containing `date`.
    pub fn find_data_for_interval_containing_date(&self, date: JulianDate) -> Option<&T> {
        self.find_interval_containing_date(date).map(|i| &i.data)
    }
}

impl<T> Default for TimeIntervalCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a TimeIntervalCollection<T> {
    type Item = &'a TimeInterval<T>;
    type IntoIter = std::slice::Iter<'a, TimeInterval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/time/interval.rs"]
mod tests;
