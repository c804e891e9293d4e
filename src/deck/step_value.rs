//! Step-indexed values: content that changes discretely per step.

use crate::deck::error::DeckError;

/// A frame shown for `steps` consecutive steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hold<T> {
    pub value: T,
    pub steps: usize,
}

impl<T> Hold<T> {
    pub fn new(value: T, steps: usize) -> Self {
        Self { value, steps }
    }

    /// A frame shown for exactly one step.
    pub fn once(value: T) -> Self {
        Self::new(value, 1)
    }
}

/// Non-empty ordered sequence of frames with clamped lookup.
///
/// Frames are stored once per hold, so `len()` is the total number of
/// steps the value spans. Lookups below zero return the first frame and
/// lookups past the end return the last one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepValue<T> {
    frames: Vec<T>,
    /// Exclusive end step of each frame, strictly increasing.
    ends: Vec<usize>,
}

impl<T> StepValue<T> {
    /// Build from an explicit frame list, one step per frame. Empty lists are rejected.
    pub fn new(frames: Vec<T>) -> Result<Self, DeckError> {
        if frames.is_empty() {
            return Err(DeckError::EmptyFrames);
        }
        let ends = (1..=frames.len()).collect();
        Ok(Self { frames, ends })
    }

    pub fn single(value: T) -> Self {
        Self {
            frames: vec![value],
            ends: vec![1],
        }
    }

    /// Collapse held frames into runs. Zero holds and totals past `usize::MAX` are rejected.
    pub fn build(holds: Vec<Hold<T>>) -> Result<Self, DeckError> {
        let mut frames = Vec::with_capacity(holds.len());
        let mut ends = Vec::with_capacity(holds.len());
        let mut total = 0usize;
        for (index, hold) in holds.into_iter().enumerate() {
            if hold.steps == 0 {
                return Err(DeckError::ZeroHold { index });
            }
            total = total
                .checked_add(hold.steps)
                .ok_or(DeckError::TooManySteps { index })?;
            frames.push(hold.value);
            ends.push(total);
        }
        if frames.is_empty() {
            return Err(DeckError::EmptyFrames);
        }
        Ok(Self { frames, ends })
    }

    pub fn len(&self) -> usize {
        self.ends.last().copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Distinct frames in order, one per hold.
    pub fn frames(&self) -> &[T] {
        &self.frames
    }

    /// Each frame with the number of steps it is shown for.
    pub fn holds(&self) -> impl Iterator<Item = (&T, usize)> + '_ {
        let starts = std::iter::once(0).chain(self.ends.iter().copied());
        self.frames
            .iter()
            .zip(self.ends.iter().zip(starts))
            .map(|(frame, (end, start))| (frame, end - start))
    }

    /// Clamped lookup by signed index.
    pub fn lookup(&self, index: i64) -> &T {
        if index <= 0 {
            return &self.frames[0];
        }
        usize::try_from(index).map_or(self.last(), |step| self.get(step))
    }

    /// Clamped lookup by local step, as handed out by resolution.
    pub fn get(&self, step: usize) -> &T {
        let index = self.ends.partition_point(|&end| end <= step);
        &self.frames[index.min(self.frames.len() - 1)]
    }

    pub fn last(&self) -> &T {
        &self.frames[self.frames.len() - 1]
    }
}

impl StepValue<String> {
    /// Growing text: each frame appends the next part to the previous one.
    pub fn accumulate<S: AsRef<str>>(parts: &[S], separator: &str) -> Result<Self, DeckError> {
        let mut frames: Vec<String> = Vec::with_capacity(parts.len());
        for part in parts {
            let next = match frames.last() {
                Some(prev) => format!("{prev}{separator}{}", part.as_ref()),
                None => part.as_ref().to_string(),
            };
            frames.push(next);
        }
        Self::new(frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_frames_rejected() {
        assert_eq!(
            StepValue::<u8>::new(Vec::new()),
            Err(DeckError::EmptyFrames)
        );
    }

    #[test]
    fn build_expands_holds() {
        let value = StepValue::build(vec![Hold::new('a', 2), Hold::once('b')]).unwrap();
        assert_eq!(value.len(), 3);
        let steps: Vec<_> = (0..3).map(|step| *value.get(step)).collect();
        assert_eq!(steps, vec!['a', 'a', 'b']);
        assert_eq!(value.holds().collect::<Vec<_>>(), vec![(&'a', 2), (&'b', 1)]);
    }

    #[test]
    fn huge_hold_is_stored_once() {
        let value = StepValue::build(vec![Hold::once('a'), Hold::new('b', usize::MAX - 1)]).unwrap();
        assert_eq!(value.len(), usize::MAX);
        assert_eq!(value.frames(), &['a', 'b']);
        assert_eq!(*value.get(1), 'b');
        assert_eq!(*value.lookup(i64::MAX), 'b');
    }

    #[test]
    fn build_rejects_overflowing_total() {
        let err = StepValue::build(vec![Hold::new('a', usize::MAX), Hold::new('b', 2)]).unwrap_err();
        assert_eq!(err, DeckError::TooManySteps { index: 1 });
    }

    #[test]
    fn build_rejects_zero_hold() {
        let err = StepValue::build(vec![Hold::once('a'), Hold::new('b', 0)]).unwrap_err();
        assert_eq!(err, DeckError::ZeroHold { index: 1 });
    }

    #[test]
    fn accumulate_grows() {
        let value = StepValue::accumulate(&["To be", "or not", "to be"], ", ").unwrap();
        assert_eq!(value.get(0), "To be");
        assert_eq!(value.get(1), "To be, or not");
        assert_eq!(value.get(9), "To be, or not, to be");
    }

    #[test]
    fn lookup_handles_extremes() {
        let value = StepValue::new(vec![1, 2, 3]).unwrap();
        assert_eq!(*value.lookup(i64::MIN), 1);
        assert_eq!(*value.lookup(i64::MAX), 3);
    }
}
