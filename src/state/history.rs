use crate::stroke::StrokeRef;

/// Append `stroke` to `log`, dropping everything past the first `visible`
/// entries first. Returns the new log and the new visible count.
///
/// Strokes beyond `visible` are the redo buffer; drawing something new makes
/// them unreachable, so they are discarded here.
pub fn commit(
    mut log: Vec<StrokeRef>,
    visible: usize,
    stroke: StrokeRef,
) -> (Vec<StrokeRef>, usize) {
    log.truncate(visible);
    log.push(stroke);
    let visible = log.len();
    (log, visible)
}

/// Linear undo/redo history over committed strokes.
///
/// The log is only ever truncated or appended to; undo and redo move the
/// visible count. The stored cursor is `visible - 1`, with `-1` meaning
/// nothing is visible.
#[derive(Debug, Clone, Default)]
pub struct StrokeHistory {
    strokes: Vec<StrokeRef>,
    visible: usize,
}

impl StrokeHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a history from a stroke list and a cursor, clamping the cursor
    /// into `[-1, strokes.len() - 1]`
    pub fn from_parts(strokes: Vec<StrokeRef>, cursor: isize) -> Self {
        let visible = usize::try_from(cursor.saturating_add(1))
            .unwrap_or(0)
            .min(strokes.len());
        Self { strokes, visible }
    }

    pub fn push(&mut self, stroke: StrokeRef) {
        let log = std::mem::take(&mut self.strokes);
        let (log, visible) = commit(log, self.visible, stroke);
        self.strokes = log;
        self.visible = visible;
    }

    /// Returns false when already at the lower bound
    pub fn undo(&mut self) -> bool {
        if self.can_undo() {
            self.visible -= 1;
            true
        } else {
            false
        }
    }

    /// Returns false when already at the upper bound
    pub fn redo(&mut self) -> bool {
        if self.can_redo() {
            self.visible += 1;
            true
        } else {
            false
        }
    }

    pub fn can_undo(&self) -> bool {
        self.visible > 0
    }

    pub fn can_redo(&self) -> bool {
        self.visible < self.strokes.len()
    }

    pub fn clear(&mut self) {
        self.strokes.clear();
        self.visible = 0;
    }

    pub fn cursor(&self) -> isize {
        self.visible as isize - 1
    }

    pub fn visible_len(&self) -> usize {
        self.visible
    }

    pub fn visible(&self) -> &[StrokeRef] {
        &self.strokes[..self.visible]
    }

    /// Every stroke in the log, redo buffer included
    pub fn all(&self) -> &[StrokeRef] {
        &self.strokes
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stroke::Stroke;
    use egui::pos2;

    fn stroke(n: f32) -> StrokeRef {
        Stroke::new("#000000", 4.0, false, vec![pos2(n, n), pos2(n + 1.0, n + 1.0)]).into_ref()
    }

    #[test]
    fn test_commit_truncates_redo_tail() {
        let log = vec![stroke(0.0), stroke(1.0), stroke(2.0)];
        let extra = stroke(9.0);
        let (log, visible) = commit(log, 1, extra.clone());
        assert_eq!(log.len(), 2);
        assert_eq!(visible, 2);
        assert_eq!(log[1].id(), extra.id());
    }

    #[test]
    fn test_from_parts_clamps_cursor() {
        let strokes = vec![stroke(0.0), stroke(1.0)];
        assert_eq!(StrokeHistory::from_parts(strokes.clone(), 7).cursor(), 1);
        assert_eq!(StrokeHistory::from_parts(strokes.clone(), -5).cursor(), -1);
        assert_eq!(StrokeHistory::from_parts(strokes, 0).visible_len(), 1);
    }

    #[test]
    fn test_bounds() {
        let mut history = StrokeHistory::new();
        assert!(!history.undo());
        assert!(!history.redo());
        history.push(stroke(0.0));
        assert!(history.undo());
        assert_eq!(history.cursor(), -1);
        assert!(!history.undo());
        assert!(history.redo());
        assert!(!history.redo());
        assert_eq!(history.cursor(), 0);
    }
}
