use super::diagnostic::{Collector, Diagnostic, Level, Mismatch, Path};
use super::geometry::Coordinate;
use super::options::{CompareOptions, Tolerance};
use log::trace;

/// Walks two nested coordinate structures in lockstep, tracking the
/// position of the current element.
pub(crate) struct Cursor<'a> {
    tolerance: &'a Tolerance,
    collector: &'a mut Collector,
    path: Vec<usize>,
}

impl<'a> Cursor<'a> {
    pub fn new(tolerance: &'a Tolerance, collector: &'a mut Collector) -> Self {
        Cursor {
            tolerance,
            collector,
            path: vec![],
        }
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.collector.push(diagnostic);
    }

    fn path(&self) -> Path {
        self.path.as_slice().into()
    }

    fn sizes_match(&mut self, level: Level, left: usize, right: usize) -> bool {
        if left == right {
            return true;
        }
        let path = self.path();
        self.report(Diagnostic::SizeMismatch {
            level,
            path,
            left,
            right,
        });
        false
    }

    fn each<T>(&mut self, seq1: &[T], seq2: &[T], mut f: impl FnMut(&mut Self, &T, &T)) {
        for (i, (a, b)) in seq1.iter().zip(seq2).enumerate() {
            if self.collector.is_done() {
                break;
            }
            self.path.push(i);
            f(self, a, b);
            self.path.pop();
        }
    }
}

fn round_point(tolerance: &Tolerance, point: &Coordinate) -> Coordinate {
    (tolerance.round(point.0), tolerance.round(point.1))
}

pub(crate) fn point(cursor: &mut Cursor, point1: &Coordinate, point2: &Coordinate) {
    let tolerance = cursor.tolerance;
    let left = round_point(tolerance, point1);
    let right = round_point(tolerance, point2);
    if !tolerance.within(left.0, right.0) || !tolerance.within(left.1, right.1) {
        let path = cursor.path();
        cursor.report(Diagnostic::PointMismatch { path, left, right });
    }
}

pub(crate) fn line(cursor: &mut Cursor, line1: &[Coordinate], line2: &[Coordinate]) {
    trace!("line of {} points", line1.len());
    if cursor.sizes_match(Level::Line, line1.len(), line2.len()) {
        cursor.each(line1, line2, |cursor, a, b| point(cursor, a, b));
    }
}

pub(crate) fn ring_set(cursor: &mut Cursor, lines1: &[Vec<Coordinate>], lines2: &[Vec<Coordinate>]) {
    trace!("{} rings", lines1.len());
    if cursor.sizes_match(Level::Rings, lines1.len(), lines2.len()) {
        cursor.each(lines1, lines2, |cursor, a, b| line(cursor, a, b));
    }
}

pub(crate) fn polygon_set(
    cursor: &mut Cursor,
    polygons1: &[Vec<Vec<Coordinate>>],
    polygons2: &[Vec<Vec<Coordinate>>],
) {
    trace!("{} polygons", polygons1.len());
    if cursor.sizes_match(Level::Polygons, polygons1.len(), polygons2.len()) {
        cursor.each(polygons1, polygons2, |cursor, a, b| ring_set(cursor, a, b));
    }
}

fn run(options: &CompareOptions, f: impl FnOnce(&mut Cursor)) -> Result<(), Mismatch> {
    let mut collector = Collector::new(options);
    let mut cursor = Cursor::new(&options.tolerance, &mut collector);
    f(&mut cursor);
    collector.finish()
}

/// Compare two points after rounding both to the tolerance grid.
///
/// # Example
///
/// ```
/// use geojson_diff::options::Tolerance;
/// use geojson_diff::shape::compare_points;
///
/// let tolerance = Tolerance::default();
/// assert!(compare_points(&(13.4, 52.5), &(13.400_000_01, 52.5), &tolerance).is_ok());
/// assert!(compare_points(&(13.4, 52.5), &(13.41, 52.5), &tolerance).is_err());
/// ```
pub fn compare_points(
    point1: &Coordinate,
    point2: &Coordinate,
    tolerance: &Tolerance,
) -> Result<(), Mismatch> {
    let options = CompareOptions::with_tolerance(*tolerance);
    run(&options, |cursor| point(cursor, point1, point2))
}

/// Compare two coordinate sequences (a line string or a multi point).
pub fn compare_line(
    line1: &[Coordinate],
    line2: &[Coordinate],
    options: &CompareOptions,
) -> Result<(), Mismatch> {
    run(options, |cursor| line(cursor, line1, line2))
}

/// Compare two sequences of coordinate sequences (polygon rings or a multi
/// line string).
pub fn compare_ring_set(
    lines1: &[Vec<Coordinate>],
    lines2: &[Vec<Coordinate>],
    options: &CompareOptions,
) -> Result<(), Mismatch> {
    run(options, |cursor| ring_set(cursor, lines1, lines2))
}

pub fn compare_polygon_set(
    polygons1: &[Vec<Vec<Coordinate>>],
    polygons2: &[Vec<Vec<Coordinate>>],
    options: &CompareOptions,
) -> Result<(), Mismatch> {
    run(options, |cursor| polygon_set(cursor, polygons1, polygons2))
}
