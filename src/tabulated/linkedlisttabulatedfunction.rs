use std::cell::Cell;
use std::fmt;
use std::hash::{
    Hash,
    Hasher
};

use serde::{
    Deserialize,
    Serialize
};
use tracing::debug;

use crate::function::function::Function;
use crate::function::functionerror::{
    FunctionError,
    Result
};
use crate::tabulated::functionpoint::FunctionPoint;
use crate::tabulated::tabulatedfunction::{
    STORE_EPSILON,
    TabulatedFunction,
    check_neighbours,
    fmt_points,
    hash_points,
    interpolate,
    points_equal,
    uniform_points,
    validate_points
};
use crate::tabulated::tabulatedfunctionfactory::TabulatedFunctionType;

// ─────────────────────────────────────────────────────────────────────────────
// Arena layout
// ─────────────────────────────────────────────────────────────────────────────
//
// Nodes live in a Vec and refer to each other by slot index. Slot HEAD is a
// sentinel closing the ring: HEAD.next is the first point, HEAD.prev the last.
// Deleted slots go to a free list and are reused by the next insertion.
//
// The cursor remembers the last (index, slot) pair resolved by node_at. It is
// a cache only: equality, hashing, cloning and serialization ignore it.

const HEAD: usize = 0;

#[derive(Debug, Clone, Copy)]
struct FunctionNode {
    point: FunctionPoint,
    prev: usize,
    next: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cursor {
    index: usize,
    node: usize,
}

/// Tabulated function backed by a circular doubly-linked list.
///
/// Index lookups start from whichever of the first point, the last point or
/// the previously accessed point is closest, so scanning indices in order or
/// working around one region costs O(1) per access.
#[derive(Debug, Serialize, Deserialize)]
#[serde(try_from = "Vec<FunctionPoint>", into = "Vec<FunctionPoint>")]
pub struct LinkedListTabulatedFunction {
    nodes: Vec<FunctionNode>,
    free_nodes: Vec<usize>,
    points_count: usize,
    last_accessed: Cell<Option<Cursor>>,
}

impl LinkedListTabulatedFunction {
    pub const MIN_POINTS_COUNT: usize = 3;

    /// `points_count` evenly spaced points over `[left_x, right_x]`, all with y = 0.
    pub fn new(left_x: f64, right_x: f64, points_count: usize) -> Result<LinkedListTabulatedFunction> {
        Self::with_values(left_x, right_x, &vec![0.0; points_count])
    }

    pub fn with_values(left_x: f64, right_x: f64, values: &[f64]) -> Result<LinkedListTabulatedFunction> {
        let points = uniform_points(left_x, right_x, values)?;
        debug!(points_count = points.len(), left_x, right_x, "linked list tabulated function created");
        Ok(Self::from_ordered(points))
    }

    /// Copies `points`, which must be strictly increasing in X.
    pub fn from_points(points: &[FunctionPoint]) -> Result<LinkedListTabulatedFunction> {
        validate_points(points)?;
        debug!(points_count = points.len(), "linked list tabulated function created from points");
        Ok(Self::from_ordered(points.iter().copied()))
    }

    pub fn iter(&self) -> LinkedListIter<'_> {
        LinkedListIter {
            function: self,
            node: self.nodes[HEAD].next,
        }
    }

    fn empty(capacity: usize) -> LinkedListTabulatedFunction {
        let mut nodes = Vec::with_capacity(capacity + 1);
        nodes.push(FunctionNode {
            point: FunctionPoint::default(),
            prev: HEAD,
            next: HEAD,
        });
        LinkedListTabulatedFunction {
            nodes,
            free_nodes: Vec::new(),
            points_count: 0,
            last_accessed: Cell::new(None),
        }
    }

    fn from_ordered<I>(points: I) -> LinkedListTabulatedFunction
    where
        I: IntoIterator<Item = FunctionPoint>,
    {
        let points = points.into_iter();
        let mut function = Self::empty(points.size_hint().0);
        for point in points {
            function.link_before(point, HEAD);
        }
        function
    }

    // ── arena primitives ────────────────────────────────────────────────────

    fn allocate(&mut self, point: FunctionPoint) -> usize {
        let node = FunctionNode { point, prev: HEAD, next: HEAD };
        match self.free_nodes.pop() {
            Some(slot) => {
                self.nodes[slot] = node;
                slot
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    fn link_before(&mut self, point: FunctionPoint, successor: usize) -> usize {
        let node = self.allocate(point);
        let predecessor = self.nodes[successor].prev;
        self.nodes[node].prev = predecessor;
        self.nodes[node].next = successor;
        self.nodes[predecessor].next = node;
        self.nodes[successor].prev = node;
        self.points_count += 1;
        node
    }

    fn unlink(&mut self, node: usize) {
        let FunctionNode { prev, next, .. } = self.nodes[node];
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        self.free_nodes.push(node);
        self.points_count -= 1;
    }

    // ── index translation ───────────────────────────────────────────────────

    /// Slot holding the point at `index`, walking from the nearest anchor.
    fn node_at(&self, index: usize) -> Result<usize> {
        FunctionError::check_index(index, self.points_count)?;

        let from_head = index;
        let from_tail = self.points_count - 1 - index;
        let cursor = self.last_accessed.get();
        let from_cursor = cursor.map_or(usize::MAX, |c| c.index.abs_diff(index));

        let (mut node, mut position) = if from_head <= from_tail && from_head <= from_cursor {
            (self.nodes[HEAD].next, 0)
        } else if from_tail <= from_cursor {
            (self.nodes[HEAD].prev, self.points_count - 1)
        } else {
            // from_cursor is finite only when a cursor exists
            let cursor = cursor.unwrap_or(Cursor { index: 0, node: self.nodes[HEAD].next });
            (cursor.node, cursor.index)
        };

        while position < index {
            node = self.nodes[node].next;
            position += 1;
        }
        while position > index {
            node = self.nodes[node].prev;
            position -= 1;
        }

        self.last_accessed.set(Some(Cursor { index, node }));
        Ok(node)
    }

    fn neighbours(&self, node: usize) -> (Option<f64>, Option<f64>) {
        let FunctionNode { prev, next, .. } = self.nodes[node];
        let prev_x = (prev != HEAD).then(|| self.nodes[prev].point.x());
        let next_x = (next != HEAD).then(|| self.nodes[next].point.x());
        (prev_x, next_x)
    }
}

impl Function for LinkedListTabulatedFunction {
    fn domain_left(&self) -> f64 {
        if self.points_count == 0 {
            f64::NAN
        } else {
            self.nodes[self.nodes[HEAD].next].point.x()
        }
    }

    fn domain_right(&self) -> f64 {
        if self.points_count == 0 {
            f64::NAN
        } else {
            self.nodes[self.nodes[HEAD].prev].point.x()
        }
    }

    /// Unlike the array store, arguments up to `STORE_EPSILON` outside the
    /// domain still snap onto the border samples.
    fn value(&self, x: f64) -> f64 {
        if !(x >= self.domain_left() - STORE_EPSILON && x <= self.domain_right() + STORE_EPSILON) {
            return f64::NAN;
        }
        interpolate(self.iter(), x)
    }
}

impl TabulatedFunction for LinkedListTabulatedFunction {
    fn function_type(&self) -> TabulatedFunctionType {
        TabulatedFunctionType::LinkedList
    }

    fn min_points_count(&self) -> usize {
        Self::MIN_POINTS_COUNT
    }

    fn points_count(&self) -> usize {
        self.points_count
    }

    fn point(&self, index: usize) -> Result<FunctionPoint> {
        let node = self.node_at(index)?;
        Ok(self.nodes[node].point)
    }

    fn set_point(&mut self, index: usize, point: FunctionPoint) -> Result<()> {
        let node = self.node_at(index)?;
        let (prev_x, next_x) = self.neighbours(node);
        check_neighbours(prev_x, next_x, point.x())?;
        self.nodes[node].point = point;
        Ok(())
    }

    fn set_point_y(&mut self, index: usize, y: f64) -> Result<()> {
        let node = self.node_at(index)?;
        self.nodes[node].point = self.nodes[node].point.with_y(y);
        Ok(())
    }

    fn add_point(&mut self, point: FunctionPoint) -> Result<()> {
        let x = point.x();
        if !x.is_finite() {
            return Err(FunctionError::order(format!("x {x} is not finite")));
        }

        let mut successor = self.nodes[HEAD].next;
        let mut position = 0;
        while successor != HEAD && self.nodes[successor].point.x() < x - STORE_EPSILON {
            successor = self.nodes[successor].next;
            position += 1;
        }
        if successor != HEAD && (self.nodes[successor].point.x() - x).abs() < STORE_EPSILON {
            return Err(FunctionError::order(format!(
                "a point with x {} already exists",
                self.nodes[successor].point.x()
            )));
        }

        self.link_before(point, successor);
        if let Some(cursor) = self.last_accessed.get() {
            if cursor.index >= position {
                self.last_accessed.set(Some(Cursor { index: cursor.index + 1, ..cursor }));
            }
        }
        Ok(())
    }

    fn delete_point(&mut self, index: usize) -> Result<()> {
        FunctionError::check_index(index, self.points_count)?;
        if self.points_count <= Self::MIN_POINTS_COUNT {
            return Err(FunctionError::InvariantViolation(format!(
                "cannot delete a point: fewer than {} points would remain",
                Self::MIN_POINTS_COUNT
            )));
        }

        let node = self.node_at(index)?;
        let FunctionNode { prev, next, .. } = self.nodes[node];
        self.unlink(node);

        // park the cursor on a surviving neighbour
        let cursor = if next != HEAD {
            Cursor { index, node: next }
        } else {
            Cursor { index: index - 1, node: prev }
        };
        self.last_accessed.set(Some(cursor));
        Ok(())
    }

    fn iter(&self) -> Box<dyn Iterator<Item = FunctionPoint> + '_> {
        Box::new(LinkedListTabulatedFunction::iter(self))
    }

    fn clone_box(&self) -> Box<dyn TabulatedFunction> {
        Box::new(self.clone())
    }
}

/// Compacts the arena; the copy starts without a cursor.
impl Clone for LinkedListTabulatedFunction {
    fn clone(&self) -> Self {
        Self::from_ordered(self.iter())
    }
}

impl<T: TabulatedFunction + ?Sized> PartialEq<T> for LinkedListTabulatedFunction {
    fn eq(&self, other: &T) -> bool {
        points_equal(self, other)
    }
}

impl Hash for LinkedListTabulatedFunction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_points(self, state)
    }
}

impl fmt::Display for LinkedListTabulatedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_points(self, f)
    }
}

impl TryFrom<Vec<FunctionPoint>> for LinkedListTabulatedFunction {
    type Error = FunctionError;

    fn try_from(points: Vec<FunctionPoint>) -> Result<LinkedListTabulatedFunction> {
        validate_points(&points)?;
        Ok(Self::from_ordered(points))
    }
}

impl From<LinkedListTabulatedFunction> for Vec<FunctionPoint> {
    fn from(function: LinkedListTabulatedFunction) -> Vec<FunctionPoint> {
        function.iter().collect()
    }
}

impl<'a> IntoIterator for &'a LinkedListTabulatedFunction {
    type Item = FunctionPoint;
    type IntoIter = LinkedListIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Iterator
// ─────────────────────────────────────────────────────────────────────────────

/// Walks the ring once from the first point, yielding copies.
pub struct LinkedListIter<'a> {
    function: &'a LinkedListTabulatedFunction,
    node: usize,
}

impl Iterator for LinkedListIter<'_> {
    type Item = FunctionPoint;

    fn next(&mut self) -> Option<FunctionPoint> {
        if self.node == HEAD {
            return None;
        }
        let FunctionNode { point, next, .. } = self.function.nodes[self.node];
        self.node = next;
        Some(point)
    }
}
