use fxhash::FxHashMap;

use crate::node::{Node, NumNodes, VertexId};

/// Bidirectional map between external vertex ids and dense internal indices.
///
/// Indices are handed out consecutively starting at `0` and are never reassigned, so the
/// reverse direction is a plain `Vec` indexed by [`Node`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexIndex<V: VertexId> {
    ids: Vec<V>,
    indices: FxHashMap<V, Node>,
}

impl<V: VertexId> VertexIndex<V> {
    /// Creates an empty map with room for `capacity` vertices
    pub fn with_capacity(capacity: NumNodes) -> Self {
        Self {
            ids: Vec::with_capacity(capacity as usize),
            indices: FxHashMap::with_capacity_and_hasher(capacity as usize, Default::default()),
        }
    }

    /// Number of mapped vertices, which is also the next index to be assigned
    pub fn len(&self) -> NumNodes {
        self.ids.len() as NumNodes
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns the internal index of `u` if it is mapped
    #[inline]
    pub fn index_of(&self, u: &V) -> Option<Node> {
        self.indices.get(u).copied()
    }

    pub fn contains(&self, u: &V) -> bool {
        self.indices.contains_key(u)
    }

    /// Returns the id mapped to `index`.
    /// ** Panics if `index >= self.len()` **
    #[inline]
    pub fn id_of(&self, index: Node) -> &V {
        &self.ids[index as usize]
    }

    /// Returns the id mapped to `index` if there is one
    pub fn get_id(&self, index: Node) -> Option<&V> {
        self.ids.get(index as usize)
    }

    /// Maps `u` to the next free index and returns it.
    /// The caller is responsible for `u` not being mapped yet.
    pub fn insert(&mut self, u: V) -> Node {
        debug_assert!(!self.contains(&u));
        let index = self.len();
        self.indices.insert(u.clone(), index);
        self.ids.push(u);
        index
    }

    /// Iterates over all ids in order of their internal index
    pub fn ids(&self) -> std::slice::Iter<'_, V> {
        self.ids.iter()
    }
}
