use union_find_rs::prelude::*;

use crate::graph::*;

/// Tracks which vertices are connected by the edges joined so far.
///
/// Vertices only enter the structure once an edge touches them, so the tracked
/// sets partition the touched vertices. Lookups and merges go through a
/// union-find with path compression.
pub struct ComponentTracker {
    sets: DisjointSets<Index>,
    touched: usize,
    components: usize,
}

impl ComponentTracker {
    pub fn new() -> ComponentTracker {
        ComponentTracker { sets: DisjointSets::new(), touched: 0, components: 0 }
    }

    /// Returns the representative of the component containing `v`, or `None`
    /// if no edge touching `v` has been joined yet.
    pub fn find_component(&mut self, v:Index) -> Option<Index> {
        self.sets.find_set(&v).ok()
    }

    /// Returns `true` if `u` and `v` lie in the same component.
    pub fn connected(&mut self, u:Index, v:Index) -> bool {
        match (self.find_component(u), self.find_component(v)) {
            (Some(cu), Some(cv)) => cu == cv,
            _ => false
        }
    }

    /// Merges the components of `u` and `v`, creating singleton components
    /// for untouched endpoints first.
    ///
    /// Returns `false` and leaves the structure unchanged if both endpoints
    /// were already in the same component.
    pub fn join(&mut self, u:Index, v:Index) -> bool {
        debug_assert!(u != v, "Self-loop ({u},{v}) cannot be joined");
        if self.connected(u, v) {
            return false
        }

        self.touch(u);
        self.touch(v);

        // Both endpoints are known and in distinct sets, the union cannot fail.
        let _ = self.sets.union(&u, &v);
        self.components -= 1;
        true
    }

    /// Number of vertices touched by at least one joined edge.
    pub fn num_touched(&self) -> usize {
        self.touched
    }

    /// Number of components among the touched vertices.
    pub fn num_components(&self) -> usize {
        self.components
    }

    fn touch(&mut self, v:Index) {
        if self.find_component(v).is_none() {
            let _ = self.sets.make_set(v);
            self.touched += 1;
            self.components += 1;
        }
    }
}

impl Default for ComponentTracker {
    fn default() -> Self {
        ComponentTracker::new()
    }
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn untouched() {
        let mut comps = ComponentTracker::new();
        assert_eq!(comps.find_component(3), None);
        assert!(!comps.connected(3, 4));
        assert_eq!(comps.num_components(), 0);
    }

    #[test]
    fn joining() {
        let mut comps = ComponentTracker::new();
        assert!(comps.join(0, 1));
        assert!(comps.join(2, 3));
        assert_eq!(comps.num_touched(), 4);
        assert_eq!(comps.num_components(), 2);
        assert!(!comps.connected(1, 2));

        assert!(comps.join(1, 2));
        assert_eq!(comps.num_components(), 1);
        assert!(comps.connected(0, 3));
        assert_eq!(comps.find_component(0), comps.find_component(3));
    }

    #[test]
    fn cycles_rejected() {
        let mut comps = ComponentTracker::new();
        assert!(comps.join(0, 1));
        assert!(comps.join(1, 2));
        assert!(!comps.join(2, 0));
        assert!(!comps.join(1, 0));

        assert_eq!(comps.num_touched(), 3);
        assert_eq!(comps.num_components(), 1);
    }

    #[test]
    fn attach_to_existing() {
        let mut comps = ComponentTracker::new();
        comps.join(0, 1);
        assert!(comps.join(5, 1));
        assert!(comps.connected(5, 0));
        assert_eq!(comps.num_touched(), 3);
        assert_eq!(comps.num_components(), 1);
    }
}
