use causeway_core::Point3;

use crate::Router;
use crate::router::Search;
use crate::traits::RoutePather;

impl Router {
    /// Best-first search from `from` to `to`, bounded by the configured
    /// expansion ceiling.
    ///
    /// The frontier is ordered by the pather's accumulated cost. A point is
    /// closed the first time it is popped; stale frontier entries for it
    /// are skipped without counting as expansions, so a returned path never
    /// visits a point twice.
    pub fn search<P: RoutePather>(&mut self, pather: &P, from: Point3, to: Point3) -> Search {
        self.reset();

        if from == to {
            return Search::Found(vec![from]);
        }

        let ceiling = self.config.ceiling;
        self.push(from, pather.seed_cost(from, to), usize::MAX);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let outcome = 'search: loop {
            let Some(current) = self.open.pop() else {
                break 'search Search::NoRoute;
            };

            let node = self.nodes[current.idx];
            if !self.closed.insert(node.pos) {
                continue;
            }

            if self.expansions >= ceiling {
                break 'search Search::Exhausted;
            }
            self.expansions += 1;

            if node.pos == to {
                break 'search Search::Found(self.reconstruct(current.idx));
            }

            nbuf.clear();
            pather.neighbors(node.pos, &mut nbuf);

            for &np in nbuf.iter() {
                if self.closed.contains(&np) {
                    continue;
                }
                let cost = pather.extend_cost(node.cost, node.pos, np, to);
                self.push(np, cost, current.idx);
            }
        };

        self.nbuf = nbuf;

        match &outcome {
            Search::Found(path) => log::debug!(
                "route {from} -> {to}: {} points after {} expansions",
                path.len(),
                self.expansions
            ),
            Search::Exhausted => log::debug!(
                "route {from} -> {to}: ceiling of {ceiling} expansions reached"
            ),
            Search::NoRoute => log::debug!(
                "route {from} -> {to}: frontier emptied after {} expansions",
                self.expansions
            ),
        }

        outcome
    }
}
