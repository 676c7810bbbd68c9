//! Station connectivity as a flattened union-find partition.

use crate::station::Station;

/// An immutable partition of the stations with ids below some bound into
/// connectivity classes.
///
/// Built through [`StationPartitionBuilder`]; once built, every id maps
/// directly to its class representative, so [`connected`] is two array
/// reads. Stations whose id falls outside the partition's range are only
/// connected to themselves.
///
/// [`connected`]: StationPartition::connected
///
/// # Examples
/// ```
/// use rail_duel::partition::StationPartitionBuilder;
/// use rail_duel::station::Station;
///
/// let mut builder = StationPartitionBuilder::new(5);
/// builder.connect(Station::Atlanta, Station::Boston);
/// builder.connect(Station::Boston, Station::Chicago);
/// let partition = builder.build();
///
/// assert!(partition.connected(Station::Atlanta, Station::Chicago));
/// assert!(!partition.connected(Station::Atlanta, Station::Calgary));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StationPartition {
    representatives: Vec<usize>,
}

impl StationPartition {
    /// Whether the two stations belong to the same connectivity class.
    ///
    /// If either station's id is out of the partition's range, the stations
    /// are connected only if they are the same station.
    pub fn connected(&self, s1: Station, s2: Station) -> bool {
        let (id1, id2) = (s1.id(), s2.id());
        if id1 >= self.representatives.len() || id2 >= self.representatives.len() {
            return id1 == id2;
        }
        self.representatives[id1] == self.representatives[id2]
    }
}

/// Builds a [`StationPartition`] by connecting station pairs one at a time.
///
/// While building, the representative array is a shallow union-find forest;
/// [`build`](StationPartitionBuilder::build) flattens every chain so lookups
/// in the finished partition are direct.
#[derive(Clone, Debug)]
pub struct StationPartitionBuilder {
    representatives: Vec<usize>,
}

impl StationPartitionBuilder {
    /// A builder for a partition over station ids `0..station_count`, with
    /// every station initially alone in its class.
    pub fn new(station_count: usize) -> Self {
        Self {
            representatives: (0..station_count).collect(),
        }
    }

    /// Merges the classes of the two stations.
    ///
    /// Both stations' ids must be below the builder's `station_count`.
    pub fn connect(&mut self, s1: Station, s2: Station) -> &mut Self {
        let rep1 = self.representative(s1.id());
        let rep2 = self.representative(s2.id());
        self.representatives[rep2] = rep1;
        self
    }

    /// Flattens the forest into a finished partition.
    pub fn build(&self) -> StationPartition {
        let representatives = (0..self.representatives.len())
            .map(|id| self.representative(id))
            .collect();
        StationPartition { representatives }
    }

    fn representative(&self, id: usize) -> usize {
        let mut current = id;
        while self.representatives[current] != current {
            current = self.representatives[current];
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_partition_only_connects_stations_to_themselves() {
        let partition = StationPartitionBuilder::new(36).build();

        assert!(partition.connected(Station::Denver, Station::Denver));
        assert!(!partition.connected(Station::Denver, Station::Helena));
    }

    #[test]
    fn connections_are_transitive() {
        let mut builder = StationPartitionBuilder::new(36);
        builder
            .connect(Station::Seattle, Station::Portland)
            .connect(Station::Portland, Station::SanFrancisco)
            .connect(Station::LosAngeles, Station::SanFrancisco);
        let partition = builder.build();

        assert!(partition.connected(Station::Seattle, Station::LosAngeles));
        assert!(partition.connected(Station::LosAngeles, Station::Seattle));
        assert!(!partition.connected(Station::Seattle, Station::Miami));
    }

    #[test]
    fn separate_classes_stay_separate() {
        let mut builder = StationPartitionBuilder::new(36);
        builder.connect(Station::Boston, Station::NewYork);
        builder.connect(Station::Miami, Station::Atlanta);
        let partition = builder.build();

        assert!(partition.connected(Station::Boston, Station::NewYork));
        assert!(partition.connected(Station::Miami, Station::Atlanta));
        assert!(!partition.connected(Station::Boston, Station::Miami));
    }

    #[test]
    fn out_of_range_stations_use_literal_equality() {
        // A partition covering only ids 0..3: Chicago (id 4) is outside.
        let mut builder = StationPartitionBuilder::new(3);
        builder.connect(Station::Atlanta, Station::Boston);
        let partition = builder.build();

        assert!(partition.connected(Station::Chicago, Station::Chicago));
        assert!(!partition.connected(Station::Chicago, Station::Atlanta));
        assert!(partition.connected(Station::Atlanta, Station::Boston));
    }

    #[test]
    fn empty_partition_is_valid() {
        let partition = StationPartitionBuilder::new(0).build();
        assert!(partition.connected(Station::Atlanta, Station::Atlanta));
        assert!(!partition.connected(Station::Atlanta, Station::Boston));
    }
}
