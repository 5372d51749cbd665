use analytics::RunContainer;

/// The run containers of one batch, in processing order.
///
/// Insertion order is the report order: every per-run and comparison table
/// lists runs exactly as they were added here.
#[derive(Debug, Clone, Default)]
pub struct RunCollection {
    runs: Vec<RunContainer>,
}

impl RunCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a run. A container with an already-present name replaces
    /// the earlier one in place, keeping its original position.
    pub fn push(&mut self, container: RunContainer) {
        if let Some(existing) = self.runs.iter_mut().find(|r| r.name == container.name) {
            *existing = container;
        } else {
            self.runs.push(container);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &RunContainer> {
        self.runs.iter()
    }

    pub fn get(&self, name: &str) -> Option<&RunContainer> {
        self.runs.iter().find(|r| r.name == name)
    }

    /// Run names in processing order.
    pub fn run_names(&self) -> Vec<&str> {
        self.runs.iter().map(|r| r.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use core_types::DetectorConstants;
    use histogram_store::MemoryStore;

    use super::*;

    fn container(name: &str) -> RunContainer {
        RunContainer::build(name, &MemoryStore::new(), 2000.0, DetectorConstants::default())
    }

    #[test]
    fn preserves_insertion_order() {
        let mut runs = RunCollection::new();
        runs.push(container("RunC"));
        runs.push(container("RunA"));
        runs.push(container("RunB"));

        assert_eq!(runs.run_names(), vec!["RunC", "RunA", "RunB"]);
    }

    #[test]
    fn replacing_a_run_keeps_its_position() {
        let mut runs = RunCollection::new();
        runs.push(container("RunA"));
        runs.push(container("RunB"));

        let mut replacement = container("RunA");
        replacement.colliding_bunches = 1234.0;
        runs.push(replacement);

        assert_eq!(runs.len(), 2);
        assert_eq!(runs.run_names(), vec!["RunA", "RunB"]);
        assert_eq!(runs.get("RunA").unwrap().colliding_bunches, 1234.0);
    }
}
