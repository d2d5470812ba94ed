use std::sync::Arc;

use tracing::debug;

use super::employee::{Employee, EmployeeDraft, EmployeeId};
use super::ids::{IdSource, SequentialIds};
use super::seed;
use crate::store::{Store, Subscription};

/// The authoritative in-memory collection of employee records.
///
/// The directory is the single source of truth for the lifetime of the
/// process: every mutation is immediately visible to all subsequent reads
/// and is pushed to subscribers before the mutating call returns. Clones
/// share the same collection, so the composition root can hand one handle
/// to each screen.
///
/// "Not found" is a normal outcome here, never an error: lookups return
/// [`Option`] and removal of a missing id is a no-op.
pub struct Directory {
    records: Store<Vec<Employee>>,
    ids: Arc<dyn IdSource>,
}

impl Directory {
    /// Create a directory over an initial set of records.
    ///
    /// The [`IdSource`] must be configured so it never collides with the
    /// ids already present in `initial`.
    pub fn new(initial: Vec<Employee>, ids: Arc<dyn IdSource>) -> Self {
        Self {
            records: Store::new(initial),
            ids,
        }
    }

    /// Create an empty directory with sequential ids.
    pub fn empty() -> Self {
        Self::new(Vec::new(), Arc::new(SequentialIds::default()))
    }

    /// Create a directory seeded with the built-in sample roster, with
    /// sequential ids continuing after the seeded ones.
    pub fn with_sample_data() -> Self {
        Self::new(
            seed::sample_employees(),
            Arc::new(SequentialIds::starting_at(seed::NEXT_SAMPLE_ID)),
        )
    }

    /// Add a new employee, assigning it a fresh id.
    ///
    /// The record is appended to the end of the collection and subscribers
    /// are notified. The draft is stored as-is; validating it is the
    /// caller's job (see [`AddEmployeeForm`](crate::AddEmployeeForm)).
    pub fn add(&self, draft: EmployeeDraft) -> EmployeeId {
        let id = self.ids.next_id();
        debug!(id = %id, name = %draft.name, "adding employee");
        let employee = Employee::from_draft(id.clone(), draft);
        self.records.update(|records| records.push(employee));
        id
    }

    /// Remove the employee with the given id.
    ///
    /// Returns whether a record was removed; a missing id leaves the
    /// collection untouched and does not notify subscribers.
    pub fn remove(&self, id: &EmployeeId) -> bool {
        // Only notify when something actually changed.
        let found = self
            .records
            .read(|records| records.iter().any(|e| &e.id == id));
        if found {
            self.records.update(|records| {
                records.retain(|e| &e.id != id);
            });
            debug!(id = %id, "removed employee");
        }
        found
    }

    /// Look up an employee by id.
    pub fn get(&self, id: &EmployeeId) -> Option<Employee> {
        self.records
            .read(|records| records.iter().find(|e| &e.id == id).cloned())
    }

    /// All employees whose name contains `query` case-insensitively,
    /// in insertion order.
    ///
    /// The empty query matches every name, so `search("")` returns the
    /// full roster. That is this store's contract, not a caller policy.
    pub fn search(&self, query: &str) -> Vec<Employee> {
        let needle = query.to_lowercase();
        self.records.read(|records| {
            records
                .iter()
                .filter(|e| e.name.to_lowercase().contains(&needle))
                .cloned()
                .collect()
        })
    }

    /// Snapshot of the full roster in insertion order.
    pub fn all(&self) -> Vec<Employee> {
        self.records.get()
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.records.read(Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.records.read(Vec::is_empty)
    }

    /// Subscribe to roster changes.
    #[must_use = "dropping the subscription detaches the callback"]
    pub fn subscribe<F>(&self, callback: F) -> Subscription<Vec<Employee>>
    where
        F: Fn(&[Employee]) + Send + Sync + 'static,
    {
        self.records.subscribe(move |records| callback(records))
    }

    /// Subscribe and immediately receive the current roster.
    #[must_use = "dropping the subscription detaches the callback"]
    pub fn watch<F>(&self, callback: F) -> Subscription<Vec<Employee>>
    where
        F: Fn(&[Employee]) + Send + Sync + 'static,
    {
        self.records.watch(move |records| callback(records))
    }
}

impl Clone for Directory {
    fn clone(&self) -> Self {
        Self {
            records: self.records.clone(),
            ids: Arc::clone(&self.ids),
        }
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::with_sample_data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::employee::ImageSource;
    use chrono::NaiveDate;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn draft(name: &str) -> EmployeeDraft {
        EmployeeDraft {
            name: name.to_string(),
            years_of_experience: 2,
            joining_date: NaiveDate::from_ymd_opt(2023, 4, 1).unwrap(),
            image: ImageSource::Placeholder,
            skills: vec!["Rust".to_string()],
        }
    }

    #[test]
    fn add_then_get_returns_the_record() {
        let directory = Directory::empty();
        let id = directory.add(draft("Alice Park"));

        assert!(!id.as_str().is_empty());
        let stored = directory.get(&id).unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.name, "Alice Park");
        assert_eq!(stored.years_of_experience, 2);
        assert_eq!(stored.skills, ["Rust"]);
    }

    #[test]
    fn add_appends_in_insertion_order() {
        let directory = Directory::empty();
        directory.add(draft("First"));
        directory.add(draft("Second"));
        directory.add(draft("Third"));

        let names: Vec<_> = directory.all().into_iter().map(|e| e.name).collect();
        assert_eq!(names, ["First", "Second", "Third"]);
    }

    #[test]
    fn rapid_adds_get_distinct_ids() {
        let directory = Directory::empty();
        let ids: Vec<_> = (0..50).map(|i| directory.add(draft(&format!("E{i}")))).collect();

        let mut unique = ids.clone();
        unique.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        unique.dedup();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn remove_then_get_is_none() {
        let directory = Directory::empty();
        let id = directory.add(draft("Alice Park"));

        assert!(directory.remove(&id));
        assert_eq!(directory.get(&id), None);
    }

    #[test]
    fn removing_missing_id_is_a_noop() {
        let directory = Directory::with_sample_data();
        let before = directory.all();

        let missing = EmployeeId::new("no-such-id");
        assert!(!directory.remove(&missing));
        assert_eq!(directory.all(), before);
    }

    #[test]
    fn removing_missing_id_does_not_notify() {
        let directory = Directory::with_sample_data();
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = calls.clone();
        let _sub = directory.subscribe(move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

        directory.remove(&EmployeeId::new("no-such-id"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        let id = directory.add(draft("Alice Park"));
        directory.remove(&id);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn search_is_case_insensitive_substring_in_order() {
        let directory = Directory::with_sample_data();
        directory.add(draft("Johnny Cash"));

        let hits = directory.search("JOHN");
        let names: Vec<_> = hits.into_iter().map(|e| e.name).collect();
        assert_eq!(names, ["Sarah Johnson", "Johnny Cash"]);
    }

    #[test]
    fn search_misses_return_empty() {
        let directory = Directory::with_sample_data();
        assert!(directory.search("zzzz").is_empty());
    }

    #[test]
    fn empty_query_returns_full_roster() {
        let directory = Directory::with_sample_data();
        assert_eq!(directory.search(""), directory.all());
    }

    #[test]
    fn sample_ids_do_not_collide_with_minted_ids() {
        let directory = Directory::with_sample_data();
        let id = directory.add(draft("Alice Park"));
        assert_eq!(id.as_str(), "5");
        assert_eq!(directory.len(), 5);
    }
}
