//! Page controller shared by the register pages.
//!
//! Every mutation is one request followed, on success, by a full refetch of
//! the collection. Failures are logged and otherwise leave the state exactly
//! as it was: no retry, no rollback, no error surfaced in the UI. Repeated
//! submits are not de-duplicated; overlapping requests are possible.

use crate::shared::api_client::ApiError;
use async_trait::async_trait;
use leptos::prelude::*;

/// Backend resource holding one kind of record
#[async_trait(?Send)]
pub trait RecordApi {
    type Record: Clone + Send + Sync + 'static;
    type Draft: Clone + Default + Send + Sync + 'static;

    /// Used in log lines
    const NAME: &'static str;

    async fn list(&self) -> Result<Vec<Self::Record>, ApiError>;

    async fn create(&self, draft: &Self::Draft) -> Result<(), ApiError>;

    async fn update(&self, record: &Self::Record) -> Result<(), ApiError>;

    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}

/// Mutations a data table can ask its page to perform
#[async_trait(?Send)]
pub trait RecordMutator<T> {
    async fn delete(&self, id: String) -> Result<(), ApiError>;

    async fn update(&self, record: T) -> Result<(), ApiError>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Fetching,
    Submitting,
}

#[derive(Clone, Debug)]
pub struct RegisterState<R, D> {
    pub items: Vec<R>,
    /// Create form contents
    pub draft: D,
    pub phase: Phase,
}

impl<R, D: Default> Default for RegisterState<R, D> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            draft: D::default(),
            phase: Phase::Idle,
        }
    }
}

pub struct RegisterController<A: RecordApi> {
    api: A,
    pub state: RwSignal<RegisterState<A::Record, A::Draft>>,
    /// Visibility of the create drawer
    pub create_open: RwSignal<bool>,
}

// Only `A` needs to be `Copy`; the signals always are
impl<A: RecordApi + Clone> Clone for RegisterController<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            state: self.state,
            create_open: self.create_open,
        }
    }
}

impl<A: RecordApi + Copy> Copy for RegisterController<A> {}

impl<A: RecordApi> RegisterController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: RwSignal::new(RegisterState::default()),
            create_open: RwSignal::new(false),
        }
    }

    pub fn items(&self) -> Signal<Vec<A::Record>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.items.clone()))
    }

    pub fn set_create_open(&self, open: bool) {
        self.create_open.set(open);
    }

    pub fn is_busy(&self) -> bool {
        self.state.with(|s| s.phase != Phase::Idle)
    }

    pub fn edit_draft(&self, f: impl FnOnce(&mut A::Draft)) {
        self.state.update(|s| f(&mut s.draft));
    }

    fn set_phase(&self, phase: Phase) {
        self.state.update(|s| s.phase = phase);
    }

    /// Fetches the whole collection and replaces the current list
    pub async fn load(&self) -> Result<(), ApiError> {
        self.set_phase(Phase::Fetching);
        match self.api.list().await {
            Ok(items) => {
                log::debug!("{}: loaded {} record(s)", A::NAME, items.len());
                self.state.update(|s| {
                    s.items = items;
                    s.phase = Phase::Idle;
                });
                Ok(())
            }
            Err(e) => {
                log::error!("{}: failed to load list: {}", A::NAME, e);
                self.set_phase(Phase::Idle);
                Err(e)
            }
        }
    }

    /// Sends the create form. On success the form closes, resets and the
    /// list is refetched; on failure the form stays open with its contents.
    pub async fn create(&self) -> Result<(), ApiError> {
        let draft = self.state.with_untracked(|s| s.draft.clone());
        self.set_phase(Phase::Submitting);
        if let Err(e) = self.api.create(&draft).await {
            log::error!("{}: failed to create record: {}", A::NAME, e);
            self.set_phase(Phase::Idle);
            return Err(e);
        }
        self.create_open.set(false);
        self.state.update(|s| s.draft = A::Draft::default());
        self.load().await
    }
}

#[async_trait(?Send)]
impl<A: RecordApi> RecordMutator<A::Record> for RegisterController<A> {
    async fn delete(&self, id: String) -> Result<(), ApiError> {
        self.set_phase(Phase::Submitting);
        if let Err(e) = self.api.delete(&id).await {
            log::error!("{}: failed to delete {}: {}", A::NAME, id, e);
            self.set_phase(Phase::Idle);
            return Err(e);
        }
        self.load().await
    }

    async fn update(&self, record: A::Record) -> Result<(), ApiError> {
        self.set_phase(Phase::Submitting);
        if let Err(e) = self.api.update(&record).await {
            log::error!("{}: failed to update record: {}", A::NAME, e);
            self.set_phase(Phase::Idle);
            return Err(e);
        }
        self.load().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Debug, PartialEq)]
    struct Rec {
        id: String,
        name: String,
    }

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Draft {
        name: String,
    }

    #[derive(Default)]
    struct Backend {
        records: Vec<Rec>,
        next_id: u32,
        fail: bool,
        list_calls: usize,
        mutation_calls: usize,
    }

    #[derive(Clone, Default)]
    struct FakeApi(Rc<RefCell<Backend>>);

    impl FakeApi {
        fn with_records(names: &[&str]) -> Self {
            let api = FakeApi::default();
            for name in names {
                let mut b = api.0.borrow_mut();
                b.next_id += 1;
                let id = b.next_id.to_string();
                b.records.push(Rec {
                    id,
                    name: name.to_string(),
                });
            }
            api
        }

        fn fail(&self, fail: bool) {
            self.0.borrow_mut().fail = fail;
        }

        fn list_calls(&self) -> usize {
            self.0.borrow().list_calls
        }

        fn mutation_calls(&self) -> usize {
            self.0.borrow().mutation_calls
        }

        fn check(&self) -> Result<(), ApiError> {
            let mut b = self.0.borrow_mut();
            b.mutation_calls += 1;
            if b.fail {
                Err(ApiError::Network("connection refused".into()))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait(?Send)]
    impl RecordApi for FakeApi {
        type Record = Rec;
        type Draft = Draft;

        const NAME: &'static str = "fake";

        async fn list(&self) -> Result<Vec<Rec>, ApiError> {
            let mut b = self.0.borrow_mut();
            b.list_calls += 1;
            if b.fail {
                return Err(ApiError::Status(500));
            }
            Ok(b.records.clone())
        }

        async fn create(&self, draft: &Draft) -> Result<(), ApiError> {
            self.check()?;
            let mut b = self.0.borrow_mut();
            b.next_id += 1;
            let id = b.next_id.to_string();
            b.records.push(Rec {
                id,
                name: draft.name.clone(),
            });
            Ok(())
        }

        async fn update(&self, record: &Rec) -> Result<(), ApiError> {
            self.check()?;
            let mut b = self.0.borrow_mut();
            if let Some(r) = b.records.iter_mut().find(|r| r.id == record.id) {
                *r = record.clone();
            }
            Ok(())
        }

        async fn delete(&self, id: &str) -> Result<(), ApiError> {
            self.check()?;
            self.0.borrow_mut().records.retain(|r| r.id != id);
            Ok(())
        }
    }

    fn names(ctrl: &RegisterController<FakeApi>) -> Vec<String> {
        ctrl.state
            .with_untracked(|s| s.items.iter().map(|r| r.name.clone()).collect())
    }

    fn setup(names: &[&str]) -> (Owner, FakeApi, RegisterController<FakeApi>) {
        let owner = Owner::new();
        owner.set();
        let api = FakeApi::with_records(names);
        let ctrl = RegisterController::new(api.clone());
        (owner, api, ctrl)
    }

    #[derive(Clone, Copy, Default)]
    struct StatelessApi;

    #[async_trait(?Send)]
    impl RecordApi for StatelessApi {
        type Record = Rec;
        type Draft = Draft;

        const NAME: &'static str = "stateless";

        async fn list(&self) -> Result<Vec<Rec>, ApiError> {
            Ok(vec![Rec {
                id: "1".into(),
                name: "Bolt".into(),
            }])
        }

        async fn create(&self, _draft: &Draft) -> Result<(), ApiError> {
            Ok(())
        }

        async fn update(&self, _record: &Rec) -> Result<(), ApiError> {
            Ok(())
        }

        async fn delete(&self, _id: &str) -> Result<(), ApiError> {
            Ok(())
        }
    }

    fn copy_of<T: Copy>(value: &T) -> T {
        *value
    }

    #[test]
    fn test_controller_over_copy_api_is_copy() {
        let owner = Owner::new();
        owner.set();
        let ctrl = RegisterController::new(StatelessApi);
        let first = copy_of(&ctrl);
        let second = ctrl;
        block_on(first.load()).unwrap();
        assert_eq!(
            second.state.with_untracked(|s| s.items.len()),
            1,
            "copies share the same signals"
        );
        assert_eq!(ctrl.state.with_untracked(|s| s.items[0].name.clone()), "Bolt");
    }

    #[test]
    fn test_load_replaces_items() {
        let (_owner, api, ctrl) = setup(&["Bolt", "Nut"]);
        block_on(ctrl.load()).unwrap();
        assert_eq!(names(&ctrl), vec!["Bolt", "Nut"]);
        assert_eq!(api.list_calls(), 1);
        assert_eq!(ctrl.state.with_untracked(|s| s.phase), Phase::Idle);
    }

    #[test]
    fn test_failed_load_keeps_previous_items() {
        let (_owner, api, ctrl) = setup(&["Bolt"]);
        block_on(ctrl.load()).unwrap();

        api.fail(true);
        assert!(block_on(ctrl.load()).is_err());
        assert_eq!(names(&ctrl), vec!["Bolt"]);
        assert_eq!(ctrl.state.with_untracked(|s| s.phase), Phase::Idle);
    }

    #[test]
    fn test_create_closes_form_and_refetches() {
        let (_owner, api, ctrl) = setup(&["Bolt"]);
        block_on(ctrl.load()).unwrap();

        ctrl.set_create_open(true);
        ctrl.edit_draft(|d| d.name = "Washer".into());
        block_on(ctrl.create()).unwrap();

        assert_eq!(api.list_calls(), 2);
        assert_eq!(names(&ctrl), vec!["Bolt", "Washer"]);
        assert!(!ctrl.create_open.get_untracked());
        ctrl.state
            .with_untracked(|s| assert_eq!(s.draft, Draft::default()));
    }

    #[test]
    fn test_failed_create_keeps_form_and_skips_refetch() {
        let (_owner, api, ctrl) = setup(&["Bolt"]);
        block_on(ctrl.load()).unwrap();

        ctrl.set_create_open(true);
        ctrl.edit_draft(|d| d.name = "Washer".into());
        api.fail(true);
        assert!(block_on(ctrl.create()).is_err());

        assert_eq!(api.list_calls(), 1);
        assert_eq!(names(&ctrl), vec!["Bolt"]);
        assert!(ctrl.create_open.get_untracked());
        ctrl.state.with_untracked(|s| {
            assert_eq!(s.draft.name, "Washer");
            assert_eq!(s.phase, Phase::Idle);
        });
    }

    #[test]
    fn test_update_refetches_on_success_only() {
        let (_owner, api, ctrl) = setup(&["Bolt"]);
        block_on(ctrl.load()).unwrap();

        let renamed = Rec {
            id: "1".into(),
            name: "Hex bolt".into(),
        };
        api.fail(true);
        assert!(block_on(RecordMutator::update(&ctrl, renamed.clone())).is_err());
        assert_eq!(api.list_calls(), 1);
        assert_eq!(names(&ctrl), vec!["Bolt"]);

        api.fail(false);
        block_on(RecordMutator::update(&ctrl, renamed)).unwrap();
        assert_eq!(api.list_calls(), 2);
        assert_eq!(names(&ctrl), vec!["Hex bolt"]);
    }

    #[test]
    fn test_delete_refetches_on_success_only() {
        let (_owner, api, ctrl) = setup(&["Bolt", "Nut"]);
        block_on(ctrl.load()).unwrap();

        api.fail(true);
        assert!(block_on(RecordMutator::delete(&ctrl, "1".into())).is_err());
        assert_eq!(names(&ctrl), vec!["Bolt", "Nut"]);

        api.fail(false);
        block_on(RecordMutator::delete(&ctrl, "1".into())).unwrap();
        assert_eq!(names(&ctrl), vec!["Nut"]);
        assert_eq!(api.mutation_calls(), 2);
    }
}
