use dsc_core::backend::{BackendError, DatasetBackend};
use dsc_core::dataset::{DatasetId, Record};
use dsc_core::selector::{
    DatasetChartSelector, SelectorState, MSG_FETCH_DATASETS, MSG_NO_DATA, MSG_ONLY_CSV,
};
use dsc_core::series::Series;
use dsc_core::upload::{UploadFile, UploadReceipt};
use serde_json::json;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::time::Duration;

/// In-memory stand-in for the storage backend.
#[derive(Default)]
struct FakeBackend {
    datasets: RefCell<Vec<String>>,
    tables: HashMap<String, Vec<Record>>,
    delays_ms: HashMap<String, u64>,
    listing_down: bool,
    requests: Cell<usize>,
    uploads: RefCell<Vec<String>>,
}

impl FakeBackend {
    fn with_table(mut self, name: &str, rows: serde_json::Value) -> Self {
        self.datasets.borrow_mut().push(name.to_string());
        self.tables
            .insert(name.to_string(), serde_json::from_value(rows).unwrap());
        self
    }

    fn with_delay(mut self, name: &str, ms: u64) -> Self {
        self.delays_ms.insert(name.to_string(), ms);
        self
    }
}

impl DatasetBackend for FakeBackend {
    async fn list_datasets(&self) -> Result<Vec<String>, BackendError> {
        self.requests.set(self.requests.get() + 1);
        if self.listing_down {
            return Err(BackendError::Transport("connection refused".into()));
        }
        Ok(self.datasets.borrow().clone())
    }

    async fn fetch_rows(&self, id: &DatasetId) -> Result<Vec<Record>, BackendError> {
        self.requests.set(self.requests.get() + 1);
        if let Some(ms) = self.delays_ms.get(id.as_str()) {
            tokio::time::sleep(Duration::from_millis(*ms)).await;
        }
        self.tables
            .get(id.as_str())
            .cloned()
            .ok_or(BackendError::Status {
                status: 404,
                message: Some("File not found".into()),
            })
    }

    async fn upload(&self, file: &UploadFile) -> Result<UploadReceipt, BackendError> {
        self.requests.set(self.requests.get() + 1);
        self.uploads.borrow_mut().push(file.name.clone());
        self.datasets.borrow_mut().push(file.name.clone());
        Ok(UploadReceipt {
            filename: Some(file.name.clone()),
            summary: json!({"x": {"count": 2.0, "mean": 2.0}}),
        })
    }
}

#[tokio::test]
async fn startup_listing_keeps_response_order() {
    let backend = FakeBackend::default()
        .with_table("c.csv", json!([]))
        .with_table("a.csv", json!([]))
        .with_table("b.csv", json!([]));
    let mut selector = DatasetChartSelector::new(backend);
    selector.refresh_datasets().await;
    assert_eq!(selector.state().datasets(), ["c.csv", "a.csv", "b.csv"]);
    assert_eq!(selector.state().error(), None);
}

#[tokio::test]
async fn listing_failure_leaves_directory_empty() {
    let backend = FakeBackend {
        listing_down: true,
        ..FakeBackend::default()
    };
    let mut selector = DatasetChartSelector::new(backend);
    selector.refresh_datasets().await;
    assert!(selector.state().datasets().is_empty());
    assert_eq!(selector.state().error(), Some(MSG_FETCH_DATASETS));
}

#[tokio::test]
async fn select_then_plot() {
    let backend = FakeBackend::default().with_table(
        "ab.csv",
        json!([{"a": "1", "b": "2"}, {"a": "3", "b": "4"}]),
    );
    let mut selector = DatasetChartSelector::new(backend);
    selector.refresh_datasets().await;
    selector.select_dataset("ab.csv").await;
    assert_eq!(selector.state().columns(), ["a", "b"]);

    selector.state_mut().set_x_column("a");
    selector.state_mut().set_y_column("b");
    let Some(Series::Numeric(series)) = selector.state().chart_series() else {
        panic!("expected a numeric series");
    };
    assert_eq!(series.label, "b vs a");
    assert_eq!(series.labels, vec![1.0, 3.0]);
    assert_eq!(series.values, vec![2.0, 4.0]);
}

#[tokio::test]
async fn empty_dataset_produces_no_columns() {
    let backend = FakeBackend::default().with_table("empty.csv", json!([]));
    let mut selector = DatasetChartSelector::new(backend);
    selector.select_dataset("empty.csv").await;
    assert_eq!(selector.state().error(), Some(MSG_NO_DATA));
    assert!(selector.state().columns().is_empty());
    assert!(selector.state().rows().is_none());
}

#[tokio::test]
async fn placeholder_selection_makes_no_request() {
    let mut selector = DatasetChartSelector::new(FakeBackend::default());
    selector.select_dataset("").await;
    assert_eq!(selector.backend().requests.get(), 0);
}

#[tokio::test]
async fn last_resolving_load_wins() {
    let backend = FakeBackend::default()
        .with_table("slow.csv", json!([{"s": 1}]))
        .with_table("fast.csv", json!([{"f": 1}]))
        .with_delay("slow.csv", 60)
        .with_delay("fast.csv", 5);

    let mut state = SelectorState::new();
    let slow = state.select_dataset("slow.csv").unwrap();
    let fast = state.select_dataset("fast.csv").unwrap();

    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    tokio::join!(
        async {
            let result = backend.fetch_rows(&slow).await;
            tx.send((slow.clone(), result)).unwrap();
        },
        async {
            let result = backend.fetch_rows(&fast).await;
            tx.send((fast.clone(), result)).unwrap();
        },
    );
    drop(tx);

    while let Some((id, result)) = rx.recv().await {
        state.apply_rows(&id, result);
    }

    // the newer selection resolved first and was then overwritten
    assert_eq!(state.selected_dataset(), Some(&fast));
    assert_eq!(state.columns(), ["s"]);
    assert_eq!(state.error(), None);
}

#[tokio::test]
async fn non_csv_upload_never_reaches_backend() {
    let mut selector = DatasetChartSelector::new(FakeBackend::default());
    selector
        .state_mut()
        .choose_file(Some(UploadFile::new("notes.txt", "text/plain", b"hi".to_vec())));
    assert_eq!(selector.state().error(), Some(MSG_ONLY_CSV));

    assert!(!selector.upload().await);
    assert_eq!(selector.backend().requests.get(), 0);
}

#[tokio::test]
async fn successful_upload_refreshes_directory() {
    let mut selector = DatasetChartSelector::new(FakeBackend::default());
    selector.refresh_datasets().await;
    assert!(selector.state().datasets().is_empty());

    selector.state_mut().choose_file(Some(UploadFile::new(
        "new.csv",
        "text/csv",
        b"x\n1\n3\n".to_vec(),
    )));
    assert!(selector.upload().await);

    assert_eq!(*selector.backend().uploads.borrow(), ["new.csv"]);
    assert_eq!(selector.state().datasets(), ["new.csv"]);
    assert!(!selector.state().is_uploading());
    assert_eq!(
        selector.state().summary(),
        Some(&json!({"x": {"count": 2.0, "mean": 2.0}}))
    );
}
