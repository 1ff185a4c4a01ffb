//! Ledger service
//!
//! Owns the current ledger snapshot for one owner. Reads go to the store
//! concurrently and replace the snapshot wholesale; every add or delete is
//! followed by a full refresh instead of patching the snapshot in place.

use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::error::{LedgerError, LedgerResult};
use crate::export::{build_report, ReportSink};
use crate::ledger::normalize::{normalize_shared_expense, normalize_transaction};
use crate::ledger::{build_ledger, compute_share, parse_participants, LedgerSnapshot};
use crate::models::{Category, Money, Owner, Transaction, TransactionKind};
use crate::notify::{
    Notifier, EXPORT_FAILED, EXPORT_SUCCEEDED, FETCH_CATEGORIES_FAILED,
    FETCH_TRANSACTIONS_FAILED, TRANSACTION_ADDED, TRANSACTION_ADD_FAILED,
    TRANSACTION_DELETED, TRANSACTION_DELETE_FAILED,
};
use crate::storage::{
    CategoryRow, LedgerStore, NewSharedExpenseRow, NewTransactionRow, PersonalKind,
    SharedExpenseRow, TransactionRow,
};

type Fetched = (Vec<TransactionRow>, Vec<SharedExpenseRow>, Vec<CategoryRow>);

/// Input for adding an income, expense or shared expense
#[derive(Debug, Clone)]
pub struct AddEntryInput {
    pub description: String,
    /// Full amount; for a shared expense the group total
    pub amount: Money,
    pub date: NaiveDate,
    /// Category name or id, resolved against the categories of the entry kind
    pub category: Option<String>,
}

impl AddEntryInput {
    pub fn new(description: impl Into<String>, amount: Money, date: NaiveDate) -> Self {
        Self {
            description: description.into(),
            amount,
            date,
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    fn validate(&self) -> LedgerResult<()> {
        if self.description.trim().is_empty() {
            return Err(LedgerError::Validation("Description cannot be empty".into()));
        }
        if !self.amount.is_finite() {
            return Err(LedgerError::Validation("Amount must be a finite number".into()));
        }
        if self.amount.is_negative() {
            return Err(LedgerError::Validation(format!(
                "Amount cannot be negative: {}",
                self.amount
            )));
        }
        Ok(())
    }
}

/// Service driving the ledger of one owner
pub struct LedgerService {
    store: Arc<dyn LedgerStore>,
    notifier: Arc<dyn Notifier>,
    owner: Owner,
    snapshot: LedgerSnapshot,
    loading: bool,
}

impl LedgerService {
    /// Create a service with an empty snapshot; call `refresh` to load it
    pub fn new(store: Arc<dyn LedgerStore>, notifier: Arc<dyn Notifier>, owner: Owner) -> Self {
        Self {
            store,
            notifier,
            owner,
            snapshot: LedgerSnapshot::empty(),
            loading: false,
        }
    }

    pub fn owner(&self) -> &Owner {
        &self.owner
    }

    pub fn snapshot(&self) -> &LedgerSnapshot {
        &self.snapshot
    }

    /// Merged ledger of the current snapshot, newest first
    pub fn ledger(&self) -> &[Transaction] {
        self.snapshot.transactions()
    }

    /// True only while a refresh is in flight
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    async fn fetch_all(&self) -> Result<Fetched, (&'static str, LedgerError)> {
        let store = self.store.as_ref();
        let owner_id = self.owner.id;
        let email = self.owner.email.as_str();

        tokio::try_join!(
            async {
                store
                    .fetch_transactions(owner_id)
                    .await
                    .map_err(|e| (FETCH_TRANSACTIONS_FAILED, e))
            },
            async {
                store
                    .fetch_shared_expenses(owner_id, email)
                    .await
                    .map_err(|e| (FETCH_TRANSACTIONS_FAILED, e))
            },
            async {
                store
                    .fetch_categories(owner_id)
                    .await
                    .map_err(|e| (FETCH_CATEGORIES_FAILED, e))
            },
        )
    }

    /// Re-fetch everything and replace the snapshot
    ///
    /// Returns the new snapshot version. On a store error the previous
    /// snapshot is kept and the notifier fires. If `cancel` fires first the
    /// fetched rows are discarded and `LedgerError::Cancelled` is returned.
    pub async fn refresh(&mut self, cancel: &CancellationToken) -> LedgerResult<u64> {
        self.loading = true;

        let fetched = tokio::select! {
            biased;
            _ = cancel.cancelled() => None,
            fetched = self.fetch_all() => Some(fetched),
        };

        self.loading = false;

        match fetched {
            None => {
                info!(version = self.snapshot.version(), "refresh cancelled");
                Err(LedgerError::Cancelled)
            }
            Some(Err((title, err))) => {
                warn!(error = %err, "refresh failed, keeping previous snapshot");
                self.notifier.error(title, &err.to_string());
                Err(err)
            }
            Some(Ok((personal, shared, categories))) => {
                let version = self.snapshot.version() + 1;
                let ledger = build_ledger(personal, shared);
                debug!(
                    version,
                    entries = ledger.len(),
                    categories = categories.len(),
                    "ledger refreshed"
                );
                self.snapshot = LedgerSnapshot::new(version, ledger, categories);
                Ok(version)
            }
        }
    }

    /// Refresh after a successful mutation; failures were already notified
    async fn refresh_after_mutation(&mut self) {
        if let Err(e) = self.refresh(&CancellationToken::new()).await {
            warn!(error = %e, "refresh after mutation failed");
        }
    }

    fn resolve_category(
        &self,
        identifier: Option<&str>,
        kind: TransactionKind,
    ) -> LedgerResult<Option<Category>> {
        let Some(identifier) = identifier.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(None);
        };

        self.snapshot
            .category_by_name(identifier, kind)
            .or_else(|| {
                self.snapshot
                    .categories_of(kind)
                    .into_iter()
                    .find(|c| c.id.matches(identifier))
            })
            .cloned()
            .map(Some)
            .ok_or_else(|| LedgerError::category_not_found(identifier))
    }

    async fn insert_personal(
        &self,
        kind: TransactionKind,
        input: AddEntryInput,
    ) -> LedgerResult<Transaction> {
        input.validate()?;
        let category = self.resolve_category(input.category.as_deref(), kind)?;
        let personal_kind = match kind {
            TransactionKind::Income => PersonalKind::Income,
            _ => PersonalKind::Expense,
        };

        let row = self
            .store
            .insert_transaction(NewTransactionRow {
                owner_id: self.owner.id,
                description: input.description.trim().to_string(),
                amount: input.amount.value(),
                date: input.date,
                kind: personal_kind,
                category_id: category.as_ref().map(|c| c.id),
            })
            .await?;

        let mut txn = normalize_transaction(row);
        txn.category = category.map(|c| c.to_ref());
        Ok(txn)
    }

    async fn insert_shared(
        &self,
        input: AddEntryInput,
        raw_participants: &str,
    ) -> LedgerResult<Transaction> {
        input.validate()?;
        let participants = parse_participants(raw_participants, Some(&self.owner));
        if participants.is_empty() {
            return Err(LedgerError::Validation(
                "A shared expense needs at least one other participant".into(),
            ));
        }
        let category = self.resolve_category(input.category.as_deref(), TransactionKind::SharedExpense)?;
        let user_share = compute_share(input.amount, participants.len());

        let row = self
            .store
            .insert_shared_expense(NewSharedExpenseRow {
                owner_id: self.owner.id,
                description: input.description.trim().to_string(),
                amount: input.amount.value(),
                date: input.date,
                category_id: category.as_ref().map(|c| c.id),
                participants,
                user_share: user_share.value(),
            })
            .await?;

        let mut txn = normalize_shared_expense(row);
        txn.category = category.map(|c| c.to_ref());
        Ok(txn)
    }

    async fn finish_add(&mut self, result: LedgerResult<Transaction>) -> LedgerResult<Transaction> {
        match result {
            Ok(txn) => {
                info!(id = %txn.id, kind = %txn.kind(), "entry added");
                self.notifier
                    .success(TRANSACTION_ADDED, "Your transaction has been successfully recorded.");
                self.refresh_after_mutation().await;
                Ok(txn)
            }
            Err(e) => {
                self.notifier.error(TRANSACTION_ADD_FAILED, &e.to_string());
                Err(e)
            }
        }
    }

    pub async fn add_income(&mut self, input: AddEntryInput) -> LedgerResult<Transaction> {
        let result = self.insert_personal(TransactionKind::Income, input).await;
        self.finish_add(result).await
    }

    pub async fn add_expense(&mut self, input: AddEntryInput) -> LedgerResult<Transaction> {
        let result = self.insert_personal(TransactionKind::Expense, input).await;
        self.finish_add(result).await
    }

    /// Add a shared expense split with a comma-separated participant list
    ///
    /// The owner's share is computed once here and stored with the row.
    pub async fn add_shared_expense(
        &mut self,
        input: AddEntryInput,
        raw_participants: &str,
    ) -> LedgerResult<Transaction> {
        let result = self.insert_shared(input, raw_participants).await;
        self.finish_add(result).await
    }

    async fn remove(&self, identifier: &str) -> LedgerResult<Transaction> {
        let txn = self
            .snapshot
            .find(identifier)
            .cloned()
            .ok_or_else(|| LedgerError::transaction_not_found(identifier))?;

        match txn.kind() {
            TransactionKind::SharedExpense => self.store.delete_shared_expense(txn.id).await?,
            TransactionKind::Income | TransactionKind::Expense => {
                self.store.delete_transaction(txn.id).await?
            }
        }
        Ok(txn)
    }

    /// Delete an entry by full or short id, routed to the table of its kind
    pub async fn delete(&mut self, identifier: &str) -> LedgerResult<Transaction> {
        match self.remove(identifier).await {
            Ok(txn) => {
                info!(id = %txn.id, kind = %txn.kind(), "entry deleted");
                self.notifier
                    .success(TRANSACTION_DELETED, "The transaction has been removed.");
                self.refresh_after_mutation().await;
                Ok(txn)
            }
            Err(e) => {
                self.notifier.error(TRANSACTION_DELETE_FAILED, &e.to_string());
                Err(e)
            }
        }
    }

    /// Build the report from the current snapshot and hand it to `sink`
    pub fn export(
        &self,
        sink: &dyn ReportSink,
        destination: &Path,
        date_format: &str,
    ) -> LedgerResult<()> {
        let written = build_report(self.ledger(), date_format)
            .and_then(|workbook| sink.write(&workbook, destination));

        match written {
            Ok(()) => {
                info!(path = %destination.display(), format = ?sink.format(), "report exported");
                self.notifier.success(
                    EXPORT_SUCCEEDED,
                    &format!(
                        "Your financial data has been exported to {}.",
                        destination.display()
                    ),
                );
                Ok(())
            }
            Err(e) => {
                self.notifier.error(EXPORT_FAILED, &e.to_string());
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::LedgerPaths;
    use crate::export::{CsvDirSink, XlsxSink};
    use crate::models::{CategoryKind, Month, MonthMatching, OwnerId, TransactionId};
    use crate::notify::{NotificationKind, RecordingNotifier};
    use crate::reports::{category_totals, monthly_series};
    use crate::storage::JsonStore;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tempfile::TempDir;

    fn jan(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    struct Fixture {
        _temp_dir: TempDir,
        store: Arc<JsonStore>,
        notifier: Arc<RecordingNotifier>,
        service: LedgerService,
    }

    fn fixture() -> Fixture {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = Arc::new(JsonStore::open(paths).unwrap());
        let notifier = Arc::new(RecordingNotifier::new());
        let owner = Owner::new("me@x.com");

        store
            .insert_category(
                Category::new("Food", CategoryKind::Expense, owner.id)
                    .with_display("utensils", "#f97316"),
            )
            .unwrap();
        store
            .insert_category(Category::global("Salary", CategoryKind::Income))
            .unwrap();

        let service = LedgerService::new(store.clone(), notifier.clone(), owner);
        Fixture {
            _temp_dir: temp_dir,
            store,
            notifier,
            service,
        }
    }

    async fn scenario_a(service: &mut LedgerService) {
        service.refresh(&CancellationToken::new()).await.unwrap();
        service
            .add_income(AddEntryInput::new("Salary", Money::new(4200.0), jan(15)).with_category("Salary"))
            .await
            .unwrap();
        service
            .add_expense(AddEntryInput::new("Groceries", Money::new(15.5), jan(15)).with_category("Food"))
            .await
            .unwrap();
        service
            .add_shared_expense(
                AddEntryInput::new("Dinner", Money::new(90.0), jan(10)).with_category("Food"),
                "b@x.com",
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_scenario_a_through_service() {
        let mut fx = fixture();
        scenario_a(&mut fx.service).await;

        let ledger = fx.service.ledger();
        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger[0].description, "Salary");
        assert_eq!(ledger[1].description, "Groceries");
        assert_eq!(ledger[2].user_share(), Some(Money::new(45.0)));

        let month = Month::new(2024, 1).unwrap();
        let totals = category_totals(ledger, month, MonthMatching::CalendarMonth);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].name, "Food");
        assert!(totals[0].value.approx_eq(Money::new(60.5)));

        let series = monthly_series(ledger, jan(31), 6, MonthMatching::CalendarMonth);
        let bucket = series.last().unwrap();
        assert!(bucket.income.approx_eq(Money::new(4200.0)));
        assert!(bucket.expenses.approx_eq(Money::new(15.5)));
        assert!(bucket.shared_expenses.approx_eq(Money::new(45.0)));

        assert_eq!(
            fx.notifier.titles(),
            vec![TRANSACTION_ADDED, TRANSACTION_ADDED, TRANSACTION_ADDED]
        );
    }

    #[tokio::test]
    async fn test_scenario_b_delete_shared_expense() {
        let mut fx = fixture();
        scenario_a(&mut fx.service).await;
        let version_before = fx.service.snapshot().version();

        let shared_id = fx.service.ledger()[2].id;
        let deleted = fx.service.delete(&shared_id.to_string()).await.unwrap();
        assert!(deleted.is_shared());
        assert!(fx.service.snapshot().version() > version_before);

        let month = Month::new(2024, 1).unwrap();
        let totals = category_totals(fx.service.ledger(), month, MonthMatching::CalendarMonth);
        assert!(totals[0].value.approx_eq(Money::new(15.5)));
        assert!(fx.service.ledger().iter().all(|t| !t.is_shared()));

        let rows = fx
            .store
            .fetch_shared_expenses(fx.service.owner().id, "me@x.com")
            .await
            .unwrap();
        assert!(rows.is_empty());
        assert_eq!(fx.notifier.last().unwrap().title, TRANSACTION_DELETED);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_notifies() {
        let mut fx = fixture();
        fx.service.refresh(&CancellationToken::new()).await.unwrap();

        let err = fx.service.delete("txn-deadbeef").await.unwrap_err();
        assert!(err.is_not_found());
        let last = fx.notifier.last().unwrap();
        assert_eq!(last.kind, NotificationKind::Error);
        assert_eq!(last.title, TRANSACTION_DELETE_FAILED);
    }

    #[tokio::test]
    async fn test_add_validation() {
        let mut fx = fixture();
        fx.service.refresh(&CancellationToken::new()).await.unwrap();

        let err = fx
            .service
            .add_expense(AddEntryInput::new("Refund?", Money::new(-5.0), jan(1)))
            .await
            .unwrap_err();
        assert!(err.is_validation());

        let err = fx
            .service
            .add_expense(AddEntryInput::new("Odd", Money::new(f64::INFINITY), jan(1)))
            .await
            .unwrap_err();
        assert!(err.is_validation());

        let err = fx
            .service
            .add_income(AddEntryInput::new("Salary", Money::new(1.0), jan(1)).with_category("Food"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());

        let err = fx
            .service
            .add_shared_expense(AddEntryInput::new("Solo", Money::new(10.0), jan(1)), " , me@x.com")
            .await
            .unwrap_err();
        assert!(err.is_validation());

        assert!(fx.service.ledger().is_empty());
        assert_eq!(fx.notifier.titles().len(), 4);
        assert!(fx
            .notifier
            .titles()
            .iter()
            .all(|t| t == TRANSACTION_ADD_FAILED));
    }

    #[tokio::test]
    async fn test_shared_share_is_computed_and_stored() {
        let mut fx = fixture();
        fx.service.refresh(&CancellationToken::new()).await.unwrap();

        let txn = fx
            .service
            .add_shared_expense(
                AddEntryInput::new("Cabin", Money::new(100.0), jan(20)),
                "b@x.com, c@x.com, b@x.com",
            )
            .await
            .unwrap();

        assert_eq!(txn.participants().len(), 2);
        let share = txn.user_share().unwrap();
        assert!((share.value() * 3.0 - 100.0).abs() < 1e-9);
        assert_eq!(fx.service.ledger()[0].user_share(), Some(share));
    }

    /// Store double whose reads fail on demand
    struct FailingStore {
        fail_transactions: AtomicBool,
        fail_categories: AtomicBool,
    }

    impl FailingStore {
        fn new() -> Self {
            Self {
                fail_transactions: AtomicBool::new(false),
                fail_categories: AtomicBool::new(false),
            }
        }

        fn check(flag: &AtomicBool) -> LedgerResult<()> {
            if flag.load(Ordering::SeqCst) {
                Err(LedgerError::Store("connection refused".into()))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl LedgerStore for FailingStore {
        async fn fetch_transactions(&self, _owner_id: OwnerId) -> LedgerResult<Vec<TransactionRow>> {
            Self::check(&self.fail_transactions)?;
            Ok(vec![NewTransactionRow {
                owner_id: OwnerId::new(),
                description: "Coffee".into(),
                amount: 3.5,
                date: jan(2),
                kind: PersonalKind::Expense,
                category_id: None,
            }
            .into_row(TransactionId::new())])
        }

        async fn fetch_shared_expenses(
            &self,
            _owner_id: OwnerId,
            _owner_email: &str,
        ) -> LedgerResult<Vec<SharedExpenseRow>> {
            Self::check(&self.fail_transactions)?;
            Ok(Vec::new())
        }

        async fn fetch_categories(&self, _owner_id: OwnerId) -> LedgerResult<Vec<CategoryRow>> {
            Self::check(&self.fail_categories)?;
            Ok(Vec::new())
        }

        async fn insert_transaction(&self, _row: NewTransactionRow) -> LedgerResult<TransactionRow> {
            Err(LedgerError::Store("read-only".into()))
        }

        async fn insert_shared_expense(
            &self,
            _row: NewSharedExpenseRow,
        ) -> LedgerResult<SharedExpenseRow> {
            Err(LedgerError::Store("read-only".into()))
        }

        async fn delete_transaction(&self, _id: TransactionId) -> LedgerResult<()> {
            Err(LedgerError::Store("read-only".into()))
        }

        async fn delete_shared_expense(&self, _id: TransactionId) -> LedgerResult<()> {
            Err(LedgerError::Store("read-only".into()))
        }
    }

    #[tokio::test]
    async fn test_fetch_failure_keeps_snapshot() {
        let store = Arc::new(FailingStore::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let mut service = LedgerService::new(store.clone(), notifier.clone(), Owner::new("me@x.com"));

        assert_eq!(service.refresh(&CancellationToken::new()).await.unwrap(), 1);
        assert_eq!(service.ledger().len(), 1);

        store.fail_transactions.store(true, Ordering::SeqCst);
        let err = service.refresh(&CancellationToken::new()).await.unwrap_err();
        assert!(matches!(err, LedgerError::Store(_)));
        assert_eq!(service.snapshot().version(), 1);
        assert_eq!(service.ledger().len(), 1);
        assert!(!service.is_loading());
        assert_eq!(notifier.last().unwrap().title, FETCH_TRANSACTIONS_FAILED);

        store.fail_transactions.store(false, Ordering::SeqCst);
        store.fail_categories.store(true, Ordering::SeqCst);
        service.refresh(&CancellationToken::new()).await.unwrap_err();
        assert_eq!(notifier.last().unwrap().title, FETCH_CATEGORIES_FAILED);
        assert_eq!(service.snapshot().version(), 1);
    }

    #[tokio::test]
    async fn test_store_write_failure_notifies() {
        let notifier = Arc::new(RecordingNotifier::new());
        let mut service = LedgerService::new(
            Arc::new(FailingStore::new()),
            notifier.clone(),
            Owner::new("me@x.com"),
        );
        service.refresh(&CancellationToken::new()).await.unwrap();

        let err = service
            .add_expense(AddEntryInput::new("Tea", Money::new(2.0), jan(3)))
            .await
            .unwrap_err();
        assert!(matches!(err, LedgerError::Store(_)));
        assert_eq!(notifier.last().unwrap().title, TRANSACTION_ADD_FAILED);

        let id = service.ledger()[0].id.to_string();
        service.delete(&id).await.unwrap_err();
        assert_eq!(notifier.last().unwrap().title, TRANSACTION_DELETE_FAILED);
        assert_eq!(service.ledger().len(), 1);
    }

    /// Store double whose reads never complete
    struct PendingStore;

    #[async_trait]
    impl LedgerStore for PendingStore {
        async fn fetch_transactions(&self, _owner_id: OwnerId) -> LedgerResult<Vec<TransactionRow>> {
            std::future::pending().await
        }

        async fn fetch_shared_expenses(
            &self,
            _owner_id: OwnerId,
            _owner_email: &str,
        ) -> LedgerResult<Vec<SharedExpenseRow>> {
            std::future::pending().await
        }

        async fn fetch_categories(&self, _owner_id: OwnerId) -> LedgerResult<Vec<CategoryRow>> {
            std::future::pending().await
        }

        async fn insert_transaction(&self, _row: NewTransactionRow) -> LedgerResult<TransactionRow> {
            std::future::pending().await
        }

        async fn insert_shared_expense(
            &self,
            _row: NewSharedExpenseRow,
        ) -> LedgerResult<SharedExpenseRow> {
            std::future::pending().await
        }

        async fn delete_transaction(&self, _id: TransactionId) -> LedgerResult<()> {
            std::future::pending().await
        }

        async fn delete_shared_expense(&self, _id: TransactionId) -> LedgerResult<()> {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn test_cancelled_refresh_leaves_snapshot() {
        let notifier = Arc::new(RecordingNotifier::new());
        let mut service =
            LedgerService::new(Arc::new(PendingStore), notifier.clone(), Owner::new("me@x.com"));

        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::task::yield_now().await;
            trigger.cancel();
        });

        let err = service.refresh(&cancel).await.unwrap_err();
        assert!(matches!(err, LedgerError::Cancelled));
        assert_eq!(service.snapshot().version(), 0);
        assert!(!service.is_loading());
        assert!(notifier.notifications().is_empty());
    }

    #[tokio::test]
    async fn test_export_notifies_both_ways() {
        let mut fx = fixture();
        scenario_a(&mut fx.service).await;
        let out = TempDir::new().unwrap();

        let path = out.path().join("financial-report-2024-01-31.xlsx");
        fx.service.export(&XlsxSink, &path, "%m/%d/%Y").unwrap();
        assert!(path.exists());
        assert_eq!(fx.notifier.last().unwrap().title, EXPORT_SUCCEEDED);

        let csv_dir = out.path().join("financial-report-2024-01-31");
        fx.service.export(&CsvDirSink, &csv_dir, "%m/%d/%Y").unwrap();
        assert!(csv_dir.join("shared-expenses.csv").exists());

        let blocked = out.path().join("missing").join("report.xlsx");
        let err = fx.service.export(&XlsxSink, &blocked, "%m/%d/%Y").unwrap_err();
        assert!(err.is_export());
        assert_eq!(fx.notifier.last().unwrap().title, EXPORT_FAILED);
        assert_eq!(fx.service.ledger().len(), 3);
    }

    #[tokio::test]
    async fn test_export_with_bad_date_format_fails_cleanly() {
        let mut fx = fixture();
        scenario_a(&mut fx.service).await;
        let out = TempDir::new().unwrap();
        let path = out.path().join("report.xlsx");

        let err = fx.service.export(&XlsxSink, &path, "%Q").unwrap_err();
        assert!(err.is_export());
        assert!(!path.exists());
        assert_eq!(fx.notifier.last().unwrap().title, EXPORT_FAILED);
    }
}
