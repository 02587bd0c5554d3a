//! Verification repository: numbering, persistence, and the ledger's
//! derived verifications (incoming balances, VAT reports, settlements).
//!
//! Numbering is the one genuinely concurrency-sensitive operation here.
//! Each tenant has a counter row that is incremented with an atomic
//! upsert inside the same database transaction that inserts the
//! verification, so two concurrent creations can never commit the same
//! number. The unique index on `(tenant_id, verification_number)` is the
//! backstop; a violation surfaces as a retryable sequence conflict. A
//! partial unique index on metadata similarly backstops the one-IB-per-
//! year and one-report-per-month singletons.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction,
    DbBackend, DbErr, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, QuerySelect, Set,
    SqlErr, Statement, TransactionTrait,
};
use uuid::Uuid;

use kontera_core::accounts::{AccountDirectory, VAT_LOCKED_ACCOUNTS};
use kontera_core::closing::{roll_incoming_balance, IncomingBalancePolicy, YearVerification};
use kontera_core::ledger::{
    check_balance, check_reserved_metadata, meta, validate_submission, JournalEntry, LedgerError,
    MetadataEntry, ValidationErrors, VerificationDraft,
};
use kontera_core::settlement::{settlement_draft, OrderSettlement};
use kontera_core::vat;
use kontera_shared::types::period::fiscal_year_bounds;
use kontera_shared::types::YearMonth;

use crate::entities::{
    journal_entries, verification_files, verification_metadata, verifications,
};

/// A verification with its journal entries, metadata tags, and files.
#[derive(Debug, Clone)]
pub struct VerificationWithEntries {
    /// Verification header.
    pub verification: verifications::Model,
    /// Journal entries in position order.
    pub entries: Vec<journal_entries::Model>,
    /// Metadata tags.
    pub metadata: Vec<verification_metadata::Model>,
    /// File attachments.
    pub files: Vec<verification_files::Model>,
}

impl VerificationWithEntries {
    /// Returns the journal entries as domain values.
    #[must_use]
    pub fn journal_entries(&self) -> Vec<JournalEntry> {
        self.entries
            .iter()
            .map(|e| JournalEntry {
                account: e.account.unsigned_abs(),
                debit: e.debit,
                credit: e.credit,
            })
            .collect()
    }

    /// Returns the value of the given metadata key, if present.
    #[must_use]
    pub fn metadata_value(&self, key: &str) -> Option<&str> {
        self.metadata
            .iter()
            .find(|m| m.key == key)
            .map(|m| m.value.as_str())
    }
}

/// Verification repository for ledger operations.
#[derive(Debug, Clone)]
pub struct VerificationRepository {
    db: DatabaseConnection,
    directory: AccountDirectory,
    ib_policy: IncomingBalancePolicy,
    sequence_retries: u32,
}

impl VerificationRepository {
    /// Creates a new verification repository with default settings.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            directory: AccountDirectory::new(),
            ib_policy: IncomingBalancePolicy::default(),
            sequence_retries: 3,
        }
    }

    /// Sets the incoming-balance carry-forward policy.
    #[must_use]
    pub fn with_ib_policy(mut self, policy: IncomingBalancePolicy) -> Self {
        self.ib_policy = policy;
        self
    }

    /// Sets how many times a numbering conflict is retried.
    #[must_use]
    pub fn with_sequence_retries(mut self, retries: u32) -> Self {
        self.sequence_retries = retries;
        self
    }

    /// Creates a verification: validates, checks the VAT period lock,
    /// assigns a number, and persists atomically. If this is the fiscal
    /// year's first verification, the year's incoming balance is
    /// materialized alongside it; afterwards the following year's
    /// incoming balance is recomputed if one exists.
    ///
    /// Submissions may not carry the ledger's reserved metadata keys
    /// (`IB`, `vatReport`, `vatRegisteredAtAccount`); those tags are
    /// written only by the ledger's own derived verifications.
    ///
    /// # Errors
    ///
    /// Returns a validation, imbalance, period-lock, sequence-conflict,
    /// or database error.
    pub async fn create(
        &self,
        tenant: Uuid,
        draft: VerificationDraft,
    ) -> Result<VerificationWithEntries, LedgerError> {
        check_reserved_metadata(&draft)?;
        self.create_derived(tenant, draft, None).await
    }

    /// Creation path shared with the ledger's own derived verifications,
    /// which legitimately carry reserved metadata tags. `flag_report`
    /// optionally names a report verification to flag as paid within the
    /// same transaction.
    async fn create_derived(
        &self,
        tenant: Uuid,
        draft: VerificationDraft,
        flag_report: Option<Uuid>,
    ) -> Result<VerificationWithEntries, LedgerError> {
        validate_submission(&draft, &self.directory)?;
        check_balance(&draft.entries)?;
        let date = draft_date(&draft)?;

        self.check_vat_lock(tenant, &draft, date).await?;

        let year = date.year();
        let first_of_year = !self.year_has_verifications(tenant, year).await?;

        let created = self.persist_numbered(tenant, &draft, flag_report).await?;
        if first_of_year {
            self.materialize_incoming_balance(tenant, year).await?;
        }
        self.refresh_next_year_opening(tenant, year).await?;

        Ok(created)
    }

    /// Returns a tenant's verifications for a fiscal year, newest date
    /// first.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub async fn find_by_year(
        &self,
        tenant: Uuid,
        year: i32,
    ) -> Result<Vec<VerificationWithEntries>, LedgerError> {
        let (from, to) = fiscal_year_bounds(year);
        let rows = verifications::Entity::find()
            .filter(verifications::Column::TenantId.eq(tenant))
            .filter(verifications::Column::VerificationDate.gte(from))
            .filter(verifications::Column::VerificationDate.lte(to))
            .order_by_desc(verifications::Column::VerificationDate)
            .order_by_desc(verifications::Column::VerificationNumber)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        self.load_related(rows).await
    }

    /// Returns a tenant's verifications dated within a month, inclusive
    /// of the final day.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub async fn find_by_month(
        &self,
        tenant: Uuid,
        month: YearMonth,
    ) -> Result<Vec<VerificationWithEntries>, LedgerError> {
        let rows = verifications::Entity::find()
            .filter(verifications::Column::TenantId.eq(tenant))
            .filter(verifications::Column::VerificationDate.gte(month.first_day()))
            .filter(verifications::Column::VerificationDate.lte(month.last_day()))
            .order_by_asc(verifications::Column::VerificationNumber)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        self.load_related(rows).await
    }

    /// Returns a tenant's verifications dated within `[from, to]`,
    /// inclusive on both ends.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub async fn find_by_date_range(
        &self,
        tenant: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<VerificationWithEntries>, LedgerError> {
        let rows = verifications::Entity::find()
            .filter(verifications::Column::TenantId.eq(tenant))
            .filter(verifications::Column::VerificationDate.gte(from))
            .filter(verifications::Column::VerificationDate.lte(to))
            .order_by_asc(verifications::Column::VerificationNumber)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        self.load_related(rows).await
    }

    /// Returns a tenant's verifications carrying the given metadata tag.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub async fn find_by_metadata(
        &self,
        tenant: Uuid,
        key: &str,
        value: &str,
    ) -> Result<Vec<VerificationWithEntries>, LedgerError> {
        let rows = verifications::Entity::find()
            .filter(verifications::Column::TenantId.eq(tenant))
            .inner_join(verification_metadata::Entity)
            .filter(verification_metadata::Column::Key.eq(key))
            .filter(verification_metadata::Column::Value.eq(value))
            .order_by_asc(verifications::Column::VerificationNumber)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        self.load_related(rows).await
    }

    /// Fetches a single verification by id.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::NotFound` if the verification does not exist
    /// for this tenant.
    pub async fn get(
        &self,
        tenant: Uuid,
        id: Uuid,
    ) -> Result<VerificationWithEntries, LedgerError> {
        let row = verifications::Entity::find_by_id(id)
            .filter(verifications::Column::TenantId.eq(tenant))
            .one(&self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(LedgerError::NotFound)?;

        let mut loaded = self.load_related(vec![row]).await?;
        loaded.pop().ok_or(LedgerError::NotFound)
    }

    /// Books an order settlement as a four-line verification tagged with
    /// the order id. Rejects a second settlement for the same order.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::DuplicateOrderSettlement` if the order is
    /// already settled, or any error from [`Self::create`].
    pub async fn create_order_settlement(
        &self,
        tenant: Uuid,
        order: OrderSettlement,
    ) -> Result<VerificationWithEntries, LedgerError> {
        let existing = self
            .find_by_metadata(tenant, meta::ORDER_ID, &order.order_id)
            .await?;
        if !existing.is_empty() {
            return Err(LedgerError::DuplicateOrderSettlement(order.order_id));
        }

        self.create(tenant, settlement_draft(&order)).await
    }

    /// Generates the month's VAT settlement verification.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::AlreadyReported` if the month already has a
    /// VAT report, or any error from [`Self::create`].
    pub async fn generate_vat_report(
        &self,
        tenant: Uuid,
        month: YearMonth,
    ) -> Result<VerificationWithEntries, LedgerError> {
        if self.find_vat_report(tenant, month).await?.is_some() {
            return Err(LedgerError::AlreadyReported(month));
        }

        let month_verifications = self.find_by_month(tenant, month).await?;
        let entries: Vec<JournalEntry> = month_verifications
            .iter()
            .flat_map(VerificationWithEntries::journal_entries)
            .collect();

        let summary = vat::summarize(&entries);
        self.create_derived(tenant, vat::settlement_draft(month, &summary), None)
            .await
    }

    /// Registers the payment of a reported month's VAT: books the payment
    /// verification and flags the report so the UI stops offering the
    /// action, both in one transaction. The flag is one-way; repeated
    /// payments for the same month are not rejected.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::VatReportNotFound` if the month has no VAT
    /// report, or any error from [`Self::create`].
    pub async fn mark_vat_paid(
        &self,
        tenant: Uuid,
        month: YearMonth,
        paid_amount: Decimal,
        paid_date: NaiveDate,
        source_account: u32,
    ) -> Result<VerificationWithEntries, LedgerError> {
        let report = self
            .find_vat_report(tenant, month)
            .await?
            .ok_or(LedgerError::VatReportNotFound(month))?;

        let flag_report = report
            .metadata_value(meta::VAT_REGISTERED_AT_ACCOUNT)
            .is_none()
            .then_some(report.verification.id);

        self.create_derived(
            tenant,
            vat::payment_draft(month, paid_amount, paid_date, source_account),
            flag_report,
        )
        .await
    }

    /// Returns the month's VAT report verification, if one exists.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub async fn find_vat_report(
        &self,
        tenant: Uuid,
        month: YearMonth,
    ) -> Result<Option<VerificationWithEntries>, LedgerError> {
        let mut found = self
            .find_by_metadata(tenant, meta::VAT_REPORT, &month.to_string())
            .await?;
        Ok(found.pop())
    }

    /// Inserts or replaces the incoming-balance verification for a year.
    ///
    /// The IB verification is the only one ever mutated after creation:
    /// when present, its journal entries are replaced wholesale. It is
    /// always dated January 1 and may legitimately carry no entries.
    ///
    /// # Errors
    ///
    /// Returns a database error if persistence fails.
    pub async fn upsert_incoming_balance(
        &self,
        tenant: Uuid,
        year: i32,
        entries: Vec<JournalEntry>,
    ) -> Result<VerificationWithEntries, LedgerError> {
        let existing = self
            .find_by_metadata(tenant, meta::INCOMING_BALANCE, &year.to_string())
            .await?;

        if let Some(ib) = existing.into_iter().next() {
            return self.replace_opening_entries(tenant, &ib, &entries).await;
        }

        let (first_day, _) = fiscal_year_bounds(year);
        let draft = VerificationDraft {
            description: format!("Incoming balance {year}"),
            verification_date: Some(first_day),
            entries: entries.clone(),
            metadata: vec![MetadataEntry::new(meta::INCOMING_BALANCE, year.to_string())],
            files: Vec::new(),
        };
        match self.persist_numbered(tenant, &draft, None).await {
            Err(LedgerError::SequenceConflict) => {
                // The partial unique index on (tenant_id, key, value)
                // fired: a concurrent writer materialized this year's
                // opening first. Take over its row instead.
                let ib = self
                    .find_by_metadata(tenant, meta::INCOMING_BALANCE, &year.to_string())
                    .await?
                    .pop()
                    .ok_or(LedgerError::SequenceConflict)?;
                self.replace_opening_entries(tenant, &ib, &entries).await
            }
            other => other,
        }
    }

    /// Replaces an opening-balance verification's entries wholesale.
    async fn replace_opening_entries(
        &self,
        tenant: Uuid,
        ib: &VerificationWithEntries,
        entries: &[JournalEntry],
    ) -> Result<VerificationWithEntries, LedgerError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        journal_entries::Entity::delete_many()
            .filter(journal_entries::Column::VerificationId.eq(ib.verification.id))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;
        insert_entries(&txn, ib.verification.id, entries).await?;

        let mut header = ib.verification.clone().into_active_model();
        header.updated_at = Set(Utc::now().into());
        header.update(&txn).await.map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;
        self.get(tenant, ib.verification.id).await
    }

    /// Recomputes and stores the incoming balance for `year` from the
    /// previous year's verifications.
    async fn materialize_incoming_balance(
        &self,
        tenant: Uuid,
        year: i32,
    ) -> Result<(), LedgerError> {
        let closing_year = year - 1;
        let closing = self.year_verifications_for_roll(tenant, closing_year).await?;
        let entries = roll_incoming_balance(&closing, &self.directory, self.ib_policy);
        self.upsert_incoming_balance(tenant, year, entries).await?;
        Ok(())
    }

    /// If an incoming-balance verification exists for `year + 1`, its
    /// entries are recomputed so the next year's opening stays consistent
    /// with the just-added verification.
    async fn refresh_next_year_opening(&self, tenant: Uuid, year: i32) -> Result<(), LedgerError> {
        let next_year = year + 1;
        let existing = self
            .find_by_metadata(tenant, meta::INCOMING_BALANCE, &next_year.to_string())
            .await?;
        if existing.is_empty() {
            return Ok(());
        }

        let closing = self.year_verifications_for_roll(tenant, year).await?;
        let entries = roll_incoming_balance(&closing, &self.directory, self.ib_policy);
        self.upsert_incoming_balance(tenant, next_year, entries)
            .await?;
        Ok(())
    }

    /// Loads a year's verifications in the shape the closing roller
    /// consumes.
    async fn year_verifications_for_roll(
        &self,
        tenant: Uuid,
        year: i32,
    ) -> Result<Vec<YearVerification>, LedgerError> {
        let year_tag = year.to_string();
        let loaded = self.find_by_year(tenant, year).await?;
        Ok(loaded
            .iter()
            .map(|v| YearVerification {
                is_opening_balance: v.metadata_value(meta::INCOMING_BALANCE)
                    == Some(year_tag.as_str()),
                entries: v.journal_entries(),
            })
            .collect())
    }

    /// Fails if the draft touches VAT-relevant accounts in a month whose
    /// VAT has already been reported. The VAT report itself is exempt.
    async fn check_vat_lock(
        &self,
        tenant: Uuid,
        draft: &VerificationDraft,
        date: NaiveDate,
    ) -> Result<(), LedgerError> {
        if !draft.touches_accounts(&VAT_LOCKED_ACCOUNTS) {
            return Ok(());
        }

        let month = YearMonth::of(date);
        if draft.metadata_value(meta::VAT_REPORT) == Some(month.to_string().as_str()) {
            return Ok(());
        }

        if self.find_vat_report(tenant, month).await?.is_some() {
            return Err(LedgerError::VatPeriodLocked(month));
        }
        Ok(())
    }

    async fn year_has_verifications(&self, tenant: Uuid, year: i32) -> Result<bool, LedgerError> {
        let (from, to) = fiscal_year_bounds(year);
        let found = verifications::Entity::find()
            .filter(verifications::Column::TenantId.eq(tenant))
            .filter(verifications::Column::VerificationDate.gte(from))
            .filter(verifications::Column::VerificationDate.lte(to))
            .limit(1)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(!found.is_empty())
    }

    /// Persists a draft with a freshly assigned number, retrying on
    /// sequence conflicts up to the configured bound.
    async fn persist_numbered(
        &self,
        tenant: Uuid,
        draft: &VerificationDraft,
        flag_report: Option<Uuid>,
    ) -> Result<VerificationWithEntries, LedgerError> {
        let mut attempt = 0u32;
        loop {
            match self.try_persist(tenant, draft, flag_report).await {
                Err(err) if err.is_retryable() && attempt < self.sequence_retries => {
                    attempt += 1;
                    tracing::warn!(
                        %tenant,
                        attempt,
                        "verification numbering conflict, retrying"
                    );
                }
                other => return other,
            }
        }
    }

    /// One persistence attempt: number assignment and all inserts commit
    /// in a single database transaction, so a verification is either
    /// fully stored or not at all.
    async fn try_persist(
        &self,
        tenant: Uuid,
        draft: &VerificationDraft,
        flag_report: Option<Uuid>,
    ) -> Result<VerificationWithEntries, LedgerError> {
        let date = draft_date(draft)?;
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let number = next_number(&txn, tenant).await?;
        let now = Utc::now().into();
        let verification_id = Uuid::new_v4();

        let header = verifications::ActiveModel {
            id: Set(verification_id),
            tenant_id: Set(tenant),
            verification_number: Set(number),
            description: Set(draft.description.clone()),
            verification_date: Set(date),
            created_at: Set(now),
            updated_at: Set(now),
        };
        header.insert(&txn).await.map_err(map_db_err)?;

        insert_entries(&txn, verification_id, &draft.entries).await?;

        for tag in &draft.metadata {
            let row = verification_metadata::ActiveModel {
                id: Set(Uuid::new_v4()),
                tenant_id: Set(tenant),
                verification_id: Set(verification_id),
                key: Set(tag.key.clone()),
                value: Set(tag.value.clone()),
                created_at: Set(now),
            };
            row.insert(&txn).await.map_err(map_db_err)?;
        }

        for file in &draft.files {
            let row = verification_files::ActiveModel {
                id: Set(Uuid::new_v4()),
                verification_id: Set(verification_id),
                name: Set(file.name.clone()),
                path: Set(file.path.clone()),
                created_at: Set(now),
            };
            row.insert(&txn).await.map_err(map_db_err)?;
        }

        // Flagging a report as paid commits with the payment itself, so
        // the ledger never holds a payment without the flag.
        if let Some(report_id) = flag_report {
            let row = verification_metadata::ActiveModel {
                id: Set(Uuid::new_v4()),
                tenant_id: Set(tenant),
                verification_id: Set(report_id),
                key: Set(meta::VAT_REGISTERED_AT_ACCOUNT.to_string()),
                value: Set(meta::FLAG_TRUE.to_string()),
                created_at: Set(now),
            };
            row.insert(&txn).await.map_err(map_db_err)?;
        }

        txn.commit().await.map_err(map_db_err)?;

        self.get(tenant, verification_id).await
    }

    /// Attaches entries, metadata, and files to verification headers.
    async fn load_related(
        &self,
        rows: Vec<verifications::Model>,
    ) -> Result<Vec<VerificationWithEntries>, LedgerError> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<Uuid> = rows.iter().map(|v| v.id).collect();

        let mut entries: HashMap<Uuid, Vec<journal_entries::Model>> = HashMap::new();
        for entry in journal_entries::Entity::find()
            .filter(journal_entries::Column::VerificationId.is_in(ids.clone()))
            .order_by_asc(journal_entries::Column::Position)
            .all(&self.db)
            .await
            .map_err(map_db_err)?
        {
            entries.entry(entry.verification_id).or_default().push(entry);
        }

        let mut metadata: HashMap<Uuid, Vec<verification_metadata::Model>> = HashMap::new();
        for tag in verification_metadata::Entity::find()
            .filter(verification_metadata::Column::VerificationId.is_in(ids.clone()))
            .all(&self.db)
            .await
            .map_err(map_db_err)?
        {
            metadata.entry(tag.verification_id).or_default().push(tag);
        }

        let mut files: HashMap<Uuid, Vec<verification_files::Model>> = HashMap::new();
        for file in verification_files::Entity::find()
            .filter(verification_files::Column::VerificationId.is_in(ids))
            .all(&self.db)
            .await
            .map_err(map_db_err)?
        {
            files.entry(file.verification_id).or_default().push(file);
        }

        Ok(rows
            .into_iter()
            .map(|verification| VerificationWithEntries {
                entries: entries.remove(&verification.id).unwrap_or_default(),
                metadata: metadata.remove(&verification.id).unwrap_or_default(),
                files: files.remove(&verification.id).unwrap_or_default(),
                verification,
            })
            .collect())
    }
}

/// Atomically increments and returns the tenant's verification number.
///
/// The upsert takes a row lock on the tenant's counter, serializing
/// concurrent creations for the same tenant at the database.
async fn next_number(txn: &DatabaseTransaction, tenant: Uuid) -> Result<i64, LedgerError> {
    let stmt = Statement::from_sql_and_values(
        DbBackend::Postgres,
        r"INSERT INTO verification_counters (tenant_id, last_number, updated_at)
          VALUES ($1, 1, now())
          ON CONFLICT (tenant_id)
          DO UPDATE SET last_number = verification_counters.last_number + 1, updated_at = now()
          RETURNING last_number",
        [tenant.into()],
    );

    let row = txn
        .query_one(stmt)
        .await
        .map_err(map_db_err)?
        .ok_or_else(|| LedgerError::Database("counter upsert returned no row".to_string()))?;

    row.try_get("", "last_number").map_err(map_db_err)
}

async fn insert_entries(
    txn: &DatabaseTransaction,
    verification_id: Uuid,
    entries: &[JournalEntry],
) -> Result<(), LedgerError> {
    let now = Utc::now().into();
    for (position, entry) in entries.iter().enumerate() {
        let account = i32::try_from(entry.account)
            .map_err(|_| LedgerError::UnknownAccount(entry.account))?;
        let position = i32::try_from(position)
            .map_err(|_| LedgerError::Database("too many journal entries".to_string()))?;

        let row = journal_entries::ActiveModel {
            id: Set(Uuid::new_v4()),
            verification_id: Set(verification_id),
            position: Set(position),
            account: Set(account),
            debit: Set(entry.debit),
            credit: Set(entry.credit),
            created_at: Set(now),
        };
        row.insert(txn).await.map_err(map_db_err)?;
    }
    Ok(())
}

fn draft_date(draft: &VerificationDraft) -> Result<NaiveDate, LedgerError> {
    draft.verification_date.ok_or_else(|| {
        let mut errors = ValidationErrors::new();
        errors.push("verification_date", "Verification date is required");
        LedgerError::Validation(errors)
    })
}

/// Maps database errors, surfacing unique violations as retryable
/// sequence conflicts.
fn map_db_err(err: DbErr) -> LedgerError {
    if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        LedgerError::SequenceConflict
    } else {
        LedgerError::Database(err.to_string())
    }
}
