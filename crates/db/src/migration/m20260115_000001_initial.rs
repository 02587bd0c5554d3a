//! Initial database migration.
//!
//! Creates the ledger tables: verifications, journal entries, metadata
//! tags, file attachments, and the per-tenant numbering counters.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(VERIFICATIONS_SQL).await?;
        db.execute_unprepared(JOURNAL_ENTRIES_SQL).await?;
        db.execute_unprepared(VERIFICATION_METADATA_SQL).await?;
        db.execute_unprepared(VERIFICATION_FILES_SQL).await?;
        db.execute_unprepared(VERIFICATION_COUNTERS_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(
            r"
            DROP TABLE IF EXISTS verification_counters;
            DROP TABLE IF EXISTS verification_files;
            DROP TABLE IF EXISTS verification_metadata;
            DROP TABLE IF EXISTS journal_entries;
            DROP TABLE IF EXISTS verifications;
            ",
        )
        .await?;

        Ok(())
    }
}

const VERIFICATIONS_SQL: &str = r"
CREATE TABLE verifications (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    tenant_id UUID NOT NULL,
    verification_number BIGINT NOT NULL,
    description TEXT NOT NULL,
    verification_date DATE NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    UNIQUE (tenant_id, verification_number)
);

CREATE INDEX idx_verifications_tenant_date ON verifications(tenant_id, verification_date);
";

const JOURNAL_ENTRIES_SQL: &str = r"
CREATE TABLE journal_entries (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    verification_id UUID NOT NULL REFERENCES verifications(id) ON DELETE CASCADE,
    position INTEGER NOT NULL,
    account INTEGER NOT NULL,
    debit NUMERIC(19, 4) NOT NULL DEFAULT 0,
    credit NUMERIC(19, 4) NOT NULL DEFAULT 0,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CHECK (debit >= 0 AND credit >= 0)
);

CREATE INDEX idx_journal_entries_verification ON journal_entries(verification_id);
CREATE INDEX idx_journal_entries_account ON journal_entries(account);
";

const VERIFICATION_METADATA_SQL: &str = r#"
CREATE TABLE verification_metadata (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    tenant_id UUID NOT NULL,
    verification_id UUID NOT NULL REFERENCES verifications(id) ON DELETE CASCADE,
    key VARCHAR(100) NOT NULL,
    value VARCHAR(500) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_verification_metadata_verification ON verification_metadata(verification_id);
CREATE INDEX idx_verification_metadata_lookup ON verification_metadata(tenant_id, key, value);

-- A tenant gets at most one opening balance per year and one VAT report
-- per month; the index backstops the find-then-insert paths.
CREATE UNIQUE INDEX uq_verification_metadata_singleton
    ON verification_metadata(tenant_id, key, value)
    WHERE key IN ('IB', 'vatReport');
"#;

const VERIFICATION_FILES_SQL: &str = r"
CREATE TABLE verification_files (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    verification_id UUID NOT NULL REFERENCES verifications(id) ON DELETE CASCADE,
    name VARCHAR(255) NOT NULL,
    path VARCHAR(1000) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_verification_files_verification ON verification_files(verification_id);
";

const VERIFICATION_COUNTERS_SQL: &str = r"
CREATE TABLE verification_counters (
    tenant_id UUID PRIMARY KEY,
    last_number BIGINT NOT NULL DEFAULT 0,
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
";
