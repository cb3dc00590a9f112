// src/services/billing_service.rs

use chrono::NaiveDate;
use sqlx::{Acquire, Executor, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::BillingRepository,
    models::billing::{DocumentStatus, InvoiceDetail, QuotationDetail},
    services::totals::{self, LineItemInput},
};

/// Regras de faturamento, compartilhadas entre faturas e orçamentos:
/// os totais armazenados saem sempre da mesma calculadora (`totals`),
/// tanto na criação quanto na substituição de itens.
#[derive(Clone)]
pub struct BillingService {
    repo: BillingRepository,
}

impl BillingService {
    pub fn new(repo: BillingRepository) -> Self {
        Self { repo }
    }

    // =========================================================================
    //  FATURAS
    // =========================================================================

    pub async fn list_invoices(
        &self,
        client_id: Option<Uuid>,
    ) -> Result<Vec<crate::models::billing::Invoice>, AppError> {
        self.repo.list_invoices(client_id).await
    }

    pub async fn get_invoice<'e, E>(&self, executor: E, id: Uuid) -> Result<InvoiceDetail, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let invoice = self
            .repo
            .find_invoice(id)
            .await?
            .ok_or(AppError::NotFound("Fatura não encontrada."))?;

        let items = self.repo.list_invoice_items(executor, id).await?;

        Ok(InvoiceDetail { invoice, items })
    }

    pub async fn create_invoice<'e, A>(
        &self,
        acquire: A,
        invoice_number: &str,
        client_id: Uuid,
        issue_date: NaiveDate,
        due_date: NaiveDate,
        status: DocumentStatus,
        notes: Option<&str>,
        items: Vec<LineItemInput>,
    ) -> Result<InvoiceDetail, AppError>
    where
        A: Acquire<'e, Database = Postgres>,
    {
        // Valida os itens e calcula os totais antes de tocar no banco
        let totals = totals::calculate(&items)?;

        let mut tx = acquire.begin().await?;

        if !self.repo.client_exists(&mut *tx, client_id).await? {
            return Err(AppError::NotFound("Cliente não encontrado."));
        }

        let invoice = self
            .repo
            .insert_invoice(
                &mut *tx,
                invoice_number,
                client_id,
                issue_date,
                due_date,
                status,
                notes,
                totals,
            )
            .await?;

        let mut saved_items = Vec::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            let amount = totals::line_amount(item)?;
            let saved = self
                .repo
                .insert_invoice_item(&mut *tx, invoice.id, item, amount, position as i32)
                .await?;
            saved_items.push(saved);
        }

        tx.commit().await?;

        Ok(InvoiceDetail {
            invoice,
            items: saved_items,
        })
    }

    /// Atualização de registro completo: substitui os itens e recalcula
    /// os totais armazenados. Nunca deixa os totais divergirem dos itens.
    pub async fn update_invoice<'e, A>(
        &self,
        acquire: A,
        id: Uuid,
        invoice_number: &str,
        client_id: Uuid,
        issue_date: NaiveDate,
        due_date: NaiveDate,
        status: DocumentStatus,
        notes: Option<&str>,
        items: Vec<LineItemInput>,
    ) -> Result<InvoiceDetail, AppError>
    where
        A: Acquire<'e, Database = Postgres>,
    {
        let totals = totals::calculate(&items)?;

        let mut tx = acquire.begin().await?;

        if !self.repo.client_exists(&mut *tx, client_id).await? {
            return Err(AppError::NotFound("Cliente não encontrado."));
        }

        let invoice = self
            .repo
            .update_invoice(
                &mut *tx,
                id,
                invoice_number,
                client_id,
                issue_date,
                due_date,
                status,
                notes,
                totals,
            )
            .await?
            .ok_or(AppError::NotFound("Fatura não encontrada."))?;

        self.repo.delete_invoice_items(&mut *tx, id).await?;

        let mut saved_items = Vec::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            let amount = totals::line_amount(item)?;
            let saved = self
                .repo
                .insert_invoice_item(&mut *tx, id, item, amount, position as i32)
                .await?;
            saved_items.push(saved);
        }

        tx.commit().await?;

        Ok(InvoiceDetail {
            invoice,
            items: saved_items,
        })
    }

    pub async fn delete_invoice(&self, id: Uuid) -> Result<(), AppError> {
        let rows = self.repo.delete_invoice(id).await?;
        if rows == 0 {
            return Err(AppError::NotFound("Fatura não encontrada."));
        }

        Ok(())
    }

    // =========================================================================
    //  ORÇAMENTOS
    // =========================================================================

    pub async fn list_quotations(
        &self,
        client_id: Option<Uuid>,
    ) -> Result<Vec<crate::models::billing::Quotation>, AppError> {
        self.repo.list_quotations(client_id).await
    }

    pub async fn get_quotation<'e, E>(
        &self,
        executor: E,
        id: Uuid,
    ) -> Result<QuotationDetail, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let quotation = self
            .repo
            .find_quotation(id)
            .await?
            .ok_or(AppError::NotFound("Orçamento não encontrado."))?;

        let items = self.repo.list_quotation_items(executor, id).await?;

        Ok(QuotationDetail { quotation, items })
    }

    pub async fn create_quotation<'e, A>(
        &self,
        acquire: A,
        quotation_number: &str,
        client_id: Uuid,
        issue_date: NaiveDate,
        valid_until: NaiveDate,
        status: DocumentStatus,
        notes: Option<&str>,
        items: Vec<LineItemInput>,
    ) -> Result<QuotationDetail, AppError>
    where
        A: Acquire<'e, Database = Postgres>,
    {
        let totals = totals::calculate(&items)?;

        let mut tx = acquire.begin().await?;

        if !self.repo.client_exists(&mut *tx, client_id).await? {
            return Err(AppError::NotFound("Cliente não encontrado."));
        }

        let quotation = self
            .repo
            .insert_quotation(
                &mut *tx,
                quotation_number,
                client_id,
                issue_date,
                valid_until,
                status,
                notes,
                totals,
            )
            .await?;

        let mut saved_items = Vec::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            let amount = totals::line_amount(item)?;
            let saved = self
                .repo
                .insert_quotation_item(&mut *tx, quotation.id, item, amount, position as i32)
                .await?;
            saved_items.push(saved);
        }

        tx.commit().await?;

        Ok(QuotationDetail {
            quotation,
            items: saved_items,
        })
    }

    pub async fn update_quotation<'e, A>(
        &self,
        acquire: A,
        id: Uuid,
        quotation_number: &str,
        client_id: Uuid,
        issue_date: NaiveDate,
        valid_until: NaiveDate,
        status: DocumentStatus,
        notes: Option<&str>,
        items: Vec<LineItemInput>,
    ) -> Result<QuotationDetail, AppError>
    where
        A: Acquire<'e, Database = Postgres>,
    {
        let totals = totals::calculate(&items)?;

        let mut tx = acquire.begin().await?;

        if !self.repo.client_exists(&mut *tx, client_id).await? {
            return Err(AppError::NotFound("Cliente não encontrado."));
        }

        let quotation = self
            .repo
            .update_quotation(
                &mut *tx,
                id,
                quotation_number,
                client_id,
                issue_date,
                valid_until,
                status,
                notes,
                totals,
            )
            .await?
            .ok_or(AppError::NotFound("Orçamento não encontrado."))?;

        self.repo.delete_quotation_items(&mut *tx, id).await?;

        let mut saved_items = Vec::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            let amount = totals::line_amount(item)?;
            let saved = self
                .repo
                .insert_quotation_item(&mut *tx, id, item, amount, position as i32)
                .await?;
            saved_items.push(saved);
        }

        tx.commit().await?;

        Ok(QuotationDetail {
            quotation,
            items: saved_items,
        })
    }

    pub async fn delete_quotation(&self, id: Uuid) -> Result<(), AppError> {
        let rows = self.repo.delete_quotation(id).await?;
        if rows == 0 {
            return Err(AppError::NotFound("Orçamento não encontrado."));
        }

        Ok(())
    }
}
