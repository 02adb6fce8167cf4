//! Ships extracted records to the expenses/incomes REST API.

use anyhow::{Context, Result, bail};
use gasto_core::{Expense, Income, Transaction};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::BackendSection;

pub struct BackendClient {
    http: reqwest::Client,
    expenses_url: String,
    incomes_url: String,
}

impl BackendClient {
    pub fn new(cfg: &BackendSection) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()
            .context("build http client")?;

        Ok(Self {
            http,
            expenses_url: cfg.expenses_url(),
            incomes_url: cfg.incomes_url(),
        })
    }

    pub async fn send(&self, record: &Transaction) -> Result<()> {
        match record {
            Transaction::Expense(e) => self.send_expense(e).await,
            Transaction::Income(i) => self.send_income(i).await,
        }
    }

    pub async fn send_expense(&self, expense: &Expense) -> Result<()> {
        self.post(&self.expenses_url, expense).await
    }

    pub async fn send_income(&self, income: &Income) -> Result<()> {
        self.post(&self.incomes_url, income).await
    }

    async fn post<T: Serialize>(&self, url: &str, body: &T) -> Result<()> {
        debug!(url, "posting record");
        let resp = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .with_context(|| format!("POST {url}"))?;

        let status = resp.status();
        if !status.is_success() {
            let txt = resp.text().await.unwrap_or_default();
            bail!("backend error: {status} {txt}");
        }

        info!(url, %status, "record delivered");
        Ok(())
    }
}
