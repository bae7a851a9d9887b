//! TerminusDB document-API client.
//!
//! A thin reqwest wrapper over the HTTP surface the demos call: database
//! create/delete, schema registration, and instance document
//! insert/list/replace/delete. Transaction internals, schema validation,
//! and storage belong to the server; this client only moves JSON documents
//! and surfaces failures with the response status and body.
//!
//! Every request carries basic auth; writes additionally carry an author
//! and a commit message, mirroring how the hosted catalog tracks changes.

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde_json::Value;
use std::time::Duration;

use equipment_catalog_core::models::{ManufacturerRecord, ModelKind, ModelRecord};
use equipment_catalog_core::store::CatalogStore;

use crate::config::Config;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client bound to one organization and database.
pub struct TerminusClient {
    http: reqwest::Client,
    endpoint: String,
    user: String,
    key: String,
    org: String,
    db: String,
}

impl TerminusClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            http,
            endpoint: config.server.endpoint.trim_end_matches('/').to_string(),
            user: config.server.user.clone(),
            key: config.server.key.clone(),
            org: config.server.org.clone(),
            db: config.db.name.clone(),
        })
    }

    fn db_url(&self) -> String {
        format!("{}/api/db/{}/{}", self.endpoint, self.org, self.db)
    }

    fn document_url(&self) -> String {
        format!("{}/api/document/{}/{}", self.endpoint, self.org, self.db)
    }

    /// Check that the server is up and reachable.
    pub async fn ping(&self) -> Result<()> {
        let resp = self
            .http
            .get(format!("{}/api/info", self.endpoint))
            .basic_auth(&self.user, Some(&self.key))
            .send()
            .await
            .with_context(|| format!("Cannot connect to TerminusDB at {}", self.endpoint))?;
        check(resp, "server info").await?;
        Ok(())
    }

    pub async fn database_exists(&self) -> Result<bool> {
        let resp = self
            .http
            .get(self.db_url())
            .basic_auth(&self.user, Some(&self.key))
            .send()
            .await
            .context("database lookup request failed")?;
        match resp.status() {
            StatusCode::NOT_FOUND => Ok(false),
            s if s.is_success() => Ok(true),
            _ => {
                check(resp, "database lookup").await?;
                Ok(false)
            }
        }
    }

    pub async fn create_database(&self, label: &str, description: &str) -> Result<()> {
        let resp = self
            .http
            .post(self.db_url())
            .basic_auth(&self.user, Some(&self.key))
            .json(&serde_json::json!({
                "label": label,
                "comment": description,
            }))
            .send()
            .await
            .context("database create request failed")?;
        check(resp, "database create").await?;
        log::info!("created database {}/{}", self.org, self.db);
        Ok(())
    }

    pub async fn delete_database(&self) -> Result<()> {
        let resp = self
            .http
            .delete(self.db_url())
            .basic_auth(&self.user, Some(&self.key))
            .send()
            .await
            .context("database delete request failed")?;
        check(resp, "database delete").await?;
        log::info!("deleted database {}/{}", self.org, self.db);
        Ok(())
    }

    /// Register class definitions in the schema graph.
    pub async fn insert_schema(&self, classes: &[Value]) -> Result<()> {
        let resp = self
            .http
            .post(self.document_url())
            .basic_auth(&self.user, Some(&self.key))
            .query(&[
                ("graph_type", "schema"),
                ("author", self.user.as_str()),
                ("message", "Create equipment model catalog schema"),
            ])
            .json(classes)
            .send()
            .await
            .context("schema insert request failed")?;
        check(resp, "schema insert").await?;
        log::info!("registered {} schema classes", classes.len());
        Ok(())
    }

    async fn insert_documents(&self, docs: &[Value], message: &str) -> Result<Vec<String>> {
        let resp = self
            .http
            .post(self.document_url())
            .basic_auth(&self.user, Some(&self.key))
            .query(&[
                ("graph_type", "instance"),
                ("author", self.user.as_str()),
                ("message", message),
            ])
            .json(docs)
            .send()
            .await
            .context("document insert request failed")?;
        let resp = check(resp, "document insert").await?;
        let ids: Vec<String> = resp
            .json()
            .await
            .context("document insert returned malformed id list")?;
        Ok(ids.iter().map(|iri| short_id(iri)).collect())
    }

    async fn get_documents(&self, doc_type: Option<&str>) -> Result<Vec<Value>> {
        let mut query = vec![("graph_type", "instance"), ("as_list", "true")];
        if let Some(t) = doc_type {
            query.push(("type", t));
        }
        let resp = self
            .http
            .get(self.document_url())
            .basic_auth(&self.user, Some(&self.key))
            .query(&query)
            .send()
            .await
            .context("document list request failed")?;
        let resp = check(resp, "document list").await?;
        let docs: Vec<Value> = resp
            .json()
            .await
            .context("document list returned malformed JSON")?;
        Ok(docs)
    }

    async fn get_document(&self, id: &str) -> Result<Option<Value>> {
        let resp = self
            .http
            .get(self.document_url())
            .basic_auth(&self.user, Some(&self.key))
            .query(&[("graph_type", "instance"), ("id", id)])
            .send()
            .await
            .context("document get request failed")?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let resp = check(resp, "document get").await?;
        let doc: Value = resp
            .json()
            .await
            .context("document get returned malformed JSON")?;
        Ok(Some(doc))
    }

    async fn replace_document(&self, doc: &Value, message: &str) -> Result<()> {
        let resp = self
            .http
            .put(self.document_url())
            .basic_auth(&self.user, Some(&self.key))
            .query(&[
                ("graph_type", "instance"),
                ("author", self.user.as_str()),
                ("message", message),
            ])
            .json(&vec![doc.clone()])
            .send()
            .await
            .context("document replace request failed")?;
        check(resp, "document replace").await?;
        Ok(())
    }

    async fn delete_document(&self, id: &str, message: &str) -> Result<bool> {
        let resp = self
            .http
            .delete(self.document_url())
            .basic_auth(&self.user, Some(&self.key))
            .query(&[
                ("graph_type", "instance"),
                ("author", self.user.as_str()),
                ("message", message),
                ("id", id),
            ])
            .send()
            .await
            .context("document delete request failed")?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        check(resp, "document delete").await?;
        Ok(true)
    }
}

/// Strip the server's IRI prefix, keeping the `Type/key` form used
/// throughout the catalog.
fn short_id(iri: &str) -> String {
    iri.rsplit_once("/data/")
        .map(|(_, rest)| rest.to_string())
        .unwrap_or_else(|| iri.to_string())
}

async fn check(resp: Response, what: &str) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    bail!("TerminusDB {what} failed ({status}): {body}");
}

fn model_type_names() -> [&'static str; 5] {
    ModelKind::all().map(|k| k.type_name())
}

#[async_trait]
impl CatalogStore for TerminusClient {
    async fn insert_models(&self, models: &[ModelRecord]) -> Result<Vec<String>> {
        let docs: Vec<Value> = models
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<_, _>>()
            .context("model record does not serialize to a document")?;
        self.insert_documents(&docs, "Add equipment model records")
            .await
    }

    async fn list_models(&self, kind: Option<ModelKind>) -> Result<Vec<ModelRecord>> {
        let docs = match kind {
            Some(k) => self.get_documents(Some(k.type_name())).await?,
            None => {
                let known = model_type_names();
                self.get_documents(None)
                    .await?
                    .into_iter()
                    .filter(|d| {
                        d.get("@type")
                            .and_then(Value::as_str)
                            .map_or(false, |t| known.contains(&t))
                    })
                    .collect()
            }
        };
        docs.into_iter()
            .map(|d| {
                serde_json::from_value(d).context("stored document is not a valid model record")
            })
            .collect()
    }

    async fn get_model(&self, id: &str) -> Result<Option<ModelRecord>> {
        match self.get_document(id).await? {
            Some(doc) => Ok(Some(serde_json::from_value(doc).with_context(|| {
                format!("document {id} is not a valid model record")
            })?)),
            None => Ok(None),
        }
    }

    async fn replace_model(&self, model: &ModelRecord) -> Result<()> {
        if model.id.is_empty() {
            bail!("cannot replace a model record without an id");
        }
        let doc = serde_json::to_value(model)
            .context("model record does not serialize to a document")?;
        self.replace_document(&doc, &format!("Replace {}", model.id))
            .await
    }

    async fn delete_model(&self, id: &str) -> Result<bool> {
        self.delete_document(id, &format!("Delete {id}")).await
    }

    async fn insert_manufacturers(
        &self,
        manufacturers: &[ManufacturerRecord],
    ) -> Result<Vec<String>> {
        let docs: Vec<Value> = manufacturers
            .iter()
            .map(|m| {
                let mut doc = serde_json::to_value(m)
                    .context("manufacturer record does not serialize to a document")?;
                doc["@type"] = Value::String("ManufacturerCatalog".to_string());
                Ok(doc)
            })
            .collect::<Result<_>>()?;
        self.insert_documents(&docs, "Add manufacturers").await
    }

    async fn list_manufacturers(&self) -> Result<Vec<ManufacturerRecord>> {
        self.get_documents(Some("ManufacturerCatalog"))
            .await?
            .into_iter()
            .map(|d| {
                serde_json::from_value(d)
                    .context("stored document is not a valid manufacturer record")
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::short_id;

    #[test]
    fn short_id_strips_iri_prefix() {
        assert_eq!(
            short_id("terminusdb:///data/TractorModel/abc123"),
            "TractorModel/abc123"
        );
        assert_eq!(short_id("TractorModel/abc123"), "TractorModel/abc123");
    }
}
