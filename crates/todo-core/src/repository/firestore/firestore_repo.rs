//! Firestore Repository
//!
//! Talks to the Firestore REST API (v1) over reqwest. In the browser
//! reqwest rides on `fetch`, natively on hyper.

use async_trait::async_trait;
use reqwest::{Client, Response};

use super::document::{error_from_response, patch_mask, Document, ListDocumentsResponse, TodoFields};
use crate::config::{AppConfig, FirebaseConfig};
use crate::domain::{DomainError, DomainResult, NewTodo, Todo, TodoId, TodoPatch};
use crate::repository::TodoRepository;

pub struct FirestoreRepository {
    client: Client,
    collection_url: String,
    api_key: String,
}

impl FirestoreRepository {
    pub fn new(endpoint: &str, firebase: &FirebaseConfig, collection: &str) -> Self {
        let collection_url = format!(
            "{}/v1/projects/{}/databases/(default)/documents/{}",
            endpoint.trim_end_matches('/'),
            firebase.project_id,
            collection,
        );
        log::debug!("firestore collection at {}", collection_url);
        Self {
            client: Client::new(),
            collection_url,
            api_key: firebase.api_key.clone(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.endpoint, &config.firebase, &config.collection)
    }

    pub fn collection_url(&self) -> &str {
        &self.collection_url
    }

    fn document_url(&self, id: &TodoId) -> DomainResult<String> {
        match id {
            TodoId::Document(doc_id) => Ok(format!("{}/{}", self.collection_url, doc_id)),
            TodoId::Local(n) => Err(DomainError::InvalidInput(format!(
                "local id {} has no remote document",
                n
            ))),
        }
    }

    /// Query parameters shared by every request
    fn base_query(&self) -> Vec<(&'static str, String)> {
        if self.api_key.is_empty() {
            Vec::new()
        } else {
            vec![("key", self.api_key.clone())]
        }
    }

    async fn check(response: Response) -> DomainResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(error_from_response(status.as_u16(), &body))
    }
}

#[async_trait(?Send)]
impl TodoRepository for FirestoreRepository {
    async fn add(&self, todo: &NewTodo) -> DomainResult<TodoId> {
        let response = self
            .client
            .post(&self.collection_url)
            .query(&self.base_query())
            .json(&Document::from_new(todo))
            .send()
            .await?;
        let created: Document = Self::check(response).await?.json().await?;
        let id = created
            .document_id()
            .map(TodoId::document)
            .ok_or_else(|| DomainError::Decode("created document has no name".to_string()))?;
        log::debug!("created document {}", id);
        Ok(id)
    }

    async fn list(&self) -> DomainResult<Vec<Todo>> {
        let mut todos = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut query = self.base_query();
            if let Some(token) = page_token.take() {
                query.push(("pageToken", token));
            }
            let response = self
                .client
                .get(&self.collection_url)
                .query(&query)
                .send()
                .await?;
            let page: ListDocumentsResponse = Self::check(response).await?.json().await?;

            for doc in page.documents {
                match doc.into_todo() {
                    Ok(todo) => todos.push(todo),
                    Err(e) => log::warn!("skipping document: {}", e),
                }
            }

            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        log::debug!("listed {} todos", todos.len());
        Ok(todos)
    }

    async fn update(&self, id: &TodoId, patch: &TodoPatch) -> DomainResult<()> {
        if patch.is_empty() {
            return Ok(());
        }
        let url = self.document_url(id)?;
        let mut query = self.base_query();
        for field in patch_mask(patch) {
            query.push(("updateMask.fieldPaths", field.to_string()));
        }
        // updates must never create a document
        query.push(("currentDocument.exists", "true".to_string()));

        let body = Document {
            name: None,
            fields: TodoFields::from_patch(patch),
        };
        let response = self.client.patch(&url).query(&query).json(&body).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn delete(&self, id: &TodoId) -> DomainResult<()> {
        let url = self.document_url(id)?;
        let response = self
            .client
            .delete(&url)
            .query(&self.base_query())
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> FirebaseConfig {
        FirebaseConfig {
            api_key: "k3y".to_string(),
            project_id: "demo-todos".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_collection_url() {
        let repo = FirestoreRepository::new("https://firestore.googleapis.com/", &config(), "todos");
        assert_eq!(
            repo.collection_url(),
            "https://firestore.googleapis.com/v1/projects/demo-todos/databases/(default)/documents/todos"
        );
    }

    #[test]
    fn test_document_url_rejects_local_ids() {
        let repo = FirestoreRepository::new("http://localhost:8080", &config(), "todos");
        assert!(repo.document_url(&TodoId::document("abc")).unwrap().ends_with("/todos/abc"));
        assert!(matches!(
            repo.document_url(&TodoId::Local(1)),
            Err(DomainError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_key_only_sent_when_configured() {
        let repo = FirestoreRepository::new("http://localhost:8080", &FirebaseConfig::default(), "todos");
        assert!(repo.base_query().is_empty());
        let repo = FirestoreRepository::new("http://localhost:8080", &config(), "todos");
        assert_eq!(repo.base_query(), vec![("key", "k3y".to_string())]);
    }
}
