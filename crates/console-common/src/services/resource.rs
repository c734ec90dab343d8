//! CRUD for any [`Resource`] collection

use crate::client::{AuthenticatedClient, ClientError, RequestBody};
use crate::resources::{body_for, validate, FormValues, Resource};
use reqwest::Method;
use serde::Deserialize;
use std::marker::PhantomData;

/// List payloads arrive bare or wrapped in `data`, and occasionally as `null`
#[derive(Deserialize)]
#[serde(untagged)]
enum ListBody<R> {
    Bare(Vec<R>),
    Wrapped { data: Vec<R> },
    Nothing(()),
}

impl<R> ListBody<R> {
    fn into_items(self) -> Vec<R> {
        match self {
            Self::Bare(items) | Self::Wrapped { data: items } => items,
            Self::Nothing(()) => Vec::new(),
        }
    }
}

pub struct ResourceService<R> {
    client: AuthenticatedClient,
    _record: PhantomData<fn() -> R>,
}

impl<R> Clone for ResourceService<R> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            _record: PhantomData,
        }
    }
}

impl<R: Resource> ResourceService<R> {
    pub fn new(client: AuthenticatedClient) -> Self {
        Self {
            client,
            _record: PhantomData,
        }
    }

    pub async fn list(&self) -> Result<Vec<R>, ClientError> {
        let body: ListBody<R> = self.client.fetch(&R::endpoints().list()).await?;
        Ok(body.into_items())
    }

    /// Validate against the current list, then create
    pub async fn create(&self, values: &FormValues, existing: &[R]) -> Result<(), ClientError> {
        validate::<R>(values, existing, None)?;
        self.client
            .send(Method::POST, &R::endpoints().create(), body_for::<R>(values))
            .await?;
        tracing::info!(resource = R::PATH, "record created");
        Ok(())
    }

    /// Validate against the current list, then replace the record's fields.
    /// The stored file is kept unless a new one was picked.
    pub async fn update(
        &self,
        id: &str,
        values: &FormValues,
        existing: &[R],
    ) -> Result<(), ClientError> {
        validate::<R>(values, existing, Some(id))?;
        self.client
            .send(Method::PUT, &R::endpoints().update(id), body_for::<R>(values))
            .await?;
        tracing::info!(resource = R::PATH, id, "record updated");
        Ok(())
    }

    /// Flip `isActive`. Collections without a toggle refuse locally.
    pub async fn toggle(&self, id: &str) -> Result<(), ClientError> {
        if !R::TOGGLE {
            return Err(ClientError::Configuration(format!(
                "{} has no active flag",
                R::TITLE
            )));
        }
        self.client
            .send(Method::PUT, &R::endpoints().toggle(id), RequestBody::Empty)
            .await?;
        tracing::info!(resource = R::PATH, id, "record status toggled");
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<(), ClientError> {
        self.client
            .send(Method::DELETE, &R::endpoints().delete(id), RequestBody::Empty)
            .await?;
        tracing::info!(resource = R::PATH, id, "record deleted");
        Ok(())
    }
}

impl<R> PartialEq for ResourceService<R> {
    fn eq(&self, other: &Self) -> bool {
        self.client == other.client
    }
}
