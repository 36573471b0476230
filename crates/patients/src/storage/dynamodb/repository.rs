//! DynamoDB repository implementation.
//!
//! Implements `PatientRepository` from `patients_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;

use patients_core::patient::{Patient, PatientChanges};
use patients_core::storage::{Page, PageRequest, PatientRepository, Result};

use super::client::create_client;
use super::conversions::{
    exclusive_start_key, item_to_patient, next_token, patient_key, patient_to_item,
    update_attribute_names, update_attribute_values, EXISTS_CONDITION, UPDATE_EXPRESSION,
};
use super::error::{map_delete_item_error, map_sdk_error, map_update_item_error};
use crate::config::Config;

/// DynamoDB-based repository implementation.
///
/// Each method issues exactly one DynamoDB call.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new repository for the configured table and endpoint.
    pub async fn from_config(config: &Config) -> Self {
        let client = create_client(config).await;
        Self::new(client, config.table_name.clone())
    }
}

#[async_trait]
impl PatientRepository for DynamoDbRepository {
    async fn list_patients(&self, page: PageRequest) -> Result<Page<Patient>> {
        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .limit(page.limit())
            .set_exclusive_start_key(exclusive_start_key(page.next()))
            .send()
            .await
            .map_err(map_sdk_error)?;

        let items = result
            .items()
            .iter()
            .map(item_to_patient)
            .collect::<Result<Vec<_>>>()?;

        Ok(Page {
            items,
            next_token: next_token(result.last_evaluated_key()),
        })
    }

    async fn get_patient(&self, id: &str) -> Result<Option<Patient>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(patient_key(id)))
            .send()
            .await
            .map_err(map_sdk_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_patient(&item)?)),
            None => Ok(None),
        }
    }

    async fn create_patient(&self, patient: &Patient) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(patient_to_item(patient)))
            .send()
            .await
            .map_err(map_sdk_error)?;

        Ok(())
    }

    async fn update_patient(&self, id: &str, changes: &PatientChanges) -> Result<()> {
        self.client
            .update_item()
            .table_name(&self.table_name)
            .set_key(Some(patient_key(id)))
            .update_expression(UPDATE_EXPRESSION)
            .condition_expression(EXISTS_CONDITION)
            .set_expression_attribute_names(Some(update_attribute_names()))
            .set_expression_attribute_values(Some(update_attribute_values(changes)))
            .send()
            .await
            .map_err(|e| map_update_item_error(e, id))?;

        Ok(())
    }

    async fn delete_patient(&self, id: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(patient_key(id)))
            .condition_expression(EXISTS_CONDITION)
            .send()
            .await
            .map_err(|e| map_delete_item_error(e, id))?;

        Ok(())
    }
}
