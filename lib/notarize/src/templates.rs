//! Template operations.

use serde::Deserialize;

use notarize_core::Method;

use crate::dispatcher::{Dispatcher, QueryValue};
use crate::outcome::Outcome;

/// Default page size for [`Templates::list`].
const DEFAULT_LIST_LIMIT: u32 = 100;

/// A reusable transaction template.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct TemplateSummary {
    pub id: String,
    pub name: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// One page of templates, with the total count for paging.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct TemplatePage {
    pub total_count: Option<u64>,
    #[serde(default)]
    pub templates: Vec<TemplateSummary>,
}

/// Template operations.
#[derive(Debug, Clone, Copy)]
pub struct Templates<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> Templates<'a> {
    pub(crate) const fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// List the templates available to this credential. Defaults:
    /// limit 100, offset 0. The total count lets the caller page
    /// through the rest.
    ///
    /// # Errors
    ///
    /// Returns an error only on transport failure.
    pub async fn list(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> notarize_core::Result<Outcome<TemplatePage>> {
        let query = [
            ("limit", QueryValue::from(limit.unwrap_or(DEFAULT_LIST_LIMIT))),
            ("offset", QueryValue::from(offset.unwrap_or(0))),
        ];
        let envelope = self
            .dispatcher
            .send(Method::Get, "templates", Some(&query), None)
            .await?;
        Ok(Outcome::with_value(envelope.ok(), envelope.decode()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_decodes_from_caller_naming() {
        let payload = serde_json::json!({
            "totalCount": 2,
            "templates": [
                {"id": "tpl-1", "name": "Affidavit", "createdAt": "2024-01-01"},
                {"id": "tpl-2", "name": "Deed"}
            ]
        });

        let page: TemplatePage = serde_json::from_value(payload).expect("decode");
        assert_eq!(page.total_count, Some(2));
        assert_eq!(page.templates.len(), 2);
        assert_eq!(
            page.templates.first().expect("first template").name.as_deref(),
            Some("Affidavit")
        );
    }
}
