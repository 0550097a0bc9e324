use crate::shared::api_utils::api_url;
use crate::system::auth::storage;
use contracts::domain::a001_product::{
    CreateProductRequest, CreateProductResponse, ProductErrorResponse,
};
use contracts::domain::a002_category::Category;
use gloo_net::http::{Request, RequestBuilder};

/// Result of a product submission as seen by the form
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Accepted by the API
    Created(CreateProductResponse),
    /// Answered with an error descriptor (validation, credentials)
    Rejected(ProductErrorResponse),
    /// Transport failure or an unreadable answer
    Failed(String),
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::basic_auth_header() {
        Some(header) => builder.header("Authorization", &header),
        None => builder,
    }
}

/// Fetch the category list for the category dropdown
pub async fn fetch_categories() -> Result<Vec<Category>, String> {
    let response = with_auth(Request::get(&api_url("/api/product/categories")))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch categories: {}", response.status()));
    }

    response
        .json::<Vec<Category>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Send the assembled product to the API
pub async fn submit_product(request: &CreateProductRequest) -> SubmitOutcome {
    let prepared = match with_auth(Request::post(&api_url("/api/product"))).json(request) {
        Ok(r) => r,
        Err(e) => return SubmitOutcome::Failed(format!("Failed to serialize request: {}", e)),
    };

    let response = match prepared.send().await {
        Ok(r) => r,
        Err(e) => return SubmitOutcome::Failed(format!("Failed to send request: {}", e)),
    };

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    classify_response(status, &body)
}

pub fn classify_response(status: u16, body: &str) -> SubmitOutcome {
    if (200..300).contains(&status) {
        return match serde_json::from_str::<CreateProductResponse>(body) {
            Ok(created) => SubmitOutcome::Created(created),
            Err(e) => SubmitOutcome::Failed(format!("Failed to parse response: {}", e)),
        };
    }

    match serde_json::from_str::<ProductErrorResponse>(body) {
        Ok(rejected) => SubmitOutcome::Rejected(rejected),
        Err(_) if body.trim().is_empty() => SubmitOutcome::Failed(format!("HTTP {}", status)),
        Err(_) => SubmitOutcome::Failed(format!("HTTP {}: {}", status, body.trim())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::ProductStatus;

    #[test]
    fn test_created() {
        let outcome = classify_response(201, r#"{"productId":"abc","status":"draft"}"#);
        assert_eq!(
            outcome,
            SubmitOutcome::Created(CreateProductResponse {
                product_id: "abc".into(),
                status: ProductStatus::Draft,
            })
        );
    }

    #[test]
    fn test_rejected_carries_field_errors() {
        let outcome = classify_response(
            422,
            r#"{"message":"Please correct the highlighted fields","fieldErrors":{"productName":"This field is required"}}"#,
        );
        let SubmitOutcome::Rejected(body) = outcome else {
            panic!("expected rejection");
        };
        assert_eq!(body.message, "Please correct the highlighted fields");
        assert_eq!(body.field_errors["productName"], "This field is required");
    }

    #[test]
    fn test_unreadable_bodies_fail() {
        assert_eq!(
            classify_response(502, ""),
            SubmitOutcome::Failed("HTTP 502".into())
        );
        assert_eq!(
            classify_response(500, "upstream down"),
            SubmitOutcome::Failed("HTTP 500: upstream down".into())
        );
        assert!(matches!(classify_response(201, "ok"), SubmitOutcome::Failed(_)));
    }
}
