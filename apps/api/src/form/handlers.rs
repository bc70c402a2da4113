use axum::Json;
use serde_json::{json, Value};

use crate::form::assist::{assist_form, FormAssistResponse, FormRequest};

/// GET /form
pub async fn handle_form() -> Json<Value> {
    Json(json!({ "message": "Form endpoint" }))
}

/// POST /form/assist
pub async fn handle_form_assist(Json(form): Json<FormRequest>) -> Json<FormAssistResponse> {
    Json(assist_form(&form))
}
